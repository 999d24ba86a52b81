//! Async prelude - sync prelude plus the future combinators (requires the
//! `async` feature).
//!
//! ```
//! use outcome_rail::prelude_async::*;
//! ```

pub use crate::async_ext::{FutureOutcomeExt, TransformFuture};
pub use crate::prelude::*;
