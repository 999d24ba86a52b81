//! Async extensions for outcome-rail.
//!
//! Combinators over outcome-returning futures, preserving the same
//! short-circuit semantics as the sync surface: a failure settles the chain
//! and no later transformation runs.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.3", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use outcome_rail::prelude_async::*;
//!
//! async fn fetch_user_name(id: u64) -> Outcome<String> {
//!     fetch_user(id)
//!         .map_outcome(|user| user.name)
//!         .await
//! }
//! ```

mod future_ext;
mod transform_future;

pub use future_ext::FutureOutcomeExt;
pub use transform_future::TransformFuture;
