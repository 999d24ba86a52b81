//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! An [`Outcome<T>`] propagates the result of an operation as data instead
//! of an unwinding error path: a success value, or one of a closed set of
//! failure kinds ([`Status`]) carrying plain messages and structured
//! validation errors. Combinators transform the success channel and pass
//! failures through untouched.
//!
//! # Examples
//!
//! ## Factories and Status
//!
//! ```
//! use outcome_rail::{Outcome, Status, ValidationError};
//!
//! let found = Outcome::success(42);
//! assert_eq!(found.status(), Status::Ok);
//!
//! let rejected = Outcome::<i32>::invalid(ValidationError::new("Name is required"));
//! assert_eq!(rejected.status(), Status::Invalid);
//! assert_eq!(rejected.value(), None);
//! ```
//!
//! ## Derived Status
//!
//! ```
//! use outcome_rail::{Outcome, Status, ValidationError};
//!
//! let mut outcome = Outcome::success(());
//! outcome.add_validation_error(ValidationError::new("bad field"));
//! assert_eq!(outcome.status(), Status::Invalid);
//!
//! outcome.add_error("db down");
//! assert_eq!(outcome.status(), Status::Error);
//!
//! outcome.clear_errors();
//! outcome.clear_validation_errors();
//! assert_eq!(outcome.status(), Status::Ok);
//! ```
//!
//! ## Railway Chaining
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let outcome = Outcome::success(123)
//!     .bind(|n| Outcome::success(n.to_string()))
//!     .map(|s| s.len());
//! assert_eq!(outcome.into_value(), Some(3));
//! ```

/// Generic-erased inspection of outcomes
pub mod any;
/// Conversions between `core::result::Result` and `Outcome`
pub mod convert;
/// The core status-carrying container and its combinators
pub mod outcome;
/// Pagination decorator over `Outcome`
pub mod paged;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The closed set of outcome kinds
pub mod status;
/// Value records carried by outcomes
pub mod types;

/// Async combinators over outcome-returning futures (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Tracing integration - failure tap logging (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use any::AnyOutcome;
pub use convert::*;
pub use outcome::Outcome;
pub use paged::PagedOutcome;
pub use status::Status;
pub use types::{ErrorList, ErrorVec, PagedInfo, ValidationError, ValidationSeverity};

#[cfg(feature = "tracing")]
pub use tracing_ext::TraceOutcome;
