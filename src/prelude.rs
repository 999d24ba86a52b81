//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`Outcome`], [`Status`], [`ValidationError`],
//!   [`ValidationSeverity`], [`ErrorList`], [`PagedInfo`], [`PagedOutcome`]
//! - **Traits**: [`AnyOutcome`]
//! - **Conversions**: [`result_to_outcome`], [`outcome_to_result`],
//!   [`collect_outcome`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn find_widget(id: u64) -> Outcome<String> {
//!     if id == 0 {
//!         return Outcome::not_found();
//!     }
//!     Outcome::success(format!("widget-{}", id))
//! }
//!
//! assert!(find_widget(7).is_success());
//! assert_eq!(find_widget(0).status(), Status::NotFound);
//! ```

pub use crate::any::AnyOutcome;
pub use crate::convert::{collect_outcome, outcome_to_result, result_to_outcome};
pub use crate::outcome::Outcome;
pub use crate::paged::PagedOutcome;
pub use crate::status::Status;
pub use crate::types::{ErrorList, PagedInfo, ValidationError, ValidationSeverity};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::TraceOutcome;
