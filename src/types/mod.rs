//! Value types carried by an [`Outcome`](crate::Outcome).
//!
//! Plain records with structural equality: validation failures, the
//! plain-message error carrier, and pagination metadata. None of them has an
//! independent lifecycle; they exist to be embedded in or extracted from an
//! outcome.
use smallvec::SmallVec;

pub mod error_list;
pub mod paged_info;
pub mod validation_error;

pub use error_list::*;
pub use paged_info::*;
pub use validation_error::*;

/// SmallVec-backed collection used for error and validation-error lists.
///
/// Uses inline storage for up to 1 elements to avoid heap allocations
/// in the common case of a single failure message.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
