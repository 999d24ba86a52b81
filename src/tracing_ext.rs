//! Tracing integration for outcome-rail.
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.3", features = ["tracing"] }
//! ```

use crate::outcome::Outcome;
use crate::paged::PagedOutcome;

/// Tap-style logging of failure outcomes.
///
/// `trace_failure` emits a `tracing` event for any non-success outcome and
/// hands the outcome back unchanged, so it slots into a combinator chain:
///
/// ```rust,ignore
/// let outcome = lookup_widget(id)
///     .trace_failure("lookup_widget")
///     .map(render);
/// ```
pub trait TraceOutcome: Sized {
    /// Emits a warning event if the outcome is a failure.
    ///
    /// The event carries the operation name, the status, and the failure
    /// messages. Success outcomes emit nothing.
    fn trace_failure(self, operation: &str) -> Self;
}

impl<T> TraceOutcome for Outcome<T> {
    fn trace_failure(self, operation: &str) -> Self {
        if !self.is_success() {
            tracing::warn!(
                operation,
                status = %self.status(),
                errors = ?self.errors(),
                validation_errors = self.validation_errors().len(),
                "operation failed"
            );
        }
        self
    }
}

impl<T> TraceOutcome for PagedOutcome<T> {
    fn trace_failure(self, operation: &str) -> Self {
        if !self.is_success() {
            tracing::warn!(
                operation,
                status = %self.status(),
                errors = ?self.errors(),
                validation_errors = self.validation_errors().len(),
                "operation failed"
            );
        }
        self
    }
}
