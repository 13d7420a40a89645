//! Adapters for emitting redacted values through `tracing`.
//!
//! `tracing::Value` is sealed, so containers reach `tracing` through their
//! `Display` and `Debug` impls, both of which render the redaction message:
//!
//! ```ignore
//! tracing::info!(password = %config.password, "connected");
//! tracing::info!(?config.password, "connected");
//! ```
//!
//! - **`TracingRedactedExt`**: explicit `tracing_redacted()` adapter that
//!   produces a display field without relying on the `%` sigil.
//! - **`valuable::Valuable`** (requires `tracing-valuable` feature): structured
//!   inspection yields a string holding the redaction message.

use tracing::field::{DisplayValue, display};

use crate::{container::Redacted, message::redacted_message};

/// Marker trait for types whose `tracing` integration always emits redacted output.
///
/// Implemented only for [`Redacted`], never as a blanket impl for raw types.
pub trait TracingRedacted {}

impl<T> TracingRedacted for Redacted<T> {}

impl<T: TracingRedacted + ?Sized> TracingRedacted for &T {}

/// Extension trait for logging redacted values as display fields.
pub trait TracingRedactedExt: TracingRedacted {
    /// Returns a `tracing` display field holding the redaction message.
    fn tracing_redacted(&self) -> DisplayValue<&'static str>;
}

impl<T> TracingRedactedExt for Redacted<T> {
    fn tracing_redacted(&self) -> DisplayValue<&'static str> {
        display(redacted_message())
    }
}

#[cfg(feature = "tracing-valuable")]
impl<T> valuable::Valuable for Redacted<T> {
    fn as_value(&self) -> valuable::Value<'_> {
        valuable::Value::String(redacted_message())
    }

    fn visit(&self, visit: &mut dyn valuable::Visit) {
        visit.visit_value(self.as_value());
    }
}
