//! Adapters for emitting redacted values through `slog`.
//!
//! `Redacted<T>` implements `slog::Value` by emitting the redaction message as
//! a plain string, so a container can be passed directly as a key-value pair:
//!
//! ```ignore
//! info!(logger, "connected"; "password" => &config.password);
//! ```
//!
//! The payload is never handed to the serializer, and `T` does not need to
//! implement any `slog` trait.

use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{container::Redacted, message::redacted_message};

/// Marker trait for types whose `slog` integration always emits redacted output.
///
/// This is implemented for [`Redacted`] and references to it, and not for raw
/// types, so it can be used as a bound on logging helpers that must never
/// receive a raw secret.
///
/// ```compile_fail
/// use redacted::slog::SlogRedacted;
///
/// fn assert_slog_redacted<T: SlogRedacted>() {}
///
/// assert_slog_redacted::<String>();
/// ```
pub trait SlogRedacted: SlogValue {}

impl<T: SlogRedacted + ?Sized> SlogRedacted for &T {}

impl<T> SlogValue for Redacted<T> {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_str(key, redacted_message())
    }
}

impl<T> SlogRedacted for Redacted<T> {}
