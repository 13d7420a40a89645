//! The process-wide redaction message.
//!
//! Every representation hook on [`Redacted`](crate::Redacted) renders this
//! message instead of the payload. It is resolved once, on first use, from the
//! `REDACTED_MESSAGE` environment variable and falls back to
//! [`DEFAULT_REDACTED_MESSAGE`] when the variable is unset.
//!
//! The resolved value never changes for the life of the process. Setting the
//! variable after the first resolution has no effect.

use std::{env::VarError, sync::OnceLock};

/// Message used when no override is configured.
pub const DEFAULT_REDACTED_MESSAGE: &str = "<redacted>";

/// Environment variable read to override the redaction message.
pub const REDACTED_MESSAGE_ENV: &str = "REDACTED_MESSAGE";

static MESSAGE: OnceLock<Box<str>> = OnceLock::new();

/// Returns the redaction message for this process.
///
/// The first call reads [`REDACTED_MESSAGE_ENV`]; every later call, from any
/// thread, returns the same string.
///
/// ```
/// let message = redacted::redacted_message();
/// assert_eq!(message, redacted::redacted_message());
/// ```
pub fn redacted_message() -> &'static str {
    MESSAGE.get_or_init(|| resolve_message(std::env::var(REDACTED_MESSAGE_ENV)).into_boxed_str())
}

/// Applies the override rules to the raw environment lookup.
///
/// An override that is present but empty is honored as-is. An override that
/// is not valid Unicode cannot be rendered, so the default is used instead.
pub(crate) fn resolve_message(lookup: Result<String, VarError>) -> String {
    match lookup {
        Ok(message) => message,
        Err(VarError::NotPresent) => DEFAULT_REDACTED_MESSAGE.to_string(),
        Err(VarError::NotUnicode(_)) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                variable = REDACTED_MESSAGE_ENV,
                fallback = DEFAULT_REDACTED_MESSAGE,
                "ignoring redaction message override that is not valid unicode"
            );
            DEFAULT_REDACTED_MESSAGE.to_string()
        }
    }
}
