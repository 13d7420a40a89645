//! `Display` and `Debug` for [`Redacted`].
//!
//! Both render the redaction message and nothing else. Formatter flags such
//! as width and alignment are applied to the message, and alternate `Debug`
//! (`{:#?}`) is identical to plain `Debug`, so the output never reveals the
//! payload's type or shape.

use std::fmt;

use super::Redacted;
use crate::message::redacted_message;

impl<T> fmt::Display for Redacted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(redacted_message())
    }
}

impl<T> fmt::Debug for Redacted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(redacted_message())
    }
}
