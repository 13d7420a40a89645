//! An opaque wrapper that keeps sensitive values out of text and serialized output.
//!
//! [`Redacted<T>`] holds a single value and renders as the process-wide
//! redaction message (`<redacted>` unless `REDACTED_MESSAGE` is set) through
//! every representation hook: `Display`, `Debug`, serde serialization, JSON
//! conversion, and the `slog` / `tracing` adapters. The payload is reachable
//! only through [`Redacted::unwrap`] and [`Redacted::expose`], and the
//! container can never be modified after construction.
//!
//! What this crate does:
//! - wraps values of any type without copying them
//! - renders the redaction message wherever the value would be formatted
//! - projects payloads into new containers, synchronously or asynchronously
//!
//! What it does not do:
//! - encrypt, zeroize, or otherwise protect the payload in memory
//! - perform I/O or logging on its own
//!
//! ```
//! use redacted::Redacted;
//!
//! let password = Redacted::wrap(123);
//! assert_eq!(password.to_string(), redacted::redacted_message());
//! assert_eq!(Redacted::unwrap(password), 123);
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::future_not_send
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
mod container;
#[cfg(feature = "json")]
mod json;
mod message;
#[cfg(feature = "serde")]
mod serde_impl;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "tracing")]
pub mod tracing;

pub use container::{Redacted, RedactedString};
pub use message::{DEFAULT_REDACTED_MESSAGE, REDACTED_MESSAGE_ENV, redacted_message};
#[cfg(feature = "slog")]
pub use self::slog::SlogRedacted;
#[cfg(feature = "tracing")]
pub use self::tracing::{TracingRedacted, TracingRedactedExt};
