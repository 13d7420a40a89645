//! The [`Redacted`] container.
//!
//! This module provides the wrapper type and its operations:
//!
//! - **construction**: [`Redacted::wrap`], `From<T>`
//! - **extraction**: [`Redacted::unwrap`], [`Redacted::expose`]
//! - **`transform`**: sync, async and fallible projections into new containers
//! - **`fmt`**: `Display` / `Debug`, both rendering only the redaction message
//! - **`cmp`**: equality, ordering and hashing delegated to the payload
//!
//! Serialization and logging hooks live in the feature-gated modules at the
//! crate root.

mod cmp;
mod fmt;
mod transform;

// =============================================================================
// Redacted - Opaque holder for a sensitive value
// =============================================================================

/// Opaque, immutable holder for a sensitive value.
///
/// Every way of rendering a `Redacted<T>` (`Display`, `Debug`, serde
/// serialization and the logging adapters) produces the process-wide
/// [`redacted_message`](crate::redacted_message), never the payload. The only
/// ways to reach the payload are [`Redacted::unwrap`] and [`Redacted::expose`],
/// which makes every access visible at the call site.
///
/// The payload is private and there is no way to obtain a mutable reference
/// to it, so a container never changes after construction:
///
/// ```compile_fail
/// use redacted::Redacted;
///
/// let mut secret = Redacted::wrap("test".to_string());
/// secret.value = "changed".to_string();
/// ```
///
/// ```compile_fail
/// use redacted::Redacted;
///
/// let mut secret = Redacted::wrap("test".to_string());
/// let inner: &mut String = &mut *secret;
/// inner.push_str("changed");
/// ```
///
/// Transforming produces a new container and leaves the original intact:
///
/// ```
/// use redacted::Redacted;
///
/// let secret = Redacted::wrap("secret");
/// let length = secret.transform(|s| s.len());
///
/// assert_eq!(length.to_string(), redacted::redacted_message());
/// assert_eq!(Redacted::unwrap(length), 6);
/// assert_eq!(*secret.expose(), "secret");
/// ```
#[derive(Clone, Copy, Default)]
#[must_use]
pub struct Redacted<T> {
    value: T,
}

/// Convenience alias for the common case of redacted strings.
pub type RedactedString = Redacted<String>;

impl<T> Redacted<T> {
    /// Wraps `value`, taking ownership without copying it.
    pub const fn wrap(value: T) -> Self {
        Self { value }
    }

    /// Alias for [`Redacted::wrap`].
    pub const fn new(value: T) -> Self {
        Self::wrap(value)
    }

    /// Consumes the container and returns the payload unchanged.
    ///
    /// This is an associated function rather than a method so that every
    /// extraction reads as `Redacted::unwrap(value)`.
    ///
    /// ```
    /// use redacted::Redacted;
    ///
    /// assert_eq!(Redacted::unwrap(Redacted::wrap(123)), 123);
    /// ```
    #[must_use]
    pub fn unwrap(this: Self) -> T {
        this.value
    }

    /// Borrows the payload.
    ///
    /// Repeated calls return the same reference, so identity can be compared
    /// with [`std::ptr::eq`].
    #[must_use]
    pub const fn expose(&self) -> &T {
        &self.value
    }
}

impl<T> Redacted<Redacted<T>> {
    /// Removes one layer of nesting.
    pub fn flatten(self) -> Redacted<T> {
        self.value
    }
}

impl<T> From<T> for Redacted<T> {
    fn from(value: T) -> Self {
        Self::wrap(value)
    }
}
