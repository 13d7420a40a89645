//! Projections from one container into another.
//!
//! Rust cannot dispatch on whether a callback returns a value or a future, so
//! each calling convention is its own method:
//!
//! | callback | borrowing | consuming |
//! |----------|-----------|-----------|
//! | `U` | [`Redacted::transform`] | [`Redacted::map`] |
//! | `Result<U, E>` | [`Redacted::try_transform`] | |
//! | `Future<Output = U>` | [`Redacted::transform_async`] | [`Redacted::map_async`] |
//! | `Future<Output = Result<U, E>>` | [`Redacted::try_transform_async`] | |
//!
//! None of them catch anything: a panic in the callback unwinds through the
//! call, and errors are returned exactly as the callback produced them.

use std::future::Future;

use super::Redacted;

impl<T> Redacted<T> {
    /// Applies `f` to the payload and wraps the result in a new container.
    ///
    /// The original container is left untouched.
    ///
    /// ```
    /// use redacted::Redacted;
    ///
    /// let secret = Redacted::wrap("secret".to_string());
    /// let length = secret.transform(String::len);
    /// assert_eq!(Redacted::unwrap(length), 6);
    /// ```
    pub fn transform<U, F>(&self, f: F) -> Redacted<U>
    where
        F: FnOnce(&T) -> U,
    {
        Redacted::wrap(f(self.expose()))
    }

    /// Like [`Redacted::transform`] for projections that can fail.
    ///
    /// On error no container is produced and the callback's error is returned
    /// unchanged.
    ///
    /// ```
    /// use redacted::Redacted;
    ///
    /// let raw = Redacted::wrap("123");
    /// let parsed = raw.try_transform(|s| s.parse::<i64>()).unwrap();
    /// assert_eq!(Redacted::unwrap(parsed), 123);
    ///
    /// let raw = Redacted::wrap("not a number");
    /// assert!(raw.try_transform(|s| s.parse::<i64>()).is_err());
    /// ```
    pub fn try_transform<U, E, F>(&self, f: F) -> Result<Redacted<U>, E>
    where
        F: FnOnce(&T) -> Result<U, E>,
    {
        f(self.expose()).map(Redacted::wrap)
    }

    /// Applies an asynchronous projection to the payload.
    ///
    /// The returned future suspends only where the callback's future
    /// suspends, and resolves to a new container once it completes.
    ///
    /// ```
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// use redacted::Redacted;
    ///
    /// let secret = Redacted::wrap("hello".to_string());
    /// let upper = secret.transform_async(|s| async move { s.to_uppercase() }).await;
    /// assert_eq!(Redacted::unwrap(upper), "HELLO");
    /// # });
    /// ```
    pub async fn transform_async<'a, U, F, Fut>(&'a self, f: F) -> Redacted<U>
    where
        F: FnOnce(&'a T) -> Fut,
        Fut: Future<Output = U>,
    {
        Redacted::wrap(f(self.expose()).await)
    }

    /// Like [`Redacted::transform_async`] for projections that can fail.
    pub async fn try_transform_async<'a, U, E, F, Fut>(
        &'a self,
        f: F,
    ) -> Result<Redacted<U>, E>
    where
        F: FnOnce(&'a T) -> Fut,
        Fut: Future<Output = Result<U, E>>,
    {
        f(self.expose()).await.map(Redacted::wrap)
    }

    /// Consumes the container and applies `f` to the owned payload.
    ///
    /// Use this instead of [`Redacted::transform`] when the payload should be
    /// moved into the projection rather than borrowed.
    pub fn map<U, F>(self, f: F) -> Redacted<U>
    where
        F: FnOnce(T) -> U,
    {
        Redacted::wrap(f(Self::unwrap(self)))
    }

    /// Consuming counterpart of [`Redacted::transform_async`].
    pub async fn map_async<U, F, Fut>(self, f: F) -> Redacted<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        Redacted::wrap(f(Self::unwrap(self)).await)
    }

    /// Borrows the payload into a new container.
    ///
    /// The result is still redacted, so it can be handed to code that expects
    /// a `Redacted<&T>` without giving up ownership of the original.
    pub const fn by_ref(&self) -> Redacted<&T> {
        Redacted::wrap(self.expose())
    }
}
