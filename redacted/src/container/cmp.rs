//! Comparison and hashing for [`Redacted`].
//!
//! Two containers are equal when their payloads are equal. Failed assertions
//! format both sides through `Debug`, which only ever prints the redaction
//! message, so a mismatch never echoes the payloads.

use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use super::Redacted;

impl<T: PartialEq<U>, U> PartialEq<Redacted<U>> for Redacted<T> {
    fn eq(&self, other: &Redacted<U>) -> bool {
        self.expose() == other.expose()
    }
}

impl<T: Eq> Eq for Redacted<T> {}

impl<T: PartialOrd> PartialOrd for Redacted<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.expose().partial_cmp(other.expose())
    }
}

impl<T: Ord> Ord for Redacted<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.expose().cmp(other.expose())
    }
}

impl<T: Hash> Hash for Redacted<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.expose().hash(state);
    }
}
