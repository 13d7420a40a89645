//! serde integration.
//!
//! Serialization is deliberately one-way: a `Redacted<T>` always serializes as
//! a string holding the redaction message, whatever `T` is and whatever the
//! target format. Deserialization reads a plain `T` and wraps it, so redacted
//! fields can be loaded from configuration without exposing them afterwards.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{container::Redacted, message::redacted_message};

impl<T> Serialize for Redacted<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(redacted_message())
    }
}

impl<'de, T> Deserialize<'de> for Redacted<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Redacted::wrap)
    }
}
