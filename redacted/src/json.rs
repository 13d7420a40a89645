//! `serde_json::Value` conversion.
//!
//! A container converts to `Value::String(message)`. This is the same value
//! `serde_json::to_value` produces through the `Serialize` impl, but it is
//! infallible and does not go through a serializer.

use serde_json::Value as JsonValue;

use crate::{container::Redacted, message::redacted_message};

impl<T> Redacted<T> {
    /// Returns the JSON representation: a string holding the redaction message.
    ///
    /// ```
    /// use redacted::Redacted;
    ///
    /// let api_key = Redacted::wrap("sk_live_abc123");
    /// assert_eq!(
    ///     api_key.to_json(),
    ///     serde_json::Value::String(redacted::redacted_message().to_string())
    /// );
    /// ```
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn to_json(&self) -> JsonValue {
        JsonValue::String(redacted_message().to_string())
    }
}

impl<T> From<&Redacted<T>> for JsonValue {
    fn from(redacted: &Redacted<T>) -> Self {
        redacted.to_json()
    }
}

impl<T> From<Redacted<T>> for JsonValue {
    fn from(redacted: Redacted<T>) -> Self {
        redacted.to_json()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn to_json_matches_serializer_output() {
        let redacted = Redacted::wrap(vec![1, 2, 3]);
        assert_eq!(redacted.to_json(), serde_json::to_value(&redacted).unwrap());
    }

    #[test]
    fn embeds_into_json_macro_as_message() {
        let token = Redacted::wrap("tok_abc123");
        let event = json!({ "user": "alice", "token": token });

        assert_eq!(event["user"], "alice");
        assert_eq!(event["token"], redacted_message());
        assert!(!event.to_string().contains("tok_abc123"));
    }

    #[test]
    fn converts_through_from() {
        let value: JsonValue = (&Redacted::wrap(42)).into();
        assert_eq!(value, JsonValue::String(redacted_message().to_string()));

        let value = JsonValue::from(Redacted::wrap(()));
        assert!(value.is_string());
    }
}
