//! WebSocket message types: inbound render payloads and outbound
//! notifications.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ClientError;

/// One entry of the most-frequent-values aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequentValue {
    /// The aggregated word.
    pub key: String,
    /// Number of documents holding the word.
    #[serde(deserialize_with = "deserialize_count")]
    pub doc_count: u64,
}

/// Accepts a non-negative integer, also when encoded as an integral float
/// such as `2.0`.
fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(count) = number.as_u64() {
        return Ok(count);
    }
    match number.as_f64() {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(f) if f >= 0.0 && f.fract() == 0.0 && f < u64::MAX as f64 => Ok(f as u64),
        _ => Err(D::Error::custom(format!(
            "doc_count must be a non-negative integer, got {number}"
        ))),
    }
}

impl fmt::Display for FrequentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.doc_count)
    }
}

/// Server → client payload sent in reply to every frame.
///
/// ```json
/// {
///   "suggestions": ["Apple", "Grape"],
///   "frequent_values": [{"key": "Apple", "doc_count": 3}]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Matching suggestions; `null` or absent when nothing matched.
    #[serde(default)]
    pub suggestions: Option<Vec<String>>,
    /// Most frequent values, in server order.
    pub frequent_values: Vec<FrequentValue>,
}

impl InboundMessage {
    /// Field that must be present and non-null on every inbound payload.
    pub const FREQUENT_VALUES: &'static str = "frequent_values";

    /// Parses a text frame into an [`InboundMessage`].
    ///
    /// # Errors
    ///
    /// - [`ClientError::MalformedPayload`] if the frame is not JSON, is not a
    ///   JSON object, or a field has the wrong type.
    /// - [`ClientError::MissingField`] if `frequent_values` is absent or
    ///   `null`.
    pub fn parse(text: &str) -> Result<Self, ClientError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| ClientError::MalformedPayload(e.to_string()))?;

        let Some(object) = value.as_object() else {
            return Err(ClientError::MalformedPayload(
                "expected a JSON object".to_string(),
            ));
        };

        if object
            .get(Self::FREQUENT_VALUES)
            .is_none_or(Value::is_null)
        {
            return Err(ClientError::MissingField(Self::FREQUENT_VALUES));
        }

        serde_json::from_value(value).map_err(|e| ClientError::MalformedPayload(e.to_string()))
    }

    /// Suggestions to render, empty when the server sent none.
    #[must_use]
    pub fn suggestions(&self) -> &[String] {
        self.suggestions.as_deref().unwrap_or_default()
    }
}

/// Fixed signal frames sent on the persistent connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// Sent once when the connection opens.
    PageLoaded,
    /// Sent on every send-button click.
    WordSent,
}

impl Notification {
    /// Returns the exact text frame for this notification.
    ///
    /// `PageLoaded` is a small JSON object; `WordSent` is a bare string.
    #[must_use]
    pub fn frame(self) -> String {
        match self {
            Self::PageLoaded => serde_json::json!({ "message": "Page loaded" }).to_string(),
            Self::WordSent => "Word send".to_string(),
        }
    }
}
