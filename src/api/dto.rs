//! Request bodies for the one-shot endpoint.

use serde::{Deserialize, Serialize};

/// Body of `POST /send`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitPayload {
    /// Current value of the `autocomplete` field.
    pub word: String,
}

impl SubmitPayload {
    /// Wraps a word for submission.
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        Self { word: word.into() }
    }
}
