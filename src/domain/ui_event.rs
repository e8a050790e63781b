//! Events consumed by the UI dispatcher.
//!
//! Every callback of the page (connection opened, frame received, field
//! edited, button clicked, connection dropped) is represented as one
//! [`UiEvent`] variant and routed through
//! [`crate::service::UiService::dispatch`].

/// A single event delivered to the UI dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The persistent connection finished its handshake.
    Opened,

    /// A text frame arrived on the persistent connection.
    Message(String),

    /// The `autocomplete` field changed; carries the field's full value.
    Input(String),

    /// The `send-button` was clicked.
    SendClicked,

    /// The persistent connection ended.
    Closed {
        /// Close reason reported by the peer or transport, if any.
        reason: Option<String>,
    },
}

impl UiEvent {
    /// Returns a short label for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Opened => "opened",
            Self::Message(_) => "message",
            Self::Input(_) => "input",
            Self::SendClicked => "send_clicked",
            Self::Closed { .. } => "closed",
        }
    }
}
