//! UI service: dispatches [`UiEvent`]s to their handlers.

use serde_json::Value;
use tokio::task::JoinHandle;

use crate::api::{SubmitPayload, Submitter};
use crate::domain::{ConnectionState, UiEvent};
use crate::error::ClientError;
use crate::view::{ListId, View};
use crate::ws::{Connection, InboundMessage, Notification};

/// Handle to a spawned one-shot submission, resolving to the parsed
/// response body.
pub type SubmissionHandle = JoinHandle<Result<Value, ClientError>>;

/// Single-task dispatcher owning the connection handle, the submitter and
/// the page.
///
/// Handlers never await. The only asynchronous work, the one-shot call, is
/// spawned and handed back as a [`SubmissionHandle`].
#[derive(Debug)]
pub struct UiService<C, S, V> {
    connection: C,
    submitter: S,
    view: V,
    state: ConnectionState,
}

impl<C, S, V> UiService<C, S, V>
where
    C: Connection,
    S: Submitter,
    V: View,
{
    /// Creates a new `UiService` in the `Connecting` state.
    #[must_use]
    pub fn new(connection: C, submitter: S, view: V) -> Self {
        Self {
            connection,
            submitter,
            view,
            state: ConnectionState::default(),
        }
    }

    /// Current state of the persistent connection.
    #[must_use]
    pub const fn state(&self) -> ConnectionState {
        self.state
    }

    /// Returns a reference to the page surface.
    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Consumes the service, returning the page surface.
    #[must_use]
    pub fn into_view(self) -> V {
        self.view
    }

    /// Routes one event to its handler.
    ///
    /// Returns the submission handle for [`UiEvent::SendClicked`], `None`
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Propagates the handler's error: payload errors for
    /// [`UiEvent::Message`], [`ClientError::ConnectionClosed`] for sends on a
    /// dead connection.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<Option<SubmissionHandle>, ClientError> {
        match event {
            UiEvent::Opened => self.on_open().map(|()| None),
            UiEvent::Message(text) => self.on_message(&text).map(|()| None),
            UiEvent::Input(value) => self.on_input(value).map(|()| None),
            UiEvent::SendClicked => Ok(Some(self.on_send_clicked())),
            UiEvent::Closed { reason } => {
                self.on_closed(reason.as_deref());
                Ok(None)
            }
        }
    }

    /// Marks the connection open and sends the startup notification.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ConnectionClosed`] if the frame cannot be
    /// queued.
    pub fn on_open(&mut self) -> Result<(), ClientError> {
        self.state = self.state.opened();
        tracing::info!(state = %self.state, "connection open");
        self.connection.send_text(Notification::PageLoaded.frame())
    }

    /// Re-renders both lists from an inbound frame.
    ///
    /// The page is left untouched when the frame does not parse.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MalformedPayload`] or
    /// [`ClientError::MissingField`] from [`InboundMessage::parse`].
    pub fn on_message(&mut self, text: &str) -> Result<(), ClientError> {
        let message = InboundMessage::parse(text)?;
        tracing::debug!(?message, "inbound message");

        self.view.clear(ListId::Suggestions);
        for suggestion in message.suggestions() {
            self.view.append(ListId::Suggestions, suggestion.clone());
        }

        self.view.clear(ListId::FrequentList);
        for value in &message.frequent_values {
            self.view.append(ListId::FrequentList, value.to_string());
        }

        self.view.rendered();
        Ok(())
    }

    /// Stores the new field value and queries for it, or clears the
    /// suggestions when the field is empty.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ConnectionClosed`] if the query cannot be
    /// queued.
    pub fn on_input(&mut self, value: String) -> Result<(), ClientError> {
        self.view.set_input_value(value);
        let query = self.view.input_value();
        if query.is_empty() {
            self.view.clear(ListId::Suggestions);
            self.view.rendered();
            return Ok(());
        }
        self.connection.send_text(query.to_string())
    }

    /// Submits the current field value and signals the submission on the
    /// persistent connection.
    ///
    /// The notification goes out without waiting for the call; a failure to
    /// queue it is logged only.
    pub fn on_send_clicked(&mut self) -> SubmissionHandle {
        let payload = SubmitPayload::new(self.view.input_value());
        let call = self.submitter.submit(payload);
        let handle = tokio::spawn(async move {
            let result = call.await;
            match &result {
                Ok(body) => tracing::info!(response = %body, "word submitted"),
                Err(e) => tracing::error!(kind = e.kind(), error = %e, "word submission failed"),
            }
            result
        });

        if let Err(e) = self.connection.send_text(Notification::WordSent.frame()) {
            tracing::warn!(kind = e.kind(), error = %e, "failed to send submit notification");
        }
        handle
    }

    /// Marks the connection closed. It is never reopened.
    pub fn on_closed(&mut self, reason: Option<&str>) {
        self.state = self.state.closed();
        tracing::warn!(reason = reason.unwrap_or("none"), "connection closed");
    }
}
