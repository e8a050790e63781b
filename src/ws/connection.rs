//! Persistent connection handle.
//!
//! [`Connection`] is the seam the UI service sends through. The production
//! implementation, [`WsConnection`], is a cheap handle over a channel that
//! feeds a writer task owning the sink half of the WebSocket.

use futures_util::{Sink, SinkExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;

use crate::error::ClientError;

/// Outbound side of the persistent connection.
///
/// Sending never blocks: frames are queued and written in order by a
/// background task.
pub trait Connection {
    /// Queues one text frame.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ConnectionClosed`] if the connection no longer
    /// accepts frames.
    fn send_text(&self, text: String) -> Result<(), ClientError>;
}

/// [`Connection`] backed by a tokio-tungstenite writer task.
#[derive(Debug, Clone)]
pub struct WsConnection {
    tx: mpsc::UnboundedSender<Message>,
}

impl WsConnection {
    /// Spawns a writer task draining queued frames into `sink`.
    ///
    /// The task ends when every handle is dropped or the sink fails.
    pub fn spawn<S>(mut sink: S) -> (Self, JoinHandle<()>)
    where
        S: Sink<Message> + Unpin + Send + 'static,
        S::Error: std::fmt::Display,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<Message>();
        let writer = tokio::spawn(async move {
            while let Some(frame) = rx.recv().await {
                if let Err(e) = sink.send(frame).await {
                    tracing::warn!(error = %e, "ws writer stopped");
                    break;
                }
            }
            tracing::debug!("ws writer finished");
        });
        (Self { tx }, writer)
    }
}

impl Connection for WsConnection {
    fn send_text(&self, text: String) -> Result<(), ClientError> {
        self.tx
            .send(Message::text(text))
            .map_err(|_| ClientError::ConnectionClosed)
    }
}
