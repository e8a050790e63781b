//! Session driver: connects, then runs the single dispatch loop.
//!
//! One task owns the [`UiService`] and feeds it, in arrival order, inbound
//! WebSocket frames and UI events from an `mpsc` channel. The loop ends when
//! the connection closes or the UI channel is exhausted; in-flight
//! submissions are awaited before returning.

use futures_util::StreamExt;
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use crate::api::Submitter;
use crate::config::ClientConfig;
use crate::domain::UiEvent;
use crate::error::ClientError;
use crate::service::{SubmissionHandle, UiService};
use crate::view::View;
use crate::ws::WsConnection;

/// Runs one session against the service described by `config`.
///
/// Returns the view as it stood when the session ended.
///
/// # Errors
///
/// Returns [`ClientError::WebSocket`] if the connection cannot be
/// established. Errors raised while handling individual events are logged
/// and do not end the session.
pub async fn run<S, V>(
    config: &ClientConfig,
    submitter: S,
    view: V,
    mut ui_rx: mpsc::Receiver<UiEvent>,
) -> Result<V, ClientError>
where
    S: Submitter,
    V: View,
{
    let url = config.ws_url();
    tracing::info!(%url, "connecting");
    let (stream, _response) = connect_async(url.as_str()).await?;
    let (sink, mut ws_rx) = stream.split();
    let (connection, writer) = WsConnection::spawn(sink);

    let mut service = UiService::new(connection, submitter, view);
    let mut pending: Vec<SubmissionHandle> = Vec::new();

    dispatch(&mut service, UiEvent::Opened, &mut pending);

    loop {
        tokio::select! {
            // Incoming frame from the service
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        dispatch(&mut service, UiEvent::Message(text.as_str().to_owned()), &mut pending);
                    }
                    Some(Ok(Message::Close(frame))) => {
                        let reason = frame.map(|f| f.reason.as_str().to_owned());
                        dispatch(&mut service, UiEvent::Closed { reason }, &mut pending);
                        break;
                    }
                    Some(Err(e)) => {
                        dispatch(&mut service, UiEvent::Closed { reason: Some(e.to_string()) }, &mut pending);
                        break;
                    }
                    None => {
                        dispatch(&mut service, UiEvent::Closed { reason: None }, &mut pending);
                        break;
                    }
                    Some(Ok(_)) => {}
                }
            }
            // Event from the page
            event = ui_rx.recv() => {
                match event {
                    Some(event) => dispatch(&mut service, event, &mut pending),
                    None => break,
                }
            }
        }
    }

    for handle in pending {
        if let Err(e) = handle.await {
            let err = ClientError::from(e);
            tracing::error!(kind = err.kind(), error = %err, "submission did not complete");
        }
    }

    let view = service.into_view();
    // Dropping the last connection handle lets the writer drain and stop.
    if writer.await.is_err() {
        tracing::warn!("ws writer task panicked");
    }
    tracing::debug!("session finished");
    Ok(view)
}

/// Dispatches one event, logging handler errors and keeping submission
/// handles.
fn dispatch<C, S, V>(
    service: &mut UiService<C, S, V>,
    event: UiEvent,
    pending: &mut Vec<SubmissionHandle>,
) where
    C: crate::ws::Connection,
    S: Submitter,
    V: View,
{
    let name = event.name();
    match service.dispatch(event) {
        Ok(Some(handle)) => track_submission(pending, handle),
        Ok(None) => {}
        Err(e) if e.is_payload_error() => {
            tracing::warn!(event = name, kind = e.kind(), error = %e, "skipping inbound frame");
        }
        Err(e) => {
            tracing::error!(event = name, kind = e.kind(), error = %e, "event handler failed");
        }
    }
}

/// Keeps `handle` for the final drain, dropping submissions that already
/// finished so a long session does not accumulate them.
fn track_submission(pending: &mut Vec<SubmissionHandle>, handle: SubmissionHandle) {
    pending.retain(|h| !h.is_finished());
    pending.push(handle);
}
