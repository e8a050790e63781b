//! In-process stand-in for the autocomplete service.
//!
//! Serves `GET /ws` and `POST /send` on an ephemeral port, records every
//! text frame and submission, and answers each frame the way the real
//! service does: substring suggestions over a fixed word list plus a fixed
//! frequent-values aggregation.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::http::{HeaderMap, StatusCode};
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use autocomplete_client::config::ClientConfig;

/// Words the fake index holds.
pub const WORDS: [&str; 10] = [
    "Apple", "Banana", "Cherry", "Date", "Fig", "Grape", "Honeydew", "Kiwi", "Lemon", "Mango",
];

/// Behavior knobs for the fake service.
#[derive(Debug, Clone, Copy)]
pub struct FakeOptions {
    /// Close the socket after replying to this many text frames.
    pub close_after: usize,
    /// Answer `/send` with JSON; otherwise with plain text.
    pub json_send_reply: bool,
    /// Answer the first frame with something that is not JSON.
    pub garbage_first_reply: bool,
    /// Status code of every `/send` reply.
    pub send_status: StatusCode,
}

impl Default for FakeOptions {
    fn default() -> Self {
        Self {
            close_after: usize::MAX,
            json_send_reply: true,
            garbage_first_reply: false,
            send_status: StatusCode::OK,
        }
    }
}

/// One recorded `POST /send`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// `Content-Type` header, if any.
    pub content_type: Option<String>,
    /// Raw body.
    pub body: String,
}

#[derive(Debug, Clone)]
struct FakeState {
    options: FakeOptions,
    frames: Arc<Mutex<Vec<String>>>,
    submissions: Arc<Mutex<Vec<Submission>>>,
}

/// Handle to a running fake service.
#[derive(Debug)]
pub struct FakeServer {
    /// Bound address.
    pub addr: SocketAddr,
    frames: Arc<Mutex<Vec<String>>>,
    submissions: Arc<Mutex<Vec<Submission>>>,
}

impl FakeServer {
    /// Client configuration pointing at this server.
    pub fn config(&self) -> ClientConfig {
        ClientConfig::new("127.0.0.1", self.addr.port())
    }

    /// Text frames received so far, in arrival order.
    pub fn frames(&self) -> Vec<String> {
        self.frames.lock().map(|f| f.clone()).unwrap_or_default()
    }

    /// Submissions received so far.
    pub fn submissions(&self) -> Vec<Submission> {
        self.submissions.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

/// Starts the fake service on `127.0.0.1:0`.
///
/// Returns `None` if the listener cannot be bound.
pub async fn spawn(options: FakeOptions) -> Option<FakeServer> {
    let state = FakeState {
        options,
        frames: Arc::new(Mutex::new(Vec::new())),
        submissions: Arc::new(Mutex::new(Vec::new())),
    };
    let server = FakeServer {
        addr: "127.0.0.1:0".parse().ok()?,
        frames: Arc::clone(&state.frames),
        submissions: Arc::clone(&state.submissions),
    };

    let app = Router::new()
        .route("/ws", get(ws_handler))
        .route("/send", post(send_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(server.addr).await.ok()?;
    let addr = listener.local_addr().ok()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Some(FakeServer { addr, ..server })
}

/// An `http://` URL on a port nothing listens on.
///
/// Returns `None` if no ephemeral port could be reserved.
pub async fn refused_url(path: &str) -> Option<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.ok()?;
    let addr = listener.local_addr().ok()?;
    drop(listener);
    Some(format!("http://{addr}{path}"))
}

/// Reply for one query, mirroring the real service's JSON shape.
pub fn reply_for(query: &str) -> String {
    let matches: Vec<&str> = WORDS.iter().copied().filter(|w| w.contains(query)).collect();
    let suggestions = if matches.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::json!(matches)
    };
    serde_json::json!({
        "frequent_values": [
            { "key": "Apple", "doc_count": 3 },
            { "key": "Kiwi", "doc_count": 1 },
        ],
        "suggestions": suggestions,
    })
    .to_string()
}

async fn ws_handler(ws: WebSocketUpgrade, State(state): State<FakeState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| serve_socket(socket, state))
}

async fn serve_socket(mut socket: WebSocket, state: FakeState) {
    let mut seen = 0usize;
    while let Some(Ok(msg)) = socket.recv().await {
        let Message::Text(text) = msg else {
            continue;
        };
        let query = text.as_str().to_owned();
        if let Ok(mut frames) = state.frames.lock() {
            frames.push(query.clone());
        }

        let reply = if seen == 0 && state.options.garbage_first_reply {
            "definitely not json".to_string()
        } else {
            reply_for(&query)
        };
        seen += 1;

        if socket.send(Message::text(reply)).await.is_err() {
            break;
        }
        if seen >= state.options.close_after {
            let _ = socket.send(Message::Close(None)).await;
            break;
        }
    }
}

async fn send_handler(
    State(state): State<FakeState>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    if let Ok(mut submissions) = state.submissions.lock() {
        submissions.push(Submission { content_type, body });
    }

    let status = state.options.send_status;
    if state.options.json_send_reply {
        (status, axum::Json(serde_json::json!({ "status": "indexed" }))).into_response()
    } else {
        (status, "data populated").into_response()
    }
}
