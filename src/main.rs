//! autocomplete-client entry point.
//!
//! Reads page events from stdin (one line per edit of the input field,
//! `/send` to click the send button) and prints both lists after every
//! render.

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use autocomplete_client::api::HttpSubmitter;
use autocomplete_client::config::ClientConfig;
use autocomplete_client::domain::UiEvent;
use autocomplete_client::session;
use autocomplete_client::view::TerminalView;
use autocomplete_client::view::terminal::parse_line;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; logs go to stderr so stdout stays the page.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = ClientConfig::from_env()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("invalid client configuration")?;
    let submitter = HttpSubmitter::new(config.send_url());
    tracing::info!(ws = %config.ws_url(), send = submitter.url(), "starting autocomplete-client");

    let (ui_tx, ui_rx) = mpsc::channel(config.ui_event_capacity);
    tokio::spawn(read_terminal_input(ui_tx));

    let view = TerminalView::new(std::io::stdout());

    session::run(&config, submitter, view, ui_rx)
        .await
        .with_context(|| format!("session with {} failed", config.ws_url()))?;

    Ok(())
}

/// Forwards stdin lines as page events until EOF.
async fn read_terminal_input(tx: mpsc::Sender<UiEvent>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if tx.send(parse_line(&line)).await.is_err() {
                    break;
                }
            }
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stdin");
                break;
            }
        }
    }
}
