//! One-shot submission outcomes against an in-process fake service.

#![allow(clippy::panic)]

mod common;

use axum::http::StatusCode;

use autocomplete_client::api::{HttpSubmitter, SubmitPayload, Submitter};
use autocomplete_client::error::ClientError;

use common::FakeOptions;

#[tokio::test]
async fn error_status_with_json_body_is_success() {
    let Some(server) = common::spawn(FakeOptions {
        send_status: StatusCode::INTERNAL_SERVER_ERROR,
        ..FakeOptions::default()
    })
    .await
    else {
        panic!("fake server failed to start");
    };

    let submitter = HttpSubmitter::new(server.config().send_url());
    let result = submitter.submit(SubmitPayload::new("hello")).await;

    let Ok(body) = result else {
        panic!("status codes are not checked");
    };
    assert_eq!(body, serde_json::json!({ "status": "indexed" }));
    assert_eq!(server.submissions().len(), 1);
}

#[tokio::test]
async fn plain_text_body_is_an_http_error() {
    let Some(server) = common::spawn(FakeOptions {
        json_send_reply: false,
        ..FakeOptions::default()
    })
    .await
    else {
        panic!("fake server failed to start");
    };

    let submitter = HttpSubmitter::new(server.config().send_url());
    let result = submitter.submit(SubmitPayload::new("hello")).await;
    assert!(matches!(result, Err(ClientError::Http(_))));
}

#[tokio::test]
async fn refused_connection_is_an_http_error() {
    let Some(url) = common::refused_url("/send").await else {
        panic!("no free port");
    };
    let result = HttpSubmitter::new(url).submit(SubmitPayload::new("hello")).await;
    assert!(matches!(result, Err(ClientError::Http(_))));
}
