//! HTTP layer: the one-shot `POST /send` call and its body.

pub mod dto;
pub mod send;

pub use dto::SubmitPayload;
pub use send::{HttpSubmitter, Submitter};
