//! Service layer: typed event dispatch over the page, the persistent
//! connection and the one-shot submitter.

pub mod ui_service;

pub use ui_service::{SubmissionHandle, UiService};
