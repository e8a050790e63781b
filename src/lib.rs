//! # autocomplete-client
//!
//! Client for a WebSocket autocomplete service.
//!
//! The client keeps one persistent connection open to `/ws`, sends the
//! current input value as a query on every edit, and re-renders the
//! suggestion and frequent-value lists from each reply. A separate
//! `POST /send` call submits the current word.
//!
//! ## Architecture
//!
//! ```text
//! Page events (terminal, tests)        WebSocket frames
//!     │                                     │
//!     └──────────── session loop ───────────┘
//!                        │
//!                 UiService (service/)
//!        ┌───────────────┼───────────────┐
//!        │               │               │
//!   View (view/)   Connection (ws/)  Submitter (api/)
//!                        │               │
//!                  writer task       reqwest POST
//! ```

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod session;
pub mod view;
pub mod ws;
