//! WebSocket layer: the persistent connection and its message types.
//!
//! The client keeps exactly one connection to `/ws` for the whole session.
//! Outbound frames are raw query strings and two fixed notifications;
//! inbound frames are JSON render payloads.

pub mod connection;
pub mod messages;

pub use connection::{Connection, WsConnection};
pub use messages::{FrequentValue, InboundMessage, Notification};
