//! Domain layer: UI events and the connection lifecycle.
//!
//! These types carry no I/O. The service layer consumes [`UiEvent`]s and
//! tracks the [`ConnectionState`] of the single persistent connection.

pub mod connection_state;
pub mod ui_event;

pub use connection_state::ConnectionState;
pub use ui_event::UiEvent;
