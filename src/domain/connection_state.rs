//! Lifecycle of the persistent connection.
//!
//! The connection only ever moves forward: `Connecting → Open → Closed`.
//! There is no path back to `Connecting` because the client never
//! reconnects.

use std::fmt;

/// Observed state of the persistent connection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectionState {
    /// Handshake not yet completed.
    #[default]
    Connecting,
    /// Frames may be exchanged.
    Open,
    /// The connection ended; it is never recreated.
    Closed,
}

impl ConnectionState {
    /// Returns the state after the handshake completes.
    ///
    /// A closed connection stays closed.
    #[must_use]
    pub const fn opened(self) -> Self {
        match self {
            Self::Connecting | Self::Open => Self::Open,
            Self::Closed => Self::Closed,
        }
    }

    /// Returns the state after the connection ends.
    #[must_use]
    pub const fn closed(self) -> Self {
        Self::Closed
    }

    /// Returns `true` while frames may be exchanged.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Connecting => "connecting",
            Self::Open => "open",
            Self::Closed => "closed",
        };
        f.write_str(label)
    }
}
