//! Error types for the window manager
//!
//! Window-manager operations never fail: invalid requests are ignored and
//! oversized deltas clamp. Errors only surface at the string and storage
//! boundaries of the crate (parsing ids and directions, loading config,
//! persisting the display preference).

/// Errors that can occur at the boundaries of the desktop crate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// A window id string did not name any known window
    UnknownWindow(String),

    /// A resize direction string was not one of the eight compass points
    UnknownResizeDirection(String),

    /// An operation was attempted that is not valid in the current state
    InvalidOperation {
        /// The operation that was attempted
        op: &'static str,
        /// Why the operation failed
        reason: &'static str,
    },

    /// JSON serialization or deserialization failed
    SerializationError(String),

    /// Persistence operation failed
    PersistenceError(String),
}

impl DesktopError {
    /// Create a serialization error with message.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// Create a persistence error with message.
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::PersistenceError(msg.into())
    }
}

impl std::fmt::Display for DesktopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownWindow(id) => write!(f, "unknown window: {}", id),
            Self::UnknownResizeDirection(dir) => {
                write!(f, "unknown resize direction: {}", dir)
            }
            Self::InvalidOperation { op, reason } => {
                write!(f, "invalid operation '{}': {}", op, reason)
            }
            Self::SerializationError(msg) => write!(f, "serialization error: {}", msg),
            Self::PersistenceError(msg) => write!(f, "persistence error: {}", msg),
        }
    }
}

impl std::error::Error for DesktopError {}

impl From<serde_json::Error> for DesktopError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

/// Result type alias for desktop operations
pub type DesktopResult<T> = Result<T, DesktopError>;
