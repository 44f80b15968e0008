//! Error types for mpdkit
//!
//! Provides a unified error type for all client operations.

use thiserror::Error;

use crate::protocol::Ack;

/// Result type alias using MpdError
pub type Result<T> = std::result::Result<T, MpdError>;

/// Unified error type for mpdkit operations
#[derive(Debug, Error)]
pub enum MpdError {
    // -------------------------------------------------------------------------
    // Local Errors
    // -------------------------------------------------------------------------
    #[error("no such command: '{0}'")]
    UnknownCommand(String),

    #[error("a connection was not initiated, use 'connect' first")]
    NotConnected,

    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),

    /// The server closed the stream and the single reconnect did not help
    #[error("connection lost: server closed the stream")]
    ConnectionLost,

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("wrong command usage or insufficient permissions: {0}")]
    CommandRejected(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("configuration error: {0}")]
    Config(String),
}

impl MpdError {
    /// Decoded ACK line when this is a rejection carrying one
    pub fn ack(&self) -> Option<Ack> {
        match self {
            MpdError::CommandRejected(raw) => Ack::parse(raw),
            _ => None,
        }
    }

    /// Whether the error came from the transport rather than the server
    pub fn is_transport(&self) -> bool {
        matches!(self, MpdError::Transport(_) | MpdError::ConnectionLost)
    }
}
