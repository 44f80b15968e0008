//! # mpdkit
//!
//! A synchronous client for the Music Player Daemon (MPD) line protocol:
//! - Fixed command catalog with documented argument slots
//! - Request encoding with space-triggered quoting
//! - Frame accumulation over partial socket reads
//! - `key: value` stream grouping into records
//! - One-shot reconnect when an idle connection was dropped
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Client / Dispatcher                        │
//! │            send(name, args) -> Reply | MpdError              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Protocol   │          │ Connection  │
//!   │ catalog,    │          │ (TcpStream) │
//!   │ codec,      │          └──────┬──────┘
//!   │ frame,parse │                 │
//!   └─────────────┘                 ▼
//!                           ┌─────────────┐
//!                           │ MPD server  │
//!                           │  :6600      │
//!                           └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{MpdError, Result};
pub use config::{Config, DEFAULT_PORT};
pub use client::{BoundCommand, Client, Dispatcher, Reply};
pub use protocol::{Record, RecordList};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of mpdkit
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
