//! Network Module
//!
//! Socket ownership for a single MPD session.
//!
//! ## Architecture
//! - One `Connection` owns one TCP stream
//! - Strictly serialized request/response, no multiplexing
//! - Blocking I/O; timeouts only when configured

mod connection;

pub use connection::Connection;
