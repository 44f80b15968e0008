//! Connection Manager
//!
//! Owns the socket lifecycle and exposes raw send/receive primitives.

use std::io::{ErrorKind, Read};
use std::net::TcpStream;
use std::time::Duration;

use crate::config::Config;
use crate::error::{MpdError, Result};
use crate::protocol::write_request;

/// A connection to one MPD server
///
/// States: unconnected (`stream` is `None`) and connected.
pub struct Connection {
    /// Target `host:port`
    address: String,

    /// Live socket, if connected
    stream: Option<TcpStream>,

    /// Bytes requested per receive
    recv_buffer_size: usize,

    /// Read timeout (milliseconds, 0 = none)
    read_timeout_ms: u64,

    /// Write timeout (milliseconds, 0 = none)
    write_timeout_ms: u64,
}

impl Connection {
    /// Create an unconnected manager for the configured server
    pub fn new(config: &Config) -> Self {
        Self {
            address: config.address(),
            stream: None,
            recv_buffer_size: config.recv_buffer_size,
            read_timeout_ms: config.read_timeout_ms,
            write_timeout_ms: config.write_timeout_ms,
        }
    }

    /// Open the stream, replacing any existing one
    pub fn connect(&mut self) -> Result<()> {
        let stream = TcpStream::connect(&self.address)?;

        // Disable Nagle's algorithm; every request is one short line
        stream.set_nodelay(true)?;

        if self.read_timeout_ms > 0 {
            stream.set_read_timeout(Some(Duration::from_millis(self.read_timeout_ms)))?;
        }
        if self.write_timeout_ms > 0 {
            stream.set_write_timeout(Some(Duration::from_millis(self.write_timeout_ms)))?;
        }

        tracing::debug!("Connected to {}", self.address);
        self.stream = Some(stream);
        Ok(())
    }

    /// Close the stream
    ///
    /// Fails with `NotConnected` if no stream was ever opened.
    pub fn disconnect(&mut self) -> Result<()> {
        let stream = self.stream.take().ok_or(MpdError::NotConnected)?;
        match stream.shutdown(std::net::Shutdown::Both) {
            Ok(()) => {}
            // Peer already hung up
            Err(e) if e.kind() == ErrorKind::NotConnected => {}
            Err(e) => return Err(e.into()),
        }
        tracing::debug!("Disconnected from {}", self.address);
        Ok(())
    }

    /// Send one encoded request line
    pub fn send(&mut self, line: &str) -> Result<()> {
        let stream = self.stream.as_mut().ok_or(MpdError::NotConnected)?;
        tracing::trace!("-> {:?}", line);
        write_request(stream, line)
    }

    /// Receive whatever bytes are currently available
    ///
    /// At most `Config::recv_buffer_size` bytes are returned per call. An
    /// empty result means the peer closed the stream.
    pub fn receive(&mut self) -> Result<Vec<u8>> {
        let stream = self.stream.as_mut().ok_or(MpdError::NotConnected)?;
        let mut buf = vec![0u8; self.recv_buffer_size];
        let n = loop {
            match stream.read(&mut buf) {
                Ok(n) => break n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                // A reset peer is a dropped connection, same as EOF
                Err(e) if e.kind() == ErrorKind::ConnectionReset => break 0,
                Err(e) => return Err(e.into()),
            }
        };
        buf.truncate(n);
        tracing::trace!("<- {} bytes", n);
        Ok(buf)
    }

    /// Whether a socket is open
    pub fn is_connected(&self) -> bool {
        self.stream.is_some()
    }

    /// Target `host:port`
    pub fn address(&self) -> &str {
        &self.address
    }
}
