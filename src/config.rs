//! Configuration for mpdkit
//!
//! Centralized client configuration with sensible defaults.

use crate::error::{MpdError, Result};

/// Default MPD host
pub const DEFAULT_HOST: &str = "localhost";

/// Default MPD port
pub const DEFAULT_PORT: u16 = 6600;

/// Default number of bytes requested per socket read
pub const DEFAULT_RECV_BUFFER_SIZE: usize = 4096;

/// Client configuration
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Server Configuration
    // -------------------------------------------------------------------------
    /// Name or IP address of the MPD host
    pub host: String,

    /// Port used by the MPD server
    pub port: u16,

    /// Password sent right after connecting, if any
    pub password: Option<String>,

    // -------------------------------------------------------------------------
    // Transport Configuration
    // -------------------------------------------------------------------------
    /// Socket read timeout (milliseconds, 0 = block forever)
    pub read_timeout_ms: u64,

    /// Socket write timeout (milliseconds, 0 = block forever)
    pub write_timeout_ms: u64,

    /// Maximum bytes returned by a single receive
    pub recv_buffer_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            password: None,
            read_timeout_ms: 0,
            write_timeout_ms: 0,
            recv_buffer_size: DEFAULT_RECV_BUFFER_SIZE,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The `host:port` pair to connect to
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check the config for values no connection could use
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(MpdError::Config("host must not be empty".to_string()));
        }
        if self.recv_buffer_size == 0 {
            return Err(MpdError::Config(
                "receive buffer size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the server host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the server port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the password sent after connecting
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.config.password = Some(password.into());
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    /// Set the maximum bytes per receive
    pub fn recv_buffer_size(mut self, size: usize) -> Self {
        self.config.recv_buffer_size = size;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
