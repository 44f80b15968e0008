//! Client facade
//!
//! Binds catalog entries to live round trips over a `Connection`.
//!
//! ## Round Trip
//! 1. Look up the command and encode the request line
//! 2. Send it and read one frame
//! 3. On an empty frame, reconnect once and resend
//! 4. Parse; `ACK` or an empty result becomes `CommandRejected`

use crate::config::Config;
use crate::error::{MpdError, Result};
use crate::network::Connection;
use crate::protocol::{
    encode_request, lookup, parse, read_frame, CommandSpec, Greeting, Record, RecordList,
    Response, ACK_MSG, OK_MSG,
};

/// Successful result of a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The server answered a bare `OK`
    Ok,

    /// The server answered with data
    Records(RecordList),
}

impl Reply {
    /// Whether the server answered a bare `OK`
    pub fn is_ok(&self) -> bool {
        matches!(self, Reply::Ok)
    }

    /// The record list, if the server answered with data
    pub fn records(&self) -> Option<&RecordList> {
        match self {
            Reply::Records(list) => Some(list),
            Reply::Ok => None,
        }
    }

    /// Convert into a record list; a bare `OK` yields an empty list
    pub fn into_records(self) -> RecordList {
        match self {
            Reply::Records(list) => list,
            Reply::Ok => RecordList::default(),
        }
    }

    /// The first record, if any
    pub fn first(&self) -> Option<&Record> {
        self.records().and_then(RecordList::first)
    }
}

/// A session with one MPD server
///
/// # Example
///
/// ```ignore
/// use mpdkit::{Client, Config};
///
/// let mut client = Client::new(Config::default());
/// client.connect()?;
/// let status = client.send("status", &[])?;
/// if status.first().and_then(|r| r.get("state")) == Some("play") {
///     client.send("pause", &["1"])?;
/// } else {
///     client.send("play", &[])?;
/// }
/// client.disconnect()?;
/// ```
pub struct Client {
    connection: Connection,
    password: Option<String>,
}

impl Client {
    /// Create an unconnected client
    pub fn new(config: Config) -> Self {
        Self {
            connection: Connection::new(&config),
            password: config.password,
        }
    }

    /// Connect, read the greeting and authenticate if a password is set
    ///
    /// A password reply without `OK` surfaces as `CommandRejected` with the
    /// raw reply.
    pub fn connect(&mut self) -> Result<Greeting> {
        open_session(&mut self.connection, self.password.as_deref())
    }

    /// Ask the server to close the session, then close the socket
    pub fn disconnect(&mut self) -> Result<()> {
        if !self.connection.is_connected() {
            return Err(MpdError::NotConnected);
        }
        // The server answers `close` by hanging up, so no reply is read
        if let Err(e) = self.connection.send(&encode_request::<&str>("close", &[])) {
            tracing::debug!("Failed to send close to {}: {}", self.connection.address(), e);
        }
        self.connection.disconnect()
    }

    /// Borrow a dispatcher for issuing commands
    pub fn commands(&mut self) -> Dispatcher<'_> {
        Dispatcher {
            connection: &mut self.connection,
            password: self.password.as_deref(),
        }
    }

    /// Issue one command by name
    pub fn send(&mut self, name: &str, args: &[&str]) -> Result<Reply> {
        self.commands().send(name, args)
    }

    /// Whether the underlying socket is open
    pub fn is_connected(&self) -> bool {
        self.connection.is_connected()
    }

    /// The owned connection manager
    pub fn connection(&self) -> &Connection {
        &self.connection
    }
}

/// Issues commands over a borrowed connection
pub struct Dispatcher<'c> {
    connection: &'c mut Connection,
    password: Option<&'c str>,
}

impl<'c> Dispatcher<'c> {
    /// Create a dispatcher over an existing connection
    pub fn new(connection: &'c mut Connection, password: Option<&'c str>) -> Self {
        Self { connection, password }
    }

    /// Look up `name` and run it
    pub fn send(&mut self, name: &str, args: &[&str]) -> Result<Reply> {
        let spec = lookup(name)?;
        self.call(spec, args)
    }

    /// Run a catalog entry with positional arguments
    pub fn call(&mut self, spec: &CommandSpec, args: &[&str]) -> Result<Reply> {
        let line = encode_request(spec.name, args);
        let frame = self.round_trip(&line)?;
        interpret(frame)
    }

    /// Bind one catalog entry to this dispatcher
    pub fn bind(&mut self, name: &str) -> Result<BoundCommand<'_>> {
        let spec = lookup(name)?;
        Ok(BoundCommand {
            dispatcher: Dispatcher {
                connection: &mut *self.connection,
                password: self.password,
            },
            spec,
        })
    }

    /// Send `line` and read its frame, reconnecting once on an empty read
    fn round_trip(&mut self, line: &str) -> Result<String> {
        self.connection.send(line)?;
        let frame = read_frame(|| self.connection.receive())?;
        if !frame.is_empty() {
            return Ok(frame);
        }

        tracing::warn!(
            "Empty reply from {}, reconnecting once",
            self.connection.address()
        );
        open_session(self.connection, self.password)?;

        self.connection.send(line)?;
        let frame = read_frame(|| self.connection.receive())?;
        if frame.is_empty() {
            tracing::warn!(
                "Empty reply from {} after reconnect, giving up",
                self.connection.address()
            );
            return Err(MpdError::ConnectionLost);
        }
        Ok(frame)
    }
}

/// A callable bound to one catalog entry
pub struct BoundCommand<'a> {
    dispatcher: Dispatcher<'a>,
    spec: &'static CommandSpec,
}

impl BoundCommand<'_> {
    /// Catalog entry this command is bound to
    pub fn spec(&self) -> &'static CommandSpec {
        self.spec
    }

    /// Argument documentation of the bound command
    pub fn usage(&self) -> String {
        self.spec.usage()
    }

    /// Run the bound command with positional arguments
    pub fn call(&mut self, args: &[&str]) -> Result<Reply> {
        self.dispatcher.call(self.spec, args)
    }
}

/// Connect, consume the greeting and authenticate
fn open_session(connection: &mut Connection, password: Option<&str>) -> Result<Greeting> {
    connection.connect()?;

    let greeting = read_frame(|| connection.receive())?;
    if greeting.is_empty() {
        return Err(MpdError::ConnectionLost);
    }
    if greeting.starts_with(ACK_MSG) {
        return Err(MpdError::CommandRejected(greeting));
    }
    let greeting = Greeting::new(greeting.trim_end());
    tracing::debug!(
        "Server at {} speaks protocol {}",
        connection.address(),
        greeting.version().unwrap_or("unknown")
    );

    if let Some(password) = password {
        connection.send(&encode_request("password", &[password]))?;
        let reply = read_frame(|| connection.receive())?;
        if reply.is_empty() {
            return Err(MpdError::ConnectionLost);
        }
        if reply.starts_with(ACK_MSG) || !reply.contains(OK_MSG) {
            return Err(MpdError::CommandRejected(reply));
        }
    }

    Ok(greeting)
}

/// Map a frame to the caller-facing result
fn interpret(frame: String) -> Result<Reply> {
    match parse(&frame) {
        Response::Ok => Ok(Reply::Ok),
        Response::Ack(raw) => Err(MpdError::CommandRejected(raw)),
        Response::Records(list) if list.is_empty() => Err(MpdError::CommandRejected(frame)),
        Response::Records(list) => Ok(Reply::Records(list)),
    }
}
