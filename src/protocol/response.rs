//! Response definitions
//!
//! Turns a complete frame into a success flag, a failure, or records.

use std::fmt;

use super::{ACK_MSG, FIELD_DELIM, LINE_DELIM, OK_MSG};

/// A parsed response frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Bare `OK`
    Ok,

    /// `ACK ...` error, raw frame text
    Ack(String),

    /// `key: value` records and bare lines
    Records(RecordList),
}

/// One logical item: an insertion-ordered set of fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a field value by name
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether a field with this name exists
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    /// Append a field, or overwrite the value if the key exists
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Iterate fields in the order they arrived
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

/// Records followed by the bare lines of a frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordList {
    /// Key/value records in arrival order
    pub records: Vec<Record>,

    /// Non key/value lines in arrival order
    pub lines: Vec<String>,
}

impl RecordList {
    /// Whether there are neither records nor bare lines
    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.lines.is_empty()
    }

    /// The first record, e.g. the single item of `status`
    pub fn first(&self) -> Option<&Record> {
        self.records.first()
    }
}

/// Parse a complete frame
///
/// A new record starts whenever a key repeats within the current record,
/// whichever key that is. Bare lines other than `OK` are collected
/// separately and kept after the records.
pub fn parse(frame: &str) -> Response {
    if frame.trim() == OK_MSG {
        return Response::Ok;
    }
    if frame.starts_with(ACK_MSG) {
        return Response::Ack(frame.to_string());
    }

    let mut list = RecordList::default();
    let mut current = Record::new();

    for line in frame.split(LINE_DELIM) {
        match line.split_once(FIELD_DELIM) {
            Some((key, value)) => {
                if current.contains_key(key) {
                    list.records.push(std::mem::take(&mut current));
                }
                current.fields.push((key.to_string(), value.to_string()));
            }
            None if !line.is_empty() && line != OK_MSG => list.lines.push(line.to_string()),
            None => {}
        }
    }
    if !current.is_empty() {
        list.records.push(current);
    }

    Response::Records(list)
}

/// A decoded `ACK [code@index] {command} message` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ack {
    /// MPD error code
    pub code: u32,

    /// Position of the failing command within a command list
    pub command_index: u32,

    /// Command that failed, empty when the server did not name one
    pub command: String,

    /// Human readable error text
    pub message: String,
}

impl Ack {
    /// Decode the first line of an ACK frame
    pub fn parse(frame: &str) -> Option<Self> {
        let line = frame.lines().next()?;
        let rest = line.strip_prefix(ACK_MSG)?.trim_start();

        let rest = rest.strip_prefix('[')?;
        let (position, rest) = rest.split_once(']')?;
        let (code, index) = position.split_once('@')?;

        let rest = rest.trim_start().strip_prefix('{')?;
        let (command, message) = rest.split_once('}')?;

        Some(Self {
            code: code.parse().ok()?,
            command_index: index.parse().ok()?,
            command: command.to_string(),
            message: message.trim().to_string(),
        })
    }
}

impl fmt::Display for Ack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}@{}] {{{}}} {}",
            self.code, self.command_index, self.command, self.message
        )
    }
}

/// The line a server sends on connect: `OK MPD <version>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    raw: String,
}

impl Greeting {
    /// Wrap the greeting line as received
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Raw greeting text as received
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Protocol version announced by the server
    pub fn version(&self) -> Option<&str> {
        self.raw
            .trim()
            .strip_prefix("OK MPD ")
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}
