//! Protocol Module
//!
//! Defines the MPD line protocol spoken between client and server.
//!
//! ## Protocol Format (text, newline delimited)
//!
//! ### Request Format
//! ```text
//! <command> [<arg1> [<arg2> ...]]\n
//! ```
//! Arguments containing a space are wrapped in `"` with no inner escaping.
//!
//! ### Response Format
//! ```text
//! OK\n                          success, no data
//! ACK [code@index] {cmd} text\n  failure
//! key: value\n ... OK\n          records followed by success
//! ```
//!
//! ### Greeting
//! On connect the server sends `OK MPD <version>\n` before any command.

mod command;
mod codec;
mod frame;
mod response;

pub use command::{commands, is_known, lookup, CommandSpec};
pub use codec::{encode_request, quote_argument, write_request};
pub use frame::read_frame;
pub use response::{parse, Ack, Greeting, Record, RecordList, Response};

/// Line delimiter on the wire
pub const LINE_DELIM: char = '\n';

/// Separator between a field name and its value
pub const FIELD_DELIM: &str = ": ";

/// Success marker
pub const OK_MSG: &str = "OK";

/// Failure marker prefix
pub const ACK_MSG: &str = "ACK";
