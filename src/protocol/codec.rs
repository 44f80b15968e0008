//! Request encoding
//!
//! Builds the single line sent for a command.
//!
//! ## Wire Format
//! ```text
//! ┌──────────┬───┬────────┬───┬────────┬─────┬────┐
//! │ command  │ ␠ │  arg1  │ ␠ │  arg2  │ ... │ \n │
//! └──────────┴───┴────────┴───┴────────┴─────┴────┘
//! ```
//!
//! An argument containing a space is sent as `"arg"`. Embedded quotes are
//! not escaped, so an argument such as `a "b" c` reaches the server as-is.

use std::borrow::Cow;
use std::io::Write;

use crate::error::Result;

/// Quote `arg` if it contains a space
pub fn quote_argument(arg: &str) -> Cow<'_, str> {
    if arg.contains(' ') {
        Cow::Owned(format!("\"{}\"", arg))
    } else {
        Cow::Borrowed(arg)
    }
}

/// Encode a command and its arguments as one newline-terminated line
///
/// Arity is not checked against the catalog.
pub fn encode_request<S: AsRef<str>>(name: &str, args: &[S]) -> String {
    let mut line = String::with_capacity(name.len() + 1 + args.len() * 8);
    line.push_str(name);
    for arg in args {
        line.push(' ');
        line.push_str(&quote_argument(arg.as_ref()));
    }
    line.push('\n');
    line
}

/// Write an encoded request to a stream
pub fn write_request<W: Write>(writer: &mut W, line: &str) -> Result<()> {
    writer.write_all(line.as_bytes())?;
    writer.flush()?;
    Ok(())
}
