//! Response frame reader
//!
//! Accumulates partial reads until a full response is buffered.
//!
//! A frame is complete when:
//! - the first read starts with `ACK` (failure, never extended), or
//! - the first read is empty (peer likely dropped the connection), or
//! - the buffer ends with `OK\n`, or
//! - the buffer starts with `OK` (bare success or the greeting).

use bytes::{BufMut, BytesMut};

use super::{ACK_MSG, OK_MSG};
use crate::error::{MpdError, Result};

/// Read one response frame using `receive` to pull raw chunks
///
/// Returns an empty string when the very first read returned nothing; the
/// caller decides whether to reconnect. An empty read in the middle of a
/// frame fails with `ConnectionLost`.
pub fn read_frame<F>(mut receive: F) -> Result<String>
where
    F: FnMut() -> Result<Vec<u8>>,
{
    let first = receive()?;
    if first.is_empty() || first.starts_with(ACK_MSG.as_bytes()) {
        return Ok(String::from_utf8_lossy(&first).into_owned());
    }

    let mut buffer = BytesMut::with_capacity(first.len());
    buffer.put_slice(&first);

    while !is_complete(&buffer) {
        let chunk = receive()?;
        if chunk.is_empty() {
            tracing::warn!(
                "Stream closed after {} bytes of an unfinished frame",
                buffer.len()
            );
            return Err(MpdError::ConnectionLost);
        }
        buffer.put_slice(&chunk);
    }

    let frame = String::from_utf8_lossy(&buffer).into_owned();
    tracing::trace!("Received frame of {} bytes", frame.len());
    Ok(frame)
}

/// Whether the buffered bytes form a finished success frame
fn is_complete(buffer: &[u8]) -> bool {
    buffer.ends_with(b"OK\n")
        || buffer.starts_with(OK_MSG.as_bytes())
        || buffer.trim_ascii() == OK_MSG.as_bytes()
}
