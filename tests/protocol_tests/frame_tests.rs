//! Frame Reader Tests
//!
//! These tests verify:
//! - Accumulation across partial reads
//! - Early return on ACK and empty reads
//! - Failure when the stream closes mid-frame

use std::collections::VecDeque;
use mpdkit::protocol::read_frame;
use mpdkit::{MpdError, Result};

// =============================================================================
// Helper Functions
// =============================================================================

/// A receive function replaying `chunks`, then returning empty reads
fn scripted(chunks: &[&str]) -> (impl FnMut() -> Result<Vec<u8>>, std::rc::Rc<std::cell::Cell<usize>>) {
    let calls = std::rc::Rc::new(std::cell::Cell::new(0));
    let counter = calls.clone();
    let mut queue: VecDeque<Vec<u8>> = chunks.iter().map(|c| c.as_bytes().to_vec()).collect();
    let receive = move || {
        counter.set(counter.get() + 1);
        Ok(queue.pop_front().unwrap_or_default())
    };
    (receive, calls)
}

// =============================================================================
// Single Read Tests
// =============================================================================

#[test]
fn test_bare_ok_single_read() {
    let (receive, calls) = scripted(&["OK\n"]);
    assert_eq!(read_frame(receive).unwrap(), "OK\n");
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_ack_returns_immediately() {
    let (receive, calls) = scripted(&["ACK [5@0] {play} bad song index\n", "never read"]);
    assert_eq!(read_frame(receive).unwrap(), "ACK [5@0] {play} bad song index\n");
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_partial_ack_is_not_extended() {
    let (receive, calls) = scripted(&["ACK [2@0] {setvol} incorr", "ect arguments\n"]);
    assert_eq!(read_frame(receive).unwrap(), "ACK [2@0] {setvol} incorr");
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_empty_first_read_is_sentinel() {
    let (receive, calls) = scripted(&[]);
    assert_eq!(read_frame(receive).unwrap(), "");
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_greeting_completes_on_first_read() {
    let (receive, calls) = scripted(&["OK MPD 0.23.5\n"]);
    assert_eq!(read_frame(receive).unwrap(), "OK MPD 0.23.5\n");
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_complete_listing_in_one_read() {
    let (receive, calls) = scripted(&["volume: 50\nstate: play\nOK\n"]);
    assert_eq!(read_frame(receive).unwrap(), "volume: 50\nstate: play\nOK\n");
    assert_eq!(calls.get(), 1);
}

// =============================================================================
// Accumulation Tests
// =============================================================================

#[test]
fn test_accumulates_until_ok() {
    let (receive, calls) = scripted(&["file: a\nTi", "tle: x\nfile: b\n", "Title: y\nO", "K\n"]);
    assert_eq!(
        read_frame(receive).unwrap(),
        "file: a\nTitle: x\nfile: b\nTitle: y\nOK\n"
    );
    assert_eq!(calls.get(), 4);
}

#[test]
fn test_value_starting_with_ok_does_not_terminate() {
    let (receive, calls) = scripted(&["Title: OKAY\n", "Artist: b\nOK\n"]);
    assert_eq!(read_frame(receive).unwrap(), "Title: OKAY\nArtist: b\nOK\n");
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_split_multibyte_character_is_preserved() {
    let text = "Title: caf\u{e9}\nOK\n".as_bytes().to_vec();
    let split = text.iter().position(|&b| b == 0xc3).unwrap() + 1;
    let mut chunks: VecDeque<Vec<u8>> =
        VecDeque::from(vec![text[..split].to_vec(), text[split..].to_vec()]);

    let frame = read_frame(|| Ok(chunks.pop_front().unwrap_or_default())).unwrap();
    assert_eq!(frame, "Title: caf\u{e9}\nOK\n");
}

#[test]
fn test_stream_closed_mid_frame() {
    let (receive, _calls) = scripted(&["file: a\n", "Title: x\n"]);
    assert!(matches!(read_frame(receive), Err(MpdError::ConnectionLost)));
}

#[test]
fn test_receive_error_propagates() {
    let mut first = true;
    let result = read_frame(|| {
        if first {
            first = false;
            Ok(b"file: a\n".to_vec())
        } else {
            Err(MpdError::NotConnected)
        }
    });
    assert!(matches!(result, Err(MpdError::NotConnected)));
}
