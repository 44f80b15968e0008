//! Codec Tests
//!
//! Tests for request line encoding and argument quoting.

use std::io::Cursor;
use mpdkit::protocol::{encode_request, quote_argument, write_request};

/// Split a request line back into tokens, honouring double quotes
fn split_request(line: &str) -> Vec<String> {
    let line = line.strip_suffix('\n').expect("line must end with newline");
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    for c in line.chars() {
        match c {
            '"' => quoted = !quoted,
            ' ' if !quoted => tokens.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    tokens.push(current);
    tokens
}

// =============================================================================
// Encoding Tests
// =============================================================================

#[test]
fn test_encode_without_arguments() {
    assert_eq!(encode_request::<&str>("status", &[]), "status\n");
}

#[test]
fn test_encode_plain_argument() {
    assert_eq!(encode_request("setvol", &["50"]), "setvol 50\n");
}

#[test]
fn test_encode_argument_with_space_is_quoted() {
    assert_eq!(encode_request("setvol", &["with space"]), "setvol \"with space\"\n");
}

#[test]
fn test_encode_multiple_arguments() {
    let line = encode_request("find", &["artist", "The Beatles"]);
    assert_eq!(line, "find artist \"The Beatles\"\n");
}

#[test]
fn test_encode_accepts_owned_strings() {
    let args = vec!["1".to_string(), "5:10".to_string()];
    assert_eq!(encode_request("move", &args), "move 1 5:10\n");
}

#[test]
fn test_encode_ignores_catalog_arity() {
    // More arguments than documented still go out as given
    let line = encode_request("stop", &["a", "b", "c"]);
    assert_eq!(line, "stop a b c\n");
}

#[test]
fn test_encode_does_not_escape_quotes() {
    let line = encode_request("add", &["a \"b\" c"]);
    assert_eq!(line, "add \"a \"b\" c\"\n");
}

#[test]
fn test_quote_argument_borrows_when_unchanged() {
    assert!(matches!(quote_argument("plain"), std::borrow::Cow::Borrowed("plain")));
    assert_eq!(quote_argument("two words"), "\"two words\"");
}

#[test]
fn test_tabs_do_not_trigger_quoting() {
    assert_eq!(quote_argument("a\tb"), "a\tb");
}

// =============================================================================
// Token Recovery Tests
// =============================================================================

#[test]
fn test_split_recovers_arguments() {
    let cases: Vec<Vec<&str>> = vec![
        vec![],
        vec!["0"],
        vec!["Artist", "Pink Floyd"],
        vec!["My Playlist", "music/a b/c d.flac", "3"],
    ];

    for args in cases {
        let line = encode_request("cmd", &args);
        let tokens = split_request(&line);
        assert_eq!(tokens[0], "cmd");
        assert_eq!(&tokens[1..], &args[..], "line: {:?}", line);
    }
}

// =============================================================================
// Stream Tests
// =============================================================================

#[test]
fn test_write_request_to_stream() {
    let mut buffer = Cursor::new(Vec::new());
    let line = encode_request("play", &["3"]);
    write_request(&mut buffer, &line).unwrap();
    assert_eq!(buffer.into_inner(), b"play 3\n");
}
