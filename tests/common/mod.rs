//! Scripted fake MPD server shared by the network and client tests.

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use mpdkit::Config;

pub const GREETING: &str = "OK MPD 0.23.5\n";

/// One scripted action on an accepted connection
#[derive(Debug, Clone)]
pub enum Step {
    /// Write raw bytes to the client
    Write(&'static str),

    /// Read one request line and record it
    ReadLine,
}

/// A server that accepts one connection per session script, in order
pub struct FakeServer {
    port: u16,
    accepted: Arc<AtomicUsize>,
    received: Arc<Mutex<Vec<String>>>,
    handle: Option<JoinHandle<()>>,
}

impl FakeServer {
    pub fn start(sessions: Vec<Vec<Step>>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let accepted = Arc::new(AtomicUsize::new(0));
        let received = Arc::new(Mutex::new(Vec::new()));

        let accepted_clone = Arc::clone(&accepted);
        let received_clone = Arc::clone(&received);
        let handle = thread::spawn(move || {
            for steps in sessions {
                let (stream, _) = match listener.accept() {
                    Ok(conn) => conn,
                    Err(_) => return,
                };
                accepted_clone.fetch_add(1, Ordering::SeqCst);
                run_session(stream, &steps, &received_clone);
            }
        });

        Self {
            port,
            accepted,
            received,
            handle: Some(handle),
        }
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn config(&self) -> Config {
        Config::builder()
            .host("127.0.0.1")
            .port(self.port)
            .read_timeout_ms(5000)
            .write_timeout_ms(5000)
            .build()
    }

    /// Connections accepted so far
    pub fn accepted(&self) -> usize {
        self.accepted.load(Ordering::SeqCst)
    }

    /// Wait for the script to finish and return every line read
    pub fn finish(mut self) -> Vec<String> {
        if let Some(handle) = self.handle.take() {
            handle.join().unwrap();
        }
        let lines = self.received.lock().unwrap();
        lines.clone()
    }
}

fn run_session(stream: TcpStream, steps: &[Step], received: &Mutex<Vec<String>>) {
    let mut writer = stream.try_clone().unwrap();
    let mut reader = BufReader::new(stream);

    for step in steps {
        match step {
            Step::Write(data) => {
                // The client may already be gone
                if writer.write_all(data.as_bytes()).and_then(|_| writer.flush()).is_err() {
                    return;
                }
            }
            Step::ReadLine => {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap_or(0) == 0 {
                    return;
                }
                received.lock().unwrap().push(line);
            }
        }
    }
    // Dropping both halves closes the session
}

/// A port with nothing listening on it
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}
