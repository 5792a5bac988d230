//! Test-only stand-ins for the network transport.
//!
//! [`RecordingTransport`] replaces the network entirely. [`serve_once`]
//! runs a real loopback HTTP server for exercising `UreqTransport` and the
//! CLI `fetch` command.

use std::cell::RefCell;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use anyhow::{Result, anyhow};
use serde_json::Value;

use crate::fetch::Transport;

/// Transport that returns a prepared body and records every requested URL.
pub struct RecordingTransport {
    response: std::result::Result<String, String>,
    calls: RefCell<Vec<String>>,
}

impl RecordingTransport {
    /// Respond to every request with `body`.
    pub fn new(body: &str) -> Self {
        Self {
            response: Ok(body.to_string()),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Respond to every request with `payload` serialized as JSON.
    pub fn with_json(payload: &Value) -> Self {
        Self::new(&payload.to_string())
    }

    /// Fail every request with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// URLs requested so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Transport for RecordingTransport {
    fn get(&self, url: &str) -> Result<String> {
        self.calls.borrow_mut().push(url.to_string());
        self.response.clone().map_err(|message| anyhow!(message))
    }
}

/// Serve a single HTTP response on a loopback port and return its URL.
///
/// The server thread accepts one connection, drains the request headers,
/// writes `status` with `body` as `application/json` and closes.
pub fn serve_once(status: u16, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|window| window == b"\r\n\r\n") {
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.flush();
    });
    format!("http://{addr}/")
}
