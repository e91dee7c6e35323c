//! One-shot HTTP responder bound to a loopback port.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::JoinHandle;
use std::time::Duration;

/// Serves exactly one request on `127.0.0.1`, then returns the raw request
/// (headers and body) from [`OneShotServer::request`].
pub struct OneShotServer {
    url: String,
    handle: JoinHandle<String>,
}

impl OneShotServer {
    /// Reply with `status` and a JSON `body`.
    pub fn respond(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        Self::spawn(move |stream| {
            let response = format!(
                "HTTP/1.1 {status} OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        })
    }

    /// Read the request, then hold the connection open without answering.
    pub fn stall(hold: Duration) -> Self {
        Self::spawn(move |_stream| std::thread::sleep(hold))
    }

    fn spawn<F>(reply: F) -> Self
    where
        F: FnOnce(&mut std::net::TcpStream) + Send + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let url = format!("http://{}", listener.local_addr().expect("local addr"));
        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            let request = read_request(&mut stream);
            reply(&mut stream);
            request
        });
        Self { url, handle }
    }

    /// Base URL, e.g. `http://127.0.0.1:40123`.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Wait for the exchange to finish and return the raw request.
    pub fn request(self) -> String {
        self.handle.join().expect("server thread")
    }
}

fn read_request(stream: &mut std::net::TcpStream) -> String {
    let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
    let mut head = String::new();
    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        if let Some(value) = line.to_ascii_lowercase().strip_prefix("content-length:") {
            content_length = value.trim().parse().unwrap_or(0);
        }
        let end = line == "\r\n";
        head.push_str(&line);
        if end {
            break;
        }
    }
    let mut body = vec![0u8; content_length];
    let _ = reader.read_exact(&mut body);
    head + &String::from_utf8_lossy(&body)
}
