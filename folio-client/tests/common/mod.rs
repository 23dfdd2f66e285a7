//! Shared helpers for integration tests.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

/// Serve exactly one canned HTTP response on an ephemeral local port.
///
/// Returns the base URL to point the client at, and a channel carrying the
/// raw request (headers + body) the client sent.
pub fn serve_once(
    status: u16,
    reason: &str,
    body: &str,
) -> (String, mpsc::Receiver<String>) {
    let listener =
        TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
    let addr = listener.local_addr().expect("stub addr");
    let (tx, rx) = mpsc::channel();

    let response = if status == 204 {
        format!("HTTP/1.1 {} {}\r\nConnection: close\r\n\r\n", status, reason)
    } else {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            reason,
            body.len(),
            body
        )
    };

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept connection");
        let mut reader =
            BufReader::new(stream.try_clone().expect("clone stream"));

        let mut request = String::new();
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).expect("read header") == 0 {
                break;
            }
            let done = line == "\r\n";
            request.push_str(&line);
            if done {
                break;
            }
        }

        let content_length = request
            .lines()
            .find_map(|l| {
                let (name, value) = l.split_once(':')?;
                if name.trim().eq_ignore_ascii_case("content-length") {
                    value.trim().parse::<usize>().ok()
                } else {
                    None
                }
            })
            .unwrap_or(0);

        if content_length > 0 {
            let mut buf = vec![0u8; content_length];
            reader.read_exact(&mut buf).expect("read body");
            request.push_str(&String::from_utf8_lossy(&buf));
        }

        stream
            .write_all(response.as_bytes())
            .expect("write response");
        let _ = tx.send(request);
    });

    (format!("http://{}", addr), rx)
}

/// Base URL nothing listens on; connections are refused immediately.
pub fn unreachable_base_url() -> String {
    // Bind a port, then drop the listener so the port is closed.
    let listener =
        TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let addr = listener.local_addr().expect("probe addr");
    drop(listener);
    format!("http://{}", addr)
}
