//! Test support: a recording audit log and a canned-response HTTP stub.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Mutex;
use std::thread;

use payload::{AuditLog, PlanKey};

/// Records every audit line for assertions.
#[derive(Default)]
pub struct RecordingAudit {
    lines: Mutex<Vec<(String, bool)>>,
}

impl RecordingAudit {
    pub fn infos(&self) -> Vec<String> {
        self.filtered(false)
    }

    pub fn errors(&self) -> Vec<String> {
        self.filtered(true)
    }

    fn filtered(&self, errors: bool) -> Vec<String> {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, is_error)| *is_error == errors)
            .map(|(message, _)| message.clone())
            .collect()
    }
}

impl AuditLog for RecordingAudit {
    fn append(&self, _plan: &PlanKey, message: &str, is_error: bool) {
        self.lines
            .lock()
            .unwrap()
            .push((message.to_owned(), is_error));
    }
}

/// Starts a stub HTTP server answering every request with `200 ok`.
///
/// Each raw request (head + body) is pushed into the returned receiver. The
/// server thread lives until the process exits.
pub fn stub_server() -> (SocketAddr, Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
    let addr = listener.local_addr().expect("stub server address");
    let (tx, rx) = channel();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(stream) = stream else { break };
            handle_request(stream, &tx);
        }
    });

    (addr, rx)
}

fn handle_request(mut stream: TcpStream, tx: &Sender<String>) {
    let mut data = Vec::new();
    let mut buf = [0u8; 8192];

    loop {
        let Ok(n) = stream.read(&mut buf) else { return };
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buf[..n]);
        if request_complete(&data) {
            break;
        }
    }

    let _ = tx.send(String::from_utf8_lossy(&data).into_owned());
    let _ = stream.write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\nok");
}

/// True once the buffer holds the full head plus `Content-Length` bytes of
/// body.
fn request_complete(data: &[u8]) -> bool {
    let Some(head_end) = data.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };

    let head = String::from_utf8_lossy(&data[..head_end]);
    let content_length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);

    data.len() - (head_end + 4) >= content_length
}
