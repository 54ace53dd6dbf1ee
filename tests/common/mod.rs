//! Shared utilities for end-to-end tests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use greeter::config::{AppState, Config};
use greeter::routing::RouteTable;
use greeter::server;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A server running on an ephemeral loopback port
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Trigger graceful shutdown and wait for the accept loop to exit
    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        tokio::time::timeout(Duration::from_secs(15), &mut self.handle)
            .await
            .expect("server did not shut down")
            .expect("server task panicked");
    }
}

pub async fn start_server() -> TestServer {
    start_server_with(Config::default()).await
}

pub async fn start_server_with(config: Config) -> TestServer {
    let listener = server::create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
    let addr = listener.local_addr().unwrap();
    let state = Arc::new(AppState::new(config, RouteTable::greetings().unwrap()));
    let (tx, rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(server::run(listener, state, async move {
        let _ = rx.await;
    }));

    TestServer {
        addr,
        shutdown: Some(tx),
        handle,
    }
}

/// Parsed HTTP/1.1 response
#[derive(Debug)]
pub struct RawResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

/// Send raw bytes and read until the server closes the connection
pub async fn send_raw(addr: SocketAddr, raw: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(raw.as_bytes()).await.unwrap();

    let mut buf = Vec::new();
    tokio::time::timeout(Duration::from_secs(5), stream.read_to_end(&mut buf))
        .await
        .expect("server did not close the connection")
        .unwrap();
    String::from_utf8(buf).unwrap()
}

/// One request on a fresh connection, closed after the response
pub async fn request(addr: SocketAddr, method: &str, path: &str) -> RawResponse {
    let raw = format!("{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    parse_response(&send_raw(addr, &raw).await)
}

pub fn parse_response(raw: &str) -> RawResponse {
    let (head, body) = raw.split_once("\r\n\r\n").expect("no header terminator");
    let mut lines = head.split("\r\n");
    let status_line = lines.next().expect("empty response");
    let status = status_line
        .split_whitespace()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .expect("bad status line");

    let headers = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
        .collect();

    RawResponse {
        status,
        headers,
        body: body.to_string(),
    }
}
