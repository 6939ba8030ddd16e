//! Mock Solana JSON-RPC server for testing
//!
//! Serves `getBalance` over plain HTTP on a random local port so the RPC
//! client can be exercised without a real cluster:
//! - POST / with a getBalance request returns
//!   `{ jsonrpc, id, result: { context: { slot }, value } }`
//! - unknown methods return a JSON-RPC "Method not found" error

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use serde_json::{json, Value as JsonValue};

/// Mock RPC server for testing
pub struct MockRpcServer {
    port: u16,
    running: Arc<AtomicBool>,
    thread_handle: Option<thread::JoinHandle<()>>,
}

/// Configuration for mock responses
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// Lamports per address; unknown addresses have zero
    pub balances: HashMap<String, u64>,
    /// Answer every request with this JSON-RPC error
    pub rpc_error: Option<(i64, String)>,
    /// Answer every request with this HTTP status and an empty body
    pub http_status: Option<u16>,
    /// Delay in milliseconds before responding
    pub delay_ms: u64,
}

impl MockConfig {
    pub fn with_balance(mut self, address: &str, lamports: u64) -> Self {
        self.balances.insert(address.to_string(), lamports);
        self
    }
}

impl MockRpcServer {
    /// Start a new mock server on a random available port
    pub fn start(config: MockConfig) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let port = listener.local_addr()?.port();
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();

        // Non-blocking so the accept loop notices shutdown
        listener.set_nonblocking(true)?;

        let thread_handle = thread::spawn(move || {
            while running_clone.load(Ordering::SeqCst) {
                match listener.accept() {
                    Ok((stream, _)) => {
                        let cfg = config.clone();
                        thread::spawn(move || {
                            handle_connection(stream, &cfg);
                        });
                    }
                    Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                        thread::sleep(std::time::Duration::from_millis(10));
                    }
                    Err(_) => break,
                }
            }
        });

        Ok(Self {
            port,
            running,
            thread_handle: Some(thread_handle),
        })
    }

    /// Endpoint URL for this mock server
    pub fn endpoint(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for MockRpcServer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Read one HTTP request and return its body
fn read_body(stream: &mut TcpStream) -> Option<String> {
    stream.set_nonblocking(false).ok()?;

    let mut data = Vec::new();
    let mut buffer = [0; 4096];

    loop {
        let n = stream.read(&mut buffer).ok()?;
        if n == 0 {
            return None;
        }
        data.extend_from_slice(&buffer[..n]);

        let text = String::from_utf8_lossy(&data);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    if name.trim().eq_ignore_ascii_case("content-length") {
                        value.trim().parse::<usize>().ok()
                    } else {
                        None
                    }
                })
                .unwrap_or(0);

            let body_start = header_end + 4;
            if data.len() >= body_start + content_length {
                let body = &data[body_start..body_start + content_length];
                return Some(String::from_utf8_lossy(body).into_owned());
            }
        }
    }
}

fn handle_connection(mut stream: TcpStream, config: &MockConfig) {
    let Some(body) = read_body(&mut stream) else {
        return;
    };

    if config.delay_ms > 0 {
        thread::sleep(std::time::Duration::from_millis(config.delay_ms));
    }

    if let Some(status) = config.http_status {
        send_response(&mut stream, status, "Error", "");
        return;
    }

    let request: JsonValue = match serde_json::from_str(&body) {
        Ok(v) => v,
        Err(_) => {
            let response = json!({
                "jsonrpc": "2.0",
                "id": null,
                "error": { "code": -32700, "message": "Parse error" }
            });
            send_response(&mut stream, 200, "OK", &response.to_string());
            return;
        }
    };

    let id = request["id"].clone();

    if let Some((code, message)) = &config.rpc_error {
        let response = json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": { "code": code, "message": message }
        });
        send_response(&mut stream, 200, "OK", &response.to_string());
        return;
    }

    let response = match request["method"].as_str() {
        Some("getBalance") => {
            let address = request["params"][0].as_str().unwrap_or_default();
            let lamports = config.balances.get(address).copied().unwrap_or(0);
            json!({
                "jsonrpc": "2.0",
                "id": id,
                "result": { "context": { "slot": 1 }, "value": lamports }
            })
        }
        _ => json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": { "code": -32601, "message": "Method not found" }
        }),
    };

    send_response(&mut stream, 200, "OK", &response.to_string());
}

fn send_response(stream: &mut TcpStream, status: u16, status_text: &str, body: &str) {
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        status_text,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::rpc::RpcClient;
    use crate::domain::{AccountAddress, Commitment};
    use crate::ports::LedgerClient;

    const ADDRESS: &str = "11111111111111111111111111111111";

    #[tokio::test]
    async fn test_get_balance() {
        let server =
            MockRpcServer::start(MockConfig::default().with_balance(ADDRESS, 2_500_000_000))
                .unwrap();

        let client = RpcClient::new(&server.endpoint()).unwrap();
        let address = AccountAddress::parse(ADDRESS).unwrap();
        let lamports = client
            .get_balance(&address, Commitment::Confirmed)
            .await
            .unwrap();

        assert_eq!(lamports, 2_500_000_000);
    }

    #[tokio::test]
    async fn test_unknown_address_has_zero_balance() {
        let server = MockRpcServer::start(MockConfig::default()).unwrap();

        let client = RpcClient::new(&server.endpoint()).unwrap();
        let address = AccountAddress::from_bytes(&[7u8; 32]);
        let lamports = client
            .get_balance(&address, Commitment::Confirmed)
            .await
            .unwrap();

        assert_eq!(lamports, 0);
    }

    #[tokio::test]
    async fn test_rpc_error_is_surfaced() {
        let server = MockRpcServer::start(MockConfig {
            rpc_error: Some((-32602, "Invalid param: WrongSize".to_string())),
            ..Default::default()
        })
        .unwrap();

        let client = RpcClient::new(&server.endpoint()).unwrap();
        let address = AccountAddress::parse(ADDRESS).unwrap();
        let err = client
            .get_balance(&address, Commitment::Confirmed)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("-32602"));
        assert!(err.to_string().contains("WrongSize"));
    }

    #[tokio::test]
    async fn test_rate_limit() {
        let server = MockRpcServer::start(MockConfig {
            http_status: Some(429),
            ..Default::default()
        })
        .unwrap();

        let client = RpcClient::new(&server.endpoint()).unwrap();
        let address = AccountAddress::parse(ADDRESS).unwrap();
        let err = client
            .get_balance(&address, Commitment::Confirmed)
            .await
            .unwrap_err();

        assert!(
            err.to_string().to_lowercase().contains("rate limit"),
            "Expected 'rate limit' in error, got: {}",
            err
        );
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // Bind and drop to get a port nothing listens on
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();

        let client = RpcClient::new(&format!("http://127.0.0.1:{}", port)).unwrap();
        let address = AccountAddress::parse(ADDRESS).unwrap();
        let result = client.get_balance(&address, Commitment::Confirmed).await;

        assert!(result.is_err());
    }
}
