//! Solana JSON-RPC client
//!
//! Issues JSON-RPC 2.0 requests over HTTP POST against a cluster endpoint.
//! Only the queries the core needs are implemented.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use url::Url;

use crate::domain::result::{Error, Result};
use crate::domain::{AccountAddress, Commitment};
use crate::ports::LedgerClient;

/// Request timeout for every RPC call
const REQUEST_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// Wire Models
// =============================================================================

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: JsonValue,
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// Value wrapped with the slot it was read at
#[derive(Debug, Deserialize)]
struct WithContext<T> {
    #[allow(dead_code)]
    context: RpcContext,
    value: T,
}

#[derive(Debug, Deserialize)]
struct RpcContext {
    #[allow(dead_code)]
    slot: u64,
}

// =============================================================================
// RPC Client
// =============================================================================

/// Validate that an endpoint is an http(s) URL
pub fn validate_endpoint(endpoint: &str) -> Result<Url> {
    let parsed = Url::parse(endpoint)
        .map_err(|e| Error::InvalidEndpoint(format!("{}: {}", endpoint, e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(Error::InvalidEndpoint(format!(
            "{}: unsupported scheme '{}'",
            endpoint, scheme
        ))),
    }
}

/// JSON-RPC connection bound to one endpoint
///
/// Building the client does not contact the endpoint.
#[derive(Debug)]
pub struct RpcClient {
    client: Client,
    endpoint: String,
    next_id: AtomicU64,
}

impl RpcClient {
    pub fn new(endpoint: &str) -> Result<Self> {
        validate_endpoint(endpoint)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            next_id: AtomicU64::new(1),
        })
    }

    /// Send one request and decode its `result`
    async fn call<T>(&self, method: &str, params: JsonValue) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        self.check_response_status(&response)?;

        let body: RpcResponse<T> = response
            .json()
            .await
            .map_err(|e| Error::Http(format!("Failed to parse RPC response: {}", e)))?;

        if let Some(err) = body.error {
            return Err(Error::Rpc {
                code: err.code,
                message: err.message,
            });
        }

        body.result
            .ok_or_else(|| Error::Http(format!("RPC response for '{}' has no result", method)))
    }

    fn map_request_error(&self, error: reqwest::Error) -> Error {
        if error.is_timeout() {
            Error::Http(format!(
                "Connection timed out after {} seconds",
                REQUEST_TIMEOUT_SECS
            ))
        } else if error.is_connect() {
            Error::Http(format!("Unable to connect to {}", self.endpoint))
        } else {
            Error::Http(format!("RPC request failed: {}", error))
        }
    }

    fn check_response_status(&self, response: &reqwest::Response) -> Result<()> {
        match response.status().as_u16() {
            200 => Ok(()),
            429 => Err(Error::Http(
                "RPC rate limit exceeded. Please wait a moment and try again.".to_string(),
            )),
            403 => Err(Error::Http(format!("Access to {} denied", self.endpoint))),
            status => Err(Error::Http(format!("RPC endpoint returned HTTP {}", status))),
        }
    }
}

#[async_trait]
impl LedgerClient for RpcClient {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn get_balance(&self, address: &AccountAddress, commitment: Commitment) -> Result<u64> {
        let balance: WithContext<u64> = self
            .call(
                "getBalance",
                json!([address.as_str(), { "commitment": commitment.as_str() }]),
            )
            .await?;
        Ok(balance.value)
    }
}
