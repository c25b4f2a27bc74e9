//! Lightweight Solana RPC client
//!
//! Implements only the methods the launch API needs, avoiding the heavy
//! dependency chain of solana-client.

use crate::core::{ChainError, ChainResult};
use base64::Engine;
use serde::Deserialize;
use serde_json::{json, Value};
use solana_sdk::{account::Account, hash::Hash, pubkey::Pubkey};
use std::time::Duration;
use tracing::debug;

/// Lightweight RPC client for Solana
pub struct LightRpcClient {
    url: String,
    commitment: String,
    agent: ureq::Agent,
}

/// RPC response wrapper
#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcError>,
}

/// RPC error structure
#[derive(Debug, Deserialize)]
struct RpcError {
    code: i32,
    message: String,
}

/// Account data response from RPC
#[derive(Debug, Deserialize)]
struct AccountInfo {
    lamports: u64,
    data: (String, String), // (data, encoding)
    owner: String,
    executable: bool,
    #[serde(rename = "rentEpoch")]
    rent_epoch: u64,
}

impl LightRpcClient {
    /// Create a new lightweight RPC client
    pub fn new(url: String, commitment: String, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(10))
            .timeout_read(timeout)
            .build();

        Self {
            url,
            commitment,
            agent,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Make a JSON-RPC call
    async fn call<T>(&self, method: &str, params: Value) -> ChainResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let request_body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params
        });

        debug!("RPC call: {} with params: {:?}", method, params);

        // Use blocking call since ureq is sync
        let response_body = tokio::task::spawn_blocking({
            let agent = self.agent.clone();
            let url = self.url.clone();
            let body = request_body.to_string();

            move || {
                let response = agent
                    .post(&url)
                    .set("Content-Type", "application/json")
                    .send_string(&body)?;

                let text = response.into_string()?;
                Ok::<String, ureq::Error>(text)
            }
        })
        .await
        .map_err(|e| ChainError::Rpc(format!("RPC task failed: {}", e)))?
        .map_err(|e| ChainError::Rpc(e.to_string()))?;

        let rpc_response: RpcResponse<T> = serde_json::from_str(&response_body)
            .map_err(|e| ChainError::Rpc(format!("Invalid RPC response: {}", e)))?;

        if let Some(error) = rpc_response.error {
            return Err(ChainError::Rpc(format!("{} ({})", error.message, error.code)));
        }

        rpc_response
            .result
            .ok_or_else(|| ChainError::Rpc("No result in RPC response".to_string()))
    }

    /// Get the latest blockhash
    pub async fn get_latest_blockhash(&self) -> ChainResult<Hash> {
        let response: Value = self
            .call(
                "getLatestBlockhash",
                json!([{ "commitment": self.commitment }]),
            )
            .await?;

        parse_blockhash(&response)
    }

    /// Get account information
    pub async fn get_account(&self, pubkey: &Pubkey) -> ChainResult<Option<Account>> {
        let params = json!([
            pubkey.to_string(),
            {
                "encoding": "base64",
                "commitment": self.commitment
            }
        ]);

        let response: Value = self.call("getAccountInfo", params).await?;

        if response["value"].is_null() {
            return Ok(None);
        }

        let account_info: AccountInfo = serde_json::from_value(response["value"].clone())
            .map_err(|e| ChainError::Rpc(format!("Invalid account info: {}", e)))?;

        decode_account(account_info).map(Some)
    }

    /// Node health
    pub async fn get_health(&self) -> ChainResult<String> {
        self.call("getHealth", json!([])).await
    }
}

fn parse_blockhash(response: &Value) -> ChainResult<Hash> {
    let blockhash_str = response["value"]["blockhash"]
        .as_str()
        .ok_or_else(|| ChainError::Rpc("Invalid blockhash in response".to_string()))?;

    blockhash_str
        .parse()
        .map_err(|e| ChainError::Rpc(format!("Failed to parse blockhash: {}", e)))
}

fn decode_account(account_info: AccountInfo) -> ChainResult<Account> {
    let data = if account_info.data.1 == "base64" {
        base64::engine::general_purpose::STANDARD
            .decode(&account_info.data.0)
            .map_err(|e| ChainError::Rpc(format!("Failed to decode account data: {}", e)))?
    } else {
        return Err(ChainError::Rpc(format!(
            "Unsupported data encoding: {}",
            account_info.data.1
        )));
    };

    let owner = account_info
        .owner
        .parse()
        .map_err(|e| ChainError::Rpc(format!("Failed to parse owner: {}", e)))?;

    Ok(Account {
        lamports: account_info.lamports,
        data,
        owner,
        executable: account_info.executable,
        rent_epoch: account_info.rent_epoch,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_client_creation() {
        let client = LightRpcClient::new(
            "http://localhost:8899".to_string(),
            "confirmed".to_string(),
            Duration::from_secs(5),
        );
        assert_eq!(client.url(), "http://localhost:8899");
    }

    #[test]
    fn test_parse_blockhash_response() {
        let hash = Hash::new_unique();
        let response = json!({
            "context": { "slot": 1 },
            "value": { "blockhash": hash.to_string(), "lastValidBlockHeight": 100 }
        });

        assert_eq!(parse_blockhash(&response).unwrap(), hash);
        assert!(parse_blockhash(&json!({ "value": {} })).is_err());
    }

    #[test]
    fn test_decode_account() {
        let owner = Pubkey::new_unique();
        let info: AccountInfo = serde_json::from_value(json!({
            "lamports": 10,
            "data": ["AQID", "base64"],
            "owner": owner.to_string(),
            "executable": false,
            "rentEpoch": 0
        }))
        .unwrap();

        let account = decode_account(info).unwrap();
        assert_eq!(account.data, vec![1, 2, 3]);
        assert_eq!(account.owner, owner);
    }
}
