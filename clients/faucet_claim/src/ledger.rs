use std::cell::Cell;
use std::str::FromStr;

use anchor_lang::solana_program::hash::Hash;
use anchor_lang::solana_program::pubkey::Pubkey;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::config::ClaimConfig;
use crate::error::ClaimError;
use crate::ports::{Ledger, RpcTransport};

/// Parsed `getAccountInfo` value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSnapshot {
    pub lamports: u64,
    pub owner: Pubkey,
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

#[derive(Debug, Deserialize)]
struct WithContext<T> {
    value: T,
}

#[derive(Debug, Deserialize)]
struct RpcAccount {
    lamports: u64,
    owner: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RpcBlockhash {
    blockhash: String,
    last_valid_block_height: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RpcSignatureStatus {
    confirmation_status: Option<String>,
    err: Option<Value>,
}

fn commitment_rank(level: &str) -> u8 {
    match level {
        "finalized" => 2,
        "confirmed" => 1,
        _ => 0,
    }
}

/**
 * JSON-RPC 2.0 ledger client
 *
 * Speaks the Solana RPC dialect over any `RpcTransport`. Every read uses the
 * configured commitment; confirmation polls `getSignatureStatuses` until the
 * signature reaches that commitment, fails on-chain, or the poll budget runs out.
 */
pub struct RpcLedger<T> {
    transport: T,
    url: String,
    commitment: String,
    poll_interval_ms: u32,
    max_polls: u32,
    next_id: Cell<u64>,
}

impl<T: RpcTransport> RpcLedger<T> {
    pub fn new(transport: T, config: &ClaimConfig) -> Self {
        Self {
            transport,
            url: config.rpc_url.clone(),
            commitment: config.commitment.clone(),
            poll_interval_ms: config.confirm_poll_interval_ms,
            max_polls: config.confirm_max_polls,
            next_id: Cell::new(1),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn call<R: DeserializeOwned>(&self, method: &str, params: Value) -> Result<R, ClaimError> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });
        debug!(method, id, "rpc request");

        let raw = self.transport.post_json(&self.url, body.to_string()).await?;
        let response: RpcResponse<R> = serde_json::from_str(&raw)
            .map_err(|e| ClaimError::Rpc(format!("{}: malformed response: {}", method, e)))?;

        if let Some(err) = response.error {
            return Err(ClaimError::Rpc(format!("{} ({}): {}", method, err.code, err.message)));
        }
        response
            .result
            .ok_or_else(|| ClaimError::Rpc(format!("{}: response without result", method)))
    }
}

impl<T: RpcTransport> Ledger for RpcLedger<T> {
    async fn get_account_info(&self, address: &Pubkey) -> Result<Option<AccountSnapshot>, ClaimError> {
        let reply: WithContext<Option<RpcAccount>> = self
            .call(
                "getAccountInfo",
                json!([address.to_string(), { "encoding": "base64", "commitment": self.commitment }]),
            )
            .await?;

        reply
            .value
            .map(|account| {
                let owner = Pubkey::from_str(&account.owner)
                    .map_err(|e| ClaimError::Rpc(format!("getAccountInfo: bad owner: {}", e)))?;
                Ok(AccountSnapshot {
                    lamports: account.lamports,
                    owner,
                })
            })
            .transpose()
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, ClaimError> {
        let reply: WithContext<RpcBlockhash> = self
            .call("getLatestBlockhash", json!([{ "commitment": self.commitment }]))
            .await?;
        debug!(
            blockhash = %reply.value.blockhash,
            last_valid_block_height = reply.value.last_valid_block_height,
            "latest blockhash"
        );
        Hash::from_str(&reply.value.blockhash)
            .map_err(|e| ClaimError::Rpc(format!("getLatestBlockhash: bad blockhash: {}", e)))
    }

    async fn send_raw_transaction(&self, wire: &[u8]) -> Result<String, ClaimError> {
        let encoded = bs58::encode(wire).into_string();
        self.call(
            "sendTransaction",
            json!([encoded, { "encoding": "base58", "preflightCommitment": self.commitment }]),
        )
        .await
    }

    async fn confirm_transaction(&self, signature: &str) -> Result<(), ClaimError> {
        let wanted = commitment_rank(&self.commitment);

        for poll in 0..self.max_polls {
            if poll > 0 {
                self.transport.sleep(self.poll_interval_ms).await;
            }

            let reply: WithContext<Vec<Option<RpcSignatureStatus>>> = self
                .call("getSignatureStatuses", json!([[signature]]))
                .await?;

            let Some(Some(status)) = reply.value.into_iter().next() else {
                continue;
            };
            if let Some(err) = status.err.filter(|e| !e.is_null()) {
                return Err(ClaimError::TransactionFailed(err.to_string()));
            }
            let reached = status
                .confirmation_status
                .as_deref()
                .map(commitment_rank)
                .unwrap_or(0);
            if status.confirmation_status.is_some() && reached >= wanted {
                info!(signature, poll, "transaction confirmed");
                return Ok(());
            }
        }

        Err(ClaimError::ConfirmationTimeout(signature.to_string()))
    }
}
