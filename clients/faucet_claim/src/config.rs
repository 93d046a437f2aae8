use std::str::FromStr;

use anchor_lang::solana_program::pubkey::Pubkey;
use serde::Deserialize;

use crate::constants::*;
use crate::error::ClaimError;

/**
 * Client configuration
 *
 * Every field defaults to the matching constant, so an empty JSON object
 * (or `ClaimConfig::default()`) reproduces the production faucet. Hosts may
 * override individual fields, e.g. to point at devnet.
 */
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClaimConfig {
    /// JSON-RPC endpoint of the ledger
    pub rpc_url: String,

    /// Commitment used for reads and confirmation
    pub commitment: String,

    /// Base58 mint of the faucet token
    pub token_mint: String,

    /// Backend route receiving `{ wallet_address }`
    pub claim_endpoint: String,

    /// Explorer prefix for transaction links
    pub explorer_tx_url: String,

    /// Ad-serving URL fetched by the probe
    pub ad_probe_url: String,

    /// Delay before the probe fires
    pub ad_probe_delay_ms: u32,

    /// Confirmation polling cadence
    pub confirm_poll_interval_ms: u32,

    /// Confirmation polling budget
    pub confirm_max_polls: u32,
}

impl Default for ClaimConfig {
    fn default() -> Self {
        Self {
            rpc_url: RPC_URL.to_string(),
            commitment: COMMITMENT.to_string(),
            token_mint: TOKEN_MINT_ADDRESS.to_string(),
            claim_endpoint: CLAIM_ENDPOINT.to_string(),
            explorer_tx_url: EXPLORER_TX_URL.to_string(),
            ad_probe_url: AD_PROBE_URL.to_string(),
            ad_probe_delay_ms: AD_PROBE_DELAY_MS,
            confirm_poll_interval_ms: CONFIRM_POLL_INTERVAL_MS,
            confirm_max_polls: CONFIRM_MAX_POLLS,
        }
    }
}

impl ClaimConfig {
    /// Parse a JSON override; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn token_mint(&self) -> Result<Pubkey, ClaimError> {
        Pubkey::from_str(&self.token_mint)
            .map_err(|e| ClaimError::InvalidAddress(format!("token mint {}: {}", self.token_mint, e)))
    }

    pub fn explorer_link(&self, signature: &str) -> String {
        format!("{}{}", self.explorer_tx_url, signature)
    }
}
