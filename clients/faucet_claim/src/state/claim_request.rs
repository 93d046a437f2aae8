use std::str::FromStr;

use anchor_lang::solana_program::pubkey::Pubkey;
use serde::Serialize;

use crate::error::ClaimError;

/**
 * A single claim attempt
 *
 * Built fresh for every attempt from the address field and the configured
 * mint. Immutable once built.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimRequest {
    /// Wallet receiving the tokens
    pub recipient: Pubkey,
    /// Mint of the faucet token
    pub mint: Pubkey,
}

/// JSON body posted to the claim endpoint
#[derive(Debug, Serialize)]
pub struct ClaimRequestBody {
    pub wallet_address: String,
}

impl ClaimRequest {
    /// Validate the raw address field and pair it with the mint
    pub fn parse(recipient: &str, mint: Pubkey) -> Result<Self, ClaimError> {
        let trimmed = recipient.trim();
        if trimmed.is_empty() {
            return Err(ClaimError::EmptyAddress);
        }
        let recipient = Pubkey::from_str(trimmed)
            .map_err(|e| ClaimError::InvalidAddress(format!("{}: {}", trimmed, e)))?;
        Ok(Self { recipient, mint })
    }

    pub fn body(&self) -> ClaimRequestBody {
        ClaimRequestBody { wallet_address: self.recipient.to_string() }
    }

    pub fn body_json(&self) -> String {
        // A single string field cannot fail to serialize
        serde_json::to_string(&self.body()).unwrap_or_default()
    }
}
