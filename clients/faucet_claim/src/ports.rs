//! Capabilities the claim workflow needs from its environment.
//!
//! The browser build implements these on top of `window.solana`, `fetch` and
//! the DOM (see `web`); tests implement them with in-memory mocks. All futures
//! run on a single-threaded executor, so none of them are required to be `Send`.

#![allow(async_fn_in_trait)]

use anchor_lang::solana_program::hash::Hash;
use anchor_lang::solana_program::pubkey::Pubkey;

use crate::error::ClaimError;
use crate::event::Status;
use crate::ledger::AccountSnapshot;
use crate::state::HttpReply;
use crate::utils::{SignedTransaction, UnsignedTransaction};

/// Wallet extension able to connect and sign
pub trait WalletProvider {
    /// Whether a provider is injected at all
    fn is_available(&self) -> bool;

    fn is_connected(&self) -> bool;

    /// Ask the user to connect, returns the connected public key
    async fn connect(&self) -> Result<Pubkey, ClaimError>;

    /// Ask the user to sign; the result carries every required signature
    async fn sign_transaction(
        &self,
        transaction: UnsignedTransaction,
    ) -> Result<SignedTransaction, ClaimError>;
}

/// Ledger operations used by the claim, all at the configured commitment
pub trait Ledger {
    async fn get_account_info(&self, address: &Pubkey) -> Result<Option<AccountSnapshot>, ClaimError>;

    async fn get_latest_blockhash(&self) -> Result<Hash, ClaimError>;

    /// Submit wire bytes, returns the base58 transaction signature
    async fn send_raw_transaction(&self, wire: &[u8]) -> Result<String, ClaimError>;

    /// Resolves once the signature reaches the commitment level
    async fn confirm_transaction(&self, signature: &str) -> Result<(), ClaimError>;
}

/// Carries JSON-RPC request bodies to the ledger endpoint
pub trait RpcTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<String, ClaimError>;

    async fn sleep(&self, millis: u32);
}

/// Backend that performs the token transfer
pub trait ClaimBackend {
    async fn post_claim(&self, endpoint: &str, body: String) -> Result<HttpReply, ClaimError>;
}

/// One-shot reachability check of an ad-serving URL
pub trait AdProbe {
    /// `true` when the request completed, whatever the status
    async fn fetch(&self, url: &str) -> bool;
}

/// Presentation surface: address field, action control, status line
pub trait UiPort {
    fn recipient_address(&self) -> String;

    fn report(&self, status: &Status);

    /// Busy: control disabled with the processing label.
    /// Idle: control enabled with the claim label.
    fn set_busy(&self, busy: bool);

    /// Fill and lock the address field, switch the control to the claim label
    fn show_connected(&self, address: &str);

    /// Disable the control for good after an ad blocker is detected
    fn block_claims(&self);
}
