use anchor_lang::solana_program::pubkey::Pubkey;

/**
 * Connected wallet session
 *
 * Created on the first successful `connect()` and kept for the lifetime of
 * the page. The connection handle itself is the provider owned by the
 * workflow; the session only records who is connected.
 *
 * Lifecycle:
 * 1. Created when the provider accepts the connection request
 * 2. Considered gone as soon as the provider reports it is disconnected
 * 3. Dropped with the workflow on page unload
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalletSession {
    /// Public key returned by the provider
    pub address: Pubkey,
}

impl WalletSession {
    pub fn new(address: Pubkey) -> Self {
        Self { address }
    }
}
