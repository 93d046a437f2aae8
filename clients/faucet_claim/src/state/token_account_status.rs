use anchor_lang::solana_program::pubkey::Pubkey;

/**
 * Associated token account lookup result
 *
 * Computed once per attempt: the derived address plus whether the ledger
 * returned account info for it. Never cached between attempts.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAccountStatus {
    /// ATA derived from (recipient, mint)
    pub address: Pubkey,
    /// Whether the ledger already holds the account
    pub exists: bool,
}
