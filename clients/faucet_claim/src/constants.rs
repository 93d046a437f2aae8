/**
 * Client Constants
 *
 * Fixed values used by the faucet claim client: ledger endpoints, the
 * distributed token, backend routes and every user-facing status string.
 * `ClaimConfig::default()` is built from these values.
 */

/// ===== LEDGER CONSTANTS =====

/// Mint of the token handed out by the faucet
/// - Base58 form, parsed once per attempt in `ClaimConfig::token_mint`
pub const TOKEN_MINT_ADDRESS: &str = "5FMU7DUgkD8cA8hBXc4QSsLA7PzJGSfYEtZBYA1hoCf2";

/// Mainnet RPC endpoint used for account lookups and ATA creation
pub const RPC_URL: &str =
    "https://snowy-sleek-moon.solana-mainnet.quiknode.pro/b782686111aa4eac5d9df855722fc24d95c7cc98/";

/// Commitment level for every RPC read and for confirmation
pub const COMMITMENT: &str = "confirmed";

/// Delay between two `getSignatureStatuses` polls
pub const CONFIRM_POLL_INTERVAL_MS: u32 = 1_000;

/// Number of status polls before a confirmation is reported as timed out
/// - 60 polls at 1s roughly matches the lifetime of a recent blockhash
pub const CONFIRM_MAX_POLLS: u32 = 60;

/// ===== BACKEND CONSTANTS =====

/// Relative route of the claim endpoint on the hosting backend
pub const CLAIM_ENDPOINT: &str = "/claim";

/// Explorer page prefix, the transaction signature is appended
pub const EXPLORER_TX_URL: &str = "https://explorer.solana.com/tx/";

/// ===== AD PROBE CONSTANTS =====

/// Ad-serving script fetched once after load
pub const AD_PROBE_URL: &str = "https://pagead2.googlesyndication.com/pagead/js/adsbygoogle.js";

/// Delay before the probe fires
pub const AD_PROBE_DELAY_MS: u32 = 500;

/// ===== DOM CONSTANTS =====

pub const CLAIM_BUTTON_ID: &str = "claimButton";
pub const WALLET_ADDRESS_ID: &str = "walletAddress";
pub const MESSAGE_ID: &str = "message";

/// ===== CONTROL LABELS =====

pub const LABEL_CLAIM: &str = "Claim Tokens!";
pub const LABEL_PROCESSING: &str = "Processing...";
pub const LABEL_AD_BLOCKED: &str = "Ad Blocker Detected";
pub const EXPLORER_LINK_TEXT: &str = "View Transaction";

/// ===== STATUS MESSAGES =====

pub const MSG_WALLET_CONNECTED: &str = "Wallet connected! Click again to claim.";
pub const MSG_PREPARING: &str = "Please wait, preparing transaction...";
pub const MSG_CREATING_ACCOUNT: &str =
    "Token account not found. Please approve transaction to create it...";
pub const MSG_ACCOUNT_CREATED: &str = "Account created! Claiming tokens...";
pub const MSG_AD_BLOCKER_WARNING: &str = "Please disable ad blocker to support and use the faucet.";
