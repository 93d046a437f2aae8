use thiserror::Error;

/// Coarse grouping of failures, used for logging and for tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Something the page needs is missing (no wallet extension)
    Environment,
    /// The user declined a wallet prompt
    UserRejection,
    /// Input checks that stop a claim before any call is made
    Validation,
    /// RPC failures and unconfirmed transactions
    Network,
    /// Non-success replies from the claim backend
    Backend,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClaimError {
    // Environment errors
    #[error("Solana wallet not found. Please install Phantom or Solflare.")]
    WalletNotFound,

    // User rejection errors
    #[error("Failed to connect wallet.")]
    ConnectionRejected(String),
    #[error("Transaction signing was rejected: {0}")]
    SigningRejected(String),

    // Validation errors
    #[error("Please provide a wallet address!")]
    EmptyAddress,
    #[error("Invalid wallet address.")]
    InvalidAddress(String),
    #[error("Please disable your ad blocker to use the faucet.")]
    AdBlockerDetected,

    // Network / ledger errors
    #[error("RPC request failed: {0}")]
    Rpc(String),
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),
    #[error("Transaction {0} was not confirmed in time.")]
    ConfirmationTimeout(String),
    #[error("Network request failed: {0}")]
    Http(String),

    // Backend errors
    #[error("{message}")]
    Backend {
        status: u16,
        message: String,
    },
}

impl ClaimError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClaimError::WalletNotFound => ErrorKind::Environment,
            ClaimError::ConnectionRejected(_) | ClaimError::SigningRejected(_) => {
                ErrorKind::UserRejection
            }
            ClaimError::EmptyAddress
            | ClaimError::InvalidAddress(_)
            | ClaimError::AdBlockerDetected => ErrorKind::Validation,
            ClaimError::Rpc(_)
            | ClaimError::TransactionFailed(_)
            | ClaimError::ConfirmationTimeout(_)
            | ClaimError::Http(_) => ErrorKind::Network,
            ClaimError::Backend { .. } => ErrorKind::Backend,
        }
    }
}
