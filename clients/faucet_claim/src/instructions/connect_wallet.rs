use tracing::info;

use crate::error::ClaimError;
use crate::ports::WalletProvider;
use crate::state::WalletSession;

/**
 * Connects the injected wallet provider
 *
 * @param wallet - Provider injected by the host page
 *
 * Errors:
 * - WalletNotFound when no provider is injected
 * - ConnectionRejected when the user declines or the provider fails
 */
pub async fn handle_connect_wallet<W: WalletProvider>(wallet: &W) -> Result<WalletSession, ClaimError> {
    if !wallet.is_available() {
        return Err(ClaimError::WalletNotFound);
    }

    info!("connecting wallet");
    let address = wallet.connect().await.map_err(|e| match e {
        ClaimError::ConnectionRejected(_) => e,
        other => ClaimError::ConnectionRejected(other.to_string()),
    })?;

    info!(%address, "wallet connected");
    Ok(WalletSession::new(address))
}
