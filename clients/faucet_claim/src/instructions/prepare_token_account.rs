use tracing::{debug, info, warn};

use crate::constants::{MSG_ACCOUNT_CREATED, MSG_CREATING_ACCOUNT};
use crate::error::ClaimError;
use crate::event::Status;
use crate::ports::{Ledger, UiPort, WalletProvider};
use crate::state::{ClaimRequest, TokenAccountStatus};
use crate::utils::{build_create_token_account_tx, derive_token_account};

/// Derives the recipient ATA and asks the ledger whether it exists
pub async fn lookup_token_account<L: Ledger>(
    ledger: &L,
    request: &ClaimRequest,
) -> Result<TokenAccountStatus, ClaimError> {
    let address = derive_token_account(&request.mint, &request.recipient);
    info!(ata = %address, "checking token account");

    let account = ledger.get_account_info(&address).await?;
    if let Some(account) = &account {
        debug!(ata = %address, lamports = account.lamports, owner = %account.owner, "token account found");
        if account.owner != anchor_spl::token::ID {
            warn!(ata = %address, owner = %account.owner, "token account is not owned by the token program");
        }
    }
    Ok(TokenAccountStatus { address, exists: account.is_some() })
}

/**
 * Creates the recipient ATA through a wallet-signed transaction
 *
 * Steps:
 * 1. Fetch a recent blockhash
 * 2. Build the create instruction (payer = owner = recipient)
 * 3. Have the wallet sign, submit the wire bytes
 * 4. Wait for confirmation
 *
 * Returns the transaction signature. Any failure leaves the account
 * unassumed; the caller aborts the claim.
 */
pub async fn create_token_account<L: Ledger, W: WalletProvider>(
    ledger: &L,
    wallet: &W,
    request: &ClaimRequest,
) -> Result<String, ClaimError> {
    let blockhash = ledger.get_latest_blockhash().await?;
    let unsigned = build_create_token_account_tx(&request.mint, &request.recipient, blockhash);

    info!("requesting signature for token account creation");
    let signed = wallet.sign_transaction(unsigned).await?;

    let signature = ledger.send_raw_transaction(&signed.wire_bytes()).await?;
    if signed.id().as_deref() != Some(signature.as_str()) {
        warn!(%signature, local = ?signed.id(), "ledger returned an unexpected transaction id");
    }
    info!(%signature, "token account creation sent, confirming");

    ledger.confirm_transaction(&signature).await?;
    info!(%signature, "token account creation confirmed");
    Ok(signature)
}

/**
 * Guarantees the recipient ATA exists before the backend is called
 *
 * When the lookup finds the account nothing is built or signed. Otherwise
 * the creation transaction must be confirmed before this returns `Ok`.
 */
pub async fn handle_prepare_token_account<L, W, U>(
    ledger: &L,
    wallet: &W,
    ui: &U,
    request: &ClaimRequest,
) -> Result<TokenAccountStatus, ClaimError>
where
    L: Ledger,
    W: WalletProvider,
    U: UiPort,
{
    let status = lookup_token_account(ledger, request).await?;
    if status.exists {
        info!("token account already exists");
        return Ok(status);
    }

    ui.report(&Status::info(MSG_CREATING_ACCOUNT));
    create_token_account(ledger, wallet, request).await?;
    ui.report(&Status::info(MSG_ACCOUNT_CREATED));

    Ok(TokenAccountStatus { exists: true, ..status })
}
