use tracing::info;

use crate::error::ClaimError;
use crate::ports::ClaimBackend;
use crate::state::{ClaimRequest, ClaimResult};

/**
 * Calls the backend claim endpoint
 *
 * @param backend - HTTP client for the hosting backend
 * @param endpoint - Route receiving `{ wallet_address }`
 * @param request - Validated claim request
 *
 * Only reached once the recipient ATA is known to exist.
 */
pub async fn handle_request_claim<B: ClaimBackend>(
    backend: &B,
    endpoint: &str,
    request: &ClaimRequest,
) -> Result<ClaimResult, ClaimError> {
    info!(endpoint, recipient = %request.recipient, "calling claim backend");
    let reply = backend.post_claim(endpoint, request.body_json()).await?;

    let result = ClaimResult::from_reply(&reply)?;
    info!(signature = %result.transaction_signature, "claim accepted by backend");
    Ok(result)
}
