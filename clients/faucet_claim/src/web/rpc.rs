use crate::error::ClaimError;
use crate::ports::RpcTransport;

use super::fetch;

/// `fetch`-backed JSON-RPC transport
pub(super) struct FetchTransport;

impl RpcTransport for FetchTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<String, ClaimError> {
        let request = fetch::json_post(url, &body).map_err(ClaimError::Rpc)?;
        let response = fetch::send(&request).await.map_err(ClaimError::Rpc)?;
        if !response.ok() {
            return Err(ClaimError::Rpc(format!("HTTP {}", response.status())));
        }
        fetch::text(&response).await.map_err(ClaimError::Rpc)
    }

    async fn sleep(&self, millis: u32) {
        fetch::sleep(millis).await;
    }
}
