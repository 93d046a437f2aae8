use crate::error::ClaimError;
use crate::ports::ClaimBackend;
use crate::state::HttpReply;

use super::fetch;

/// Same-origin backend reached through `fetch`
pub(super) struct FetchBackend;

impl ClaimBackend for FetchBackend {
    async fn post_claim(&self, endpoint: &str, body: String) -> Result<HttpReply, ClaimError> {
        let request = fetch::json_post(endpoint, &body).map_err(ClaimError::Http)?;
        let response = fetch::send(&request).await.map_err(ClaimError::Http)?;
        let body = fetch::text(&response).await.map_err(ClaimError::Http)?;
        Ok(HttpReply { status: response.status(), body })
    }
}
