use crate::ports::AdProbe;

use super::fetch;

/// Opaque (`no-cors`) request: resolves unless the browser blocked it
pub(super) struct FetchProbe;

impl AdProbe for FetchProbe {
    async fn fetch(&self, url: &str) -> bool {
        match fetch::opaque_get(url) {
            Ok(request) => fetch::send(&request).await.is_ok(),
            Err(_) => false,
        }
    }
}
