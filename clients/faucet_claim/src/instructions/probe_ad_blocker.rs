use tracing::warn;

use crate::ports::AdProbe;

/// Fetches the ad-serving URL once; `true` means the request was blocked.
///
/// A failed fetch is read as an ad blocker, so an offline page reports the same.
pub async fn handle_probe_ad_blocker<P: AdProbe>(probe: &P, url: &str) -> bool {
    let blocked = !probe.fetch(url).await;
    if blocked {
        warn!(url, "ad probe request blocked");
    }
    blocked
}
