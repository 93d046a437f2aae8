pub mod connect_wallet;
pub mod prepare_token_account;
pub mod request_claim;
pub mod probe_ad_blocker;

pub use connect_wallet::*;
pub use prepare_token_account::*;
pub use request_claim::*;
pub use probe_ad_blocker::*;
