pub mod wallet_session;
pub mod claim_request;
pub mod token_account_status;
pub mod claim_result;

pub use wallet_session::*;
pub use claim_request::*;
pub use token_account_status::*;
pub use claim_result::*;
