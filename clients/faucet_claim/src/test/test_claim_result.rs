use std::str::FromStr;

use anchor_lang::solana_program::pubkey::Pubkey;

use crate::config::ClaimConfig;
use crate::constants::*;
use crate::error::{ClaimError, ErrorKind};
use crate::event::{Status, StatusKind};
use crate::state::*;

fn reply(status: u16, body: &str) -> HttpReply {
    HttpReply { status, body: body.to_string() }
}

fn backend_message(result: Result<ClaimResult, ClaimError>) -> String {
    match result {
        Err(ClaimError::Backend { message, .. }) => message,
        other => panic!("expected a backend error, got {:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_reply() {
        let result = ClaimResult::from_reply(&reply(
            200,
            r#"{"success": true, "message": "100.0 tokens sent!", "transaction_signature": "Sig123"}"#,
        ))
        .unwrap();

        assert!(result.success);
        assert_eq!(result.message, "100.0 tokens sent!");
        assert_eq!(result.transaction_signature, "Sig123");
    }

    #[test]
    fn test_success_flag_is_optional() {
        let result = ClaimResult::from_reply(&reply(
            200,
            r#"{"message": "Sent 10 tokens", "transaction_signature": "Sig123"}"#,
        ))
        .unwrap();

        assert_eq!(result.message, "Sent 10 tokens");
    }

    #[test]
    fn test_error_text_is_used_verbatim() {
        let result = ClaimResult::from_reply(&reply(400, r#"{"error": "Already claimed"}"#));

        assert_eq!(backend_message(result), "Already claimed");
    }

    #[test]
    fn test_error_without_text_is_generic() {
        assert_eq!(
            backend_message(ClaimResult::from_reply(&reply(500, "Internal Server Error"))),
            GENERIC_BACKEND_ERROR
        );
        assert_eq!(
            backend_message(ClaimResult::from_reply(&reply(502, r#"{"detail": "gateway"}"#))),
            GENERIC_BACKEND_ERROR
        );
    }

    #[test]
    fn test_cooldown_reply_mentions_remaining_time() {
        let result =
            ClaimResult::from_reply(&reply(429, r#"{"error": "Cooldown!", "time_remaining": 42}"#));

        assert_eq!(backend_message(result), "Cooldown! Try again in 42s.");
    }

    #[test]
    fn test_explicit_failure_in_success_status() {
        let result = ClaimResult::from_reply(&reply(200, r#"{"success": false, "error": "Faucet empty"}"#));

        assert_eq!(backend_message(result), "Faucet empty");
    }

    #[test]
    fn test_empty_error_text_is_generic() {
        let rejected = ClaimResult::from_reply(&reply(400, r#"{"error": ""}"#));
        let cooldown = ClaimResult::from_reply(&reply(429, r#"{"error": "", "time_remaining": 42}"#));
        let failed = ClaimResult::from_reply(&reply(200, r#"{"success": false, "error": ""}"#));

        assert_eq!(backend_message(rejected), GENERIC_BACKEND_ERROR);
        assert_eq!(backend_message(cooldown), GENERIC_BACKEND_ERROR);
        assert_eq!(backend_message(failed), GENERIC_BACKEND_ERROR);
    }

    #[test]
    fn test_incomplete_success_body() {
        let missing_sig = ClaimResult::from_reply(&reply(200, r#"{"message": "ok"}"#));
        let not_json = ClaimResult::from_reply(&reply(200, "ok"));

        assert_eq!(backend_message(missing_sig), GENERIC_BACKEND_ERROR);
        assert_eq!(backend_message(not_json), GENERIC_BACKEND_ERROR);
    }

    #[test]
    fn test_claim_request_parsing() {
        let mint = Pubkey::from_str(TOKEN_MINT_ADDRESS).unwrap();
        let recipient = Pubkey::new_unique();

        assert_eq!(ClaimRequest::parse("", mint), Err(ClaimError::EmptyAddress));
        assert_eq!(ClaimRequest::parse("   ", mint), Err(ClaimError::EmptyAddress));
        assert!(matches!(ClaimRequest::parse("Addr1", mint), Err(ClaimError::InvalidAddress(_))));

        let request = ClaimRequest::parse(&format!(" {} ", recipient), mint).unwrap();
        assert_eq!(request.recipient, recipient);
        assert_eq!(request.mint, mint);
        assert_eq!(request.body_json(), format!(r#"{{"wallet_address":"{}"}}"#, recipient));
    }

    #[test]
    fn test_default_config_uses_constants() {
        let config = ClaimConfig::default();

        assert_eq!(config.token_mint().unwrap().to_string(), TOKEN_MINT_ADDRESS);
        assert_eq!(config.claim_endpoint, "/claim");
        assert_eq!(config.commitment, "confirmed");
        assert_eq!(config.ad_probe_delay_ms, 500);
        assert_eq!(config.explorer_link("Sig123"), "https://explorer.solana.com/tx/Sig123");
    }

    #[test]
    fn test_config_override_keeps_defaults() {
        let config = ClaimConfig::from_json(
            r#"{"rpc_url": "https://api.devnet.solana.com", "confirm_max_polls": 5}"#,
        )
        .unwrap();

        assert_eq!(config.rpc_url, "https://api.devnet.solana.com");
        assert_eq!(config.confirm_max_polls, 5);
        assert_eq!(config.token_mint, TOKEN_MINT_ADDRESS);
        assert_eq!(config.ad_probe_url, AD_PROBE_URL);

        let bad_mint = ClaimConfig { token_mint: "not-a-key".to_string(), ..ClaimConfig::default() };
        assert!(matches!(bad_mint.token_mint(), Err(ClaimError::InvalidAddress(_))));
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(ClaimError::WalletNotFound.kind(), ErrorKind::Environment);
        assert_eq!(ClaimError::ConnectionRejected(String::new()).kind(), ErrorKind::UserRejection);
        assert_eq!(ClaimError::SigningRejected(String::new()).kind(), ErrorKind::UserRejection);
        assert_eq!(ClaimError::EmptyAddress.kind(), ErrorKind::Validation);
        assert_eq!(ClaimError::AdBlockerDetected.kind(), ErrorKind::Validation);
        assert_eq!(ClaimError::Rpc(String::new()).kind(), ErrorKind::Network);
        assert_eq!(ClaimError::Http(String::new()).kind(), ErrorKind::Network);
        assert_eq!(
            ClaimError::Backend { status: 400, message: String::new() }.kind(),
            ErrorKind::Backend
        );
    }

    #[test]
    fn test_status_helpers() {
        let status = Status::success("Sent").with_explorer_link("https://explorer.solana.com/tx/S".to_string());

        assert_eq!(status.kind, StatusKind::Success);
        assert_eq!(status.kind.css_class(), "success");
        assert_eq!(status.link.unwrap().text, EXPLORER_LINK_TEXT);
        assert_eq!(Status::info("x").kind.css_class(), "info");
        assert_eq!(Status::error("x").kind.css_class(), "error");
    }
}
