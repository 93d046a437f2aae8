use anchor_lang::solana_program::hash::Hash;
use anchor_lang::solana_program::pubkey::Pubkey;

use crate::config::ClaimConfig;
use crate::error::ClaimError;
use crate::ledger::{AccountSnapshot, RpcLedger};
use crate::ports::Ledger;
use crate::test::mocks::MockTransport;

fn ledger(responses: &[&str]) -> RpcLedger<MockTransport> {
    RpcLedger::new(MockTransport::new(responses), &ClaimConfig::default())
}

fn ledger_with_polls(responses: &[&str], max_polls: u32) -> RpcLedger<MockTransport> {
    let config = ClaimConfig { confirm_max_polls: max_polls, ..ClaimConfig::default() };
    RpcLedger::new(MockTransport::new(responses), &config)
}

fn status_reply(status: &str) -> String {
    format!(
        r#"{{"jsonrpc":"2.0","id":1,"result":{{"context":{{"slot":10}},"value":[{}]}}}}"#,
        status
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_account_info_absent() {
        let ledger = ledger(&[r#"{"jsonrpc":"2.0","id":1,"result":{"context":{"slot":1},"value":null}}"#]);
        let address = Pubkey::new_unique();

        let account = ledger.get_account_info(&address).await.unwrap();

        assert!(account.is_none());
        let requests = ledger.transport().requests.borrow();
        assert_eq!(requests[0]["method"], "getAccountInfo");
        assert_eq!(requests[0]["jsonrpc"], "2.0");
        assert_eq!(requests[0]["params"][0], address.to_string());
        assert_eq!(requests[0]["params"][1]["commitment"], "confirmed");
        assert_eq!(requests[0]["params"][1]["encoding"], "base64");
    }

    #[tokio::test]
    async fn test_get_account_info_present() {
        let owner = anchor_spl::token::ID;
        let reply = format!(
            r#"{{"jsonrpc":"2.0","id":1,"result":{{"context":{{"slot":1}},"value":{{"data":["","base64"],"executable":false,"lamports":2039280,"owner":"{}","rentEpoch":0,"space":165}}}}}}"#,
            owner
        );
        let ledger = ledger(&[&reply]);

        let account = ledger.get_account_info(&Pubkey::new_unique()).await.unwrap();

        assert_eq!(
            account,
            Some(AccountSnapshot { lamports: 2_039_280, owner })
        );
    }

    #[tokio::test]
    async fn test_rpc_error_object_is_surfaced() {
        let ledger = ledger(&[
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32602,"message":"Invalid param: WrongSize"}}"#,
        ]);

        let err = ledger.get_account_info(&Pubkey::new_unique()).await.unwrap_err();

        assert_eq!(
            err,
            ClaimError::Rpc("getAccountInfo (-32602): Invalid param: WrongSize".to_string())
        );
    }

    #[tokio::test]
    async fn test_malformed_response_is_an_rpc_error() {
        let ledger = ledger(&["<html>502 Bad Gateway</html>"]);

        let err = ledger.get_latest_blockhash().await.unwrap_err();

        assert!(matches!(err, ClaimError::Rpc(ref m) if m.starts_with("getLatestBlockhash")));
    }

    #[tokio::test]
    async fn test_request_ids_increase() {
        let null_reply = r#"{"jsonrpc":"2.0","id":1,"result":{"context":{"slot":1},"value":null}}"#;
        let ledger = ledger(&[null_reply, null_reply]);

        ledger.get_account_info(&Pubkey::new_unique()).await.unwrap();
        ledger.get_account_info(&Pubkey::new_unique()).await.unwrap();

        let requests = ledger.transport().requests.borrow();
        assert_eq!(requests[0]["id"], 1);
        assert_eq!(requests[1]["id"], 2);
    }

    #[tokio::test]
    async fn test_get_latest_blockhash() {
        let expected = Hash::new_from_array([3u8; 32]);
        let reply = format!(
            r#"{{"jsonrpc":"2.0","id":1,"result":{{"context":{{"slot":1}},"value":{{"blockhash":"{}","lastValidBlockHeight":3090}}}}}}"#,
            expected
        );
        let ledger = ledger(&[&reply]);

        let hash = ledger.get_latest_blockhash().await.unwrap();

        assert_eq!(hash, expected);
        let requests = ledger.transport().requests.borrow();
        assert_eq!(requests[0]["method"], "getLatestBlockhash");
        assert_eq!(requests[0]["params"][0]["commitment"], "confirmed");
    }

    #[tokio::test]
    async fn test_send_raw_transaction_uses_base58() {
        let ledger = ledger(&[r#"{"jsonrpc":"2.0","id":1,"result":"5VERv8NMvzbJMEkV8xnrLkEaWRtSz9CosKDYjCJjBRnb"}"#]);
        let wire = vec![1u8, 2, 3, 4];

        let signature = ledger.send_raw_transaction(&wire).await.unwrap();

        assert_eq!(signature, "5VERv8NMvzbJMEkV8xnrLkEaWRtSz9CosKDYjCJjBRnb");
        let requests = ledger.transport().requests.borrow();
        assert_eq!(requests[0]["method"], "sendTransaction");
        assert_eq!(requests[0]["params"][0], bs58::encode(&wire).into_string());
        assert_eq!(requests[0]["params"][1]["encoding"], "base58");
        assert_eq!(requests[0]["params"][1]["preflightCommitment"], "confirmed");
    }

    #[tokio::test]
    async fn test_confirm_waits_for_commitment() {
        let pending = status_reply("null");
        let processed = status_reply(r#"{"slot":11,"confirmations":0,"err":null,"confirmationStatus":"processed"}"#);
        let confirmed = status_reply(r#"{"slot":11,"confirmations":1,"err":null,"confirmationStatus":"confirmed"}"#);
        let ledger = ledger(&[&pending, &processed, &confirmed]);

        ledger.confirm_transaction("Sig").await.unwrap();

        assert_eq!(ledger.transport().sleeps.get(), 2);
        let requests = ledger.transport().requests.borrow();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0]["method"], "getSignatureStatuses");
        assert_eq!(requests[0]["params"][0][0], "Sig");
    }

    #[tokio::test]
    async fn test_confirm_accepts_finalized() {
        let finalized = status_reply(r#"{"slot":11,"confirmations":null,"err":null,"confirmationStatus":"finalized"}"#);
        let ledger = ledger(&[&finalized]);

        ledger.confirm_transaction("Sig").await.unwrap();

        assert_eq!(ledger.transport().sleeps.get(), 0);
    }

    #[tokio::test]
    async fn test_confirm_reports_transaction_error() {
        let failed = status_reply(
            r#"{"slot":11,"confirmations":1,"err":{"InstructionError":[0,"IllegalOwner"]},"confirmationStatus":"confirmed"}"#,
        );
        let ledger = ledger(&[&failed]);

        let err = ledger.confirm_transaction("Sig").await.unwrap_err();

        assert_eq!(
            err,
            ClaimError::TransactionFailed(r#"{"InstructionError":[0,"IllegalOwner"]}"#.to_string())
        );
    }

    #[tokio::test]
    async fn test_confirm_times_out() {
        let pending = status_reply("null");
        let ledger = ledger_with_polls(&[&pending, &pending, &pending], 3);

        let err = ledger.confirm_transaction("Sig").await.unwrap_err();

        assert_eq!(err, ClaimError::ConfirmationTimeout("Sig".to_string()));
        assert_eq!(ledger.transport().sleeps.get(), 2);
    }

    #[tokio::test]
    async fn test_finalized_commitment_ignores_confirmed() {
        let confirmed = status_reply(r#"{"slot":11,"confirmations":1,"err":null,"confirmationStatus":"confirmed"}"#);
        let finalized = status_reply(r#"{"slot":11,"confirmations":null,"err":null,"confirmationStatus":"finalized"}"#);
        let config = ClaimConfig { commitment: "finalized".to_string(), ..ClaimConfig::default() };
        let ledger = RpcLedger::new(MockTransport::new(&[&confirmed, &finalized]), &config);

        ledger.confirm_transaction("Sig").await.unwrap();

        assert_eq!(ledger.transport().requests.borrow().len(), 2);
        assert_eq!(ledger.transport().sleeps.get(), 1);
    }
}
