pub mod test_claim_result;
pub mod test_ledger;
