use anchor_lang::solana_program::hash::Hash;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::pubkey::Pubkey;
use anchor_spl::associated_token::get_associated_token_address;
use anchor_spl::associated_token::spl_associated_token_account::instruction::create_associated_token_account;

use crate::utils::UnsignedTransaction;

/// Associated token account of `owner` for `mint` under the SPL Token program
///
/// Pure function of its inputs: ["owner", token_program, "mint"] seeds under
/// the associated token program. No network access.
pub fn derive_token_account(mint: &Pubkey, owner: &Pubkey) -> Pubkey {
    get_associated_token_address(owner, mint)
}

/// Single instruction creating the ATA of `owner`, funded by `owner`
pub fn create_token_account_instruction(mint: &Pubkey, owner: &Pubkey) -> Instruction {
    create_associated_token_account(owner, owner, mint, &anchor_spl::token::ID)
}

/// Unsigned transaction creating the ATA, paid and owned by the recipient
pub fn build_create_token_account_tx(
    mint: &Pubkey,
    recipient: &Pubkey,
    recent_blockhash: Hash,
) -> UnsignedTransaction {
    let instruction = create_token_account_instruction(mint, recipient);
    UnsignedTransaction::new(&[instruction], recipient, recent_blockhash)
}
