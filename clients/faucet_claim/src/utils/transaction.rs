use anchor_lang::solana_program::hash::Hash;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::message::Message;
use anchor_lang::solana_program::pubkey::Pubkey;

use crate::error::ClaimError;

pub const SIGNATURE_LEN: usize = 64;

/// Legacy transaction waiting for the wallet signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsignedTransaction {
    pub message: Message,
}

impl UnsignedTransaction {
    pub fn new(instructions: &[Instruction], fee_payer: &Pubkey, recent_blockhash: Hash) -> Self {
        Self {
            message: Message::new_with_blockhash(instructions, Some(fee_payer), &recent_blockhash),
        }
    }

    pub fn fee_payer(&self) -> Option<&Pubkey> {
        self.message.account_keys.first()
    }

    pub fn recent_blockhash(&self) -> Hash {
        self.message.recent_blockhash
    }

    pub fn required_signatures(&self) -> usize {
        self.message.header.num_required_signatures as usize
    }

    /// Bytes the wallet signs
    pub fn message_bytes(&self) -> Vec<u8> {
        self.message.serialize()
    }
}

/// Transaction carrying every required signature, ready for submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransaction {
    pub message: Message,
    pub signatures: Vec<[u8; SIGNATURE_LEN]>,
}

impl SignedTransaction {
    /// Attach signatures returned by the wallet, in account-key order
    pub fn new(
        unsigned: UnsignedTransaction,
        signatures: Vec<[u8; SIGNATURE_LEN]>,
    ) -> Result<Self, ClaimError> {
        if signatures.len() != unsigned.required_signatures() {
            return Err(ClaimError::SigningRejected(format!(
                "expected {} signature(s), wallet returned {}",
                unsigned.required_signatures(),
                signatures.len()
            )));
        }
        Ok(Self { message: unsigned.message, signatures })
    }

    /// Decode a base58 signature string into raw bytes
    pub fn decode_signature(encoded: &str) -> Result<[u8; SIGNATURE_LEN], ClaimError> {
        let bytes = bs58::decode(encoded)
            .into_vec()
            .map_err(|e| ClaimError::SigningRejected(format!("bad signature encoding: {}", e)))?;
        bytes
            .try_into()
            .map_err(|_| ClaimError::SigningRejected("signature must be 64 bytes".to_string()))
    }

    /// Single-signer transaction from the base58 signature a wallet returned
    pub fn from_fee_payer_signature(
        unsigned: UnsignedTransaction,
        encoded: &str,
    ) -> Result<Self, ClaimError> {
        let signature = Self::decode_signature(encoded)?;
        Self::new(unsigned, vec![signature])
    }

    /// Base58 form of the fee payer signature, which doubles as the transaction id
    pub fn id(&self) -> Option<String> {
        self.signatures.first().map(|sig| bs58::encode(sig).into_string())
    }

    /// Wire format: compact-u16 signature count, signatures, message
    pub fn wire_bytes(&self) -> Vec<u8> {
        let message = self.message.serialize();
        let mut out = Vec::with_capacity(3 + self.signatures.len() * SIGNATURE_LEN + message.len());
        encode_compact_u16(self.signatures.len() as u16, &mut out);
        for sig in &self.signatures {
            out.extend_from_slice(sig);
        }
        out.extend_from_slice(&message);
        out
    }
}

/// Solana "short vec" length prefix: 7 bits per byte, high bit = continuation
pub fn encode_compact_u16(mut value: u16, out: &mut Vec<u8>) {
    loop {
        let mut byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            out.push(byte);
            return;
        }
        byte |= 0x80;
        out.push(byte);
    }
}
