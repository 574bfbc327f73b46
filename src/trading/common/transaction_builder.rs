use solana_hash::Hash;
use solana_sdk::{
    instruction::Instruction,
    message::{Message, VersionedMessage},
    pubkey::Pubkey,
    transaction::VersionedTransaction,
};

use super::compute_budget_manager::compute_budget_instructions;
use crate::common::signer::SwapSigner;

/// Build and sign a swap transaction
///
/// 交易结构：[compute_budget..., business_instructions...]
pub fn build_transaction(
    signer: &dyn SwapSigner,
    payer: &Pubkey,
    unit_limit: Option<u32>,
    unit_price: Option<u64>,
    business_instructions: Vec<Instruction>,
    recent_blockhash: Hash,
) -> Result<VersionedTransaction, anyhow::Error> {
    let mut instructions = Vec::with_capacity(business_instructions.len() + 2);

    // Add compute budget instructions
    instructions.extend(compute_budget_instructions(unit_price, unit_limit));

    // Add business instructions
    instructions.extend(business_instructions);

    let message = Message::new_with_blockhash(&instructions, Some(payer), &recent_blockhash);
    let versioned_msg = VersionedMessage::Legacy(message);

    let msg_bytes = versioned_msg.serialize();
    let signature = signer.sign(&msg_bytes)?;
    Ok(VersionedTransaction { signatures: vec![signature], message: versioned_msg })
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::{
        instruction::AccountMeta,
        signature::{Keypair, Signer},
    };

    #[test]
    fn test_build_transaction_signed_by_payer() {
        let keypair = Keypair::new();
        let payer = keypair.pubkey();
        let ix = Instruction::new_with_bytes(
            Pubkey::new_unique(),
            &[1, 2, 3],
            vec![AccountMeta::new(payer, true)],
        );
        let blockhash = Hash::new_from_array([3u8; 32]);
        let tx = build_transaction(&keypair, &payer, Some(200_000), Some(10), vec![ix], blockhash)
            .unwrap();

        assert_eq!(tx.signatures.len(), 1);
        assert_eq!(tx.signatures[0], keypair.sign_message(&tx.message.serialize()));
        assert_eq!(tx.message.static_account_keys()[0], payer);
        assert_eq!(*tx.message.recent_blockhash(), blockhash);
        assert_eq!(tx.message.instructions().len(), 3);
    }
}
