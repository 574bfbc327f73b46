use crate::{
    common::error::{SwapError, SwapResult},
    constants::{ASSOCIATED_TOKEN_PROGRAM_META, SYSTEM_PROGRAM_META, TOKEN_PROGRAM_META},
    instruction::utils::liquidity_pool::{SWAP_DISCRIMINATOR, SwapAccounts},
    trading::core::{params::SwapParams, traits::InstructionBuilder},
};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use tracing::debug;

/// Instruction builder for the constant-product liquidity pool program
///
/// 恒定乘积（x * y = k）池，池 PDA 种子为 `liquidity_pool`
pub struct LiquidityPoolInstructionBuilder;

impl InstructionBuilder for LiquidityPoolInstructionBuilder {
    fn build_swap_instructions(&self, params: &SwapParams) -> SwapResult<Vec<Instruction>> {
        // ========================================
        // Parameter validation
        // ========================================
        if params.input_amount == 0 {
            return Err(SwapError::InvalidAmount("Amount cannot be zero".to_string()));
        }

        // ========================================
        // Account address preparation
        // ========================================
        let accounts = SwapAccounts::derive(
            &params.program_id,
            &params.payer,
            &params.pay_asset.mint,
            &params.receive_asset.mint,
        )?;
        debug!(
            pool = %accounts.pool,
            pay = %params.pay_asset.symbol,
            receive = %params.receive_asset.symbol,
            amount = params.input_amount,
            "building liquidity pool swap"
        );

        Ok(vec![swap_instruction(&params.program_id, &accounts, params.input_amount)])
    }
}

/// Raw `swap(amount)` instruction for already derived accounts.
pub fn swap_instruction(program_id: &Pubkey, accounts: &SwapAccounts, amount: u64) -> Instruction {
    let metas: [AccountMeta; 11] = [
        AccountMeta::new(accounts.pool, false), // Pool
        AccountMeta::new_readonly(accounts.receive_mint, false), // Receive Mint
        AccountMeta::new(accounts.pool_receive_token_account, false), // Pool Receive Token Account
        AccountMeta::new(accounts.payer_receive_token_account, false), // Payer Receive Token Account
        AccountMeta::new_readonly(accounts.pay_mint, false), // Pay Mint
        AccountMeta::new(accounts.pool_pay_token_account, false), // Pool Pay Token Account
        AccountMeta::new(accounts.payer_pay_token_account, false), // Payer Pay Token Account
        AccountMeta::new(accounts.payer, true),  // Payer
        TOKEN_PROGRAM_META,                      // Token Program (readonly)
        SYSTEM_PROGRAM_META,                     // System Program (readonly)
        ASSOCIATED_TOKEN_PROGRAM_META,           // Associated Token Program (readonly)
    ];

    let mut data = [0u8; 16];
    data[..8].copy_from_slice(&*SWAP_DISCRIMINATOR);
    data[8..16].copy_from_slice(&amount.to_le_bytes());

    Instruction::new_with_bytes(*program_id, &data, metas.to_vec())
}
