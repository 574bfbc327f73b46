use crate::{common::error::SwapResult, trading::core::params::SwapParams};
use solana_sdk::instruction::Instruction;

/// Builds the business instructions for one swap.
pub trait InstructionBuilder: Send + Sync {
    fn build_swap_instructions(&self, params: &SwapParams) -> SwapResult<Vec<Instruction>>;
}
