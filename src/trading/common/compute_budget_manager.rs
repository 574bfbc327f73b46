use solana_compute_budget_interface::ComputeBudgetInstruction;
use solana_sdk::instruction::Instruction;

/// Compute budget instructions; each one is emitted only when configured.
pub fn compute_budget_instructions(
    unit_price: Option<u64>,
    unit_limit: Option<u32>,
) -> Vec<Instruction> {
    let mut instructions = Vec::with_capacity(2);
    if let Some(unit_limit) = unit_limit {
        instructions.push(ComputeBudgetInstruction::set_compute_unit_limit(unit_limit));
    }
    if let Some(unit_price) = unit_price {
        if unit_price > 0 {
            instructions.push(ComputeBudgetInstruction::set_compute_unit_price(unit_price));
        }
    }
    instructions
}
