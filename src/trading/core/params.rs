use crate::common::asset::Asset;
use solana_sdk::pubkey::Pubkey;

/// Everything needed to build one exact-in swap.
#[derive(Debug, Clone)]
pub struct SwapParams {
    pub program_id: Pubkey,
    pub payer: Pubkey,
    /// Asset debited from the payer
    pub pay_asset: Asset,
    /// Asset credited to the payer
    pub receive_asset: Asset,
    /// Amount of `pay_asset` in smallest units
    pub input_amount: u64,
}
