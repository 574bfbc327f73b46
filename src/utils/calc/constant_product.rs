//! 恒定乘积曲线（x * y = k）报价
//!
//! `amount_out = reserve_to * amount_in / (reserve_from + amount_in)`, evaluated
//! in `u128` and rounded once with [`QUOTE_ROUNDING`]. Fees are not modeled.

use super::common::{QUOTE_ROUNDING, Rounding, div_round};
use crate::common::asset::Asset;
use crate::common::error::{SwapError, SwapResult};
use crate::utils::quote::SwapQuote;

const BPS_DENOMINATOR: u128 = 10_000;

/// Output amount for an exact-in swap.
///
/// All amounts are smallest units. `reserve_from` must be positive.
pub fn compute_output(
    reserve_from: u64,
    reserve_to: u64,
    amount_in: u64,
    output_decimals: u8,
) -> SwapResult<SwapQuote> {
    if reserve_from == 0 {
        return Err(SwapError::InvalidReserveState);
    }
    if amount_in == 0 {
        return Ok(SwapQuote::zero(output_decimals));
    }

    let denominator = reserve_from as u128 + amount_in as u128;
    let numerator = reserve_to as u128 * amount_in as u128;
    let amount_out =
        div_round(numerator, denominator, QUOTE_ROUNDING).ok_or(SwapError::InvalidReserveState)?;
    // amount_out <= reserve_to since amount_in < denominator
    let amount_out = u64::try_from(amount_out).map_err(|_| SwapError::InvalidReserveState)?;
    let price_impact_bps = div_round(amount_in as u128 * BPS_DENOMINATOR, denominator, Rounding::Down)
        .map(|bps| bps as u64);

    Ok(SwapQuote { amount_in, amount_out, output_decimals, price_impact_bps })
}

/// Pair state after reversing the roles of the two assets.
#[derive(Debug, Clone, PartialEq)]
pub struct FlipResult {
    pub input_amount: u64,
    pub output_amount: u64,
    pub from: Asset,
    pub to: Asset,
}

/// Swaps pay and receive roles.
///
/// The previous receive amount is already in smallest units of the old `to`
/// asset, which is the new `from` asset, so amounts move across unchanged.
/// Callers holding reserves should requote right after.
pub fn flip(
    current_input: u64,
    current_output: u64,
    from: &Asset,
    to: &Asset,
) -> SwapResult<FlipResult> {
    if from.mint == to.mint {
        return Err(SwapError::InvalidAssetPair);
    }
    Ok(FlipResult {
        input_amount: current_output,
        output_amount: current_input,
        from: to.clone(),
        to: from.clone(),
    })
}
