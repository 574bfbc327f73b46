//! Token 数量换算工具
//!
//! Human amount = smallest-unit amount / 10^decimals. Conversions are done on
//! decimal strings so no float rounding leaks into quotes or instruction data.

use crate::common::error::{SwapError, SwapResult};

/// Renders `raw` smallest units with exactly `decimals` fractional digits.
pub fn format_ui_amount(raw: u64, decimals: u8) -> String {
    let digits = raw.to_string();
    let decimals = decimals as usize;
    if decimals == 0 {
        return digits;
    }
    let padded = if digits.len() <= decimals {
        format!("{}{}", "0".repeat(decimals + 1 - digits.len()), digits)
    } else {
        digits
    };
    let split = padded.len() - decimals;
    format!("{}.{}", &padded[..split], &padded[split..])
}

/// Lossy `f64` view of a smallest-unit amount, for display only.
pub fn ui_amount(raw: u64, decimals: u8) -> f64 {
    raw as f64 / 10f64.powi(decimals as i32)
}

/// Parses a human amount such as `"1.25"` into smallest units.
///
/// More fractional digits than `decimals` is an error rather than a silent
/// truncation.
pub fn parse_ui_amount(input: &str, decimals: u8) -> SwapResult<u64> {
    let s = input.trim();
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, f),
        None => (s, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(SwapError::InvalidAmount(format!("'{}' is not a number", input)));
    }
    let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return Err(SwapError::InvalidAmount(format!("'{}' is not a number", input)));
    }
    if frac_part.len() > decimals as usize {
        return Err(SwapError::InvalidAmount(format!(
            "'{}' has more than {} fractional digits",
            input, decimals
        )));
    }

    let overflow = || SwapError::InvalidAmount(format!("'{}' does not fit in u64", input));
    let scale = 10u128.checked_pow(decimals as u32).ok_or_else(overflow)?;
    let int_value = if int_part.is_empty() {
        0u128
    } else {
        int_part.parse::<u128>().map_err(|_| overflow())?
    };
    let frac_value = if frac_part.is_empty() {
        0u128
    } else {
        let pad = 10u128
            .checked_pow((decimals as usize - frac_part.len()) as u32)
            .ok_or_else(overflow)?;
        frac_part.parse::<u128>().map_err(|_| overflow())? * pad
    };
    let raw = int_value
        .checked_mul(scale)
        .and_then(|v| v.checked_add(frac_value))
        .ok_or_else(overflow)?;
    u64::try_from(raw).map_err(|_| overflow())
}
