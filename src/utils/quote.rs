//! Quote result for an exact-in swap on the constant-product pool.
//!
//! Amounts are smallest units; `ui_*` helpers render human units.
use crate::utils::token::{format_ui_amount, ui_amount};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwapQuote {
    /// Input amount (smallest units of the pay asset).
    pub amount_in: u64,
    /// Output amount (smallest units of the receive asset), already rounded.
    pub amount_out: u64,
    /// Decimal precision of the receive asset.
    pub output_decimals: u8,
    /// Price impact in basis points, `None` for a zero input.
    pub price_impact_bps: Option<u64>,
}

impl SwapQuote {
    /// Zero quote, used as the safe default when a quote cannot be computed.
    pub fn zero(output_decimals: u8) -> Self {
        Self { output_decimals, ..Self::default() }
    }

    pub fn is_zero(&self) -> bool {
        self.amount_out == 0
    }

    /// 展示用的人类可读数量（精确到 `output_decimals` 位）
    pub fn ui_amount_out_string(&self) -> String {
        format_ui_amount(self.amount_out, self.output_decimals)
    }

    pub fn ui_amount_out(&self) -> f64 {
        ui_amount(self.amount_out, self.output_decimals)
    }
}
