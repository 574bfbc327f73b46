//! 定点数取整工具
//!
//! All quote math is done on `u128` smallest units; division goes through
//! [`div_round`] so the rounding direction is always explicit.

/// Rounding direction for integer division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Towards zero
    Down,
    /// Towards positive infinity
    Up,
    /// To nearest, ties away from zero
    HalfUp,
}

/// Rounding mode used for every quote the crate produces.
pub const QUOTE_ROUNDING: Rounding = Rounding::HalfUp;

/// `numerator / denominator` rounded as requested. `None` on division by zero.
#[must_use]
pub const fn div_round(numerator: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let q = numerator / denominator;
    let r = numerator % denominator;
    match rounding {
        Rounding::Down => Some(q),
        Rounding::Up => {
            if r != 0 {
                Some(q + 1)
            } else {
                Some(q)
            }
        }
        Rounding::HalfUp => {
            // r >= d - r  <=>  2r >= d, without overflowing 2r
            if r != 0 && r >= denominator - r {
                Some(q + 1)
            } else {
                Some(q)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_div_by_zero() {
        assert_eq!(div_round(1, 0, Rounding::Down), None);
        assert_eq!(div_round(0, 0, Rounding::HalfUp), None);
    }

    #[test]
    fn test_directions() {
        assert_eq!(div_round(7, 2, Rounding::Down), Some(3));
        assert_eq!(div_round(7, 2, Rounding::Up), Some(4));
        assert_eq!(div_round(7, 2, Rounding::HalfUp), Some(4));
        assert_eq!(div_round(10, 4, Rounding::HalfUp), Some(3));
        assert_eq!(div_round(9, 4, Rounding::HalfUp), Some(2));
        assert_eq!(div_round(10, 5, Rounding::Up), Some(2));
    }

    #[test]
    fn test_half_up_near_max() {
        assert_eq!(div_round(u128::MAX, u128::MAX, Rounding::HalfUp), Some(1));
        assert_eq!(div_round(u128::MAX, 2, Rounding::HalfUp), Some(u128::MAX / 2 + 1));
    }
}
