//! Checked arithmetic for ledger amounts.
//!
//! Every balance, allowance and supply update goes through these helpers.
//! Stored amounts are never combined with raw operators, so an overflow or
//! underflow surfaces as an [`ArithmeticError`] and aborts the call instead
//! of wrapping.

use sp_runtime::{
    traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Zero},
    ArithmeticError,
};

/// `a + b`, failing with [`ArithmeticError::Overflow`].
pub fn add<N: CheckedAdd>(a: N, b: N) -> Result<N, ArithmeticError> {
    a.checked_add(&b).ok_or(ArithmeticError::Overflow)
}

/// `a - b`, failing with [`ArithmeticError::Underflow`] when `b > a`.
pub fn subtract<N: CheckedSub>(a: N, b: N) -> Result<N, ArithmeticError> {
    a.checked_sub(&b).ok_or(ArithmeticError::Underflow)
}

/// `a * b`, failing with [`ArithmeticError::Overflow`].
pub fn multiply<N: CheckedMul>(a: N, b: N) -> Result<N, ArithmeticError> {
    a.checked_mul(&b).ok_or(ArithmeticError::Overflow)
}

/// Floor division, failing with [`ArithmeticError::DivisionByZero`].
pub fn divide<N: CheckedDiv + Zero>(a: N, b: N) -> Result<N, ArithmeticError> {
    if b.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }
    a.checked_div(&b).ok_or(ArithmeticError::DivisionByZero)
}

/// Scales a whole-unit count into base units: `base * 10^decimals`.
pub fn scale_by_decimals(base: u128, decimals: u8) -> Result<u128, ArithmeticError> {
    (0..decimals).try_fold(base, |acc, _| multiply(acc, 10))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_detects_overflow() {
        assert_eq!(add(2u128, 3), Ok(5));
        assert_eq!(add(u128::MAX, 0), Ok(u128::MAX));
        assert_eq!(add(u128::MAX, 1), Err(ArithmeticError::Overflow));
    }

    #[test]
    fn subtract_detects_underflow() {
        assert_eq!(subtract(10u128, 10), Ok(0));
        assert_eq!(subtract(10u128, 11), Err(ArithmeticError::Underflow));
        assert_eq!(subtract(0u128, 1), Err(ArithmeticError::Underflow));
    }

    #[test]
    fn multiply_detects_overflow() {
        assert_eq!(multiply(0u128, u128::MAX), Ok(0));
        assert_eq!(multiply(u128::MAX, 1), Ok(u128::MAX));
        assert_eq!(multiply(u128::MAX / 2 + 1, 2), Err(ArithmeticError::Overflow));
    }

    #[test]
    fn divide_floors_and_rejects_zero_divisor() {
        assert_eq!(divide(7u128, 2), Ok(3));
        assert_eq!(divide(0u128, 5), Ok(0));
        assert_eq!(divide(7u128, 0), Err(ArithmeticError::DivisionByZero));

        // a == (a / b) * b + a % b
        let (a, b) = (1_000_000_007u128, 97u128);
        let q = divide(a, b).unwrap();
        assert_eq!(add(multiply(q, b).unwrap(), a % b), Ok(a));
    }

    #[test]
    fn scale_by_decimals_matches_power_of_ten() {
        assert_eq!(scale_by_decimals(5, 0), Ok(5));
        assert_eq!(scale_by_decimals(2_200_000_000, 18), Ok(2_200_000_000 * 10u128.pow(18)));
        assert_eq!(scale_by_decimals(1, 38), Ok(10u128.pow(38)));
        assert_eq!(scale_by_decimals(1, 39), Err(ArithmeticError::Overflow));
    }
}
