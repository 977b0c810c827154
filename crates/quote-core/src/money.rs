//! 金額修約與溢位檢查運算

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{QuoteError, Result};

/// 金額保留的小數位數
pub const MONEY_SCALE: u32 = 3;

/// 四捨五入到小數點後三位
pub fn round3(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// 加法，溢位時回傳 [`QuoteError::CalculationOverflow`]
pub fn checked_add(lhs: Decimal, rhs: Decimal, context: &str) -> Result<Decimal> {
    lhs.checked_add(rhs)
        .ok_or_else(|| overflow(context, lhs, "+", rhs))
}

/// 減法，溢位時回傳 [`QuoteError::CalculationOverflow`]
pub fn checked_sub(lhs: Decimal, rhs: Decimal, context: &str) -> Result<Decimal> {
    lhs.checked_sub(rhs)
        .ok_or_else(|| overflow(context, lhs, "-", rhs))
}

/// 乘法，溢位時回傳 [`QuoteError::CalculationOverflow`]
pub fn checked_mul(lhs: Decimal, rhs: Decimal, context: &str) -> Result<Decimal> {
    lhs.checked_mul(rhs)
        .ok_or_else(|| overflow(context, lhs, "×", rhs))
}

/// 除法，除數為 0 時回傳 0
///
/// 除數非 0 而結果溢位時回傳 [`QuoteError::CalculationOverflow`]，
/// 不以 0 代替。
pub fn div_or_zero(lhs: Decimal, rhs: Decimal, context: &str) -> Result<Decimal> {
    if rhs.is_zero() {
        return Ok(Decimal::ZERO);
    }

    lhs.checked_div(rhs)
        .ok_or_else(|| overflow(context, lhs, "÷", rhs))
}

/// 逐項加總，任一步溢位即回傳錯誤
pub fn checked_sum<I>(values: I, context: &str) -> Result<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, value| checked_add(acc, value, context))
}

fn overflow(context: &str, lhs: Decimal, op: &str, rhs: Decimal) -> QuoteError {
    QuoteError::CalculationOverflow(format!("{context}: {lhs} {op} {rhs}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(15.5550), dec!(15.555))]
    #[case(dec!(1.0005), dec!(1.001))]
    #[case(dec!(1.00049), dec!(1.000))]
    #[case(dec!(22.47), dec!(22.47))]
    #[case(dec!(-0.0005), dec!(-0.001))]
    fn test_round3(#[case] input: Decimal, #[case] expected: Decimal) {
        assert_eq!(round3(input), expected);
    }

    #[test]
    fn test_checked_ops_within_range() {
        assert_eq!(checked_add(dec!(1.5), dec!(2), "測試").unwrap(), dec!(3.5));
        assert_eq!(checked_sub(dec!(1.5), dec!(2), "測試").unwrap(), dec!(-0.5));
        assert_eq!(checked_mul(dec!(1.5), dec!(2), "測試").unwrap(), dec!(3));
        assert_eq!(div_or_zero(dec!(3), dec!(2), "測試").unwrap(), dec!(1.5));
        assert_eq!(
            checked_sum([dec!(1), dec!(2), dec!(3.5)], "測試").unwrap(),
            dec!(6.5)
        );
    }

    #[test]
    fn test_overflow_is_error() {
        let err = checked_mul(Decimal::MAX, dec!(2), "原料金額").unwrap_err();
        assert!(matches!(err, QuoteError::CalculationOverflow(ref msg) if msg.starts_with("原料金額")));

        assert!(checked_add(Decimal::MAX, Decimal::ONE, "測試").is_err());
        assert!(checked_sub(Decimal::MIN, Decimal::ONE, "測試").is_err());
        assert!(checked_sum([Decimal::MAX, Decimal::MAX], "測試").is_err());
    }

    #[test]
    fn test_div_zero_divisor_degrades_but_overflow_does_not() {
        assert_eq!(div_or_zero(dec!(10), Decimal::ZERO, "測試").unwrap(), Decimal::ZERO);

        let err = div_or_zero(dec!(1e28), dec!(0.01), "關稅分攤").unwrap_err();
        assert!(matches!(err, QuoteError::CalculationOverflow(_)));
    }
}
