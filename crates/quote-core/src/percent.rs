//! 百分比數值類型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::{checked_add, checked_mul};

/// 百分比
///
/// 內部直接儲存小數形式（`0.05` 代表 5%），避免「5」與「0.05」混淆。
/// 表單層以整數百分比填寫的欄位請用 [`Percent::from_whole`] 轉換。
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Percent(Decimal);

impl Percent {
    pub const ZERO: Percent = Percent(Decimal::ZERO);

    /// 從小數形式建立（`0.07` => 7%）
    pub fn from_fraction(fraction: Decimal) -> Self {
        Self(fraction)
    }

    /// 從整數百分比建立（`7` => 7%）
    pub fn from_whole(whole: Decimal) -> Self {
        Self(whole / Decimal::ONE_HUNDRED)
    }

    /// 舊版利潤率輸入的換算規則
    ///
    /// 小於 1 視為已是小數，否則除以 100。
    /// 無法區分「1%」與「100%」這類邊界值，只應在利潤管理輸入邊界使用。
    pub fn normalize(raw: Decimal) -> Self {
        if raw < Decimal::ONE {
            Self::from_fraction(raw)
        } else {
            Self::from_whole(raw)
        }
    }

    /// 小數形式
    pub fn fraction(self) -> Decimal {
        self.0
    }

    /// 整數百分比形式，超出範圍時為 `None`
    pub fn as_whole(self) -> Option<Decimal> {
        self.0.checked_mul(Decimal::ONE_HUNDRED)
    }

    /// 加成係數（`1 + 比率`）
    pub fn markup(self) -> crate::Result<Decimal> {
        checked_add(Decimal::ONE, self.0, "加成係數")
    }

    /// `value × 比率`
    pub fn portion_of(self, value: Decimal, context: &str) -> crate::Result<Decimal> {
        checked_mul(value, self.0, context)
    }

    /// `value × (1 + 比率)`
    pub fn apply_markup(self, value: Decimal, context: &str) -> crate::Result<Decimal> {
        checked_mul(value, self.markup()?, context)
    }

    /// 比率為零
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_whole() {
            Some(whole) => write!(f, "{}%", whole.normalize()),
            None => write!(f, "{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_whole_and_fraction_agree() {
        assert_eq!(Percent::from_whole(dec!(5)), Percent::from_fraction(dec!(0.05)));
        assert_eq!(Percent::from_whole(dec!(5)).markup().unwrap(), dec!(1.05));
    }

    #[test]
    fn test_apply_markup() {
        let rate = Percent::from_whole(dec!(2));

        assert_eq!(rate.apply_markup(dec!(1000), "測試").unwrap(), dec!(1020));
        assert_eq!(rate.portion_of(dec!(1000), "測試").unwrap(), dec!(20));
    }

    #[test]
    fn test_markup_overflow_is_error() {
        let huge = Percent::from_fraction(Decimal::MAX);

        assert!(huge.markup().is_err());
        assert!(Percent::from_whole(dec!(100)).apply_markup(Decimal::MAX, "測試").is_err());
        assert_eq!(huge.to_string(), Decimal::MAX.to_string());
    }

    #[rstest]
    #[case(dec!(0.07), dec!(0.07))]
    #[case(dec!(7), dec!(0.07))]
    #[case(dec!(1), dec!(0.01))]
    #[case(dec!(0), dec!(0))]
    #[case(dec!(150), dec!(1.5))]
    fn test_normalize(#[case] raw: Decimal, #[case] fraction: Decimal) {
        assert_eq!(Percent::normalize(raw).fraction(), fraction);
    }

    #[test]
    fn test_display() {
        assert_eq!(Percent::from_fraction(dec!(0.075)).to_string(), "7.5%");
    }

    #[test]
    fn test_serde_transparent() {
        let percent: Percent = serde_json::from_str("0.25").unwrap();
        assert_eq!(percent.fraction(), dec!(0.25));
    }
}
