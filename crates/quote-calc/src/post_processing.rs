//! 後製程成本計算

use quote_core::{checked_mul, PostProcessingConfig};
use rust_decimal::Decimal;

/// 後製程成本計算器
///
/// 缺少工資資料視為「未設定工資」，回傳 0 而不是錯誤。
pub struct PostProcessingCostCalculator;

impl PostProcessingCostCalculator {
    /// 廠內後製程：時薪 × 工時
    pub fn in_house(
        labor_cost_per_hour: Option<Decimal>,
        labor_hours: Option<Decimal>,
    ) -> quote_core::Result<Decimal> {
        match (labor_cost_per_hour, labor_hours) {
            (Some(rate), Some(hours)) => checked_mul(rate, hours, "後製程工資"),
            _ => Ok(Decimal::ZERO),
        }
    }

    /// 委外或檢驗：單價即費用
    pub fn flat_fee(unit_price: Option<Decimal>) -> Decimal {
        unit_price.unwrap_or(Decimal::ZERO)
    }

    /// 依後製程參數計算廠內工資
    pub fn in_house_from_config(config: &PostProcessingConfig) -> quote_core::Result<Decimal> {
        Self::in_house(config.unit_price, config.labor_hours())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_in_house_cost() {
        assert_eq!(
            PostProcessingCostCalculator::in_house(Some(dec!(180)), Some(dec!(0.25))).unwrap(),
            dec!(45)
        );
    }

    #[test]
    fn test_missing_labor_fields_is_zero() {
        assert_eq!(
            PostProcessingCostCalculator::in_house(None, Some(dec!(2))).unwrap(),
            Decimal::ZERO
        );
        assert_eq!(
            PostProcessingCostCalculator::in_house(Some(dec!(180)), None).unwrap(),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_in_house_from_config() {
        let config = PostProcessingConfig::in_house(dec!(900), dec!(200));
        assert_eq!(PostProcessingCostCalculator::in_house_from_config(&config).unwrap(), dec!(50));

        let flat = PostProcessingConfig::flat(dec!(200));
        assert_eq!(
            PostProcessingCostCalculator::in_house_from_config(&flat).unwrap(),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_flat_fee() {
        assert_eq!(PostProcessingCostCalculator::flat_fee(Some(dec!(12.5))), dec!(12.5));
        assert_eq!(PostProcessingCostCalculator::flat_fee(None), Decimal::ZERO);
    }

    #[test]
    fn test_in_house_overflow_is_error() {
        let err = PostProcessingCostCalculator::in_house(Some(Decimal::MAX), Some(dec!(2)))
            .unwrap_err();

        assert!(matches!(err, quote_core::QuoteError::CalculationOverflow(_)));
    }
}
