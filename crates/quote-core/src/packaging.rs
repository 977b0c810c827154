//! 包材成本模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::CapacityUnit;

/// 依數量計價的包材類型
pub const PACKAGING_MATERIAL: &str = "包材";

/// 包材明細
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PackagingCostItem {
    /// 包材類型
    pub packaging_type: String,

    /// 單位
    pub unit: String,

    /// 數量
    pub quantity: Decimal,

    /// 容量
    pub capacity: Decimal,

    /// 單價
    pub unit_price: Decimal,

    /// 預先計算的金額（兩種計價規則都不適用時採用）
    #[serde(rename = "amount", skip_serializing_if = "Option::is_none")]
    pub precomputed_amount: Option<Decimal>,
}

/// 包材計價方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackagingValuation {
    /// 單價 × 數量
    Count,
    /// 單價 × 數量 ÷ 容量
    Capacity(CapacityUnit),
    /// 沿用預先計算的金額
    Precomputed,
}

impl PackagingCostItem {
    /// 創建新的包材明細
    pub fn new(
        packaging_type: impl Into<String>,
        unit: impl Into<String>,
        quantity: Decimal,
        capacity: Decimal,
        unit_price: Decimal,
    ) -> Self {
        Self {
            packaging_type: packaging_type.into(),
            unit: unit.into(),
            quantity,
            capacity,
            unit_price,
            precomputed_amount: None,
        }
    }

    /// 建構器模式：設置預先計算的金額
    pub fn with_precomputed_amount(mut self, amount: Decimal) -> Self {
        self.precomputed_amount = Some(amount);
        self
    }

    /// 判斷計價方式（包材類型優先於容量單位）
    pub fn valuation(&self) -> PackagingValuation {
        if self.packaging_type == PACKAGING_MATERIAL {
            PackagingValuation::Count
        } else if let Some(unit) = CapacityUnit::parse(&self.unit) {
            PackagingValuation::Capacity(unit)
        } else {
            PackagingValuation::Precomputed
        }
    }

    /// 有效容量，0 視為 1
    pub fn effective_capacity(&self) -> Decimal {
        if self.capacity.is_zero() {
            Decimal::ONE
        } else {
            self.capacity
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_valuation_dispatch() {
        let count = PackagingCostItem::new(PACKAGING_MATERIAL, "公斤", dec!(1), dec!(2), dec!(3));
        assert_eq!(count.valuation(), PackagingValuation::Count);

        let capacity = PackagingCostItem::new("其他", "磅", dec!(1), dec!(2), dec!(3));
        assert_eq!(
            capacity.valuation(),
            PackagingValuation::Capacity(CapacityUnit::Pound)
        );

        let other = PackagingCostItem::new("其他", "箱", dec!(1), dec!(2), dec!(3));
        assert_eq!(other.valuation(), PackagingValuation::Precomputed);
    }

    #[test]
    fn test_effective_capacity() {
        let item = PackagingCostItem::new("其他", "公斤", dec!(1), Decimal::ZERO, dec!(3));
        assert_eq!(item.effective_capacity(), Decimal::ONE);
    }

    #[test]
    fn test_deserialize_amount_override() {
        let item: PackagingCostItem = serde_json::from_str(
            r#"{"packagingType": "其他", "unit": "箱", "quantity": 1, "unitPrice": 5, "amount": 42}"#,
        )
        .unwrap();

        assert_eq!(item.precomputed_amount, Some(dec!(42)));
        assert_eq!(item.capacity, Decimal::ZERO);
    }
}
