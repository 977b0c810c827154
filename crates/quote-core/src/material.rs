//! 原料成本模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{MaterialUnit, Percent};

/// 原料明細
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialCostItem {
    /// 單價
    pub unit_price: Decimal,

    /// 重量（依重量計價時以公克填寫）或數量
    pub weight: Decimal,

    /// 單位代碼
    pub unit: String,
}

impl MaterialCostItem {
    /// 創建新的原料明細
    pub fn new(unit_price: Decimal, weight: Decimal, unit: impl Into<String>) -> Self {
        Self {
            unit_price,
            weight,
            unit: unit.into(),
        }
    }

    /// 以已知單位創建
    pub fn with_unit(unit_price: Decimal, weight: Decimal, unit: MaterialUnit) -> Self {
        Self::new(unit_price, weight, unit.code())
    }

    /// 解析單位
    pub fn parsed_unit(&self) -> crate::Result<MaterialUnit> {
        self.unit.parse()
    }
}

/// 原料成本設定（表單以整數百分比填寫）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaterialCostSetting {
    /// 預估不良率（%）
    pub estimated_defect_rate: Decimal,

    /// 預估原料波動（%）
    pub estimated_material_fluctuation: Decimal,

    /// 抽料費
    pub extraction_cost: Decimal,
}

impl MaterialCostSetting {
    /// 創建新的原料成本設定
    pub fn new(
        estimated_defect_rate: Decimal,
        estimated_material_fluctuation: Decimal,
        extraction_cost: Decimal,
    ) -> Self {
        Self {
            estimated_defect_rate,
            estimated_material_fluctuation,
            extraction_cost,
        }
    }

    pub fn defect_rate(&self) -> Percent {
        Percent::from_whole(self.estimated_defect_rate)
    }

    pub fn fluctuation(&self) -> Percent {
        Percent::from_whole(self.estimated_material_fluctuation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_setting_percentages() {
        let setting = MaterialCostSetting::new(dec!(2), dec!(5), dec!(10));

        assert_eq!(setting.defect_rate().fraction(), dec!(0.02));
        assert_eq!(setting.fluctuation().fraction(), dec!(0.05));
    }

    #[test]
    fn test_deserialize_item() {
        let item: MaterialCostItem =
            serde_json::from_str(r#"{"unitPrice": 50, "weight": 100, "unit": "kg"}"#).unwrap();

        assert_eq!(item.unit_price, dec!(50));
        assert_eq!(item.parsed_unit().unwrap(), MaterialUnit::Kilogram);
    }

    #[test]
    fn test_setting_defaults_missing_fields() {
        let setting: MaterialCostSetting =
            serde_json::from_str(r#"{"extractionCost": 12}"#).unwrap();

        assert_eq!(setting.extraction_cost, dec!(12));
        assert!(setting.defect_rate().is_zero());
    }
}
