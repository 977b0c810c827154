//! 原料成本計算

use quote_core::{
    checked_add, checked_mul, checked_sum, round3, MaterialCost, MaterialCostItem, Percent,
    UnitClass,
};
use rust_decimal::Decimal;

/// 單價以公斤計、重量以公克填寫的換算係數
const GRAMS_PER_KILOGRAM: Decimal = Decimal::ONE_THOUSAND;

/// 原料成本計算器
pub struct MaterialCostCalculator;

impl MaterialCostCalculator {
    /// 計算原料成本
    ///
    /// 總成本 = (各明細金額 + 抽料費) × (1 + 不良率)，修約至三位小數。
    /// 任一明細單位無法識別或金額溢位即整筆失敗。
    pub fn calculate(
        items: &[MaterialCostItem],
        fluctuation: Percent,
        defect_rate: Percent,
        extraction_cost: Decimal,
    ) -> quote_core::Result<MaterialCost> {
        if items.is_empty() {
            return Ok(MaterialCost::empty());
        }

        let amounts = items
            .iter()
            .map(|item| Self::item_amount(item, fluctuation))
            .collect::<quote_core::Result<Vec<_>>>()?;

        let subtotal = checked_add(
            checked_sum(amounts.iter().copied(), "原料金額加總")?,
            extraction_cost,
            "原料小計",
        )?;
        let total_cost = round3(defect_rate.apply_markup(subtotal, "原料總成本")?);

        tracing::debug!(
            "原料成本: {} 筆明細, 小計 {}, 不良率 {}, 總成本 {}",
            amounts.len(),
            subtotal,
            defect_rate,
            total_cost
        );

        Ok(MaterialCost {
            total_cost,
            amounts,
        })
    }

    /// 單筆原料金額
    pub fn item_amount(
        item: &MaterialCostItem,
        fluctuation: Percent,
    ) -> quote_core::Result<Decimal> {
        let unit = item.parsed_unit()?;

        match unit.class() {
            UnitClass::Weight => {
                let per_gram = item.unit_price / GRAMS_PER_KILOGRAM;
                let amount = checked_mul(per_gram, item.weight, "原料金額")?;
                fluctuation.apply_markup(amount, "原料金額")
            }
            UnitClass::Count => checked_mul(item.unit_price, item.weight, "原料金額"),
        }
    }
}
