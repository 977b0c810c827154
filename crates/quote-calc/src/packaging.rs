//! 包材成本計算

use quote_core::{
    checked_mul, checked_sum, div_or_zero, PackagingCost, PackagingCostItem, PackagingValuation,
};
use rust_decimal::Decimal;

/// 包材成本計算器
pub struct PackagingCostCalculator;

impl PackagingCostCalculator {
    /// 計算包材成本（總成本不修約）
    pub fn calculate(items: &[PackagingCostItem]) -> quote_core::Result<PackagingCost> {
        if items.is_empty() {
            return Ok(PackagingCost::empty());
        }

        let amounts = items
            .iter()
            .map(Self::item_amount)
            .collect::<quote_core::Result<Vec<_>>>()?;
        let total_cost = checked_sum(amounts.iter().copied(), "包材金額加總")?;

        tracing::debug!("包材成本: {} 筆明細, 總成本 {}", amounts.len(), total_cost);

        Ok(PackagingCost {
            total_cost,
            amounts,
        })
    }

    /// 單筆包材金額
    pub fn item_amount(item: &PackagingCostItem) -> quote_core::Result<Decimal> {
        match item.valuation() {
            PackagingValuation::Count => checked_mul(item.unit_price, item.quantity, "包材金額"),
            PackagingValuation::Capacity(_) => {
                let amount = checked_mul(item.unit_price, item.quantity, "包材金額")?;
                div_or_zero(amount, item.effective_capacity(), "包材金額")
            }
            PackagingValuation::Precomputed => {
                Ok(item.precomputed_amount.unwrap_or(Decimal::ZERO))
            }
        }
    }
}
