//! 利潤管理計算

use quote_core::{
    checked_add, checked_sub, div_or_zero, round3, ProfitManagementResult, ProfitRates,
};
use rust_decimal::Decimal;

/// 利潤管理計算器
///
/// 各步驟依序使用前一步的結果（非各自以成本為基數），
/// 中間值保持完整精度，只有輸出欄位各自修約。
pub struct ProfitManagementCalculator;

impl ProfitManagementCalculator {
    /// 計算利潤管理
    pub fn calculate(
        cost_subtotal: Decimal,
        rates: &ProfitRates,
        actual_quotation: Decimal,
    ) -> quote_core::Result<ProfitManagementResult> {
        let sg_and_admin_fee = rates.sg.portion_of(cost_subtotal, "管銷研費用")?;
        let with_sga = checked_add(cost_subtotal, sg_and_admin_fee, "管銷研小計")?;
        let profit_fee = rates.profit.portion_of(with_sga, "利潤")?;
        let subtotal_with_sga = checked_add(with_sga, profit_fee, "含利潤小計")?;
        let risk_fee = rates.risk.portion_of(subtotal_with_sga, "風險費用")?;
        let total_cost = checked_add(subtotal_with_sga, risk_fee, "總成本")?;
        let annual_reduction_amount =
            rates.annual_reduction.apply_markup(total_cost, "年降金額")?;
        let rebate_amount = rates.rebate.apply_markup(annual_reduction_amount, "回饋金額")?;
        let gross_profit_margin = Self::gross_profit_margin(cost_subtotal, actual_quotation)?;

        tracing::debug!(
            "利潤管理: 成本 {}, 管銷 {}, 利潤 {}, 風險 {}, 總成本 {}, 毛利率 {}",
            cost_subtotal,
            sg_and_admin_fee,
            profit_fee,
            risk_fee,
            total_cost,
            gross_profit_margin
        );

        Ok(ProfitManagementResult {
            cost_subtotal: round3(cost_subtotal),
            sg_and_admin_fee: round3(sg_and_admin_fee),
            profit_fee: round3(profit_fee),
            subtotal_with_sga: round3(subtotal_with_sga),
            risk_fee: round3(risk_fee),
            total_cost: round3(total_cost),
            annual_reduction_amount: round3(annual_reduction_amount),
            rebate_amount: round3(rebate_amount),
            gross_profit_margin: round3(gross_profit_margin),
        })
    }

    /// 毛利率 = (實際報價 - 成本) ÷ 成本，成本為 0 時回傳 0
    pub fn gross_profit_margin(
        cost_subtotal: Decimal,
        actual_quotation: Decimal,
    ) -> quote_core::Result<Decimal> {
        let gross_profit = checked_sub(actual_quotation, cost_subtotal, "毛利")?;
        div_or_zero(gross_profit, cost_subtotal, "毛利率")
    }
}
