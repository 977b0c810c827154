//! 成型與電費計算

use quote_core::{
    checked_add, checked_mul, div_or_zero, round3, MoldingCostConfig, Percent, QuoteConfig,
};
use rust_decimal::Decimal;

/// 成型成本計算器
pub struct MoldingCostCalculator;

impl MoldingCostCalculator {
    /// 每模次分攤成型費
    ///
    /// 班次總模次 = 班次秒數 ÷ (成型週期 + 包裝時間) × 模穴數 × 稼動率；
    /// 成型費 = 試模單價 × (1 + 不良率) ÷ 班次總模次。
    /// 總模次為 0 時回傳 0；溢位回傳錯誤。
    pub fn molding_cost(
        config: &QuoteConfig,
        defect_rate: Percent,
        cycle_time: Decimal,
        package_time: Decimal,
        mold_cavity: u32,
        work_hours_ratio: Percent,
        unit_price: Option<Decimal>,
    ) -> quote_core::Result<Decimal> {
        let unit_price = unit_price.unwrap_or(config.default_trial_mold_price);
        let amount = defect_rate.apply_markup(unit_price, "試模費用")?;

        let total_shots = Self::total_shots(
            config,
            cycle_time,
            package_time,
            mold_cavity,
            work_hours_ratio,
        )?;

        if total_shots.is_zero() {
            tracing::warn!(
                "班次總模次為 0（週期 {}, 包裝 {}, 模穴 {}, 稼動率 {}），成型費以 0 計",
                cycle_time,
                package_time,
                mold_cavity,
                work_hours_ratio
            );
            return Ok(Decimal::ZERO);
        }

        Ok(round3(div_or_zero(amount, total_shots, "每模次成型費")?))
    }

    /// 班次可生產的總模次
    pub fn total_shots(
        config: &QuoteConfig,
        cycle_time: Decimal,
        package_time: Decimal,
        mold_cavity: u32,
        work_hours_ratio: Percent,
    ) -> quote_core::Result<Decimal> {
        let seconds_per_shot = checked_add(cycle_time, package_time, "每模次秒數")?;
        if seconds_per_shot <= Decimal::ZERO {
            return Ok(Decimal::ZERO);
        }

        let shots = div_or_zero(config.shift_seconds, seconds_per_shot, "班次模次")?;
        let shots = checked_mul(shots, Decimal::from(mold_cavity), "班次模次")?;
        work_hours_ratio.portion_of(shots, "班次模次")
    }

    /// 每模次電費 = 每秒電費 × 成型週期 ÷ 模穴數
    pub fn electricity_cost(
        cycle_time: Decimal,
        mold_cavity: u32,
        electricity_cost_per_second: Option<Decimal>,
    ) -> quote_core::Result<Decimal> {
        let per_second = electricity_cost_per_second.unwrap_or(Decimal::ZERO);
        let per_cycle = checked_mul(per_second, cycle_time, "每模次電費")?;

        Ok(round3(div_or_zero(
            per_cycle,
            Decimal::from(mold_cavity),
            "每模次電費",
        )?))
    }

    /// 依成型參數計算 (成型費, 電費)
    pub fn from_config(
        config: &QuoteConfig,
        molding: &MoldingCostConfig,
    ) -> quote_core::Result<(Decimal, Decimal)> {
        let molding_cost = Self::molding_cost(
            config,
            molding.defect_rate(),
            molding.cycle_time,
            molding.package_time,
            molding.mold_cavity,
            molding.work_ratio(),
            molding.unit_price,
        )?;
        let electricity_cost = Self::electricity_cost(
            molding.cycle_time,
            molding.mold_cavity,
            molding.electricity_cost_per_second,
        )?;

        Ok((molding_cost, electricity_cost))
    }
}
