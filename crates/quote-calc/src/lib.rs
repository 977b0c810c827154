//! # Quotation Calculation Engine
//!
//! 報價成本計算引擎
//!
//! 各計算器皆為純函數，不做 I/O、不保留狀態。以下自由函數使用預設
//! [`QuoteConfig`]；需要自訂參數時改用 [`QuotationEngine`] 或各計算器。
//!
//! 金額運算一律檢查溢位，超出 `Decimal` 範圍回傳
//! [`QuoteError::CalculationOverflow`](quote_core::QuoteError::CalculationOverflow)。

pub mod aggregator;
pub mod material;
pub mod molding;
pub mod packaging;
pub mod pipeline;
pub mod post_processing;
pub mod profit;
pub mod transportation;

// Re-export 主要類型
pub use aggregator::ProcessCostAggregator;
pub use material::MaterialCostCalculator;
pub use molding::MoldingCostCalculator;
pub use packaging::PackagingCostCalculator;
pub use pipeline::QuotationEngine;
pub use post_processing::PostProcessingCostCalculator;
pub use profit::ProfitManagementCalculator;
pub use transportation::TransportationCostCalculator;

use quote_core::{
    CostDetail, CustomsDuty, Freight, MaterialCost, MaterialCostItem, PackagingCost,
    PackagingCostItem, Percent, Process, ProfitInputs, ProfitManagementResult, ProfitRates,
    QuotationSummary, QuoteConfig, ShippingCosts, TransportationCost,
};
use rust_decimal::Decimal;

/// 原料成本
pub fn calculate_material_cost(
    items: &[MaterialCostItem],
    fluctuation: Percent,
    defect_rate: Percent,
    extraction_cost: Decimal,
) -> quote_core::Result<MaterialCost> {
    MaterialCostCalculator::calculate(items, fluctuation, defect_rate, extraction_cost)
}

/// 包材成本
pub fn calculate_packaging_cost(items: &[PackagingCostItem]) -> quote_core::Result<PackagingCost> {
    PackagingCostCalculator::calculate(items)
}

/// 每模次分攤成型費
pub fn calculate_molding_cost(
    defect_rate: Percent,
    cycle_time: Decimal,
    package_time: Decimal,
    mold_cavity: u32,
    work_hours_ratio: Percent,
    unit_price: Option<Decimal>,
) -> quote_core::Result<Decimal> {
    MoldingCostCalculator::molding_cost(
        &QuoteConfig::default(),
        defect_rate,
        cycle_time,
        package_time,
        mold_cavity,
        work_hours_ratio,
        unit_price,
    )
}

/// 每模次電費
pub fn calculate_molding_electricity_cost(
    cycle_time: Decimal,
    mold_cavity: u32,
    electricity_cost_per_second: Option<Decimal>,
) -> quote_core::Result<Decimal> {
    MoldingCostCalculator::electricity_cost(cycle_time, mold_cavity, electricity_cost_per_second)
}

/// 廠內後製程工資
pub fn calculate_post_processing_cost(
    labor_cost_per_hour: Option<Decimal>,
    labor_hours: Option<Decimal>,
) -> quote_core::Result<Decimal> {
    PostProcessingCostCalculator::in_house(labor_cost_per_hour, labor_hours)
}

/// 運費與關稅
pub fn calculate_additional_fees(
    freights: &[Freight],
    customs_duties: &[CustomsDuty],
) -> quote_core::Result<TransportationCost> {
    TransportationCostCalculator::calculate(&QuoteConfig::default(), freights, customs_duties)
}

/// 單一製程成本明細
pub fn calculate_process_cost(process: &Process) -> quote_core::Result<CostDetail> {
    ProcessCostAggregator::calculate(&QuoteConfig::default(), process)
}

/// 利潤管理
pub fn calculate_profit_management(
    cost_subtotal: Decimal,
    rates: &ProfitRates,
    actual_quotation: Decimal,
) -> quote_core::Result<ProfitManagementResult> {
    ProfitManagementCalculator::calculate(cost_subtotal, rates, actual_quotation)
}

/// 利潤管理（原始費率：小於 1 視為小數，否則視為整數百分比）
pub fn calculate_profit_management_raw(
    cost_subtotal: Decimal,
    sg_rate: Decimal,
    profit_rate: Decimal,
    risk_rate: Decimal,
    annual_reduction_rate: Decimal,
    rebate_rate: Decimal,
    actual_quotation: Decimal,
) -> quote_core::Result<ProfitManagementResult> {
    let inputs = ProfitInputs {
        sg_rate,
        profit_rate,
        risk_rate,
        annual_reduction_rate,
        rebate_rate,
        actual_quotation,
    };
    ProfitManagementCalculator::calculate(cost_subtotal, &inputs.rates(), actual_quotation)
}

/// 完整報價流程
pub fn run_quotation_pipeline(
    processes: &[Process],
    shipping: &ShippingCosts,
    profit_inputs: &ProfitInputs,
) -> quote_core::Result<QuotationSummary> {
    QuotationEngine::default().run(processes, shipping, profit_inputs)
}
