//! # Quotation
//!
//! 製造報價成本計算：原料、包材、成型、後製程、運輸費用彙總，
//! 再經利潤管理加成得到報價與毛利率。

pub mod logging;

pub use quote_calc::{
    calculate_additional_fees, calculate_material_cost, calculate_molding_cost,
    calculate_molding_electricity_cost, calculate_packaging_cost, calculate_post_processing_cost,
    calculate_process_cost, calculate_profit_management, calculate_profit_management_raw,
    run_quotation_pipeline, MaterialCostCalculator, MoldingCostCalculator,
    PackagingCostCalculator, PostProcessingCostCalculator, ProcessCostAggregator,
    ProfitManagementCalculator, QuotationEngine, TransportationCostCalculator,
};
pub use quote_core::*;
pub use rust_decimal::Decimal;

/// 從 JSON 字串解析製程清單
pub fn processes_from_json(json: &str) -> serde_json::Result<Vec<Process>> {
    serde_json::from_str(json)
}

/// 將報價彙總輸出為 JSON
pub fn summary_to_json(summary: &QuotationSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}
