//! # Quotation Core
//!
//! 報價核心資料模型與類型定義

pub mod config;
pub mod material;
pub mod money;
pub mod packaging;
pub mod percent;
pub mod process;
pub mod quotation;
pub mod shipping;
pub mod unit;

// Re-export 主要類型
pub use config::QuoteConfig;
pub use material::{MaterialCostItem, MaterialCostSetting};
pub use money::{
    checked_add, checked_mul, checked_sub, checked_sum, div_or_zero, round3, MONEY_SCALE,
};
pub use packaging::{PackagingCostItem, PackagingValuation, PACKAGING_MATERIAL};
pub use percent::Percent;
pub use process::{MoldingCostConfig, PostProcessingConfig, Process, ProcessCategory};
pub use quotation::{
    CostBreakdown, CostDetail, MaterialCost, PackagingCost, ProfitInputs,
    ProfitManagementResult, ProfitRates, QuotationSummary, TransportationCost,
};
pub use shipping::{CustomsDuty, Freight, ShippingCosts};
pub use unit::{CapacityUnit, MaterialUnit, UnitClass};

/// 報價錯誤類型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoteError {
    #[error("無法識別的單位: {0}")]
    UnknownUnit(String),

    #[error("無法識別的製程類別: {0}")]
    UnknownProcessCategory(String),

    #[error("無效的配置: {0}")]
    InvalidConfig(String),

    #[error("計算溢位: {0}")]
    CalculationOverflow(String),
}

pub type Result<T> = std::result::Result<T, QuoteError>;
