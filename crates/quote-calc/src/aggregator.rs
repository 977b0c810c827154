//! 製程成本彙總

use quote_core::{
    round3, CostBreakdown, CostDetail, MaterialCost, PackagingCost, Process, ProcessCategory,
    QuoteConfig, QuoteError,
};
use rust_decimal::Decimal;

use crate::material::MaterialCostCalculator;
use crate::molding::MoldingCostCalculator;
use crate::packaging::PackagingCostCalculator;
use crate::post_processing::PostProcessingCostCalculator;

/// 製程成本彙總器
///
/// 依製程類別組合對應的子計算器：
///
/// | 類別 | 組成 |
/// |---|---|
/// | 廠內成型 | 原料 + 包材 + 成型 + 電費 |
/// | 委外成型 / 委外後製程 | 原料 + 包材 + 委外單價 |
/// | 廠內後製程 | 原料 + 包材 + 工時工資 |
/// | 廠內出貨檢驗 | 檢驗單價 |
pub struct ProcessCostAggregator;

impl ProcessCostAggregator {
    /// 計算單一製程成本明細
    pub fn calculate(config: &QuoteConfig, process: &Process) -> quote_core::Result<CostDetail> {
        tracing::debug!("計算製程成本: {} ({})", process.id, process.process_category);

        let cost_breakdown = match &process.process_category {
            ProcessCategory::InHouseMolding => Self::in_house_molding(config, process)?,
            ProcessCategory::OutsourcedMolding | ProcessCategory::OutsourcedPost => {
                Self::outsourced(process)?
            }
            ProcessCategory::InHousePost => Self::in_house_post(process)?,
            ProcessCategory::InHouseInspection => Self::inspection(process)?,
            ProcessCategory::Unrecognized(code) => {
                return Err(QuoteError::UnknownProcessCategory(code.clone()));
            }
        };

        let cost_subtotal = round3(cost_breakdown.component_total()?);

        tracing::debug!("製程 {} 成本小計: {}", process.id, cost_subtotal);

        Ok(CostDetail {
            id: process.id.clone(),
            process_category: process.process_category.clone(),
            cost_subtotal,
            cost_breakdown,
        })
    }

    fn in_house_molding(
        config: &QuoteConfig,
        process: &Process,
    ) -> quote_core::Result<CostBreakdown> {
        let (material, packaging) = Self::material_and_packaging(process)?;

        let (molding, electricity) = match &process.molding {
            Some(molding) => MoldingCostCalculator::from_config(config, molding)?,
            None => {
                tracing::warn!("製程 {} 缺少成型參數，成型費與電費以 0 計", process.id);
                (Decimal::ZERO, Decimal::ZERO)
            }
        };

        Ok(CostBreakdown {
            material: Some(material),
            packaging: Some(packaging),
            molding: Some(molding),
            electricity: Some(electricity),
            ..CostBreakdown::default()
        })
    }

    fn outsourced(process: &Process) -> quote_core::Result<CostBreakdown> {
        let (material, packaging) = Self::material_and_packaging(process)?;

        Ok(CostBreakdown {
            material: Some(material),
            packaging: Some(packaging),
            outsourced: Some(Self::flat_fee(process)),
            ..CostBreakdown::default()
        })
    }

    fn in_house_post(process: &Process) -> quote_core::Result<CostBreakdown> {
        let (material, packaging) = Self::material_and_packaging(process)?;

        let post_processing = match &process.post_processing {
            Some(post) => PostProcessingCostCalculator::in_house_from_config(post)?,
            None => {
                tracing::warn!("製程 {} 缺少後製程參數，工資以 0 計", process.id);
                Decimal::ZERO
            }
        };

        Ok(CostBreakdown {
            material: Some(material),
            packaging: Some(packaging),
            post_processing: Some(post_processing),
            ..CostBreakdown::default()
        })
    }

    fn inspection(process: &Process) -> quote_core::Result<CostBreakdown> {
        Ok(CostBreakdown {
            outsourced: Some(Self::flat_fee(process)),
            ..CostBreakdown::default()
        })
    }

    fn material_and_packaging(
        process: &Process,
    ) -> quote_core::Result<(MaterialCost, PackagingCost)> {
        let setting = &process.material_cost_setting;
        let material = MaterialCostCalculator::calculate(
            &process.materials,
            setting.fluctuation(),
            setting.defect_rate(),
            setting.extraction_cost,
        )?;
        let packaging = PackagingCostCalculator::calculate(&process.packaging)?;

        Ok((material, packaging))
    }

    fn flat_fee(process: &Process) -> Decimal {
        let unit_price = process.post_processing.as_ref().and_then(|p| p.unit_price);
        if unit_price.is_none() {
            tracing::warn!("製程 {} 未設定單價，費用以 0 計", process.id);
        }
        PostProcessingCostCalculator::flat_fee(unit_price)
    }
}
