//! 報價主計算流程

use quote_core::{
    checked_sum, CostDetail, Process, ProfitInputs, QuotationSummary, QuoteConfig, QuoteError,
    ShippingCosts, TransportationCost,
};
use rayon::prelude::*;

use crate::aggregator::ProcessCostAggregator;
use crate::profit::ProfitManagementCalculator;
use crate::transportation::TransportationCostCalculator;

/// 報價引擎
pub struct QuotationEngine {
    /// 計算參數
    config: QuoteConfig,
}

impl QuotationEngine {
    /// 創建新的報價引擎
    pub fn new(config: QuoteConfig) -> Self {
        Self { config }
    }

    /// 主報價計算入口
    ///
    /// 任一製程失敗即中止，不回傳部分結果。
    pub fn run(
        &self,
        processes: &[Process],
        shipping: &ShippingCosts,
        profit_inputs: &ProfitInputs,
    ) -> quote_core::Result<QuotationSummary> {
        tracing::info!(
            "開始報價計算：製程 {} 筆，運費 {} 筆，關稅 {} 筆",
            processes.len(),
            shipping.freights.len(),
            shipping.customs_duties.len()
        );

        let start_time = std::time::Instant::now();

        // Step 1: 各製程成本
        let cost_details = self.calculate_processes(processes)?;

        // Step 2: 運輸附加費用
        let transportation = if shipping.is_empty() {
            tracing::debug!("無運費與關稅資料，運輸費用以 0 計");
            TransportationCost::zero()
        } else {
            TransportationCostCalculator::calculate(
                &self.config,
                &shipping.freights,
                &shipping.customs_duties,
            )?
        };

        // Step 3: 成本小計加總
        let total_cost_subtotal =
            checked_sum(cost_details.iter().map(|d| d.cost_subtotal), "報價成本小計")?;

        // Step 4: 利潤管理
        let profit = ProfitManagementCalculator::calculate(
            total_cost_subtotal,
            &profit_inputs.rates(),
            profit_inputs.actual_quotation,
        )?;

        tracing::info!(
            "報價計算完成，耗時 {:?}：成本小計 {}，運輸 {}，總成本 {}",
            start_time.elapsed(),
            total_cost_subtotal,
            transportation.total_cost,
            profit.total_cost
        );

        Ok(QuotationSummary {
            total_cost_subtotal,
            cost_details,
            transportation,
            profit,
        })
    }

    /// 計算所有製程成本（結果順序與輸入一致）
    ///
    /// 派工前先檢查類別，輸入順序中第一個無法識別的類別即為回報的錯誤。
    pub fn calculate_processes(&self, processes: &[Process]) -> quote_core::Result<Vec<CostDetail>> {
        if let Some(process) = processes
            .iter()
            .find(|process| !process.process_category.is_recognized())
        {
            tracing::warn!(
                "製程 {} 類別無法識別: {}",
                process.id,
                process.process_category
            );
            return Err(QuoteError::UnknownProcessCategory(
                process.process_category.code().to_string(),
            ));
        }

        if self.config.should_parallelize(processes.len()) {
            tracing::debug!("並行計算 {} 筆製程", processes.len());
            processes
                .par_iter()
                .map(|process| ProcessCostAggregator::calculate(&self.config, process))
                .collect()
        } else {
            processes
                .iter()
                .map(|process| ProcessCostAggregator::calculate(&self.config, process))
                .collect()
        }
    }

    /// 單一製程成本
    pub fn calculate_process(&self, process: &Process) -> quote_core::Result<CostDetail> {
        ProcessCostAggregator::calculate(&self.config, process)
    }

    /// 獲取配置引用
    pub fn config(&self) -> &QuoteConfig {
        &self.config
    }
}

impl Default for QuotationEngine {
    fn default() -> Self {
        Self::new(QuoteConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote_core::{
        CustomsDuty, Freight, MaterialCostItem, MaterialCostSetting, PostProcessingConfig,
        ProcessCategory,
    };
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn inspection(id: &str, price: Decimal) -> Process {
        Process::new(id, ProcessCategory::InHouseInspection)
            .with_post_processing(PostProcessingConfig::flat(price))
    }

    fn profit_inputs() -> ProfitInputs {
        ProfitInputs {
            sg_rate: dec!(7),
            profit_rate: dec!(5),
            risk_rate: dec!(2),
            annual_reduction_rate: dec!(2),
            rebate_rate: dec!(2),
            actual_quotation: dec!(1200),
        }
    }

    #[test]
    fn test_run_pipeline() {
        let engine = QuotationEngine::default();
        let processes = vec![inspection("A", dec!(600)), inspection("B", dec!(400))];
        let shipping = ShippingCosts::new(
            vec![Freight::new(dec!(100), dec!(5), dec!(1000))],
            vec![CustomsDuty::new(dec!(500), dec!(1000))],
        );

        let summary = engine.run(&processes, &shipping, &profit_inputs()).unwrap();

        assert_eq!(summary.total_cost_subtotal, dec!(1000));
        assert_eq!(summary.cost_details.len(), 2);
        assert_eq!(summary.transportation.total_cost, dec!(1.8));
        assert_eq!(summary.profit.total_cost, dec!(1145.97));
        assert_eq!(summary.profit.gross_profit_margin, dec!(0.2));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let processes: Vec<Process> = (0..40)
            .map(|i| {
                Process::new(format!("P-{i}"), ProcessCategory::OutsourcedPost)
                    .with_material_cost_setting(MaterialCostSetting::new(dec!(3), dec!(4), dec!(1)))
                    .with_materials(vec![MaterialCostItem::new(
                        Decimal::from(10 + i),
                        dec!(250),
                        "g",
                    )])
                    .with_post_processing(PostProcessingConfig::flat(Decimal::from(i)))
            })
            .collect();

        let sequential = QuotationEngine::new(QuoteConfig::new().with_parallel_threshold(usize::MAX));
        let parallel = QuotationEngine::new(QuoteConfig::new().with_parallel_threshold(1));

        let a = sequential.calculate_processes(&processes).unwrap();
        let b = parallel.calculate_processes(&processes).unwrap();

        assert_eq!(a, b);
        assert_eq!(b[7].id, "P-7");
    }

    #[test]
    fn test_error_aborts_pipeline() {
        let engine = QuotationEngine::new(QuoteConfig::new().with_parallel_threshold(1));
        let processes = vec![
            inspection("A", dec!(600)),
            Process::new("B", ProcessCategory::from("WELDING")),
        ];

        let err = engine
            .run(&processes, &ShippingCosts::default(), &profit_inputs())
            .unwrap_err();

        assert_eq!(err, QuoteError::UnknownProcessCategory("WELDING".to_string()));
    }

    #[test]
    fn test_empty_quotation() {
        let summary = QuotationEngine::default()
            .run(&[], &ShippingCosts::default(), &ProfitInputs::default())
            .unwrap();

        assert_eq!(summary.total_cost_subtotal, Decimal::ZERO);
        assert!(summary.cost_details.is_empty());
        assert_eq!(summary.profit.gross_profit_margin, Decimal::ZERO);
        assert_eq!(summary.transportation, TransportationCost::zero());
    }

    #[test]
    fn test_first_unknown_category_in_input_order() {
        let engine = QuotationEngine::new(QuoteConfig::new().with_parallel_threshold(1));
        let mut processes: Vec<Process> =
            (0..32).map(|i| inspection(&format!("Q-{i}"), dec!(1))).collect();
        processes[5] = Process::new("X", ProcessCategory::from("WELDING"));
        processes[20] = Process::new("Y", ProcessCategory::from("PAINTING"));

        let err = engine.calculate_processes(&processes).unwrap_err();

        assert_eq!(err, QuoteError::UnknownProcessCategory("WELDING".to_string()));
    }

    #[test]
    fn test_subtotal_overflow_aborts() {
        let processes = vec![inspection("A", Decimal::MAX), inspection("B", Decimal::MAX)];

        let err = QuotationEngine::default()
            .run(&processes, &ShippingCosts::default(), &profit_inputs())
            .unwrap_err();

        assert!(matches!(err, QuoteError::CalculationOverflow(_)));
    }

    #[test]
    fn test_engine_keeps_config() {
        let config = QuoteConfig::new().with_driver_work_hours(dec!(0.5));
        let engine = QuotationEngine::new(config.clone());

        assert_eq!(engine.config(), &config);
    }
}
