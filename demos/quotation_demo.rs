//! 報價計算示例

use anyhow::Context;
use quotation::{
    logging, processes_from_json, summary_to_json, Freight, ProfitInputs, QuotationEngine,
    QuoteConfig, ShippingCosts,
};
use rust_decimal::Decimal;

const PROCESSES: &str = r#"[
    {
        "id": "MOLD-01",
        "processCategory": "IN_HOUSE_MOLDING",
        "materialCostSetting": {
            "estimatedDefectRate": 2,
            "estimatedMaterialFluctuation": 5,
            "extractionCost": 10
        },
        "materials": [
            {"unitPrice": 50, "weight": 100, "unit": "kg"},
            {"unitPrice": 0.8, "weight": 2, "unit": "件"}
        ],
        "packaging": [
            {"packagingType": "其他", "unit": "公斤", "quantity": 2, "capacity": 4, "unitPrice": 68}
        ],
        "molding": {
            "defectiveRate": 2,
            "cycleTime": 30,
            "packageTime": 5,
            "moldCavity": 4,
            "workHoursRatio": 85,
            "electricityCostPerSecond": 0.05
        }
    },
    {
        "id": "QC-01",
        "processCategory": "IN_HOUSE_INSPECTION",
        "postProcessing": {"unitPrice": 8}
    }
]"#;

fn main() -> anyhow::Result<()> {
    logging::init();

    let config = QuoteConfig::from_json(r#"{"parallelThreshold": 8}"#)?;
    let engine = QuotationEngine::new(config);

    let processes = processes_from_json(PROCESSES).context("製程資料格式錯誤")?;
    let shipping = ShippingCosts::new(
        vec![Freight::new(Decimal::from(100), Decimal::from(5), Decimal::from(1000))],
        Vec::new(),
    );
    let profit_inputs = ProfitInputs {
        sg_rate: Decimal::from(7),
        profit_rate: Decimal::from(5),
        risk_rate: Decimal::from(2),
        annual_reduction_rate: Decimal::from(2),
        rebate_rate: Decimal::from(2),
        actual_quotation: Decimal::from(120),
    };

    let summary = engine.run(&processes, &shipping, &profit_inputs)?;

    println!("=== 報價彙總 ===\n");
    println!(
        "班次秒數 {}，試模單價 {}\n",
        engine.config().shift_seconds,
        engine.config().default_trial_mold_price
    );
    for detail in &summary.cost_details {
        println!(
            "  - {} [{}]: {}",
            detail.id, detail.process_category, detail.cost_subtotal
        );
    }
    for (category, subtotal) in summary.subtotal_by_category()? {
        println!("  類別 {}: {}", category, subtotal);
    }
    println!("\n成本小計: {}", summary.total_cost_subtotal);
    println!("運輸費用: {}", summary.transportation.total_cost);
    println!("含運輸成本: {}", summary.grand_cost()?);
    println!("總成本: {}", summary.profit.total_cost);
    println!("毛利率: {}", summary.profit.gross_profit_margin);

    println!("\n{}", summary_to_json(&summary)?);

    Ok(())
}
