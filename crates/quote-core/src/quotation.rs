//! 成本計算結果模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::money::{checked_add, checked_sum};
use crate::{Percent, ProcessCategory};

/// 原料成本結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialCost {
    /// 含不良率的原料總成本
    pub total_cost: Decimal,

    /// 各明細金額（與輸入順序一致）
    pub amounts: Vec<Decimal>,
}

impl MaterialCost {
    /// 空結果
    pub fn empty() -> Self {
        Self::default()
    }
}

/// 包材成本結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagingCost {
    pub total_cost: Decimal,
    pub amounts: Vec<Decimal>,
}

impl PackagingCost {
    /// 空結果
    pub fn empty() -> Self {
        Self::default()
    }
}

/// 運輸附加費用結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportationCost {
    /// 運費小計 + 關稅小計
    pub total_cost: Decimal,

    /// 運費小計
    pub transport_subtotal: Decimal,

    /// 關稅小計
    pub freight_subtotal: Decimal,

    /// 各運費明細金額
    pub transport_amounts: Vec<Decimal>,

    /// 各關稅明細金額
    pub freight_amounts: Vec<Decimal>,
}

impl TransportationCost {
    /// 零值結果
    pub fn zero() -> Self {
        Self::default()
    }
}

/// 製程成本組成
///
/// 未參與該製程類別的項目為 `None`。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<MaterialCost>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub packaging: Option<PackagingCost>,

    /// 每模次分攤成型費
    #[serde(skip_serializing_if = "Option::is_none")]
    pub molding: Option<Decimal>,

    /// 每模次電費
    #[serde(skip_serializing_if = "Option::is_none")]
    pub electricity: Option<Decimal>,

    /// 廠內後製程工資
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_processing: Option<Decimal>,

    /// 委外或檢驗單次費用
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outsourced: Option<Decimal>,
}

impl CostBreakdown {
    /// 各組成項目加總（未修約）
    pub fn component_total(&self) -> crate::Result<Decimal> {
        let material = self.material.as_ref().map(|m| m.total_cost);
        let packaging = self.packaging.as_ref().map(|p| p.total_cost);

        let components = [
            material,
            packaging,
            self.molding,
            self.electricity,
            self.post_processing,
            self.outsourced,
        ]
        .into_iter()
        .flatten();

        checked_sum(components, "製程成本小計")
    }
}

/// 單一製程成本明細
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostDetail {
    pub id: String,
    pub process_category: ProcessCategory,
    pub cost_subtotal: Decimal,
    pub cost_breakdown: CostBreakdown,
}

/// 利潤管理費率
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfitRates {
    /// 管銷研費率
    pub sg: Percent,
    /// 利潤率
    pub profit: Percent,
    /// 風險率
    pub risk: Percent,
    /// 年降率
    pub annual_reduction: Percent,
    /// 回饋率
    pub rebate: Percent,
}

impl ProfitRates {
    pub fn new(
        sg: Percent,
        profit: Percent,
        risk: Percent,
        annual_reduction: Percent,
        rebate: Percent,
    ) -> Self {
        Self {
            sg,
            profit,
            risk,
            annual_reduction,
            rebate,
        }
    }
}

/// 呼叫端提供的利潤管理輸入
///
/// 費率為原始數值：小於 1 視為小數，否則視為整數百分比。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfitInputs {
    pub sg_rate: Decimal,
    pub profit_rate: Decimal,
    pub risk_rate: Decimal,
    pub annual_reduction_rate: Decimal,
    pub rebate_rate: Decimal,

    /// 實際報價
    pub actual_quotation: Decimal,
}

impl ProfitInputs {
    /// 換算為費率
    pub fn rates(&self) -> ProfitRates {
        ProfitRates {
            sg: Percent::normalize(self.sg_rate),
            profit: Percent::normalize(self.profit_rate),
            risk: Percent::normalize(self.risk_rate),
            annual_reduction: Percent::normalize(self.annual_reduction_rate),
            rebate: Percent::normalize(self.rebate_rate),
        }
    }
}

/// 利潤管理結果（各欄位均修約至小數點後三位）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitManagementResult {
    pub cost_subtotal: Decimal,
    pub sg_and_admin_fee: Decimal,
    pub profit_fee: Decimal,
    #[serde(rename = "subtotalWithSGA")]
    pub subtotal_with_sga: Decimal,
    pub risk_fee: Decimal,
    pub total_cost: Decimal,
    pub annual_reduction_amount: Decimal,
    pub rebate_amount: Decimal,
    pub gross_profit_margin: Decimal,
}

/// 報價彙總
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationSummary {
    /// 各製程成本小計加總
    pub total_cost_subtotal: Decimal,

    /// 各製程成本明細（與輸入順序一致）
    pub cost_details: Vec<CostDetail>,

    /// 運輸附加費用
    pub transportation: TransportationCost,

    /// 利潤管理結果
    pub profit: ProfitManagementResult,
}

impl QuotationSummary {
    /// 製程成本加運輸費用
    pub fn grand_cost(&self) -> crate::Result<Decimal> {
        checked_add(
            self.total_cost_subtotal,
            self.transportation.total_cost,
            "報價總成本",
        )
    }

    /// 依製程類別彙總成本小計
    pub fn subtotal_by_category(&self) -> crate::Result<BTreeMap<ProcessCategory, Decimal>> {
        let mut totals = BTreeMap::new();
        for detail in &self.cost_details {
            let total = totals
                .entry(detail.process_category.clone())
                .or_insert(Decimal::ZERO);
            *total = checked_add(*total, detail.cost_subtotal, "類別成本小計")?;
        }
        Ok(totals)
    }
}
