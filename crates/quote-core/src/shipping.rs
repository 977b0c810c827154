//! 運輸與關稅模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 運費明細
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Freight {
    /// 運送距離（公里）
    pub delivery_distance: Decimal,

    /// 每公里油資
    #[serde(rename = "fuelCostPerKM")]
    pub fuel_cost_per_km: Decimal,

    /// 預估出貨量
    pub estimated_shipment: Decimal,
}

impl Freight {
    pub fn new(
        delivery_distance: Decimal,
        fuel_cost_per_km: Decimal,
        estimated_shipment: Decimal,
    ) -> Self {
        Self {
            delivery_distance,
            fuel_cost_per_km,
            estimated_shipment,
        }
    }
}

/// 關稅明細
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomsDuty {
    /// 運費/關稅金額
    pub freight: Decimal,

    /// 預估出貨量
    pub estimated_shipment: Decimal,
}

impl CustomsDuty {
    pub fn new(freight: Decimal, estimated_shipment: Decimal) -> Self {
        Self {
            freight,
            estimated_shipment,
        }
    }
}

/// 報價單的運輸資料
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingCosts {
    pub freights: Vec<Freight>,
    pub customs_duties: Vec<CustomsDuty>,
}

impl ShippingCosts {
    pub fn new(freights: Vec<Freight>, customs_duties: Vec<CustomsDuty>) -> Self {
        Self {
            freights,
            customs_duties,
        }
    }

    /// 沒有任何運輸資料
    pub fn is_empty(&self) -> bool {
        self.freights.is_empty() && self.customs_duties.is_empty()
    }
}
