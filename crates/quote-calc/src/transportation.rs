//! 運輸附加費用計算

use quote_core::{
    checked_add, checked_mul, checked_sum, div_or_zero, round3, CustomsDuty, Freight,
    QuoteConfig, TransportationCost,
};
use rust_decimal::Decimal;

/// 來回趟數
const ROUND_TRIP: Decimal = Decimal::TWO;

/// 運輸費用計算器
pub struct TransportationCostCalculator;

impl TransportationCostCalculator {
    /// 計算運費與關稅
    ///
    /// 兩份明細互不影響；皆為空時回傳零值結果。
    pub fn calculate(
        config: &QuoteConfig,
        freights: &[Freight],
        customs_duties: &[CustomsDuty],
    ) -> quote_core::Result<TransportationCost> {
        if freights.is_empty() && customs_duties.is_empty() {
            return Ok(TransportationCost::zero());
        }

        let transport_amounts = freights
            .iter()
            .map(|freight| Self::freight_amount(config, freight))
            .collect::<quote_core::Result<Vec<_>>>()?;
        let freight_amounts = customs_duties
            .iter()
            .map(Self::customs_amount)
            .collect::<quote_core::Result<Vec<_>>>()?;

        let transport_subtotal = checked_sum(transport_amounts.iter().copied(), "運費小計")?;
        let freight_subtotal = checked_sum(freight_amounts.iter().copied(), "關稅小計")?;
        let total_cost = round3(checked_add(transport_subtotal, freight_subtotal, "運輸合計")?);

        tracing::debug!(
            "運輸費用: 運費 {} 筆 {}, 關稅 {} 筆 {}, 合計 {}",
            transport_amounts.len(),
            transport_subtotal,
            freight_amounts.len(),
            freight_subtotal,
            total_cost
        );

        Ok(TransportationCost {
            total_cost,
            transport_subtotal,
            freight_subtotal,
            transport_amounts,
            freight_amounts,
        })
    }

    /// 單筆運費 = 距離 × 2 × 每公里油資 ÷ 預估出貨量 + 司機工時
    ///
    /// 出貨量為 0 時只計司機工時。
    pub fn freight_amount(config: &QuoteConfig, freight: &Freight) -> quote_core::Result<Decimal> {
        let round_trip = checked_mul(freight.delivery_distance, ROUND_TRIP, "運費")?;
        let trip_cost = checked_mul(round_trip, freight.fuel_cost_per_km, "運費")?;
        let per_shipment = div_or_zero(trip_cost, freight.estimated_shipment, "運費分攤")?;

        Ok(round3(checked_add(per_shipment, config.driver_work_hours, "運費")?))
    }

    /// 單筆關稅 = 關稅金額 ÷ 預估出貨量，出貨量為 0 時為 0
    pub fn customs_amount(duty: &CustomsDuty) -> quote_core::Result<Decimal> {
        Ok(round3(div_or_zero(duty.freight, duty.estimated_shipment, "關稅分攤")?))
    }
}
