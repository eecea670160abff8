//! 模擬 KPI 彙總

use replen_core::{Dc, Sku, WeekResult};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// 模擬 KPI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationSummary {
    /// 週數
    pub weeks: usize,

    /// 平均滿足率（%），各週先四捨六入至 2 位小數再平均，只計入有需求的週；全無需求時為 None
    pub avg_fulfillment_pct: Option<Decimal>,

    /// 總車次
    pub total_trucks: Decimal,

    /// 平均產能利用率（%）
    pub avg_capacity_utilization_pct: Decimal,

    /// 總生產量
    pub total_production: Decimal,

    /// 總需求
    pub total_demand: Decimal,

    /// Regular 總生產量
    pub regular_production: Decimal,

    /// Diet 總生產量
    pub diet_production: Decimal,

    /// North DC 總出貨
    pub north_shipped: Decimal,

    /// South DC 總出貨
    pub south_shipped: Decimal,

    /// 觸發產能配給的週數
    pub constrained_weeks: usize,

    /// 發生缺貨的週數
    pub stockout_weeks: usize,
}

impl SimulationSummary {
    /// 由逐週結果彙總
    pub fn from_weeks(weeks: &[WeekResult]) -> Self {
        let fulfillment: Vec<Decimal> = weeks
            .iter()
            .filter_map(|w| w.fulfillment_pct)
            .map(|pct| pct.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven))
            .collect();

        Self {
            weeks: weeks.len(),
            avg_fulfillment_pct: mean(&fulfillment),
            total_trucks: weeks.iter().map(|w| w.trucks_total).sum(),
            avg_capacity_utilization_pct: mean(
                &weeks
                    .iter()
                    .map(|w| w.capacity_utilization_pct)
                    .collect::<Vec<_>>(),
            )
            .unwrap_or(Decimal::ZERO),
            total_production: weeks.iter().map(|w| w.total_production).sum(),
            total_demand: weeks.iter().map(|w| w.total_demand).sum(),
            regular_production: weeks.iter().map(|w| w.sku_produced(Sku::Regular)).sum(),
            diet_production: weeks.iter().map(|w| w.sku_produced(Sku::Diet)).sum(),
            north_shipped: weeks.iter().map(|w| w.dc_shipped(Dc::North)).sum(),
            south_shipped: weeks.iter().map(|w| w.dc_shipped(Dc::South)).sum(),
            constrained_weeks: weeks.iter().filter(|w| w.capacity_constrained).count(),
            stockout_weeks: weeks.iter().filter(|w| w.has_stockout()).count(),
        }
    }
}

fn mean(values: &[Decimal]) -> Option<Decimal> {
    if values.is_empty() {
        return None;
    }
    let total: Decimal = values.iter().copied().sum();
    Some(total / Decimal::from(values.len()))
}
