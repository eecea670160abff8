//! 模擬結果匯出

use replen_calc::SimulationSummary;
use replen_core::{LaneQuantities, WeekResult};
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

use crate::Result;

/// 結果 CSV 的單列
#[derive(Debug, Serialize)]
struct ResultRow<'a> {
    #[serde(rename = "Week")]
    week: &'a str,
    #[serde(rename = "North_Regular")]
    north_regular: Decimal,
    #[serde(rename = "North_Diet")]
    north_diet: Decimal,
    #[serde(rename = "South_Regular")]
    south_regular: Decimal,
    #[serde(rename = "South_Diet")]
    south_diet: Decimal,
    #[serde(rename = "Total_Production")]
    total_production: Decimal,
    #[serde(rename = "Total_Demand")]
    total_demand: Decimal,
    #[serde(rename = "Fulfillment %")]
    fulfillment_pct: Option<Decimal>,
    #[serde(rename = "Capacity_Utilization")]
    capacity_utilization: Decimal,
    #[serde(rename = "Trucks_Used")]
    trucks_used: Decimal,
}

impl<'a> From<&'a WeekResult> for ResultRow<'a> {
    fn from(week: &'a WeekResult) -> Self {
        let shipments = &week.shipments;
        Self {
            week: &week.week,
            north_regular: shipments.north_regular.normalize(),
            north_diet: shipments.north_diet.normalize(),
            south_regular: shipments.south_regular.normalize(),
            south_diet: shipments.south_diet.normalize(),
            total_production: week.total_production.normalize(),
            total_demand: week.total_demand.normalize(),
            fulfillment_pct: week.fulfillment_pct.map(|pct| pct.round_dp(2).normalize()),
            capacity_utilization: week.capacity_utilization_pct.round_dp(4).normalize(),
            trucks_used: week.trucks_total.round_dp(4).normalize(),
        }
    }
}

/// 庫存 CSV 的單列
#[derive(Debug, Serialize)]
struct InventoryRow<'a> {
    #[serde(rename = "Week")]
    week: &'a str,
    #[serde(rename = "North_Regular")]
    north_regular: Decimal,
    #[serde(rename = "North_Diet")]
    north_diet: Decimal,
    #[serde(rename = "South_Regular")]
    south_regular: Decimal,
    #[serde(rename = "South_Diet")]
    south_diet: Decimal,
}

impl<'a> InventoryRow<'a> {
    fn new(week: &'a str, levels: &LaneQuantities) -> Self {
        Self {
            week,
            north_regular: levels.north_regular.normalize(),
            north_diet: levels.north_diet.normalize(),
            south_regular: levels.south_regular.normalize(),
            south_diet: levels.south_diet.normalize(),
        }
    }
}

/// 匯出逐週結果 CSV
///
/// 滿足率取到小數兩位；不適用的週留空。
pub fn write_results_csv<W: Write>(writer: W, weeks: &[WeekResult]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for week in weeks {
        wtr.serialize(ResultRow::from(week))?;
    }
    wtr.flush()?;

    tracing::info!("匯出結果 {} 列", weeks.len());
    Ok(())
}

/// 匯出逐週期末庫存 CSV
pub fn write_inventory_csv<W: Write>(writer: W, weeks: &[WeekResult]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for week in weeks {
        wtr.serialize(InventoryRow::new(&week.week, &week.ending_inventory))?;
    }
    wtr.flush()?;

    tracing::info!("匯出期末庫存 {} 列", weeks.len());
    Ok(())
}

/// 匯出 KPI 彙總 JSON
pub fn write_summary_json<W: Write>(writer: W, summary: &SimulationSummary) -> Result<()> {
    serde_json::to_writer_pretty(writer, summary)?;
    Ok(())
}
