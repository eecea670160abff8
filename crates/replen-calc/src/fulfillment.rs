//! 庫存推移與需求滿足計算

use replen_core::{InventoryState, LaneQuantities, ReplenError};
use rust_decimal::Decimal;

/// 百分比基數
const PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// 庫存推移計算器
pub struct InventoryRoller;

impl InventoryRoller {
    /// 期末庫存 = max(0, 期初 + 出貨 - 需求)，回傳新的庫存狀態
    pub fn roll(
        starting: &InventoryState,
        shipments: &LaneQuantities,
        demand: &LaneQuantities,
        safety_stock: Decimal,
    ) -> InventoryState {
        let ending = LaneQuantities::from_fn(|lane| {
            let level = starting.level_or(lane, safety_stock) + shipments.get(lane) - demand.get(lane);
            level.max(Decimal::ZERO)
        });
        InventoryState::from_quantities(&ending)
    }

    /// 期初加出貨仍不足需求的流失量
    pub fn lost_demand(
        starting: &InventoryState,
        shipments: &LaneQuantities,
        demand: &LaneQuantities,
        safety_stock: Decimal,
    ) -> LaneQuantities {
        LaneQuantities::from_fn(|lane| {
            let available = starting.level_or(lane, safety_stock) + shipments.get(lane);
            (demand.get(lane) - available).max(Decimal::ZERO)
        })
    }
}

/// 需求滿足計算器
pub struct FulfillmentCalculator;

impl FulfillmentCalculator {
    /// 各通路已滿足數量 = min(需求, 出貨)
    pub fn fulfilled(demand: &LaneQuantities, shipments: &LaneQuantities) -> LaneQuantities {
        LaneQuantities::from_fn(|lane| demand.get(lane).min(shipments.get(lane)))
    }

    /// 滿足率（%）
    ///
    /// 總需求為零時不適用，回傳 None。
    pub fn percentage(
        week: &str,
        fulfilled: &LaneQuantities,
        demand: &LaneQuantities,
    ) -> replen_core::Result<Option<Decimal>> {
        let overflow = || ReplenError::calculation(week, "滿足率數值溢位");

        let total_demand = demand.try_total().ok_or_else(overflow)?;
        if total_demand.is_zero() {
            return Ok(None);
        }

        let pct = fulfilled
            .try_total()
            .and_then(|total| PERCENT.checked_mul(total))
            .and_then(|scaled| scaled.checked_div(total_demand))
            .ok_or_else(overflow)?;
        Ok(Some(pct))
    }
}
