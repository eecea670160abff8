//! 補貨需求計算

use replen_core::{DemandRecord, InventoryState, LaneQuantities, ReplenError};
use rust_decimal::Decimal;

/// 補貨需求計算器
pub struct RequirementCalculator;

impl RequirementCalculator {
    /// 計算各通路補貨需求
    ///
    /// `required = max(0, 需求 + 安全庫存 - 期初庫存)`，缺少的通路期初庫存視為安全庫存。
    /// 數值溢位時回傳該週的計算錯誤。
    pub fn calculate(
        demand: &DemandRecord,
        inventory: &InventoryState,
        safety_stock: Decimal,
    ) -> replen_core::Result<LaneQuantities> {
        LaneQuantities::try_from_fn(|lane| {
            let on_hand = inventory.level_or(lane, safety_stock);
            demand
                .quantities
                .get(lane)
                .checked_add(safety_stock)
                .and_then(|target| target.checked_sub(on_hand))
                .map(|shortfall| shortfall.max(Decimal::ZERO))
                .ok_or_else(|| {
                    ReplenError::calculation(
                        demand.week.clone(),
                        format!("{} 補貨需求數值溢位", lane),
                    )
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use replen_core::Lane;

    fn demand(nr: u32, nd: u32, sr: u32, sd: u32) -> DemandRecord {
        DemandRecord::from_values(
            "1",
            Decimal::from(nr),
            Decimal::from(nd),
            Decimal::from(sr),
            Decimal::from(sd),
        )
    }

    #[test]
    fn test_requirement_at_safety_stock_equals_demand() {
        let safety_stock = Decimal::from(5000);
        let inventory = InventoryState::at_safety_stock(safety_stock);

        let required = RequirementCalculator::calculate(
            &demand(40000, 10000, 30000, 10000),
            &inventory,
            safety_stock,
        )
        .unwrap();

        assert_eq!(required, demand(40000, 10000, 30000, 10000).quantities);
    }

    #[test]
    fn test_requirement_restores_buffer() {
        let safety_stock = Decimal::from(5000);
        let inventory = InventoryState::at_safety_stock(safety_stock)
            .with_level(Lane::NorthRegular, Decimal::ZERO)
            .with_level(Lane::SouthDiet, Decimal::from(2000));

        let required = RequirementCalculator::calculate(
            &demand(10000, 0, 0, 1000),
            &inventory,
            safety_stock,
        )
        .unwrap();

        // 10000 + 5000 - 0
        assert_eq!(required.north_regular, Decimal::from(15000));
        assert_eq!(required.north_diet, Decimal::ZERO);
        // 1000 + 5000 - 2000
        assert_eq!(required.south_diet, Decimal::from(4000));
    }

    #[test]
    fn test_excess_inventory_gives_zero_requirement() {
        let safety_stock = Decimal::from(5000);
        let inventory = InventoryState::at_safety_stock(safety_stock)
            .with_level(Lane::SouthRegular, Decimal::from(30000));

        let required = RequirementCalculator::calculate(
            &demand(0, 0, 8000, 0),
            &inventory,
            safety_stock,
        )
        .unwrap();

        assert_eq!(required.south_regular, Decimal::ZERO);
    }

    #[test]
    fn test_missing_lane_reads_as_safety_stock() {
        let safety_stock = Decimal::from(5000);
        let inventory = InventoryState::empty();

        let required = RequirementCalculator::calculate(
            &demand(1200, 0, 0, 300),
            &inventory,
            safety_stock,
        )
        .unwrap();

        assert_eq!(required.north_regular, Decimal::from(1200));
        assert_eq!(required.south_diet, Decimal::from(300));
    }

    #[test]
    fn test_overflow_is_calculation_error() {
        let safety_stock = Decimal::from(5000);
        let inventory = InventoryState::at_safety_stock(safety_stock);
        let demand = DemandRecord::from_values(
            "W7",
            Decimal::MAX,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
        );

        let err = RequirementCalculator::calculate(&demand, &inventory, safety_stock).unwrap_err();

        assert!(matches!(err, ReplenError::CalculationError { .. }));
        assert_eq!(err.week(), Some("W7"));
    }
}
