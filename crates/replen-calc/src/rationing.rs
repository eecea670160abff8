//! 產能配給

use replen_core::{LaneQuantities, ReplenError};
use rust_decimal::Decimal;

/// 產能配給結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rationing {
    /// 配給後的分配量
    pub allocated: LaneQuantities,
    /// 總補貨需求量
    pub total_required: Decimal,
    /// 是否超過產能而按比例縮減
    pub constrained: bool,
}

/// 產能配給計算器
pub struct CapacityRationer;

impl CapacityRationer {
    /// 在產能上限下分配補貨需求
    ///
    /// 總需求不超過產能時原樣分配（不重新分配剩餘產能）；
    /// 超過時每個通路按 `required * capacity / total_required` 截尾取整。
    pub fn ration(
        week: &str,
        required: &LaneQuantities,
        plant_capacity: Decimal,
    ) -> replen_core::Result<Rationing> {
        let total_required = required
            .try_total()
            .ok_or_else(|| ReplenError::calculation(week, "總補貨需求數值溢位"))?;

        if total_required <= plant_capacity {
            return Ok(Rationing {
                allocated: *required,
                total_required,
                constrained: false,
            });
        }

        let allocated = LaneQuantities::try_from_fn(|lane| {
            required
                .get(lane)
                .checked_mul(plant_capacity)
                .and_then(|scaled| scaled.checked_div(total_required))
                .map(|share| share.trunc())
                .ok_or_else(|| {
                    ReplenError::calculation(week, format!("{} 產能配給數值溢位", lane))
                })
        })?;

        Ok(Rationing {
            allocated,
            total_required,
            constrained: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_capacity_unchanged() {
        let required = LaneQuantities::new(
            Decimal::from(40000),
            Decimal::from(10000),
            Decimal::from(30000),
            Decimal::from(10000),
        );

        let rationing = CapacityRationer::ration("1", &required, Decimal::from(150000)).unwrap();

        assert!(!rationing.constrained);
        assert_eq!(rationing.allocated, required);
        assert_eq!(rationing.total_required, Decimal::from(90000));
    }

    #[test]
    fn test_exactly_at_capacity_unchanged() {
        let required = LaneQuantities::splat(Decimal::from(37500));

        let rationing = CapacityRationer::ration("1", &required, Decimal::from(150000)).unwrap();

        assert!(!rationing.constrained);
        assert_eq!(rationing.allocated, required);
    }

    #[test]
    fn test_over_capacity_scaled_proportionally() {
        let required = LaneQuantities::splat(Decimal::from(50000));

        let rationing = CapacityRationer::ration("1", &required, Decimal::from(150000)).unwrap();

        // 150000 / 200000 = 0.75
        assert!(rationing.constrained);
        assert_eq!(rationing.total_required, Decimal::from(200000));
        assert_eq!(rationing.allocated, LaneQuantities::splat(Decimal::from(37500)));
    }

    #[test]
    fn test_scaling_truncates() {
        let required = LaneQuantities::new(
            Decimal::from(10001),
            Decimal::from(10001),
            Decimal::from(10001),
            Decimal::ZERO,
        );

        let rationing = CapacityRationer::ration("1", &required, Decimal::from(10000)).unwrap();

        // 10001 * 10000 / 30003 = 3333.33... -> 3333
        assert_eq!(rationing.allocated.north_regular, Decimal::from(3333));
        assert_eq!(rationing.allocated.south_diet, Decimal::ZERO);
        assert!(rationing.allocated.total() <= Decimal::from(10000));
    }

    #[test]
    fn test_total_overflow_is_calculation_error() {
        let required = LaneQuantities::splat(Decimal::MAX / Decimal::TWO);

        let err = CapacityRationer::ration("W3", &required, Decimal::from(150000)).unwrap_err();

        assert!(matches!(err, ReplenError::CalculationError { .. }));
        assert_eq!(err.week(), Some("W3"));
    }
}
