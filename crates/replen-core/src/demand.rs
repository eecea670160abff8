//! 週需求模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::lane::{Dc, LaneQuantities};
use crate::{ReplenError, Result};

/// 單週需求記錄
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandRecord {
    /// 週別（序號或標籤）
    pub week: String,

    /// 各通路需求數量
    pub quantities: LaneQuantities,
}

impl DemandRecord {
    /// 創建新的需求記錄
    pub fn new(week: impl Into<String>, quantities: LaneQuantities) -> Self {
        Self {
            week: week.into(),
            quantities,
        }
    }

    /// 依欄位順序建立：North_Regular, North_Diet, South_Regular, South_Diet
    pub fn from_values(
        week: impl Into<String>,
        north_regular: Decimal,
        north_diet: Decimal,
        south_regular: Decimal,
        south_diet: Decimal,
    ) -> Self {
        Self::new(
            week,
            LaneQuantities::new(north_regular, north_diet, south_regular, south_diet),
        )
    }

    /// 驗證需求（不允許負數）
    pub fn validate(&self) -> Result<()> {
        for (lane, quantity) in self.quantities.iter() {
            if quantity < Decimal::ZERO {
                return Err(ReplenError::malformed(
                    self.week.clone(),
                    format!("{} 需求為負數：{}", lane, quantity),
                ));
            }
        }
        Ok(())
    }

    /// 本週總需求
    pub fn total(&self) -> Decimal {
        self.quantities.total()
    }

    /// 單一 DC 的需求
    pub fn dc_total(&self, dc: Dc) -> Decimal {
        self.quantities.dc_total(dc)
    }

    /// 本週是否無任何需求
    pub fn is_empty(&self) -> bool {
        self.total().is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lane::Lane;

    #[test]
    fn test_create_demand() {
        let demand = DemandRecord::from_values(
            "1",
            Decimal::from(40000),
            Decimal::from(10000),
            Decimal::from(30000),
            Decimal::from(10000),
        );

        assert_eq!(demand.week, "1");
        assert_eq!(demand.total(), Decimal::from(90000));
        assert_eq!(demand.dc_total(Dc::North), Decimal::from(50000));
        assert_eq!(demand.quantities.get(Lane::SouthRegular), Decimal::from(30000));
        assert!(!demand.is_empty());
        assert!(demand.validate().is_ok());
    }

    #[test]
    fn test_negative_demand_rejected() {
        let demand = DemandRecord::from_values(
            "W07",
            Decimal::from(100),
            Decimal::from(-5),
            Decimal::ZERO,
            Decimal::ZERO,
        );

        let err = demand.validate().unwrap_err();
        assert_eq!(err.week(), Some("W07"));
        assert!(err.to_string().contains("North_Diet"));
    }

    #[test]
    fn test_zero_demand_is_valid() {
        let demand = DemandRecord::new("0", LaneQuantities::default());

        assert!(demand.validate().is_ok());
        assert!(demand.is_empty());
    }
}
