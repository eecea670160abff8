//! 分配結果模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::inventory::InventoryState;
use crate::lane::{Dc, LaneQuantities, Sku};

/// 單週分配引擎輸出
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationOutcome {
    /// 補貨需求量（需求 + 安全庫存 - 期初庫存）
    pub required: LaneQuantities,

    /// 總補貨需求量
    pub total_required: Decimal,

    /// 產能配給後、整車化前的分配量
    pub allocated: LaneQuantities,

    /// 是否觸發產能配給
    pub capacity_constrained: bool,

    /// 實際出貨量
    pub shipments: LaneQuantities,

    /// 期末庫存
    pub ending_inventory: InventoryState,

    /// 已滿足數量（出貨與需求取小）
    pub fulfilled: LaneQuantities,

    /// 缺貨流失量（期初庫存加出貨仍不足需求的部分）
    pub lost_demand: LaneQuantities,

    /// 滿足率（%）；本週無需求時為 None
    pub fulfillment_pct: Option<Decimal>,
}

impl AllocationOutcome {
    /// 本週總出貨（即總生產量）
    pub fn total_shipped(&self) -> Decimal {
        self.shipments.total()
    }
}

/// 單週模擬結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekResult {
    /// 週別
    pub week: String,

    /// 本週需求
    pub demand: LaneQuantities,

    /// 補貨需求量
    pub required: LaneQuantities,

    /// 產能配給後的分配量
    pub allocated: LaneQuantities,

    /// 出貨量
    pub shipments: LaneQuantities,

    /// 期末庫存
    pub ending_inventory: LaneQuantities,

    /// 已滿足數量
    pub fulfilled: LaneQuantities,

    /// 缺貨流失量
    pub lost_demand: LaneQuantities,

    /// 總生產量（出貨合計）
    pub total_production: Decimal,

    /// 總需求
    pub total_demand: Decimal,

    /// 總補貨需求量
    pub total_required: Decimal,

    /// 滿足率（%）；本週無需求時不適用
    pub fulfillment_pct: Option<Decimal>,

    /// 產能利用率（%）
    pub capacity_utilization_pct: Decimal,

    /// North DC 使用車次
    pub trucks_north: Decimal,

    /// South DC 使用車次
    pub trucks_south: Decimal,

    /// 總車次
    pub trucks_total: Decimal,

    /// 是否觸發產能配給
    pub capacity_constrained: bool,
}

impl WeekResult {
    /// 單一 DC 出貨量
    pub fn dc_shipped(&self, dc: Dc) -> Decimal {
        self.shipments.dc_total(dc)
    }

    /// 單一 SKU 生產量
    pub fn sku_produced(&self, sku: Sku) -> Decimal {
        self.shipments.sku_total(sku)
    }

    /// 總已滿足數量
    pub fn total_fulfilled(&self) -> Decimal {
        self.fulfilled.total()
    }

    /// 本週是否有任何通路缺貨
    pub fn has_stockout(&self) -> bool {
        self.lost_demand.total() > Decimal::ZERO
    }
}
