//! 庫存狀態模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::lane::{Lane, LaneQuantities};

/// 各通路期末庫存
///
/// 狀態轉移一律回傳新值，不就地修改。缺少的通路視為安全庫存水位。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryState {
    on_hand: BTreeMap<Lane, Decimal>,
}

impl InventoryState {
    /// 創建空的庫存狀態（所有通路皆缺）
    pub fn empty() -> Self {
        Self::default()
    }

    /// 期初庫存：所有通路皆為安全庫存
    pub fn at_safety_stock(safety_stock: Decimal) -> Self {
        Self::from_quantities(&LaneQuantities::splat(safety_stock))
    }

    /// 由通路數量表建立
    pub fn from_quantities(quantities: &LaneQuantities) -> Self {
        Self {
            on_hand: quantities.iter().collect(),
        }
    }

    /// 建構器模式：設置單一通路庫存（低於零時取零）
    pub fn with_level(mut self, lane: Lane, quantity: Decimal) -> Self {
        self.on_hand.insert(lane, quantity.max(Decimal::ZERO));
        self
    }

    /// 取得通路庫存（缺少時回傳 None）
    pub fn get(&self, lane: Lane) -> Option<Decimal> {
        self.on_hand.get(&lane).copied()
    }

    /// 取得通路庫存，缺少時以 `fallback` 代替
    pub fn level_or(&self, lane: Lane, fallback: Decimal) -> Decimal {
        self.get(lane).unwrap_or(fallback)
    }

    /// 以安全庫存補齊缺少的通路，轉為數量表
    pub fn to_quantities(&self, safety_stock: Decimal) -> LaneQuantities {
        LaneQuantities::from_fn(|lane| self.level_or(lane, safety_stock))
    }

    /// 檢查通路庫存是否低於安全庫存
    pub fn is_below_safety_stock(&self, lane: Lane, safety_stock: Decimal) -> bool {
        self.level_or(lane, safety_stock) < safety_stock
    }

    /// 所有已記錄通路的庫存合計
    pub fn total(&self) -> Decimal {
        self.on_hand.values().copied().sum()
    }
}
