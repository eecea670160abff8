//! 工廠分配配置模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ReplenError, Result};

/// 預設工廠週產能
pub const DEFAULT_PLANT_CAPACITY: u32 = 150_000;

/// 預設卡車容量
pub const DEFAULT_TRUCK_SIZE: u32 = 10_000;

/// 預設安全庫存（每 DC 每 SKU）
pub const DEFAULT_SAFETY_STOCK: u32 = 5_000;

/// 預設 SKU 拆分倍數
pub const DEFAULT_SKU_MULTIPLE: u32 = 1_000;

/// 工廠分配參數配置
///
/// 一次模擬期間不可變。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlantConfig {
    /// 工廠每週產能上限
    pub plant_capacity: Decimal,

    /// 卡車容量（DC 出貨量必須是此倍數）
    pub truck_size: Decimal,

    /// 安全庫存（同時作為期初庫存）
    pub safety_stock: Decimal,

    /// SKU 拆分倍數（Regular 出貨量取此倍數）
    pub sku_multiple: Decimal,
}

impl Default for PlantConfig {
    fn default() -> Self {
        Self {
            plant_capacity: Decimal::from(DEFAULT_PLANT_CAPACITY),
            truck_size: Decimal::from(DEFAULT_TRUCK_SIZE),
            safety_stock: Decimal::from(DEFAULT_SAFETY_STOCK),
            sku_multiple: Decimal::from(DEFAULT_SKU_MULTIPLE),
        }
    }
}

impl PlantConfig {
    /// 創建新的配置
    pub fn new(plant_capacity: Decimal, truck_size: Decimal, safety_stock: Decimal) -> Self {
        Self {
            plant_capacity,
            truck_size,
            safety_stock,
            sku_multiple: Decimal::from(DEFAULT_SKU_MULTIPLE),
        }
    }

    /// 從 JSON 字串載入配置（缺少的欄位使用預設值）
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// 建構器模式：設置產能
    pub fn with_plant_capacity(mut self, capacity: Decimal) -> Self {
        self.plant_capacity = capacity;
        self
    }

    /// 建構器模式：設置卡車容量
    pub fn with_truck_size(mut self, truck_size: Decimal) -> Self {
        self.truck_size = truck_size;
        self
    }

    /// 建構器模式：設置安全庫存
    pub fn with_safety_stock(mut self, stock: Decimal) -> Self {
        self.safety_stock = stock;
        self
    }

    /// 建構器模式：設置 SKU 拆分倍數
    pub fn with_sku_multiple(mut self, multiple: Decimal) -> Self {
        self.sku_multiple = multiple;
        self
    }

    /// 驗證配置
    ///
    /// 必須在處理任何一週之前呼叫。
    pub fn validate(&self) -> Result<()> {
        if self.plant_capacity <= Decimal::ZERO {
            return Err(ReplenError::InvalidConfig(format!(
                "產能必須為正數：{}",
                self.plant_capacity
            )));
        }

        if self.truck_size <= Decimal::ZERO || !self.truck_size.fract().is_zero() {
            return Err(ReplenError::InvalidConfig(format!(
                "卡車容量必須為正整數：{}",
                self.truck_size
            )));
        }

        if self.safety_stock < Decimal::ZERO {
            return Err(ReplenError::InvalidConfig(format!(
                "安全庫存不可為負數：{}",
                self.safety_stock
            )));
        }

        if self.sku_multiple <= Decimal::ZERO || !self.sku_multiple.fract().is_zero() {
            return Err(ReplenError::InvalidConfig(format!(
                "SKU 拆分倍數必須為正整數：{}",
                self.sku_multiple
            )));
        }

        Ok(())
    }
}
