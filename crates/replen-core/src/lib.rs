//! # Replenishment Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod demand;
pub mod inventory;
pub mod lane;
pub mod result;

// Re-export 主要類型
pub use config::PlantConfig;
pub use demand::DemandRecord;
pub use inventory::InventoryState;
pub use lane::{Dc, Lane, LaneQuantities, Sku};
pub use result::{AllocationOutcome, WeekResult};

/// 補貨分配錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ReplenError {
    #[error("無效的配置: {0}")]
    InvalidConfig(String),

    #[error("需求資料格式錯誤（週 {week}）: {reason}")]
    MalformedDemand { week: String, reason: String },

    #[error("配置解析錯誤: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("計算錯誤（週 {week}）: {reason}")]
    CalculationError { week: String, reason: String },
}

impl ReplenError {
    /// 建立需求格式錯誤
    pub fn malformed(week: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedDemand {
            week: week.into(),
            reason: reason.into(),
        }
    }

    /// 建立計算錯誤
    pub fn calculation(week: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::CalculationError {
            week: week.into(),
            reason: reason.into(),
        }
    }

    /// 出錯的週別（如果適用）
    pub fn week(&self) -> Option<&str> {
        match self {
            Self::MalformedDemand { week, .. } | Self::CalculationError { week, .. } => {
                Some(week.as_str())
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReplenError>;
