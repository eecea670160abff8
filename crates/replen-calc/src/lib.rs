//! # Replenishment Allocation Engine
//!
//! 核心週分配計算引擎

pub mod engine;
pub mod fulfillment;
pub mod quantization;
pub mod rationing;
pub mod requirement;
pub mod runner;
pub mod summary;

// Re-export 主要類型
pub use engine::AllocationEngine;
pub use runner::{simulate, SimulationRunner};
pub use summary::SimulationSummary;

use replen_core::{InventoryState, Lane, WeekResult};

/// 模擬計算結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    /// 逐週結果（依輸入順序）
    pub weeks: Vec<WeekResult>,

    /// 最後一週的期末庫存
    pub final_inventory: InventoryState,

    /// 警告信息
    pub warnings: Vec<SimulationWarning>,
}

impl SimulationResult {
    /// 創建空的計算結果
    pub fn empty(initial_inventory: InventoryState) -> Self {
        Self {
            weeks: Vec::new(),
            final_inventory: initial_inventory,
            warnings: Vec::new(),
        }
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: SimulationWarning) {
        self.warnings.push(warning);
    }

    /// 依嚴重度篩選警告
    pub fn warnings_with(&self, severity: WarningSeverity) -> impl Iterator<Item = &SimulationWarning> {
        self.warnings.iter().filter(move |w| w.severity == severity)
    }

    /// 彙總 KPI
    pub fn summary(&self) -> SimulationSummary {
        SimulationSummary::from_weeks(&self.weeks)
    }
}

/// 模擬警告
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationWarning {
    pub week: String,
    pub lane: Option<Lane>,
    pub message: String,
    pub severity: WarningSeverity,
}

impl SimulationWarning {
    pub fn new(week: String, lane: Option<Lane>, message: String, severity: WarningSeverity) -> Self {
        Self {
            week,
            lane,
            message,
            severity,
        }
    }

    pub fn info(week: String, lane: Option<Lane>, message: String) -> Self {
        Self::new(week, lane, message, WarningSeverity::Info)
    }

    pub fn warning(week: String, lane: Option<Lane>, message: String) -> Self {
        Self::new(week, lane, message, WarningSeverity::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Info,
    Warning,
}
