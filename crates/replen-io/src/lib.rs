//! # Replenishment I/O
//!
//! 需求資料讀取與模擬結果匯出

pub mod demand;
pub mod report;

// Re-export 主要函式
pub use demand::{read_demand_csv, read_demand_path};
pub use report::{write_inventory_csv, write_results_csv, write_summary_json};

/// I/O 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("找不到必要欄位: {0}")]
    MissingColumn(String),

    #[error("第 {row} 列（週 {week}）欄位 {column} 格式錯誤: {reason}")]
    InvalidField {
        row: usize,
        week: String,
        column: String,
        reason: String,
    },

    #[error("CSV 錯誤: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON 錯誤: {0}")]
    Json(#[from] serde_json::Error),

    #[error("檔案錯誤: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IoError>;
