//! # Replen
//!
//! 單一工廠對雙 DC、雙 SKU 的週補貨分配模擬

pub use replen_calc::{
    simulate, AllocationEngine, SimulationResult, SimulationRunner, SimulationSummary,
    SimulationWarning, WarningSeverity,
};
pub use replen_core::{
    AllocationOutcome, Dc, DemandRecord, InventoryState, Lane, LaneQuantities, PlantConfig,
    ReplenError, Sku, WeekResult,
};
pub use replen_io::IoError;

pub mod io {
    pub use replen_io::demand::{read_demand_csv, read_demand_path};
    pub use replen_io::report::{write_inventory_csv, write_results_csv, write_summary_json};
}
