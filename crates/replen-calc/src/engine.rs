//! 單週分配引擎

use replen_core::{AllocationOutcome, DemandRecord, InventoryState, PlantConfig};

use crate::fulfillment::{FulfillmentCalculator, InventoryRoller};
use crate::quantization::TruckQuantizer;
use crate::rationing::CapacityRationer;
use crate::requirement::RequirementCalculator;

/// 單週分配引擎
///
/// 不持有庫存狀態：期初庫存傳入，期末庫存以新值傳出。
#[derive(Debug, Clone)]
pub struct AllocationEngine {
    config: PlantConfig,
}

impl AllocationEngine {
    /// 創建新的分配引擎（先驗證配置）
    pub fn new(config: PlantConfig) -> replen_core::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// 執行單週分配
    pub fn allocate(
        &self,
        demand: &DemandRecord,
        starting_inventory: &InventoryState,
    ) -> replen_core::Result<AllocationOutcome> {
        demand.validate()?;

        let config = &self.config;
        let week = demand.week.as_str();

        // Step 1: 補貨需求
        let required =
            RequirementCalculator::calculate(demand, starting_inventory, config.safety_stock)?;
        tracing::debug!("週 {} 補貨需求: {:?}", week, required);

        // Step 2: 產能配給
        let rationing = CapacityRationer::ration(week, &required, config.plant_capacity)?;
        if rationing.constrained {
            tracing::debug!(
                "週 {} 總需求 {} 超過產能 {}，按比例配給",
                week,
                rationing.total_required,
                config.plant_capacity
            );
        }

        // Step 3 + 4: DC 整車化，再拆回 SKU
        let shipments = TruckQuantizer::apply(&rationing.allocated, config);

        // Step 5: 庫存推移
        let ending_inventory = InventoryRoller::roll(
            starting_inventory,
            &shipments,
            &demand.quantities,
            config.safety_stock,
        );
        let lost_demand = InventoryRoller::lost_demand(
            starting_inventory,
            &shipments,
            &demand.quantities,
            config.safety_stock,
        );

        // Step 6: 需求滿足
        let fulfilled = FulfillmentCalculator::fulfilled(&demand.quantities, &shipments);
        let fulfillment_pct =
            FulfillmentCalculator::percentage(week, &fulfilled, &demand.quantities)?;

        Ok(AllocationOutcome {
            required,
            total_required: rationing.total_required,
            allocated: rationing.allocated,
            capacity_constrained: rationing.constrained,
            shipments,
            ending_inventory,
            fulfilled,
            lost_demand,
            fulfillment_pct,
        })
    }

    /// 獲取配置引用
    pub fn config(&self) -> &PlantConfig {
        &self.config
    }
}
