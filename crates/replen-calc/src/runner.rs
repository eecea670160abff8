//! 逐週模擬執行器

use replen_core::{
    AllocationOutcome, Dc, DemandRecord, InventoryState, Lane, PlantConfig, ReplenError, Sku,
    WeekResult,
};
use rust_decimal::Decimal;

use crate::engine::AllocationEngine;
use crate::{SimulationResult, SimulationWarning};

/// 模擬執行器
///
/// 依序處理每一週，前一週的期末庫存即為下一週的期初庫存。
#[derive(Debug, Clone)]
pub struct SimulationRunner {
    engine: AllocationEngine,
}

impl SimulationRunner {
    /// 創建新的執行器（配置不合法時立即失敗）
    pub fn new(config: PlantConfig) -> replen_core::Result<Self> {
        Ok(Self {
            engine: AllocationEngine::new(config)?,
        })
    }

    /// 從安全庫存水位開始執行整段模擬
    pub fn run(&self, demands: &[DemandRecord]) -> replen_core::Result<SimulationResult> {
        let initial = InventoryState::at_safety_stock(self.config().safety_stock);
        self.run_from(initial, demands)
    }

    /// 從指定期初庫存執行整段模擬
    ///
    /// 任一週資料錯誤即中止整段模擬，不跳過。
    pub fn run_from(
        &self,
        initial_inventory: InventoryState,
        demands: &[DemandRecord],
    ) -> replen_core::Result<SimulationResult> {
        tracing::info!("開始模擬：{} 週，配置 {:?}", demands.len(), self.config());

        let mut result = SimulationResult::empty(initial_inventory);
        result.weeks.reserve(demands.len());

        let mut inventory = result.final_inventory.clone();
        for demand in demands {
            let (week_result, ending) = self.step(demand, &inventory).map_err(|e| {
                tracing::error!("週 {} 模擬失敗: {}", demand.week, e);
                e
            })?;

            for warning in Self::collect_warnings(&week_result, self.config()) {
                result.add_warning(warning);
            }

            result.weeks.push(week_result);
            inventory = ending;
        }
        result.final_inventory = inventory;

        tracing::info!(
            "模擬完成：{} 週，警告 {} 筆",
            result.weeks.len(),
            result.warnings.len()
        );

        Ok(result)
    }

    /// 單週狀態轉移：回傳本週結果與新的庫存狀態
    pub fn step(
        &self,
        demand: &DemandRecord,
        inventory: &InventoryState,
    ) -> replen_core::Result<(WeekResult, InventoryState)> {
        let outcome = self.engine.allocate(demand, inventory)?;
        let week_result = self.build_week_result(demand, &outcome)?;

        tracing::debug!(
            "週 {}: 生產 {}，需求 {}，車次 {}",
            week_result.week,
            week_result.total_production,
            week_result.total_demand,
            week_result.trucks_total
        );

        Ok((week_result, outcome.ending_inventory))
    }

    fn build_week_result(
        &self,
        demand: &DemandRecord,
        outcome: &AllocationOutcome,
    ) -> replen_core::Result<WeekResult> {
        let config = self.config();
        let total_production = outcome.total_shipped();
        let capacity_utilization_pct = Decimal::ONE_HUNDRED
            .checked_mul(total_production)
            .and_then(|scaled| scaled.checked_div(config.plant_capacity))
            .ok_or_else(|| {
                ReplenError::calculation(demand.week.clone(), "產能利用率數值溢位")
            })?;

        let trucks_north = outcome.shipments.dc_total(Dc::North) / config.truck_size;
        let trucks_south = outcome.shipments.dc_total(Dc::South) / config.truck_size;

        Ok(WeekResult {
            week: demand.week.clone(),
            demand: demand.quantities,
            required: outcome.required,
            allocated: outcome.allocated,
            shipments: outcome.shipments,
            ending_inventory: outcome.ending_inventory.to_quantities(config.safety_stock),
            fulfilled: outcome.fulfilled,
            lost_demand: outcome.lost_demand,
            total_production,
            total_demand: demand.total(),
            total_required: outcome.total_required,
            fulfillment_pct: outcome.fulfillment_pct,
            capacity_utilization_pct,
            trucks_north,
            trucks_south,
            trucks_total: trucks_north + trucks_south,
            capacity_constrained: outcome.capacity_constrained,
        })
    }

    fn collect_warnings(week: &WeekResult, config: &PlantConfig) -> Vec<SimulationWarning> {
        let mut warnings = Vec::new();

        if week.capacity_constrained {
            tracing::warn!(
                "週 {} 產能不足：需求 {}，產能 {}",
                week.week,
                week.total_required,
                config.plant_capacity
            );
            warnings.push(SimulationWarning::warning(
                week.week.clone(),
                None,
                format!(
                    "總補貨需求 {} 超過產能 {}，已按比例配給",
                    week.total_required, config.plant_capacity
                ),
            ));
        }

        if week.fulfillment_pct.is_none() {
            warnings.push(SimulationWarning::info(
                week.week.clone(),
                None,
                "本週無需求，滿足率不適用".to_string(),
            ));
        }

        for dc in Dc::ALL {
            let lane = Lane::new(dc, Sku::Diet);
            let diet = week.shipments.get(lane);
            if !(diet % config.sku_multiple).is_zero() {
                warnings.push(SimulationWarning::info(
                    week.week.clone(),
                    Some(lane),
                    format!("{} 出貨 {} 不是 {} 的倍數", lane, diet, config.sku_multiple),
                ));
            }
        }

        for (lane, lost) in week.lost_demand.iter() {
            if lost > Decimal::ZERO {
                warnings.push(SimulationWarning::warning(
                    week.week.clone(),
                    Some(lane),
                    format!("{} 缺貨，流失需求 {}", lane, lost),
                ));
            }
        }

        warnings
    }

    /// 獲取配置引用
    pub fn config(&self) -> &PlantConfig {
        self.engine.config()
    }
}

/// 以指定配置執行整段模擬
pub fn simulate(
    demands: &[DemandRecord],
    config: PlantConfig,
) -> replen_core::Result<SimulationResult> {
    SimulationRunner::new(config)?.run(demands)
}
