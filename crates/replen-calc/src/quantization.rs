//! 整車化與 SKU 拆分

use replen_core::{Dc, Lane, LaneQuantities, PlantConfig, Sku};
use rust_decimal::{Decimal, RoundingStrategy};

/// 整車化計算器
pub struct TruckQuantizer;

impl TruckQuantizer {
    /// 將 DC 合計截尾到卡車容量的倍數（不出貨不滿一車的部分）
    pub fn quantize(dc_total: Decimal, truck_size: Decimal) -> Decimal {
        (dc_total / truck_size).floor() * truck_size
    }

    /// 整車化後再拆回 SKU
    ///
    /// 順序固定：先 DC 整車截尾，再依配給後的 SKU 比例拆分。
    pub fn apply(allocated: &LaneQuantities, config: &PlantConfig) -> LaneQuantities {
        let mut shipments = LaneQuantities::default();

        for dc in Dc::ALL {
            let regular_lane = Lane::new(dc, Sku::Regular);
            let diet_lane = Lane::new(dc, Sku::Diet);

            let truck_total = Self::quantize(allocated.dc_total(dc), config.truck_size);
            let (regular, diet) = SkuSplitter::split(
                allocated.get(regular_lane),
                allocated.get(diet_lane),
                truck_total,
                config.sku_multiple,
            );

            tracing::debug!(
                "整車化 {}: 分配 {} → 整車 {} (Regular {}, Diet {})",
                dc.name(),
                allocated.dc_total(dc),
                truck_total,
                regular,
                diet
            );

            shipments.set(regular_lane, regular);
            shipments.set(diet_lane, diet);
        }

        shipments
    }
}

/// SKU 拆分計算器
pub struct SkuSplitter;

impl SkuSplitter {
    /// 將整車合計拆回 Regular / Diet
    ///
    /// Regular 比例取自配給後數量（兩者皆為零時取 0.5），乘上整車合計後
    /// 以銀行家捨入（四捨六入五成雙）對齊 `grid`，Diet 取餘數。
    /// 最後 Regular 再向下對齊 `grid`，Diet 取精確餘數：兩者合計恆等於
    /// `truck_total`，但 Diet 可能不在 `grid` 上。
    pub fn split(
        regular: Decimal,
        diet: Decimal,
        truck_total: Decimal,
        grid: Decimal,
    ) -> (Decimal, Decimal) {
        if truck_total.is_zero() {
            return (Decimal::ZERO, Decimal::ZERO);
        }

        let combined = regular + diet;
        let regular_share = if combined > Decimal::ZERO {
            regular / combined
        } else {
            Decimal::new(5, 1)
        };

        let mut regular_alloc = (regular_share * truck_total / grid)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
            * grid;
        let mut diet_alloc = truck_total - regular_alloc;

        // 捨入溢出修正
        if diet_alloc < Decimal::ZERO {
            diet_alloc = Decimal::ZERO;
            regular_alloc = truck_total;
        }
        if regular_alloc < Decimal::ZERO {
            regular_alloc = Decimal::ZERO;
            diet_alloc = truck_total;
        }

        regular_alloc = (regular_alloc / grid).floor() * grid;
        diet_alloc = truck_total - regular_alloc;

        (regular_alloc, diet_alloc)
    }
}
