//! 配送通路（DC × SKU）定義

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 配送中心
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dc {
    North,
    South,
}

impl Dc {
    pub const ALL: [Dc; 2] = [Dc::North, Dc::South];

    pub fn name(self) -> &'static str {
        match self {
            Dc::North => "North",
            Dc::South => "South",
        }
    }
}

/// 產品品項
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sku {
    Regular,
    Diet,
}

impl Sku {
    pub const ALL: [Sku; 2] = [Sku::Regular, Sku::Diet];

    pub fn name(self) -> &'static str {
        match self {
            Sku::Regular => "Regular",
            Sku::Diet => "Diet",
        }
    }
}

/// 配送通路：一個 DC 與一個 SKU 的組合
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Lane {
    #[serde(rename = "North_Regular")]
    NorthRegular,
    #[serde(rename = "North_Diet")]
    NorthDiet,
    #[serde(rename = "South_Regular")]
    SouthRegular,
    #[serde(rename = "South_Diet")]
    SouthDiet,
}

impl Lane {
    /// 固定順序：North_Regular, North_Diet, South_Regular, South_Diet
    pub const ALL: [Lane; 4] = [
        Lane::NorthRegular,
        Lane::NorthDiet,
        Lane::SouthRegular,
        Lane::SouthDiet,
    ];

    pub fn new(dc: Dc, sku: Sku) -> Self {
        match (dc, sku) {
            (Dc::North, Sku::Regular) => Lane::NorthRegular,
            (Dc::North, Sku::Diet) => Lane::NorthDiet,
            (Dc::South, Sku::Regular) => Lane::SouthRegular,
            (Dc::South, Sku::Diet) => Lane::SouthDiet,
        }
    }

    pub fn dc(self) -> Dc {
        match self {
            Lane::NorthRegular | Lane::NorthDiet => Dc::North,
            Lane::SouthRegular | Lane::SouthDiet => Dc::South,
        }
    }

    pub fn sku(self) -> Sku {
        match self {
            Lane::NorthRegular | Lane::SouthRegular => Sku::Regular,
            Lane::NorthDiet | Lane::SouthDiet => Sku::Diet,
        }
    }

    /// 資料欄位名稱（如 `North_Regular`）
    pub fn column_name(self) -> &'static str {
        match self {
            Lane::NorthRegular => "North_Regular",
            Lane::NorthDiet => "North_Diet",
            Lane::SouthRegular => "South_Regular",
            Lane::SouthDiet => "South_Diet",
        }
    }

    /// 由欄位名稱解析通路
    pub fn from_column_name(name: &str) -> Option<Self> {
        Lane::ALL.into_iter().find(|lane| lane.column_name() == name)
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// 四個通路各自的數量
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneQuantities {
    #[serde(rename = "North_Regular")]
    pub north_regular: Decimal,
    #[serde(rename = "North_Diet")]
    pub north_diet: Decimal,
    #[serde(rename = "South_Regular")]
    pub south_regular: Decimal,
    #[serde(rename = "South_Diet")]
    pub south_diet: Decimal,
}

impl LaneQuantities {
    /// 創建新的通路數量
    pub fn new(
        north_regular: Decimal,
        north_diet: Decimal,
        south_regular: Decimal,
        south_diet: Decimal,
    ) -> Self {
        Self {
            north_regular,
            north_diet,
            south_regular,
            south_diet,
        }
    }

    /// 所有通路皆為同一數量
    pub fn splat(quantity: Decimal) -> Self {
        Self::new(quantity, quantity, quantity, quantity)
    }

    pub fn get(&self, lane: Lane) -> Decimal {
        match lane {
            Lane::NorthRegular => self.north_regular,
            Lane::NorthDiet => self.north_diet,
            Lane::SouthRegular => self.south_regular,
            Lane::SouthDiet => self.south_diet,
        }
    }

    pub fn set(&mut self, lane: Lane, quantity: Decimal) {
        match lane {
            Lane::NorthRegular => self.north_regular = quantity,
            Lane::NorthDiet => self.north_diet = quantity,
            Lane::SouthRegular => self.south_regular = quantity,
            Lane::SouthDiet => self.south_diet = quantity,
        }
    }

    /// 逐通路計算，產生新的數量表
    pub fn from_fn(mut f: impl FnMut(Lane) -> Decimal) -> Self {
        let mut quantities = Self::default();
        for lane in Lane::ALL {
            quantities.set(lane, f(lane));
        }
        quantities
    }

    /// 可能失敗的逐通路計算
    pub fn try_from_fn<E>(mut f: impl FnMut(Lane) -> Result<Decimal, E>) -> Result<Self, E> {
        let mut quantities = Self::default();
        for lane in Lane::ALL {
            quantities.set(lane, f(lane)?);
        }
        Ok(quantities)
    }

    /// 依固定順序迭代 (通路, 數量)
    pub fn iter(&self) -> impl Iterator<Item = (Lane, Decimal)> + '_ {
        Lane::ALL.into_iter().map(move |lane| (lane, self.get(lane)))
    }

    /// 所有通路合計
    pub fn total(&self) -> Decimal {
        self.north_regular + self.north_diet + self.south_regular + self.south_diet
    }

    /// 所有通路合計；溢位時回傳 None
    pub fn try_total(&self) -> Option<Decimal> {
        self.iter()
            .try_fold(Decimal::ZERO, |acc, (_, quantity)| acc.checked_add(quantity))
    }

    /// 單一 DC 合計
    pub fn dc_total(&self, dc: Dc) -> Decimal {
        Sku::ALL.into_iter().map(|sku| self.get(Lane::new(dc, sku))).sum()
    }

    /// 單一 SKU 跨 DC 合計
    pub fn sku_total(&self, sku: Sku) -> Decimal {
        Dc::ALL.into_iter().map(|dc| self.get(Lane::new(dc, sku))).sum()
    }
}
