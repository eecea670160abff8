//! 需求 CSV 讀取
//!
//! 必要欄位：`Week, North_Regular, North_Diet, South_Regular, South_Diet`。
//! 欄位順序不限，多餘欄位忽略。任何一列資料錯誤即整份失敗。

use replen_core::{DemandRecord, Lane, LaneQuantities};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::{IoError, Result};

/// 週別欄位名稱
pub const WEEK_COLUMN: &str = "Week";

/// 從檔案讀取需求
pub fn read_demand_path(path: impl AsRef<Path>) -> Result<Vec<DemandRecord>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let demands = read_demand_csv(file)?;
    tracing::info!("讀取需求 {} 週：{}", demands.len(), path.display());
    Ok(demands)
}

/// 從任意來源讀取需求 CSV
pub fn read_demand_csv<R: Read>(reader: R) -> Result<Vec<DemandRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let week_idx = column_index(&headers, WEEK_COLUMN)?;
    let mut lane_idx = [0usize; 4];
    for (slot, lane) in lane_idx.iter_mut().zip(Lane::ALL) {
        *slot = column_index(&headers, lane.column_name())?;
    }

    let mut demands = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let row = i + 1;

        let week = match record.get(week_idx) {
            Some(week) if !week.is_empty() => week.to_string(),
            _ => {
                return Err(IoError::InvalidField {
                    row,
                    week: String::new(),
                    column: WEEK_COLUMN.to_string(),
                    reason: "缺少週別".to_string(),
                })
            }
        };

        let mut quantities = LaneQuantities::default();
        for (lane, idx) in Lane::ALL.into_iter().zip(lane_idx) {
            let quantity = parse_quantity(record.get(idx)).map_err(|reason| IoError::InvalidField {
                row,
                week: week.clone(),
                column: lane.column_name().to_string(),
                reason,
            })?;
            quantities.set(lane, quantity);
        }

        demands.push(DemandRecord::new(week, quantities));
    }

    tracing::debug!("需求 CSV 解析完成：{} 列", demands.len());
    Ok(demands)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| IoError::MissingColumn(name.to_string()))
}

fn parse_quantity(field: Option<&str>) -> std::result::Result<Decimal, String> {
    let raw = match field {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err("缺少數值".to_string()),
    };

    // 接受科學記號（例如 4e4）
    let quantity = Decimal::from_str(raw)
        .or_else(|e| Decimal::from_scientific(raw).map_err(|_| e))
        .map_err(|e| format!("無法解析數值 '{}': {}", raw, e))?;
    if quantity < Decimal::ZERO {
        return Err(format!("需求不可為負數：{}", quantity));
    }
    Ok(quantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_demand_csv() {
        let data = "\
Week,North_Regular,North_Diet,South_Regular,South_Diet
1,40000,10000,30000,10000
2, 52000 ,8000,35000.0,0
";

        let demands = read_demand_csv(data.as_bytes()).unwrap();

        assert_eq!(demands.len(), 2);
        assert_eq!(demands[0].week, "1");
        assert_eq!(demands[0].total(), Decimal::from(90000));
        assert_eq!(demands[1].quantities.north_regular, Decimal::from(52000));
        assert_eq!(demands[1].quantities.south_regular, Decimal::from(35000));
        assert_eq!(demands[1].quantities.south_diet, Decimal::ZERO);
    }

    #[test]
    fn test_column_order_and_extra_columns() {
        let data = "\
South_Diet,Notes,Week,South_Regular,North_Diet,North_Regular
4,promo,W01,3,2,1
";

        let demands = read_demand_csv(data.as_bytes()).unwrap();

        assert_eq!(demands[0].week, "W01");
        assert_eq!(
            demands[0].quantities,
            LaneQuantities::new(
                Decimal::from(1),
                Decimal::from(2),
                Decimal::from(3),
                Decimal::from(4)
            )
        );
    }

    #[test]
    fn test_missing_column() {
        let data = "Week,North_Regular,North_Diet,South_Regular\n1,1,1,1\n";

        let err = read_demand_csv(data.as_bytes()).unwrap_err();

        assert!(matches!(err, IoError::MissingColumn(ref c) if c == "South_Diet"));
    }

    #[test]
    fn test_non_numeric_value_names_week() {
        let data = "\
Week,North_Regular,North_Diet,South_Regular,South_Diet
1,100,100,100,100
2,100,abc,100,100
";

        let err = read_demand_csv(data.as_bytes()).unwrap_err();

        match err {
            IoError::InvalidField { row, week, column, .. } => {
                assert_eq!(row, 2);
                assert_eq!(week, "2");
                assert_eq!(column, "North_Diet");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_cell_is_not_zero() {
        let data = "\
Week,North_Regular,North_Diet,South_Regular,South_Diet
1,100,,100,100
";

        assert!(matches!(
            read_demand_csv(data.as_bytes()),
            Err(IoError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_short_row_is_rejected() {
        let data = "\
Week,North_Regular,North_Diet,South_Regular,South_Diet
1,100,100
";

        assert!(matches!(
            read_demand_csv(data.as_bytes()),
            Err(IoError::InvalidField { ref column, .. }) if column == "South_Regular"
        ));
    }

    #[test]
    fn test_scientific_notation_accepted() {
        let data = "\
Week,North_Regular,North_Diet,South_Regular,South_Diet
1,4e4,1.5E3,0,2.5e2
";

        let demands = read_demand_csv(data.as_bytes()).unwrap();

        assert_eq!(
            demands[0].quantities,
            LaneQuantities::new(
                Decimal::from(40000),
                Decimal::from(1500),
                Decimal::ZERO,
                Decimal::from(250)
            )
        );
    }

    #[test]
    fn test_negative_scientific_value_rejected() {
        let data = "\
Week,North_Regular,North_Diet,South_Regular,South_Diet
1,100,-1e3,100,100
";

        assert!(matches!(
            read_demand_csv(data.as_bytes()),
            Err(IoError::InvalidField { ref column, .. }) if column == "North_Diet"
        ));
    }

    #[test]
    fn test_negative_value_rejected() {
        let data = "\
Week,North_Regular,North_Diet,South_Regular,South_Diet
1,100,100,-5,100
";

        assert!(matches!(
            read_demand_csv(data.as_bytes()),
            Err(IoError::InvalidField { ref column, .. }) if column == "South_Regular"
        ));
    }
}
