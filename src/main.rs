//! 週補貨分配模擬命令列工具

use anyhow::{Context, Result};
use clap::Parser;
use replen::{PlantConfig, SimulationRunner, WarningSeverity};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::EnvFilter;

/// replen: 單一工廠對 North / South 兩個 DC 的週補貨分配模擬。
///
/// 讀取週需求 CSV（Week, North_Regular, North_Diet, South_Regular, South_Diet），
/// 在產能與整車限制下逐週分配出貨並推移庫存。
#[derive(Debug, Parser)]
#[clap(name = "replen", version)]
struct CliOpts {
    /// 週需求 CSV 檔案
    #[clap(long)]
    demand: PathBuf,

    /// JSON 配置檔（個別參數會覆蓋檔案內容）
    #[clap(long)]
    config: Option<PathBuf>,

    /// 工廠每週產能（預設 150000）
    #[clap(long)]
    plant_capacity: Option<Decimal>,

    /// 卡車容量（預設 10000）
    #[clap(long)]
    truck_size: Option<Decimal>,

    /// 每 DC 每 SKU 安全庫存（預設 5000）
    #[clap(long)]
    safety_stock: Option<Decimal>,

    /// SKU 拆分倍數（預設 1000）
    #[clap(long)]
    sku_multiple: Option<Decimal>,

    /// 逐週結果 CSV 輸出路徑
    #[clap(long)]
    output: Option<PathBuf>,

    /// 逐週期末庫存 CSV 輸出路徑
    #[clap(long)]
    inventory_output: Option<PathBuf>,

    /// KPI 彙總 JSON 輸出路徑
    #[clap(long)]
    summary_output: Option<PathBuf>,

    /// 日誌等級，接受 EnvFilter 語法，例如 "info" 或 "replen_calc=debug"
    #[clap(long, default_value = "info")]
    log_level: String,
}

impl CliOpts {
    fn plant_config(&self) -> Result<PlantConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("無法讀取配置檔 {}", path.display()))?;
                PlantConfig::from_json(&json)
                    .with_context(|| format!("配置檔格式錯誤 {}", path.display()))?
            }
            None => PlantConfig::default(),
        };

        if let Some(capacity) = self.plant_capacity {
            config = config.with_plant_capacity(capacity);
        }
        if let Some(truck_size) = self.truck_size {
            config = config.with_truck_size(truck_size);
        }
        if let Some(safety_stock) = self.safety_stock {
            config = config.with_safety_stock(safety_stock);
        }
        if let Some(multiple) = self.sku_multiple {
            config = config.with_sku_multiple(multiple);
        }

        Ok(config)
    }
}

fn init_logging(log_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| match EnvFilter::try_new(log_level) {
            Ok(filter) => Ok(filter),
            Err(e) => {
                eprintln!(
                    "invalid log level: {}, using info, err is: {}",
                    log_level, e
                );
                EnvFilter::try_new("info")
            }
        })
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("failed to init logger: {}", e);
    }
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).with_context(|| format!("無法建立檔案 {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn fmt_pct(value: Option<Decimal>) -> String {
    match value {
        Some(pct) => format!("{:.1}%", pct),
        None => "N/A".to_string(),
    }
}

fn main() -> Result<()> {
    let opts = CliOpts::parse();
    init_logging(&opts.log_level);

    let config = opts.plant_config()?;
    let runner = SimulationRunner::new(config).context("配置驗證失敗")?;

    let demands = replen::io::read_demand_path(&opts.demand)
        .with_context(|| format!("無法讀取需求檔 {}", opts.demand.display()))?;

    let result = runner.run(&demands).context("模擬中止")?;
    let summary = result.summary();

    for warning in result.warnings_with(WarningSeverity::Warning) {
        tracing::warn!("週 {}: {}", warning.week, warning.message);
    }

    println!("=== 關鍵績效指標 ===");
    println!("週數: {}", summary.weeks);
    println!("平均滿足率: {}", fmt_pct(summary.avg_fulfillment_pct));
    println!("總車次: {:.0}", summary.total_trucks);
    println!(
        "平均產能利用率: {}",
        fmt_pct(Some(summary.avg_capacity_utilization_pct))
    );
    println!(
        "總生產量: {} (Regular {}, Diet {})",
        summary.total_production, summary.regular_production, summary.diet_production
    );
    println!(
        "出貨: North {}, South {}",
        summary.north_shipped, summary.south_shipped
    );
    println!(
        "產能不足週數: {}，缺貨週數: {}",
        summary.constrained_weeks, summary.stockout_weeks
    );

    if let Some(path) = &opts.output {
        replen::io::write_results_csv(create(path)?, &result.weeks)?;
        println!("結果已寫入 {}", path.display());
    }
    if let Some(path) = &opts.inventory_output {
        replen::io::write_inventory_csv(create(path)?, &result.weeks)?;
        println!("期末庫存已寫入 {}", path.display());
    }
    if let Some(path) = &opts.summary_output {
        replen::io::write_summary_json(create(path)?, &summary)?;
        println!("KPI 彙總已寫入 {}", path.display());
    }

    Ok(())
}
