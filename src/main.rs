// ==========================================
// 库存预警系统 - CLI 主入口
// ==========================================
// 流程: 加载 CSV → 分层分析 → 输出报告与汇总统计
// 系统定位: 决策支持系统 (只读分析,不回写任何数据)
// ==========================================

use anyhow::{bail, Context, Result};
use chrono::Local;
use std::env;
use std::path::PathBuf;

use stock_alarm::config::AlarmThresholds;
use stock_alarm::engine::{ReportEngine, StockClassifier};
use stock_alarm::importer::CsvLoader;
use stock_alarm::logging;

fn main() -> Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 决策支持系统", stock_alarm::APP_NAME);
    tracing::info!("系统版本: {}", stock_alarm::VERSION);
    tracing::info!("==================================================");

    // 解析命令行参数: <库存CSV路径> [阈值JSON路径]
    let mut args = env::args().skip(1);
    let data_path = match args.next() {
        Some(path) => PathBuf::from(path),
        None => bail!("用法: stock-alarm <库存CSV路径> [阈值JSON路径]"),
    };
    let thresholds = match args.next() {
        Some(path) => AlarmThresholds::from_json_file(PathBuf::from(path).as_path())?,
        None => AlarmThresholds::default(),
    };
    tracing::info!(ratio = thresholds.healthy_stock_ratio, "预警阈值已就绪");

    // 加载库存记录 (输入协作方)
    let records = CsvLoader::new()
        .load(&data_path)
        .with_context(|| format!("加载库存数据失败: {}", data_path.display()))?;

    // 分层分析 (脏数据 fail-fast,错误定位到具体记录)
    let classifier = StockClassifier::with_thresholds(thresholds);
    let analysis = classifier.analyze(&records).context("库存分层分析失败")?;

    // 生成报告 (时钟由入口注入,引擎不读系统时钟)
    let report_engine = ReportEngine::new();
    let generated_at = Local::now().naive_local();
    println!("{}", report_engine.format_report(&analysis, generated_at));

    // 汇总统计
    let stats = report_engine.summarize(&records, &analysis);
    println!("\nInventory Summary:");
    println!("Total Products: {}", stats.total_products);
    println!("Critical Items: {}", stats.critical_items);
    println!("Warning Items: {}", stats.warning_items);
    println!("Items to Reorder: {}", stats.reorder_items);
    println!("Healthy Items: {}", stats.healthy_items);
    println!("Critical Categories: {}", stats.critical_categories);
    println!("Total Categories: {}", stats.total_categories);

    Ok(())
}
