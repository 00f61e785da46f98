// ==========================================
// 库存预警系统 - 状态报告引擎
// ==========================================
// 职责: 由分层结果派生文本报告与汇总统计
// 输入: StockAnalysis + 记录序列 + 外部注入的时间戳
// 输出: 报告文本 / InventoryStats
// 红线: 引擎不读系统时钟,generated_at 由调用方注入 (可测性)
// ==========================================

use crate::domain::item::{InventoryStats, ItemRecord, ItemStatus};
use crate::domain::types::StockTier;
use crate::engine::classifier::StockAnalysis;
use chrono::NaiveDateTime;
use std::collections::HashSet;
use tracing::debug;

// ===== 报告固定文案 =====
const CRITICAL_TITLE: &str = "CRITICAL - IMMEDIATE ACTION REQUIRED!";
const CRITICAL_RULE: &str = "===================================";
const WARNING_TITLE: &str = "WARNING - Order Soon";
const WARNING_RULE: &str = "===================";
const REORDER_TITLE: &str = "Consider Reordering";
const REORDER_RULE: &str = "===================";
const STOCK_OUT_LINE: &str = "  ⚠️ STOCK OUT RISK - Order Immediately!";

// ==========================================
// ReportEngine - 状态报告引擎
// ==========================================
pub struct ReportEngine {
    // 无状态引擎,纯派生计算
}

impl ReportEngine {
    /// 创建新的状态报告引擎
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 生成状态报告文本
    ///
    /// # 参数
    /// - `analysis`: 分层结果
    /// - `generated_at`: 报告时间戳 (调用方注入,格式化为 YYYY-MM-DD HH:MM)
    ///
    /// # 返回
    /// 报告文本: 标题行 + 按固定顺序的三个分区 (空分区不输出),
    /// 分区内商品块保持列表顺序,块间以空行分隔
    pub fn format_report(&self, analysis: &StockAnalysis, generated_at: NaiveDateTime) -> String {
        let mut report = String::new();

        // 1. 标题行
        report.push_str(&format!(
            "Stock Status Report - {}\n\n",
            generated_at.format("%Y-%m-%d %H:%M")
        ));

        // 2. 三个分区,固定顺序,仅非空时输出
        if !analysis.critical.is_empty() {
            report.push_str(CRITICAL_TITLE);
            report.push('\n');
            report.push_str(CRITICAL_RULE);
            report.push('\n');
            for status in &analysis.critical {
                self.push_item_block(&mut report, status, StockTier::Critical);
            }
        }

        if !analysis.warning.is_empty() {
            report.push('\n');
            report.push_str(WARNING_TITLE);
            report.push('\n');
            report.push_str(WARNING_RULE);
            report.push('\n');
            for status in &analysis.warning {
                self.push_item_block(&mut report, status, StockTier::Warning);
            }
        }

        if !analysis.reorder.is_empty() {
            report.push('\n');
            report.push_str(REORDER_TITLE);
            report.push('\n');
            report.push_str(REORDER_RULE);
            report.push('\n');
            for status in &analysis.reorder {
                self.push_item_block(&mut report, status, StockTier::Reorder);
            }
        }

        report
    }

    /// 汇总统计
    ///
    /// # 参数
    /// - `records`: 原始记录序列 (用于总数与品类全集)
    /// - `analysis`: 分层结果
    ///
    /// # 返回
    /// InventoryStats: 四层计数 + 品类去重计数
    /// (分层互斥且穷尽,healthy_items 由构造保证非负)
    pub fn summarize(&self, records: &[ItemRecord], analysis: &StockAnalysis) -> InventoryStats {
        let total_products = records.len();
        let critical_items = analysis.critical.len();
        let warning_items = analysis.warning.len();
        let reorder_items = analysis.reorder.len();

        // 告急商品覆盖的品类 (去重)
        let critical_categories: HashSet<&str> = analysis
            .critical
            .iter()
            .map(|status| status.category.as_str())
            .collect();

        // 全部记录覆盖的品类 (去重)
        let total_categories: HashSet<&str> =
            records.iter().map(|record| record.category.as_str()).collect();

        let stats = InventoryStats {
            total_products,
            critical_items,
            warning_items,
            reorder_items,
            healthy_items: total_products - critical_items - warning_items - reorder_items,
            critical_categories: critical_categories.len(),
            total_categories: total_categories.len(),
        };

        debug!(
            total = stats.total_products,
            healthy = stats.healthy_items,
            "库存汇总统计完成"
        );

        stats
    }

    // ==========================================
    // 商品块渲染
    // ==========================================

    /// 渲染单个商品块 (告急商品追加断货风险提示行),块尾空行
    fn push_item_block(&self, report: &mut String, status: &ItemStatus, tier: StockTier) {
        report.push_str(&format!(
            "{} - {} (ID: {})\n",
            status.category, status.item_name, status.product_id
        ));
        report.push_str(&format!("  Current Stock: {} units\n", status.current_stock));
        report.push_str(&format!("  Minimum Stock: {} units\n", status.minimum_stock));
        report.push_str(&format!(
            "  Days of Stock Remaining: {:.1} days\n",
            status.days_of_stock
        ));
        report.push_str(&format!(
            "  Suggested Order Quantity: {} units\n",
            status.reorder_quantity
        ));
        if tier == StockTier::Critical {
            report.push_str(STOCK_OUT_LINE);
            report.push('\n');
        }
        report.push('\n');
    }
}

impl Default for ReportEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    // ==========================================
    // 测试数据准备
    // ==========================================

    /// 基准时间戳: 2026-01-17 09:30
    fn generated_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 17)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn base_status() -> ItemStatus {
        ItemStatus {
            product_id: "P001".to_string(),
            category: "Dairy".to_string(),
            item_name: "Milk 1L".to_string(),
            current_stock: 5.0,
            minimum_stock: 10.0,
            days_of_stock: 2.5,
            lead_time_days: 3.0,
            reorder_quantity: 95.0,
        }
    }

    fn base_record(category: &str) -> ItemRecord {
        ItemRecord {
            product_id: "P001".to_string(),
            category: category.to_string(),
            item_name: "Milk 1L".to_string(),
            current_stock: 5.0,
            minimum_stock: 10.0,
            maximum_stock: 100.0,
            avg_daily_sales: 2.0,
            lead_time_days: 3.0,
        }
    }

    // ==========================================
    // 第一部分：报告文本
    // ==========================================

    #[test]
    fn test_report_header_format() {
        let engine = ReportEngine::new();
        let report = engine.format_report(&StockAnalysis::default(), generated_at());

        // 标题行: YYYY-MM-DD HH:MM, 后跟空行; 空分层不输出任何分区
        assert_eq!(report, "Stock Status Report - 2026-01-17 09:30\n\n");
    }

    #[test]
    fn test_report_critical_block() {
        let engine = ReportEngine::new();
        let analysis = StockAnalysis {
            critical: vec![base_status()],
            ..Default::default()
        };

        let report = engine.format_report(&analysis, generated_at());

        assert!(report.contains("CRITICAL - IMMEDIATE ACTION REQUIRED!\n"));
        assert!(report.contains("===================================\n"));
        assert!(report.contains("Dairy - Milk 1L (ID: P001)\n"));
        assert!(report.contains("  Current Stock: 5 units\n"));
        assert!(report.contains("  Minimum Stock: 10 units\n"));
        assert!(report.contains("  Days of Stock Remaining: 2.5 days\n"));
        assert!(report.contains("  Suggested Order Quantity: 95 units\n"));
        // 告急商品独有的断货风险提示行
        assert!(report.contains("  ⚠️ STOCK OUT RISK - Order Immediately!\n"));
    }

    #[test]
    fn test_report_non_critical_has_no_stock_out_line() {
        let engine = ReportEngine::new();
        let analysis = StockAnalysis {
            warning: vec![base_status()],
            reorder: vec![base_status()],
            ..Default::default()
        };

        let report = engine.format_report(&analysis, generated_at());

        assert!(report.contains("WARNING - Order Soon\n===================\n"));
        assert!(report.contains("Consider Reordering\n===================\n"));
        assert!(!report.contains("STOCK OUT RISK"), "风险提示行仅限告急商品");
    }

    #[test]
    fn test_report_empty_sections_omitted() {
        let engine = ReportEngine::new();
        let analysis = StockAnalysis {
            reorder: vec![base_status()],
            ..Default::default()
        };

        let report = engine.format_report(&analysis, generated_at());

        assert!(!report.contains("CRITICAL"));
        assert!(!report.contains("WARNING"));
        assert!(report.contains("Consider Reordering"));
    }

    #[test]
    fn test_report_section_order_and_separation() {
        let engine = ReportEngine::new();
        let mut warning_status = base_status();
        warning_status.product_id = "P002".to_string();
        let analysis = StockAnalysis {
            critical: vec![base_status()],
            warning: vec![warning_status],
            ..Default::default()
        };

        let report = engine.format_report(&analysis, generated_at());

        // 分区按固定顺序: Critical 在 Warning 之前
        let critical_pos = report.find("CRITICAL").unwrap();
        let warning_pos = report.find("WARNING").unwrap();
        assert!(critical_pos < warning_pos);

        // 商品块以空行结尾,后续分区以空行开头
        assert!(report.contains("Order Immediately!\n\n\nWARNING - Order Soon\n"));
    }

    #[test]
    fn test_report_infinite_days_rendered() {
        // 日均销量为0的商品: 可售天数渲染为 inf
        let engine = ReportEngine::new();
        let mut status = base_status();
        status.days_of_stock = f64::INFINITY;
        let analysis = StockAnalysis {
            warning: vec![status],
            ..Default::default()
        };

        let report = engine.format_report(&analysis, generated_at());
        assert!(report.contains("  Days of Stock Remaining: inf days\n"));
    }

    #[test]
    fn test_report_items_keep_list_order() {
        let engine = ReportEngine::new();
        let mut second = base_status();
        second.product_id = "P009".to_string();
        second.item_name = "Yogurt".to_string();
        let analysis = StockAnalysis {
            critical: vec![base_status(), second],
            ..Default::default()
        };

        let report = engine.format_report(&analysis, generated_at());
        let first_pos = report.find("Milk 1L").unwrap();
        let second_pos = report.find("Yogurt").unwrap();
        assert!(first_pos < second_pos, "分区内应保持列表顺序");
    }

    // ==========================================
    // 第二部分：汇总统计
    // ==========================================

    #[test]
    fn test_summarize_counts() {
        let engine = ReportEngine::new();
        let records = vec![
            base_record("Dairy"),
            base_record("Dairy"),
            base_record("Produce"),
            base_record("Bakery"),
        ];
        let analysis = StockAnalysis {
            critical: vec![base_status()],
            warning: vec![base_status(), base_status()],
            ..Default::default()
        };

        let stats = engine.summarize(&records, &analysis);

        assert_eq!(stats.total_products, 4);
        assert_eq!(stats.critical_items, 1);
        assert_eq!(stats.warning_items, 2);
        assert_eq!(stats.reorder_items, 0);
        assert_eq!(stats.healthy_items, 1, "健康数 = 总数 - 三层之和");
        assert_eq!(stats.total_categories, 3, "品类全集去重");
    }

    #[test]
    fn test_summarize_critical_categories_distinct() {
        // 告急品类数: Dairy + Produce 两条告急记录 → 2
        let engine = ReportEngine::new();
        let mut produce_status = base_status();
        produce_status.category = "Produce".to_string();
        let mut dairy_again = base_status();
        dairy_again.product_id = "P003".to_string();

        let records = vec![base_record("Dairy"), base_record("Produce")];
        let analysis = StockAnalysis {
            critical: vec![base_status(), produce_status, dairy_again],
            ..Default::default()
        };

        let stats = engine.summarize(&records, &analysis);
        assert_eq!(stats.critical_categories, 2, "同品类多条告急只计一次");
    }

    #[test]
    fn test_stats_serializable() {
        // 输出协作方需要 JSON 映射
        let engine = ReportEngine::new();
        let stats = engine.summarize(&[], &StockAnalysis::default());

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["total_products"], 0);
        assert_eq!(json["healthy_items"], 0);
    }
}
