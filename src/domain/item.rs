// ==========================================
// 库存预警系统 - 商品库存领域模型
// ==========================================
// 职责: 定义输入记录、派生状态与汇总统计
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// ItemRecord - 商品库存记录 (输入)
// ==========================================
// 用途: 外部加载器产出的只读输入,每商品一条
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub product_id: String,   // 商品ID
    pub category: String,     // 品类
    pub item_name: String,    // 商品名称
    pub current_stock: f64,   // 当前库存 (>= 0)
    pub minimum_stock: f64,   // 最低库存 (>= 0)
    pub maximum_stock: f64,   // 最高库存 (>= minimum_stock)
    pub avg_daily_sales: f64, // 日均销量 (>= 0)
    pub lead_time_days: f64,  // 补货交期/天 (>= 0)
}

// ==========================================
// ItemStatus - 商品库存状态 (派生)
// ==========================================
// 用途: 每次分析调用重新计算,只读数据源,不落盘
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemStatus {
    pub product_id: String,     // 商品ID
    pub category: String,       // 品类
    pub item_name: String,      // 商品名称
    pub current_stock: f64,     // 当前库存
    pub minimum_stock: f64,     // 最低库存
    pub days_of_stock: f64,     // 可售天数 (保留1位小数; 日均销量为0时为 +inf)
    pub lead_time_days: f64,    // 补货交期/天
    pub reorder_quantity: f64,  // 建议订货量 (最高库存 - 当前库存, 超储时为负, 不截断)
}

// ==========================================
// Trait: StockAssessment
// ==========================================
// 用途: 库存水位评估规则接口
pub trait StockAssessment {
    /// 再订货点 = 最低库存 + 日均销量 × 交期
    fn reorder_point(&self) -> f64;

    /// 可售天数 = 当前库存 / 日均销量 (日均销量为0时为 +inf)
    fn days_of_stock(&self) -> f64;

    /// 建议订货量 = 最高库存 - 当前库存 (不截断,超储为负)
    fn reorder_quantity(&self) -> f64;
}

impl StockAssessment for ItemRecord {
    fn reorder_point(&self) -> f64 {
        self.minimum_stock + self.avg_daily_sales * self.lead_time_days
    }

    fn days_of_stock(&self) -> f64 {
        if self.avg_daily_sales > 0.0 {
            self.current_stock / self.avg_daily_sales
        } else {
            f64::INFINITY
        }
    }

    fn reorder_quantity(&self) -> f64 {
        self.maximum_stock - self.current_stock
    }
}

// ==========================================
// InventoryStats - 库存汇总统计
// ==========================================
// 用途: 汇总指标,交给输出协作方 (CLI/JSON/邮件)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryStats {
    pub total_products: usize,      // 商品总数
    pub critical_items: usize,      // 告急商品数
    pub warning_items: usize,       // 警告商品数
    pub reorder_items: usize,       // 建议补货商品数
    pub healthy_items: usize,       // 健康商品数 (总数 - 前三层之和)
    pub critical_categories: usize, // 告急商品覆盖的品类数 (去重)
    pub total_categories: usize,    // 全部记录覆盖的品类数 (去重)
}
