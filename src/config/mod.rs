// ==========================================
// 库存预警系统 - 配置层
// ==========================================
// 职责: 预警阈值配置管理
// 存储: JSON 配置文件 (可选)
// ==========================================

pub mod thresholds;

// 重导出核心配置
pub use thresholds::{AlarmThresholds, DEFAULT_HEALTHY_STOCK_RATIO};
