// ==========================================
// 库存预警系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、业务规则接口
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod item;
pub mod types;

// 重导出核心类型
pub use item::{InventoryStats, ItemRecord, ItemStatus, StockAssessment};
pub use types::StockTier;
