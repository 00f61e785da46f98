// ==========================================
// 库存预警系统 - 核心库
// ==========================================
// 系统定位: 决策支持系统 (只读分析,人工最终控制权)
// 核心: 单遍库存分层 + 阈值分级策略
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 预警阈值
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::StockTier;

// 领域实体
pub use domain::{InventoryStats, ItemRecord, ItemStatus, StockAssessment};

// 引擎
pub use engine::{ReportEngine, StockAnalysis, StockClassifier, ValidationError};

// 导入
pub use importer::{CsvLoader, ImportError};

// 配置
pub use config::{AlarmThresholds, DEFAULT_HEALTHY_STOCK_RATIO};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "库存预警系统";

// ==========================================
// 预编译检查
// ==========================================
