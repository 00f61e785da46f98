// ==========================================
// 库存预警系统 - 引擎层
// ==========================================
// 职责: 实现业务规则引擎,纯计算,无 I/O
// 红线: 所有规则按序短路评估,错误必须可定位到记录
// ==========================================

pub mod classifier;
pub mod error;
pub mod report;

// 重导出核心引擎
pub use classifier::{StockAnalysis, StockClassifier};
pub use error::ValidationError;
pub use report::ReportEngine;
