// ==========================================
// 库存预警系统 - 导入层
// ==========================================
// 职责: 外部数据加载 (输入协作方)
// 红线: 引擎不做 I/O,只消费内存中的记录序列
// ==========================================

pub mod csv_loader;
pub mod error;

// 重导出核心加载器
pub use csv_loader::CsvLoader;
pub use error::ImportError;
