// ==========================================
// 库存预警系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    // ===== 数据解析错误 =====
    #[error("CSV 表头解析失败: {0}")]
    HeaderParseError(String),

    #[error("记录解析失败 (行 {row}): {message}")]
    RecordParseError { row: usize, message: String },
}
