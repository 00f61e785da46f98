// ==========================================
// 库存预警系统 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 错误信息必须定位到具体记录 (可解释性)
// ==========================================

use thiserror::Error;

/// 记录校验错误
///
/// 任一记录校验失败即中止整批分析 (fail-fast, 不产出部分结果):
/// 脏数据会污染下游统计,由调用方修数后重试
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    // ===== 字段缺失 =====
    #[error("必填字段缺失 (记录 {index}): {field} 为空")]
    MissingField { index: usize, field: &'static str },

    // ===== 数值范围 =====
    #[error("数值为负 (记录 {index}, 商品 {product_id}, 字段 {field}): {value}")]
    NegativeValue {
        index: usize,
        product_id: String,
        field: &'static str,
        value: f64,
    },

    // ===== 库存上下限倒挂 =====
    #[error(
        "库存上下限倒挂 (记录 {index}, 商品 {product_id}): maximum_stock {maximum_stock} < minimum_stock {minimum_stock}"
    )]
    StockBoundsInverted {
        index: usize,
        product_id: String,
        minimum_stock: f64,
        maximum_stock: f64,
    },
}
