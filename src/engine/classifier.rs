// ==========================================
// 库存预警系统 - 库存分层引擎
// ==========================================
// 职责: 单遍扫描库存记录,按断货风险分层
// 输入: 商品库存记录序列 (只读)
// 输出: StockAnalysis (告急/警告/建议补货 三个有序列表)
// 红线: 规则按序短路评估,四层互斥且穷尽
// 红线: 校验 fail-fast,整批中止,不产出部分结果
// ==========================================

use crate::config::AlarmThresholds;
use crate::domain::item::{ItemRecord, ItemStatus, StockAssessment};
use crate::domain::types::StockTier;
use crate::engine::error::ValidationError;
use tracing::{debug, instrument};

// ==========================================
// StockAnalysis - 分层结果
// ==========================================
// 用途: 一次分析调用的全部产出,调用结束即失效,不跨调用缓存
// 三个列表各自保持记录在输入序列中的相对顺序
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StockAnalysis {
    pub critical: Vec<ItemStatus>, // 告急 (规则1)
    pub warning: Vec<ItemStatus>,  // 警告 (规则2)
    pub reorder: Vec<ItemStatus>,  // 建议补货 (规则3)
}

// ==========================================
// StockClassifier - 库存分层引擎
// ==========================================
pub struct StockClassifier {
    thresholds: AlarmThresholds,
}

impl StockClassifier {
    /// 创建引擎 (默认阈值: 健康水位比例 0.7)
    pub fn new() -> Self {
        Self {
            thresholds: AlarmThresholds::default(),
        }
    }

    /// 创建引擎 (注入阈值配置)
    pub fn with_thresholds(thresholds: AlarmThresholds) -> Self {
        Self { thresholds }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 批量分层 (整批单遍扫描)
    ///
    /// # 参数
    /// - `records`: 商品库存记录序列 (外部加载器产出)
    ///
    /// # 返回
    /// - `Ok(StockAnalysis)`: 三个有序分层列表 (Healthy 不输出)
    /// - `Err(ValidationError)`: 任一记录非法即整批中止
    #[instrument(skip(self, records), fields(count = records.len()))]
    pub fn analyze(&self, records: &[ItemRecord]) -> Result<StockAnalysis, ValidationError> {
        // 1. 先整批校验,再分层 (脏数据会污染下游统计)
        self.validate_batch(records)?;

        // 2. 单遍扫描,按序短路分层
        let mut analysis = StockAnalysis::default();
        for record in records {
            let tier = self.classify(record);
            if !tier.is_reportable() {
                continue;
            }

            let status = self.build_status(record);
            match tier {
                StockTier::Critical => analysis.critical.push(status),
                StockTier::Warning => analysis.warning.push(status),
                StockTier::Reorder => analysis.reorder.push(status),
                StockTier::Healthy => unreachable!("Healthy 不进入报告列表"),
            }
        }

        debug!(
            critical = analysis.critical.len(),
            warning = analysis.warning.len(),
            reorder = analysis.reorder.len(),
            "库存分层完成"
        );

        Ok(analysis)
    }

    /// 单条记录分层 (规则按序评估,首条命中即返回)
    ///
    /// # 规则
    /// 1. current_stock <= minimum_stock            → Critical
    /// 2. current_stock <= reorder_point            → Warning
    /// 3. current_stock <= maximum_stock × 健康水位比例 → Reorder
    /// 4. 其余                                      → Healthy
    ///
    /// 边界: minimum_stock=0 且 current_stock=0 时规则1命中;
    /// 日均销量为0时 reorder_point 退化为 minimum_stock,
    /// 规则2不可达 (恰好相等已被规则1截获),落入规则3或 Healthy
    pub fn classify(&self, record: &ItemRecord) -> StockTier {
        if record.current_stock <= record.minimum_stock {
            StockTier::Critical
        } else if record.current_stock <= record.reorder_point() {
            StockTier::Warning
        } else if record.current_stock
            <= record.maximum_stock * self.thresholds.healthy_stock_ratio
        {
            StockTier::Reorder
        } else {
            StockTier::Healthy
        }
    }

    // ==========================================
    // 校验 (fail-fast)
    // ==========================================

    /// 整批校验,首个非法记录即中止
    fn validate_batch(&self, records: &[ItemRecord]) -> Result<(), ValidationError> {
        for (index, record) in records.iter().enumerate() {
            Self::validate_record(index, record)?;
        }
        Ok(())
    }

    /// 单条记录校验
    ///
    /// 检查项: 必填字段非空、数值字段非负、库存上下限不倒挂
    /// 注意: 日均销量为0不是错误 (可售天数定义为 +inf)
    fn validate_record(index: usize, record: &ItemRecord) -> Result<(), ValidationError> {
        // 必填字段
        for (field, value) in [
            ("product_id", &record.product_id),
            ("category", &record.category),
            ("item_name", &record.item_name),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField { index, field });
            }
        }

        // 数值非负
        for (field, value) in [
            ("current_stock", record.current_stock),
            ("minimum_stock", record.minimum_stock),
            ("maximum_stock", record.maximum_stock),
            ("avg_daily_sales", record.avg_daily_sales),
            ("lead_time_days", record.lead_time_days),
        ] {
            if value < 0.0 {
                return Err(ValidationError::NegativeValue {
                    index,
                    product_id: record.product_id.clone(),
                    field,
                    value,
                });
            }
        }

        // 上下限倒挂
        if record.maximum_stock < record.minimum_stock {
            return Err(ValidationError::StockBoundsInverted {
                index,
                product_id: record.product_id.clone(),
                minimum_stock: record.minimum_stock,
                maximum_stock: record.maximum_stock,
            });
        }

        Ok(())
    }

    // ==========================================
    // 派生状态构造
    // ==========================================

    /// 构造派生状态 (可售天数保留1位小数)
    fn build_status(&self, record: &ItemRecord) -> ItemStatus {
        ItemStatus {
            product_id: record.product_id.clone(),
            category: record.category.clone(),
            item_name: record.item_name.clone(),
            current_stock: record.current_stock,
            minimum_stock: record.minimum_stock,
            days_of_stock: round_1(record.days_of_stock()),
            lead_time_days: record.lead_time_days,
            reorder_quantity: record.reorder_quantity(),
        }
    }
}

impl Default for StockClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// 保留1位小数 (+inf 保持 +inf)
fn round_1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
