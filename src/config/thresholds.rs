// ==========================================
// 库存预警系统 - 预警阈值配置
// ==========================================
// 职责: 分层阈值的默认值、文件加载与校验
// 存储: JSON 配置文件 (可选,缺省用默认值)
// ==========================================

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 健康水位比例默认值
///
/// 当前库存高于 最高库存 × 该比例 时视为健康,不进报告。
/// 0.7 沿用既有业务口径,待领域负责人确认前保持默认值可覆写。
pub const DEFAULT_HEALTHY_STOCK_RATIO: f64 = 0.7;

// ==========================================
// AlarmThresholds - 预警阈值
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlarmThresholds {
    /// 健康水位比例 (0 < ratio <= 1)
    #[serde(default = "default_healthy_stock_ratio")]
    pub healthy_stock_ratio: f64,
}

fn default_healthy_stock_ratio() -> f64 {
    DEFAULT_HEALTHY_STOCK_RATIO
}

impl Default for AlarmThresholds {
    fn default() -> Self {
        Self {
            healthy_stock_ratio: DEFAULT_HEALTHY_STOCK_RATIO,
        }
    }
}

impl AlarmThresholds {
    /// 从 JSON 文件加载阈值
    ///
    /// # 参数
    /// - `path`: 配置文件路径
    ///
    /// # 返回
    /// 校验通过的阈值配置;文件缺失/格式错误/越界均报错
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("读取阈值配置失败: {}", path.display()))?;
        let thresholds: AlarmThresholds = serde_json::from_str(&content)
            .with_context(|| format!("解析阈值配置失败: {}", path.display()))?;
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// 校验阈值合法性
    pub fn validate(&self) -> Result<()> {
        if !self.healthy_stock_ratio.is_finite()
            || self.healthy_stock_ratio <= 0.0
            || self.healthy_stock_ratio > 1.0
        {
            bail!(
                "健康水位比例越界: {} (要求 0 < ratio <= 1)",
                self.healthy_stock_ratio
            );
        }
        Ok(())
    }
}
