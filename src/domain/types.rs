// ==========================================
// 库存预警系统 - 领域类型定义
// ==========================================
// 红线: 风险分层是"等级制",不是评分制
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 库存风险分层 (Stock Tier)
// ==========================================
// 红线: 四层互斥且穷尽,每条记录必属其一
// 序列化格式: SCREAMING_SNAKE_CASE (与外部报表一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockTier {
    Critical, // 告急: 已跌破最低库存
    Warning,  // 警告: 再订货点以下,交期内将跌破
    Reorder,  // 建议补货: 低于最高库存的健康水位
    Healthy,  // 健康: 无需关注
}

impl fmt::Display for StockTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockTier::Critical => write!(f, "CRITICAL"),
            StockTier::Warning => write!(f, "WARNING"),
            StockTier::Reorder => write!(f, "REORDER"),
            StockTier::Healthy => write!(f, "HEALTHY"),
        }
    }
}

impl StockTier {
    /// 是否需要出现在状态报告中 (Healthy 不出报告)
    pub fn is_reportable(&self) -> bool {
        !matches!(self, StockTier::Healthy)
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_display() {
        assert_eq!(StockTier::Critical.to_string(), "CRITICAL");
        assert_eq!(StockTier::Warning.to_string(), "WARNING");
        assert_eq!(StockTier::Reorder.to_string(), "REORDER");
        assert_eq!(StockTier::Healthy.to_string(), "HEALTHY");
    }

    #[test]
    fn test_tier_ordering() {
        // 告急 < 警告 < 建议补货 < 健康 (严重程度降序)
        assert!(StockTier::Critical < StockTier::Warning);
        assert!(StockTier::Warning < StockTier::Reorder);
        assert!(StockTier::Reorder < StockTier::Healthy);
    }

    #[test]
    fn test_tier_reportable() {
        assert!(StockTier::Critical.is_reportable());
        assert!(StockTier::Warning.is_reportable());
        assert!(StockTier::Reorder.is_reportable());
        assert!(!StockTier::Healthy.is_reportable());
    }

    #[test]
    fn test_tier_serde_format() {
        let json = serde_json::to_string(&StockTier::Critical).unwrap();
        assert_eq!(json, "\"CRITICAL\"");
    }
}
