// ==========================================
// 铁路装车编组决策支持系统 - 延误风险分类
// ==========================================
// 职责: 固定形状的数值特征 → 风险标记 + 成本系数
// 红线: 分类器必须是纯函数、同步、对任意输入都有结果
// 说明: 成本系数只用于解释，不回乘到总成本
// ==========================================

use crate::domain::types::RiskFlag;
use serde::{Deserialize, Serialize};

// ==========================================
// RiskFeatures - 风险特征
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFeatures {
    pub distance_km: f64,
    pub transit_time_hours: f64,
    pub priority: f64, // 方案内订单平均优先级
    pub material_weight: f64,
    pub loading_point_congestion: f64,    // 占位常量
    pub route_historical_delays_pct: f64, // 占位常量
    pub time_until_due_date_hours: f64,
    pub mode: f64, // 1 = rail
    pub season_factor: f64,
}

// ==========================================
// RiskAssessment - 分类结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_flag: RiskFlag,
    pub cost_multiplier: f64,
}

// ==========================================
// Trait: RiskClassifier
// ==========================================
// 用途: 外部风险模型的注入接口
// 实现者: RuleBasedRiskClassifier（内置规则版）
pub trait RiskClassifier: Send + Sync {
    fn classify(&self, features: &RiskFeatures) -> RiskAssessment;
}

impl<F> RiskClassifier for F
where
    F: Fn(&RiskFeatures) -> RiskAssessment + Send + Sync,
{
    fn classify(&self, features: &RiskFeatures) -> RiskAssessment {
        self(features)
    }
}

// ==========================================
// RuleBasedRiskClassifier - 规则版分类器
// ==========================================
// 余量 slack = 距交期小时数 - 在途小时数 × 季节系数
// 得分: slack<0 +3 / slack<24 +2 / slack<48 +1
//       平均优先级<=2 +1 / 历史延误>=0.2 +1 / 装车点拥堵>=0.7 +1
// 等级: >=3 HIGH(1.25) / >=1 MED(1.10) / 其他 LOW(1.00)
#[derive(Debug, Clone, Default)]
pub struct RuleBasedRiskClassifier;

impl RuleBasedRiskClassifier {
    pub fn new() -> Self {
        Self
    }

    /// 风险得分
    pub fn score(&self, features: &RiskFeatures) -> u32 {
        let season = if features.season_factor.is_finite() && features.season_factor > 0.0 {
            features.season_factor
        } else {
            1.0
        };
        let slack = features.time_until_due_date_hours - features.transit_time_hours * season;

        let mut score = 0;
        if slack < 0.0 {
            score += 3;
        } else if slack < 24.0 {
            score += 2;
        } else if slack < 48.0 {
            score += 1;
        }
        if features.priority <= 2.0 {
            score += 1;
        }
        if features.route_historical_delays_pct >= 0.2 {
            score += 1;
        }
        if features.loading_point_congestion >= 0.7 {
            score += 1;
        }
        score
    }
}

impl RiskClassifier for RuleBasedRiskClassifier {
    fn classify(&self, features: &RiskFeatures) -> RiskAssessment {
        let (risk_flag, cost_multiplier) = match self.score(features) {
            s if s >= 3 => (RiskFlag::High, 1.25),
            s if s >= 1 => (RiskFlag::Med, 1.10),
            _ => (RiskFlag::Low, 1.0),
        };
        RiskAssessment {
            risk_flag,
            cost_multiplier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_features(hours_to_due: f64, transit: f64, priority: f64) -> RiskFeatures {
        RiskFeatures {
            distance_km: 1400.0,
            transit_time_hours: transit,
            priority,
            material_weight: 100.0,
            loading_point_congestion: 0.5,
            route_historical_delays_pct: 0.12,
            time_until_due_date_hours: hours_to_due,
            mode: 1.0,
            season_factor: 1.0,
        }
    }

    #[test]
    fn test_ample_slack_low_priority_is_low() {
        let classifier = RuleBasedRiskClassifier::new();
        let result = classifier.classify(&create_test_features(200.0, 72.0, 4.0));
        assert_eq!(result.risk_flag, RiskFlag::Low);
        assert_eq!(result.cost_multiplier, 1.0);
    }

    #[test]
    fn test_negative_slack_is_high() {
        let classifier = RuleBasedRiskClassifier::new();
        let result = classifier.classify(&create_test_features(48.0, 72.0, 4.0));
        assert_eq!(result.risk_flag, RiskFlag::High);
        assert_eq!(result.cost_multiplier, 1.25);
    }

    #[test]
    fn test_tight_slack_is_med() {
        let classifier = RuleBasedRiskClassifier::new();
        // slack = 30 → +1
        let result = classifier.classify(&create_test_features(102.0, 72.0, 3.0));
        assert_eq!(result.risk_flag, RiskFlag::Med);
    }

    #[test]
    fn test_season_factor_stretches_transit() {
        let classifier = RuleBasedRiskClassifier::new();
        let mut features = create_test_features(150.0, 72.0, 4.0);
        assert_eq!(classifier.score(&features), 0); // slack 78
        features.season_factor = 1.5; // slack 42
        assert_eq!(classifier.score(&features), 1);
    }

    #[test]
    fn test_closure_classifier() {
        let fixed = |_: &RiskFeatures| RiskAssessment {
            risk_flag: RiskFlag::High,
            cost_multiplier: 2.0,
        };
        let result = fixed.classify(&create_test_features(500.0, 10.0, 5.0));
        assert_eq!(result.risk_flag, RiskFlag::High);
    }
}
