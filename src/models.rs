// src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Qualitative strength tier derived from a strength score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum StrengthLevel {
    #[serde(rename = "Very Weak")]
    VeryWeak,
    Weak,
    Medium,
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl StrengthLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthLevel::VeryWeak,
            3..=4 => StrengthLevel::Weak,
            5..=6 => StrengthLevel::Medium,
            7 => StrengthLevel::Strong,
            _ => StrengthLevel::VeryStrong,
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLevel::VeryWeak => write!(f, "Very Weak"),
            StrengthLevel::Weak => write!(f, "Weak"),
            StrengthLevel::Medium => write!(f, "Medium"),
            StrengthLevel::Strong => write!(f, "Strong"),
            StrengthLevel::VeryStrong => write!(f, "Very Strong"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StrengthReport {
    /// Strength tier
    pub strength: StrengthLevel,
    /// Points earned
    pub score: u8,
    /// Highest possible score
    pub max_score: u8,
    /// Requirements the password satisfies, in check order
    pub requirements_met: Vec<String>,
    /// Requirements the password fails, in check order
    pub requirements_failed: Vec<String>,
}

/// Risk tier derived from the total number of breach exposures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn from_exposures(total: u64) -> Self {
        if total > 1_000_000 {
            RiskLevel::Critical
        } else if total > 100_000 {
            RiskLevel::High
        } else if total > 1_000 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
            RiskLevel::Critical => write!(f, "Critical"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LeakReport {
    /// Whether the password was found in a breach corpus
    pub leaked: bool,
    /// Names of the corpora it was found in
    pub sources: Vec<String>,
    /// Sum of exposure counts across all sources
    pub total_exposures: u64,
    /// Risk tier for `total_exposures`
    pub risk_level: RiskLevel,
    /// Human-readable notes, including lookup failures
    pub details: Vec<String>,
}

impl LeakReport {
    pub(crate) fn record_exposure(&mut self, source: &str, count: u64) {
        self.leaked = true;
        if !self.sources.iter().any(|s| s == source) {
            self.sources.push(source.to_string());
        }
        self.total_exposures = self.total_exposures.saturating_add(count);
        self.risk_level = RiskLevel::from_exposures(self.total_exposures);
        self.details.push(format!("Found in {} data breaches", count));
    }

    pub(crate) fn record_failure(&mut self, detail: String) {
        self.details.push(detail);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_level_from_score() {
        assert_eq!(StrengthLevel::from_score(0), StrengthLevel::VeryWeak);
        assert_eq!(StrengthLevel::from_score(2), StrengthLevel::VeryWeak);
        assert_eq!(StrengthLevel::from_score(3), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(4), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(5), StrengthLevel::Medium);
        assert_eq!(StrengthLevel::from_score(6), StrengthLevel::Medium);
        assert_eq!(StrengthLevel::from_score(7), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_score(8), StrengthLevel::VeryStrong);
    }

    #[test]
    fn test_risk_level_thresholds() {
        assert_eq!(RiskLevel::from_exposures(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_exposures(1_000), RiskLevel::Low);
        assert_eq!(RiskLevel::from_exposures(1_001), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_exposures(100_000), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_exposures(100_001), RiskLevel::High);
        assert_eq!(RiskLevel::from_exposures(1_000_000), RiskLevel::High);
        assert_eq!(RiskLevel::from_exposures(1_000_001), RiskLevel::Critical);
    }

    #[test]
    fn test_levels_serialize_as_display_text() {
        assert_eq!(
            serde_json::to_string(&StrengthLevel::VeryStrong).unwrap(),
            format!("\"{}\"", StrengthLevel::VeryStrong)
        );
        assert_eq!(
            serde_json::to_string(&StrengthLevel::VeryWeak).unwrap(),
            "\"Very Weak\""
        );
        assert_eq!(serde_json::to_string(&RiskLevel::Critical).unwrap(), "\"Critical\"");
    }

    #[test]
    fn test_record_exposure_accumulates() {
        let mut report = LeakReport::default();
        report.record_exposure("Corpus", 600_000);
        report.record_exposure("Corpus", 500_000);

        assert!(report.leaked);
        assert_eq!(report.sources, vec!["Corpus".to_string()]);
        assert_eq!(report.total_exposures, 1_100_000);
        assert_eq!(report.risk_level, RiskLevel::Critical);
        assert_eq!(report.details.len(), 2);
    }
}
