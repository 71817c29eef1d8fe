//! Rule-based drought risk score
//!
//! An additive score from four threshold ladders, kept independent of the
//! classifier so it can be read alongside the model output.

use serde::{Deserialize, Serialize};

use super::Observation;

/// Highest attainable risk score (4 + 4 + 4 + 3)
pub const MAX_RISK_SCORE: u8 = 15;

/// One rung of a threshold ladder
#[derive(Debug, Clone, Copy)]
struct Rung {
    limit: f64,
    points: u8,
}

const fn rung(limit: f64, points: u8) -> Rung {
    Rung { limit, points }
}

// Ladders are ordered most severe first; the first matching rung wins.
const VCI_LADDER: [Rung; 4] = [rung(15.0, 4), rung(30.0, 3), rung(45.0, 2), rung(60.0, 1)];
const PRECIP_CURRENT_LADDER: [Rung; 4] =
    [rung(10.0, 4), rung(20.0, 3), rung(35.0, 2), rung(50.0, 1)];
const PRECIP_3MONTH_LADDER: [Rung; 4] =
    [rung(30.0, 4), rung(50.0, 3), rung(80.0, 2), rung(120.0, 1)];
const NDVI_LADDER: [Rung; 3] = [rung(0.35, 3), rung(0.45, 2), rung(0.55, 1)];

/// Points for the first rung whose limit `value` is at or below
fn points_at_most(value: f64, ladder: &[Rung]) -> u8 {
    ladder
        .iter()
        .find(|r| value <= r.limit)
        .map_or(0, |r| r.points)
}

/// Points for the first rung whose limit `value` is strictly below
fn points_below(value: f64, ladder: &[Rung]) -> u8 {
    ladder
        .iter()
        .find(|r| value < r.limit)
        .map_or(0, |r| r.points)
}

/// Risk level shown on the dashboard badge
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Score 0-3
    Low,
    /// Score 4-6
    Medium,
    /// Score 7-9
    High,
    /// Score 10-15
    Severe,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=3 => RiskLevel::Low,
            4..=6 => RiskLevel::Medium,
            7..=9 => RiskLevel::High,
            _ => RiskLevel::Severe,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Severe => "severe",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low Risk"),
            RiskLevel::Medium => write!(f, "Medium Risk"),
            RiskLevel::High => write!(f, "High Risk"),
            RiskLevel::Severe => write!(f, "Severe Risk"),
        }
    }
}

/// Points contributed by each signal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RiskComponents {
    pub vci: u8,
    pub precip_current: u8,
    pub precip_3month: u8,
    pub ndvi: u8,
}

impl RiskComponents {
    pub fn total(&self) -> u8 {
        self.vci + self.precip_current + self.precip_3month + self.ndvi
    }
}

/// Result of the rule-based risk score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskAssessment {
    /// 0..=15
    pub score: u8,
    pub level: RiskLevel,
}

impl RiskAssessment {
    pub fn from_observation(obs: &Observation) -> Self {
        score_risk(obs.vci, obs.precip_current, obs.precip_3month, obs.ndvi)
    }
}

impl From<RiskComponents> for RiskAssessment {
    fn from(components: RiskComponents) -> Self {
        let score = components.total();
        RiskAssessment {
            score,
            level: RiskLevel::from_score(score),
        }
    }
}

/// Per-signal risk points.
///
/// VCI buckets are inclusive (`<=`); rainfall and NDVI buckets are strict
/// (`<`). A value exactly on a rainfall or NDVI threshold lands in the safer
/// bucket. NaN earns no points.
pub fn risk_components(
    vci: f64,
    precip_current: f64,
    precip_3month: f64,
    ndvi: f64,
) -> RiskComponents {
    RiskComponents {
        vci: points_at_most(vci, &VCI_LADDER),
        precip_current: points_below(precip_current, &PRECIP_CURRENT_LADDER),
        precip_3month: points_below(precip_3month, &PRECIP_3MONTH_LADDER),
        ndvi: points_below(ndvi, &NDVI_LADDER),
    }
}

/// Calculate the 0-15 drought risk score and its level
pub fn score_risk(vci: f64, precip_current: f64, precip_3month: f64, ndvi: f64) -> RiskAssessment {
    risk_components(vci, precip_current, precip_3month, ndvi).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_fall_in_safer_bucket() {
        let risk = score_risk(60.0, 50.0, 120.0, 0.55);
        // VCI is inclusive, so 60 still earns a point
        assert_eq!(risk_components(60.0, 50.0, 120.0, 0.55).vci, 1);
        assert_eq!(risk_components(60.0, 50.0, 120.0, 0.55).precip_current, 0);
        assert_eq!(risk.score, 1);
        assert_eq!(risk.level, RiskLevel::Low);
    }

    #[test]
    fn test_vci_buckets() {
        let vci = |v| risk_components(v, 100.0, 200.0, 0.7).vci;
        assert_eq!(vci(0.0), 4);
        assert_eq!(vci(15.0), 4);
        assert_eq!(vci(15.5), 3);
        assert_eq!(vci(30.0), 3);
        assert_eq!(vci(45.0), 2);
        assert_eq!(vci(60.0), 1);
        assert_eq!(vci(60.1), 0);
    }

    #[test]
    fn test_ndvi_buckets() {
        let ndvi = |v| risk_components(80.0, 100.0, 200.0, v).ndvi;
        assert_eq!(ndvi(0.2), 3);
        assert_eq!(ndvi(0.35), 2);
        assert_eq!(ndvi(0.45), 1);
        assert_eq!(ndvi(0.55), 0);
    }

    #[test]
    fn test_worst_case_is_max_score() {
        let risk = score_risk(0.0, 0.0, 0.0, 0.0);
        assert_eq!(risk.score, MAX_RISK_SCORE);
        assert_eq!(risk.level, RiskLevel::Severe);
    }

    #[test]
    fn test_level_from_score() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(3), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(4), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(6), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(7), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(9), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(10), RiskLevel::Severe);
        assert_eq!(RiskLevel::from_score(15), RiskLevel::Severe);
    }

    #[test]
    fn test_nan_scores_nothing() {
        assert_eq!(score_risk(f64::NAN, f64::NAN, f64::NAN, f64::NAN).score, 0);
    }
}
