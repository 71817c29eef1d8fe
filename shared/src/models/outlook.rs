//! Short-term drought outlook from trend signals

use serde::{Deserialize, Serialize};

use super::Observation;
use crate::types::Season;

/// VCI value treated as the neutral baseline for the VCI trend
pub const VCI_BASELINE: f64 = 60.0;

/// Sharp and mild thresholds for one trend signal.
///
/// A fall below `-sharp` scores +2, a fall to `-mild` or further +1; a rise
/// above `sharp` scores -2, a rise to `mild` or further -1. The sharp
/// comparison is strict, so a move of exactly `sharp` gets the mild term and
/// a move of exactly `mild` still counts.
#[derive(Debug, Clone, Copy)]
struct TrendLadder {
    sharp: f64,
    mild: f64,
}

impl TrendLadder {
    fn contribution(&self, trend: f64) -> i32 {
        if trend < -self.sharp {
            2
        } else if trend <= -self.mild {
            1
        } else if trend > self.sharp {
            -2
        } else if trend >= self.mild {
            -1
        } else {
            0
        }
    }
}

const NDVI_TREND: TrendLadder = TrendLadder { sharp: 0.05, mild: 0.02 };
const PRECIP_TREND: TrendLadder = TrendLadder { sharp: 20.0, mild: 10.0 };
const VCI_TREND: TrendLadder = TrendLadder { sharp: 10.0, mild: 5.0 };

/// Flat bias toward worsening during the dry season
const DRY_SEASON_BIAS: i32 = 1;

/// Outlook direction; positive trend scores mean worsening
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OutlookLevel {
    Improving,
    SlightlyImproving,
    Stable,
    SlightlyWorsening,
    Worsening,
}

impl OutlookLevel {
    pub fn from_score(score: i32) -> Self {
        if score >= 3 {
            OutlookLevel::Worsening
        } else if score >= 1 {
            OutlookLevel::SlightlyWorsening
        } else if score <= -3 {
            OutlookLevel::Improving
        } else if score <= -1 {
            OutlookLevel::SlightlyImproving
        } else {
            OutlookLevel::Stable
        }
    }
}

impl std::fmt::Display for OutlookLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutlookLevel::Improving => write!(f, "Improving"),
            OutlookLevel::SlightlyImproving => write!(f, "Slightly Improving"),
            OutlookLevel::Stable => write!(f, "Stable"),
            OutlookLevel::SlightlyWorsening => write!(f, "Slightly Worsening"),
            OutlookLevel::Worsening => write!(f, "Worsening"),
        }
    }
}

/// First differences feeding the outlook
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TrendDeltas {
    pub ndvi_trend: f64,
    pub precip_trend: f64,
    pub vci_trend: f64,
}

impl TrendDeltas {
    pub fn from_observation(obs: &Observation) -> Self {
        Self {
            ndvi_trend: obs.ndvi - obs.ndvi_lag1,
            precip_trend: obs.precip_anomaly,
            vci_trend: obs.vci - VCI_BASELINE,
        }
    }
}

/// Signed contribution of each signal to the trend score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TrendComponents {
    pub ndvi: i32,
    pub precipitation: i32,
    pub vci: i32,
    pub season: i32,
}

impl TrendComponents {
    pub fn total(&self) -> i32 {
        self.ndvi + self.precipitation + self.vci + self.season
    }
}

/// Short-term outlook
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Outlook {
    pub score: i32,
    pub level: OutlookLevel,
}

impl Outlook {
    pub fn from_observation(obs: &Observation) -> Self {
        let deltas = TrendDeltas::from_observation(obs);
        forecast_outlook(
            deltas.ndvi_trend,
            deltas.precip_trend,
            deltas.vci_trend,
            obs.season,
        )
    }
}

impl From<TrendComponents> for Outlook {
    fn from(components: TrendComponents) -> Self {
        let score = components.total();
        Outlook {
            score,
            level: OutlookLevel::from_score(score),
        }
    }
}

pub fn outlook_components(
    ndvi_trend: f64,
    precip_trend: f64,
    vci_trend: f64,
    season: Season,
) -> TrendComponents {
    TrendComponents {
        ndvi: NDVI_TREND.contribution(ndvi_trend),
        precipitation: PRECIP_TREND.contribution(precip_trend),
        vci: VCI_TREND.contribution(vci_trend),
        season: if season.is_dry() { DRY_SEASON_BIAS } else { 0 },
    }
}

/// Forecast the short-term drought direction.
///
/// Falling vegetation and rainfall push the score up (worsening).
pub fn forecast_outlook(
    ndvi_trend: f64,
    precip_trend: f64,
    vci_trend: f64,
    season: Season,
) -> Outlook {
    outlook_components(ndvi_trend, precip_trend, vci_trend, season).into()
}
