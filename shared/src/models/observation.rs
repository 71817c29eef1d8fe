//! Raw observation models

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::Season;

/// One set of observed vegetation, rainfall and temperature values.
///
/// The `range` rules describe the valid input domain. They are checked by the
/// input layer (see [`crate::validate_observation`]); the scoring functions
/// accept any value and never check them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Validate)]
pub struct Observation {
    /// Normalized Difference Vegetation Index
    #[validate(range(min = 0.2, max = 0.8))]
    pub ndvi: f64,
    #[validate(range(min = 0.2, max = 0.8))]
    pub ndvi_3month_avg: f64,
    /// Previous-period NDVI
    #[validate(range(min = 0.2, max = 0.8))]
    pub ndvi_lag1: f64,
    /// Vegetation Condition Index (percent)
    #[validate(range(min = 0.0, max = 100.0))]
    pub vci: f64,
    /// Current-period rainfall (mm)
    #[validate(range(min = 0.0, max = 500.0))]
    pub precip_current: f64,
    /// 3-period cumulative rainfall (mm)
    #[validate(range(min = 0.0, max = 1500.0))]
    pub precip_3month: f64,
    /// 6-period cumulative rainfall (mm)
    #[validate(range(min = 0.0, max = 3000.0))]
    pub precip_6month: f64,
    /// Percent deviation from the long-term average
    #[validate(range(min = -100.0, max = 150.0))]
    pub precip_anomaly: f64,
    /// Mean temperature (°C)
    #[validate(range(min = 20.0, max = 35.0))]
    pub temp_mean: f64,
    pub season: Season,
}

impl Observation {
    /// All numeric fields paired with their names
    pub fn numeric_fields(&self) -> [(&'static str, f64); 9] {
        [
            ("ndvi", self.ndvi),
            ("ndvi_3month_avg", self.ndvi_3month_avg),
            ("ndvi_lag1", self.ndvi_lag1),
            ("vci", self.vci),
            ("precip_current", self.precip_current),
            ("precip_3month", self.precip_3month),
            ("precip_6month", self.precip_6month),
            ("precip_anomaly", self.precip_anomaly),
            ("temp_mean", self.temp_mean),
        ]
    }
}

impl Default for Observation {
    /// Dashboard starting values
    fn default() -> Self {
        Self {
            ndvi: 0.55,
            ndvi_3month_avg: 0.52,
            ndvi_lag1: 0.50,
            vci: 65.0,
            precip_current: 80.0,
            precip_3month: 250.0,
            precip_6month: 600.0,
            precip_anomaly: 10.0,
            temp_mean: 28.0,
            season: Season::Dry,
        }
    }
}
