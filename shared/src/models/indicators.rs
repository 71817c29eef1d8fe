//! Vegetation indicators shown next to the forecast

use serde::{Deserialize, Serialize};

use super::Observation;

/// Reference NDVI the gauge delta is measured against
pub const NDVI_REFERENCE: f64 = 0.50;

/// NDVI below which vegetation stress is flagged on the gauge
pub const NDVI_ALERT_THRESHOLD: f64 = 0.45;

/// Vegetation condition derived from VCI
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VegetationStatus {
    /// VCI above 60
    Healthy,
    /// VCI above 40
    Moderate,
    Stressed,
}

impl VegetationStatus {
    pub fn from_vci(vci: f64) -> Self {
        if vci > 60.0 {
            VegetationStatus::Healthy
        } else if vci > 40.0 {
            VegetationStatus::Moderate
        } else {
            VegetationStatus::Stressed
        }
    }
}

impl std::fmt::Display for VegetationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VegetationStatus::Healthy => write!(f, "Healthy"),
            VegetationStatus::Moderate => write!(f, "Moderate"),
            VegetationStatus::Stressed => write!(f, "Stressed"),
        }
    }
}

/// NDVI gauge band (0.2-0.4 poor, 0.4-0.6 fair, 0.6-0.8 good)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NdviBand {
    Poor,
    Fair,
    Good,
}

impl NdviBand {
    pub fn from_ndvi(ndvi: f64) -> Self {
        if ndvi < 0.4 {
            NdviBand::Poor
        } else if ndvi < 0.6 {
            NdviBand::Fair
        } else {
            NdviBand::Good
        }
    }
}

impl std::fmt::Display for NdviBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NdviBand::Poor => write!(f, "Poor"),
            NdviBand::Fair => write!(f, "Fair"),
            NdviBand::Good => write!(f, "Good"),
        }
    }
}

pub fn ndvi_delta(ndvi: f64) -> f64 {
    ndvi - NDVI_REFERENCE
}

/// Indicator summary for one observation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct VegetationIndicators {
    pub vegetation_status: VegetationStatus,
    pub ndvi_band: NdviBand,
    pub ndvi_delta: f64,
    pub below_ndvi_threshold: bool,
}

impl VegetationIndicators {
    pub fn from_observation(obs: &Observation) -> Self {
        Self {
            vegetation_status: VegetationStatus::from_vci(obs.vci),
            ndvi_band: NdviBand::from_ndvi(obs.ndvi),
            ndvi_delta: ndvi_delta(obs.ndvi),
            below_ndvi_threshold: obs.ndvi < NDVI_ALERT_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vegetation_status_boundaries() {
        assert_eq!(VegetationStatus::from_vci(100.0), VegetationStatus::Healthy);
        assert_eq!(VegetationStatus::from_vci(60.0), VegetationStatus::Moderate);
        assert_eq!(VegetationStatus::from_vci(40.5), VegetationStatus::Moderate);
        assert_eq!(VegetationStatus::from_vci(40.0), VegetationStatus::Stressed);
        assert_eq!(VegetationStatus::from_vci(0.0), VegetationStatus::Stressed);
    }

    #[test]
    fn test_ndvi_band_boundaries() {
        assert_eq!(NdviBand::from_ndvi(0.2), NdviBand::Poor);
        assert_eq!(NdviBand::from_ndvi(0.4), NdviBand::Fair);
        assert_eq!(NdviBand::from_ndvi(0.59), NdviBand::Fair);
        assert_eq!(NdviBand::from_ndvi(0.6), NdviBand::Good);
    }

    #[test]
    fn test_indicators_from_default_observation() {
        let indicators = VegetationIndicators::from_observation(&Observation::default());
        assert_eq!(indicators.vegetation_status, VegetationStatus::Healthy);
        assert_eq!(indicators.ndvi_band, NdviBand::Fair);
        assert!((indicators.ndvi_delta - 0.05).abs() < 1e-12);
        assert!(!indicators.below_ndvi_threshold);
    }
}
