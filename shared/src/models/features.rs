//! Classifier feature vector

use serde::{Deserialize, Serialize};

use super::Observation;

/// Share of current rainfall assumed to have fallen in the previous period.
///
/// There is no lagged rainfall observation, so `precip_lag1` is approximated
/// from the current one. The classifier was fitted with this approximation.
pub const PRECIP_LAG1_FACTOR: f64 = 0.9;

/// Feature names in the order the classifier was fitted with
pub const FEATURE_NAMES: [&str; 11] = [
    "ndvi",
    "precipitation_mm",
    "temp_mean_c",
    "precip_3month",
    "precip_6month",
    "ndvi_3month_avg",
    "precip_3month_avg",
    "vci",
    "precip_anomaly",
    "precip_lag1",
    "ndvi_lag1",
];

/// Input row for the drought classifier.
///
/// Field order is part of the classifier contract: serialization and
/// [`FeatureVector::to_array`] both follow [`FEATURE_NAMES`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FeatureVector {
    pub ndvi: f64,
    pub precipitation_mm: f64,
    pub temp_mean_c: f64,
    pub precip_3month: f64,
    pub precip_6month: f64,
    pub ndvi_3month_avg: f64,
    pub precip_3month_avg: f64,
    pub vci: f64,
    pub precip_anomaly: f64,
    pub precip_lag1: f64,
    pub ndvi_lag1: f64,
}

impl FeatureVector {
    pub fn to_array(&self) -> [f64; 11] {
        [
            self.ndvi,
            self.precipitation_mm,
            self.temp_mean_c,
            self.precip_3month,
            self.precip_6month,
            self.ndvi_3month_avg,
            self.precip_3month_avg,
            self.vci,
            self.precip_anomaly,
            self.precip_lag1,
            self.ndvi_lag1,
        ]
    }

    /// Feature values paired with their names, in classifier order
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> {
        FEATURE_NAMES.into_iter().zip(self.to_array())
    }
}

impl From<&Observation> for FeatureVector {
    fn from(obs: &Observation) -> Self {
        derive_features(obs)
    }
}

/// Expand an observation into the classifier's feature vector.
///
/// Values are passed through without rounding or clamping.
pub fn derive_features(obs: &Observation) -> FeatureVector {
    FeatureVector {
        ndvi: obs.ndvi,
        precipitation_mm: obs.precip_current,
        temp_mean_c: obs.temp_mean,
        precip_3month: obs.precip_3month,
        precip_6month: obs.precip_6month,
        ndvi_3month_avg: obs.ndvi_3month_avg,
        precip_3month_avg: obs.precip_3month / 3.0,
        vci: obs.vci,
        precip_anomaly: obs.precip_anomaly,
        precip_lag1: obs.precip_current * PRECIP_LAG1_FACTOR,
        ndvi_lag1: obs.ndvi_lag1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_copies_and_computes() {
        let obs = Observation::default();
        let features = derive_features(&obs);

        assert_eq!(features.ndvi, 0.55);
        assert_eq!(features.precipitation_mm, 80.0);
        assert_eq!(features.temp_mean_c, 28.0);
        assert_eq!(features.precip_3month, 250.0);
        assert_eq!(features.precip_6month, 600.0);
        assert_eq!(features.ndvi_3month_avg, 0.52);
        assert_eq!(features.precip_3month_avg, 250.0 / 3.0);
        assert_eq!(features.vci, 65.0);
        assert_eq!(features.precip_anomaly, 10.0);
        assert_eq!(features.precip_lag1, 80.0 * 0.9);
        assert_eq!(features.ndvi_lag1, 0.50);
    }

    #[test]
    fn test_out_of_domain_values_pass_through() {
        let obs = Observation {
            precip_current: -10.0,
            precip_3month: -30.0,
            ..Observation::default()
        };
        let features = derive_features(&obs);
        assert_eq!(features.precip_lag1, -9.0);
        assert_eq!(features.precip_3month_avg, -10.0);
    }

    #[test]
    fn test_serialized_field_order_matches_feature_names() {
        let features = derive_features(&Observation::default());
        let json = serde_json::to_string(&features).unwrap();

        let mut last = 0;
        for name in FEATURE_NAMES {
            let pos = json.find(&format!("\"{}\"", name)).unwrap();
            assert!(pos >= last, "{} is out of order", name);
            last = pos;
        }
    }

    #[test]
    fn test_named_pairs_follow_array_order() {
        let features = derive_features(&Observation::default());
        let named: Vec<_> = features.named().collect();
        assert_eq!(named.len(), 11);
        assert_eq!(named[1], ("precipitation_mm", 80.0));
        assert_eq!(named[10], ("ndvi_lag1", 0.50));
    }
}
