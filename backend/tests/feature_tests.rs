//! Tests for classifier feature derivation and observation validation

use proptest::prelude::*;
use shared::{
    derive_features, first_violation, validate_observation, FeatureVector, Observation, Season,
    FEATURE_NAMES, PRECIP_LAG1_FACTOR,
};

/// Observation with every field drawn from its valid domain
fn observation_strategy() -> impl Strategy<Value = Observation> {
    (
        (0.2f64..=0.8, 0.2f64..=0.8, 0.2f64..=0.8),
        0.0f64..=100.0,
        (0.0f64..=500.0, 0.0f64..=1500.0, 0.0f64..=3000.0),
        -100.0f64..=150.0,
        20.0f64..=35.0,
        prop_oneof![Just(Season::Dry), Just(Season::Rainy)],
    )
        .prop_map(
            |(
                (ndvi, ndvi_3month_avg, ndvi_lag1),
                vci,
                (precip_current, precip_3month, precip_6month),
                precip_anomaly,
                temp_mean,
                season,
            )| Observation {
                ndvi,
                ndvi_3month_avg,
                ndvi_lag1,
                vci,
                precip_current,
                precip_3month,
                precip_6month,
                precip_anomaly,
                temp_mean,
                season,
            },
        )
}

// =============================================================================
// Feature vector layout
// =============================================================================

mod feature_layout {
    use super::*;

    #[test]
    fn eleven_features_in_classifier_order() {
        assert_eq!(FEATURE_NAMES.len(), 11);
        assert_eq!(FEATURE_NAMES[0], "ndvi");
        assert_eq!(FEATURE_NAMES[6], "precip_3month_avg");
        assert_eq!(FEATURE_NAMES[9], "precip_lag1");
        assert_eq!(FEATURE_NAMES[10], "ndvi_lag1");
    }

    #[test]
    fn array_matches_named_values() {
        let features = derive_features(&Observation::default());
        let array = features.to_array();

        for (i, (name, value)) in features.named().enumerate() {
            assert_eq!(name, FEATURE_NAMES[i]);
            assert_eq!(value.to_bits(), array[i].to_bits());
        }
    }

    #[test]
    fn dashboard_defaults() {
        let features = FeatureVector::from(&Observation::default());
        assert_eq!(features.precipitation_mm, 80.0);
        assert_eq!(features.precip_lag1, 80.0 * 0.9);
        assert_eq!(features.precip_3month_avg, 250.0 / 3.0);
        assert_eq!(features.vci, 65.0);
    }

    #[test]
    fn out_of_domain_values_pass_through() {
        let obs = Observation {
            precip_current: -40.0,
            vci: 250.0,
            ..Observation::default()
        };
        let features = derive_features(&obs);
        assert_eq!(features.precipitation_mm, -40.0);
        assert_eq!(features.precip_lag1, -40.0 * PRECIP_LAG1_FACTOR);
        assert_eq!(features.vci, 250.0);
    }
}

// =============================================================================
// Input domain validation
// =============================================================================

mod observation_validation {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(validate_observation(&Observation::default()).is_ok());
    }

    #[test]
    fn domain_edges_are_valid() {
        let obs = Observation {
            ndvi: 0.2,
            ndvi_lag1: 0.8,
            vci: 0.0,
            precip_anomaly: -100.0,
            temp_mean: 35.0,
            ..Observation::default()
        };
        assert!(validate_observation(&obs).is_ok());
    }

    #[test]
    fn out_of_domain_field_is_reported() {
        let obs = Observation {
            temp_mean: 40.0,
            ..Observation::default()
        };
        let errors = validate_observation(&obs).unwrap_err();
        let (field, message) = first_violation(&errors).unwrap();
        assert_eq!(field, "temp_mean");
        assert!(message.contains("temp_mean"));
    }

    #[test]
    fn non_finite_value_is_rejected() {
        let obs = Observation {
            precip_3month: f64::NAN,
            ..Observation::default()
        };
        let errors = validate_observation(&obs).unwrap_err();
        assert_eq!(first_violation(&errors).unwrap().0, "precip_3month");
    }
}

// =============================================================================
// Properties
// =============================================================================

mod properties {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// precip_3month_avg is the plain 3-period mean, unrounded
        #[test]
        fn prop_precip_3month_avg_exact(obs in observation_strategy()) {
            let features = derive_features(&obs);
            prop_assert_eq!(features.precip_3month_avg.to_bits(), (obs.precip_3month / 3.0).to_bits());
        }

        /// precip_lag1 is 0.9 of the current rainfall
        #[test]
        fn prop_precip_lag1_exact(obs in observation_strategy()) {
            let features = derive_features(&obs);
            prop_assert_eq!(features.precip_lag1.to_bits(), (obs.precip_current * 0.9).to_bits());
        }

        /// Repeated derivation is bit-identical
        #[test]
        fn prop_derive_is_pure(obs in observation_strategy()) {
            let first = derive_features(&obs).to_array().map(f64::to_bits);
            let second = derive_features(&obs).to_array().map(f64::to_bits);
            prop_assert_eq!(first, second);
        }

        /// Generated observations always pass validation
        #[test]
        fn prop_domain_values_validate(obs in observation_strategy()) {
            prop_assert!(validate_observation(&obs).is_ok());
        }
    }
}
