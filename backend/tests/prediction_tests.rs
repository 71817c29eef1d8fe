//! Tests for interpreting classifier output

use shared::{DroughtCategory, ModelPrediction, PredictionError, CATEGORY_COUNT};

// =============================================================================
// Drought categories
// =============================================================================

mod categories {
    use super::*;

    #[test]
    fn five_ordered_categories() {
        assert_eq!(DroughtCategory::ALL.len(), CATEGORY_COUNT);
        assert!(DroughtCategory::NoDrought < DroughtCategory::ExtremeDrought);
        assert_eq!(DroughtCategory::from_index(0), Some(DroughtCategory::NoDrought));
        assert_eq!(DroughtCategory::from_index(4), Some(DroughtCategory::ExtremeDrought));
        assert_eq!(DroughtCategory::from_index(CATEGORY_COUNT), None);
    }

    #[test]
    fn labels_and_codes() {
        assert_eq!(DroughtCategory::SevereDrought.label(), "Severe Drought");
        assert_eq!(DroughtCategory::SevereDrought.code(), "severe_drought");
        assert_eq!(
            format!("{}", DroughtCategory::LightDrought),
            "Light Drought"
        );
        for category in DroughtCategory::ALL {
            assert!(!category.description().is_empty());
        }
    }

    #[test]
    fn serializes_as_code() {
        let json = serde_json::to_string(&DroughtCategory::ModerateDrought).unwrap();
        assert_eq!(json, "\"moderate_drought\"");
    }
}

// =============================================================================
// Model output contract
// =============================================================================

mod model_output {
    use super::*;

    #[test]
    fn accepts_well_formed_output() {
        let prediction = ModelPrediction::new(3, &[0.0, 0.1, 0.2, 0.65, 0.05]).unwrap();
        assert_eq!(prediction.category, DroughtCategory::SevereDrought);
        assert!((prediction.confidence_percent() - 65.0).abs() < 1e-9);

        let distribution = prediction.distribution();
        assert_eq!(distribution.len(), CATEGORY_COUNT);
        assert_eq!(distribution[0].category, DroughtCategory::NoDrought);
        assert!((distribution[1].percent - 10.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_unknown_category() {
        let err = ModelPrediction::new(7, &[0.2; 5]).unwrap_err();
        assert_eq!(err, PredictionError::CategoryOutOfRange(7));
    }

    #[test]
    fn rejects_wrong_probability_count() {
        let err = ModelPrediction::new(0, &[0.5, 0.5]).unwrap_err();
        assert_eq!(
            err,
            PredictionError::ProbabilityCount {
                expected: 5,
                actual: 2
            }
        );
    }

    #[test]
    fn rejects_negative_probability() {
        let err = ModelPrediction::new(0, &[0.9, -0.1, 0.1, 0.05, 0.05]).unwrap_err();
        assert!(matches!(
            err,
            PredictionError::InvalidProbability { index: 1, .. }
        ));
    }
}
