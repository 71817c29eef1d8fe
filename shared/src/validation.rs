//! Validation utilities for the Drought Early Warning System
//!
//! Domain checks belong to the input layer. The scoring functions in
//! [`crate::models`] accept any value and never call into this module.

use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::Observation;

// ============================================================================
// Observation Domains
// ============================================================================

/// Valid range of one observation field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDomain {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
    pub unit: &'static str,
}

const fn domain(field: &'static str, min: f64, max: f64, unit: &'static str) -> FieldDomain {
    FieldDomain {
        field,
        min,
        max,
        unit,
    }
}

/// Input domains, matching the `range` rules on [`Observation`]
pub const OBSERVATION_DOMAINS: [FieldDomain; 9] = [
    domain("ndvi", 0.2, 0.8, ""),
    domain("ndvi_3month_avg", 0.2, 0.8, ""),
    domain("ndvi_lag1", 0.2, 0.8, ""),
    domain("vci", 0.0, 100.0, "%"),
    domain("precip_current", 0.0, 500.0, "mm"),
    domain("precip_3month", 0.0, 1500.0, "mm"),
    domain("precip_6month", 0.0, 3000.0, "mm"),
    domain("precip_anomaly", -100.0, 150.0, "%"),
    domain("temp_mean", 20.0, 35.0, "°C"),
];

pub fn field_domain(field: &str) -> Option<&'static FieldDomain> {
    OBSERVATION_DOMAINS.iter().find(|d| d.field == field)
}

impl FieldDomain {
    pub fn message(&self) -> String {
        format!(
            "{} must be between {}{} and {}{}",
            self.field, self.min, self.unit, self.max, self.unit
        )
    }
}

// ============================================================================
// Observation Validation
// ============================================================================

/// Check an observation against its input domains.
///
/// Runs the `range` rules and additionally rejects NaN, which range checks
/// let through.
pub fn validate_observation(obs: &Observation) -> Result<(), ValidationErrors> {
    let mut errors = match obs.validate() {
        Ok(()) => ValidationErrors::new(),
        Err(errors) => errors,
    };

    for (field, value) in obs.numeric_fields() {
        if !value.is_finite() {
            errors.add(field, ValidationError::new("finite"));
        }
    }

    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// First failing field (alphabetical) and a readable message for it
pub fn first_violation(errors: &ValidationErrors) -> Option<(&'static str, String)> {
    let mut fields: Vec<&'static str> = errors.field_errors().into_keys().collect();
    fields.sort_unstable();

    let field = fields.into_iter().next()?;
    let message = match field_domain(field) {
        Some(domain) => domain.message(),
        None => format!("{} is invalid", field),
    };
    Some((field, message))
}

// ============================================================================
// Raw Signal Validation
// ============================================================================

/// Reject NaN and infinite values, returning the offending name
pub fn validate_finite(values: &[(&'static str, f64)]) -> Result<(), &'static str> {
    match values.iter().find(|(_, v)| !v.is_finite()) {
        Some(&(name, _)) => Err(name),
        None => Ok(()),
    }
}
