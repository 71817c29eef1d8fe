//! Business logic services for the Drought Early Warning System

pub mod assessment;

pub use assessment::AssessmentService;
