//! Shared types and models for the Drought Early Warning System
//!
//! Feature derivation, the rule-based risk score and the trend outlook live
//! here as pure functions so the backend and the WASM module compute
//! identical results.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
