//! External API integrations

pub mod model;

pub use model::ModelClient;
