//! HTTP handlers

pub mod assessment;
pub mod health;

pub use assessment::*;
pub use health::*;
