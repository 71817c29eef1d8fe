//! Domain models for the Drought Early Warning System

mod features;
mod indicators;
mod observation;
mod outlook;
mod prediction;
mod risk;

pub use features::*;
pub use indicators::*;
pub use observation::*;
pub use outlook::*;
pub use prediction::*;
pub use risk::*;
