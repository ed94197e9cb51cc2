//! DocSage Core: error types, analysis configuration, capability tiers.

pub mod capabilities;
pub mod config;
pub mod error;

pub use capabilities::LinguisticCapability;
pub use config::AnalysisConfig;
pub use error::{Error, Result};
