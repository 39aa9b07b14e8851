//! Model Referee Core Module
//!
//! The core module holds everything the presentation shells share: the model
//! catalog, the user requirement types, the recommendation engine, the
//! comparison table, the canned demo scenarios and configuration.

pub mod catalog;
pub mod comparison;
pub mod config;
pub mod engine;
pub mod requirement;
pub mod scenarios;

// Re-export the types every shell touches
pub use catalog::{ModelKind, ModelProfile, CATALOG};
pub use config::{ConfigManager, RefereeConfig};
pub use engine::{decide, Caveat, Recommendation};
pub use requirement::{Answer, DatasetSize, Hardware, Priority, UserRequirement};
pub use scenarios::{Scenario, SCENARIOS};

/// Core errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(String),

    #[error("Failed to serialize configuration: {0}")]
    ConfigSerialize(String),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown {field} value '{value}'")]
    InvalidChoice { field: &'static str, value: String },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
