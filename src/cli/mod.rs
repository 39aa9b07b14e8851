//! CLI module
//!
//! Provides:
//! - Argument parsing for the shells (web, wizard, demo) and helpers
//! - Configuration loading and logging setup
//! - Mode dispatch

pub mod args;
pub mod dispatch;
pub mod logging;

// Re-exports
pub use args::{parse_args, Args, Mode, RecommendArgs, WebArgs};
pub use dispatch::{run_cli_mode, ExitCode};

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] referee_core::Error),

    #[error("Terminal error: {0}")]
    Terminal(#[from] referee_tui::Error),

    #[error("Server error: {0}")]
    Server(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Exit codes (deterministic)
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, Error>;
