//! CLI argument parsing
//!
//! Subcommands pick the shell: `web` (default), `wizard`, `demo`, plus the
//! scripting helpers `recommend`, `table` and `config`.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Parsed CLI arguments
#[derive(Debug, Parser)]
#[command(name = "model-referee")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Pick a fake news detection model for your constraints", long_about = None)]
pub struct Args {
    /// Configuration file (TOML, JSON or YAML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Shell to run (web when omitted)
    #[command(subcommand)]
    pub mode: Option<Mode>,
}

/// CLI modes
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Mode {
    /// Serve the questionnaire page and open it in a browser
    Web(WebArgs),

    /// Answer the three questions in the terminal
    Wizard,

    /// Replay the canned showcase scenarios
    Demo {
        /// Skip all typing and pause delays
        #[arg(long)]
        fast: bool,
    },

    /// Recommend a model for the given answers and exit
    Recommend(RecommendArgs),

    /// Print the model comparison table
    Table,

    /// Print the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        write: bool,
    },
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Web(WebArgs::default())
    }
}

/// Options for the web shell
#[derive(Debug, Clone, Default, PartialEq, ClapArgs)]
pub struct WebArgs {
    /// Listen address (overrides the configuration)
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port (overrides the configuration)
    #[arg(long)]
    pub port: Option<u16>,

    /// Do not open a browser window
    #[arg(long)]
    pub no_browser: bool,
}

/// Answers for one-shot recommendations
///
/// Values are plain text; anything unrecognised falls back to the default
/// answer instead of failing.
#[derive(Debug, Clone, Default, PartialEq, ClapArgs)]
pub struct RecommendArgs {
    /// small, medium or large
    #[arg(long)]
    pub dataset_size: Option<String>,

    /// speed, accuracy or simplicity
    #[arg(long)]
    pub priority: Option<String>,

    /// cpu or gpu
    #[arg(long)]
    pub hardware: Option<String>,

    /// Output JSON (for scripting)
    #[arg(long)]
    pub json: bool,
}

/// Parse CLI arguments from an iterator (program name first)
pub fn parse_args<I, T>(args: I) -> std::result::Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Args::try_parse_from(args)
}
