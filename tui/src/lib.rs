//! Model Referee terminal shells
//!
//! The interactive wizard and the scripted showcase demo. Both write plain
//! text to a stream; recommendations always come from `referee_core::decide`.

pub mod demo;
pub mod pacing;
pub mod render;
pub mod wizard;

pub use demo::Demo;
pub use pacing::Pacer;
pub use wizard::Wizard;

use std::io;
use tracing::info;

use referee_core::config::PacingSettings;
use referee_core::Recommendation;

/// Terminal shell result type
pub type Result<T> = std::result::Result<T, Error>;

/// Terminal shell errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Run the wizard against the process stdin and stdout
pub fn run_wizard() -> Result<Recommendation> {
    info!("Starting interactive wizard");
    let stdin = io::stdin();
    let mut wizard = Wizard::new(stdin.lock(), io::stdout().lock());
    wizard.run()
}

/// Run the scripted demo on stdout
pub fn run_demo(pacing: PacingSettings) -> Result<Vec<Recommendation>> {
    info!("Starting scripted demo");
    let mut demo = Demo::new(io::stdout().lock(), Pacer::new(pacing));
    demo.run()
}
