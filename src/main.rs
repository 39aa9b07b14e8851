//! Model Referee CLI
//!
//! Modes:
//! - web (default): questionnaire page in the browser
//! - wizard: terminal questionnaire
//! - demo: scripted showcase scenarios
//! - recommend / table / config: scripting helpers

use model_referee::cli::{parse_args, run_cli_mode};

fn main() {
    let parsed = match parse_args(std::env::args_os()) {
        Ok(p) => p,
        Err(e) => e.exit(),
    };

    let exit_code = run_cli_mode(parsed);
    std::process::exit(exit_code);
}
