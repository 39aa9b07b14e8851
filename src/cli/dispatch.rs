//! CLI mode dispatch
//!
//! Loads configuration, installs logging, then hands over to the chosen
//! shell. The engine itself cannot fail; only ambient problems (config, I/O,
//! binding the port) produce a non-zero exit code.

use std::io::Write;
use tracing::{debug, error, info};

use referee_api::{startup_banner, ApiServer};
use referee_core::comparison::render_table;
use referee_core::config::PacingSettings;
use referee_core::{decide, ConfigManager, RefereeConfig, UserRequirement};

use crate::cli::logging::init_logging;
use crate::cli::{Args, Error, Mode, RecommendArgs, Result, WebArgs, EXIT_FAILURE, EXIT_SUCCESS};

/// Exit code wrapper for CLI operations
pub type ExitCode = i32;

/// Run the selected mode and return the exit code
pub fn run_cli_mode(args: Args) -> ExitCode {
    let manager = match load_config(&args) {
        Ok(manager) => manager,
        Err(e) => {
            eprintln!("Error: {}", e);
            return EXIT_FAILURE;
        }
    };

    init_logging(&manager.get_config().settings.log_level);
    debug!("Using configuration path {:?}", manager.get_config_path());

    let mode = args.mode.unwrap_or_default();

    match run_mode(mode, manager) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            EXIT_FAILURE
        }
    }
}

fn load_config(args: &Args) -> Result<ConfigManager> {
    let manager = match &args.config {
        Some(path) => ConfigManager::with_path(path)?,
        None => ConfigManager::new()?,
    };
    Ok(manager)
}

fn run_mode(mode: Mode, manager: ConfigManager) -> Result<()> {
    match mode {
        Mode::Web(web_args) => run_web(web_args, manager.into_config()),
        Mode::Wizard => {
            referee_tui::run_wizard()?;
            Ok(())
        }
        Mode::Demo { fast } => {
            let pacing = if fast {
                PacingSettings::instant()
            } else {
                manager.into_config().pacing
            };
            referee_tui::run_demo(pacing)?;
            Ok(())
        }
        Mode::Recommend(recommend_args) => {
            let stdout = std::io::stdout();
            run_recommend(&recommend_args, &mut stdout.lock())
        }
        Mode::Table => {
            print!("{}", render_table());
            Ok(())
        }
        Mode::Config { write } => {
            if write {
                manager.save_config()?;
            }
            print!("{}", manager.to_string_pretty()?);
            Ok(())
        }
    }
}

/// Effective server settings after command line overrides
pub fn apply_web_args(web_args: WebArgs, mut config: RefereeConfig) -> RefereeConfig {
    if let Some(host) = web_args.host {
        config.server.host = host;
    }
    if let Some(port) = web_args.port {
        config.server.port = port;
    }
    if web_args.no_browser {
        config.server.open_browser = false;
    }
    config
}

fn run_web(web_args: WebArgs, config: RefereeConfig) -> Result<()> {
    let config = apply_web_args(web_args, config);
    println!("{}", startup_banner(&config.server));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let server = ApiServer::new(config.server);
    runtime
        .block_on(server.start())
        .map_err(|e| Error::Server(e.to_string()))
}

/// Print one recommendation as text or JSON
pub fn run_recommend<W: Write>(args: &RecommendArgs, out: &mut W) -> Result<()> {
    let requirement = UserRequirement::from_raw(
        args.dataset_size.as_deref(),
        args.priority.as_deref(),
        args.hardware.as_deref(),
    );
    let recommendation = decide(&requirement);
    info!(model = %recommendation.model, "Recommendation ready");

    if args.json {
        let report = serde_json::json!({
            "requirement": requirement,
            "recommendation": {
                "model": recommendation.model.display_name(),
                "reason": recommendation.reason,
                "caveats": recommendation
                    .caveats
                    .iter()
                    .map(|c| c.message())
                    .collect::<Vec<_>>(),
            },
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        writeln!(out, "RECOMMENDATION: {}", recommendation.model)?;
        writeln!(out, "Reason: {}", recommendation.reason)?;
        for caveat in &recommendation.caveats {
            writeln!(out, "Note: {}", caveat)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recommend_output(args: RecommendArgs) -> String {
        let mut out = Vec::new();
        run_recommend(&args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_recommend_text() {
        let output = recommend_output(RecommendArgs {
            dataset_size: Some("small".to_string()),
            priority: Some("speed".to_string()),
            hardware: Some("cpu".to_string()),
            json: false,
        });
        assert_eq!(
            output,
            "RECOMMENDATION: Naive Bayes\nReason: Fastest inference on CPU\n"
        );
    }

    #[test]
    fn test_recommend_json() {
        let output = recommend_output(RecommendArgs {
            dataset_size: Some("large".to_string()),
            priority: Some("accuracy".to_string()),
            hardware: Some("gpu".to_string()),
            json: true,
        });
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["recommendation"]["model"], "BERT");
        assert_eq!(
            value["recommendation"]["reason"],
            "Highest accuracy with sufficient data"
        );
        assert_eq!(value["recommendation"]["caveats"], serde_json::json!([]));
        assert_eq!(value["requirement"]["dataset_size"], "large");
        assert_eq!(value["requirement"]["hardware"], "gpu");
    }

    #[test]
    fn test_recommend_defaults_for_unknown_values() {
        let output = recommend_output(RecommendArgs {
            dataset_size: Some("gigantic".to_string()),
            ..Default::default()
        });
        assert!(output.starts_with("RECOMMENDATION: Logistic Regression"));
        assert!(output.contains("Best CPU-only accuracy option"));
    }

    #[test]
    fn test_web_args_override_config() {
        let config = apply_web_args(
            WebArgs {
                host: Some("127.0.0.1".to_string()),
                port: Some(8081),
                no_browser: true,
            },
            RefereeConfig::default(),
        );
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8081);
        assert!(!config.server.open_browser);
    }

    #[test]
    fn test_web_args_default_keep_config() {
        let config = apply_web_args(WebArgs::default(), RefereeConfig::default());
        assert_eq!(config.server, RefereeConfig::default().server);
    }
}
