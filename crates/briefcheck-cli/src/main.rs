//! briefcheck CLI
//!
//! # Commands
//!
//! - `analyze`: score one repository against a briefing
//! - `batch`: score several repositories against the same briefing
//! - `tiers`: classify a briefing's requirements by tier
//! - `config`: print the effective configuration
//!
//! Reports go to stdout (or files); logs go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use briefcheck_core::config::{BriefcheckConfig, CliOverrides};
use briefcheck_core::errors::{BriefcheckError, BriefcheckErrorCode, ConfigError};
use briefcheck_core::logging::init_tracing;
use clap::{Parser, Subcommand};

mod commands;
mod output;

/// Tiered compliance scoring of repositories against project briefings
#[derive(Parser)]
#[command(name = "briefcheck")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (defaults to ./briefcheck.toml when present)
    #[arg(long, global = true, env = "BRIEFCHECK_CONFIG")]
    config: Option<PathBuf>,

    /// Compliance threshold on raw cosine similarity
    #[arg(long, global = true)]
    threshold: Option<f64>,

    /// Maximum concurrent section embedding calls
    #[arg(long, global = true)]
    max_concurrency: Option<usize>,

    /// Embedding model identifier
    #[arg(long, global = true)]
    embedding_model: Option<String>,

    /// Generative model identifier
    #[arg(long, global = true)]
    generation_model: Option<String>,

    /// Model API key (prefer the BRIEFCHECK_API_KEY environment variable)
    #[arg(long, global = true, hide = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one repository against a briefing
    Analyze(commands::analyze::AnalyzeArgs),
    /// Score several repositories against the same briefing
    ///
    /// Exits non-zero only when every repository failed.
    Batch(commands::batch::BatchArgs),
    /// Classify a briefing's requirements into the four tiers
    Tiers(commands::tiers::TiersArgs),
    /// Print the effective configuration as TOML (secrets omitted)
    Config,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            threshold: self.threshold,
            max_concurrency: self.max_concurrency,
            embedding_model: self.embedding_model.clone(),
            generation_model: self.generation_model.clone(),
            api_key: self.api_key.clone(),
        }
    }

    fn load_config(&self) -> Result<BriefcheckConfig, ConfigError> {
        let overrides = self.overrides();
        let mut config = match &self.config {
            Some(path) => BriefcheckConfig::load_file(path, Some(&overrides))?,
            None => {
                let cwd = std::env::current_dir().map_err(|e| ConfigError::ValidationFailed {
                    field: "working directory".to_string(),
                    message: e.to_string(),
                })?;
                BriefcheckConfig::load(&cwd, Some(&overrides))?
            }
        };
        match self.verbose {
            0 => {}
            1 => config.observability.log_level = "info".to_string(),
            2 => config.observability.log_level = "debug".to_string(),
            _ => config.observability.log_level = "trace".to_string(),
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e.coded_string());
            return ExitCode::from(2);
        }
    };
    init_tracing(&config.observability);

    let result = match cli.command {
        Commands::Analyze(args) => commands::analyze::run(args, config),
        Commands::Batch(args) => commands::batch::run(args, config),
        Commands::Tiers(args) => commands::tiers::run(args, config),
        Commands::Config => commands::config::run(&config),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", describe(&e));
            if is_config_error(&e) {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

/// Configuration problems exit with 2 wherever they surface, including
/// provider construction after the config loaded.
fn is_config_error(error: &anyhow::Error) -> bool {
    error.downcast_ref::<ConfigError>().is_some()
        || matches!(
            error.downcast_ref::<BriefcheckError>(),
            Some(BriefcheckError::Config(_))
        )
}

/// `[CODE] message` for briefcheck errors, the full context chain otherwise.
fn describe(error: &anyhow::Error) -> String {
    if let Some(e) = error.downcast_ref::<BriefcheckError>() {
        return e.coded_string();
    }
    if let Some(e) = error.downcast_ref::<ConfigError>() {
        return e.coded_string();
    }
    format!("{error:#}")
}
