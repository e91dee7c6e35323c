use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use briefcheck_analysis::RequirementsAnalyzer;
use briefcheck_core::config::BriefcheckConfig;
use briefcheck_core::errors::BriefcheckErrorCode;
use briefcheck_repo::RepositorySource;
use clap::Args;
use tracing::{info, warn};

use crate::output;

#[derive(Args)]
pub struct BatchArgs {
    /// Briefing document shared by every repository
    #[arg(long)]
    pub briefing: PathBuf,

    /// Repositories to analyze (local paths or git URLs)
    #[arg(long = "repo", required = true, num_args = 1..)]
    pub repos: Vec<String>,

    /// Write one JSON report per repository into this directory
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

pub fn run(args: BatchArgs, config: BriefcheckConfig) -> anyhow::Result<ExitCode> {
    let analyzer = RequirementsAnalyzer::from_config(config)?;
    let targets: Vec<RepositorySource> = args
        .repos
        .iter()
        .map(|r| RepositorySource::parse(r, None))
        .collect();

    if let Some(dir) = &args.output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
    }

    let results = analyzer.analyze_batch(&targets, &args.briefing);
    let mut failed = 0;
    for (target, result) in targets.iter().zip(&results) {
        let name = target.display_name();
        match result {
            Ok(report) => {
                println!("{}", output::render_batch_line(&name, report));
                if let Some(dir) = &args.output_dir {
                    let path = dir.join(output::report_file_name(&name));
                    output::write_report(&path, report)
                        .with_context(|| format!("writing report to {}", path.display()))?;
                    info!(path = %path.display(), "report written");
                }
            }
            Err(e) => {
                failed += 1;
                println!("{name}\tFAILED\t{}", e.coded_string());
            }
        }
    }

    info!(total = results.len(), failed, "batch finished");
    if failed == results.len() {
        warn!("every repository failed");
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
