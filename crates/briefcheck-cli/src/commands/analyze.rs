use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use briefcheck_analysis::RequirementsAnalyzer;
use briefcheck_core::config::BriefcheckConfig;
use briefcheck_repo::RepositorySource;
use clap::Args;
use tracing::info;

use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Local path or git URL of the repository
    #[arg(long)]
    pub repo: String,

    /// Branch to clone (remote repositories only)
    #[arg(long)]
    pub branch: Option<String>,

    /// Briefing document (PDF or text)
    #[arg(long)]
    pub briefing: PathBuf,

    /// Write the JSON report to this file
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Print the JSON report instead of the summary
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: AnalyzeArgs, config: BriefcheckConfig) -> anyhow::Result<ExitCode> {
    let analyzer = RequirementsAnalyzer::from_config(config)?;
    let target = RepositorySource::parse(&args.repo, args.branch);
    let report = analyzer.analyze(&target, &args.briefing)?;

    if let Some(path) = &args.output {
        output::write_report(path, &report)
            .with_context(|| format!("writing report to {}", path.display()))?;
        info!(path = %path.display(), "report written");
    }
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", output::render_summary(&report));
    }
    Ok(ExitCode::SUCCESS)
}
