use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use briefcheck_core::config::BriefcheckConfig;
use briefcheck_core::errors::BriefcheckError;
use briefcheck_core::traits::ITextExtractor;
use briefcheck_extract::DocumentExtractor;
use briefcheck_llm::{create_model, TierClassifier};
use clap::Args;

#[derive(Args)]
pub struct TiersArgs {
    /// Briefing document (PDF or text)
    #[arg(long)]
    pub briefing: PathBuf,
}

pub fn run(args: TiersArgs, config: BriefcheckConfig) -> anyhow::Result<ExitCode> {
    let model = create_model(&config.generation, config.api_key.as_ref())?;
    let text = DocumentExtractor::new()
        .extract(&args.briefing)
        .map_err(BriefcheckError::from)?;
    let tiers = TierClassifier::new(Arc::from(model))
        .with_parse_retries(config.generation.tier_parse_retries)
        .extract_tier_requirements(&text)
        .map_err(BriefcheckError::from)?;
    println!("{}", serde_json::to_string_pretty(&tiers)?);
    Ok(ExitCode::SUCCESS)
}
