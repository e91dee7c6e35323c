use std::process::ExitCode;

use briefcheck_core::config::BriefcheckConfig;

pub fn run(config: &BriefcheckConfig) -> anyhow::Result<ExitCode> {
    print!("{}", config.to_toml()?);
    if config.api_key.is_some() {
        println!("# api_key is set (not shown)");
    }
    Ok(ExitCode::SUCCESS)
}
