/// briefcheck version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "BRIEFCHECK_LOG";

/// Environment variables checked, in order, for the model API key.
pub const API_KEY_ENV_VARS: &[&str] = &["BRIEFCHECK_API_KEY", "GROQ_API_KEY", "OPENAI_API_KEY"];

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "briefcheck.toml";

/// User-level config directory under `$HOME`.
pub const USER_CONFIG_DIR: &str = ".briefcheck";

/// Label used when no project type could be assigned.
pub const UNKNOWN_PROJECT_TYPE: &str = "unknown";
