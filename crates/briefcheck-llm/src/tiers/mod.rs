//! Tier classification of briefing requirements.
//!
//! One prompt, one JSON object back with the four `nivel_*` keys. Parsing is
//! strict about shape and lenient about omissions: a missing tier is empty,
//! an unknown key is ignored, anything that is not an array of strings fails.

pub mod classifier;
pub mod parser;
pub mod prompt;

pub use classifier::TierClassifier;
pub use parser::{parse_tier_response, TierParseOutcome};
