use briefcheck_core::models::Tier;

/// Prompt asking for the briefing's requirements grouped by tier.
pub fn build_tier_prompt(briefing_text: &str) -> String {
    format!(
        r#"You are a technical reviewer. Read the project briefing below and list every concrete requirement it states, grouped by difficulty:

- {essential}: what the project must do to be considered delivered at all
- {medium}: expected features of a complete, solid delivery
- {advanced}: features that go beyond the basic expectations
- {expert}: optional stretch goals that demand expert-level work

Briefing:
"""
{briefing}
"""

Respond with exactly one JSON object and nothing else: no prose, no Markdown.
The object must have exactly these four keys, each mapped to an array of short requirement strings (use [] for a tier with no requirements):
{{
  "{essential}": [],
  "{medium}": [],
  "{advanced}": [],
  "{expert}": []
}}"#,
        essential = Tier::Essential.key(),
        medium = Tier::Medium.key(),
        advanced = Tier::Advanced.key(),
        expert = Tier::Expert.key(),
        briefing = briefing_text.trim(),
    )
}

/// Follow-up prompt after an unusable answer: restate the contract and show
/// the model what was wrong.
pub fn build_reformat_prompt(briefing_text: &str, previous: &str, reason: &str) -> String {
    format!(
        r#"{original}

Your previous answer could not be used ({reason}):
"""
{previous}
"""

Answer again with only the JSON object described above."#,
        original = build_tier_prompt(briefing_text),
        reason = reason,
        previous = previous.trim(),
    )
}
