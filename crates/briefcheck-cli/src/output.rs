//! Human-readable rendering and report files.

use std::fmt::Write as _;
use std::path::Path;

use briefcheck_core::models::AnalysisReport;

/// Multi-line summary printed by `analyze`.
pub fn render_summary(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "repository:   {}", report.repository.as_deref().unwrap_or("-"));
    let _ = writeln!(out, "project type: {}", report.project_type);
    let _ = writeln!(
        out,
        "compliance:   {:.2}% ({}/{} sections, {})",
        report.overall_compliance,
        report.compliant_sections,
        report.total_sections,
        status_label(report),
    );

    for (tier, reqs) in report.tier_analysis.requirements.iter() {
        let _ = writeln!(out, "{:<14}{} requirement(s)", format!("{}:", tier.label()), reqs.len());
        let coverage = report
            .tier_analysis
            .coverage
            .as_ref()
            .and_then(|c| c.tier(tier));
        for (i, req) in reqs.iter().enumerate() {
            let mark = match coverage.and_then(|c| c.requirements.get(i)) {
                Some(m) if m.met => "[x]",
                Some(_) => "[ ]",
                None => " - ",
            };
            let _ = writeln!(out, "  {mark} {req}");
        }
    }
    if let Some(coverage) = &report.tier_analysis.coverage {
        let _ = writeln!(out, "weighted score: {:.2}%", coverage.weighted_score);
    }
    out
}

/// One tab-separated line per repository for `batch`.
pub fn render_batch_line(name: &str, report: &AnalysisReport) -> String {
    let weighted = report
        .tier_analysis
        .coverage
        .as_ref()
        .map(|c| format!("{:.2}", c.weighted_score))
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{name}\t{}\t{:.2}\t{weighted}",
        report.project_type, report.overall_compliance
    )
}

/// File name for a repository's report: non-alphanumerics become `_`.
pub fn report_file_name(name: &str) -> String {
    let stem: String = name
        .trim_matches(|c: char| c == '/' || c == '.')
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    let stem = if stem.is_empty() { "report".to_string() } else { stem };
    format!("{stem}.json")
}

pub fn write_report(path: &Path, report: &AnalysisReport) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json + "\n")?;
    Ok(())
}

fn status_label(report: &AnalysisReport) -> &'static str {
    use briefcheck_core::models::ComplianceStatus::*;
    match report.compliance_status {
        Scored => "scored",
        EmptyBriefing => "empty briefing",
        NoSections => "no sections",
        ReferenceUnavailable => "briefing embedding unavailable",
    }
}
