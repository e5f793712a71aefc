//! Plain-text and JSON output of a feedback report.

use crate::error::Result;
use crate::feedback::{FeedbackResult, MAX_SCORE, ScoreBand};
use crate::job::JobContext;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const BAR_WIDTH: usize = 20;

fn score_bar(score: u8) -> String {
    let filled = usize::from(score) * BAR_WIDTH / usize::from(MAX_SCORE);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn push_list(out: &mut String, heading: &str, marker: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{}", heading);
    for item in items {
        let _ = writeln!(out, "  {} {}", marker, item);
    }
}

/// Render the report as terminal text.
///
/// Same content as the results screen: overall score and verdict, every
/// section with its band, strengths, improvements and missing keywords.
pub fn render_text(feedback: &FeedbackResult, job: &JobContext) -> String {
    let mut out = String::new();
    let band = feedback.band();

    let _ = writeln!(out, "Your Resume Analysis");
    if job.has_role() {
        let _ = writeln!(out, "Targeting: {}", job.targeting_summary());
    }
    let _ = writeln!(
        out,
        "\nOverall Score: {}/{} {} {}",
        feedback.overall_score,
        MAX_SCORE,
        score_bar(feedback.overall_score),
        band.symbol()
    );
    let _ = writeln!(out, "{}", band.verdict());

    if !feedback.sections.is_empty() {
        let _ = writeln!(out, "\nSection Scores");
    }
    for section in &feedback.sections {
        let _ = writeln!(
            out,
            "\n  {} {:<24} {:>3}/{} {}",
            section.band().symbol(),
            section.title,
            section.score,
            MAX_SCORE,
            score_bar(section.score)
        );
        for line in &section.feedback {
            let _ = writeln!(out, "      {}", line);
        }
        for line in &section.suggestions {
            let _ = writeln!(out, "      -> {}", line);
        }
    }

    push_list(&mut out, "Strengths", ScoreBand::Good.symbol(), &feedback.strengths);
    push_list(&mut out, "Areas for Improvement", ScoreBand::Warning.symbol(), &feedback.improvements);

    if !feedback.missing_keywords.is_empty() {
        let _ = writeln!(out, "\nMissing Keywords");
        let _ = writeln!(out, "  {}", feedback.missing_keywords.join(", "));
    }
    out
}

/// File name for a downloaded report, e.g. `resume-report-data-scientist.json`
pub fn report_file_name(job: &JobContext) -> String {
    let slug = job
        .role()
        .trim()
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "resume-report.json".to_string()
    } else {
        format!("resume-report-{}.json", slug)
    }
}

/// Write the report as pretty JSON
pub fn export_json(feedback: &FeedbackResult, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(feedback)?;
    fs::write(path, json)?;
    Ok(())
}
