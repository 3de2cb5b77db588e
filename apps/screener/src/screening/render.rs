//! Text blocks shown by the shell for each action.

use serde::Serialize;

use crate::models::resume::EvaluationResults;
use crate::screening::selection::ResumeScore;
use crate::screening::statistics::MatchStatistics;

pub const NO_CANDIDATE_MESSAGE: &str = "No candidate found with a match percentage.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedOutput {
    pub heading: Option<String>,
    pub lines: Vec<String>,
}

/// Formats a score with a fractional part always present (`85.0`) and
/// fractions in shortest round-trip form. Exponent forms are Rust's own
/// (`1e16`, `1e-5`), which never come out of a 0-100 percentage.
pub fn format_score(value: f64) -> String {
    format!("{value:?}")
}

pub fn upload_message(count: usize) -> String {
    format!("{count} PDF(s) Uploaded Successfully")
}

pub fn render_analysis(analyses: &EvaluationResults) -> RenderedOutput {
    let mut lines = Vec::with_capacity(analyses.len() * 2);
    for (name, reply) in analyses.iter() {
        lines.push(format!("Resume: {name}"));
        lines.push(reply.to_string());
    }
    RenderedOutput {
        heading: Some("Analysis of Resumes".to_string()),
        lines,
    }
}

pub fn render_match_percentages(scores: &[ResumeScore]) -> RenderedOutput {
    RenderedOutput {
        heading: Some("Match Percentages for All Resumes".to_string()),
        lines: scores
            .iter()
            .map(|s| format!("{}: {}%", s.name, format_score(s.percentage)))
            .collect(),
    }
}

pub fn render_best_candidate(best: Option<&ResumeScore>) -> RenderedOutput {
    match best {
        Some(best) => RenderedOutput {
            heading: Some("Best Candidate".to_string()),
            lines: vec![
                format!("Best Candidate: {}", best.name),
                format!("Match Percentage: {}%", format_score(best.percentage)),
            ],
        },
        None => RenderedOutput {
            heading: None,
            lines: vec![NO_CANDIDATE_MESSAGE.to_string()],
        },
    }
}

pub fn render_statistics(stats: &MatchStatistics) -> RenderedOutput {
    RenderedOutput {
        heading: Some("Statistics".to_string()),
        lines: vec![
            format!("Total Resumes Analyzed: {}", stats.total),
            format!("Highest Match Percentage: {}%", format_score(stats.highest)),
            format!("Average Match Percentage: {}%", format_score(stats.average)),
        ],
    }
}
