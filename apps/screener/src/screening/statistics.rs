use serde::Serialize;

use crate::models::resume::EvaluationResults;
use crate::screening::percentage::extract_percentage;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchStatistics {
    pub total: usize,
    pub highest: f64,
    pub average: f64,
}

/// Count, maximum and mean of the extracted percentages.
/// An empty result set reports zeros.
pub fn compute_statistics(results: &EvaluationResults) -> MatchStatistics {
    let scores: Vec<f64> = results
        .iter()
        .map(|(_, reply)| extract_percentage(reply))
        .collect();

    let total = scores.len();
    if total == 0 {
        return MatchStatistics {
            total: 0,
            highest: 0.0,
            average: 0.0,
        };
    }

    let highest = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let average = scores.iter().sum::<f64>() / total as f64;

    MatchStatistics {
        total,
        highest,
        average,
    }
}
