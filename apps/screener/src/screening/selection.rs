use serde::Serialize;

use crate::models::resume::EvaluationResults;
use crate::screening::percentage::extract_percentage;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeScore {
    pub name: String,
    pub percentage: f64,
}

/// Extracted percentage for every reply, in result order.
pub fn score_all(results: &EvaluationResults) -> Vec<ResumeScore> {
    results
        .iter()
        .map(|(name, reply)| ResumeScore {
            name: name.to_string(),
            percentage: extract_percentage(reply),
        })
        .collect()
}

/// Picks the highest-scoring résumé.
///
/// Only a strict improvement replaces the running best, so the first résumé
/// to reach the maximum wins and a best score of 0 yields no candidate.
pub fn pick_best_candidate(results: &EvaluationResults) -> (Option<String>, f64) {
    let mut best_candidate: Option<&str> = None;
    let mut best_score = 0.0;
    for (name, reply) in results.iter() {
        let percentage = extract_percentage(reply);
        if percentage > best_score {
            best_score = percentage;
            best_candidate = Some(name);
        }
    }
    (best_candidate.map(str::to_string), best_score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_results_have_no_candidate() {
        assert_eq!(pick_best_candidate(&EvaluationResults::new()), (None, 0.0));
    }

    #[test]
    fn test_first_at_maximum_wins() {
        let results: EvaluationResults = [
            ("A", "Match: 60%"),
            ("B", "Match: 85%"),
            ("C", "Match: 85%"),
        ]
        .into_iter()
        .collect();
        assert_eq!(pick_best_candidate(&results), (Some("B".to_string()), 85.0));
    }

    #[test]
    fn test_all_zero_scores_have_no_candidate() {
        let results: EvaluationResults = [("A", "no score"), ("B", "0% match")]
            .into_iter()
            .collect();
        assert_eq!(pick_best_candidate(&results), (None, 0.0));
    }

    #[test]
    fn test_score_all_keeps_order() {
        let results: EvaluationResults = [("z.pdf", "10%"), ("a.pdf", "nothing")]
            .into_iter()
            .collect();
        let scores = score_all(&results);
        assert_eq!(scores[0].name, "z.pdf");
        assert_eq!(scores[0].percentage, 10.0);
        assert_eq!(scores[1].percentage, 0.0);
    }
}
