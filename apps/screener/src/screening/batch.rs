//! Batch evaluation — runs every résumé past the model against one job description.

use tracing::{debug, info};

use crate::llm_client::{Evaluator, LlmError};
use crate::models::resume::{EvaluationResults, ResumeSet};
use crate::screening::prompts::PromptVariant;

/// Evaluates each résumé with the percentage-match prompt.
///
/// One model call per résumé, strictly sequential, in the set's order. The
/// first failure aborts the batch and no partial result is returned.
pub async fn evaluate_all(
    evaluator: &dyn Evaluator,
    resumes: &ResumeSet,
    job_description: &str,
) -> Result<EvaluationResults, LlmError> {
    evaluate_with(evaluator, resumes, job_description, PromptVariant::PercentageMatch).await
}

/// Evaluates each résumé with the given prompt variant. The job description
/// is sent as the instruction part, the résumé text as the document part.
pub async fn evaluate_with(
    evaluator: &dyn Evaluator,
    resumes: &ResumeSet,
    job_description: &str,
    variant: PromptVariant,
) -> Result<EvaluationResults, LlmError> {
    info!(
        "Evaluating {} resume(s) with {:?} prompt",
        resumes.len(),
        variant
    );

    let mut results = EvaluationResults::new();
    for (name, text) in resumes.iter() {
        let reply = evaluator
            .evaluate(job_description, text, variant.text())
            .await?;
        debug!("Model replied for '{name}' ({} chars)", reply.len());
        results.insert(name, reply);
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedEvaluator;
    use crate::screening::prompts::{GENERAL_FIT_PROMPT, PERCENTAGE_MATCH_PROMPT};

    fn resumes() -> ResumeSet {
        [
            ("carol.pdf", "carol text"),
            ("alice.pdf", "alice text"),
            ("bob.pdf", "bob text"),
        ]
        .into_iter()
        .collect()
    }

    #[tokio::test]
    async fn test_one_call_per_resume_in_order() {
        let evaluator = ScriptedEvaluator::new()
            .reply_for("alice", "Match: 70%")
            .reply_for("bob", "Match: 40%")
            .reply_for("carol", "Match: 90%");

        let results = evaluate_all(&evaluator, &resumes(), "Rust engineer").await.unwrap();

        assert_eq!(evaluator.call_count(), 3);
        assert_eq!(results.names(), vec!["carol.pdf", "alice.pdf", "bob.pdf"]);
        let replies: Vec<&str> = results.iter().map(|(_, reply)| reply).collect();
        assert_eq!(replies, vec!["Match: 90%", "Match: 70%", "Match: 40%"]);

        let calls = evaluator.calls.lock().unwrap();
        let documents: Vec<&str> = calls.iter().map(|(_, d, _)| d.as_str()).collect();
        assert_eq!(documents, vec!["carol text", "alice text", "bob text"]);
        assert!(calls
            .iter()
            .all(|(i, _, p)| i == "Rust engineer" && p == PERCENTAGE_MATCH_PROMPT));
    }

    #[tokio::test]
    async fn test_general_fit_variant_uses_its_prompt() {
        let evaluator = ScriptedEvaluator::new();
        evaluate_with(&evaluator, &resumes(), "", PromptVariant::GeneralFit)
            .await
            .unwrap();

        let calls = evaluator.calls.lock().unwrap();
        assert!(calls.iter().all(|(_, _, p)| p == GENERAL_FIT_PROMPT));
    }

    #[tokio::test]
    async fn test_failure_aborts_remaining_calls() {
        let evaluator = ScriptedEvaluator::new().fail_on_call(1);

        let err = evaluate_all(&evaluator, &resumes(), "jd").await.unwrap_err();

        assert!(matches!(err, LlmError::Api { status: 503, .. }));
        // carol succeeded, alice failed, bob never called
        assert_eq!(evaluator.call_count(), 2);
    }

    #[tokio::test]
    async fn test_empty_set_makes_no_calls() {
        let evaluator = ScriptedEvaluator::new();
        let results = evaluate_all(&evaluator, &ResumeSet::new(), "jd").await.unwrap();
        assert!(results.is_empty());
        assert_eq!(evaluator.call_count(), 0);
    }
}
