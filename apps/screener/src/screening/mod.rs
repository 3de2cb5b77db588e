// Résumé screening: prompt variants, batch evaluation against one job
// description, score extraction, candidate selection and statistics.
// All model calls go through llm_client::Evaluator.

pub mod batch;
pub mod handlers;
pub mod percentage;
pub mod prompts;
pub mod render;
pub mod selection;
pub mod statistics;
