// Prompt texts for the two screening tasks.

/// Qualitative review of one résumé against the job description.
pub const GENERAL_FIT_PROMPT: &str = "\
You are an experienced Technical Human Resource Manager. Your task is to review the provided resume against the job description. \
Please share your professional evaluation on whether the candidate's profile aligns with the role. \
Highlight the strengths and weaknesses of the applicant in relation to the specified job requirements.";

/// ATS-style scan. The reply must open with the percentage so it can be
/// picked up by `percentage::extract_percentage`.
pub const PERCENTAGE_MATCH_PROMPT: &str = "\
You are a skilled ATS (Applicant Tracking System) scanner with a deep understanding of data science and ATS functionality. \
Your task is to evaluate the resume against the provided job description. Give me the percentage match if the resume matches \
the job description. First, the output should come as a percentage, then keywords missing, and lastly, final thoughts.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptVariant {
    GeneralFit,
    PercentageMatch,
}

impl PromptVariant {
    pub fn text(self) -> &'static str {
        match self {
            PromptVariant::GeneralFit => GENERAL_FIT_PROMPT,
            PromptVariant::PercentageMatch => PERCENTAGE_MATCH_PROMPT,
        }
    }
}
