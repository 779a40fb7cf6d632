//! Prompt template for job description generation.

use jobdesc_contract::{GenerationRequest, Tone};

/// Tone named in the prompt when the request leaves it unset.
pub const NEUTRAL_TONE: &str = "neutral";

/// Closing instruction appended to every prompt.
pub const SEO_INSTRUCTION: &str = "The job position should be described in a way that is SEO \
    friendly, highlighting its unique features and benefits.";

/// Renders the prompt sent to the completion provider.
///
/// Optional fields that are empty (or whitespace) drop their clause but keep the
/// surrounding spacing, so the output for a given request is always the same.
/// The request is expected to have passed `validate()`.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let industry_clause = if is_blank(&request.industry) {
        String::new()
    } else {
        format!("in the {} industry", request.industry)
    };

    let tone = match Tone::from_field(&request.tone) {
        Ok(Some(tone)) => tone.as_str(),
        _ => NEUTRAL_TONE,
    };

    let keyword_clause = if is_blank(&request.key_words) {
        String::new()
    } else {
        format!("Incorporate the following keywords: {}.", request.key_words)
    };

    format!(
        "Write a job description for a  {} role {industry_clause} that is around {} words in a {tone} tone. {keyword_clause}. {SEO_INSTRUCTION}",
        request.job_title,
        request.num_words.target(),
    )
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
