//! Generation pipeline: validate → build prompt → complete → return first choice.

use jobdesc_contract::GenerationRequest;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::generation::prompts::build_prompt;
use crate::llm_client::CompletionProvider;

/// Produces a job description for `request`.
///
/// The returned text is exactly what the provider produced; trimming for
/// display is left to the client.
pub async fn generate_description(
    request: &GenerationRequest,
    llm: &dyn CompletionProvider,
) -> Result<String, AppError> {
    request.validate()?;

    let prompt = build_prompt(request);
    debug!("Rendered prompt ({} chars)", prompt.len());

    let text = llm.complete(&prompt).await?;

    info!(
        job_title = %request.job_title,
        chars = text.len(),
        "Generated job description"
    );

    Ok(text)
}
