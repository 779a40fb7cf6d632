//! Axum route handlers for the Generation API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use jobdesc_contract::{GenerationRequest, GenerationResponse};

use crate::errors::AppError;
use crate::generation::generator::generate_description;
use crate::state::AppState;

/// POST /api/returnJobDescription
///
/// Renders the prompt from the form fields and returns the provider's first
/// completion. 4xx on an undecodable body or invalid input, 500 when the
/// provider call fails. Every failure uses the error envelope.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerationResponse>, AppError> {
    let Json(request) = payload?;
    let job_description = generate_description(&request, state.llm.as_ref()).await?;
    Ok(Json(GenerationResponse { job_description }))
}
