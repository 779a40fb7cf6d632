use thiserror::Error;

/// Reasons a [`GenerationRequest`](crate::GenerationRequest) is refused before
/// any prompt is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("jobTitle cannot be empty")]
    EmptyJobTitle,

    #[error("tone '{0}' is not one of casual, friendly, professional, formal")]
    UnknownTone(String),

    #[error("numWords '{0}' must be a positive whole number")]
    InvalidWordCount(String),
}
