//! Wire types shared by the job description gateway and its clients.
//!
//! The gateway accepts a [`GenerationRequest`] on [`GENERATE_PATH`] and answers
//! with either a [`GenerationResponse`] or an [`ErrorResponse`].

pub mod error;
pub mod request;
pub mod tone;

pub use error::ValidationError;
pub use request::{GenerationRequest, GenerationResponse, WordCount};
pub use tone::Tone;

use serde::{Deserialize, Serialize};

/// Route served by the gateway and called by the form clients.
pub const GENERATE_PATH: &str = "/api/returnJobDescription";

/// Target length used when the request leaves `numWords` unset.
pub const DEFAULT_WORD_COUNT: u32 = 200;

/// Error envelope returned with every non-2xx gateway response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}
