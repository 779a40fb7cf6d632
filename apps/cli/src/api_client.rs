//! HTTP client for the generation gateway.

use async_trait::async_trait;
use jobdesc_contract::{ErrorResponse, GenerationRequest, GenerationResponse, GENERATE_PATH};
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message} ({code}, status {status})")]
    Server {
        status: u16,
        code: String,
        message: String,
    },

    #[error("unexpected response body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Turns a filled-in form into generated text.
#[async_trait]
pub trait GenerationApi: Send + Sync {
    /// Returns the gateway's text as received, without trimming.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, ApiError>;
}

pub struct HttpGenerationApi {
    client: Client,
    endpoint: String,
}

impl HttpGenerationApi {
    pub fn new(server_url: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}{GENERATE_PATH}", server_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl GenerationApi for HttpGenerationApi {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, ApiError> {
        debug!("POST {}", self.endpoint);
        let response = self.client.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let (code, message) = match serde_json::from_str::<ErrorResponse>(&body) {
                Ok(e) => (e.error.code, e.error.message),
                Err(_) => ("UNKNOWN".to_string(), body),
            };
            return Err(ApiError::Server {
                status: status.as_u16(),
                code,
                message,
            });
        }

        let parsed: GenerationResponse = serde_json::from_str(&body)?;
        Ok(parsed.job_description)
    }
}
