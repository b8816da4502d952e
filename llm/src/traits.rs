use async_trait::async_trait;
use thiserror::Error;

use crate::request::GenerationRequest;

#[derive(Debug, Error)]
pub enum LLMError {
    #[error("network error: {0}")]
    Network(String),
    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response")]
    InvalidResponse,
}

/// A generative text service answering one request with one reply.
#[async_trait]
pub trait LLMClient: Send + Sync {
    /// Run `request` and return the generated text.
    async fn generate(&self, request: GenerationRequest) -> Result<String, LLMError>;
}
