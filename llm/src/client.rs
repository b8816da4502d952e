//! HTTP client for the Gemini `generateContent` endpoint.
//!
//! This module provides the [`GeminiClient`] type which implements the
//! [`LLMClient`] trait. Each [`GenerationRequest`] becomes one POST; the reply
//! text is the concatenation of the first candidate's text parts.

use crate::request::{GenerationRequest, ResponseFormat};
use crate::traits::{LLMClient, LLMError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Public endpoint used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub struct GeminiClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(base_url: impl AsRef<str>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.as_ref().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "GenerationConfig::is_empty")]
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize, Default)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thinking_config: Option<ThinkingConfig>,
}

impl GenerationConfig<'_> {
    fn is_empty(&self) -> bool {
        self.response_mime_type.is_none()
            && self.response_schema.is_none()
            && self.max_output_tokens.is_none()
            && self.thinking_config.is_none()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

fn build_body(request: &GenerationRequest) -> GenerateContentRequest<'_> {
    let mut config = GenerationConfig {
        max_output_tokens: request.max_output_tokens,
        thinking_config: request
            .thinking_budget
            .map(|thinking_budget| ThinkingConfig { thinking_budget }),
        ..Default::default()
    };
    if let ResponseFormat::Json(schema) = &request.format {
        config.response_mime_type = Some("application/json");
        config.response_schema = Some(schema);
    }
    GenerateContentRequest {
        contents: vec![Content {
            role: "user",
            parts: vec![Part {
                text: &request.prompt,
            }],
        }],
        generation_config: config,
    }
}

fn reply_text(res: GenerateContentResponse) -> Option<String> {
    let content = res.candidates.into_iter().next()?.content?;
    let texts: Vec<String> = content.parts.into_iter().filter_map(|p| p.text).collect();
    if texts.is_empty() {
        None
    } else {
        Some(texts.join(""))
    }
}

#[async_trait]
impl LLMClient for GeminiClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String, LLMError> {
        let url = self.endpoint(&request.model);
        debug!(model = %request.model, "sending generateContent request");
        let res = self
            .http
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&build_body(&request))
            .send()
            .await
            .map_err(|e| LLMError::Network(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(LLMError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = res
            .json()
            .await
            .map_err(|_| LLMError::InvalidResponse)?;
        reply_text(parsed).ok_or(LLMError::InvalidResponse)
    }
}
