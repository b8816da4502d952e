//! Turns free-text reports into a severity/category/summary triple.

use llm::{GenerationRequest, LLMClient};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::types::{Analysis, Category, Severity};

/// Classifies incident descriptions with a generative model.
///
/// [`classify`](Self::classify) never fails: transport errors, malformed
/// replies and schema mismatches all produce [`Analysis::fallback`].
#[derive(Clone)]
pub struct IncidentClassifier {
    client: Arc<dyn LLMClient>,
    model: String,
}

#[derive(Deserialize)]
struct RawAnalysis {
    category: String,
    severity: String,
    summary: String,
}

impl IncidentClassifier {
    pub fn new(client: Arc<dyn LLMClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Build the prompt sent for `description`.
    pub fn prompt(description: &str) -> String {
        format!(
            "Analyze the following neighborhood watch report and classify it. Description: \"{description}\""
        )
    }

    /// JSON schema constraining the model's reply.
    pub fn schema() -> Value {
        let severities: Vec<&str> = Severity::CLASSIFIED.iter().map(|s| s.as_str()).collect();
        let categories: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        json!({
            "type": "OBJECT",
            "properties": {
                "severity": {
                    "type": "STRING",
                    "enum": severities,
                    "description": "The assessed severity of the incident."
                },
                "category": {
                    "type": "STRING",
                    "enum": categories,
                    "description": "The category that best fits the incident."
                },
                "summary": {
                    "type": "STRING",
                    "description": "A concise, one-sentence summary of the incident for a community feed."
                }
            },
            "required": ["severity", "category", "summary"]
        })
    }

    pub async fn classify(&self, description: &str) -> Analysis {
        let request = GenerationRequest::new(&self.model, Self::prompt(description))
            .json_schema(Self::schema());
        let text = match self.client.generate(request).await {
            Ok(text) => text,
            Err(e) => {
                error!("error analyzing incident: {e}");
                return Analysis::fallback();
            }
        };
        match parse_analysis(&text) {
            Some(analysis) => {
                debug!(severity = %analysis.severity, category = %analysis.category, "incident classified");
                analysis
            }
            None => {
                error!("unparseable classification reply: {text:?}");
                Analysis::fallback()
            }
        }
    }
}

/// Parse a reply, re-checking enum membership per field.
fn parse_analysis(text: &str) -> Option<Analysis> {
    let raw: RawAnalysis = serde_json::from_str(text.trim()).ok()?;
    let category = raw.category.parse().unwrap_or_else(|_| {
        warn!("model returned unknown category {:?}", raw.category);
        Category::Other
    });
    let severity = raw.severity.parse().unwrap_or_else(|_| {
        warn!("model returned unknown severity {:?}", raw.severity);
        Severity::Unknown
    });
    Some(Analysis {
        category,
        severity,
        summary: raw.summary.trim().to_string(),
    })
}
