use serde_json::Value;

/// Shape the service should give its reply.
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseFormat {
    /// Free text.
    Text,
    /// JSON text conforming to the given schema.
    Json(Value),
}

/// Description of a single generation call.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationRequest {
    /// Model name, e.g. `gemini-2.5-flash`.
    pub model: String,
    /// The prompt sent as the user turn.
    pub prompt: String,
    /// Requested reply format.
    pub format: ResponseFormat,
    /// Upper bound on generated tokens.
    pub max_output_tokens: Option<u32>,
    /// Token budget for the model's internal reasoning.
    pub thinking_budget: Option<u32>,
}

impl GenerationRequest {
    /// Create a free-text request for `model`.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            format: ResponseFormat::Text,
            max_output_tokens: None,
            thinking_budget: None,
        }
    }

    /// Constrain the reply to JSON matching `schema`.
    pub fn json_schema(mut self, schema: Value) -> Self {
        self.format = ResponseFormat::Json(schema);
        self
    }

    /// Cap the number of generated tokens.
    pub fn max_output_tokens(mut self, tokens: u32) -> Self {
        self.max_output_tokens = Some(tokens);
        self
    }

    /// Cap the reasoning budget.
    pub fn thinking_budget(mut self, tokens: u32) -> Self {
        self.thinking_budget = Some(tokens);
        self
    }
}
