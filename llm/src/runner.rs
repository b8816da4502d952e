use crate::client::{GeminiClient, DEFAULT_BASE_URL};

/// Default model used for classification and tips.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Create a [`GeminiClient`] using the `GEMINI_URL` and `API_KEY`
/// environment variables.
pub fn client_from_env() -> GeminiClient {
    let url = std::env::var("GEMINI_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
    GeminiClient::new(&url, api_key_from_env().unwrap_or_default())
}

/// Read the API key from `API_KEY`, falling back to `GEMINI_API_KEY`.
pub fn api_key_from_env() -> Option<String> {
    std::env::var("API_KEY")
        .or_else(|_| std::env::var("GEMINI_API_KEY"))
        .ok()
}

/// Read the model name from the `GEMINI_MODEL` environment variable.
pub fn model_from_env() -> String {
    std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into())
}
