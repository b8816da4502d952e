//! Abstractions for interacting with generative language model services.
//!
//! The `llm` crate defines a [`LLMClient`] trait along with the
//! [`GeminiClient`] implementation. A [`GenerationRequest`] describes a single
//! prompt, optionally constrained to a JSON schema or a token budget.

pub mod client;
pub mod request;
pub mod runner;
pub mod traits;

pub use client::{GeminiClient, DEFAULT_BASE_URL};
pub use request::{GenerationRequest, ResponseFormat};
pub use runner::{api_key_from_env, client_from_env, model_from_env, DEFAULT_MODEL};
pub use traits::{LLMClient, LLMError};
