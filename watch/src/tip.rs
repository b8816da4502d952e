//! Safety tip generation and the currently displayed tip.

use llm::{GenerationRequest, LLMClient};
use std::sync::{Arc, Mutex};
use tracing::{error, info};

use crate::busy::BusyFlag;

/// Shown whenever a tip cannot be generated.
pub const FALLBACK_TIP: &str =
    "Always double-check that your doors and windows are locked before leaving the house or going to bed.";

const TIP_PROMPT: &str = "Generate a single, concise, and actionable safety tip for a neighborhood watch community. Make it friendly and proactive. Do not include a title or preamble.";
const MAX_OUTPUT_TOKENS: u32 = 100;
const THINKING_BUDGET: u32 = 50;

/// Generates short safety tips.
#[derive(Clone)]
pub struct SafetyTips {
    client: Arc<dyn LLMClient>,
    model: String,
}

impl SafetyTips {
    pub fn new(client: Arc<dyn LLMClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Produce one tip, or [`FALLBACK_TIP`] if the service fails.
    pub async fn generate(&self) -> String {
        let request = GenerationRequest::new(&self.model, TIP_PROMPT)
            .max_output_tokens(MAX_OUTPUT_TOKENS)
            .thinking_budget(THINKING_BUDGET);
        match self.client.generate(request).await {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => {
                error!("safety tip reply was empty");
                FALLBACK_TIP.to_string()
            }
            Err(e) => {
                error!("error generating safety tip: {e}");
                FALLBACK_TIP.to_string()
            }
        }
    }
}

/// Holds the tip on display and guards against overlapping refreshes.
pub struct TipBoard {
    tips: SafetyTips,
    current: Mutex<String>,
    loading: BusyFlag,
}

impl TipBoard {
    pub fn new(tips: SafetyTips) -> Self {
        Self {
            tips,
            current: Mutex::new(String::new()),
            loading: BusyFlag::new(),
        }
    }

    /// The tip currently on display. Empty until the first refresh lands.
    pub fn current(&self) -> String {
        self.current
            .lock()
            .map(|tip| tip.clone())
            .unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_busy()
    }

    /// Fetch a new tip. Returns `None` if a refresh is already in flight.
    pub async fn refresh(&self) -> Option<String> {
        let _guard = self.loading.try_begin()?;
        let tip = self.tips.generate().await;
        if let Ok(mut current) = self.current.lock() {
            *current = tip.clone();
        }
        info!("safety tip refreshed");
        Some(tip)
    }
}
