#![allow(dead_code)]

use async_trait::async_trait;
use llm::{GenerationRequest, LLMClient, LLMError};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::Notify;

/// Replies from a fixed script and records every request.
#[derive(Default)]
pub struct ScriptedClient {
    replies: Mutex<VecDeque<Result<String, LLMError>>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedClient {
    pub fn replying(text: &str) -> Self {
        let client = Self::default();
        client.push(Ok(text.to_string()));
        client
    }

    pub fn failing(err: LLMError) -> Self {
        let client = Self::default();
        client.push(Err(err));
        client
    }

    pub fn push(&self, reply: Result<String, LLMError>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LLMClient for ScriptedClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String, LLMError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(LLMError::InvalidResponse))
    }
}

/// Holds every call open until [`GatedClient::release`] is called.
pub struct GatedClient {
    reply: String,
    calls: AtomicUsize,
    started: Notify,
    gate: Notify,
}

impl GatedClient {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: AtomicUsize::new(0),
            started: Notify::new(),
            gate: Notify::new(),
        }
    }

    /// Wait until a call has reached the service.
    pub async fn started(&self) {
        self.started.notified().await;
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LLMClient for GatedClient {
    async fn generate(&self, _request: GenerationRequest) -> Result<String, LLMError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.started.notify_one();
        self.gate.notified().await;
        Ok(self.reply.clone())
    }
}
