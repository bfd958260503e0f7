//! Recording stand-in for the model boundary, used by flow, action and route tests.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::{LlmError, Prompt, PromptBoundary};

pub struct StubBoundary {
    reply: Result<Value, String>,
    calls: Mutex<Vec<Prompt>>,
}

impl StubBoundary {
    pub fn replying(value: Value) -> Self {
        Self {
            reply: Ok(value),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails as an unavailable service (HTTP 503).
    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> Option<Prompt> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl PromptBoundary for StubBoundary {
    async fn run(&self, prompt: &Prompt) -> Result<Value, LlmError> {
        self.calls.lock().unwrap().push(prompt.clone());
        match &self.reply {
            Ok(value) => Ok(value.clone()),
            Err(message) => Err(LlmError::Api {
                status: 503,
                message: message.clone(),
            }),
        }
    }
}
