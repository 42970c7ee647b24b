//! Ollama client wrapper for locally hosted models.
//!
//! Use this module when your panelists should talk to an Ollama server over
//! its `/api/chat` endpoint. The wrapper speaks the non-streaming chat format
//! and exposes the same [`ClientWrapper`] interface used by the rest of the
//! crate, so swapping a local model for a remote one only requires a
//! different constructor.
//!
//! # Example
//!
//! ```rust,no_run
//! use aipanel::client_wrapper::{ClientWrapper, Message, Role};
//! use aipanel::clients::ollama::{Model, OllamaClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OllamaClient::new_with_model_enum(Model::DolphinLlama3);
//!     let reply = client
//!         .send_message(&[Message::new(Role::User, "What is the best season?")])
//!         .await?;
//!     println!("{}", reply.content);
//!     Ok(())
//! }
//! ```

use crate::client_wrapper::{ClientWrapper, InferenceError, Message, Role};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Ollama endpoint on a developer machine.
const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Bounded wait before a call is written off as lost.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Client wrapper for an Ollama server's chat API.
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
    pub model: String,
    timeout: Duration,
}

/// Commonly pulled Ollama models (snapshot, any tag string works via
/// [`OllamaClient::new`]).
pub enum Model {
    /// `dolphin-llama3` – uncensored Llama 3 fine-tune, chatty panelist default.
    DolphinLlama3,
    /// `llama3.1` – Meta Llama 3.1 instruct.
    Llama31,
    /// `llama3.2` – smaller Llama 3.2 instruct tier.
    Llama32,
    /// `mistral` – Mistral 7B instruct.
    Mistral,
    /// `phi3` – Microsoft Phi-3 mini.
    Phi3,
    /// `qwen2.5` – Alibaba Qwen 2.5 instruct.
    Qwen25,
    /// `gemma2` – Google Gemma 2 instruct.
    Gemma2,
}

/// Convert a [`Model`] variant into its Ollama tag.
pub fn model_to_string(model: Model) -> String {
    match model {
        Model::DolphinLlama3 => "dolphin-llama3".to_string(),
        Model::Llama31 => "llama3.1".to_string(),
        Model::Llama32 => "llama3.2".to_string(),
        Model::Mistral => "mistral".to_string(),
        Model::Phi3 => "phi3".to_string(),
        Model::Qwen25 => "qwen2.5".to_string(),
        Model::Gemma2 => "gemma2".to_string(),
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage>,
    stream: bool,
}

#[derive(Serialize, Deserialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: Option<WireMessage>,
}

impl OllamaClient {
    /// Create a client for a model tag against `http://localhost:11434`.
    pub fn new(model: &str) -> Self {
        Self::new_with_base_url(model, DEFAULT_BASE_URL)
    }

    /// Create a client from a strongly typed model variant.
    pub fn new_with_model_enum(model: Model) -> Self {
        Self::new(&model_to_string(model))
    }

    /// Create a client pointing at a custom Ollama-compatible base URL.
    pub fn new_with_base_url(model: &str, base_url: &str) -> Self {
        OllamaClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the bounded wait applied to each inference call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl ClientWrapper for OllamaClient {
    async fn send_message(&self, messages: &[Message]) -> Result<Message, InferenceError> {
        let body = ChatRequest {
            model: &self.model,
            messages: messages
                .iter()
                .map(|m| WireMessage {
                    role: m.role.as_str().to_string(),
                    content: m.content.clone(),
                })
                .collect(),
            stream: false,
        };

        let url = format!("{}/api/chat", self.base_url);
        let response = self
            .http
            .post(&url)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                log::error!("OllamaClient::send_message({}): {}", self.model, err);
                if err.is_timeout() {
                    InferenceError::Timeout(self.timeout)
                } else {
                    InferenceError::Upstream(err.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            log::error!(
                "OllamaClient::send_message({}): HTTP {}: {}",
                self.model,
                status,
                detail
            );
            return Err(InferenceError::Upstream(format!("HTTP {}: {}", status, detail)));
        }

        let text = response
            .text()
            .await
            .map_err(|err| InferenceError::Upstream(err.to_string()))?;
        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|err| InferenceError::MalformedResponse(err.to_string()))?;

        match parsed.message {
            Some(message) => Ok(Message::new(Role::Assistant, message.content)),
            None => Err(InferenceError::MalformedResponse(
                "chat response carried no message field".to_string(),
            )),
        }
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
