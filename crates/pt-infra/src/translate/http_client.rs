//! HTTP adapter for the translator port.
//!
//! Talks to an OpenAI-compatible chat-completions endpoint. One POST per
//! captured selection, fixed generation parameters, no retry: a failed
//! request is reported once and retry policy stays a caller decision.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use pt_core::error::TranslateError;
use pt_core::ports::TranslatorPort;
use pt_core::settings::TranslationSettings;
use pt_core::translation::TranslationRequest;

const TEMPERATURE: f32 = 0.3;
const MAX_TOKENS: u32 = 8000;
const TOP_P: f32 = 0.7;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Conventional error envelope; servers that omit it still get a
/// `ServerRejected` with the bare status code.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

pub struct HttpTranslator {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl HttpTranslator {
    pub fn new(settings: &TranslationSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("build translation HTTP client")?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
        })
    }
}

#[async_trait]
impl TranslatorPort for HttpTranslator {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: request.system_instruction(),
                },
                ChatMessage {
                    role: "user",
                    content: &request.text,
                },
            ],
            stream: false,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            top_p: TOP_P,
        };

        debug!(endpoint = %self.endpoint, model = %self.model, "sending translation request");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .ok()
                .and_then(|text| extract_error_message(&text));
            return Err(TranslateError::ServerRejected {
                code: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|_| TranslateError::MalformedResponse)?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(TranslateError::MalformedResponse)
    }
}

fn map_transport_error(error: reqwest::Error) -> TranslateError {
    if error.is_timeout() {
        TranslateError::Network("request timed out".to_string())
    } else {
        TranslateError::Network(error.to_string())
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    let envelope: ErrorEnvelope = serde_json::from_str(body).ok()?;
    envelope.error?.message
}
