//! OpenAI-compatible chat-completions client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::CompletionError;

use super::completion::CompletionService;
use super::prompt::SYSTEM_PROMPT;
use super::response::clean_message;

const TEMPERATURE: f32 = 1.0;
const TOP_P: f32 = 1.0;
const MAX_TOKENS: u32 = 8000;

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// Client for the configured chat-completions endpoint.
pub struct ChatCompletionClient {
    http: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl ChatCompletionClient {
    pub fn new(config: &Config) -> Result<Self, CompletionError> {
        if config.api_key.trim().is_empty() {
            return Err(CompletionError::MissingApiKey);
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(CompletionError::Request)?;

        Ok(Self {
            http,
            endpoint: config.api_url.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn request_body<'a>(&'a self, diff: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: diff,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            top_p: TOP_P,
            stream: false,
        }
    }
}

#[async_trait]
impl CompletionService for ChatCompletionClient {
    async fn generate(&self, diff: &str) -> Result<String, CompletionError> {
        info!("Requesting commit message from {} ({})", self.endpoint, self.model);
        debug!("Diff payload: {} bytes", diff.len());

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(diff))
            .send()
            .await
            .map_err(CompletionError::Request)?;

        let status = response.status();
        let body = response.text().await.map_err(CompletionError::Request)?;

        if !status.is_success() {
            return Err(CompletionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        parse_response(&body)
    }
}

/// Extract the first choice's message content from a response body.
fn parse_response(body: &str) -> Result<String, CompletionError> {
    let parsed: ChatResponse = serde_json::from_str(body)
        .map_err(|e| CompletionError::InvalidResponse(e.to_string()))?;

    let content = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| CompletionError::InvalidResponse("no choices returned".to_string()))?
        .message
        .content
        .ok_or_else(|| CompletionError::InvalidResponse("choice has no content".to_string()))?;

    let message = clean_message(&content);
    if message.is_empty() {
        return Err(CompletionError::EmptyMessage);
    }
    Ok(message)
}
