/// Gateway client — the single point of entry for all chat-completion calls.
///
/// ARCHITECTURAL RULE: No other module may call the AI gateway directly.
/// All upstream LLM traffic MUST go through this module.
///
/// One best-effort round trip per call: no retries, no caching, no streaming.
/// A failed call surfaces to the visitor, who can simply re-ask.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// The model used for all gateway calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "google/gemini-3-flash-preview";
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 500;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("AI service credits exhausted")]
    CreditsExhausted,

    #[error("Gateway error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

impl ChatResponse {
    /// The assistant text of the first choice, if the gateway returned one.
    pub fn answer(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}

/// The single gateway client used by all services.
/// Wraps an OpenAI-style chat-completions endpoint behind bearer auth.
#[derive(Clone)]
pub struct GatewayClient {
    client: Client,
    api_key: String,
    url: String,
}

impl GatewayClient {
    pub fn new(api_key: String, url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            url,
        }
    }

    /// Makes a single chat-completion call with the given system prompt and
    /// user question. Fixed sampling parameters; the caller owns the prompt.
    pub async fn chat(&self, system: &str, question: &str) -> Result<ChatResponse, GatewayError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: question,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Gateway returned {}: {}", status, body);
            return Err(classify_status(status.as_u16(), body));
        }

        let chat_response: ChatResponse = response.json().await?;

        debug!("Gateway call succeeded");

        Ok(chat_response)
    }
}

/// Maps an upstream non-success status onto the error taxonomy.
/// 429 and 402 stay distinguishable so handlers can tell "retry shortly"
/// apart from "temporarily unavailable".
fn classify_status(status: u16, message: String) -> GatewayError {
    match status {
        429 => GatewayError::RateLimited,
        402 => GatewayError::CreditsExhausted,
        _ => GatewayError::Api { status, message },
    }
}
