// ABOUTME: Chat completion client for the studio assistant
// ABOUTME: Prepends the persona instruction, trims history, and forwards one completion request

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

use crate::persona::{Persona, PersonaCatalog, DEFAULT_PERSONA};

pub const OPENAI_API_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TEMPERATURE: f32 = 0.8;
const DEFAULT_MAX_TOKENS: u32 = 150;
const DEFAULT_PRESENCE_PENALTY: f32 = 0.6;
const DEFAULT_FREQUENCY_PENALTY: f32 = 0.3;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Number of trailing history turns forwarded upstream
pub const HISTORY_LIMIT: usize = 5;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Message is required")]
    MissingMessage,

    #[error("OpenAI API key not configured")]
    NoApiKey,

    #[error("OpenAI API error: {body}")]
    Upstream { status: u16, body: String },

    #[error("{0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid response format from OpenAI API")]
    InvalidResponse,
}

pub type ChatResult<T> = Result<T, ChatError>;

/// Tunables for the upstream completion call
#[derive(Debug, Clone)]
pub struct ChatSettings {
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub presence_penalty: f32,
    pub frequency_penalty: f32,
    pub timeout: Duration,
    pub history_limit: usize,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            base_url: OPENAI_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            presence_penalty: DEFAULT_PRESENCE_PENALTY,
            frequency_penalty: DEFAULT_FREQUENCY_PENALTY,
            timeout: DEFAULT_TIMEOUT,
            history_limit: HISTORY_LIMIT,
        }
    }
}

/// One prior turn of the conversation as sent by the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub context: String,
    pub model: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
    max_tokens: u32,
    presence_penalty: f32,
    frequency_penalty: f32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

/// Assistant backed by an OpenAI-compatible chat completion endpoint
pub struct ChatService {
    client: Client,
    api_key: Option<String>,
    settings: ChatSettings,
    personas: PersonaCatalog,
}

impl ChatService {
    pub fn new(
        api_key: Option<String>,
        settings: ChatSettings,
        personas: PersonaCatalog,
    ) -> ChatResult<Self> {
        let api_key = api_key.filter(|key| !key.is_empty());
        if api_key.is_none() {
            info!("OPENAI_API_KEY not set - chat requests will be rejected");
        }

        let client = Client::builder().timeout(settings.timeout).build()?;

        Ok(Self {
            client,
            api_key,
            settings,
            personas,
        })
    }

    /// Get the model being used by this service
    pub fn model(&self) -> &str {
        &self.settings.model
    }

    pub fn personas(&self) -> &PersonaCatalog {
        &self.personas
    }

    /// Assemble the upstream conversation: persona, trailing history, then the new message
    pub fn build_messages(&self, persona: Persona<'_>, request: &ChatRequest) -> Vec<Message> {
        let skip = request
            .history
            .len()
            .saturating_sub(self.settings.history_limit);

        let mut messages = Vec::with_capacity(self.settings.history_limit + 2);
        messages.push(Message {
            role: "system".to_string(),
            content: persona.instruction.to_string(),
        });

        for turn in request.history.iter().skip(skip) {
            let role = if turn.role == "user" { "user" } else { "assistant" };
            messages.push(Message {
                role: role.to_string(),
                content: turn.content.clone(),
            });
        }

        messages.push(Message {
            role: "user".to_string(),
            content: request.message.clone(),
        });

        messages
    }

    /// Forward a single completion request and return the assistant's reply
    pub async fn reply(&self, request: &ChatRequest) -> ChatResult<ChatReply> {
        if request.message.trim().is_empty() {
            return Err(ChatError::MissingMessage);
        }

        let api_key = self.api_key.as_ref().ok_or_else(|| {
            error!("OPENAI_API_KEY not configured");
            ChatError::NoApiKey
        })?;

        let persona = self
            .personas
            .resolve(request.context.as_deref().unwrap_or(DEFAULT_PERSONA));
        let messages = self.build_messages(persona, request);

        let body = CompletionRequest {
            model: &self.settings.model,
            messages: &messages,
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
            presence_penalty: self.settings.presence_penalty,
            frequency_penalty: self.settings.frequency_penalty,
        };

        let url = format!(
            "{}/chat/completions",
            self.settings.base_url.trim_end_matches('/')
        );

        info!(
            "Making chat completion request: model={}, persona={}, turns={}",
            self.settings.model,
            persona.name,
            messages.len()
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    error!("Chat completion request timed out: {}", e);
                } else {
                    error!("Chat completion request failed: {}", e);
                }
                ChatError::RequestFailed(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("OpenAI API error: {} - {}", status, error_text);
            return Err(ChatError::Upstream {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let completion: CompletionResponse = response.json().await?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .ok_or(ChatError::InvalidResponse)?
            .message
            .content;

        Ok(ChatReply {
            response: text.trim().to_string(),
            context: persona.name.to_string(),
            model: self.settings.model.clone(),
        })
    }
}
