use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::config::AiConfig;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("API key environment variable {0} is not set")]
    MissingApiKey(String),
    #[error("Request to generation endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Malformed generation response: {0}")]
    Malformed(String),
    #[error("Generation endpoint returned an empty completion")]
    EmptyCompletion,
}

/// Transport seam between the assistant and a text-completion endpoint.
///
/// One prompt goes out, one completion comes back. Implementations carry the
/// vendor-specific request and response shapes; callers never see them.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Client for a Gemini-style `generateContent` endpoint.
///
/// The API key is read from the environment on every call, so a key rotated
/// while the process is running is picked up without a restart. No timeout
/// and no retry: each call is a single round trip.
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key_env: String,
}

impl GeminiClient {
    pub fn new(endpoint: &str, model: &str, api_key_env: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key_env: api_key_env.to_string(),
        }
    }

    pub fn from_config(config: &AiConfig) -> Self {
        Self::new(&config.endpoint, &config.model, &config.api_key_env)
    }

    fn request_url(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.endpoint, self.model)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let api_key = std::env::var(&self.api_key_env)
            .map_err(|_| GenerationError::MissingApiKey(self.api_key_env.clone()))?;

        let body = GenerateContentRequest {
            contents: vec![Content { parts: vec![Part { text: prompt.to_string() }] }],
        };

        let response = self
            .http
            .post(self.request_url())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let completion: GenerateContentResponse = response.json().await?;

        let text = completion
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().map(|p| p.text).collect::<Vec<_>>().join(""))
            .ok_or_else(|| GenerationError::Malformed("no candidate content".to_string()))?;

        if text.is_empty() {
            return Err(GenerationError::EmptyCompletion);
        }
        Ok(text)
    }
}
