//! HTTP client for the Gemini `generateContent` REST endpoint.
//!
//! Sends one single-turn text prompt per call and returns the concatenated
//! text parts of the first candidate. No streaming, no retries.

use std::time::Duration;

use chorus_core::ModelConfig;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::model::{ModelTier, TextModel};

/// Longest slice of an error body kept in [`AnalysisError::Upstream`].
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Client for the Gemini API.
///
/// Constructed once at startup from [`ModelConfig`] and shared by reference;
/// point `base_url` at a mock server in tests.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    chunk_model: String,
    synthesis_model: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GeminiClient {
    /// Creates a client from model settings.
    ///
    /// A timeout is only installed when `config.timeout_secs` is set.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`AnalysisError::InvalidBaseUrl`] if
    /// `config.base_url` does not parse.
    pub fn new(config: &ModelConfig) -> Result<Self, AnalysisError> {
        let mut builder = Client::builder().user_agent("chorus/0.1 (comment-insights)");
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| AnalysisError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url,
            chunk_model: config.chunk_model.clone(),
            synthesis_model: config.synthesis_model.clone(),
        })
    }

    fn model_for(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Fast => &self.chunk_model,
            ModelTier::Premium => &self.synthesis_model,
        }
    }

    fn endpoint(&self, model: &str) -> Result<Url, AnalysisError> {
        let raw = format!("{}/v1beta/models/{model}:generateContent", self.base_url);
        Url::parse(&raw).map_err(|e| AnalysisError::InvalidBaseUrl {
            url: raw,
            reason: e.to_string(),
        })
    }

    /// Sends `prompt` to `model` and returns the response text.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::Http`] on network failure.
    /// - [`AnalysisError::Upstream`] on a non-2xx status.
    /// - [`AnalysisError::Envelope`] if the body is not the expected JSON shape.
    /// - [`AnalysisError::EmptyResponse`] if no text part came back.
    pub async fn generate_content(&self, model: &str, prompt: &str) -> Result<String, AnalysisError> {
        let url = self.endpoint(model)?;
        let request = GenerateRequest {
            contents: [Content {
                role: "user",
                parts: [Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", self.api_key.as_str())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AnalysisError::Upstream {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let envelope: GenerateResponse =
            serde_json::from_str(&body).map_err(AnalysisError::Envelope)?;
        extract_text(envelope).ok_or(AnalysisError::EmptyResponse)
    }
}

fn extract_text(envelope: GenerateResponse) -> Option<String> {
    let text: String = envelope
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .filter_map(|p| p.text)
        .collect();
    (!text.is_empty()).then_some(text)
}

impl TextModel for GeminiClient {
    async fn generate(&self, tier: ModelTier, prompt: &str) -> Result<String, AnalysisError> {
        let model = self.model_for(tier);
        tracing::debug!(model, prompt_chars = prompt.len(), "calling generative model");
        self.generate_content(model, prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> ModelConfig {
        ModelConfig {
            api_key: "test-key".to_string(),
            base_url: base_url.to_string(),
            chunk_model: "fast-model".to_string(),
            synthesis_model: "deep-model".to_string(),
            timeout_secs: None,
        }
    }

    #[test]
    fn endpoint_strips_trailing_slash() {
        let client = GeminiClient::new(&config("https://example.test/")).unwrap();
        let url = client.endpoint("fast-model").unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.test/v1beta/models/fast-model:generateContent"
        );
    }

    #[test]
    fn tiers_route_to_configured_models() {
        let client = GeminiClient::new(&config("https://example.test")).unwrap();
        assert_eq!(client.model_for(ModelTier::Fast), "fast-model");
        assert_eq!(client.model_for(ModelTier::Premium), "deep-model");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = GeminiClient::new(&config("not a url"));
        assert!(matches!(result, Err(AnalysisError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn extract_text_joins_parts_of_first_candidate() {
        let envelope: GenerateResponse = serde_json::from_value(serde_json::json!({
            "candidates": [
                { "content": { "parts": [{ "text": "{\"pos\":" }, { "text": " 1}" }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }))
        .unwrap();
        assert_eq!(extract_text(envelope).as_deref(), Some("{\"pos\": 1}"));
    }

    #[test]
    fn extract_text_is_none_without_candidates() {
        let envelope: GenerateResponse =
            serde_json::from_value(serde_json::json!({ "promptFeedback": {} })).unwrap();
        assert!(extract_text(envelope).is_none());
    }
}
