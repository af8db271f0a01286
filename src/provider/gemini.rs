use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::config::ProviderConfig;
use crate::model::RecipePart;
use crate::provider::{GeneratedRecipe, ProviderError, RecipeProvider};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Client for the Google Gemini `generateContent` API.
///
/// Constructed once at startup and shared read-only across requests. A
/// single call is configured upfront for mixed TEXT/IMAGE output.
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl GeminiProvider {
    /// Create a new Gemini provider from configuration
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let api_key = config.resolve_api_key().ok_or_else(|| {
            ProviderError::Other("GEMINI_API_KEY not found in config or environment".to_string())
        })?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| ProviderError::Other(format!("failed to build HTTP client: {e}")))?;

        Ok(GeminiProvider {
            client,
            api_key,
            base_url,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        GeminiProvider {
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature: 0.7,
            max_tokens: 2000,
        }
    }
}

#[async_trait]
impl RecipeProvider for GeminiProvider {
    fn provider_name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<GeneratedRecipe, ProviderError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&json!({
                "contents": [{
                    "parts": [{ "text": prompt }]
                }],
                "generationConfig": {
                    "temperature": self.temperature,
                    "maxOutputTokens": self.max_tokens,
                    "responseModalities": ["TEXT", "IMAGE"]
                }
            }))
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let body = response.text().await.unwrap_or_default();
            warn!("Gemini API returned status {status}: {body}");
            return Err(classify_http_error(status, &body));
        }

        let decoded: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Other(format!("failed to decode response: {e}")))?;
        debug!("{:?}", decoded);

        let reply = decode_reply(decoded);
        info!("Decoded {} usable parts from Gemini response.", reply.parts.len());
        Ok(reply)
    }
}

/// A reqwest timeout is the deadline-exceeded row of the failure table;
/// every other transport failure stays unclassified.
fn classify_transport_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::DeadlineExceeded(err.to_string())
    } else {
        ProviderError::Other(err.to_string())
    }
}

/// Map a non-2xx API response onto the failure table.
///
/// An invalid API key also arrives as HTTP 400 INVALID_ARGUMENT, but it is a
/// configuration problem, not a prompt problem, so it is routed to the
/// generic API row where the key rule can pick it up.
fn classify_http_error(status: u16, body: &str) -> ProviderError {
    let api_status = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["status"].as_str().map(str::to_string))
        .unwrap_or_default();

    let lowered = body.to_lowercase();
    if lowered.contains("api_key_invalid") || lowered.contains("api key not valid") {
        return ProviderError::Api(body.to_string());
    }

    match (status, api_status.as_str()) {
        (400, _) | (_, "INVALID_ARGUMENT") => ProviderError::InvalidArgument(body.to_string()),
        (504, _) | (_, "DEADLINE_EXCEEDED") => ProviderError::DeadlineExceeded(body.to_string()),
        _ => ProviderError::Api(body.to_string()),
    }
}

// Wire shape of a generateContent response, reduced to the fields this
// service reads.

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Segment>,
}

/// One content segment as the API returns it. The trailing variant absorbs
/// shapes this service does not understand so they are skipped, not errors.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Segment {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    Unknown(serde_json::Value),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

/// Decode the first candidate into ordered parts, preserving provider
/// ordering and dropping segments with neither text nor image data.
fn decode_reply(response: GenerateContentResponse) -> GeneratedRecipe {
    let mut reply = GeneratedRecipe::default();
    let Some(candidate) = response.candidates.into_iter().next() else {
        return reply;
    };
    reply.finish_reason = candidate.finish_reason;

    let segments = candidate.content.map(|c| c.parts).unwrap_or_default();
    for segment in segments {
        match segment {
            Segment::Text { text } if !text.trim().is_empty() => {
                reply.parts.push(RecipePart::text(&text));
            }
            Segment::InlineData { inline_data } if !inline_data.data.is_empty() => {
                reply
                    .parts
                    .push(RecipePart::image(&inline_data.mime_type, &inline_data.data));
            }
            _ => {}
        }
    }

    reply
}
