mod gemini;
mod prompt;

pub use gemini::GeminiProvider;
pub use prompt::{build_recipe_prompt, RECIPE_PROMPT};

use async_trait::async_trait;
use thiserror::Error;

use crate::model::RecipePart;

/// Errors from one upstream generation attempt
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The provider rejected the prompt as malformed
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The provider did not answer within its deadline
    #[error("deadline exceeded: {0}")]
    DeadlineExceeded(String),

    /// The provider API reported an error; the detail text drives the
    /// sub-classification table below
    #[error("provider API error: {0}")]
    Api(String),

    /// Anything else that failed during the call or decode
    #[error("unexpected provider failure: {0}")]
    Other(String),
}

const MSG_INVALID_KEY: &str =
    "AI Chef (error): The AI service API key is invalid. Please contact support.";
const MSG_BILLING: &str =
    "AI Chef (error): There's an issue with the project's billing configuration. \
     Please contact support.";
const MSG_MODEL_NOT_FOUND: &str =
    "AI Chef (error): The specified AI model was not found. Please contact support.";
const MSG_QUOTA: &str =
    "AI Chef (error): The AI service quota has been exceeded. Please try again later.";
const MSG_OVERLOADED: &str =
    "AI Chef (error): The AI service is currently overloaded or quota has been hit. \
     Please try again later.";
const MSG_API_FALLBACK: &str =
    "An unexpected error occurred with the AI service. Please try again later.";

/// Sub-classification rules for generic provider API errors.
///
/// Evaluated top to bottom against the lowercased error text; a rule matches
/// when every one of its substrings is present. Extend by appending rules —
/// order is part of the contract.
const API_ERROR_RULES: &[(&[&str], &str)] = &[
    (&["api_key_invalid"], MSG_INVALID_KEY),
    (&["api key not valid"], MSG_INVALID_KEY),
    (&["billing account"], MSG_BILLING),
    (&["model", "not found"], MSG_MODEL_NOT_FOUND),
    (&["quota"], MSG_QUOTA),
    (&["resource_exhausted"], MSG_OVERLOADED),
];

fn classify_api_error(detail: &str) -> &'static str {
    let lowered = detail.to_lowercase();
    API_ERROR_RULES
        .iter()
        .find(|(needles, _)| needles.iter().all(|n| lowered.contains(n)))
        .map(|(_, message)| *message)
        .unwrap_or(MSG_API_FALLBACK)
}

impl ProviderError {
    /// The fixed message shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            ProviderError::InvalidArgument(_) => {
                "There was an issue with the request to the AI (Invalid Argument). \
                 Please try rephrasing your message."
            }
            ProviderError::DeadlineExceeded(_) => {
                "The AI is taking too long to respond. Please try again in a few moments."
            }
            ProviderError::Api(detail) => classify_api_error(detail),
            ProviderError::Other(_) => {
                "Sorry, an unexpected error occurred while trying to generate your recipe. \
                 The development team has been notified."
            }
        }
        .to_string()
    }
}

/// Decoded output of one generation call, before fallback synthesis.
#[derive(Debug, Clone, Default)]
pub struct GeneratedRecipe {
    /// Usable segments in provider order
    pub parts: Vec<RecipePart>,
    /// Provider's stated completion reason, when present
    pub finish_reason: Option<String>,
}

impl GeneratedRecipe {
    /// Collapse into the parts sent to the client.
    ///
    /// A reply with no usable segments is not an error: it becomes exactly
    /// one apologetic text part, safety-flavored when the completion reason
    /// signals a safety block.
    pub fn into_parts(self) -> Vec<RecipePart> {
        if !self.parts.is_empty() {
            return self.parts;
        }

        let content = match &self.finish_reason {
            Some(reason) if reason.to_uppercase().contains("SAFETY") => {
                "I'm sorry, I couldn't generate a response that meets safety guidelines \
                 for your request. Please try rephrasing."
            }
            _ => {
                "I'm sorry, I wasn't able to come up with specific details for that \
                 request. Could you try being more specific?"
            }
        };

        vec![RecipePart::Text {
            content: content.to_string(),
        }]
    }
}

/// One round trip to the generation backend
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Get the provider name (e.g., "gemini")
    fn provider_name(&self) -> &str;

    /// Issue a single generation call for the given prompt. No retries —
    /// each user request yields exactly one upstream attempt.
    async fn generate(&self, prompt: &str) -> Result<GeneratedRecipe, ProviderError>;
}
