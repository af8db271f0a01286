use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::model::ErrorResponse;
use crate::provider::ProviderError;

/// Errors surfaced by the chat endpoint
///
/// Every variant maps to a fixed HTTP status and user-facing message; raw
/// provider errors are logged but never leak into a response.
#[derive(Error, Debug)]
pub enum ChefError {
    /// Request body absent, not JSON, or without a `message` key
    #[error("request body missing or without a 'message' key")]
    MissingMessage,

    /// `message` value empty after trimming whitespace
    #[error("message empty after trimming")]
    EmptyMessage,

    /// Provider client was not configured at startup
    #[error("generation provider not configured")]
    Offline,

    /// The single upstream generation attempt failed
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl ChefError {
    /// The fixed message shown to the user for this error.
    pub fn user_message(&self) -> String {
        match self {
            ChefError::MissingMessage => "No message provided in the request.".to_string(),
            ChefError::EmptyMessage => "Please type a message to The AI Chef.".to_string(),
            ChefError::Offline => {
                "AI Chef (offline): The AI is currently unavailable due to a configuration issue. \
                 Please try again later."
                    .to_string()
            }
            ChefError::Provider(e) => e.user_message(),
        }
    }
}

impl ResponseError for ChefError {
    fn status_code(&self) -> StatusCode {
        match self {
            ChefError::MissingMessage | ChefError::EmptyMessage => StatusCode::BAD_REQUEST,
            ChefError::Offline => StatusCode::SERVICE_UNAVAILABLE,
            ChefError::Provider(ProviderError::InvalidArgument(_)) => StatusCode::BAD_REQUEST,
            ChefError::Provider(ProviderError::DeadlineExceeded(_)) => StatusCode::GATEWAY_TIMEOUT,
            ChefError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.user_message(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_bad_request() {
        assert_eq!(ChefError::MissingMessage.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ChefError::EmptyMessage.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_offline_is_service_unavailable() {
        let err = ChefError::Offline;
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(err.user_message().starts_with("AI Chef (offline):"));
    }

    #[test]
    fn test_provider_status_mapping() {
        let invalid = ChefError::from(ProviderError::InvalidArgument("bad prompt".to_string()));
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);

        let timeout = ChefError::from(ProviderError::DeadlineExceeded("slow".to_string()));
        assert_eq!(timeout.status_code(), StatusCode::GATEWAY_TIMEOUT);

        let api = ChefError::from(ProviderError::Api("boom".to_string()));
        assert_eq!(api.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let other = ChefError::from(ProviderError::Other("??".to_string()));
        assert_eq!(other.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_no_two_causes_share_status_and_message() {
        let errors = [
            ChefError::MissingMessage,
            ChefError::EmptyMessage,
            ChefError::Offline,
            ChefError::from(ProviderError::InvalidArgument(String::new())),
            ChefError::from(ProviderError::DeadlineExceeded(String::new())),
            ChefError::from(ProviderError::Other(String::new())),
        ];

        let mut seen = std::collections::HashSet::new();
        for err in &errors {
            assert!(seen.insert((err.status_code(), err.user_message())));
        }
    }
}
