use log::{info, warn};

use crate::error::ChefError;
use crate::model::ChatRequest;

/// Extract the user's message from a raw request body.
///
/// Returns the trimmed message, or the classified rejection: a body that is
/// absent, not JSON, or without a `message` key; or a message that trims to
/// the empty string. The provider is never contacted on rejection.
pub fn validated_message(body: &[u8]) -> Result<String, ChefError> {
    let request: ChatRequest = serde_json::from_slice(body).map_err(|e| {
        warn!("Request body missing or not parseable as JSON: {e}");
        ChefError::MissingMessage
    })?;

    let Some(message) = request.message else {
        warn!("Request JSON data missing the 'message' key.");
        return Err(ChefError::MissingMessage);
    };

    let trimmed = message.trim();
    if trimmed.is_empty() {
        info!("User message is empty after trimming.");
        return Err(ChefError::EmptyMessage);
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_is_missing_message() {
        assert!(matches!(
            validated_message(b""),
            Err(ChefError::MissingMessage)
        ));
    }

    #[test]
    fn test_non_json_body_is_missing_message() {
        assert!(matches!(
            validated_message(b"just some text"),
            Err(ChefError::MissingMessage)
        ));
    }

    #[test]
    fn test_json_without_message_key() {
        assert!(matches!(
            validated_message(br#"{"text": "pancakes"}"#),
            Err(ChefError::MissingMessage)
        ));
    }

    #[test]
    fn test_null_message_value() {
        assert!(matches!(
            validated_message(br#"{"message": null}"#),
            Err(ChefError::MissingMessage)
        ));
    }

    #[test]
    fn test_whitespace_only_message() {
        assert!(matches!(
            validated_message(br#"{"message": "   \n\t  "}"#),
            Err(ChefError::EmptyMessage)
        ));
    }

    #[test]
    fn test_valid_message_is_trimmed() {
        let message = validated_message(br#"{"message": "  beef stew  "}"#).unwrap();
        assert_eq!(message, "beef stew");
    }

    #[test]
    fn test_extra_keys_are_ignored() {
        let message = validated_message(br#"{"message": "ramen", "tts": true}"#).unwrap();
        assert_eq!(message, "ramen");
    }
}
