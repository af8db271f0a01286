use serde::{Deserialize, Serialize};

/// One unit of generated content, in the order the provider produced it.
///
/// Serializes to the wire shape the frontend consumes:
/// `{"type": "text", "content": ...}` or
/// `{"type": "image", "content": <data URI>, "mime_type": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecipePart {
    /// A chunk of recipe text, already trimmed.
    Text { content: String },
    /// An inline image embedded as a base64 data URI.
    Image { content: String, mime_type: String },
}

impl RecipePart {
    /// Text part from provider output, trimming surrounding whitespace.
    pub fn text(content: &str) -> Self {
        RecipePart::Text {
            content: content.trim().to_string(),
        }
    }

    /// Image part from a media type and the provider's base64 payload.
    pub fn image(mime_type: &str, base64_data: &str) -> Self {
        RecipePart::Image {
            content: format!("data:{};base64,{}", mime_type, base64_data),
            mime_type: mime_type.to_string(),
        }
    }
}

/// Success payload of `POST /send_message`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeResponse {
    pub structured_recipe: Vec<RecipePart>,
}

/// Error payload shared by every failure path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Inbound body of `POST /send_message`. The `message` key is optional at
/// the serde level so its absence can be reported distinctly from a body
/// that is not JSON at all.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_part_serializes_with_type_tag() {
        let part = RecipePart::text("  Preheat the oven.  ");
        let value = serde_json::to_value(&part).unwrap();
        assert_eq!(
            value,
            json!({"type": "text", "content": "Preheat the oven."})
        );
    }

    #[test]
    fn test_image_part_builds_data_uri() {
        let part = RecipePart::image("image/png", "aGVsbG8=");
        let value = serde_json::to_value(&part).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "image",
                "content": "data:image/png;base64,aGVsbG8=",
                "mime_type": "image/png"
            })
        );
    }

    #[test]
    fn test_recipe_response_wire_shape() {
        let response = RecipeResponse {
            structured_recipe: vec![RecipePart::text("A recipe")],
        };
        let value = serde_json::to_value(&response).unwrap();
        assert!(value["structured_recipe"].is_array());
        assert_eq!(value["structured_recipe"][0]["type"], "text");
    }
}
