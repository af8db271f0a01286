/// The fixed instruction block sent with every recipe request.
///
/// Loaded from `prompt.txt` at compile time using the `include_str!` macro,
/// making it easy to edit without dealing with Rust string syntax.
pub const RECIPE_PROMPT: &str = include_str!("prompt.txt");

/// Build the full prompt for one user request, parameterized only by the
/// validated user message.
pub fn build_recipe_prompt(user_message: &str) -> String {
    format!(
        "You are The AI Chef, an expert in creating clear and easy-to-follow recipes. \
         A user is asking for a recipe based on their input: '{user_message}'.\n\n\
         {RECIPE_PROMPT}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_embedded() {
        assert!(!RECIPE_PROMPT.is_empty());

        // Verify it carries the required recipe sections
        assert!(RECIPE_PROMPT.contains("Recipe Title"));
        assert!(RECIPE_PROMPT.contains("Ingredients"));
        assert!(RECIPE_PROMPT.contains("Instructions"));
        assert!(RECIPE_PROMPT.contains("Visuals"));
    }

    #[test]
    fn test_prompt_contains_guardrails() {
        // Vague input asks for clarification; greetings get conversation
        assert!(RECIPE_PROMPT.contains("ask for clarification"));
        assert!(RECIPE_PROMPT.contains("greeting"));
    }

    #[test]
    fn test_build_recipe_prompt_interpolates_message() {
        let prompt = build_recipe_prompt("lasagna for four");
        assert!(prompt.starts_with("You are The AI Chef"));
        assert!(prompt.contains("'lasagna for four'"));
        assert!(prompt.ends_with(RECIPE_PROMPT));
    }
}
