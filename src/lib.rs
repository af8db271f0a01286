pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod server;

pub use config::{ChefConfig, ProviderConfig};
pub use error::ChefError;
pub use model::{ChatRequest, ErrorResponse, RecipePart, RecipeResponse};
pub use provider::{GeminiProvider, GeneratedRecipe, ProviderError, RecipeProvider};
pub use server::{configure_routes, AppState};
