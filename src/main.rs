use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use log::{info, warn};

use ai_chef::config::ChefConfig;
use ai_chef::provider::{GeminiProvider, RecipeProvider};
use ai_chef::server::{configure_routes, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = ChefConfig::load().unwrap_or_else(|e| {
        warn!("Failed to load configuration ({e}); falling back to defaults.");
        ChefConfig::default()
    });

    // A missing API key degrades to offline mode (503 on chat requests)
    // rather than refusing to start.
    let provider: Option<Arc<dyn RecipeProvider>> = match GeminiProvider::new(&config.provider) {
        Ok(provider) => {
            info!("Successfully configured the Gemini API client.");
            Some(Arc::new(provider))
        }
        Err(e) => {
            warn!("Gemini API not configured ({e}). AI features will be unavailable.");
            None
        }
    };

    let state = web::Data::new(AppState { provider });

    info!("Starting The AI Chef on {}:{}", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
