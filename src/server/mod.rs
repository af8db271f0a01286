mod validate;

pub use validate::validated_message;

use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use log::{debug, error, info, warn};

use crate::error::ChefError;
use crate::model::RecipeResponse;
use crate::provider::{build_recipe_prompt, RecipeProvider};

/// Shared, read-only per-process state.
///
/// `provider` is `None` when no API key was available at startup; the
/// service then answers 503 on chat requests instead of crashing.
pub struct AppState {
    pub provider: Option<Arc<dyn RecipeProvider>>,
}

/// Configure the two routes of the service
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/send_message", web::post().to(send_message));
}

/// Landing page, embedded at compile time
async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../../static/index.html"))
}

/// `POST /send_message`: validate the body, call the provider once, and
/// translate the outcome into the fixed external contract.
async fn send_message(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ChefError> {
    info!("--- send_message triggered ---");

    let user_message = validate::validated_message(&body)?;
    info!("User message received: '{user_message}'");

    let Some(provider) = state.provider.as_ref() else {
        warn!("Attempted to send message but the provider is not configured.");
        return Err(ChefError::Offline);
    };

    let prompt = build_recipe_prompt(&user_message);
    let prefix: String = prompt.chars().take(300).collect();
    info!("Constructed prompt for {} (first 300 chars): {prefix}...", provider.provider_name());
    debug!("Full prompt: {prompt}");

    let reply = provider.generate(&prompt).await.map_err(|e| {
        error!("Provider call failed: {e}");
        ChefError::from(e)
    })?;

    if let Some(reason) = &reply.finish_reason {
        info!("Generation finish reason: {reason}");
    }
    if reply.parts.is_empty() {
        warn!("Provider returned no processable content; sending fallback text.");
    }

    let parts = reply.into_parts();
    info!("Processed {} parts for the frontend.", parts.len());

    Ok(HttpResponse::Ok().json(RecipeResponse {
        structured_recipe: parts,
    }))
}
