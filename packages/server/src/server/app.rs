//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware,
    routing::{get, post, put},
    Router,
};
use openai_client::OpenAIClient;
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domains::auth::JwtService;
use crate::kernel::{OpenAiBridge, ServerDeps};
use crate::server::middleware::jwt_auth_middleware;
use crate::server::routes::{
    analyze_flags_handler, create_candidate, create_interaction, delete_candidate, get_candidate,
    get_profile, health_handler, list_candidates, list_interactions, list_preferences,
    put_preference, put_profile, score_candidate_handler, update_candidate,
};
use crate::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub deps: Arc<ServerDeps>,
}

/// Build the Axum application router
pub fn build_app(pool: PgPool, config: &Config) -> Router {
    let jwt_service = Arc::new(JwtService::new(&config.jwt_secret, config.jwt_issuer.clone()));

    let openai_client = Arc::new(OpenAIClient::new(config.openai_api_key.clone()));
    let ai = Arc::new(OpenAiBridge::new(openai_client, config.openai_model.clone()));

    let deps = Arc::new(ServerDeps::new(
        pool.clone(),
        ai,
        jwt_service.clone(),
    ));

    let state = AppState {
        db_pool: pool,
        deps,
    };

    let cors = cors_layer(&config.allowed_origins);

    let auth_jwt = jwt_service.clone();

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/profile", get(get_profile).put(put_profile))
        .route("/api/candidates", get(list_candidates).post(create_candidate))
        .route(
            "/api/candidates/:id",
            get(get_candidate)
                .put(update_candidate)
                .delete(delete_candidate),
        )
        .route(
            "/api/candidates/:id/interactions",
            get(list_interactions).post(create_interaction),
        )
        .route("/api/candidates/:id/score", post(score_candidate_handler))
        .route("/api/candidates/:id/flags", post(analyze_flags_handler))
        .route("/api/preferences", get(list_preferences))
        .route("/api/preferences/:key", put(put_preference))
        .layer(middleware::from_fn(move |request, next| {
            jwt_auth_middleware(auth_jwt.clone(), request, next)
        }))
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// CORS for the mobile/web clients. With no configured origins the API is
/// open (development); configured origins lock it down.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    if allowed_origins.is_empty() {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unparseable allowed origin");
                None
            }
        })
        .collect();

    base.allow_origin(AllowOrigin::list(origins))
}
