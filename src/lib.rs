pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;

use axum::{routing::get, routing::post, Router};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api::RequestContext;

/// Build the full application router
pub fn app() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(user_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn user_routes() -> Router {
    use handlers::user;

    Router::new()
        .route("/user/login", post(user::login))
        .route("/user/infos", post(user::infos))
}

async fn root(mut ctx: RequestContext) -> axum::response::Response {
    let version = env!("CARGO_PKG_VERSION");

    ctx.resp.data = json!({
        "name": "Worklink API",
        "version": version,
        "description": "Request envelope and token gate for the worklink marketplace",
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "login": "/user/login (public - token acquisition)",
            "infos": "/user/infos (token gated)",
        }
    });
    ctx.finish()
}

async fn health(mut ctx: RequestContext) -> axum::response::Response {
    ctx.resp.data = json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
    });
    ctx.finish()
}
