//! Axum router configuration with middleware.
//!
//! Route shapes mirror the original viewer's API so the existing frontend
//! keeps working unchanged. Middleware: CORS, request tracing.

use axum::Router;
use axum::routing::{delete, get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // History pagination
        .route("/history", get(handlers::history::get_history))
        // Users and their conversations
        .route("/users", get(handlers::user::list_users))
        .route("/users/{userId}/chats", get(handlers::user::user_chats))
        .route(
            "/users/{userId}/conversations",
            get(handlers::user::user_chats),
        )
        // Per-chat reads
        .route(
            "/chats/{chatId}/messages",
            get(handlers::chat::chat_messages),
        )
        .route("/chats/{chatId}/votes", get(handlers::chat::chat_votes))
        // Failed-parts digest
        .route("/messages", get(handlers::digest::get_digest))
        // Chat deletion
        .route("/chat", delete(handlers::chat::delete_chat))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint (no auth required).
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
