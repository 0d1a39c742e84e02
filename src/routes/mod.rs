use axum::{
    Router,
    routing::{get, post, put},
};
use burmuda_submission::{Command, Query};
use tower_http::services::{ServeDir, ServeFile};

mod admin;
mod forms;
mod health;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub command: Command,
    pub query: Query,
}

pub fn router(app_state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(health::health))
        .route("/api/contact", post(forms::contact))
        .route("/api/consultation", post(forms::consultation))
        .route("/api/submissions", get(admin::submissions::list))
        .route("/api/submissions/stats", get(admin::submissions::stats))
        .route(
            "/api/submissions/{id}/read",
            put(admin::submissions::mark_read),
        )
        .route(
            "/api/submissions/{id}/responded",
            put(admin::submissions::mark_responded),
        );

    let router = match &app_state.config.server.public_dir {
        Some(public_dir) => router.fallback_service(
            ServeDir::new(public_dir).fallback(ServeFile::new(public_dir.join("index.html"))),
        ),
        None => router,
    };

    router.with_state(app_state)
}
