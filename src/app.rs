use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use tower_http::{limit::RequestBodyLimitLayer, services::ServeDir};
use tower_sessions::cookie::SameSite;
use tower_sessions::{MemoryStore, SessionManagerLayer};
use crate::{handlers, middleware, state::AppState};

const SESSION_COOKIE: &str = "session";

// Sessions live in process memory and vanish on restart
fn sessions() -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE)
        .with_same_site(SameSite::Lax)
        .with_secure(false)
}

/// Every page of the dashboard. `max_upload_size` caps any request body,
/// which in practice means the sensor CSV upload.
pub fn build_router(state: AppState, max_upload_size: usize) -> Router {
    let public = Router::new()
        .route("/", get(handlers::serve_login_page))
        .route("/login", post(handlers::handle_login))
        .route("/register", post(handlers::handle_register))
        .route("/logout", get(handlers::handle_logout))
        .nest_service("/static", ServeDir::new("static"));

    let views = Router::new()
        .route("/dashboard", get(handlers::serve_dashboard))
        .route("/jobs/pending", get(handlers::list_pending_jobs))
        .route("/jobs/accept", post(handlers::accept_job))
        .route("/sensors/upload", post(handlers::upload_sensor_data))
        .route("/training/book", post(handlers::book_training));

    public
        .merge(views)
        // require_auth reads the session, so it sits inside the session layer
        .layer(from_fn(middleware::require_auth))
        .layer(sessions())
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_upload_size))
        .with_state(state)
}
