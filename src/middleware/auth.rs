use axum::{
    body::Body,
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use crate::handlers::session::SESSION_KEY;
use crate::models::SessionUser;

fn is_public(path: &str) -> bool {
    matches!(path, "/" | "/login" | "/register") || path.starts_with("/static/")
}

// Anything but the login pages and static assets needs a logged-in user
pub async fn require_auth(session: Session, req: Request<Body>, next: Next) -> Response {
    if is_public(req.uri().path()) {
        return next.run(req).await;
    }

    match session.get::<SessionUser>(SESSION_KEY).await {
        Ok(Some(_)) => next.run(req).await,
        Ok(None) => Redirect::to("/").into_response(),
        Err(e) => {
            tracing::warn!("Session lookup failed for {}: {}", req.uri().path(), e);
            Redirect::to("/").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_paths() {
        assert!(is_public("/"));
        assert!(is_public("/login"));
        assert!(is_public("/static/style.css"));
        assert!(!is_public("/dashboard"));
        assert!(!is_public("/static"));
        assert!(!is_public("/jobs/accept"));
    }
}
