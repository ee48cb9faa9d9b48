use tower_sessions::Session;
use crate::errors::{AppError, AppResult};
use crate::models::{Role, SessionUser};

pub const SESSION_KEY: &str = "user_session";

pub async fn current_user(session: &Session) -> AppResult<SessionUser> {
    session
        .get::<SessionUser>(SESSION_KEY)
        .await
        .map_err(|e| AppError::Auth(format!("Session error: {}", e)))?
        .ok_or_else(|| AppError::Auth("Not authenticated".into()))
}

// Logged in and holding the given role
pub async fn require_role(session: &Session, role: Role) -> AppResult<SessionUser> {
    let user = current_user(session).await?;
    if user.role != role {
        tracing::warn!("{} ({}) tried to use a {} page", user.username, user.role, role);
        return Err(AppError::Forbidden(format!("{} only", role)));
    }
    Ok(user)
}
