use axum::{
    extract::{Form, Query, State},
    response::{Html, IntoResponse, Response, Redirect},
};
use tower_sessions::Session;
use crate::errors::AppResult;
use crate::models::{LoginForm, PageQuery, RegisterForm, Role, SessionUser};
use crate::state::AppState;
use super::render::{load_template, notice};
use super::session::SESSION_KEY;

fn login_redirect(msg: &str) -> Response {
    Redirect::to(&format!("/?error={}", urlencoding::encode(msg))).into_response()
}

pub async fn serve_login_page(Query(query): Query<PageQuery>) -> AppResult<Response> {
    let login_html = load_template("login.html")?
        .replace("{{notice}}", &notice(query.message.as_deref(), query.error.as_deref()))
        .replace("{{farmer}}", Role::FarmerClient.as_str())
        .replace("{{worker}}", Role::MaintenanceWorker.as_str());
    Ok(Html(login_html).into_response())
}

#[axum::debug_handler]
pub async fn handle_login(
    State(state): State<AppState>,
    session: Session,
    Form(login_form): Form<LoginForm>,
) -> AppResult<Response> {
    tracing::info!("Login attempt for user: {}", login_form.username);

    let Some(role) = state.users.authenticate(&login_form.username, &login_form.password)? else {
        tracing::info!("Invalid credentials for user: {}", login_form.username);
        return Ok(login_redirect("Invalid username or password!"));
    };

    let user = SessionUser { username: login_form.username, role };
    if let Err(e) = session.insert(SESSION_KEY, &user).await {
        tracing::error!("Session error: {}", e);
        return Ok(login_redirect("Server error"));
    }

    tracing::info!("Welcome, {}! Role: {}", user.username, user.role);
    Ok(Redirect::to("/dashboard").into_response())
}

pub async fn handle_register(
    State(state): State<AppState>,
    Form(register_form): Form<RegisterForm>,
) -> AppResult<Response> {
    let role = match register_form.role.parse::<Role>() {
        Ok(role) if role.self_registrable() => role,
        _ => {
            tracing::warn!("Rejected registration role '{}'", register_form.role);
            return Ok(login_redirect("Please choose Farmer/Client or Maintenance Worker"));
        }
    };

    state
        .users
        .register(&register_form.username, &register_form.password, role)?;

    let message = format!("User {} registered successfully!", register_form.username);
    Ok(Redirect::to(&format!("/?message={}", urlencoding::encode(&message))).into_response())
}

// Drops the whole session, not just the user entry
pub async fn handle_logout(session: Session) -> Redirect {
    match session.flush().await {
        Ok(()) => tracing::debug!("Session ended"),
        Err(e) => tracing::warn!("Could not end session: {}", e),
    }
    Redirect::to("/")
}
