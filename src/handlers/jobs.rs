use axum::{
    extract::{Form, State},
    response::{IntoResponse, Json, Redirect, Response},
};
use serde_json::json;
use tower_sessions::Session;
use crate::errors::{AppError, AppResult};
use crate::models::{AcceptJobForm, Role};
use crate::state::AppState;
use super::session::{current_user, require_role};

pub async fn accept_job(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AcceptJobForm>,
) -> AppResult<Response> {
    let worker = require_role(&session, Role::MaintenanceWorker).await?;

    let accepted = state
        .tasks
        .accept_job(&form.task, &worker.username)?
        .ok_or_else(|| AppError::Task(format!("Job '{}' not found", form.task)))?;

    let message = format!("Job '{}' accepted successfully!", accepted.task);
    Ok(Redirect::to(&format!("/dashboard?message={}", urlencoding::encode(&message))).into_response())
}

// The job board as JSON, for any logged-in user
pub async fn list_pending_jobs(
    State(state): State<AppState>,
    session: Session,
) -> AppResult<Response> {
    current_user(&session).await?;

    let pending = state.tasks.list_pending()?;
    tracing::debug!("{} pending jobs", pending.len());

    let jobs = pending
        .iter()
        .map(|t| {
            json!({
                "task": t.task,
                "due_date": t.due_date,
                "assigned_worker": t.assigned_worker,
                "status": t.status,
            })
        })
        .collect::<Vec<_>>();
    Ok(Json(json!({ "jobs": jobs })).into_response())
}
