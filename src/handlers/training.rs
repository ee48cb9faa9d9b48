use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use crate::errors::{AppError, AppResult};
use crate::models::BookingForm;
use crate::state::AppState;
use super::session::current_user;

pub async fn book_training(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<BookingForm>,
) -> AppResult<Response> {
    let user = current_user(&session).await?;

    let booked = state
        .catalog
        .book(&form.session)
        .ok_or_else(|| AppError::Booking(format!("No session named '{}'", form.session)))?;

    tracing::info!("{} booked training {} on {}", user.username, booked.session, booked.date);
    let message = format!("Training booked for {}", booked.session);
    Ok(Redirect::to(&format!("/dashboard?message={}", urlencoding::encode(&message))).into_response())
}
