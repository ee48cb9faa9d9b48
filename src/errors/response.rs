use axum::{
    response::{IntoResponse, Response, Redirect},
    http::StatusCode,
};
use crate::errors::{AppError, ChartError};

// Login problems bounce back to the login page; everything else becomes a
// plain-text status response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Authentication errors go back to the login page
            AppError::Auth(msg) => {
                Redirect::to(&format!("/?error={}", urlencoding::encode(&msg)))
                    .into_response()
            }

            AppError::Forbidden(msg) => (
                StatusCode::FORBIDDEN,
                format!("Forbidden: {}", msg)
            ).into_response(),

            AppError::Store(e) => {
                tracing::error!("Store failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Storage error: {}", e)
                ).into_response()
            }

            AppError::File(e) => {
                tracing::error!("File failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("File error: {}", e)
                ).into_response()
            }

            AppError::Task(msg) => (
                StatusCode::NOT_FOUND,
                format!("Task error: {}", msg)
            ).into_response(),

            AppError::Upload(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Upload error: {}", msg)
            ).into_response(),

            AppError::Chart(err) => convert_chart_error(err),

            AppError::Booking(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Booking error: {}", msg)
            ).into_response(),
        }
    }
}

// Bad sensor files are the client's fault, drawing failures are ours
fn convert_chart_error(err: ChartError) -> Response {
    match err {
        ChartError::Drawing(msg) => {
            tracing::error!("Chart drawing failed: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Chart error: {}", msg)
            ).into_response()
        }
        other => (
            StatusCode::BAD_REQUEST,
            format!("Sensor data error: {}", other)
        ).into_response(),
    }
}
