// Error types for each layer, with a result alias for the web layer.
use thiserror::Error;

pub mod response;
pub mod store;
pub mod chart;

pub use store::{StoreError, StoreResult};
pub use chart::{ChartError, ChartResult};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    // Unreadable or corrupt users/tasks files end up here
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("File error: {0}")]
    File(#[from] std::io::Error),

    #[error("Task error: {0}")]
    Task(String),

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    #[error("Booking error: {0}")]
    Booking(String),
}

pub type AppResult<T> = Result<T, AppError>;
