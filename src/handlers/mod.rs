mod auth;
mod dashboard;
mod jobs;
mod sensors;
mod training;
mod render;
pub(crate) mod session;

pub use auth::{serve_login_page, handle_login, handle_register, handle_logout};
pub use dashboard::serve_dashboard;
pub use jobs::{accept_job, list_pending_jobs};
pub use sensors::upload_sensor_data;
pub use training::book_training;
