pub mod app;
pub mod charts;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;

pub use crate::app::build_router;
pub use crate::config::Config;
pub use crate::state::AppState;
