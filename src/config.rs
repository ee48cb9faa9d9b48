use serde::Deserialize;
use crate::models::{Kpi, SalesLine, TrainingSession};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub upload: UploadConfig,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub users_file: String,
    pub tasks_file: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UploadConfig {
    pub max_file_size: usize,  // bytes
}

// Read-only content of the dashboard pages
#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub kpis: Vec<Kpi>,
    pub sales: Vec<SalesLine>,
    pub training: Vec<TrainingSession>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config/default")
    }

    /// `APP_SECTION__KEY` environment variables override the file,
    /// e.g. `APP_SERVER__PORT=8080`.
    pub fn load_from(file: &str) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(file))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = Config::load_from("config/default").unwrap();

        assert_eq!(config.storage.users_file, "data/users.csv");
        assert_eq!(config.storage.tasks_file, "data/maintenance_tasks.csv");
        assert_eq!(config.dashboard.kpis.len(), 3);
        assert_eq!(config.dashboard.sales.len(), 3);
        assert_eq!(config.dashboard.training.len(), 2);
    }
}
