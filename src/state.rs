use crate::config::Config;
use crate::services::{Catalog, TaskStore, UserStore};

// Shared by every handler; each store only holds its file path
#[derive(Clone)]
pub struct AppState {
    pub users: UserStore,
    pub tasks: TaskStore,
    pub catalog: Catalog,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            users: UserStore::new(&config.storage.users_file),
            tasks: TaskStore::new(&config.storage.tasks_file),
            catalog: Catalog::new(config.dashboard.clone()),
        }
    }
}
