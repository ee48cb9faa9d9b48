mod csv_table;
mod user_store;
mod task_store;
mod catalog;

pub use csv_table::{CsvTable, TableRecord};
pub use user_store::UserStore;
pub use task_store::TaskStore;
pub use catalog::Catalog;
