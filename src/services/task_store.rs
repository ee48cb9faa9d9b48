use std::path::PathBuf;
use crate::errors::StoreResult;
use crate::models::{TaskRecord, TaskStatus};
use super::CsvTable;

/// Maintenance tasks backed by the tasks CSV file.
///
/// Tasks are created by an administrator writing the file (or calling
/// `replace_all`); workers only move them from Pending to In Progress.
#[derive(Clone)]
pub struct TaskStore {
    table: CsvTable<TaskRecord>,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { table: CsvTable::new(path) }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        self.table.columns()
    }

    pub fn load(&self) -> StoreResult<Vec<TaskRecord>> {
        self.table.load()
    }

    pub fn replace_all(&self, tasks: &[TaskRecord]) -> StoreResult<()> {
        self.table.save(tasks)
    }

    pub fn list_pending(&self) -> StoreResult<Vec<TaskRecord>> {
        Ok(self
            .table
            .load()?
            .into_iter()
            .filter(|t| t.status == TaskStatus::Pending)
            .collect())
    }

    /// Assigns the first task named `task` to `worker` and marks it In Progress.
    ///
    /// The current status is not checked, so accepting an already accepted
    /// job silently reassigns it. Returns `None` without touching the file
    /// when no task has that name.
    pub fn accept_job(&self, task: &str, worker: &str) -> StoreResult<Option<TaskRecord>> {
        let mut tasks = self.table.load()?;

        let Some(record) = tasks.iter_mut().find(|t| t.task == task) else {
            tracing::warn!("Task '{}' not found, nothing to accept", task);
            return Ok(None);
        };

        if let Some(previous) = record.assigned_worker.as_deref().filter(|w| *w != worker) {
            tracing::warn!("Task '{}' reassigned from {} to {}", task, previous, worker);
        }
        record.assigned_worker = Some(worker.to_string());
        record.status = TaskStatus::InProgress;
        let updated = record.clone();

        self.table.save(&tasks)?;
        tracing::info!("Task '{}' accepted by {}", task, worker);
        Ok(Some(updated))
    }
}
