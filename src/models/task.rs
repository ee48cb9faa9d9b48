use serde::{Deserialize, Serialize};
use std::fmt;
use crate::services::TableRecord;

// Status column values. Anything the dashboard doesn't know about is kept
// verbatim so a rewrite never loses it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Other(String),
}

impl TaskStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Other(s) => s,
        }
    }
}

impl From<String> for TaskStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Pending" => TaskStatus::Pending,
            "In Progress" => TaskStatus::InProgress,
            "Completed" => TaskStatus::Completed,
            _ => TaskStatus::Other(s),
        }
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    #[serde(rename = "Task")]
    pub task: String,
    #[serde(rename = "Due Date")]
    pub due_date: String,
    #[serde(rename = "Assigned Worker")]
    pub assigned_worker: Option<String>,
    #[serde(rename = "Status")]
    pub status: TaskStatus,
}

impl TaskRecord {
    pub fn pending(task: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            due_date: due_date.into(),
            assigned_worker: None,
            status: TaskStatus::Pending,
        }
    }
}

impl TableRecord for TaskRecord {
    const COLUMNS: &'static [&'static str] = &["Task", "Due Date", "Assigned Worker", "Status"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing() {
        assert_eq!(TaskStatus::from("Pending".to_string()), TaskStatus::Pending);
        assert_eq!(TaskStatus::from("In Progress".to_string()), TaskStatus::InProgress);
        assert_eq!(TaskStatus::from("Completed".to_string()), TaskStatus::Completed);
        // case sensitive, like the rest of the table
        assert_eq!(
            TaskStatus::from("pending".to_string()),
            TaskStatus::Other("pending".to_string())
        );
    }

    #[test]
    fn test_unknown_status_keeps_its_text() {
        let status = TaskStatus::from("On Hold".to_string());
        assert_eq!(status.as_str(), "On Hold");
        assert_eq!(String::from(status), "On Hold");
    }
}
