// Google Tasks API wire types.
// Defines structs for (de)serializing Tasks v1 REST API payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task list: a named, server-owned container of tasks.
///
/// Ids are opaque and unique; titles are NOT guaranteed unique across lists.
/// The server can return partial objects, so both fields default to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
}

/// Completion status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "needsAction")]
    NeedsAction,
    #[serde(rename = "completed")]
    Completed,
}

/// A single to-do item belonging to one task list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub notes: Option<String>,
    pub due: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: TaskStatus,
}

/// Request body for creating a task.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_deserializes_wire_format() {
        let json = r#"{
            "id": "task1",
            "title": "Buy milk",
            "due": "2026-09-01T00:00:00.000Z",
            "status": "needsAction"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, "task1");
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.status, TaskStatus::NeedsAction);
        assert!(task.notes.is_none());
        assert!(task.due.is_some());
    }

    #[test]
    fn test_task_defaults_for_missing_fields() {
        let task: Task = serde_json::from_str(r#"{"id": "t"}"#).unwrap();
        assert_eq!(task.title, "");
        assert_eq!(task.status, TaskStatus::NeedsAction);
    }

    #[test]
    fn test_new_task_skips_absent_fields() {
        let body = NewTask {
            title: "Call mom".to_string(),
            notes: None,
            due: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"title":"Call mom"}"#);
    }
}
