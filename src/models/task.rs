use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Represents the status of a task.
/// Corresponds to the `task_status` SQL enum.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "task_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task is yet to be started.
    Todo,
    /// Task is currently being worked on.
    InProgress,
    /// Task is completed.
    Done,
}

/// Represents a task entity as returned by the task service.
///
/// Every field is optional. The Postgres-backed service always fills the
/// identity, but the contract admits a bare record with no `id`, and the
/// task-create handler keys its activation side effect on exactly that.
/// `None` fields are omitted from JSON, so a bare record serializes as `{}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct Task {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Partial update for a task: named optional fields, `None` meaning "leave
/// unchanged". Unknown body fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct TaskUpdate {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(max = 1000))]
    pub description: Option<String>,

    pub status: Option<TaskStatus>,

    pub due_date: Option<DateTime<Utc>>,
}

/// Response wrapper for task creation.
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskCreated {
    pub status: String,
    pub message: String,
    pub task: Task,
}

impl TaskCreated {
    pub fn new(task: Task) -> Self {
        Self {
            status: "success".to_string(),
            message: "Task created successfully!".to_string(),
            task,
        }
    }
}
