use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One segment of an activation's rendered message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisSegment {
    pub bold: bool,
    pub text: String,
}

/// A denormalized activity-feed entry.
///
/// Written once as a side effect of an action (currently only task creation),
/// never read back or updated by this service. `activate_id` is a weak
/// reference to the entity the entry is about: deleting the task does not
/// cascade to its activation records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivationRecord {
    pub id: Uuid,
    pub user_id: i32,
    /// Kind of the action the entry describes, e.g. `"task"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    /// Identity of the entity this entry points at.
    pub activate_id: Uuid,
    /// Ordered display segments making up the rendered feed line.
    pub dis: Vec<DisSegment>,
    pub created_at: DateTime<Utc>,
}

impl ActivationRecord {
    /// Builds the feed entry for a freshly created task.
    ///
    /// Segment 1 is the task's title in bold, falling back to the literal
    /// `"Untitle"` when the title is absent or empty; segment 2 is the fixed
    /// non-bold `"Create a new task"`.
    pub fn task_created(user_id: i32, task_id: Uuid, task_title: Option<&str>) -> Self {
        let shown_title = task_title.filter(|t| !t.is_empty()).unwrap_or("Untitle");

        Self {
            id: Uuid::new_v4(),
            user_id,
            kind: "task".to_string(),
            title: "New Task".to_string(),
            activate_id: task_id,
            dis: vec![
                DisSegment {
                    bold: true,
                    text: shown_title.to_string(),
                },
                DisSegment {
                    bold: false,
                    text: "Create a new task".to_string(),
                },
            ],
            created_at: Utc::now(),
        }
    }
}
