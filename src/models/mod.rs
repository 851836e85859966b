pub mod activation;
pub mod event;
pub mod task;

pub use activation::{ActivationRecord, DisSegment};
pub use event::{Event, EventInput};
pub use task::{Task, TaskCreated, TaskStatus, TaskUpdate};

use serde::{Deserialize, Serialize};

/// Confirmation payload returned by delete operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
