//!
//! # Service Layer
//!
//! The controllers delegate every piece of persistence and business logic to
//! the traits in this module; they never touch storage directly. Each trait
//! has a Postgres implementation, and the handlers depend only on
//! `web::Data<dyn …>`, so tests can stand in stub implementations.

pub mod activations;
pub mod events;
pub mod tasks;

pub use activations::PgActivationStore;
pub use events::PgEventService;
pub use tasks::PgTaskService;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{ActivationRecord, Event, EventInput, Message, Task, TaskUpdate};

/// Persistence and business logic for calendar events.
#[async_trait]
pub trait EventService: Send + Sync {
    /// Creates an event. A title is required; length bounds are enforced here,
    /// not in the controller.
    async fn create_event(&self, input: EventInput) -> Result<Event, AppError>;

    /// Updates an event by id. Fields absent from the input keep their stored
    /// value.
    async fn update_event(&self, input: EventInput, event_id: Uuid) -> Result<Event, AppError>;

    /// Deletes an event by id, answering with a confirmation message.
    async fn delete_event(&self, event_id: Uuid) -> Result<Message, AppError>;
}

/// Persistence and business logic for tasks.
#[async_trait]
pub trait TaskService: Send + Sync {
    /// Creates a blank task owned by the acting user.
    async fn create_task(&self, user_id: i32) -> Result<Task, AppError>;

    /// All tasks of a user, newest first.
    async fn get_all_tasks(&self, user_id: i32) -> Result<Vec<Task>, AppError>;

    async fn get_task(&self, task_id: Uuid) -> Result<Task, AppError>;

    async fn update_task(&self, task_id: Uuid, data: TaskUpdate) -> Result<Task, AppError>;

    async fn delete_task(&self, task_id: Uuid) -> Result<Message, AppError>;
}

/// Write-only store for activity-feed entries.
#[async_trait]
pub trait ActivationStore: Send + Sync {
    async fn save(&self, record: ActivationRecord) -> Result<(), AppError>;
}
