use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;
use crate::models::{Message, Task, TaskStatus, TaskUpdate};
use crate::services::TaskService;

const TASK_COLUMNS: &str =
    "id, user_id, title, description, status, due_date, created_at, updated_at";

/// Postgres-backed task service.
pub struct PgTaskService {
    pool: PgPool,
}

impl PgTaskService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskService for PgTaskService {
    async fn create_task(&self, user_id: i32) -> Result<Task, AppError> {
        // A freshly created task is blank; the client names it afterwards
        // through update_task.
        let task = sqlx::query_as::<_, Task>(&format!(
            "INSERT INTO tasks (id, user_id, status)
             VALUES ($1, $2, $3)
             RETURNING {TASK_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(TaskStatus::Todo)
        .fetch_one(&self.pool)
        .await?;

        log::debug!("created task {:?} for user {}", task.id, user_id);
        Ok(task)
    }

    async fn get_all_tasks(&self, user_id: i32) -> Result<Vec<Task>, AppError> {
        let tasks = sqlx::query_as::<_, Task>(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    async fn get_task(&self, task_id: Uuid) -> Result<Task, AppError> {
        sqlx::query_as::<_, Task>(&format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = $1"))
            .bind(task_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".into()))
    }

    async fn update_task(&self, task_id: Uuid, data: TaskUpdate) -> Result<Task, AppError> {
        data.validate()?;

        // Partial update: None leaves the stored value untouched.
        sqlx::query_as::<_, Task>(&format!(
            "UPDATE tasks
             SET title = COALESCE($1, title),
                 description = COALESCE($2, description),
                 status = COALESCE($3, status),
                 due_date = COALESCE($4, due_date),
                 updated_at = NOW()
             WHERE id = $5
             RETURNING {TASK_COLUMNS}"
        ))
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.status)
        .bind(data.due_date)
        .bind(task_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Task not found".into()))
    }

    async fn delete_task(&self, task_id: Uuid) -> Result<Message, AppError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(task_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Task not found".into()));
        }

        Ok(Message::new("Task deleted successfully"))
    }
}
