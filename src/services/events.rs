use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;
use crate::models::{Event, EventInput, Message};
use crate::services::EventService;

/// Postgres-backed event service.
pub struct PgEventService {
    pool: PgPool,
}

impl PgEventService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventService for PgEventService {
    async fn create_event(&self, input: EventInput) -> Result<Event, AppError> {
        input.validate()?;
        let title = input
            .title
            .ok_or_else(|| AppError::BadRequest("title is required".into()))?;

        let event = sqlx::query_as::<_, Event>(
            "INSERT INTO events (id, title, description, date, starttime, endtime, sleipner)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id, title, description, date, starttime, endtime, sleipner, created_at",
        )
        .bind(Uuid::new_v4())
        .bind(&title)
        .bind(&input.description)
        .bind(input.date)
        .bind(input.starttime)
        .bind(input.endtime)
        .bind(input.sleipner.unwrap_or(false))
        .fetch_one(&self.pool)
        .await?;

        log::debug!("created event {}", event.id);
        Ok(event)
    }

    async fn update_event(&self, input: EventInput, event_id: Uuid) -> Result<Event, AppError> {
        input.validate()?;

        // Absent fields keep their stored value.
        let event = sqlx::query_as::<_, Event>(
            "UPDATE events
             SET title = COALESCE($1, title),
                 description = COALESCE($2, description),
                 date = COALESCE($3, date),
                 starttime = COALESCE($4, starttime),
                 endtime = COALESCE($5, endtime),
                 sleipner = COALESCE($6, sleipner)
             WHERE id = $7
             RETURNING id, title, description, date, starttime, endtime, sleipner, created_at",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.date)
        .bind(input.starttime)
        .bind(input.endtime)
        .bind(input.sleipner)
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".into()))?;

        Ok(event)
    }

    async fn delete_event(&self, event_id: Uuid) -> Result<Message, AppError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(event_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Event not found".into()));
        }

        Ok(Message::new("Event deleted successfully"))
    }
}
