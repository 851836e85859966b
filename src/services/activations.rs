use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::ActivationRecord;
use crate::services::ActivationStore;

/// Postgres-backed activity-feed store.
///
/// Insert-only from this service; the feed is read and pruned by the frontend
/// API, not here.
pub struct PgActivationStore {
    pool: PgPool,
}

impl PgActivationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivationStore for PgActivationStore {
    async fn save(&self, record: ActivationRecord) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO activations (id, user_id, type, title, activate_id, dis, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(record.id)
        .bind(record.user_id)
        .bind(&record.kind)
        .bind(&record.title)
        .bind(record.activate_id)
        .bind(Json(&record.dis))
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;

        log::debug!("saved activation {} for user {}", record.id, record.user_id);
        Ok(())
    }
}
