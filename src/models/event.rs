use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Represents a calendar event as stored in the database and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    /// Unique identifier for the event (UUID v4).
    pub id: Uuid,
    /// The title of the event.
    pub title: String,
    /// An optional description for the event.
    pub description: Option<String>,
    /// The day the event takes place.
    pub date: Option<NaiveDate>,
    /// Start time within the day.
    pub starttime: Option<NaiveTime>,
    /// End time within the day.
    pub endtime: Option<NaiveTime>,
    /// Sleipner flag, carried opaquely for the frontend.
    pub sleipner: bool,
    /// Timestamp of when the event was created.
    pub created_at: DateTime<Utc>,
}

/// Input structure for creating or updating an event.
///
/// Every field is optional: fields absent from the request body stay unset,
/// and on update an absent field keeps its stored value. The event service
/// requires a title on create and enforces the length bounds; the handlers
/// forward the body as given.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct EventInput {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(max = 1000))]
    pub description: Option<String>,

    pub date: Option<NaiveDate>,

    pub starttime: Option<NaiveTime>,

    pub endtime: Option<NaiveTime>,

    pub sleipner: Option<bool>,
}
