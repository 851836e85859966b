use crate::{error::AppError, models::EventInput, services::EventService};
use actix_web::{delete, post, put, web, HttpResponse, Responder};
use uuid::Uuid;

/// Creates a new calendar event.
///
/// Forwards the request body to the event service as given; any validation
/// happens there. Answers `201 Created` with the stored event as JSON.
///
/// ## Request Body:
/// A JSON object matching `EventInput`: `title`, `description`, `date`,
/// `starttime`, `endtime`, `sleipner`. All fields are optional at this layer.
///
/// ## Responses:
/// - `201 Created`: the created `Event` as JSON.
/// - `400 Bad Request`: the service rejected the input (e.g. missing title).
/// - `401 Unauthorized`: missing or invalid authentication token.
/// - `422 Unprocessable Entity`: the service's field validation failed.
/// - `500 Internal Server Error`: database or other unexpected failure.
#[post("")]
pub async fn create_event(
    events: web::Data<dyn EventService>,
    input: web::Json<EventInput>,
) -> Result<impl Responder, AppError> {
    let event = events.create_event(input.into_inner()).await?;

    Ok(HttpResponse::Created().json(event))
}

/// Updates an existing event by its ID.
///
/// The `event_id` path parameter is forwarded unchanged to the service along
/// with the body; fields absent from the body keep their stored value.
///
/// ## Responses:
/// - `200 OK`: the updated `Event` as JSON.
/// - `401 Unauthorized`: missing or invalid authentication token.
/// - `404 Not Found`: no event with the given id.
/// - `422 Unprocessable Entity`: the service's field validation failed.
/// - `500 Internal Server Error`: database or other unexpected failure.
#[put("/{event_id}")]
pub async fn update_event(
    events: web::Data<dyn EventService>,
    event_id: web::Path<Uuid>,
    input: web::Json<EventInput>,
) -> Result<impl Responder, AppError> {
    let event = events
        .update_event(input.into_inner(), event_id.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(event))
}

/// Deletes an event by its ID.
///
/// ## Responses:
/// - `200 OK`: whatever confirmation message the service returns.
/// - `401 Unauthorized`: missing or invalid authentication token.
/// - `404 Not Found`: no event with the given id.
/// - `500 Internal Server Error`: database or other unexpected failure.
#[delete("/{event_id}")]
pub async fn delete_event(
    events: web::Data<dyn EventService>,
    event_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let message = events.delete_event(event_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(message))
}
