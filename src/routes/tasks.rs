use crate::{
    auth::AuthenticatedUserId,
    error::AppError,
    models::{ActivationRecord, TaskCreated, TaskUpdate},
    services::{ActivationStore, TaskService},
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use uuid::Uuid;

/// Creates a new task for the authenticated user.
///
/// This is the one compound operation of the API. After the task service
/// creates the task, and only when the returned record carries an identity,
/// one activity-feed entry is written for the acting user pointing at the new
/// task. A record without an identity skips the feed entry silently; the
/// response is the same success wrapper either way.
///
/// A failed feed write errors the whole request even though the task row
/// already exists; there is no compensating rollback.
///
/// ## Responses:
/// - `200 OK`: `{"status": "success", "message": "Task created successfully!", "task": …}`.
/// - `401 Unauthorized`: missing or invalid authentication token.
/// - `500 Internal Server Error`: task creation or feed write failed.
#[post("")]
pub async fn create_task(
    tasks: web::Data<dyn TaskService>,
    activations: web::Data<dyn ActivationStore>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let task = tasks.create_task(user.0).await?;

    if let Some(task_id) = task.id {
        let record = ActivationRecord::task_created(user.0, task_id, task.title.as_deref());
        activations.save(record).await?;
    }

    Ok(HttpResponse::Ok().json(TaskCreated::new(task)))
}

/// Retrieves all tasks of the authenticated user, newest first.
///
/// ## Responses:
/// - `200 OK`: JSON array of `Task` objects.
/// - `401 Unauthorized`: missing or invalid authentication token.
/// - `500 Internal Server Error`: database or other unexpected failure.
#[get("")]
pub async fn get_tasks(
    tasks: web::Data<dyn TaskService>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let tasks = tasks.get_all_tasks(user.0).await?;

    Ok(HttpResponse::Ok().json(tasks))
}

/// Retrieves a specific task by its ID.
///
/// ## Responses:
/// - `200 OK`: the `Task` as JSON.
/// - `401 Unauthorized`: missing or invalid authentication token.
/// - `404 Not Found`: no task with the given id.
/// - `500 Internal Server Error`: database or other unexpected failure.
#[get("/{task_id}")]
pub async fn get_task(
    tasks: web::Data<dyn TaskService>,
    task_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let task = tasks.get_task(task_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(task))
}

/// Updates a task by its ID.
///
/// The body is a partial update: only present fields change, and unknown
/// fields are ignored.
///
/// ## Responses:
/// - `200 OK`: the updated `Task` as JSON.
/// - `401 Unauthorized`: missing or invalid authentication token.
/// - `404 Not Found`: no task with the given id.
/// - `422 Unprocessable Entity`: the service's field validation failed.
/// - `500 Internal Server Error`: database or other unexpected failure.
#[put("/{task_id}")]
pub async fn update_task(
    tasks: web::Data<dyn TaskService>,
    task_id: web::Path<Uuid>,
    data: web::Json<TaskUpdate>,
) -> Result<impl Responder, AppError> {
    let task = tasks
        .update_task(task_id.into_inner(), data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(task))
}

/// Deletes a task by its ID.
///
/// Activity-feed entries pointing at the task are left in place.
///
/// ## Responses:
/// - `200 OK`: whatever confirmation message the service returns.
/// - `401 Unauthorized`: missing or invalid authentication token.
/// - `404 Not Found`: no task with the given id.
/// - `500 Internal Server Error`: database or other unexpected failure.
#[delete("/{task_id}")]
pub async fn delete_task(
    tasks: web::Data<dyn TaskService>,
    task_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let message = tasks.delete_task(task_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(message))
}
