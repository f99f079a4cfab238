/// Task endpoints
///
/// CRUD over the task collection plus lookup by assigned user.
///
/// # Endpoints
///
/// - `POST   /tasks` - Create task
/// - `GET    /tasks` - List all tasks
/// - `GET    /tasks/:id` - Get task
/// - `PUT    /tasks/:id` - Replace task
/// - `DELETE /tasks/:id` - Delete task
/// - `GET    /tasks/user/:user_id` - Get the first task assigned to a user
///
/// Due dates are checked here before the service is called, so a past due date
/// on create or update is always a `400`, and a missing task on update is a `404`
/// only once the due date has passed that check.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use taskmgr_shared::models::task::TaskItem;

const DUE_DATE_IN_PAST: &str = "Due date cannot be in the past";

/// Create task
///
/// # Endpoint
///
/// ```text
/// POST /tasks
/// Content-Type: application/json
///
/// {
///   "title": "Write report",
///   "description": "Quarterly numbers",
///   "dueDate": "2030-01-01T09:00:00Z",
///   "priority": "High",
///   "status": "Pending",
///   "assignedUserId": 7
/// }
/// ```
///
/// # Response
///
/// `201 Created` with `Location: /tasks/{id}` and the stored task as body.
/// Any `id` in the request is ignored.
///
/// # Errors
///
/// - `400 Bad Request`: Due date is in the past
pub async fn create_task(
    State(state): State<AppState>,
    Json(task): Json<TaskItem>,
) -> ApiResult<impl IntoResponse> {
    if task.is_due_in_past(Utc::now()) {
        tracing::warn!(due_date = %task.due_date, "Attempt to create a task with an invalid due date");
        return Err(ApiError::BadRequest(DUE_DATE_IN_PAST.to_string()));
    }

    let created = state.tasks.create_task(task).await?;
    tracing::info!(task_id = created.id, "Created task");

    let location = format!("/tasks/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

/// List all tasks
///
/// Returns every task in creation order. No filtering or paging.
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<TaskItem>>> {
    tracing::info!("Received request to fetch all tasks");

    let tasks = state.tasks.get_all_tasks().await?;
    Ok(Json(tasks))
}

/// Get task by id
///
/// # Errors
///
/// - `404 Not Found`: No task with this id
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<TaskItem>> {
    tracing::info!(task_id = id, "Received request to fetch task");

    state
        .tasks
        .get_task_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))
}

/// Replace task
///
/// Every field except the id is overwritten. The id in the path wins over any
/// id in the body.
///
/// # Response
///
/// `204 No Content`
///
/// # Errors
///
/// - `400 Bad Request`: Due date is in the past
/// - `404 Not Found`: No task with this id
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(mut task): Json<TaskItem>,
) -> ApiResult<StatusCode> {
    if task.is_due_in_past(Utc::now()) {
        tracing::warn!(task_id = id, due_date = %task.due_date, "Attempt to update a task with an invalid due date");
        return Err(ApiError::BadRequest(DUE_DATE_IN_PAST.to_string()));
    }

    if state.tasks.get_task_by_id(id).await?.is_none() {
        tracing::warn!(task_id = id, "Attempt to update non-existent task");
        return Err(ApiError::NotFound("Task not found".to_string()));
    }

    task.id = id;
    state.tasks.update_task(task).await?;
    tracing::info!(task_id = id, "Updated task");

    Ok(StatusCode::NO_CONTENT)
}

/// Delete task
///
/// # Response
///
/// `204 No Content`
///
/// # Errors
///
/// - `404 Not Found`: No task with this id
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    if state.tasks.get_task_by_id(id).await?.is_none() {
        tracing::warn!(task_id = id, "Attempt to delete non-existent task");
        return Err(ApiError::NotFound("Task not found".to_string()));
    }

    state.tasks.delete_task(id).await?;
    tracing::info!(task_id = id, "Deleted task");

    Ok(StatusCode::NO_CONTENT)
}

/// Get the first task assigned to a user
///
/// Only one task is returned even when several share the same assignee.
///
/// # Errors
///
/// - `404 Not Found`: No task is assigned to this user
pub async fn get_task_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> ApiResult<Json<TaskItem>> {
    tracing::info!(user_id, "Received request to fetch task by user");

    state
        .tasks
        .get_task_by_user_id(user_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("No task assigned to this user".to_string()))
}
