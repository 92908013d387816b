use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use crate::db::{NewTodo, TodoChanges};
use crate::error::ApiError;
use crate::models::{
    normalize_description, validate_title, ApiResponse, CreateTodoRequest, HealthData, Todo,
    UpdateTodoRequest,
};
use crate::router::AppState;

pub async fn list_todos(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Todo>>>, ApiError> {
    let todos = state.store.list_todos().await?;
    Ok(Json(ApiResponse::ok(todos, "ToDos retrieved successfully")))
}

pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Todo>>), ApiError> {
    let Json(input) = payload.map_err(bad_body)?;

    let title = validate_title(&input.title)
        .ok_or_else(|| ApiError::Validation("Title is required".to_string()))?;
    let description = normalize_description(input.description.as_deref());

    let now = Utc::now();
    let todo = state
        .store
        .insert_todo(NewTodo {
            title,
            description,
            created_at: now,
            updated_at: now,
        })
        .await?;

    tracing::info!(id = %todo.id, title = %todo.title, "todo created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(todo, "ToDo created successfully")),
    ))
}

pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Todo>>, ApiError> {
    let Json(input) = payload.map_err(bad_body)?;

    // Same guard as Create: an empty title never reaches the store.
    let title = validate_title(&input.title)
        .ok_or_else(|| ApiError::Validation("Title is required".to_string()))?;
    let changes = TodoChanges {
        title,
        description: normalize_description(input.description.as_deref()),
        completed: input.completed,
    };

    let todo = state
        .store
        .update_todo(&id, changes)
        .await?
        .ok_or(ApiError::NotFound)?;

    tracing::info!(id = %todo.id, "todo updated");
    Ok(Json(ApiResponse::ok(todo, "ToDo updated successfully")))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    if !state.store.delete_todo(&id).await? {
        return Err(ApiError::NotFound);
    }

    tracing::info!(id = %id, "todo deleted");
    Ok(Json(ApiResponse::message_only("ToDo deleted successfully")))
}

/// Liveness only: no store dependency.
pub async fn health() -> Json<ApiResponse<HealthData>> {
    Json(ApiResponse::ok(
        HealthData {
            message: "ToDo API is running",
            timestamp: Utc::now(),
        },
        "ToDo API is running",
    ))
}

fn bad_body(rejection: JsonRejection) -> ApiError {
    ApiError::Validation(format!("Invalid JSON: {rejection}"))
}
