use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted todo as it appears on the wire. `id` is the store-assigned
/// identifier (ObjectId hex) and is immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    // Defaults to empty so that a missing title is a validation failure,
    // not a body-deserialization failure.
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// PUT body: a full replacement of the mutable fields.
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Uniform response envelope returned by every endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            message: message.into(),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Success envelope with no data payload (DELETE).
    pub fn message_only(message: impl Into<String>) -> Self {
        ApiResponse {
            success: true,
            data: None,
            message: message.into(),
            error: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthData {
    pub message: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// Trims the title and rejects empty/whitespace-only input. Applied before
/// every write, independent of whatever constraints the store enforces.
pub fn validate_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Trims the description; an empty result means "absent".
pub fn normalize_description(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
