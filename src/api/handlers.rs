//! API handlers

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::error::{ApiError, ErrorBody};
use crate::api::AppState;
use crate::types::{Character, HealthStatus, ProbeStatus};
use crate::Error;

/// Decode a request body into a character.
///
/// The `Content-Type` header is not consulted. A JSON `null` decodes to an
/// empty character.
fn decode_character(body: &Bytes) -> crate::Result<Character> {
    serde_json::from_slice::<Option<Character>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|err| Error::invalid_request(err.to_string()))
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is healthy", body = HealthStatus))
)]
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::new(ProbeStatus::Ok))
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health/live",
    tag = "health",
    responses((status = 200, description = "Process is running", body = HealthStatus))
)]
pub async fn liveness() -> Json<HealthStatus> {
    Json(HealthStatus::new(ProbeStatus::Alive))
}

/// Readiness probe
///
/// Unconditionally ready unless `health.check_store` is enabled, in which
/// case a failing store ping reports 503.
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service can accept traffic", body = HealthStatus),
        (status = 503, description = "A dependency is unavailable", body = HealthStatus)
    )
)]
pub async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    if state.check_store {
        if let Err(err) = state.service.store().ping().await {
            tracing::warn!(error = %err, "Readiness check failed");
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthStatus::new(ProbeStatus::Unavailable)),
            );
        }
    }

    (StatusCode::OK, Json(HealthStatus::new(ProbeStatus::Ready)))
}

/// List all characters
#[utoipa::path(
    get,
    path = "/api/v1/characters",
    tag = "characters",
    responses((status = 200, description = "All characters", body = [Character]))
)]
pub async fn list_characters(
    State(state): State<AppState>,
) -> Result<Json<Vec<Character>>, ApiError> {
    let characters = state.service.list().await?;
    Ok(Json(characters))
}

/// Create a new character
#[utoipa::path(
    post,
    path = "/api/v1/characters",
    tag = "characters",
    request_body(content = Character, description = "Character data"),
    responses(
        (status = 201, description = "Character created", body = Character),
        (status = 400, description = "Body does not decode into a character", body = ErrorBody)
    )
)]
pub async fn create_character(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Character>), ApiError> {
    let character = decode_character(&body)?;
    let created = state.service.create(character).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a character by id
#[utoipa::path(
    get,
    path = "/api/v1/characters/{id}",
    tag = "characters",
    params(("id" = String, Path, description = "Character ID")),
    responses(
        (status = 200, description = "The character", body = Character),
        (status = 404, description = "No character with that id", body = ErrorBody)
    )
)]
pub async fn get_character(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Character>, ApiError> {
    let character = state.service.get(&id).await?;
    Ok(Json(character))
}

/// Update a character
///
/// The body is decoded before the character is looked up, so a malformed
/// body reports 400 even for an unknown id.
#[utoipa::path(
    put,
    path = "/api/v1/characters/{id}",
    tag = "characters",
    params(("id" = String, Path, description = "Character ID")),
    request_body(content = Character, description = "Updated character data"),
    responses(
        (status = 200, description = "The updated character", body = Character),
        (status = 400, description = "Body does not decode into a character", body = ErrorBody),
        (status = 404, description = "No character with that id", body = ErrorBody)
    )
)]
pub async fn update_character(
    Path(id): Path<String>,
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Character>, ApiError> {
    let changes = decode_character(&body)?;
    let updated = state.service.update(&id, changes).await?;
    Ok(Json(updated))
}

/// Delete a character
#[utoipa::path(
    delete,
    path = "/api/v1/characters/{id}",
    tag = "characters",
    params(("id" = String, Path, description = "Character ID")),
    responses(
        (status = 204, description = "Character deleted"),
        (status = 404, description = "No character with that id", body = ErrorBody)
    )
)]
pub async fn delete_character(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    state.service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
