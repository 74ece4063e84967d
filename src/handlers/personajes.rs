//! Character handlers: create, read, update, delete, export.

use crate::document;
use crate::error::AppError;
use crate::model::{CharacterFields, CharacterSheet};
use crate::response::{data_ok, message_ok, status_ok};
use crate::service::{CharacterService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, HeaderValue},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

pub const CREATED: &str = "Personaje insertado exitosamente";
pub const UPDATED: &str = "Personaje actualizado correctamente";
pub const DELETED: &str = "Personaje eliminado correctamente";

#[derive(Deserialize, Debug, Default)]
pub struct IdQuery {
    pub id: Option<String>,
}

/// Ids that do not parse as integers cannot match any row.
fn existing_id(raw: &str) -> Result<i32, AppError> {
    RequestValidator::parse_id(raw).ok_or_else(AppError::character_not_found)
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CharacterFields>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(fields) = payload?;
    CharacterService::create(&state.pool, &fields).await?;
    tracing::info!(nombre = ?fields.nombre, "character created");
    Ok(message_ok(CREATED))
}

/// Lists every character, or only the one named by `?id=`.
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = query?;
    let Some(raw) = params.id.as_deref().filter(|s| !s.is_empty()) else {
        let rows = CharacterService::list(&state.pool).await?;
        return Ok(data_ok(rows));
    };
    let id = existing_id(raw)?;
    let row = CharacterService::find(&state.pool, id)
        .await?
        .ok_or_else(AppError::character_not_found)?;
    Ok(data_ok(vec![row]))
}

pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<CharacterFields>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(fields) = payload?;
    RequestValidator::require_any_field(&fields)?;
    let id = existing_id(&raw_id)?;
    if !CharacterService::update(&state.pool, id, &fields).await? {
        return Err(AppError::character_not_found());
    }
    tracing::info!(id, "character updated");
    Ok(message_ok(UPDATED))
}

pub async fn delete(
    State(state): State<AppState>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = query?;
    let raw = RequestValidator::require_id(params.id.as_deref())?;
    let id = existing_id(raw)?;
    if !CharacterService::delete(&state.pool, id).await? {
        return Err(AppError::character_not_found());
    }
    tracing::info!(id, "character deleted");
    Ok(status_ok(DELETED))
}

/// Renders the supplied record as a PDF attachment. Storage is not consulted.
pub async fn export(payload: Result<Json<CharacterSheet>, JsonRejection>) -> Result<impl IntoResponse, AppError> {
    let Json(sheet) = payload?;
    let id = RequestValidator::require_sheet(&sheet)?;
    let disposition = HeaderValue::from_str(&format!("attachment; filename={}", document::file_name(&id)))
        .map_err(|_| AppError::BadRequest(crate::service::ALL_FIELDS_REQUIRED.into()))?;

    let bytes = tokio::task::spawn_blocking(move || document::render_character_sheet(&id, &sheet))
        .await
        .map_err(|e| AppError::Document(e.to_string()))??;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(document::CONTENT_TYPE)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}
