//! Presence checks applied before any statement runs.

use crate::error::AppError;
use crate::model::{CharacterFields, CharacterSheet};

pub const ID_REQUIRED_FOR_DELETE: &str = "El ID es obligatorio para eliminar un personaje";
pub const NOTHING_TO_UPDATE: &str = "No se proporcionaron datos para actualizar";
pub const ALL_FIELDS_REQUIRED: &str = "Todos los campos son obligatorios";

pub struct RequestValidator;

impl RequestValidator {
    /// Delete needs a non-empty `id` query parameter.
    pub fn require_id(id: Option<&str>) -> Result<&str, AppError> {
        id.filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::BadRequest(ID_REQUIRED_FOR_DELETE.into()))
    }

    /// A partial update must supply at least one field.
    pub fn require_any_field(fields: &CharacterFields) -> Result<(), AppError> {
        if fields.supplied().is_empty() {
            return Err(AppError::BadRequest(NOTHING_TO_UPDATE.into()));
        }
        Ok(())
    }

    /// Export needs the id and all four fields. Returns the id text.
    pub fn require_sheet(sheet: &CharacterSheet) -> Result<String, AppError> {
        let id = sheet.id_text();
        match id {
            Some(id) if sheet.fields.supplied().len() == 4 => Ok(id),
            _ => Err(AppError::BadRequest(ALL_FIELDS_REQUIRED.into())),
        }
    }

    /// Path and query ids are integers; anything else cannot match a row.
    pub fn parse_id(id: &str) -> Option<i32> {
        id.trim().parse().ok()
    }
}
