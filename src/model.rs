//! Character row and request payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// Updatable columns, in statement order.
pub const FIELD_COLUMNS: [&str; 4] = ["nombre", "casa", "descripcion", "rol"];

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq)]
pub struct Character {
    pub id: i32,
    pub nombre: String,
    pub casa: String,
    pub descripcion: String,
    pub rol: String,
}

/// Body of create and partial-update requests. Every field may be absent.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CharacterFields {
    pub nombre: Option<String>,
    pub casa: Option<String>,
    pub descripcion: Option<String>,
    pub rol: Option<String>,
}

impl CharacterFields {
    /// Raw values in column order, `None` where the key was absent or null.
    pub fn values(&self) -> [Option<&str>; 4] {
        [
            self.nombre.as_deref(),
            self.casa.as_deref(),
            self.descripcion.as_deref(),
            self.rol.as_deref(),
        ]
    }

    /// Column/value pairs that were actually supplied. Empty strings do not count.
    pub fn supplied(&self) -> Vec<(&'static str, &str)> {
        FIELD_COLUMNS
            .iter()
            .zip(self.values())
            .filter_map(|(col, v)| v.filter(|s| !s.is_empty()).map(|s| (*col, s)))
            .collect()
    }
}

/// Body of the export request: the record to print, taken verbatim from the caller.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CharacterSheet {
    /// Accepted as a JSON number or string.
    pub id: Option<Value>,
    #[serde(flatten)]
    pub fields: CharacterFields,
}

impl CharacterSheet {
    /// The id as printed and used in the attachment filename, if present.
    pub fn id_text(&self) -> Option<String> {
        match self.id.as_ref()? {
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}
