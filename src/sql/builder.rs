//! Builds parameterized INSERT, SELECT, UPDATE, DELETE for the `personajes` table.

use crate::model::{CharacterFields, FIELD_COLUMNS};

pub const TABLE: &str = "personajes";
pub const PK: &str = "id";

/// Quote identifier for PostgreSQL (safe: only fixed column names reach here).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// SELECT list: primary key followed by the field columns.
fn select_column_list() -> String {
    std::iter::once(PK)
        .chain(FIELD_COLUMNS)
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Statement text plus the text values to bind, in placeholder order.
/// Statements keyed by id leave the id for the caller to bind last.
#[derive(Debug)]
pub struct QueryBuf<'a> {
    pub sql: String,
    pub params: Vec<Option<&'a str>>,
}

impl<'a> QueryBuf<'a> {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: Option<&'a str>) -> usize {
        self.params.push(v);
        self.params.len()
    }

    /// Placeholder number the id takes when bound after `params`.
    pub fn id_placeholder(&self) -> usize {
        self.params.len() + 1
    }
}

/// SELECT every row, ORDER BY pk.
pub fn select_all() -> QueryBuf<'static> {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(),
        quoted(TABLE),
        quoted(PK)
    );
    q
}

/// SELECT by primary key. Caller binds the id as $1.
pub fn select_by_id() -> QueryBuf<'static> {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ${}",
        select_column_list(),
        quoted(TABLE),
        quoted(PK),
        q.id_placeholder()
    );
    q
}

/// INSERT all four field columns. Absent values bind as NULL and are left to the table constraints.
pub fn insert(fields: &CharacterFields) -> QueryBuf<'_> {
    let mut q = QueryBuf::new();
    let mut cols = Vec::with_capacity(FIELD_COLUMNS.len());
    let mut placeholders = Vec::with_capacity(FIELD_COLUMNS.len());
    for (col, val) in FIELD_COLUMNS.iter().zip(fields.values()) {
        let n = q.push_param(val);
        cols.push(quoted(col));
        placeholders.push(format!("${}", n));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quoted(TABLE),
        cols.join(", "),
        placeholders.join(", ")
    );
    q
}

/// UPDATE by id: SET only the supplied columns. None when nothing was supplied.
/// Caller binds the id at `id_placeholder()`.
pub fn update(fields: &CharacterFields) -> Option<QueryBuf<'_>> {
    let supplied = fields.supplied();
    if supplied.is_empty() {
        return None;
    }
    let mut q = QueryBuf::new();
    let sets: Vec<String> = supplied
        .into_iter()
        .map(|(col, val)| {
            let n = q.push_param(Some(val));
            format!("{} = ${}", quoted(col), n)
        })
        .collect();
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ${}",
        quoted(TABLE),
        sets.join(", "),
        quoted(PK),
        q.id_placeholder()
    );
    Some(q)
}

/// DELETE by id. Caller binds the id as $1.
pub fn delete() -> QueryBuf<'static> {
    let mut q = QueryBuf::new();
    q.sql = format!("DELETE FROM {} WHERE {} = ${}", quoted(TABLE), quoted(PK), q.id_placeholder());
    q
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(nombre: Option<&str>, casa: Option<&str>, descripcion: Option<&str>, rol: Option<&str>) -> CharacterFields {
        CharacterFields {
            nombre: nombre.map(String::from),
            casa: casa.map(String::from),
            descripcion: descripcion.map(String::from),
            rol: rol.map(String::from),
        }
    }

    #[test]
    fn update_sets_only_supplied_columns() {
        let f = fields(None, Some("Ravenclaw"), None, Some(""));
        let q = update(&f).unwrap();
        assert_eq!(q.sql, r#"UPDATE "personajes" SET "casa" = $1 WHERE "id" = $2"#);
        assert_eq!(q.params, vec![Some("Ravenclaw")]);
        assert_eq!(q.id_placeholder(), 2);
    }

    #[test]
    fn update_numbers_placeholders_in_column_order() {
        let f = fields(Some("Hermione Granger"), None, Some("Brightest witch"), Some("Protagonist"));
        let q = update(&f).unwrap();
        assert_eq!(
            q.sql,
            r#"UPDATE "personajes" SET "nombre" = $1, "descripcion" = $2, "rol" = $3 WHERE "id" = $4"#
        );
        assert_eq!(q.params, vec![Some("Hermione Granger"), Some("Brightest witch"), Some("Protagonist")]);
    }

    #[test]
    fn update_without_fields_builds_nothing() {
        assert!(update(&CharacterFields::default()).is_none());
        assert!(update(&fields(Some(""), None, Some(""), None)).is_none());
    }

    #[test]
    fn values_never_appear_in_statement_text() {
        let hostile = "x'; DROP TABLE personajes; --";
        let f = fields(Some(hostile), None, None, None);
        let q = update(&f).unwrap();
        assert!(!q.sql.contains(hostile));
        let q = insert(&f);
        assert!(!q.sql.contains(hostile));
    }

    #[test]
    fn insert_binds_all_columns_including_absent_ones() {
        let f = fields(Some("Harry Potter"), Some("Gryffindor"), None, Some("Protagonist"));
        let q = insert(&f);
        assert_eq!(
            q.sql,
            r#"INSERT INTO "personajes" ("nombre", "casa", "descripcion", "rol") VALUES ($1, $2, $3, $4)"#
        );
        assert_eq!(q.params, vec![Some("Harry Potter"), Some("Gryffindor"), None, Some("Protagonist")]);
    }

    #[test]
    fn reads_and_delete_are_keyed_by_first_placeholder() {
        assert_eq!(
            select_by_id().sql,
            r#"SELECT "id", "nombre", "casa", "descripcion", "rol" FROM "personajes" WHERE "id" = $1"#
        );
        assert_eq!(delete().sql, r#"DELETE FROM "personajes" WHERE "id" = $1"#);
        assert!(select_all().sql.ends_with(r#"ORDER BY "id""#));
        assert!(select_all().params.is_empty());
    }
}
