//! Character CRUD execution against PostgreSQL.

use crate::error::AppError;
use crate::model::{Character, CharacterFields};
use crate::service::validation::NOTHING_TO_UPDATE;
use crate::sql::{delete, insert, select_all, select_by_id, update, QueryBuf};
use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::Query;
use sqlx::PgPool;

pub const INSERT_FAILED: &str = "Error al insertar personaje";
pub const READ_FAILED: &str = "Error al obtener personajes";
pub const UPDATE_FAILED: &str = "Error al actualizar el personaje";
pub const DELETE_FAILED: &str = "Error al eliminar personaje";

pub struct CharacterService;

impl CharacterService {
    /// Every row, ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Character>, AppError> {
        let q = select_all();
        tracing::debug!(sql = %q.sql, "query");
        sqlx::query_as::<_, Character>(&q.sql)
            .fetch_all(pool)
            .await
            .map_err(AppError::storage(READ_FAILED))
    }

    pub async fn find(pool: &PgPool, id: i32) -> Result<Option<Character>, AppError> {
        let q = select_by_id();
        tracing::debug!(sql = %q.sql, id, "query");
        sqlx::query_as::<_, Character>(&q.sql)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(AppError::storage(READ_FAILED))
    }

    /// Insert one row. The generated id is not returned.
    pub async fn create(pool: &PgPool, fields: &CharacterFields) -> Result<(), AppError> {
        let q = insert(fields);
        bind_params(&q)
            .execute(pool)
            .await
            .map_err(AppError::storage(INSERT_FAILED))?;
        Ok(())
    }

    /// Update only the supplied fields. Returns false when no row has this id.
    /// Fails with a bad request before touching the pool when nothing was supplied.
    pub async fn update(pool: &PgPool, id: i32, fields: &CharacterFields) -> Result<bool, AppError> {
        let q = update(fields).ok_or_else(|| AppError::BadRequest(NOTHING_TO_UPDATE.into()))?;
        let result = bind_params(&q)
            .bind(id)
            .execute(pool)
            .await
            .map_err(AppError::storage(UPDATE_FAILED))?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete one row. Returns false when no row has this id.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, AppError> {
        let q = delete();
        tracing::debug!(sql = %q.sql, id, "query");
        let result = sqlx::query(&q.sql)
            .bind(id)
            .execute(pool)
            .await
            .map_err(AppError::storage(DELETE_FAILED))?;
        Ok(result.rows_affected() > 0)
    }
}

fn bind_params<'q>(q: &'q QueryBuf<'q>) -> Query<'q, Postgres, PgArguments> {
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    let mut query = sqlx::query(&q.sql);
    for p in &q.params {
        query = query.bind(*p);
    }
    query
}
