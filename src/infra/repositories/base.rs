//! Query helpers shared by every repository.
//!
//! Each helper is generic over the connection so the same code runs against
//! the pooled connection and inside a transaction.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PrimaryKeyTrait, SqlErr};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Load every row of `E`, mapped into its domain type.
pub(crate) async fn find_all<E, D, C>(db: &C) -> AppResult<Vec<D>>
where
    E: EntityTrait,
    D: From<E::Model>,
    C: ConnectionTrait,
{
    let models = E::find().all(db).await?;
    Ok(models.into_iter().map(D::from).collect())
}

/// Load one row of `E` by primary key.
pub(crate) async fn find_one<E, D, C>(db: &C, id: Uuid) -> AppResult<Option<D>>
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = Uuid>,
    D: From<E::Model>,
    C: ConnectionTrait,
{
    let model = E::find_by_id(id).one(db).await?;
    Ok(model.map(D::from))
}

/// Fetch the raw model for an update; absent rows are `NotFound`.
pub(crate) async fn find_model<E, C>(db: &C, id: Uuid) -> AppResult<E::Model>
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = Uuid>,
    C: ConnectionTrait,
{
    E::find_by_id(id).one(db).await?.ok_or(AppError::NotFound)
}

/// Whether a row of `E` with this primary key exists.
pub(crate) async fn exists<E, C>(db: &C, id: Uuid) -> AppResult<bool>
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = Uuid>,
    C: ConnectionTrait,
{
    Ok(E::find_by_id(id).one(db).await?.is_some())
}

/// Delete one row of `E` in a single statement; zero affected rows is `NotFound`.
pub(crate) async fn delete_one<E, C>(db: &C, id: Uuid) -> AppResult<()>
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = Uuid>,
    C: ConnectionTrait,
{
    let result = E::delete_by_id(id).exec(db).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(())
}

/// Map a unique-email violation to a 400; other database errors pass through.
pub(crate) fn email_taken(err: DbErr, email: Option<&str>) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::bad_request(format!(
            "Email {} is already registered",
            email.unwrap_or_default()
        )),
        _ => AppError::Database(err),
    }
}
