//! # Repository Helpers
//!
//! Execution of rendered `(sql, args)` pairs against any PostgreSQL executor
//! (`&PgPool`, `&mut PgConnection`, a transaction's connection), plus the one
//! place where storage errors turn into domain errors.
//!
//! Helpers return `sqlx::Error` untouched: a missing row surfaces as
//! `sqlx::Error::RowNotFound` so [`map_error`] can tell it apart from everything else.
//!
//! ```rust,no_run
//! use folio_query::repository::{query_one, with_tx};
//! use sqlx::PgPool;
//!
//! # async fn example(pool: &PgPool) -> Result<(), sqlx::Error> {
//! let id: i64 = with_tx(pool, |tx| {
//!     Box::pin(async move {
//!         let (id,): (i64,) = query_one(&mut **tx, "SELECT 1::int8", &[]).await?;
//!         Ok::<_, sqlx::Error>(id)
//!     })
//! })
//! .await?;
//! # Ok(())
//! # }
//! ```

use crate::query_builder::{bind_args, SqlArg};
use futures::future::BoxFuture;
use sqlx::postgres::PgRow;
use sqlx::{Executor, FromRow, PgPool, Postgres, Transaction};
use tracing::debug;

/// PostgreSQL SQLSTATE for `unique_violation`
pub const UNIQUE_VIOLATION: &str = "23505";

/// Run `f` inside a transaction, committing on `Ok` and rolling back on `Err`
///
/// Rollback is best effort and its failure is not reported; the caller's error is
/// returned as is. A commit failure is returned through `From<sqlx::Error>`. If
/// `f` panics the dropped transaction rolls back on its own.
pub async fn with_tx<T, E, F>(pool: &PgPool, f: F) -> Result<T, E>
where
    E: From<sqlx::Error>,
    F: for<'t> FnOnce(&'t mut Transaction<'static, Postgres>) -> BoxFuture<'t, Result<T, E>>,
{
    let mut tx = pool.begin().await?;

    match f(&mut tx).await {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                debug!(error = %rollback_err, "Transaction rollback failed");
            }
            Err(err)
        }
    }
}

/// Fetch exactly one row; `sqlx::Error::RowNotFound` when there is none
pub async fn query_one<'c, T, X>(executor: X, sql: &str, args: &[SqlArg]) -> Result<T, sqlx::Error>
where
    X: Executor<'c, Database = Postgres>,
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    debug!(sql = %sql, params = args.len(), "query_one");
    bind_args!(sqlx::query_as::<Postgres, T>(sql), args)
        .fetch_one(executor)
        .await
}

/// Fetch at most one row
pub async fn query_optional<'c, T, X>(
    executor: X,
    sql: &str,
    args: &[SqlArg],
) -> Result<Option<T>, sqlx::Error>
where
    X: Executor<'c, Database = Postgres>,
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    debug!(sql = %sql, params = args.len(), "query_optional");
    bind_args!(sqlx::query_as::<Postgres, T>(sql), args)
        .fetch_optional(executor)
        .await
}

/// Fetch every row; an empty result is an empty `Vec`
///
/// The first row that fails to decode aborts the whole call.
pub async fn query_many<'c, T, X>(
    executor: X,
    sql: &str,
    args: &[SqlArg],
) -> Result<Vec<T>, sqlx::Error>
where
    X: Executor<'c, Database = Postgres>,
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    debug!(sql = %sql, params = args.len(), "query_many");
    bind_args!(sqlx::query_as::<Postgres, T>(sql), args)
        .fetch_all(executor)
        .await
}

/// Run a `COUNT(*)` query such as the one from `Builder::build_count`
pub async fn query_count<'c, X>(executor: X, sql: &str, args: &[SqlArg]) -> Result<i64, sqlx::Error>
where
    X: Executor<'c, Database = Postgres>,
{
    debug!(sql = %sql, params = args.len(), "query_count");
    bind_args!(sqlx::query_scalar::<Postgres, i64>(sql), args)
        .fetch_one(executor)
        .await
}

/// Execute an UPDATE/DELETE; `sqlx::Error::RowNotFound` when nothing was affected
pub async fn exec_expect_one<'c, X>(executor: X, sql: &str, args: &[SqlArg]) -> Result<u64, sqlx::Error>
where
    X: Executor<'c, Database = Postgres>,
{
    debug!(sql = %sql, params = args.len(), "exec_expect_one");
    let result = bind_args!(sqlx::query::<Postgres>(sql), args)
        .execute(executor)
        .await?;

    match result.rows_affected() {
        0 => Err(sqlx::Error::RowNotFound),
        affected => Ok(affected),
    }
}

/// Whether `err` is a unique-constraint violation
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some(UNIQUE_VIOLATION),
        _ => false,
    }
}

/// Translate storage errors into the caller's error vocabulary
///
/// `RowNotFound` becomes `not_found`, a unique violation becomes `duplicate`, and
/// anything else is converted through `From<sqlx::Error>` unchanged.
pub fn map_error<E>(err: sqlx::Error, not_found: E, duplicate: E) -> E
where
    E: From<sqlx::Error>,
{
    match err {
        sqlx::Error::RowNotFound => not_found,
        ref db_err if is_unique_violation(db_err) => duplicate,
        other => E::from(other),
    }
}
