//! PostgreSQL implementation of the record repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::domain::repositories::RecordRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::tables::PgTable;

/// Statements for one table, built once from its column list.
#[derive(Debug, Clone, PartialEq)]
struct Statements {
    insert: String,
    select_one: String,
    select_all: String,
    update: String,
    delete: String,
    count: String,
}

impl Statements {
    fn new(table: &str, columns: &[&str]) -> Self {
        let table = quote(table);
        let quoted: Vec<String> = columns.iter().map(|c| quote(c)).collect();
        let returning = format!("\"id\", {}", quoted.join(", "));

        let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("${i}")).collect();
        let assignments: Vec<String> = quoted
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{column} = ${}", i + 1))
            .collect();
        let id_param = columns.len() + 1;

        Self {
            insert: format!(
                "INSERT INTO {table} ({}) VALUES ({}) RETURNING {returning}",
                quoted.join(", "),
                placeholders.join(", ")
            ),
            select_one: format!("SELECT {returning} FROM {table} WHERE \"id\" = $1"),
            select_all: format!("SELECT {returning} FROM {table} ORDER BY \"id\""),
            update: format!(
                "UPDATE {table} SET {} WHERE \"id\" = ${id_param} RETURNING {returning}",
                assignments.join(", ")
            ),
            delete: format!("DELETE FROM {table} WHERE \"id\" = $1"),
            count: format!("SELECT COUNT(*) FROM {table}"),
        }
    }
}

fn quote(identifier: &str) -> String {
    format!("\"{}\"", identifier.replace('"', "\"\""))
}

/// PostgreSQL repository for one record table.
///
/// Primary keys are generated by the database (`BIGSERIAL`).
pub struct PgRecordRepository<R> {
    pool: Arc<PgPool>,
    sql: Statements,
    _record: PhantomData<fn() -> R>,
}

impl<R: PgTable> PgRecordRepository<R> {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self {
            pool,
            sql: Statements::new(R::TABLE, R::COLUMNS),
            _record: PhantomData,
        }
    }
}

#[async_trait]
impl<R: PgTable> RecordRepository<R> for PgRecordRepository<R> {
    async fn create(&self, new: R::New) -> Result<R, AppError> {
        let record = R::bind_new(new, sqlx::query_as(&self.sql.insert))
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<R>, AppError> {
        let record = sqlx::query_as::<_, R>(&self.sql.select_one)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(record)
    }

    async fn list(&self) -> Result<Vec<R>, AppError> {
        let records = sqlx::query_as::<_, R>(&self.sql.select_all)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(records)
    }

    async fn update(&self, record: R) -> Result<R, AppError> {
        let id = record.id();

        R::bind_new(record.values(), sqlx::query_as(&self.sql.update))
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or_else(|| AppError::record_not_found::<R>(id))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query(&self.sql.delete)
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::record_not_found::<R>(id));
        }

        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(&self.sql.count)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
