//! # PostgreSQL Table Repository
//!
//! PostgreSQL implementation of [`TableRepository`] using sqlx.
//!
//! Records live in the `"AOTable"` table. Every operation is a single
//! auto-committed statement on a connection borrowed from the pool.
//!
//! The table is expected to exist already:
//!
//! ```sql
//! CREATE TABLE "AOTable" (
//!     "Id"          UUID PRIMARY KEY,
//!     "Name"        VARCHAR(255),
//!     "Description" VARCHAR(255),
//!     "Type"        VARCHAR(128),
//!     "Comment"     VARCHAR(2048),
//!     "Boundary"    BOOLEAN DEFAULT FALSE,
//!     "Cache"       BOOLEAN DEFAULT FALSE,
//!     "History"     BOOLEAN DEFAULT FALSE,
//!     "Identifier"  BOOLEAN DEFAULT FALSE,
//!     "Log"         BOOLEAN DEFAULT FALSE,
//!     "Notify"      BOOLEAN DEFAULT FALSE,
//!     "premium"     BOOLEAN
//! );
//! CREATE INDEX "ix_AOTable_Name" ON "AOTable" ("Name");
//! ```

use crate::domain::entities::AoTable;
use crate::domain::value_objects::TableId;
use crate::infrastructure::persistence::traits::{RepositoryResult, TableRepository};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

const SELECT_BY_ID: &str = r#"
    SELECT "Id", "Name", "Description", "Type", "Comment",
           "Boundary", "Cache", "History", "Identifier", "Log", "Notify", "premium"
    FROM "AOTable"
    WHERE "Id" = $1
"#;

const SELECT_ALL: &str = r#"
    SELECT "Id", "Name", "Description", "Type", "Comment",
           "Boundary", "Cache", "History", "Identifier", "Log", "Notify", "premium"
    FROM "AOTable"
    ORDER BY "Name" ASC NULLS FIRST, "Id" ASC
"#;

/// PostgreSQL implementation of [`TableRepository`].
///
/// # Examples
///
/// ```ignore
/// use sqlx::PgPool;
/// use ao_tables::infrastructure::persistence::postgres::PostgresTableRepository;
///
/// let pool = PgPool::connect("postgres://...").await?;
/// let repo = PostgresTableRepository::new(pool);
/// ```
#[derive(Debug, Clone)]
pub struct PostgresTableRepository {
    pool: PgPool,
}

impl PostgresTableRepository {
    /// Creates a new PostgreSQL table repository.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TableRepository for PostgresTableRepository {
    async fn exists(&self, id: &TableId) -> RepositoryResult<bool> {
        let (found,): (bool,) =
            sqlx::query_as(r#"SELECT EXISTS (SELECT 1 FROM "AOTable" WHERE "Id" = $1)"#)
                .bind(id.as_uuid())
                .fetch_one(&self.pool)
                .await?;

        Ok(found)
    }

    async fn get(&self, id: &TableId) -> RepositoryResult<Option<AoTable>> {
        let row: Option<TableRow> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(AoTable::from))
    }

    async fn get_all(&self) -> RepositoryResult<Vec<AoTable>> {
        let rows: Vec<TableRow> = sqlx::query_as(SELECT_ALL).fetch_all(&self.pool).await?;

        Ok(rows.into_iter().map(AoTable::from).collect())
    }

    async fn insert(&self, table: AoTable) -> RepositoryResult<AoTable> {
        table.check_column_limits()?;
        let stored = table.with_id(TableId::generate());

        sqlx::query(
            r#"
            INSERT INTO "AOTable" (
                "Id", "Name", "Description", "Type", "Comment",
                "Boundary", "Cache", "History", "Identifier", "Log", "Notify", "premium"
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(stored.id.as_uuid())
        .bind(&stored.name)
        .bind(&stored.description)
        .bind(&stored.table_type)
        .bind(&stored.comment)
        .bind(stored.boundary)
        .bind(stored.cache)
        .bind(stored.history)
        .bind(stored.identifier)
        .bind(stored.log)
        .bind(stored.notify)
        .bind(stored.premium)
        .execute(&self.pool)
        .await?;

        tracing::debug!(id = %stored.id, "inserted table row");
        Ok(stored)
    }

    async fn update(&self, id: &TableId, table: &AoTable) -> RepositoryResult<bool> {
        table.check_column_limits()?;

        let result = sqlx::query(
            r#"
            UPDATE "AOTable" SET
                "Name" = $2, "Description" = $3, "Type" = $4, "Comment" = $5,
                "Boundary" = $6, "Cache" = $7, "History" = $8, "Identifier" = $9,
                "Log" = $10, "Notify" = $11, "premium" = $12
            WHERE "Id" = $1
            "#,
        )
        .bind(id.as_uuid())
        .bind(&table.name)
        .bind(&table.description)
        .bind(&table.table_type)
        .bind(&table.comment)
        .bind(table.boundary)
        .bind(table.cache)
        .bind(table.history)
        .bind(table.identifier)
        .bind(table.log)
        .bind(table.notify)
        .bind(table.premium)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &TableId) -> RepositoryResult<bool> {
        let result = sqlx::query(r#"DELETE FROM "AOTable" WHERE "Id" = $1"#)
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let (count,): (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM "AOTable""#)
            .fetch_one(&self.pool)
            .await?;

        Ok(u64::try_from(count).unwrap_or_default())
    }
}

/// Row type for table queries.
///
/// Flag columns are nullable in older schemas; `NULL` reads as unset.
#[derive(Debug, sqlx::FromRow)]
struct TableRow {
    #[sqlx(rename = "Id")]
    id: Uuid,
    #[sqlx(rename = "Name")]
    name: Option<String>,
    #[sqlx(rename = "Description")]
    description: Option<String>,
    #[sqlx(rename = "Type")]
    table_type: Option<String>,
    #[sqlx(rename = "Comment")]
    comment: Option<String>,
    #[sqlx(rename = "Boundary")]
    boundary: Option<bool>,
    #[sqlx(rename = "Cache")]
    cache: Option<bool>,
    #[sqlx(rename = "History")]
    history: Option<bool>,
    #[sqlx(rename = "Identifier")]
    identifier: Option<bool>,
    #[sqlx(rename = "Log")]
    log: Option<bool>,
    #[sqlx(rename = "Notify")]
    notify: Option<bool>,
    premium: Option<bool>,
}

impl From<TableRow> for AoTable {
    fn from(row: TableRow) -> Self {
        Self {
            id: TableId::new(row.id),
            name: row.name,
            description: row.description,
            table_type: row.table_type,
            comment: row.comment,
            boundary: row.boundary.unwrap_or(false),
            cache: row.cache.unwrap_or(false),
            history: row.history.unwrap_or(false),
            identifier: row.identifier.unwrap_or(false),
            log: row.log.unwrap_or(false),
            notify: row.notify.unwrap_or(false),
            premium: row.premium.unwrap_or(false),
        }
    }
}
