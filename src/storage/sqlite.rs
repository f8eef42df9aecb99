//! SQLite KeyValueStore implementation.

use async_trait::async_trait;
use sea_query::{Expr, OnConflict, Query, SqliteQueryBuilder};
use sqlx::{Row, SqlitePool};
use tracing::debug;

use super::schema::{KvEntries, CREATE_KV_ENTRIES_TABLE};
use super::{KeyValueStore, Result};

/// SQLite implementation of KeyValueStore.
///
/// Several areas can share one database; each store only sees the rows of
/// its own `area`.
pub struct SqliteStore {
    pool: SqlitePool,
    area: String,
}

impl SqliteStore {
    /// Create a new SQLite store for the given area.
    pub fn new(pool: SqlitePool, area: impl Into<String>) -> Self {
        Self {
            pool,
            area: area.into(),
        }
    }

    /// Create the backing table if it does not exist.
    pub async fn init(&self) -> Result<()> {
        sqlx::query(CREATE_KV_ENTRIES_TABLE)
            .execute(&self.pool)
            .await?;
        debug!(area = %self.area, "kv_entries table ready");
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let query = Query::select()
            .column(KvEntries::Value)
            .from(KvEntries::Table)
            .and_where(Expr::col(KvEntries::Area).eq(self.area.as_str()))
            .and_where(Expr::col(KvEntries::Key).eq(key))
            .to_string(SqliteQueryBuilder);

        let row = sqlx::query(&query).fetch_optional(&self.pool).await?;

        Ok(row.map(|row| row.get::<String, _>("value")))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let updated_at = chrono::Utc::now().to_rfc3339();

        let query = Query::insert()
            .into_table(KvEntries::Table)
            .columns([
                KvEntries::Area,
                KvEntries::Key,
                KvEntries::Value,
                KvEntries::UpdatedAt,
            ])
            .values_panic([
                self.area.as_str().into(),
                key.into(),
                value.into(),
                updated_at.into(),
            ])
            .on_conflict(
                OnConflict::columns([KvEntries::Area, KvEntries::Key])
                    .update_columns([KvEntries::Value, KvEntries::UpdatedAt])
                    .to_owned(),
            )
            .to_string(SqliteQueryBuilder);

        sqlx::query(&query).execute(&self.pool).await?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let query = Query::delete()
            .from_table(KvEntries::Table)
            .and_where(Expr::col(KvEntries::Area).eq(self.area.as_str()))
            .and_where(Expr::col(KvEntries::Key).eq(key))
            .to_string(SqliteQueryBuilder);

        sqlx::query(&query).execute(&self.pool).await?;

        Ok(())
    }
}
