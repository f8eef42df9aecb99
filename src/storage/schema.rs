//! Database schema definitions using sea-query.
//!
//! These define the table and column identifiers for type-safe query building.

use sea_query::Iden;

/// Key-value entries table schema.
#[derive(Iden)]
pub enum KvEntries {
    Table,
    #[iden = "area"]
    Area,
    #[iden = "entry_key"]
    Key,
    #[iden = "value"]
    Value,
    #[iden = "updated_at"]
    UpdatedAt,
}

/// SQL for creating the key-value entries table.
pub const CREATE_KV_ENTRIES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS kv_entries (
    area TEXT NOT NULL,
    entry_key TEXT NOT NULL,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    PRIMARY KEY (area, entry_key)
)
"#;
