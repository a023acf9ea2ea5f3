//! The seam between schema normalization and the database it reads from.
//!
//! [`MetadataSource`] is implemented by the MySQL connection handle in
//! `drivers::mysql` and by in-memory doubles in tests. The normalizer and the
//! comparator only ever see this trait.

use async_trait::async_trait;

use crate::error::Result;

use super::schema::{TableCharset, TableDescriptor};

/// Read table metadata from a database.
///
/// Every method issues at most one query and holds no state between calls.
///
/// # Errors
///
/// Implementations must classify failures the same way:
/// - listing failures and malformed rows are fatal
/// - a failing per-table query is recoverable
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Label identifying which database/environment this source targets.
    fn dialect(&self) -> &str;

    /// List every row of the table catalog, views included, in server order.
    async fn table_status(&self) -> Result<Vec<TableDescriptor>>;

    /// Catalog rows that have a storage engine, in server order.
    async fn base_tables(&self) -> Result<Vec<TableDescriptor>> {
        Ok(self
            .table_status()
            .await?
            .into_iter()
            .filter(TableDescriptor::is_base_table)
            .collect())
    }

    /// Names of base tables, in server order.
    async fn list_tables(&self) -> Result<Vec<String>> {
        Ok(self.base_tables().await?.into_iter().map(|t| t.name).collect())
    }

    /// Raw `CREATE TABLE` text, or `None` when the server returned no row.
    async fn show_create_table(&self, table: &str) -> Result<Option<String>>;

    /// Default character set and collation, or `None` when the table is unknown.
    async fn table_charset(&self, table: &str) -> Result<Option<TableCharset>>;
}
