//! Per-table schema fetch and canonicalization.

use tracing::warn;

use crate::core::schema::{RawSchema, TableCharset};
use crate::core::traits::MetadataSource;
use crate::error::Result;

use super::canonicalize;

/// Produces canonical DDL for tables of one database.
///
/// Holds no state besides the source; every call issues fresh queries.
pub struct SchemaNormalizer<S> {
    source: S,
}

impl<S: MetadataSource> SchemaNormalizer<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }

    /// Label of the underlying database.
    pub fn dialect(&self) -> &str {
        self.source.dialect()
    }

    /// Base table names, in listing order.
    pub async fn list_tables(&self) -> Result<Vec<String>> {
        self.source.list_tables().await
    }

    /// Default character set and collation of `table`.
    ///
    /// An unknown table yields an empty pair. A failing query is returned as
    /// a recoverable error; a malformed row as a fatal one.
    pub async fn default_character_collate(&self, table: &str) -> Result<TableCharset> {
        Ok(self.source.table_charset(table).await?.unwrap_or_default())
    }

    /// DDL and defaults for `table`, or `None` when the server has no such table.
    ///
    /// If only the charset lookup fails, the DDL is still returned with empty
    /// defaults so display widths can be normalized.
    pub async fn raw_schema(&self, table: &str) -> Result<Option<RawSchema>> {
        let Some(ddl) = self.source.show_create_table(table).await? else {
            return Ok(None);
        };

        let charset = match self.default_character_collate(table).await {
            Ok(charset) => charset,
            Err(e) if !e.is_fatal() => {
                warn!("[{}] {}", self.dialect(), e);
                TableCharset::default()
            }
            Err(e) => return Err(e),
        };

        Ok(Some(RawSchema {
            table: table.to_string(),
            ddl,
            charset,
        }))
    }

    /// Canonical DDL of `table`; empty when the table does not exist.
    ///
    /// Recoverable failures are returned as errors so the caller can tell
    /// "missing" from "could not be read".
    pub async fn canonical_schema(&self, table: &str) -> Result<String> {
        Ok(self
            .raw_schema(table)
            .await?
            .map(|raw| canonicalize(&raw.ddl, &raw.charset))
            .unwrap_or_default())
    }

    /// Canonical DDL of `table`, logging recoverable failures and returning an
    /// empty string for them. Fatal errors still propagate.
    pub async fn canonical_schema_or_empty(&self, table: &str) -> Result<String> {
        match self.canonical_schema(table).await {
            Err(e) if !e.is_fatal() => {
                warn!("[{}] {}", self.dialect(), e);
                Ok(String::new())
            }
            other => other,
        }
    }
}
