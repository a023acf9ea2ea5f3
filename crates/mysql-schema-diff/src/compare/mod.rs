//! Cross-database schema comparison.
//!
//! Lists tables on both sides, canonicalizes each selected table's DDL, and
//! classifies every table as identical, different, one-sided, or unreadable.
//! Tables are processed strictly one at a time.

mod filter;
mod types;

pub use filter::TableFilter;
pub use types::{CompareReport, TableDiff, TableStatus};

use std::collections::HashSet;

use tracing::{debug, info};

use crate::core::traits::MetadataSource;
use crate::error::Result;
use crate::normalize::SchemaNormalizer;

/// Compares the canonical schemas of two databases.
pub struct CompareEngine<'a, S, T> {
    source: &'a SchemaNormalizer<S>,
    target: &'a SchemaNormalizer<T>,
    filter: TableFilter,
}

impl<'a, S: MetadataSource, T: MetadataSource> CompareEngine<'a, S, T> {
    pub fn new(source: &'a SchemaNormalizer<S>, target: &'a SchemaNormalizer<T>) -> Self {
        Self {
            source,
            target,
            filter: TableFilter::default(),
        }
    }

    /// Restrict the comparison to tables selected by `filter`.
    pub fn with_filter(mut self, filter: TableFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Compare every selected table.
    ///
    /// Fatal errors (listing failures, malformed rows) abort the run.
    /// Per-table read failures are logged and surface as
    /// [`TableStatus::Unreadable`].
    pub async fn run(&self) -> Result<CompareReport> {
        let source_tables = self.selected(self.source.list_tables().await?);
        let target_tables = self.selected(self.target.list_tables().await?);

        info!(
            "Comparing {} [{}] tables with {} [{}] tables",
            source_tables.len(),
            self.source.dialect(),
            target_tables.len(),
            self.target.dialect()
        );

        let in_source: HashSet<&str> = source_tables.iter().map(String::as_str).collect();
        let in_target: HashSet<&str> = target_tables.iter().map(String::as_str).collect();

        let mut report = CompareReport::new(self.source.dialect(), self.target.dialect());

        let ordered = source_tables
            .iter()
            .chain(target_tables.iter().filter(|t| !in_source.contains(t.as_str())));

        for table in ordered {
            let diff = self
                .compare_table(
                    table,
                    in_source.contains(table.as_str()),
                    in_target.contains(table.as_str()),
                )
                .await?;
            debug!("{}: {}", diff.table, diff.status.as_str());
            report.add_table(diff);
        }

        Ok(report)
    }

    /// Compare one table given which sides list it.
    pub async fn compare_table(
        &self,
        table: &str,
        in_source: bool,
        in_target: bool,
    ) -> Result<TableDiff> {
        let source_schema = if in_source {
            self.source.canonical_schema_or_empty(table).await?
        } else {
            String::new()
        };
        let target_schema = if in_target {
            self.target.canonical_schema_or_empty(table).await?
        } else {
            String::new()
        };

        Ok(TableDiff::classify(
            table,
            in_source,
            in_target,
            source_schema,
            target_schema,
        ))
    }

    fn selected(&self, tables: Vec<String>) -> Vec<String> {
        tables
            .into_iter()
            .filter(|t| self.filter.matches(t))
            .collect()
    }
}
