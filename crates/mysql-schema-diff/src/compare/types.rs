//! Result types for schema comparison.

use serde::Serialize;
use similar::TextDiff;

/// Outcome for a single table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableStatus {
    /// Canonical schemas are byte-identical.
    Identical,
    /// Table exists on both sides with different canonical schemas.
    Differs,
    /// Table is listed only by the source database.
    OnlyInSource,
    /// Table is listed only by the target database.
    OnlyInTarget,
    /// Table is listed on both sides but at least one schema could not be read.
    Unreadable,
}

impl TableStatus {
    pub fn is_drift(self) -> bool {
        !matches!(self, TableStatus::Identical)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TableStatus::Identical => "identical",
            TableStatus::Differs => "differs",
            TableStatus::OnlyInSource => "only in source",
            TableStatus::OnlyInTarget => "only in target",
            TableStatus::Unreadable => "unreadable",
        }
    }
}

/// Comparison of one table across both databases.
#[derive(Debug, Clone, Serialize)]
pub struct TableDiff {
    pub table: String,
    pub status: TableStatus,
    /// Canonical schema on the source side, empty when absent.
    pub source_schema: String,
    /// Canonical schema on the target side, empty when absent.
    pub target_schema: String,
}

impl TableDiff {
    /// Classify a table from its two canonical schemas.
    pub fn classify(
        table: impl Into<String>,
        in_source: bool,
        in_target: bool,
        source_schema: String,
        target_schema: String,
    ) -> Self {
        let status = match (in_source, in_target) {
            (true, false) => TableStatus::OnlyInSource,
            (false, true) => TableStatus::OnlyInTarget,
            _ if source_schema.is_empty() || target_schema.is_empty() => TableStatus::Unreadable,
            _ if source_schema == target_schema => TableStatus::Identical,
            _ => TableStatus::Differs,
        };

        Self {
            table: table.into(),
            status,
            source_schema,
            target_schema,
        }
    }

    /// Line diff from source to target schema in unified format.
    pub fn unified_diff(&self, source_label: &str, target_label: &str) -> String {
        let header_source = format!("{}/{}", source_label, self.table);
        let header_target = format!("{}/{}", target_label, self.table);
        TextDiff::from_lines(&self.source_schema, &self.target_schema)
            .unified_diff()
            .context_radius(3)
            .header(&header_source, &header_target)
            .to_string()
    }
}

/// Result of comparing every selected table.
#[derive(Debug, Clone, Serialize)]
pub struct CompareReport {
    pub source_label: String,
    pub target_label: String,
    /// Per-table results: source listing order, then target-only tables.
    pub tables: Vec<TableDiff>,
    pub tables_identical: usize,
    pub tables_different: usize,
    pub tables_only_in_source: usize,
    pub tables_only_in_target: usize,
    pub tables_unreadable: usize,
}

impl CompareReport {
    pub fn new(source_label: impl Into<String>, target_label: impl Into<String>) -> Self {
        Self {
            source_label: source_label.into(),
            target_label: target_label.into(),
            tables: Vec::new(),
            tables_identical: 0,
            tables_different: 0,
            tables_only_in_source: 0,
            tables_only_in_target: 0,
            tables_unreadable: 0,
        }
    }

    /// Add a table result.
    pub fn add_table(&mut self, diff: TableDiff) {
        match diff.status {
            TableStatus::Identical => self.tables_identical += 1,
            TableStatus::Differs => self.tables_different += 1,
            TableStatus::OnlyInSource => self.tables_only_in_source += 1,
            TableStatus::OnlyInTarget => self.tables_only_in_target += 1,
            TableStatus::Unreadable => self.tables_unreadable += 1,
        }
        self.tables.push(diff);
    }

    pub fn tables_checked(&self) -> usize {
        self.tables.len()
    }

    /// Whether any table is not identical on both sides.
    pub fn has_drift(&self) -> bool {
        self.tables.iter().any(|t| t.status.is_drift())
    }

    /// Tables that are not identical.
    pub fn drifted(&self) -> impl Iterator<Item = &TableDiff> {
        self.tables.iter().filter(|t| t.status.is_drift())
    }
}
