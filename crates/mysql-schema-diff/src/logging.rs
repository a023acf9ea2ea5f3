//! Query logging.
//!
//! Every statement a connection handle runs is reported to a [`QueryLogger`]
//! before execution. The default logger forwards to `tracing`; tests and
//! embedding tools can inject their own.

use std::sync::Mutex;

use tracing::info;

/// Receives one call per executed statement.
pub trait QueryLogger: Send + Sync {
    /// Record a statement about to run against the database labelled `dialect`.
    fn log_query(&self, dialect: &str, sql: &str, params: &[&str]);
}

/// Emits each statement as a `tracing` event on the `sql` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingQueryLogger;

impl QueryLogger for TracingQueryLogger {
    fn log_query(&self, dialect: &str, sql: &str, params: &[&str]) {
        info!(
            target: "sql",
            dialect,
            params = ?params,
            "[SQL] [{}] {}",
            dialect,
            sql.trim()
        );
    }
}

/// A statement captured by [`CapturingQueryLogger`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedQuery {
    pub dialect: String,
    pub sql: String,
    pub params: Vec<String>,
}

/// Keeps every logged statement in memory.
#[derive(Debug, Default)]
pub struct CapturingQueryLogger {
    entries: Mutex<Vec<LoggedQuery>>,
}

impl CapturingQueryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the statements logged so far, oldest first.
    pub fn entries(&self) -> Vec<LoggedQuery> {
        self.entries
            .lock()
            .map(|e| e.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl QueryLogger for CapturingQueryLogger {
    fn log_query(&self, dialect: &str, sql: &str, params: &[&str]) {
        let entry = LoggedQuery {
            dialect: dialect.to_string(),
            sql: sql.to_string(),
            params: params.iter().map(|p| p.to_string()).collect(),
        };
        match self.entries.lock() {
            Ok(mut entries) => entries.push(entry),
            Err(poisoned) => poisoned.into_inner().push(entry),
        }
    }
}
