//! # mysql-schema-diff
//!
//! Canonical MySQL table schemas for comparing databases across environments.
//!
//! `SHOW CREATE TABLE` output carries noise that varies between servers even
//! when two tables are structurally the same: integer display widths,
//! `USING BTREE` index annotations, and `CHARACTER SET` / `COLLATE` clauses
//! that merely repeat the table default. This library strips that noise so the
//! resulting text can be compared byte for byte.
//!
//! - **Connection handle** ([`MysqlSource`]): lists base tables and reads DDL
//!   and default charsets, logging every statement through a [`QueryLogger`]
//! - **Normalizer** ([`SchemaNormalizer`]): turns raw DDL into canonical text
//! - **Comparison** ([`CompareEngine`]): classifies every table across two
//!   databases
//!
//! Errors are split into fatal and recoverable tiers ([`ErrorKind`]); a table
//! that cannot be read never aborts a comparison run.
//!
//! ## Example
//!
//! ```rust,no_run
//! use mysql_schema_diff::{CompareEngine, MysqlSource, SchemaNormalizer};
//!
//! #[tokio::main]
//! async fn main() -> mysql_schema_diff::Result<()> {
//!     let prod = SchemaNormalizer::new(MysqlSource::connect("mysql://ro@prod/shop", "prod").await?);
//!     let staging = SchemaNormalizer::new(MysqlSource::connect("mysql://ro@staging/shop", "staging").await?);
//!
//!     let report = CompareEngine::new(&prod, &staging).run().await?;
//!     for table in report.drifted() {
//!         println!("{}: {}", table.table, table.status.as_str());
//!     }
//!     Ok(())
//! }
//! ```

pub mod compare;
pub mod config;
pub mod core;
pub mod drivers;
pub mod error;
pub mod logging;
pub mod normalize;

#[cfg(test)]
mod testing;

// Re-exports for convenient access
pub use compare::{CompareEngine, CompareReport, TableDiff, TableFilter, TableStatus};
pub use config::{Config, DatabaseConfig};
pub use crate::core::{MetadataSource, RawSchema, TableCharset, TableDescriptor};
pub use drivers::MysqlSource;
pub use error::{ErrorKind, Result, SchemaError};
pub use logging::{CapturingQueryLogger, LoggedQuery, QueryLogger, TracingQueryLogger};
pub use normalize::{canonicalize, SchemaNormalizer};
