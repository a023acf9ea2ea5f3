//! In-memory [`MetadataSource`] used by unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::schema::{TableCharset, TableDescriptor};
use crate::core::traits::MetadataSource;
use crate::error::{Result, SchemaError};

#[derive(Default)]
pub(crate) struct FakeSource {
    pub dialect: String,
    pub status: Vec<TableDescriptor>,
    pub ddl: HashMap<String, String>,
    pub charsets: HashMap<String, TableCharset>,
    pub failing_ddl: HashSet<String>,
    pub failing_charset: HashSet<String>,
    pub malformed_charset: HashSet<String>,
    pub listing_fails: bool,
    pub calls: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn new(dialect: &str) -> Self {
        Self {
            dialect: dialect.to_string(),
            ..Default::default()
        }
    }

    /// Add a base table with its DDL and default charset.
    pub fn table(mut self, name: &str, ddl: &str, charset: TableCharset) -> Self {
        self.status.push(TableDescriptor {
            name: name.to_string(),
            engine: Some("InnoDB".to_string()),
        });
        self.ddl.insert(name.to_string(), ddl.to_string());
        self.charsets.insert(name.to_string(), charset);
        self
    }

    /// Add a view: listed without an engine.
    pub fn view(mut self, name: &str) -> Self {
        self.status.push(TableDescriptor {
            name: name.to_string(),
            engine: None,
        });
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: String) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

#[async_trait]
impl MetadataSource for FakeSource {
    fn dialect(&self) -> &str {
        &self.dialect
    }

    async fn table_status(&self) -> Result<Vec<TableDescriptor>> {
        self.record("table_status".to_string());
        if self.listing_fails {
            return Err(SchemaError::list_tables(
                self.dialect.clone(),
                sqlx::Error::PoolClosed,
            ));
        }
        Ok(self.status.clone())
    }

    async fn show_create_table(&self, table: &str) -> Result<Option<String>> {
        self.record(format!("show_create_table {}", table));
        if self.failing_ddl.contains(table) {
            return Err(SchemaError::query(
                table,
                "show create table",
                sqlx::Error::RowNotFound,
            ));
        }
        Ok(self.ddl.get(table).cloned())
    }

    async fn table_charset(&self, table: &str) -> Result<Option<TableCharset>> {
        self.record(format!("table_charset {}", table));
        if self.failing_charset.contains(table) {
            return Err(SchemaError::query(
                table,
                "default charset lookup",
                sqlx::Error::PoolTimedOut,
            ));
        }
        if self.malformed_charset.contains(table) {
            return Err(SchemaError::decode(
                format!("default charset of table {}", table),
                sqlx::Error::Decode("charset is NULL".into()),
            ));
        }
        Ok(self.charsets.get(table).cloned())
    }
}
