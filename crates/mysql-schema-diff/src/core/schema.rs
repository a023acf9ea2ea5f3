//! Metadata records produced while reading a database's table catalog.
//!
//! All of these are transient: they are built from a query result and handed
//! to the caller, never cached.

use serde::Serialize;

/// One row of the table listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableDescriptor {
    /// Table name.
    pub name: String,
    /// Storage engine. `None` for views and other non-table objects.
    pub engine: Option<String>,
}

impl TableDescriptor {
    /// Whether this row describes a real table rather than a view.
    pub fn is_base_table(&self) -> bool {
        self.engine.is_some()
    }
}

/// A table's default character set and collation.
///
/// Both fields are empty when the lookup found nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableCharset {
    pub character_set: String,
    pub collation: String,
}

impl TableCharset {
    pub fn new(character_set: impl Into<String>, collation: impl Into<String>) -> Self {
        Self {
            character_set: character_set.into(),
            collation: collation.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.character_set.is_empty() && self.collation.is_empty()
    }
}

/// DDL text as returned by the server together with the table defaults
/// needed to canonicalize it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSchema {
    pub table: String,
    pub ddl: String,
    pub charset: TableCharset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_views_are_not_base_tables() {
        let view = TableDescriptor {
            name: "active_users".to_string(),
            engine: None,
        };
        let table = TableDescriptor {
            name: "users".to_string(),
            engine: Some("InnoDB".to_string()),
        };
        assert!(!view.is_base_table());
        assert!(table.is_base_table());
    }

    #[test]
    fn test_default_charset_is_empty() {
        assert!(TableCharset::default().is_empty());
        assert!(!TableCharset::new("utf8mb4", "").is_empty());
    }

    #[test]
    fn test_descriptor_json_keeps_null_engine() {
        let view = TableDescriptor {
            name: "active_users".to_string(),
            engine: None,
        };
        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            serde_json::json!({ "name": "active_users", "engine": null })
        );
    }

    #[test]
    fn test_charset_json_field_names() {
        let charset = TableCharset::new("utf8mb4", "utf8mb4_general_ci");
        assert_eq!(
            serde_json::to_value(&charset).unwrap(),
            serde_json::json!({
                "character_set": "utf8mb4",
                "collation": "utf8mb4_general_ci"
            })
        );
    }
}
