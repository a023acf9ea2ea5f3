//! Error types for schema extraction and comparison.

use thiserror::Error;

/// Invalid or unreadable configuration.
pub const EXIT_CONFIG_ERROR: u8 = 1;
/// Schemas differ between the two databases.
pub const EXIT_DRIFT: u8 = 3;
/// Database unreachable or table listing failed.
pub const EXIT_CONNECTION_ERROR: u8 = 4;
/// A result row did not have the expected shape.
pub const EXIT_DECODE_ERROR: u8 = 5;
/// A single-table query failed.
pub const EXIT_QUERY_ERROR: u8 = 6;
/// File system error.
pub const EXIT_IO_ERROR: u8 = 7;

/// How a caller should treat an error.
///
/// Fatal errors mean the environment cannot be trusted (unreachable database,
/// broken driver contract) and a comparison run should stop. Recoverable
/// errors concern a single table and the run may continue without it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Fatal,
    Recoverable,
}

/// Main error type for schema operations.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Configuration error (invalid YAML, missing fields, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Opening or pinging the database failed
    #[error("Connection to [{dialect}] failed: {source}")]
    Connect {
        dialect: String,
        #[source]
        source: sqlx::Error,
    },

    /// The table listing query failed
    #[error("Listing tables on [{dialect}] failed: {source}")]
    ListTables {
        dialect: String,
        #[source]
        source: sqlx::Error,
    },

    /// A per-table metadata query failed
    #[error("{context} for table {table} failed: {source}")]
    Query {
        table: String,
        context: String,
        #[source]
        source: sqlx::Error,
    },

    /// A returned row did not decode into the expected shape
    #[error("Decoding {context} failed: {source}")]
    Decode {
        context: String,
        #[source]
        source: sqlx::Error,
    },

    /// Identifier rejected before being placed into SQL text
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SchemaError {
    /// Create a Connect error
    pub fn connect(dialect: impl Into<String>, source: sqlx::Error) -> Self {
        SchemaError::Connect {
            dialect: dialect.into(),
            source,
        }
    }

    /// Create a ListTables error
    pub fn list_tables(dialect: impl Into<String>, source: sqlx::Error) -> Self {
        SchemaError::ListTables {
            dialect: dialect.into(),
            source,
        }
    }

    /// Create a Query error for a specific table
    pub fn query(table: impl Into<String>, context: impl Into<String>, source: sqlx::Error) -> Self {
        SchemaError::Query {
            table: table.into(),
            context: context.into(),
            source,
        }
    }

    /// Create a Decode error
    pub fn decode(context: impl Into<String>, source: sqlx::Error) -> Self {
        SchemaError::Decode {
            context: context.into(),
            source,
        }
    }

    /// Classify the error into the fatal or recoverable tier.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SchemaError::Query { .. } | SchemaError::InvalidIdentifier(_) => {
                ErrorKind::Recoverable
            }
            _ => ErrorKind::Fatal,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.kind() == ErrorKind::Fatal
    }

    /// Process exit code for the command-line front end.
    pub fn exit_code(&self) -> u8 {
        match self {
            SchemaError::Config(_) | SchemaError::Yaml(_) | SchemaError::Json(_) => EXIT_CONFIG_ERROR,
            SchemaError::Connect { .. } | SchemaError::ListTables { .. } => EXIT_CONNECTION_ERROR,
            SchemaError::Decode { .. } => EXIT_DECODE_ERROR,
            SchemaError::Query { .. } | SchemaError::InvalidIdentifier(_) => EXIT_QUERY_ERROR,
            SchemaError::Io(_) => EXIT_IO_ERROR,
        }
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
