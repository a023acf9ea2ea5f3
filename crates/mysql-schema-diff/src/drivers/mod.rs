//! Database driver implementations.
//!
//! - [`mysql`]: MySQL/MariaDB connection handle implementing
//!   [`MetadataSource`](crate::core::MetadataSource)

pub mod mysql;

pub use mysql::MysqlSource;
