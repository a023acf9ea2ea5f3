//! Core abstractions shared by drivers, the normalizer and the comparator.
//!
//! - [`schema`]: table listing rows and charset records
//! - [`traits`]: the [`MetadataSource`] trait drivers implement
//! - [`identifier`]: identifier validation and quoting

pub mod identifier;
pub mod schema;
pub mod traits;

pub use identifier::{quote_mysql, validate_identifier};
pub use schema::{RawSchema, TableCharset, TableDescriptor};
pub use traits::MetadataSource;
