//! Identifier validation and quoting for statements that cannot bind a table name.
//!
//! `SHOW CREATE TABLE` takes an identifier, not a value, so the table name has
//! to be spliced into the statement text. Names are validated and then
//! backtick-quoted with embedded backticks doubled, which keeps a hostile
//! table name from escaping the identifier position.

use crate::error::{Result, SchemaError};

/// MySQL limits table names to 64 characters.
const MAX_IDENTIFIER_CHARS: usize = 64;

/// Validate an identifier before it is placed into SQL text.
///
/// Rejects:
/// - Empty identifiers
/// - Identifiers containing null bytes
/// - Identifiers longer than MySQL allows
pub fn validate_identifier(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(SchemaError::InvalidIdentifier(
            "identifier cannot be empty".to_string(),
        ));
    }

    if name.contains('\0') {
        return Err(SchemaError::InvalidIdentifier(format!(
            "identifier contains null byte: {:?}",
            name
        )));
    }

    let chars = name.chars().count();
    if chars > MAX_IDENTIFIER_CHARS {
        return Err(SchemaError::InvalidIdentifier(format!(
            "identifier exceeds maximum length of {} characters (got {}): {:?}",
            MAX_IDENTIFIER_CHARS, chars, name
        )));
    }

    Ok(())
}

/// Quote a MySQL identifier using backticks.
///
/// ```ignore
/// assert_eq!(quote_mysql("users")?, "`users`");
/// assert_eq!(quote_mysql("table`name")?, "`table``name`");
/// ```
pub fn quote_mysql(name: &str) -> Result<String> {
    validate_identifier(name)?;
    Ok(format!("`{}`", name.replace('`', "``")))
}
