//! DDL canonicalization.
//!
//! `SHOW CREATE TABLE` output differs between servers for reasons that do not
//! change the table's structure. This module erases those differences so two
//! structurally equal tables produce identical text:
//!
//! - Integer display widths the server adds on its own (`int(11)` → `int`)
//! - Index algorithm annotations (`USING BTREE`)
//! - `CHARACTER SET` / `COLLATE` clauses that only repeat the table default
//!
//! Explicit non-default character sets and collations are kept, as is the
//! table option trailer (`DEFAULT CHARSET=... COLLATE=...`).

mod normalizer;

pub use normalizer::SchemaNormalizer;

use crate::core::schema::TableCharset;

/// Literal substring rewrites. Every occurrence is replaced.
///
/// Patterns are disjoint and each replacement is shorter than its pattern.
pub const DISPLAY_WIDTH_RULES: &[(&str, &str)] = &[
    (" tinyint(4) ", " tinyint "),
    (" tinyint(3) ", " tinyint "),
    (" smallint(6) ", " smallint "),
    (" mediumint(9) ", " mediumint "),
    (" int(11) ", " int "),
    (" int(10) ", " int "),
    (" int(9) ", " int "),
    (" int(8) ", " int "),
    (" int(7) ", " int "),
    (" int(6) ", " int "),
    (" int(5) ", " int "),
    (" int(4) ", " int "),
    (" int(3) ", " int "),
    (" int(2) ", " int "),
    (" int(1) ", " int "),
    (" bigint(20) ", " bigint "),
    (" USING BTREE", " "),
];

/// Strip display widths and index algorithm annotations.
///
/// Rules are reapplied until none matches, so two adjacent columns sharing a
/// separating space (` int(11) int(11) `) both lose their width and the
/// result is a fixed point.
pub fn strip_display_widths(ddl: &str) -> String {
    let mut current = ddl.to_string();
    loop {
        let mut changed = false;
        for (pattern, replacement) in DISPLAY_WIDTH_RULES {
            if current.contains(pattern) {
                current = current.replace(pattern, replacement);
                changed = true;
            }
        }
        if !changed {
            return current;
        }
    }
}

/// Remove `CHARACTER SET` and `COLLATE` clauses naming the table default.
///
/// A clause only matches when the name ends at a word boundary: with a
/// default of `utf8`, an explicit `CHARACTER SET utf8mb4` is left alone. An
/// empty charset or collation disables that half of the rewrite.
pub fn strip_default_charset(ddl: &str, charset: &TableCharset) -> String {
    let without_charset = remove_clause(ddl, " CHARACTER SET ", &charset.character_set);
    remove_clause(&without_charset, " COLLATE ", &charset.collation)
}

/// Full canonical form: display widths first, then default charset clauses.
pub fn canonicalize(ddl: &str, charset: &TableCharset) -> String {
    strip_default_charset(&strip_display_widths(ddl), charset)
}

fn remove_clause(ddl: &str, keyword: &str, name: &str) -> String {
    if name.is_empty() {
        return ddl.to_string();
    }

    let needle = format!("{}{}", keyword, name);
    let mut out = String::with_capacity(ddl.len());
    let mut rest = ddl;

    while let Some(pos) = rest.find(&needle) {
        let end = pos + needle.len();
        let at_boundary = rest[end..]
            .chars()
            .next()
            .map_or(true, |c| !is_identifier_char(c));

        if at_boundary {
            out.push_str(&rest[..pos]);
        } else {
            out.push_str(&rest[..end]);
        }
        rest = &rest[end..];
    }

    out.push_str(rest);
    out
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}
