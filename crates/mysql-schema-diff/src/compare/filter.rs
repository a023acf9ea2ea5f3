//! Table selection by name pattern.

/// Include/exclude table patterns. `*` matches any run of characters.
///
/// An empty include list selects every table. Exclusions win over inclusions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableFilter {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl TableFilter {
    pub fn new(include: Vec<String>, exclude: Vec<String>) -> Self {
        Self { include, exclude }
    }

    pub fn matches(&self, table: &str) -> bool {
        let included =
            self.include.is_empty() || self.include.iter().any(|p| wildcard_match(p, table));
        included && !self.exclude.iter().any(|p| wildcard_match(p, table))
    }
}

/// Match `name` against `pattern`, where `*` matches zero or more characters.
fn wildcard_match(pattern: &str, name: &str) -> bool {
    let mut parts = pattern.split('*');
    let Some(first) = parts.next() else {
        return name.is_empty();
    };
    let Some(mut rest) = name.strip_prefix(first) else {
        return false;
    };

    let tail: Vec<&str> = parts.collect();
    let Some((last, middle)) = tail.split_last() else {
        // No '*' at all
        return rest.is_empty();
    };

    for part in middle {
        match rest.find(part) {
            Some(pos) => rest = &rest[pos + part.len()..],
            None => return false,
        }
    }
    rest.len() >= last.len() && rest.ends_with(last)
}
