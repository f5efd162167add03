//! Line-oriented `alias = value` parser

use std::collections::BTreeMap;

use crate::error::{GogoError, Result};

/// Alias table: alias name to raw target spec, sorted by alias name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: BTreeMap<String, String>,
}

impl AliasTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any previous value for the alias
    pub fn insert(&mut self, alias: impl Into<String>, target: impl Into<String>) {
        self.entries.insert(alias.into(), target.into());
    }

    #[must_use]
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.entries.get(alias).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, alias: &str) -> bool {
        self.entries.contains_key(alias)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in alias order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(alias, target)| (alias.as_str(), target.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AliasTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (alias, target) in iter {
            table.insert(alias, target);
        }
        table
    }
}

/// Parse raw config lines into an alias table
///
/// Blank lines and lines starting with `#` are skipped. Every other line is
/// split on its first `=`; later duplicates overwrite earlier ones.
///
/// # Errors
/// Returns `GogoError::ConfigParse` with the 1-based line number if a line
/// has no `=` or an empty alias name
pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<AliasTable> {
    let mut table = AliasTable::new();

    for (index, raw) in lines.iter().enumerate() {
        let line = raw.as_ref().trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parse_error = || GogoError::ConfigParse {
            line: index + 1,
            text: line.to_string(),
        };

        let (key, value) = line.split_once('=').ok_or_else(parse_error)?;
        let key = unquote(key);
        if key.is_empty() {
            return Err(parse_error());
        }

        table.insert(key, unquote(value));
    }

    Ok(table)
}

/// Trim whitespace, then any run of quotes and spaces at either end
fn unquote(text: &str) -> &str {
    text.trim()
        .trim_matches(|c: char| matches!(c, '"' | '\'' | ' '))
}
