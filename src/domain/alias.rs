//! Alias resolution - map a request like `work/src/lib` onto the alias table

use std::path::Path;

use crate::config::parser::AliasTable;
use crate::config::store::ConfigStore;
use crate::error::{GogoError, Result};

/// Alias used when gogo runs without arguments
pub const DEFAULT_ALIAS: &str = "default";

/// A request resolved against the table: raw target plus residual sub-path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest<'a> {
    pub target: &'a str,
    /// Empty when the whole request matched an alias
    pub residual: &'a str,
}

/// Resolve `request` against `table`
///
/// An exact match on the full request always wins, so an alias literally
/// named `work/src` beats alias `work` with residual `src`. Otherwise the
/// request is split once on the first `/`.
///
/// # Errors
/// Returns `GogoError::AliasNotFound` naming the full request if neither
/// the request nor its first segment is a known alias
pub fn resolve<'a>(request: &'a str, table: &'a AliasTable) -> Result<ResolvedRequest<'a>> {
    if let Some(target) = table.get(request) {
        return Ok(ResolvedRequest {
            target,
            residual: "",
        });
    }

    let (head, tail) = request.split_once('/').unwrap_or((request, ""));

    table
        .get(head)
        .map(|target| ResolvedRequest {
            target,
            residual: tail,
        })
        .ok_or_else(|| GogoError::AliasNotFound(request.to_string()))
}

/// Check that an alias can be written and read back by the parser
///
/// # Errors
/// Returns `GogoError::InvalidAlias` for empty names, names containing `=`
/// or whitespace, and names starting with `#`
pub fn validate_alias(alias: &str) -> Result<()> {
    let invalid = alias.is_empty()
        || alias.starts_with('#')
        || alias.contains('=')
        || alias.chars().any(char::is_whitespace);

    if invalid {
        return Err(GogoError::InvalidAlias(alias.to_string()));
    }
    Ok(())
}

/// Record `directory` under a new alias
///
/// Paths are written as-is: a directory containing `=` or a newline cannot
/// be read back correctly.
///
/// # Errors
/// Returns `GogoError::DuplicateAlias` if the alias already exists in
/// `table` (the store is left untouched), or an I/O error from the store
pub fn add_alias(
    alias: &str,
    directory: &Path,
    table: &AliasTable,
    store: &ConfigStore,
) -> Result<()> {
    validate_alias(alias)?;

    if table.contains(alias) {
        return Err(GogoError::DuplicateAlias(alias.to_string()));
    }

    store.append(alias, &directory.display().to_string())
}
