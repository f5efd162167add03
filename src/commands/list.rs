//! List command - Print every alias, sorted by name

use anyhow::Result;

use crate::color::{self, ColorMode};
use crate::commands::common::{load_table, print_lines};
use crate::config::parser::AliasTable;
use crate::context::Context;
use crate::domain::directive::Directive;

const HEADER: &str = "Current gogo configuration (sorted alphabetically):";

/// Print all aliases as `echo` directives
///
/// # Errors
/// Returns an error if the config cannot be loaded or parsed
pub fn cmd_list(ctx: &Context, color_mode: ColorMode) -> Result<()> {
    let table = load_table(ctx)?;
    let lines = format_listing(&table);

    // The header is still printed for an empty table
    if table.is_empty() {
        eprintln!("{}", color::info(color_mode, "No configuration"));
    }

    print_lines(&lines);
    Ok(())
}

/// Header plus one right-justified `alias : value` line per entry
#[must_use]
pub fn format_listing(table: &AliasTable) -> Vec<String> {
    // Two columns of padding past the longest alias
    let width = table
        .iter()
        .map(|(alias, _)| alias.chars().count())
        .max()
        .unwrap_or(0)
        + 2;

    std::iter::once(HEADER.to_string())
        .chain(
            table
                .iter()
                .map(|(alias, target)| format!("{alias:>width$} : {target}")),
        )
        .map(|line| Directive::Echo(line).emit())
        .collect()
}
