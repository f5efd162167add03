//! Shared helpers for command handlers

use anyhow::Result;

use crate::config::parser::{parse, AliasTable};
use crate::config::store::ConfigStore;
use crate::context::Context;

/// Store for the context's config file
#[must_use]
pub fn open_store(ctx: &Context) -> ConfigStore {
    ConfigStore::new(&ctx.config_path, &ctx.home)
}

/// Load (bootstrapping if needed) and parse the alias table
///
/// # Errors
/// Returns an error if the config cannot be read, created or parsed
pub fn load_table(ctx: &Context) -> Result<AliasTable> {
    let lines = open_store(ctx).load()?;
    Ok(parse(&lines)?)
}

/// Print directive lines to stdout
pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
