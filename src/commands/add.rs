//! Add command - Record the current directory under a new alias

use anyhow::Result;

use crate::commands::common::{load_table, open_store};
use crate::context::Context;
use crate::domain::alias::add_alias;
use crate::domain::directive::Directive;

/// Append `alias = <current directory>` to the config
///
/// # Errors
/// Returns an error if:
/// - The working directory no longer exists
/// - The alias is invalid or already exists
/// - The config cannot be loaded, parsed or written
pub fn cmd_add(alias: &str, ctx: &Context) -> Result<()> {
    // Resolved here only; other actions must work from a deleted directory
    let directory = ctx.current_dir()?;
    // Duplicates are checked against the parsed table, not the raw lines
    let table = load_table(ctx)?;
    add_alias(alias, &directory, &table, &open_store(ctx))?;

    let message = format!("Added alias '{alias}' = {}", directory.display());
    println!("{}", Directive::Echo(message));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::common::load_table;
    use std::fs;

    fn context_in(dir: &std::path::Path) -> Context {
        Context {
            home: dir.to_path_buf(),
            config_path: dir.join("gogo/gogo.conf"),
            shell: None,
            editor: None,
            current_dir: Some(dir.join("projects/site")),
        }
    }

    #[test]
    fn test_add_records_current_directory() {
        let temp = tempfile::tempdir().unwrap();
        let ctx = context_in(temp.path());

        cmd_add("site", &ctx).unwrap();

        let table = load_table(&ctx).unwrap();
        let expected = temp.path().join("projects/site").display().to_string();
        assert_eq!(table.get("site"), Some(expected.as_str()));
    }

    #[test]
    fn test_add_duplicate_fails() {
        let temp = tempfile::tempdir().unwrap();
        let ctx = context_in(temp.path());
        fs::create_dir_all(temp.path().join("gogo")).unwrap();
        fs::write(&ctx.config_path, "site = /elsewhere\n").unwrap();

        let err = cmd_add("site", &ctx).unwrap_err();

        assert!(err.to_string().contains("already exists"));
        assert_eq!(
            fs::read_to_string(&ctx.config_path).unwrap(),
            "site = /elsewhere\n"
        );
    }
}
