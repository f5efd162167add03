//! Edit command - Open the config file in the user's editor

use anyhow::Result;

use crate::color::{self, ColorMode};
use crate::commands::common::open_store;
use crate::context::{Context, FALLBACK_EDITOR};
use crate::domain::directive::Directive;

/// Print a directive that opens the config in `$EDITOR`
///
/// The config is created first so the editor never opens an empty buffer.
///
/// # Errors
/// Returns an error if the config file cannot be created
pub fn cmd_edit(ctx: &Context, color_mode: ColorMode) -> Result<()> {
    let directive = edit_directive(ctx)?;

    // Tell the user why vi opened instead of their editor
    if ctx.editor.is_none() {
        eprintln!(
            "{}",
            color::info(
                color_mode,
                format!("$EDITOR is not set. Using {FALLBACK_EDITOR}.")
            )
        );
    }

    println!("{directive}");
    Ok(())
}

/// Build the editor directive, bootstrapping the config file
///
/// # Errors
/// Returns an error if the config file cannot be created
pub fn edit_directive(ctx: &Context) -> Result<Directive> {
    let store = open_store(ctx);
    // Only the side effect matters: the file must exist before the editor opens
    store.load()?;

    Ok(Directive::OpenEditor {
        editor: ctx.editor_or_fallback().to_string(),
        path: store.path().to_path_buf(),
    })
}
