//! Goto command - Resolve an alias request into a cd or ssh directive

use anyhow::Result;

use crate::color::{self, ColorMode};
use crate::commands::common::load_table;
use crate::context::Context;
use crate::domain::alias::{resolve, ResolvedRequest, DEFAULT_ALIAS};
use crate::domain::directive::Directive;
use crate::domain::target::TargetSpec;

/// Resolve `request` (or the default alias) and print the directive
///
/// # Errors
/// Returns an error if:
/// - The config cannot be loaded or parsed
/// - The alias is not found
/// - The target is a malformed ssh spec
pub fn cmd_goto(request: Option<&str>, ctx: &Context, color_mode: ColorMode) -> Result<()> {
    let directive = resolve_directive(request, ctx, color_mode)?;
    println!("{directive}");
    Ok(())
}

/// Build the directive for `request` without printing it
///
/// # Errors
/// See [`cmd_goto`]
pub fn resolve_directive(
    request: Option<&str>,
    ctx: &Context,
    color_mode: ColorMode,
) -> Result<Directive> {
    // Bootstraps the config on first run
    let table = load_table(ctx)?;
    let home = ctx.home.display().to_string();

    // Without a request, fall back to the default alias, then to home
    let ResolvedRequest { target, residual } = match request {
        Some(request) => resolve(request, &table)?,
        None => ResolvedRequest {
            target: table.get(DEFAULT_ALIAS).unwrap_or(home.as_str()),
            residual: "",
        },
    };

    let spec = TargetSpec::parse(target)?;

    // Sub-paths are not carried over to remote targets
    if spec.is_remote() && !residual.is_empty() {
        // Name the alias only, not the ignored sub-path
        let alias = request.map_or(DEFAULT_ALIAS, |r| r.split_once('/').map_or(r, |(head, _)| head));
        eprintln!(
            "{}",
            color::warn(
                color_mode,
                format!(
                    "Sub-path '{residual}' is ignored for ssh alias {}",
                    color::alias(color_mode, alias)
                )
            )
        );
    }

    Ok(spec.into_directive(residual, &ctx.home, ctx.shell.as_deref()))
}
