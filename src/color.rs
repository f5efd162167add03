//! Styling for stderr notices
//!
//! stdout is evaluated by the calling shell and is never styled.

use std::env;
use std::fmt;

use owo_colors::OwoColorize;

/// When to style stderr output
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Default)]
pub enum ColorMode {
    /// Always use colors
    Always,
    /// Use colors when stderr supports them
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorMode {
    /// Resolve the mode: `--color` flag, then `NO_COLOR`, then `TERM=dumb`, then auto
    #[must_use]
    pub fn resolve(cli_mode: Option<Self>) -> Self {
        // CLI flag has highest priority
        if let Some(mode) = cli_mode {
            return mode;
        }

        // NO_COLOR disables colors regardless of its value
        if env::var_os("NO_COLOR").is_some() {
            return Self::Never;
        }

        // Dumb terminals cannot render escape sequences
        if env::var("TERM").is_ok_and(|term| term == "dumb") {
            return Self::Never;
        }

        // Leave the final decision to terminal detection
        Self::Auto
    }

    #[must_use]
    pub fn should_colorize(self) -> bool {
        match self {
            Self::Always => true,
            // Notices go to stderr, so check that stream rather than stdout
            Self::Auto => supports_color::on_cached(supports_color::Stream::Stderr).is_some(),
            Self::Never => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    const fn symbol(self) -> &'static str {
        match self {
            Self::Info => "ℹ",
            Self::Warn => "⚠",
            Self::Error => "✗",
        }
    }
}

/// A stderr notice prefixed with a level symbol
pub struct Notice<D> {
    level: Level,
    mode: ColorMode,
    message: D,
}

impl<D: fmt::Display> fmt::Display for Notice<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.level.symbol();
        if !self.mode.should_colorize() {
            return write!(f, "{symbol} {}", self.message);
        }

        match self.level {
            Level::Info => write!(f, "{} {}", symbol.bright_cyan(), self.message),
            Level::Warn => write!(f, "{} {}", symbol.bright_yellow(), self.message),
            Level::Error => write!(f, "{} {}", symbol.bright_red().bold(), self.message),
        }
    }
}

pub const fn info<D: fmt::Display>(mode: ColorMode, message: D) -> Notice<D> {
    Notice {
        level: Level::Info,
        mode,
        message,
    }
}

pub const fn warn<D: fmt::Display>(mode: ColorMode, message: D) -> Notice<D> {
    Notice {
        level: Level::Warn,
        mode,
        message,
    }
}

pub const fn error<D: fmt::Display>(mode: ColorMode, message: D) -> Notice<D> {
    Notice {
        level: Level::Error,
        mode,
        message,
    }
}

/// Alias name highlighted in cyan
pub struct AliasName<'a> {
    mode: ColorMode,
    name: &'a str,
}

impl fmt::Display for AliasName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mode.should_colorize() {
            write!(f, "{}", self.name.cyan())
        } else {
            write!(f, "'{}'", self.name)
        }
    }
}

#[must_use]
pub const fn alias(mode: ColorMode, name: &str) -> AliasName<'_> {
    AliasName { mode, name }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_cli_flag_wins() {
        for mode in [ColorMode::Always, ColorMode::Auto, ColorMode::Never] {
            assert_eq!(ColorMode::resolve(Some(mode)), mode);
        }
    }

    #[test]
    fn test_resolve_no_color_env() {
        temp_env::with_var("NO_COLOR", Some("1"), || {
            assert_eq!(ColorMode::resolve(None), ColorMode::Never);
        });
    }

    #[test]
    fn test_resolve_term_dumb() {
        temp_env::with_vars([("TERM", Some("dumb")), ("NO_COLOR", None::<&str>)], || {
            assert_eq!(ColorMode::resolve(None), ColorMode::Never);
        });
    }

    #[test]
    fn test_resolve_cli_overrides_no_color() {
        temp_env::with_var("NO_COLOR", Some("1"), || {
            assert_eq!(ColorMode::resolve(Some(ColorMode::Always)), ColorMode::Always);
        });
    }

    #[test]
    fn test_resolve_default_auto() {
        temp_env::with_vars([("NO_COLOR", None::<&str>), ("TERM", None::<&str>)], || {
            assert_eq!(ColorMode::resolve(None), ColorMode::Auto);
        });
    }

    #[test]
    fn test_should_colorize() {
        assert!(ColorMode::Always.should_colorize());
        assert!(!ColorMode::Never.should_colorize());
    }

    #[test]
    fn test_notices_never() {
        assert_eq!(info(ColorMode::Never, "Using vi").to_string(), "ℹ Using vi");
        assert_eq!(warn(ColorMode::Never, "Ignored").to_string(), "⚠ Ignored");
        assert_eq!(error(ColorMode::Never, "Failed").to_string(), "✗ Failed");
    }

    #[test]
    fn test_notice_always_has_ansi() {
        let output = error(ColorMode::Always, "Alias not found").to_string();
        assert!(output.contains('\x1b'));
        assert!(output.contains("Alias not found"));
    }

    #[test]
    fn test_alias_name_never_is_quoted() {
        assert_eq!(alias(ColorMode::Never, "work").to_string(), "'work'");
    }

    #[test]
    fn test_alias_name_always_has_ansi() {
        let output = alias(ColorMode::Always, "work").to_string();
        assert!(output.contains('\x1b'));
        assert!(output.contains("work"));
    }
}
