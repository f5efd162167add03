//! Process context - everything read from the environment, resolved once
//!
//! Components receive a `Context` instead of reading `HOME`, `SHELL` or
//! `EDITOR` themselves, so tests can point them at temporary locations.

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::{GogoError, Result};

/// Application name, used for the config directory and file name
pub const APP_NAME: &str = "gogo";

/// Editor used when `EDITOR` is not set
pub const FALLBACK_EDITOR: &str = "vi";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    /// User home directory, base for `~/` expansion
    pub home: PathBuf,
    /// Location of the alias table
    pub config_path: PathBuf,
    /// `SHELL` at invocation, default shell for remote sessions
    pub shell: Option<String>,
    /// `EDITOR` at invocation
    pub editor: Option<String>,
    /// Directory `--add` records; `None` reads the process working directory
    /// when it is first needed
    pub current_dir: Option<PathBuf>,
}

impl Context {
    /// Build the context from the process environment
    ///
    /// The working directory is not read here: it may have been deleted,
    /// and only `--add` needs it.
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined
    pub fn from_env() -> Result<Self> {
        let home = dirs::home_dir().ok_or(GogoError::HomeNotFound)?;
        let xdg_config_home = env::var_os("XDG_CONFIG_HOME");
        let config_path = Self::config_path_for(&home, xdg_config_home.as_deref());

        Ok(Self {
            home,
            config_path,
            shell: non_empty_var("SHELL"),
            editor: non_empty_var("EDITOR"),
            current_dir: None,
        })
    }

    /// Directory to record for `--add`
    ///
    /// # Errors
    /// Returns `GogoError::Io` if the working directory no longer exists
    pub fn current_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.current_dir {
            return Ok(dir.clone());
        }

        env::current_dir().map_err(|source| GogoError::Io {
            path: PathBuf::from("."),
            source,
        })
    }

    /// Config file location for the given home directory
    ///
    /// `xdg_config_home` (the value of `XDG_CONFIG_HOME`) is used when it is
    /// absolute. Fallback: `$HOME/.config/gogo/gogo.conf`
    #[must_use]
    pub fn config_path_for(home: &Path, xdg_config_home: Option<&OsStr>) -> PathBuf {
        let config_home = xdg_config_home
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
            .unwrap_or_else(|| home.join(".config"));

        config_home
            .join(APP_NAME)
            .join(format!("{APP_NAME}.conf"))
    }

    /// Config file location without requiring a full context
    ///
    /// Used by shell completion, where failing is not an option.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        let xdg_config_home = env::var_os("XDG_CONFIG_HOME");
        dirs::home_dir().map(|home| Self::config_path_for(&home, xdg_config_home.as_deref()))
    }

    /// Editor to launch, falling back to `vi`
    #[must_use]
    pub fn editor_or_fallback(&self) -> &str {
        self.editor.as_deref().unwrap_or(FALLBACK_EDITOR)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_under_home() {
        let path = Context::config_path_for(Path::new("/home/test"), None);
        assert_eq!(path, PathBuf::from("/home/test/.config/gogo/gogo.conf"));
    }

    #[test]
    fn test_config_path_respects_xdg_config_home() {
        let path =
            Context::config_path_for(Path::new("/home/test"), Some(OsStr::new("/tmp/xdg")));
        assert_eq!(path, PathBuf::from("/tmp/xdg/gogo/gogo.conf"));
    }

    #[test]
    fn test_config_path_ignores_relative_xdg_config_home() {
        let path =
            Context::config_path_for(Path::new("/home/test"), Some(OsStr::new("relative/xdg")));
        assert_eq!(path, PathBuf::from("/home/test/.config/gogo/gogo.conf"));
    }

    #[test]
    fn test_from_env_reads_xdg_config_home() {
        temp_env::with_var("XDG_CONFIG_HOME", Some("/tmp/xdg"), || {
            let ctx = Context::from_env().unwrap();
            assert_eq!(ctx.config_path, PathBuf::from("/tmp/xdg/gogo/gogo.conf"));
        });
    }

    #[test]
    fn test_from_env_defers_current_dir() {
        let ctx = Context::from_env().unwrap();
        assert_eq!(ctx.current_dir, None);
        assert_eq!(ctx.current_dir().unwrap(), env::current_dir().unwrap());
    }

    #[test]
    fn test_current_dir_override() {
        let ctx = Context {
            current_dir: Some(PathBuf::from("/srv/site")),
            ..Context::from_env().unwrap()
        };
        assert_eq!(ctx.current_dir().unwrap(), PathBuf::from("/srv/site"));
    }

    #[test]
    fn test_from_env_reads_shell_and_editor() {
        temp_env::with_vars(
            [("SHELL", Some("/bin/zsh")), ("EDITOR", Some("nvim"))],
            || {
                let ctx = Context::from_env().unwrap();
                assert_eq!(ctx.shell.as_deref(), Some("/bin/zsh"));
                assert_eq!(ctx.editor_or_fallback(), "nvim");
            },
        );
    }

    #[test]
    fn test_from_env_blank_editor_falls_back() {
        temp_env::with_var("EDITOR", Some("  "), || {
            let ctx = Context::from_env().unwrap();
            assert_eq!(ctx.editor, None);
            assert_eq!(ctx.editor_or_fallback(), FALLBACK_EDITOR);
        });
    }
}
