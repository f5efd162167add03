//! Target classification - decode raw target specs into local or remote targets

use std::path::{Path, PathBuf};

use crate::domain::directive::Directive;
use crate::error::{GogoError, Result};

/// Prefix marking a remote target
pub const SSH_PREFIX: &str = "ssh://";

/// Sent when no shell is configured so the remote side expands it
pub const REMOTE_SHELL_FALLBACK: &str = "${SHELL}";

/// A decoded target spec
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSpec {
    /// Local directory, possibly `~/`-relative
    Local(String),
    /// `ssh://server[:shell] path`
    Remote {
        server: String,
        shell: Option<String>,
        path: String,
    },
}

impl TargetSpec {
    /// Decode a raw target string
    ///
    /// # Errors
    /// Returns `GogoError::RemoteFormat` if an `ssh://` target lacks the
    /// space between address and path, or has an empty server or path
    pub fn parse(raw: &str) -> Result<Self> {
        let Some(address) = raw.strip_prefix(SSH_PREFIX) else {
            return Ok(Self::Local(raw.to_string()));
        };

        let format_error = || GogoError::RemoteFormat(raw.to_string());

        let (address_part, path) = address.split_once(' ').ok_or_else(format_error)?;
        let path = path.trim();

        let (server, shell) = match address_part.split_once(':') {
            Some((server, shell)) => (server, Some(shell).filter(|s| !s.is_empty())),
            None => (address_part, None),
        };

        if server.is_empty() || path.is_empty() {
            return Err(format_error());
        }

        Ok(Self::Remote {
            server: server.to_string(),
            shell: shell.map(String::from),
            path: path.to_string(),
        })
    }

    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }

    /// Turn the target into the directive to emit
    ///
    /// `residual` is appended to local paths only; remote targets ignore it.
    /// `default_shell` is used for remote targets without an explicit shell.
    #[must_use]
    pub fn into_directive(self, residual: &str, home: &Path, default_shell: Option<&str>) -> Directive {
        match self {
            Self::Local(path) => {
                let joined = if residual.is_empty() {
                    PathBuf::from(path)
                } else {
                    Path::new(&path).join(residual)
                };
                Directive::ChangeDirectory(expand_home(&joined, home))
            }
            Self::Remote {
                server,
                shell,
                path,
            } => Directive::RemoteSession {
                server,
                shell: shell
                    .or_else(|| default_shell.map(String::from))
                    .unwrap_or_else(|| REMOTE_SHELL_FALLBACK.to_string()),
                path,
            },
        }
    }
}

/// Decode `raw` and build its directive in one step
///
/// # Errors
/// Returns `GogoError::RemoteFormat` for malformed `ssh://` targets
pub fn interpret(
    raw: &str,
    residual: &str,
    home: &Path,
    default_shell: Option<&str>,
) -> Result<Directive> {
    Ok(TargetSpec::parse(raw)?.into_directive(residual, home, default_shell))
}

/// Expand a leading `~` (alone or followed by `/`) to `home`
#[must_use]
pub fn expand_home(path: &Path, home: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) if rest.as_os_str().is_empty() => home.to_path_buf(),
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}
