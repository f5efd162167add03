//! Error kinds reported by alias resolution and the config store

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GogoError {
    #[error("Failed to parse config file at line {line}:\n  {text}")]
    ConfigParse { line: usize, text: String },

    /// Carries the full request as typed, not just the alias part
    #[error("Alias '{0}' not found in config file")]
    AliasNotFound(String),

    #[error("Alias '{0}' already exists")]
    DuplicateAlias(String),

    #[error("Invalid alias '{0}': aliases must be non-empty and must not contain '=', whitespace or start with '#'")]
    InvalidAlias(String),

    #[error("Malformed ssh target '{0}'. Expected format: ssh://server[:shell] /path")]
    RemoteFormat(String),

    #[error("No alias specified for --add")]
    MissingAliasArgument,

    #[error("Failed to initialize config at {}", .path.display())]
    Bootstrap {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine home directory. Please set the HOME environment variable.")]
    HomeNotFound,

    #[error("Failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, GogoError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;

    #[test]
    fn test_io_message_leaves_cause_to_source_chain() {
        let err = GogoError::Bootstrap {
            path: PathBuf::from("/home/test/.config/gogo"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        assert_eq!(
            err.to_string(),
            "Failed to initialize config at /home/test/.config/gogo"
        );
        assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("denied"));
        assert_eq!(
            format!("{:#}", anyhow::Error::from(err)),
            "Failed to initialize config at /home/test/.config/gogo: denied"
        );
    }
}
