//! Persisted alias table - raw line access and first-run bootstrap

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::template::default_document;
use crate::error::{GogoError, Result};

/// Line-level access to the config file
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    home: PathBuf,
}

impl ConfigStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, home: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            home: home.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all lines, writing the default document first if the file is absent
    ///
    /// # Errors
    /// Returns `GogoError::Bootstrap` if the config directory or the default
    /// file cannot be created, or `GogoError::Io` if reading fails
    pub fn load(&self) -> Result<Vec<String>> {
        self.ensure_parent_dir()?;

        if !self.path.exists() {
            let document = default_document(&self.home, self.config_dir());
            fs::write(&self.path, &document).map_err(|source| GogoError::Bootstrap {
                path: self.path.clone(),
                source,
            })?;
            return Ok(document.lines().map(String::from).collect());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| GogoError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(content.lines().map(String::from).collect())
    }

    /// Read lines if the file exists, without bootstrapping
    ///
    /// Returns an empty list when the file is missing or unreadable.
    #[must_use]
    pub fn peek(&self) -> Vec<String> {
        fs::read_to_string(&self.path)
            .map(|content| content.lines().map(String::from).collect())
            .unwrap_or_default()
    }

    /// Append `alias = target` as a new line
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the
    /// file cannot be opened for appending
    pub fn append(&self, alias: &str, target: &str) -> Result<()> {
        self.ensure_parent_dir()?;

        let io_error = |source| GogoError::Io {
            path: self.path.clone(),
            source,
        };

        let needs_newline = fs::read(&self.path)
            .map(|bytes| bytes.last().is_some_and(|last| *last != b'\n'))
            .unwrap_or(false);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(io_error)?;

        let separator = if needs_newline { "\n" } else { "" };
        writeln!(file, "{separator}{alias} = {target}").map_err(io_error)?;
        Ok(())
    }

    fn config_dir(&self) -> &Path {
        self.path.parent().unwrap_or(self.path.as_path())
    }

    /// Create the config directory tree (idempotent)
    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| GogoError::Bootstrap {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    }
}
