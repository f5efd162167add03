//! Shell directives - the single command the calling shell evaluates

use std::fmt;
use std::path::PathBuf;

/// The resolved action for the calling shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `cd` into a local directory
    ChangeDirectory(PathBuf),
    /// Interactive ssh session that enters `path` and then execs `shell`
    RemoteSession {
        server: String,
        shell: String,
        path: String,
    },
    /// Open a file in an editor
    OpenEditor { editor: String, path: PathBuf },
    /// Print a message through the calling shell
    Echo(String),
}

impl Directive {
    /// Render as one line of shell code terminated by `;`
    #[must_use]
    pub fn emit(&self) -> String {
        match self {
            Self::ChangeDirectory(path) => {
                format!("cd {};", quote(&path.display().to_string()))
            }
            Self::RemoteSession {
                server,
                shell,
                path,
            } => format!(
                "ssh {} -t {};",
                quote(server),
                quote(&format!("cd {path}; {shell}"))
            ),
            // The editor is left unquoted so `EDITOR="code --wait"` works
            Self::OpenEditor { editor, path } => {
                format!("{editor} {};", quote(&path.display().to_string()))
            }
            Self::Echo(text) => format!("echo {};", quote(text)),
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.emit())
    }
}

/// Single-quote `text` for POSIX shells and fish
///
/// Embedded single quotes become `'"'"'`.
#[must_use]
pub fn quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', r#"'"'"'"#))
}

/// Render each line of `text` as an `echo` directive
#[must_use]
pub fn echo_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| Directive::Echo(line.to_string()).emit())
        .collect()
}
