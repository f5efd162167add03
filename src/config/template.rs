//! Default alias table written on first use

use std::path::Path;

/// Generate the default config document for the given home directory
///
/// Contains the `default` alias, a commented tutorial, an example ssh alias
/// pointing at localhost and two demonstration aliases.
#[must_use]
pub fn default_document(home: &Path, config_dir: &Path) -> String {
    let home_str = home.display();
    let user = home
        .file_name()
        .map_or_else(|| "user".to_string(), |name| name.to_string_lossy().into_owned());
    let config_dir_str = tilde_path(home, config_dir);

    format!(
        "# This is an example 'gogo' config file.
# Every line starting with a '#' character is treated as a comment.
# Each entry should be in the following format:
# alias = /path/to/directory/
# Example:

default = {home_str}

# 'default' is a special alias, used when gogo is run without an alias.
# If it is not set in this file it points to your home directory.

# You can also jump to a directory on an ssh server, with a slightly
# different syntax:
# alias = ssh://server:shell /path/to/directory/

# The shell may be omitted, in which case gogo uses the $SHELL of your
# local session, so that path must also exist on the server. When $SHELL
# is unset the server expands its own ${{SHELL}}.
# alias = ssh://other-server /path/to/directory/

sshloc = ssh://{user}@127.0.0.1:/bin/bash {home_str}
- = -
gogo = {config_dir_str}
"
    )
}

/// Render a path below home as `~/...`
fn tilde_path(home: &Path, path: &Path) -> String {
    match path.strip_prefix(home) {
        Ok(rel) if !rel.as_os_str().is_empty() => format!("~/{}", rel.display()),
        _ => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parser::parse;

    #[test]
    fn test_default_document_parses() {
        let doc = default_document(Path::new("/home/alice"), Path::new("/home/alice/.config/gogo"));
        let lines: Vec<String> = doc.lines().map(String::from).collect();
        let table = parse(&lines).unwrap();

        assert_eq!(table.get("default"), Some("/home/alice"));
        assert_eq!(
            table.get("sshloc"),
            Some("ssh://alice@127.0.0.1:/bin/bash /home/alice")
        );
        assert_eq!(table.get("-"), Some("-"));
        assert_eq!(table.get("gogo"), Some("~/.config/gogo"));
    }

    #[test]
    fn test_default_document_config_dir_outside_home() {
        let doc = default_document(Path::new("/home/alice"), Path::new("/etc/xdg/gogo"));
        assert!(doc.contains("gogo = /etc/xdg/gogo\n"));
    }

    #[test]
    fn test_default_document_has_tutorial_comments() {
        let doc = default_document(Path::new("/home/alice"), Path::new("/home/alice/.config/gogo"));
        assert!(doc.starts_with('#'));
        assert!(doc.contains("# alias = ssh://server:shell /path/to/directory/"));
        assert!(doc.contains("${SHELL}"));
    }

    #[test]
    fn test_default_document_warns_local_shell_is_sent_to_server() {
        let doc = default_document(Path::new("/home/alice"), Path::new("/home/alice/.config/gogo"));
        assert!(doc.contains("# local session, so that path must also exist on the server."));
    }
}
