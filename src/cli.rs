// CommandFactory is used by tests via Cli::command()
#[allow(unused_imports)]
use clap::CommandFactory;

use clap::Parser;
use clap_complete::engine::{ArgValueCompleter, CompletionCandidate};
use std::ffi::OsStr;
use std::path::Path;

use crate::color::ColorMode;
use crate::config::parser::{parse, AliasTable};
use crate::config::store::ConfigStore;
use crate::context::Context;
use crate::domain::target::{expand_home, TargetSpec};
use crate::error::GogoError;

const EXAMPLES: &str = "Examples:
  gogo              Go to the default directory ($HOME if not set)
  gogo work         Go to the directory aliased as \"work\"
  gogo work/src/lib Go to a sub-path of the \"work\" directory
  gogo server       Open an ssh session if \"server\" is an ssh alias
  gogo -a proj      Add the current directory as \"proj\"
  gogo -l           List all configured aliases

Config format (one per line):
  alias = /path/to/directory
  alias = ssh://server[:shell] /path/to/directory

Without :shell, ssh aliases start your local $SHELL on the server,
so that path must exist there too.";

/// Quick directory and ssh session shortcuts
#[derive(Parser, Debug)]
#[command(
    name = "gogo",
    author,
    version,
    about,
    long_about = None,
    disable_version_flag = true,
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Alias to go to, optionally followed by a sub-path (alias/sub/path)
    #[arg(
        value_name = "ALIAS",
        allow_hyphen_values = true,
        add = ArgValueCompleter::new(list_aliases)
    )]
    pub target: Option<String>,

    /// Add the current directory to the config under ALIAS
    #[arg(
        short = 'a',
        long = "add",
        value_name = "ALIAS",
        num_args = 0..=1,
        conflicts_with_all = ["target", "ls", "edit", "init"]
    )]
    pub add: Option<Option<String>>,

    /// List all configured aliases
    #[arg(short = 'l', long = "ls", conflicts_with_all = ["target", "edit", "init"])]
    pub ls: bool,

    /// Open the config file in $EDITOR
    #[arg(short = 'e', long = "edit", conflicts_with_all = ["target", "init"])]
    pub edit: bool,

    /// Print the shell integration script
    #[arg(long, value_name = "SHELL", conflicts_with = "target")]
    pub init: Option<InitShell>,

    /// Print version information
    #[arg(short = 'v', long = "version", conflicts_with_all = ["target", "add", "ls", "edit", "init"])]
    pub version: bool,

    /// When to use colored output on stderr
    #[arg(long, value_name = "WHEN", ignore_case = true)]
    pub color: Option<ColorMode>,
}

/// Shells with an integration script
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InitShell {
    Bash,
    Zsh,
    Fish,
}

/// What a single invocation does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Resolve an alias request (`None` means the default alias)
    Goto(Option<String>),
    List,
    Edit,
    Add(String),
    Version,
    Init(InitShell),
}

impl Cli {
    /// Convert parsed flags into the action to run
    ///
    /// # Errors
    /// Returns `GogoError::MissingAliasArgument` for `--add` without a value
    pub fn action(&self) -> Result<Action, GogoError> {
        if self.version {
            return Ok(Action::Version);
        }
        if let Some(add) = &self.add {
            return add
                .clone()
                .map(Action::Add)
                .ok_or(GogoError::MissingAliasArgument);
        }
        if self.ls {
            return Ok(Action::List);
        }
        if self.edit {
            return Ok(Action::Edit);
        }
        if let Some(shell) = self.init {
            return Ok(Action::Init(shell));
        }
        Ok(Action::Goto(self.target.clone()))
    }
}

/// List alias names (and sub-directories of local aliases) for completion
///
/// Reads the config without creating it; returns nothing on any failure.
pub fn list_aliases(current: &OsStr) -> Vec<CompletionCandidate> {
    let Some(path) = Context::default_config_path() else {
        return Vec::new();
    };
    let Some(home) = dirs::home_dir() else {
        return Vec::new();
    };

    let lines = ConfigStore::new(path, &home).peek();
    let Ok(table) = parse(&lines) else {
        return Vec::new();
    };

    alias_candidates(&current.to_string_lossy(), &table, &home)
        .into_iter()
        .map(CompletionCandidate::new)
        .collect()
}

/// Completion candidates for a partially typed request
#[must_use]
pub fn alias_candidates(prefix: &str, table: &AliasTable, home: &Path) -> Vec<String> {
    let mut candidates: Vec<String> = table
        .iter()
        .map(|(alias, _)| alias)
        .filter(|alias| alias.starts_with(prefix))
        .map(String::from)
        .collect();

    if let Some((head, rest)) = prefix.split_once('/') {
        candidates.extend(subdirectory_candidates(head, rest, table, home));
    }

    candidates
}

/// Complete `head/rest` against directories under the local target of `head`
fn subdirectory_candidates(head: &str, rest: &str, table: &AliasTable, home: &Path) -> Vec<String> {
    let Some(TargetSpec::Local(base)) = table.get(head).and_then(|raw| TargetSpec::parse(raw).ok())
    else {
        return Vec::new();
    };

    // Split "src/li" into the directory to read ("src") and the name prefix ("li")
    let (dir_part, name_prefix) = rest.rsplit_once('/').unwrap_or(("", rest));
    let search_dir = expand_home(&Path::new(&base).join(dir_part), home);

    let Ok(entries) = std::fs::read_dir(&search_dir) else {
        return Vec::new();
    };

    let mut names: Vec<String> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().to_str().map(String::from))
        .filter(|name| name.starts_with(name_prefix))
        .map(|name| {
            if dir_part.is_empty() {
                format!("{head}/{name}")
            } else {
                format!("{head}/{dir_part}/{name}")
            }
        })
        .collect();
    names.sort();
    names
}
