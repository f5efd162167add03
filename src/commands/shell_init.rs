//! Shell init command - Generate shell integration scripts

use crate::cli::InitShell;

/// Shell integration script for `shell`
#[must_use]
pub const fn script_for(shell: InitShell) -> &'static str {
    match shell {
        InitShell::Bash => include_str!("../../templates/bash.sh"),
        InitShell::Zsh => include_str!("../../templates/zsh.sh"),
        InitShell::Fish => include_str!("../../templates/fish.fish"),
    }
}

/// Print the shell integration script
pub fn cmd_shell_init(shell: InitShell) {
    print!("{}", script_for(shell));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripts_define_wrapper_function() {
        assert!(script_for(InitShell::Bash).contains("gogo()"));
        assert!(script_for(InitShell::Zsh).contains("gogo()"));
        assert!(script_for(InitShell::Fish).contains("function gogo"));
    }

    #[test]
    fn test_scripts_register_completion() {
        assert!(script_for(InitShell::Bash).contains("COMPLETE=bash"));
        assert!(script_for(InitShell::Zsh).contains("COMPLETE=zsh"));
        assert!(script_for(InitShell::Fish).contains("COMPLETE=fish"));
    }
}
