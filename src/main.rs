use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use clap_complete::env::CompleteEnv;

use gogo::cli::{Action, Cli};
use gogo::color::{self, ColorMode};
use gogo::commands;
use gogo::context::Context;
use gogo::domain::directive::{echo_lines, Directive};

fn main() -> ExitCode {
    // Handle dynamic completion via COMPLETE environment variable
    CompleteEnv::with_factory(Cli::command).complete();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_clap_error(&err),
    };

    let color_mode = ColorMode::resolve(cli.color);

    match run(&cli, color_mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", color::error(color_mode, format!("{err:#}")));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, color_mode: ColorMode) -> Result<()> {
    let action = cli.action()?;

    // These do not need the environment or the config file
    match action {
        Action::Version => {
            let version = format!("gogo {}", env!("CARGO_PKG_VERSION"));
            println!("{}", Directive::Echo(version));
            return Ok(());
        }
        Action::Init(shell) => {
            commands::shell_init::cmd_shell_init(shell);
            return Ok(());
        }
        _ => {}
    }

    let ctx = Context::from_env()?;

    match action {
        Action::Goto(request) => commands::goto::cmd_goto(request.as_deref(), &ctx, color_mode),
        Action::List => commands::list::cmd_list(&ctx, color_mode),
        Action::Edit => commands::edit::cmd_edit(&ctx, color_mode),
        Action::Add(alias) => commands::add::cmd_add(&alias, &ctx),
        Action::Version | Action::Init(_) => Ok(()),
    }
}

/// Help goes to stdout as `echo` directives so the shell wrapper can eval it;
/// real argument errors go to stderr
fn report_clap_error(err: &clap::Error) -> ExitCode {
    if err.kind() == ErrorKind::DisplayHelp {
        let help = err.render().to_string();
        commands::common::print_lines(&echo_lines(&help));
        return ExitCode::SUCCESS;
    }

    // With stderr closed there is nowhere left to report; the exit status
    // still signals the failure
    if err.print().is_err() {
        return ExitCode::from(2);
    }

    // Exit status is always a small clap code (0 or 2)
    ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(2))
}
