/// Command dispatch: routes the parsed CLI to its implementation.
pub mod generate;
pub mod open;
pub mod templates;

use crate::cli::OutputCtx;
use crate::cli::args::{Cli, Command};
use crate::scaffold::ScaffoldError;

/// Dispatch a parsed `Cli` to its handler.
///
/// A bare `<NAME>` with no subcommand is the same as `generate <NAME>`.
///
/// # Errors
///
/// Returns `ScaffoldError` on any command failure.
pub fn dispatch(cli: &Cli, ctx: &OutputCtx) -> Result<(), ScaffoldError> {
    match (&cli.command, &cli.name) {
        (Some(Command::Generate(args)), _) => {
            generate::run(&args.name, &args.options, &cli.project, ctx)
        }
        (Some(Command::Open(args)), _) => open::run(args, &cli.project, ctx),
        (Some(Command::Templates(args)), _) => templates::run(args, ctx),
        (None, Some(name)) => generate::run(name, &cli.generate, &cli.project, ctx),
        (None, None) => Err(ScaffoldError::MissingName),
    }
}
