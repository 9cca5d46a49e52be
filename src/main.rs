#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! componentgen — scaffold React component boilerplate from the command line.

mod cli;
mod commands;
mod config;
mod scaffold;
mod types;

use clap::Parser;
use clap::error::ErrorKind;

use cli::{Cli, OutputCtx, write_error};
use types::ErrorOutput;

/// Exit status for malformed invocations (clap's default is 2).
const USAGE_EXIT_CODE: i32 = 1;

fn main() {
    let cli = match Cli::try_parse().and_then(Cli::validate) {
        Ok(cli) => cli,
        Err(err) => exit_on_parse_error(&err),
    };

    if cli.no_color {
        colored::control::set_override(false);
    }

    let ctx = OutputCtx::new(cli.output, cli.json, cli.debug);

    if let Err(err) = commands::dispatch(&cli, &ctx) {
        write_error(&ErrorOutput::from_scaffold_error(&err), ctx.format);
        std::process::exit(err.exit_code());
    }
}

/// Print a parse failure (or help/version) and exit.
fn exit_on_parse_error(err: &clap::Error) -> ! {
    let _ = err.print();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => std::process::exit(0),
        _ => std::process::exit(USAGE_EXIT_CODE),
    }
}
