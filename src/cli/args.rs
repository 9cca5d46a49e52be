/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::scaffold::GuardMode;

/// componentgen — scaffold React component boilerplate.
#[derive(Debug, Parser)]
#[command(
    name = "componentgen",
    about = "Scaffold React component boilerplate (component, style, index, story)",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output format for results and errors.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "text")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, global = true, conflicts_with = "output")]
    pub json: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print per-stage timing to stderr for debugging.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(flatten)]
    pub project: ProjectArgs,

    /// Component name. Shorthand for `componentgen generate <NAME>`.
    #[arg(value_name = "NAME", value_parser = NonEmptyStringValueParser::new())]
    pub name: Option<String>,

    #[command(flatten)]
    pub generate: GenerateOptions,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Reject a bare `NAME` given alongside a subcommand, as in
    /// `componentgen Card generate Foo`.
    ///
    /// # Errors
    ///
    /// Returns a clap `ArgumentConflict` error, reported like any other usage error.
    pub fn validate(self) -> Result<Self, clap::Error> {
        if let (Some(name), Some(command)) = (&self.name, &self.command) {
            let message = format!(
                "the component name '{name}' cannot be used with the '{}' subcommand",
                command.name()
            );
            return Err(Self::command().error(ErrorKind::ArgumentConflict, message));
        }
        Ok(self)
    }
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Colored status lines and tables (human-readable).
    #[default]
    Text,
    /// JSON (pretty-printed).
    Json,
    /// Compact single-line JSON.
    Compact,
}

/// Where the project lives and how it is configured.
#[derive(Debug, Clone, Default, Args)]
pub struct ProjectArgs {
    /// Project root to generate into. Defaults to the current directory.
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Configuration file. Defaults to <ROOT>/componentgen.toml when present.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Options shared by `generate` and the bare `<NAME>` form.
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateOptions {
    /// Components directory, relative to the project root [default: src/components].
    #[arg(long, value_name = "DIR", requires = "name")]
    pub dir: Option<PathBuf>,

    /// Marker the project root must contain [default: component-library].
    #[arg(long, value_name = "TEXT", requires = "name")]
    pub marker: Option<String>,

    /// How the marker is matched against the project root.
    #[arg(long = "match", value_name = "MODE", requires = "name")]
    pub match_mode: Option<GuardMode>,

    /// Skip the project root check.
    #[arg(long, requires = "name", conflicts_with_all = ["marker", "match_mode"])]
    pub no_guard: bool,

    /// Report the files that would be written without touching the disk.
    #[arg(long, requires = "name")]
    pub dry_run: bool,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the four boilerplate files for a component.
    Generate(GenerateArgs),
    /// Open the component explorer (Storybook) in the system browser.
    Open(OpenArgs),
    /// List the templates written for every component.
    Templates(TemplatesArgs),
}

impl Command {
    const fn name(&self) -> &'static str {
        match self {
            Self::Generate(_) => "generate",
            Self::Open(_) => "open",
            Self::Templates(_) => "templates",
        }
    }
}

/// Arguments for `componentgen generate`.
#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Component name, used verbatim as folder, file, type and tag name.
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub name: String,

    #[command(flatten)]
    pub options: GenerateOptions,
}

/// Arguments for `componentgen open`.
#[derive(Debug, Parser)]
pub struct OpenArgs {
    /// Print the URL instead of launching a browser.
    #[arg(long)]
    pub print_only: bool,
}

/// Arguments for `componentgen templates`.
#[derive(Debug, Parser)]
pub struct TemplatesArgs {
    /// Sample component name used to show concrete file names.
    #[arg(
        long,
        value_name = "NAME",
        default_value = "Component",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(args.iter().copied()).and_then(Cli::validate)
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bare_name() {
        let cli = Cli::try_parse_from(["componentgen", "Button"]).unwrap();
        assert_eq!(cli.name.as_deref(), Some("Button"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_generate_subcommand() {
        let cli =
            Cli::try_parse_from(["componentgen", "generate", "Card", "--dry-run", "--json"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Some(Command::Generate(args)) => {
                assert_eq!(args.name, "Card");
                assert!(args.options.dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_generate_rejects_second_name() {
        assert!(Cli::try_parse_from(["componentgen", "generate", "Foo", "Bar"]).is_err());
    }

    #[test]
    fn test_generate_requires_name() {
        assert!(Cli::try_parse_from(["componentgen", "generate"]).is_err());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(Cli::try_parse_from(["componentgen", "generate", ""]).is_err());
        assert!(Cli::try_parse_from(["componentgen", ""]).is_err());
    }

    #[test]
    fn test_open_takes_no_positional() {
        assert!(Cli::try_parse_from(["componentgen", "open"]).is_ok());
        assert!(Cli::try_parse_from(["componentgen", "open", "extra"]).is_err());
    }

    #[test]
    fn test_no_guard_conflicts_with_marker() {
        assert!(
            Cli::try_parse_from(["componentgen", "Card", "--no-guard", "--marker", "x"]).is_err()
        );
    }

    #[test]
    fn test_match_mode_values() {
        let cli = Cli::try_parse_from(["componentgen", "Card", "--match", "path"]).unwrap();
        assert_eq!(cli.generate.match_mode, Some(GuardMode::Path));
    }

    #[test]
    fn test_global_project_args_after_subcommand() {
        let cli = Cli::try_parse_from(["componentgen", "open", "--root", "/tmp/lib"]).unwrap();
        assert_eq!(cli.project.root, Some(PathBuf::from("/tmp/lib")));
    }

    #[test]
    fn test_bare_name_before_subcommand_rejected() {
        let err = parse(&["componentgen", "Card", "generate", "Foo"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
        assert!(parse(&["componentgen", "Card", "open"]).is_err());
        assert!(parse(&["componentgen", "Card", "templates"]).is_err());
    }

    #[test]
    fn test_global_flags_before_subcommand_accepted() {
        let cli = parse(&["componentgen", "--no-color", "--json", "generate", "Card"]).unwrap();
        assert!(cli.name.is_none());
        assert!(matches!(cli.command, Some(Command::Generate(_))));
        assert!(parse(&["componentgen", "--no-color", "Card"]).is_ok());
    }
}
