/// Errors from the scaffolding domain layer.
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while resolving, rendering, or writing a component.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Neither a subcommand nor a component name was given.
    #[error("No component name given. Usage: componentgen generate <NAME>")]
    MissingName,

    /// The working directory could not be read.
    #[error("Cannot determine the current directory: {0}")]
    CurrentDir(#[source] io::Error),

    /// The project root exists but could not be resolved to a real path.
    #[error("Cannot resolve project root '{}': {source}", path.display())]
    ResolveRoot {
        /// Root as given on the command line or read from the working directory.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The project root does not carry the expected marker.
    #[error("Not inside a '{marker}' project: {}", dir.display())]
    WrongDirectory {
        /// The resolved project root that failed the check.
        dir: PathBuf,
        /// The marker the root was expected to contain.
        marker: String,
    },

    /// The component directory could not be created.
    #[error("Failed to create directory '{}': {source}", path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A rendered template could not be written.
    #[error("Failed to write '{}': {source}", path.display())]
    WriteFile {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The configuration file could not be read.
    #[error("Failed to read config '{}': {source}", path.display())]
    ConfigRead {
        /// Configuration file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The configuration file is not valid TOML or has unknown keys.
    #[error("Invalid config '{}': {source}", path.display())]
    ConfigParse {
        /// Configuration file path.
        path: PathBuf,
        /// Underlying parse error.
        source: toml::de::Error,
    },

    /// The platform browser opener could not be launched.
    #[error("Failed to open '{url}' in a browser: {source}")]
    Browser {
        /// URL that was being opened.
        url: String,
        /// Underlying I/O error.
        source: io::Error,
    },
}

impl ScaffoldError {
    /// Return the CLI exit code for this error.
    ///
    /// Every failure is terminal and reported with status 1.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn exit_code(&self) -> i32 {
        1
    }

    /// Machine-readable error code (`snake_case`) for the JSON envelope.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingName => "missing_name",
            Self::CurrentDir(_) => "current_dir",
            Self::ResolveRoot { .. } => "resolve_root",
            Self::WrongDirectory { .. } => "wrong_directory",
            Self::CreateDir { .. } => "create_dir",
            Self::WriteFile { .. } => "write_file",
            Self::ConfigRead { .. } => "config_read",
            Self::ConfigParse { .. } => "config_parse",
            Self::Browser { .. } => "browser",
        }
    }

    /// The filesystem path this error is about, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::WrongDirectory { dir, .. } => Some(dir.as_path()),
            Self::ResolveRoot { path, .. }
            | Self::CreateDir { path, .. }
            | Self::WriteFile { path, .. }
            | Self::ConfigRead { path, .. }
            | Self::ConfigParse { path, .. } => Some(path.as_path()),
            Self::MissingName | Self::CurrentDir(_) | Self::Browser { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_directory_names_the_directory() {
        let err = ScaffoldError::WrongDirectory {
            dir: PathBuf::from("/home/dev/my-app"),
            marker: "component-library".to_owned(),
        };
        let message = err.to_string();
        assert!(message.contains("/home/dev/my-app"));
        assert!(message.contains("component-library"));
        assert_eq!(err.code(), "wrong_directory");
        assert_eq!(err.path(), Some(Path::new("/home/dev/my-app")));
    }

    #[test]
    fn test_every_error_exits_one() {
        let errors = [
            ScaffoldError::MissingName,
            ScaffoldError::CurrentDir(io::Error::other("gone")),
            ScaffoldError::WriteFile {
                path: PathBuf::from("x/index.ts"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            },
        ];
        for err in &errors {
            assert_eq!(err.exit_code(), 1, "{err}");
        }
    }
}
