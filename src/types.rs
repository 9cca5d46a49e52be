/// Shared serializable output types for all commands.
///
/// These types are what gets written to stdout in JSON modes. They are
/// decoupled from the internal `WrittenFile` / `TemplateKind` types.
use serde::{Deserialize, Serialize};

use crate::scaffold::ScaffoldError;

/// One generated (or planned) file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedFileOutput {
    /// Template kind: `component`, `style`, `index`, or `story`.
    pub kind: String,
    /// Path relative to the project root.
    pub path: String,
    /// Size of the rendered contents.
    pub bytes: usize,
}

/// Summary of a `generate` run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutput {
    /// Always `true`; failures use [`ErrorOutput`].
    pub ok: bool,
    /// Component name as given.
    pub component: String,
    /// Component directory relative to the project root.
    pub directory: String,
    /// Whether files were only planned, not written.
    pub dry_run: bool,
    /// Files in write order.
    pub files: Vec<GeneratedFileOutput>,
}

/// One row of the `templates` listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateOutput {
    pub kind: String,
    /// File name produced for the sample component name.
    pub file_name: String,
    pub description: String,
}

/// Result of `open`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenOutput {
    pub ok: bool,
    pub url: String,
    /// Whether a browser was launched (`false` with `--print-only`).
    pub launched: bool,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`snake_case`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Offending file or directory, when the error is about one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ErrorOutput {
    /// Construct from a `ScaffoldError`.
    #[must_use]
    pub fn from_scaffold_error(err: &ScaffoldError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
                path: err.path().map(|p| p.display().to_string()),
            },
        }
    }
}
