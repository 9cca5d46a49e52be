/// Project root precondition check.
///
/// The guard keeps components from being generated into the wrong project. It
/// is advisory only: it inspects the path it is given and nothing else.
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::errors::ScaffoldError;

/// Marker a project root must contain when nothing else is configured.
pub const DEFAULT_MARKER: &str = "component-library";

/// How the marker is matched against the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuardMode {
    /// The final path segment must contain the marker.
    #[default]
    Segment,
    /// Any part of the full path may contain the marker.
    Path,
}

/// A marker check applied to the project root before anything is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guard {
    pub marker: String,
    pub mode: GuardMode,
}

impl Default for Guard {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER, GuardMode::Segment)
    }
}

impl Guard {
    #[must_use]
    pub fn new(marker: impl Into<String>, mode: GuardMode) -> Self {
        Self {
            marker: marker.into(),
            mode,
        }
    }

    /// Whether `root` satisfies the marker.
    #[must_use]
    pub fn matches(&self, root: &Path) -> bool {
        match self.mode {
            GuardMode::Segment => root
                .file_name()
                .is_some_and(|segment| segment.to_string_lossy().contains(&self.marker)),
            GuardMode::Path => root.to_string_lossy().contains(&self.marker),
        }
    }

    /// Check `root` against the marker.
    ///
    /// # Errors
    ///
    /// Returns `ScaffoldError::WrongDirectory` naming `root` if the marker is absent.
    pub fn check(&self, root: &Path) -> Result<(), ScaffoldError> {
        if self.matches(root) {
            Ok(())
        } else {
            Err(ScaffoldError::WrongDirectory {
                dir: root.to_path_buf(),
                marker: self.marker.clone(),
            })
        }
    }
}
