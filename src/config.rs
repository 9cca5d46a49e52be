/// Project configuration loaded from `componentgen.toml`.
///
/// Every key is optional. CLI flags override file values, which override the
/// built-in defaults below.
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::scaffold::guard::DEFAULT_MARKER;
use crate::scaffold::target::DEFAULT_COMPONENTS_DIR;
use crate::scaffold::{Guard, GuardMode, ScaffoldError};

/// File name looked up at the project root.
pub const CONFIG_FILE_NAME: &str = "componentgen.toml";

/// Component explorer URL opened by `componentgen open` (local Storybook).
pub const DEFAULT_EXPLORER_URL: &str = "http://localhost:6006";

/// Top-level configuration.
///
/// Expected TOML keys:
/// - `components_dir` as a path relative to the project root
/// - `[guard]` with `enabled`, `marker`, and `mode` (`"segment"` or `"path"`)
/// - `[open]` with `url`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding one folder per component.
    pub components_dir: PathBuf,
    pub guard: GuardConfig,
    pub open: OpenConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            components_dir: PathBuf::from(DEFAULT_COMPONENTS_DIR),
            guard: GuardConfig::default(),
            open: OpenConfig::default(),
        }
    }
}

/// `[guard]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuardConfig {
    /// Whether the project root is checked before generating.
    pub enabled: bool,
    pub marker: String,
    pub mode: GuardMode,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            marker: DEFAULT_MARKER.to_owned(),
            mode: GuardMode::Segment,
        }
    }
}

impl GuardConfig {
    /// The configured guard, or `None` when disabled.
    #[must_use]
    pub fn guard(&self) -> Option<Guard> {
        self.enabled
            .then(|| Guard::new(self.marker.clone(), self.mode))
    }
}

/// `[open]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OpenConfig {
    pub url: String,
}

impl Default for OpenConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_EXPLORER_URL.to_owned(),
        }
    }
}

/// Load configuration from the provided path.
///
/// # Errors
///
/// Returns `ScaffoldError::ConfigRead` if the file cannot be read and
/// `ScaffoldError::ConfigParse` if it is not a valid configuration.
pub fn load_config(path: &Path) -> Result<Config, ScaffoldError> {
    let text = fs::read_to_string(path).map_err(|source| ScaffoldError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ScaffoldError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Find the configuration for a project.
///
/// An explicit path must exist. Otherwise `<root>/componentgen.toml` is used
/// when present, and the defaults when not.
///
/// # Errors
///
/// Propagates [`load_config`] errors.
pub fn discover(root: &Path, explicit: Option<&Path>) -> Result<Config, ScaffoldError> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    let candidate = root.join(CONFIG_FILE_NAME);
    if candidate.is_file() {
        load_config(&candidate)
    } else {
        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILE_NAME);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.components_dir, Path::new("src/components"));
        assert_eq!(cfg.guard.guard(), Some(Guard::default()));
        assert_eq!(cfg.open.url, "http://localhost:6006");
    }

    #[test]
    fn test_loads_full_config() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(
            tmp.path(),
            r#"
components_dir = "app/components"

[guard]
enabled = true
marker = "design-system"
mode = "path"

[open]
url = "https://storybook.example.com"
"#,
        );

        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.components_dir, Path::new("app/components"));
        assert_eq!(
            cfg.guard.guard(),
            Some(Guard::new("design-system", GuardMode::Path))
        );
        assert_eq!(cfg.open.url, "https://storybook.example.com");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(tmp.path(), "[guard]\nenabled = false\n");

        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.guard.guard(), None);
        assert_eq!(cfg.guard.marker, DEFAULT_MARKER);
        assert_eq!(cfg.components_dir, Path::new(DEFAULT_COMPONENTS_DIR));
        assert_eq!(cfg.open, OpenConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(tmp.path(), "component_dir = \"typo\"\n");
        assert!(matches!(
            load_config(&path),
            Err(ScaffoldError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_bad_mode_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(tmp.path(), "[guard]\nmode = \"anywhere\"\n");
        assert!(matches!(
            load_config(&path),
            Err(ScaffoldError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_discover_without_file() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(discover(tmp.path(), None).unwrap(), Config::default());
    }

    #[test]
    fn test_discover_picks_up_root_file() {
        let tmp = tempfile::tempdir().unwrap();
        write_config(tmp.path(), "components_dir = \"lib/ui\"\n");
        let cfg = discover(tmp.path(), None).unwrap();
        assert_eq!(cfg.components_dir, Path::new("lib/ui"));
    }

    #[test]
    fn test_discover_explicit_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope.toml");
        let err = discover(tmp.path(), Some(missing.as_path())).unwrap_err();
        assert!(matches!(err, ScaffoldError::ConfigRead { .. }));
        assert_eq!(err.path(), Some(missing.as_path()));
    }
}
