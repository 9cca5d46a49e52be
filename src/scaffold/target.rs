/// Project root and component directory resolution.
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::errors::ScaffoldError;

/// Components directory, relative to the project root, when nothing else is configured.
pub const DEFAULT_COMPONENTS_DIR: &str = "src/components";

/// Resolve the project root.
///
/// An explicit root is taken relative to the current directory. Existing
/// roots are canonicalized so the guard sees a real final segment (`.` and
/// `..` resolved); a root that does not exist yet is used as given.
///
/// # Errors
///
/// Returns `ScaffoldError::CurrentDir` if the working directory is needed but
/// unreadable, and `ScaffoldError::ResolveRoot` if canonicalizing fails for any
/// reason other than the root not existing.
pub fn resolve_root(explicit: Option<&Path>) -> Result<PathBuf, ScaffoldError> {
    let root = match explicit {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => env::current_dir().map_err(ScaffoldError::CurrentDir)?.join(path),
        None => env::current_dir().map_err(ScaffoldError::CurrentDir)?,
    };
    match fs::canonicalize(&root) {
        Ok(real) => Ok(real),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(root),
        Err(source) => Err(ScaffoldError::ResolveRoot { path: root, source }),
    }
}

/// Directory a component's files are written to: `<root>/<components_dir>/<name>`.
///
/// The name is used verbatim as a path segment. An absolute `components_dir`
/// replaces the root.
#[must_use]
pub fn component_dir(root: &Path, components_dir: &Path, name: &str) -> PathBuf {
    root.join(components_dir).join(name)
}

/// Render `path` relative to `root` when it lives underneath it.
#[must_use]
pub fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_dir_default_layout() {
        let dir = component_dir(
            Path::new("/work/component-library"),
            Path::new(DEFAULT_COMPONENTS_DIR),
            "Card",
        );
        assert_eq!(dir, Path::new("/work/component-library/src/components/Card"));
    }

    #[test]
    fn test_component_dir_custom_layout() {
        let dir = component_dir(Path::new("/work/app"), Path::new("app/components"), "Nav");
        assert_eq!(dir, Path::new("/work/app/app/components/Nav"));
    }

    #[test]
    fn test_display_relative() {
        let root = Path::new("/work/lib");
        assert_eq!(
            display_relative(root, Path::new("/work/lib/src/components/Card/index.ts")),
            Path::new("src/components/Card/index.ts").display().to_string()
        );
        assert_eq!(display_relative(root, Path::new("/elsewhere/x")), "/elsewhere/x");
    }

    #[test]
    fn test_resolve_root_canonicalizes_existing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("component-library");
        fs::create_dir(&nested).unwrap();

        let dotted = nested.join(".");
        let root = resolve_root(Some(dotted.as_path())).unwrap();
        assert_eq!(root, fs::canonicalize(&nested).unwrap());
        assert_eq!(root.file_name().unwrap(), "component-library");
    }

    #[test]
    fn test_resolve_root_keeps_missing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("not-yet");
        assert_eq!(resolve_root(Some(missing.as_path())).unwrap(), missing);
    }

    #[test]
    fn test_resolve_root_reports_unresolvable_root() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("package.json");
        fs::write(&file, "{}").unwrap();

        let through_file = file.join("component-library");
        let err = resolve_root(Some(through_file.as_path())).unwrap_err();
        assert!(matches!(err, ScaffoldError::ResolveRoot { .. }), "{err}");
        assert_eq!(err.code(), "resolve_root");
        assert_eq!(err.path(), Some(through_file.as_path()));
    }
}
