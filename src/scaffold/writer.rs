/// Writes rendered boilerplate into a component directory.
///
/// Writes are sequential and in [`TemplateKind::ALL`] order. Existing files are
/// overwritten. A failure stops the run; files written before it stay on disk.
use std::fs;
use std::path::{Path, PathBuf};

use super::errors::ScaffoldError;
use super::render::{RenderedComponent, TemplateKind};

/// A file that was written (or, for a dry run, would be written).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub kind: TemplateKind,
    pub path: PathBuf,
    /// Size of the rendered contents in bytes.
    pub bytes: usize,
}

/// Compute the files `write_component` would produce, without touching the disk.
#[must_use]
pub fn planned_files(dir: &Path, rendered: &RenderedComponent) -> Vec<WrittenFile> {
    rendered
        .files()
        .map(|(kind, contents)| WrittenFile {
            kind,
            path: dir.join(kind.file_name(&rendered.name)),
            bytes: contents.len(),
        })
        .collect()
}

/// Create `dir` if needed and write all four files into it.
///
/// `on_written` is called after each file lands on disk, before the next
/// write begins.
///
/// # Errors
///
/// Returns `ScaffoldError::CreateDir` if the directory cannot be created and
/// `ScaffoldError::WriteFile` for the first file that cannot be written.
pub fn write_component<F>(
    dir: &Path,
    rendered: &RenderedComponent,
    mut on_written: F,
) -> Result<Vec<WrittenFile>, ScaffoldError>
where
    F: FnMut(&WrittenFile),
{
    fs::create_dir_all(dir).map_err(|source| ScaffoldError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(TemplateKind::ALL.len());
    for file in planned_files(dir, rendered) {
        fs::write(&file.path, rendered.get(file.kind)).map_err(|source| {
            ScaffoldError::WriteFile {
                path: file.path.clone(),
                source,
            }
        })?;
        on_written(&file);
        written.push(file);
    }
    Ok(written)
}
