//! Shared helpers for CLI commands.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use qstim_qasm2::TranslateError;

/// Bytes per megabyte, for size reporting.
pub const MB: f64 = 1024.0 * 1024.0;

/// List the regular files in `dir` with the given extension, sorted by path.
///
/// The search is not recursive.
pub fn discover_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("Directory not found: {}", dir.display());
    }

    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read directory: {}", dir.display()))?
            .path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Output path for `input`: same base name with `extension`, placed in
/// `out_dir` if given, otherwise next to the input.
pub fn output_path(input: &Path, out_dir: Option<&Path>, extension: &str) -> PathBuf {
    let renamed = input.with_extension(extension);
    match (out_dir, renamed.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => renamed,
    }
}

/// Read a whole source file.
pub fn read_source(path: &Path) -> Result<Vec<u8>, TranslateError> {
    let inaccessible = |source| TranslateError::InaccessibleFile {
        path: path.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(path).map_err(inaccessible)?;
    if !metadata.is_file() {
        return Err(inaccessible(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }
    fs::read(path).map_err(inaccessible)
}
