//! Everything that touches the file system: the [`FileSystem`] seam and the choice
//! of the output path.

use crate::error::{PDFError, Result};
use crate::image::{self, ImageDimensions};
use std::path::{Path, PathBuf};

/// What to do when the output file already exists.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum ConflictPolicy {
    /// Fail with [`PDFError::AlreadyExists`]
    #[default]
    Error,
    /// Replace the existing file
    Overwrite,
    /// Write next to it as `name_(1).ext`, `name_(2).ext`, …
    Rename,
}

/// The file system operations document creation relies on.
pub trait FileSystem {
    /// Whether a file exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Pixel size and vertical density of the image at `path`. Anything that is not
    /// a readable image fails with [`PDFError::NotFound`].
    fn image_dimensions(&self, path: &Path) -> Result<ImageDimensions>;

    /// The whole content of a text file
    fn read_to_string(&self, path: &Path) -> Result<String>;

    fn write_bytes(&self, path: &Path, content: &[u8]) -> Result<()>;
}

/// The machine's own file system.
#[derive(Debug, Default, Copy, Clone)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn image_dimensions(&self, path: &Path) -> Result<ImageDimensions> {
        image::probe(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|_| PDFError::not_found("file", path))
    }

    fn write_bytes(&self, path: &Path, content: &[u8]) -> Result<()> {
        std::fs::write(path, content).map_err(Into::into)
    }
}

/// Choose the path the document is written to.
///
/// The candidate is `directory/file_name`. Under [`ConflictPolicy::Overwrite`] it is
/// returned as is. Otherwise, while a file exists at the candidate, `Error` fails and
/// `Rename` moves on to the next suffixed name, counting from 1. Nothing is written.
pub fn resolve_output_path<F: FileSystem + ?Sized>(
    fs: &F,
    directory: &Path,
    file_name: &str,
    policy: ConflictPolicy,
) -> Result<PathBuf> {
    let mut candidate = directory.join(file_name);
    if policy == ConflictPolicy::Overwrite {
        return Ok(candidate);
    }

    let mut index = 1usize;
    while fs.exists(&candidate) {
        if policy == ConflictPolicy::Error {
            return Err(PDFError::AlreadyExists { path: candidate });
        }
        log::debug!("{} exists, trying the next name", candidate.display());
        candidate = directory.join(suffixed_name(file_name, index));
        index += 1;
    }
    Ok(candidate)
}

/// `report.pdf` with index 2 becomes `report_(2).pdf`. A leading dot belongs to the
/// stem, so `.report` becomes `.report_(2)` rather than `_(2).report`.
fn suffixed_name(file_name: &str, index: usize) -> String {
    let path = Path::new(file_name);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    match path.extension() {
        Some(ext) => format!("{stem}_({index}).{}", ext.to_string_lossy()),
        None => format!("{stem}_({index})"),
    }
}
