//! File writer for generated skeletons, built on `cap_std`.
//!
//! Bodies are normalised to `\n` line endings before they reach the disk and
//! files are always truncated, so rerunning with the same arguments produces
//! byte-identical output.

use std::borrow::Cow;
use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, OpenOptions};

use crate::error::ClassgenError;
use crate::render::RenderedFile;

/// Handle to the directory receiving generated files.
pub struct OutputDir {
    path: Utf8PathBuf,
    dir: Dir,
}

impl OutputDir {
    /// Opens `path`, creating it (and any parents) when missing.
    ///
    /// # Errors
    ///
    /// Returns [`ClassgenError::Io`] when the directory cannot be opened or
    /// created.
    pub fn open(path: &Utf8Path) -> Result<Self, ClassgenError> {
        let dir = ensure_dir(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            dir,
        })
    }

    /// Path of `file_name` as shown to the user. Files in `.` are shown by
    /// bare name.
    #[must_use]
    pub fn display_path(&self, file_name: &str) -> Utf8PathBuf {
        if self.path.as_str() == "." {
            Utf8PathBuf::from(file_name)
        } else {
            self.path.join(file_name)
        }
    }

    /// Writes `file`, replacing any existing file with the same name.
    ///
    /// # Errors
    ///
    /// Returns [`ClassgenError::Io`] when opening or writing the file fails.
    /// A failure partway through a pair leaves earlier files in place.
    pub fn write_file(&self, file: &RenderedFile) -> Result<Utf8PathBuf, ClassgenError> {
        let file_path = self.display_path(&file.file_name);
        let contents = normalise_line_endings(&file.contents);

        let mut handle = self
            .dir
            .open_with(
                &file.file_name,
                OpenOptions::new().write(true).create(true).truncate(true),
            )
            .map_err(|io_err| ClassgenError::Io {
                path: file_path.clone(),
                source: io_err,
            })?;

        handle
            .write_all(contents.as_bytes())
            .map_err(|io_err| ClassgenError::Io {
                path: file_path.clone(),
                source: io_err,
            })?;

        tracing::info!(path = %file_path, bytes = contents.len(), "wrote file");
        Ok(file_path)
    }
}

/// Rewrites `\r\n` and lone `\r` to `\n`.
///
/// Borrows the input when it already uses line feeds only.
///
/// # Examples
///
/// ```
/// use classgen::output::normalise_line_endings;
///
/// assert_eq!(normalise_line_endings("a\r\nb\rc\n"), "a\nb\nc\n");
/// ```
#[must_use]
pub fn normalise_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

fn ensure_dir(path: &Utf8Path) -> Result<Dir, ClassgenError> {
    let io_error = |source: std::io::Error| ClassgenError::Io {
        path: path.to_path_buf(),
        source,
    };
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path, "creating output directory");
            Dir::create_ambient_dir_all(path, ambient_authority()).map_err(io_error)?;
            Dir::open_ambient_dir(path, ambient_authority()).map_err(io_error)
        }
        opened => opened.map_err(io_error),
    }
}
