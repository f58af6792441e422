//! Error types for scaffold file creation.

use std::error::Error;
use std::io;
use std::path::{Path, PathBuf};

/// Error raised while creating, writing or closing a scaffold file.
///
/// There is one variant per failure point of the write pipeline. Every variant
/// carries the path involved and the underlying I/O error, and its message
/// includes the cause's message.
///
/// # Examples
///
/// ```rust
/// use scaffold_fs::FsError;
/// use std::io;
/// use std::path::PathBuf;
///
/// let err = FsError::CreateFile {
///     path: PathBuf::from("api/v1/types.rs"),
///     source: io::Error::new(io::ErrorKind::AlreadyExists, "file exists"),
/// };
/// assert!(err.to_string().contains("file exists"));
/// assert!(err.is_create_file());
/// ```
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    /// Parent directories of the target could not be created.
    #[error("failed to create directory for {path}: {source}")]
    CreateDirectory {
        /// The file whose parent directories were being created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The target file could not be opened or created.
    #[error("failed to create file {path}: {source}")]
    CreateFile {
        /// The file being created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Writing to an open file failed.
    #[error("failed to write to file {path}: {source}")]
    WriteFile {
        /// The file being written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Closing an open file failed.
    #[error("failed to close file {path}: {source}")]
    CloseFile {
        /// The file being closed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// The path the failed operation was acting on.
    pub fn path(&self) -> &Path {
        match self {
            FsError::CreateDirectory { path, .. }
            | FsError::CreateFile { path, .. }
            | FsError::WriteFile { path, .. }
            | FsError::CloseFile { path, .. } => path,
        }
    }

    /// Returns `true` for [`FsError::CreateDirectory`].
    #[inline]
    pub fn is_create_directory(&self) -> bool {
        matches!(self, FsError::CreateDirectory { .. })
    }

    /// Returns `true` for [`FsError::CreateFile`].
    #[inline]
    pub fn is_create_file(&self) -> bool {
        matches!(self, FsError::CreateFile { .. })
    }

    /// Returns `true` for [`FsError::WriteFile`].
    #[inline]
    pub fn is_write_file(&self) -> bool {
        matches!(self, FsError::WriteFile { .. })
    }

    /// Returns `true` for [`FsError::CloseFile`].
    #[inline]
    pub fn is_close_file(&self) -> bool {
        matches!(self, FsError::CloseFile { .. })
    }
}

/// Find the first [`FsError`] in an error chain.
///
/// Walks `Error::source` links. `io::Error` needs special handling because its
/// `source()` skips the custom error it wraps, which is exactly where
/// [`ScaffoldFile`](crate::ScaffoldFile)'s `Write` impl stores a [`FsError`].
pub fn find_fs_error<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a FsError> {
    let mut current = Some(err);
    while let Some(err) = current {
        if let Some(fs_err) = err.downcast_ref::<FsError>() {
            return Some(fs_err);
        }
        current = match err.downcast_ref::<io::Error>().and_then(io::Error::get_ref) {
            Some(inner) => Some(inner as &(dyn Error + 'static)),
            None => err.source(),
        };
    }
    None
}

/// Returns `true` if `err` is, or wraps, an [`FsError::CreateDirectory`].
pub fn is_create_directory_error(err: &(dyn Error + 'static)) -> bool {
    find_fs_error(err).is_some_and(FsError::is_create_directory)
}

/// Returns `true` if `err` is, or wraps, an [`FsError::CreateFile`].
pub fn is_create_file_error(err: &(dyn Error + 'static)) -> bool {
    find_fs_error(err).is_some_and(FsError::is_create_file)
}

/// Returns `true` if `err` is, or wraps, an [`FsError::WriteFile`].
pub fn is_write_file_error(err: &(dyn Error + 'static)) -> bool {
    find_fs_error(err).is_some_and(FsError::is_write_file)
}

/// Returns `true` if `err` is, or wraps, an [`FsError::CloseFile`].
pub fn is_close_file_error(err: &(dyn Error + 'static)) -> bool {
    find_fs_error(err).is_some_and(FsError::is_close_file)
}
