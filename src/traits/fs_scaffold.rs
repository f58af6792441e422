//! The interface scaffold generators write through.

use std::path::Path;

use crate::{FileMode, FsError, ScaffoldFile};

/// Existence checks and file creation for scaffold generators.
///
/// Implemented by [`FileSystem`](crate::FileSystem). Generator code should
/// depend on this trait so tests can swap in any platform.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FsScaffold`.
pub trait FsScaffold: Send + Sync {
    /// Returns `true` if an entry exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Create `path`, including missing parent directories, and return a
    /// writer for it.
    ///
    /// The returned file must be closed with [`ScaffoldFile::close`] to
    /// observe close errors.
    ///
    /// # Errors
    ///
    /// - [`FsError::CreateDirectory`] if a parent directory cannot be created
    /// - [`FsError::CreateFile`] if the file cannot be opened under the
    ///   configured [`FileMode`](crate::FileMode)
    fn create(&self, path: &Path) -> Result<ScaffoldFile, FsError>;

    /// Like [`create`](Self::create), opening the file under `mode` instead
    /// of the configured one.
    ///
    /// # Errors
    ///
    /// As [`create`](Self::create).
    fn create_with(&self, path: &Path, mode: FileMode) -> Result<ScaffoldFile, FsError>;
}

impl<S: FsScaffold + ?Sized> FsScaffold for &S {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn create(&self, path: &Path) -> Result<ScaffoldFile, FsError> {
        (**self).create(path)
    }

    fn create_with(&self, path: &Path, mode: FileMode) -> Result<ScaffoldFile, FsError> {
        (**self).create_with(path, mode)
    }
}
