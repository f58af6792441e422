//! Platform file-system capability.

use std::io;
use std::path::Path;

use crate::{FsHandle, OpenFlags, Permissions};

/// The raw file-system operations [`FileSystem`](crate::FileSystem) is built on.
///
/// Implementations report plain `io::Error`s; wrapping them with path context
/// is the caller's job.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Methods take `&self`; stateful
/// implementations use interior mutability.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FsPlatform`.
pub trait FsPlatform: Send + Sync {
    /// Returns `true` if an entry exists at `path`.
    ///
    /// Probe errors are reported as `false`.
    fn exists(&self, path: &Path) -> bool;

    /// Create `path` and every missing ancestor with the given permissions.
    ///
    /// Succeeds if the directory already exists.
    ///
    /// # Errors
    ///
    /// - `NotADirectory` if a component exists but is not a directory
    /// - Any platform error (permission denied, read-only, ...)
    fn create_dir_all(&self, path: &Path, perm: Permissions) -> io::Result<()>;

    /// Open `path` for writing.
    ///
    /// `perm` applies only when the file is created.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` if `flags.create_new` is set and the file exists
    /// - `NotFound` if the parent directory does not exist
    /// - Any platform error
    fn open_file(
        &self,
        path: &Path,
        flags: OpenFlags,
        perm: Permissions,
    ) -> io::Result<Box<dyn FsHandle>>;
}

impl<P: FsPlatform + ?Sized> FsPlatform for &P {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn create_dir_all(&self, path: &Path, perm: Permissions) -> io::Result<()> {
        (**self).create_dir_all(path, perm)
    }

    fn open_file(
        &self,
        path: &Path,
        flags: OpenFlags,
        perm: Permissions,
    ) -> io::Result<Box<dyn FsHandle>> {
        (**self).open_file(path, flags, perm)
    }
}

impl<P: FsPlatform + ?Sized> FsPlatform for std::sync::Arc<P> {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn create_dir_all(&self, path: &Path, perm: Permissions) -> io::Result<()> {
        (**self).create_dir_all(path, perm)
    }

    fn open_file(
        &self,
        path: &Path,
        flags: OpenFlags,
        perm: Permissions,
    ) -> io::Result<Box<dyn FsHandle>> {
        (**self).open_file(path, flags, perm)
    }
}
