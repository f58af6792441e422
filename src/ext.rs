//! # Extension Traits
//!
//! Whole-file helpers built on [`FsScaffold`].
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`write_file`](FsScaffoldExt::write_file) | Create, write and close in one call |
//! | [`write_file_if`](FsScaffoldExt::write_file_if) | Same, with an [`IfExists`] policy |
//!
//! With the `serde` feature, `FsScaffoldJson::write_json` writes a value as
//! pretty-printed JSON.

use std::io;
use std::path::Path;

use tracing::debug;

use crate::{FileMode, FsError, FsScaffold, IfExists, WriteOutcome};

/// Extension methods for any [`FsScaffold`].
///
/// # Example
///
/// ```rust
/// use scaffold_fs::{FileSystem, FsScaffoldExt, IfExists, MemoryPlatform, WriteOutcome};
/// use std::path::Path;
///
/// let platform = MemoryPlatform::new();
/// let fs = FileSystem::builder().build_with(platform.clone());
///
/// fs.write_file(Path::new("go.mod"), b"module example\n").unwrap();
/// let outcome = fs
///     .write_file_if(Path::new("go.mod"), b"module other\n", IfExists::Skip)
///     .unwrap();
/// assert_eq!(outcome, WriteOutcome::Skipped);
/// assert_eq!(platform.contents("go.mod").unwrap(), b"module example\n");
/// ```
pub trait FsScaffoldExt: FsScaffold {
    /// Create `path`, write `contents` and close it.
    ///
    /// # Errors
    ///
    /// Any of the four [`FsError`] variants, depending on the failing step.
    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), FsError> {
        let mut file = self.create(path)?;
        file.write_bytes(contents)?;
        file.close()
    }

    /// Write `contents` to `path`, consulting `if_exists` when the path
    /// already exists.
    ///
    /// The policy decides the open mode, independent of the configured one:
    /// [`IfExists::Overwrite`] opens with [`FileMode::CreateOrUpdate`], while
    /// [`IfExists::Skip`] and [`IfExists::Error`] open with
    /// [`FileMode::CreateNew`] so the platform itself detects an existing file.
    ///
    /// # Errors
    ///
    /// - [`FsError::CreateFile`] with an `AlreadyExists` cause for
    ///   [`IfExists::Error`] on an existing path
    /// - Otherwise as [`write_file`](Self::write_file)
    fn write_file_if(
        &self,
        path: &Path,
        contents: &[u8],
        if_exists: IfExists,
    ) -> Result<WriteOutcome, FsError> {
        let mode = match if_exists {
            IfExists::Overwrite => FileMode::CreateOrUpdate,
            IfExists::Skip | IfExists::Error => FileMode::CreateNew,
        };
        let mut file = match self.create_with(path, mode) {
            Ok(file) => file,
            Err(err) if if_exists == IfExists::Skip && is_already_exists(&err) => {
                debug!(path = %path.display(), "skipping existing file");
                return Ok(WriteOutcome::Skipped);
            }
            Err(err) => return Err(err),
        };
        file.write_bytes(contents)?;
        file.close()?;
        Ok(WriteOutcome::Written)
    }
}

fn is_already_exists(err: &FsError) -> bool {
    matches!(err, FsError::CreateFile { source, .. } if source.kind() == io::ErrorKind::AlreadyExists)
}

impl<S: FsScaffold + ?Sized> FsScaffoldExt for S {}

#[cfg(feature = "serde")]
mod json {
    use super::*;
    use serde::Serialize;

    /// JSON output for any [`FsScaffold`].
    ///
    /// Available when the `serde` feature is enabled.
    pub trait FsScaffoldJson: FsScaffold {
        /// Serialize `value` as pretty-printed JSON (2-space indentation,
        /// trailing newline) and write it to `path`.
        ///
        /// # Errors
        ///
        /// - [`FsError::WriteFile`] with an `InvalidData` cause if
        ///   serialization fails; nothing is created in that case
        /// - Otherwise as [`FsScaffoldExt::write_file`]
        fn write_json<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<(), FsError> {
            let mut json = serde_json::to_vec_pretty(value).map_err(|e| FsError::WriteFile {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidData, e),
            })?;
            json.push(b'\n');
            self.write_file(path, &json)
        }
    }

    impl<S: FsScaffold + ?Sized> FsScaffoldJson for S {}
}

#[cfg(feature = "serde")]
pub use json::FsScaffoldJson;
