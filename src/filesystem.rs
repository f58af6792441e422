//! Scaffold file creation over a platform.

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    Config, FileMode, FileSystemBuilder, FsError, FsHandle, FsPlatform, FsScaffold, NativePlatform,
};

/// Creates scaffold files with configured permissions and open policy.
///
/// Holds no mutable state after construction; share it freely across threads.
///
/// # Example
///
/// ```rust
/// use scaffold_fs::{FileSystem, FsScaffold, MemoryPlatform, Permissions};
/// use std::path::Path;
///
/// let platform = MemoryPlatform::new();
/// let fs = FileSystem::builder()
///     .file_permissions(Permissions::from_mode(0o644))
///     .build_with(platform.clone());
///
/// let mut file = fs.create(Path::new("cmd/main.go")).unwrap();
/// file.write_bytes(b"package main\n").unwrap();
/// file.close().unwrap();
///
/// assert!(platform.is_dir("cmd"));
/// assert_eq!(platform.file_permissions("cmd/main.go"), Some(Permissions::from_mode(0o644)));
/// ```
#[derive(Debug, Clone)]
pub struct FileSystem<P = NativePlatform> {
    platform: P,
    config: Config,
}

impl FileSystem<NativePlatform> {
    /// Native platform with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Native platform with the given configuration.
    pub fn with_config(config: Config) -> Self {
        Self::with_platform(NativePlatform::new(), config)
    }

    /// Start building a filesystem.
    pub fn builder() -> FileSystemBuilder {
        FileSystemBuilder::new()
    }
}

impl Default for FileSystem<NativePlatform> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: FsPlatform> FileSystem<P> {
    /// Any platform with the given configuration.
    pub fn with_platform(platform: P, config: Config) -> Self {
        Self { platform, config }
    }

    /// The resolved configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The underlying platform.
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Returns `true` if an entry exists at `path`.
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        self.platform.exists(path.as_ref())
    }

    /// Create `path`, including missing parent directories.
    ///
    /// Parent directories get [`Config::dir_permissions`]; the file is opened
    /// according to [`Config::file_mode`] and gets [`Config::file_permissions`]
    /// if it is created.
    ///
    /// # Errors
    ///
    /// - [`FsError::CreateDirectory`] if a parent directory cannot be created
    /// - [`FsError::CreateFile`] if the file cannot be opened
    pub fn create(&self, path: impl AsRef<Path>) -> Result<ScaffoldFile, FsError> {
        self.create_with(path, self.config.file_mode)
    }

    /// Like [`create`](Self::create), with `mode` in place of the configured
    /// [`Config::file_mode`].
    ///
    /// # Errors
    ///
    /// As [`create`](Self::create).
    pub fn create_with(
        &self,
        path: impl AsRef<Path>,
        mode: FileMode,
    ) -> Result<ScaffoldFile, FsError> {
        let path = path.as_ref();
        debug!(path = %path.display(), ?mode, "creating file");

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.platform
                .create_dir_all(parent, self.config.dir_permissions)
                .map_err(|source| FsError::CreateDirectory {
                    path: path.to_path_buf(),
                    source,
                })?;
        }

        let handle = self
            .platform
            .open_file(path, mode.open_flags(), self.config.file_permissions)
            .map_err(|source| FsError::CreateFile {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(ScaffoldFile::new(path.to_path_buf(), handle))
    }
}

impl<P: FsPlatform> FsScaffold for FileSystem<P> {
    fn exists(&self, path: &Path) -> bool {
        FileSystem::exists(self, path)
    }

    fn create(&self, path: &Path) -> Result<ScaffoldFile, FsError> {
        FileSystem::create(self, path)
    }

    fn create_with(&self, path: &Path, mode: FileMode) -> Result<ScaffoldFile, FsError> {
        FileSystem::create_with(self, path, mode)
    }
}

/// A file opened by [`FileSystem::create`].
///
/// Write failures surface as [`FsError::WriteFile`] and close failures as
/// [`FsError::CloseFile`]. Through the [`Write`] impl the [`FsError`] is the
/// inner error of the returned `io::Error`, so the `is_*_error` predicates
/// still classify it.
///
/// Call [`close`](Self::close) when done; dropping the file releases the handle
/// silently and discards any close error.
pub struct ScaffoldFile {
    path: PathBuf,
    handle: Box<dyn FsHandle>,
}

impl ScaffoldFile {
    pub(crate) fn new(path: PathBuf, handle: Box<dyn FsHandle>) -> Self {
        Self { path, handle }
    }

    /// The path this file was created at.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: io::Error) -> FsError {
        FsError::WriteFile {
            path: self.path.clone(),
            source,
        }
    }

    /// Write all of `data`.
    ///
    /// # Errors
    ///
    /// [`FsError::WriteFile`] if the platform rejects the write.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<(), FsError> {
        match self.handle.write_all(data) {
            Ok(()) => Ok(()),
            Err(source) => Err(self.write_error(source)),
        }
    }

    /// Flush and release the file.
    ///
    /// # Errors
    ///
    /// [`FsError::CloseFile`] if flushing or releasing the handle fails.
    pub fn close(self) -> Result<(), FsError> {
        let Self { path, handle } = self;
        handle
            .close()
            .map_err(|source| FsError::CloseFile { path, source })
    }

    fn io_error(&self, source: io::Error) -> io::Error {
        io::Error::new(source.kind(), self.write_error(source))
    }
}

impl Write for ScaffoldFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.handle.write(buf) {
            Ok(n) => Ok(n),
            Err(source) => Err(self.io_error(source)),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.handle.flush() {
            Ok(()) => Ok(()),
            Err(source) => Err(self.io_error(source)),
        }
    }
}

impl fmt::Debug for ScaffoldFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScaffoldFile")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        FailPoint, MemoryPlatform, Permissions, is_close_file_error,
        is_create_directory_error, is_create_file_error, is_write_file_error,
    };

    fn memory_fs(platform: &MemoryPlatform) -> FileSystem<MemoryPlatform> {
        FileSystem::builder().build_with(platform.clone())
    }

    #[test]
    fn new_uses_native_platform_and_defaults() {
        let fs = FileSystem::new();
        assert_eq!(*fs.config(), Config::default());
    }

    #[test]
    fn create_makes_parents_and_file_with_default_permissions() {
        let platform = MemoryPlatform::new();
        let fs = memory_fs(&platform);

        let file = fs.create("a/b/c.txt").unwrap();
        file.close().unwrap();

        assert_eq!(platform.dirs(), vec![PathBuf::from("a"), PathBuf::from("a/b")]);
        assert_eq!(platform.dir_permissions("a"), Some(Permissions::default_dir()));
        assert_eq!(platform.dir_permissions("a/b"), Some(Permissions::default_dir()));
        assert_eq!(
            platform.file_permissions("a/b/c.txt"),
            Some(Permissions::default_file())
        );
    }

    #[test]
    fn create_uses_configured_permissions() {
        let platform = MemoryPlatform::new();
        let fs = FileSystem::builder()
            .directory_permissions(Permissions::from_mode(0o700))
            .file_permissions(Permissions::from_mode(0o600))
            .build_with(platform.clone());

        fs.create("x/y.txt").unwrap().close().unwrap();

        assert_eq!(platform.dir_permissions("x"), Some(Permissions::from_mode(0o700)));
        assert_eq!(
            platform.file_permissions("x/y.txt"),
            Some(Permissions::from_mode(0o600))
        );
    }

    #[test]
    fn create_in_current_directory_skips_dir_creation() {
        let platform = MemoryPlatform::new();
        platform.fail_at(FailPoint::CreateDir, "");
        let fs = memory_fs(&platform);

        fs.create("top.txt").unwrap().close().unwrap();
        assert!(platform.is_file("top.txt"));
        assert!(platform.dirs().is_empty());
    }

    #[test]
    fn directory_failure_is_create_directory_error() {
        let platform = MemoryPlatform::new();
        platform.fail_at(FailPoint::CreateDir, "a/b");
        let fs = memory_fs(&platform);

        let err = fs.create("a/b/c.txt").unwrap_err();
        assert!(is_create_directory_error(&err));
        assert!(!is_create_file_error(&err));
        assert!(!is_write_file_error(&err));
        assert!(!is_close_file_error(&err));
        assert_eq!(err.path(), Path::new("a/b/c.txt"));
        assert!(!platform.is_file("a/b/c.txt"));
    }

    #[test]
    fn open_failure_is_create_file_error() {
        let platform = MemoryPlatform::new();
        platform.fail_at(FailPoint::Open, "a/c.txt");
        let fs = memory_fs(&platform);

        let err = fs.create("a/c.txt").unwrap_err();
        assert!(err.is_create_file());
        assert!(err.to_string().contains("injected"));
    }

    #[test]
    fn create_or_update_truncates_existing() {
        let platform = MemoryPlatform::new();
        platform.add_file("a/c.txt", "old content");
        let fs = memory_fs(&platform);

        let mut file = fs.create("a/c.txt").unwrap();
        file.write_bytes(b"new").unwrap();
        file.close().unwrap();
        assert_eq!(platform.contents("a/c.txt").unwrap(), b"new");
    }

    #[test]
    fn create_new_rejects_existing() {
        let platform = MemoryPlatform::new();
        platform.add_file("a/c.txt", "old");
        let fs = FileSystem::builder()
            .file_mode(FileMode::CreateNew)
            .build_with(platform.clone());

        let err = fs.create("a/c.txt").unwrap_err();
        assert!(err.is_create_file());
        assert_eq!(platform.contents("a/c.txt").unwrap(), b"old");

        fs.create("a/d.txt").unwrap().close().unwrap();
        assert!(platform.is_file("a/d.txt"));
    }

    #[test]
    fn write_failure_is_write_file_error() {
        let platform = MemoryPlatform::new();
        platform.fail_at(FailPoint::Write, "w.txt");
        let fs = memory_fs(&platform);

        let mut file = fs.create("w.txt").unwrap();
        let err = file.write_bytes(b"data").unwrap_err();
        assert!(err.is_write_file());
        assert_eq!(err.path(), Path::new("w.txt"));
        file.close().unwrap();
    }

    #[test]
    fn io_write_failure_wraps_write_file_error() {
        let platform = MemoryPlatform::new();
        platform.fail_at(FailPoint::Write, "w.txt");
        let fs = memory_fs(&platform);

        let mut file = fs.create("w.txt").unwrap();
        let err = file.write_all(b"data").unwrap_err();
        assert!(is_write_file_error(&err));
        assert!(!is_close_file_error(&err));
        file.close().unwrap();
    }

    #[test]
    fn close_failure_is_close_file_error() {
        let platform = MemoryPlatform::new();
        platform.fail_at(FailPoint::Close, "c.txt");
        let fs = memory_fs(&platform);

        let mut file = fs.create("c.txt").unwrap();
        file.write_bytes(b"data").unwrap();
        let err = file.close().unwrap_err();
        assert!(is_close_file_error(&err));
        assert!(!is_write_file_error(&err));
        assert_eq!(platform.contents("c.txt").unwrap(), b"data");
    }

    #[test]
    fn write_through_io_write() {
        let platform = MemoryPlatform::new();
        let fs = memory_fs(&platform);

        let mut file = fs.create("doc/readme.md").unwrap();
        writeln!(file, "# {}", "title").unwrap();
        file.flush().unwrap();
        file.close().unwrap();
        assert_eq!(platform.contents("doc/readme.md").unwrap(), b"# title\n");
    }

    #[test]
    fn exists_delegates_to_platform() {
        let platform = MemoryPlatform::new();
        let fs = memory_fs(&platform);
        assert!(!fs.exists("a/c.txt"));
        fs.create("a/c.txt").unwrap().close().unwrap();
        assert!(fs.exists("a/c.txt"));
        assert!(fs.exists("a"));
    }

    #[test]
    fn native_create_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let fs = FileSystem::new();
        let path = dir.path().join("pkg").join("api").join("types.go");

        let mut file = fs.create(&path).unwrap();
        file.write_bytes(b"package api\n").unwrap();
        file.close().unwrap();

        assert!(fs.exists(&path));
        assert_eq!(std::fs::read(&path).unwrap(), b"package api\n");
    }

    #[test]
    fn native_create_new_rejects_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.go");
        std::fs::write(&path, b"old").unwrap();

        let fs = FileSystem::builder().file_mode(FileMode::CreateNew).build();
        let err = fs.create(&path).unwrap_err();
        assert!(is_create_file_error(&err));
        let source = std::error::Error::source(&err).unwrap();
        let io_err = source.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn native_directory_blocked_by_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("blocker"), b"").unwrap();

        let fs = FileSystem::new();
        let err = fs.create(dir.path().join("blocker").join("x.txt")).unwrap_err();
        assert!(is_create_directory_error(&err));
    }

    #[test]
    fn create_with_overrides_configured_mode() {
        let platform = MemoryPlatform::new();
        platform.add_file("a/c.txt", "old");
        let fs = FileSystem::builder()
            .file_mode(FileMode::CreateNew)
            .build_with(platform.clone());

        let mut file = fs.create_with("a/c.txt", FileMode::CreateOrUpdate).unwrap();
        file.write_bytes(b"new").unwrap();
        file.close().unwrap();
        assert_eq!(platform.contents("a/c.txt").unwrap(), b"new");
        assert_eq!(fs.config().file_mode, FileMode::CreateNew);
    }

    #[test]
    fn create_with_create_new_on_update_config() {
        let platform = MemoryPlatform::new();
        platform.add_file("a/c.txt", "old");
        let fs = memory_fs(&platform);

        let err = fs.create_with("a/c.txt", FileMode::CreateNew).unwrap_err();
        assert!(err.is_create_file());
        assert_eq!(platform.contents("a/c.txt").unwrap(), b"old");
    }

    #[test]
    fn dropping_unclosed_file_skips_close() {
        let platform = MemoryPlatform::new();
        platform.fail_at(FailPoint::Close, "d.txt");
        let fs = memory_fs(&platform);

        let mut file = fs.create("d.txt").unwrap();
        file.write_bytes(b"data").unwrap();
        drop(file);
        assert_eq!(platform.contents("d.txt").unwrap(), b"data");
    }

    #[cfg(unix)]
    #[test]
    fn native_close_on_character_device() {
        let fs = FileSystem::new();
        let mut file = fs.create("/dev/null").unwrap();
        file.write_bytes(b"x").unwrap();
        file.close().unwrap();
    }

    #[test]
    fn filesystem_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FileSystem>();
        assert_send_sync::<FileSystem<MemoryPlatform>>();
    }
}
