//! In-memory platform for tests.

use std::collections::{HashMap, HashSet};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{FsHandle, FsPlatform, OpenFlags, Permissions};

/// Operations of [`MemoryPlatform`] that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailPoint {
    /// Creating the directory at the path.
    CreateDir,
    /// Opening the file at the path.
    Open,
    /// Writing to the file at the path.
    Write,
    /// Closing the file at the path.
    Close,
}

/// In-memory platform with failure injection.
///
/// Records the permissions each directory and file was created with, so tests
/// can assert on them without touching the host file-system. Clones share
/// state.
///
/// Relative and absolute paths are kept as given. The root always exists as
/// a directory; the empty path does not exist, but serves as the parent of
/// bare file names.
///
/// # Example
///
/// ```rust
/// use scaffold_fs::{FailPoint, FileSystem, MemoryPlatform};
/// use std::path::Path;
///
/// let platform = MemoryPlatform::new();
/// platform.fail_at(FailPoint::CreateDir, "a");
///
/// let fs = FileSystem::builder().build_with(platform.clone());
/// let err = fs.create(Path::new("a/b.txt")).err().unwrap();
/// assert!(err.is_create_directory());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryPlatform {
    state: Arc<Mutex<State>>,
}

#[derive(Debug, Default)]
struct State {
    dirs: HashMap<PathBuf, Permissions>,
    files: HashMap<PathBuf, MemoryFile>,
    failures: HashSet<(FailPoint, PathBuf)>,
}

#[derive(Debug, Clone)]
struct MemoryFile {
    permissions: Permissions,
    contents: Vec<u8>,
}

impl State {
    fn is_dir(&self, path: &Path) -> bool {
        !path.as_os_str().is_empty() && (path.parent().is_none() || self.dirs.contains_key(path))
    }

    /// Like `is_dir`, but the empty parent of a bare file name counts.
    fn is_parent_dir(&self, path: &Path) -> bool {
        path.as_os_str().is_empty() || self.is_dir(path)
    }

    fn check(&self, point: FailPoint, path: &Path) -> io::Result<()> {
        if self.failures.contains(&(point, path.to_path_buf())) {
            return Err(io::Error::other(format!(
                "injected {point:?} failure at {}",
                path.display()
            )));
        }
        Ok(())
    }
}

impl MemoryPlatform {
    /// Create an empty platform.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Make `point` fail for `path` until [`clear_failures`](Self::clear_failures).
    pub fn fail_at(&self, point: FailPoint, path: impl Into<PathBuf>) {
        self.state().failures.insert((point, path.into()));
    }

    /// Remove every injected failure.
    pub fn clear_failures(&self) {
        self.state().failures.clear();
    }

    /// Add a directory (and its ancestors) with default permissions.
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut state = self.state();
        for dir in missing_ancestors(&state, path.as_ref()) {
            state.dirs.insert(dir, Permissions::default_dir());
        }
    }

    /// Add a file with the given contents and default permissions.
    ///
    /// Parent directories are added as needed.
    pub fn add_file(&self, path: impl AsRef<Path>, contents: impl Into<Vec<u8>>) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.state().files.insert(
            path.to_path_buf(),
            MemoryFile {
                permissions: Permissions::default_file(),
                contents: contents.into(),
            },
        );
    }

    /// Returns `true` if `path` is a directory.
    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        self.state().is_dir(path.as_ref())
    }

    /// Returns `true` if `path` is a file.
    pub fn is_file(&self, path: impl AsRef<Path>) -> bool {
        self.state().files.contains_key(path.as_ref())
    }

    /// Permissions a directory was created with.
    pub fn dir_permissions(&self, path: impl AsRef<Path>) -> Option<Permissions> {
        self.state().dirs.get(path.as_ref()).copied()
    }

    /// Permissions a file was created with.
    pub fn file_permissions(&self, path: impl AsRef<Path>) -> Option<Permissions> {
        self.state()
            .files
            .get(path.as_ref())
            .map(|file| file.permissions)
    }

    /// Current contents of a file.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.state()
            .files
            .get(path.as_ref())
            .map(|file| file.contents.clone())
    }

    /// All directories, sorted.
    pub fn dirs(&self) -> Vec<PathBuf> {
        let mut dirs: Vec<_> = self.state().dirs.keys().cloned().collect();
        dirs.sort();
        dirs
    }

    /// All files, sorted.
    pub fn files(&self) -> Vec<PathBuf> {
        let mut files: Vec<_> = self.state().files.keys().cloned().collect();
        files.sort();
        files
    }
}

/// Ancestors of `path` (inclusive) that are not yet directories, outermost first.
fn missing_ancestors(state: &State, path: &Path) -> Vec<PathBuf> {
    let mut missing: Vec<PathBuf> = path
        .ancestors()
        .take_while(|dir| !state.is_parent_dir(dir))
        .map(Path::to_path_buf)
        .collect();
    missing.reverse();
    missing
}

impl FsPlatform for MemoryPlatform {
    fn exists(&self, path: &Path) -> bool {
        let state = self.state();
        state.is_dir(path) || state.files.contains_key(path)
    }

    fn create_dir_all(&self, path: &Path, perm: Permissions) -> io::Result<()> {
        let mut state = self.state();
        let missing = missing_ancestors(&state, path);
        for dir in &missing {
            if state.files.contains_key(dir) {
                return Err(io::Error::new(
                    io::ErrorKind::NotADirectory,
                    format!("not a directory: {}", dir.display()),
                ));
            }
            state.check(FailPoint::CreateDir, dir)?;
        }
        for dir in missing {
            state.dirs.insert(dir, perm);
        }
        Ok(())
    }

    fn open_file(
        &self,
        path: &Path,
        flags: OpenFlags,
        perm: Permissions,
    ) -> io::Result<Box<dyn FsHandle>> {
        let mut state = self.state();
        state.check(FailPoint::Open, path)?;

        if path.as_os_str().is_empty() {
            return Err(io::Error::new(io::ErrorKind::NotFound, "empty path"));
        }
        if state.is_dir(path) {
            return Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("is a directory: {}", path.display()),
            ));
        }
        let parent = path.parent().unwrap_or(Path::new(""));
        if !state.is_parent_dir(parent) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("parent directory not found: {}", parent.display()),
            ));
        }

        if let Some(file) = state.files.get_mut(path) {
            if flags.create_new {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("file exists: {}", path.display()),
                ));
            }
            if flags.truncate {
                file.contents.clear();
            }
        } else if flags.create || flags.create_new {
            state.files.insert(
                path.to_path_buf(),
                MemoryFile {
                    permissions: perm,
                    contents: Vec::new(),
                },
            );
        } else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found: {}", path.display()),
            ));
        }

        Ok(Box::new(MemoryHandle {
            path: path.to_path_buf(),
            platform: self.clone(),
        }))
    }
}

/// Handle to a [`MemoryPlatform`] file. Writes go straight to the shared state.
#[derive(Debug)]
struct MemoryHandle {
    path: PathBuf,
    platform: MemoryPlatform,
}

impl Write for MemoryHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.platform.state();
        state.check(FailPoint::Write, &self.path)?;
        let file = state.files.get_mut(&self.path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("file removed: {}", self.path.display()),
            )
        })?;
        file.contents.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl FsHandle for MemoryHandle {
    fn close(self: Box<Self>) -> io::Result<()> {
        self.platform.state().check(FailPoint::Close, &self.path)
    }
}
