//! `std::fs` backed platform.

use std::fs::{DirBuilder, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use tracing::trace;

use crate::{FsHandle, FsPlatform, OpenFlags, Permissions};

/// The host file-system.
///
/// Permission bits are applied on Unix (subject to the process umask) and
/// ignored elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativePlatform;

impl NativePlatform {
    /// Create a handle to the host file-system.
    pub const fn new() -> Self {
        Self
    }
}

impl FsPlatform for NativePlatform {
    fn exists(&self, path: &Path) -> bool {
        path.try_exists().unwrap_or(false)
    }

    fn create_dir_all(&self, path: &Path, perm: Permissions) -> io::Result<()> {
        trace!(path = %path.display(), mode = perm.mode(), "create_dir_all");
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(perm.mode());
        }
        builder.create(path)
    }

    fn open_file(
        &self,
        path: &Path,
        flags: OpenFlags,
        perm: Permissions,
    ) -> io::Result<Box<dyn FsHandle>> {
        trace!(path = %path.display(), ?flags, mode = perm.mode(), "open_file");
        let mut options = OpenOptions::new();
        options
            .write(flags.write)
            .create(flags.create)
            .create_new(flags.create_new)
            .truncate(flags.truncate);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(perm.mode());
        }
        Ok(Box::new(NativeFile(options.open(path)?)))
    }
}

/// A host file opened for writing.
#[derive(Debug)]
struct NativeFile(File);

impl Write for NativeFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

impl FsHandle for NativeFile {
    fn close(self: Box<Self>) -> io::Result<()> {
        let mut file = self.0;
        file.flush()
    }
}
