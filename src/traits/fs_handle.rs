//! Open file handles returned by a platform.

use std::io::{self, Write};

/// A writable file handle.
///
/// Closing consumes the handle so that close failures can be reported, which
/// dropping alone cannot do.
///
/// # Object Safety
///
/// This trait is object-safe and is used as `Box<dyn FsHandle>`.
pub trait FsHandle: Write + Send {
    /// Flush pending data and release the handle.
    ///
    /// # Errors
    ///
    /// Any I/O error raised while flushing or releasing the handle.
    fn close(self: Box<Self>) -> io::Result<()>;
}
