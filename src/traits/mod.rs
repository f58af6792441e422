//! # Filesystem Traits
//!
//! The seams of the crate: what a platform must provide, and what scaffold
//! generators consume.
//!
//! ```text
//! FsPlatform (std::fs, in-memory fake, ...)
//!      ↓ injected into
//! FileSystem<P>  ──implements──▶  FsScaffold  ──blanket──▶  FsScaffoldExt
//!      ↓ create()
//! ScaffoldFile (wraps Box<dyn FsHandle>)
//! ```
//!
//! ## Quick Reference
//!
//! | Trait | Implemented by | Purpose |
//! |-------|----------------|---------|
//! | [`FsPlatform`] | [`NativePlatform`](crate::NativePlatform), [`MemoryPlatform`](crate::MemoryPlatform) | Raw directory creation, file opening, existence probe |
//! | [`FsHandle`] | platform file handles | Writable handle with a fallible close |
//! | [`FsScaffold`] | [`FileSystem`](crate::FileSystem) | `exists` and `create` for generators |
//!
//! ## Object Safety
//!
//! All traits are object-safe:
//!
//! ```rust
//! use scaffold_fs::{FsError, FsScaffold};
//! use std::io::Write;
//! use std::path::Path;
//!
//! fn generate(fs: &dyn FsScaffold) -> Result<(), FsError> {
//!     if !fs.exists(Path::new("README.md")) {
//!         let mut file = fs.create(Path::new("README.md"))?;
//!         file.write_bytes(b"# project\n")?;
//!         file.close()?;
//!     }
//!     Ok(())
//! }
//! ```

mod fs_handle;
mod fs_platform;
mod fs_scaffold;

pub use fs_handle::FsHandle;
pub use fs_platform::FsPlatform;
pub use fs_scaffold::FsScaffold;
