//! # scaffold-fs
//!
//! File creation for **scaffolding tools**: create a file and its parent
//! directories with configured permission bits, under a "create or update" or
//! "create new" policy, over a platform layer that tests can replace.
//!
//! ---
//!
//! ## Quick Start
//!
//! ```rust
//! use scaffold_fs::{FileSystem, FsError, FsScaffold};
//! use std::path::Path;
//!
//! fn scaffold(fs: &impl FsScaffold) -> Result<(), FsError> {
//!     let mut file = fs.create(Path::new("api/v1/types.go"))?;
//!     file.write_bytes(b"package v1\n")?;
//!     file.close()
//! }
//!
//! let dir = std::env::temp_dir().join("scaffold-fs-doc");
//! # let _ = std::fs::remove_dir_all(&dir);
//! let fs = FileSystem::new();
//! let mut file = fs.create(dir.join("main.go"))?;
//! file.write_bytes(b"package main\n")?;
//! file.close()?;
//! # std::fs::remove_dir_all(&dir).unwrap();
//! # Ok::<(), FsError>(())
//! ```
//!
//! ---
//!
//! ## Core Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`FileSystem`] | `exists` and `create` over a platform, with a [`Config`] |
//! | [`Config`] / [`FileSystemBuilder`] | Directory bits, file bits, [`FileMode`] |
//! | [`ScaffoldFile`] | Writer returned by `create`; must be closed |
//! | [`FsError`] | One variant per failure point, each with path and cause |
//! | [`FsPlatform`] | Capability trait for the underlying file-system |
//! | [`NativePlatform`] | `std::fs` implementation |
//! | [`MemoryPlatform`] | In-memory implementation with failure injection |
//!
//! ---
//!
//! ## Configuration
//!
//! | Setting | Default | Builder method |
//! |---------|---------|----------------|
//! | Directory permissions | `0o777` | [`directory_permissions`](FileSystemBuilder::directory_permissions) |
//! | File permissions | `0o666` | [`file_permissions`](FileSystemBuilder::file_permissions) |
//! | File mode | [`FileMode::CreateOrUpdate`] | [`file_mode`](FileSystemBuilder::file_mode) |
//!
//! Permission bits are passed through to the platform; on Unix the process
//! umask still applies.
//!
//! ---
//!
//! ## Error Handling
//!
//! | Variant | Raised by | Predicate |
//! |---------|-----------|-----------|
//! | [`FsError::CreateDirectory`] | [`FileSystem::create`] | [`is_create_directory_error`] |
//! | [`FsError::CreateFile`] | [`FileSystem::create`] | [`is_create_file_error`] |
//! | [`FsError::WriteFile`] | [`ScaffoldFile`] writes | [`is_write_file_error`] |
//! | [`FsError::CloseFile`] | [`ScaffoldFile::close`] | [`is_close_file_error`] |
//!
//! The predicates accept any `&dyn Error` and look through `source()` chains
//! and `io::Error` wrappers, so callers can branch on the failure category
//! without matching on message text:
//!
//! ```rust
//! use scaffold_fs::{FailPoint, FileSystem, FsScaffold, MemoryPlatform, is_close_file_error};
//! use std::path::Path;
//!
//! let platform = MemoryPlatform::new();
//! platform.fail_at(FailPoint::Close, "notes.txt");
//! let fs = FileSystem::builder().build_with(platform);
//!
//! let mut file = fs.create(Path::new("notes.txt")).unwrap();
//! file.write_bytes(b"hello").unwrap();
//! match file.close() {
//!     Err(e) if is_close_file_error(&e) => { /* contents are written, ignore */ }
//!     other => other.unwrap(),
//! }
//! ```
//!
//! ---
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialize [`Config`], [`Permissions`], [`FileMode`], [`IfExists`]; enables `FsScaffoldJson` |

// Private modules
mod config;
mod error;
mod ext;
mod filesystem;
mod memory;
mod native;
mod traits;
mod types;

// Public re-exports - error types
pub use error::{
    FsError, find_fs_error, is_close_file_error, is_create_directory_error, is_create_file_error,
    is_write_file_error,
};

// Public re-exports - core types
pub use config::{Config, FileSystemBuilder};
pub use types::{FileMode, IfExists, OpenFlags, Permissions, WriteOutcome};

// Public re-exports - traits
pub use traits::{FsHandle, FsPlatform, FsScaffold};

// Public re-exports - implementations
pub use filesystem::{FileSystem, ScaffoldFile};
pub use memory::{FailPoint, MemoryPlatform};
pub use native::NativePlatform;

// Public re-exports - extensions
pub use ext::FsScaffoldExt;

// Conditional re-exports
#[cfg(feature = "serde")]
pub use ext::FsScaffoldJson;
