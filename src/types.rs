//! Core types for scaffold file creation.

/// Unix-style permissions stored as a mode bitmask.
///
/// Uses the standard Unix permission bits (rwxrwxrwx). On platforms without
/// Unix permissions the bits are carried but not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Permissions(u32);

impl Permissions {
    /// Create permissions from a Unix mode (e.g., 0o755).
    #[inline]
    pub const fn from_mode(mode: u32) -> Self {
        Self(mode & 0o7777)
    }

    /// Get the raw mode value.
    #[inline]
    pub const fn mode(&self) -> u32 {
        self.0
    }

    /// Default permissions for a new file (0o666 = rw-rw-rw-, before umask).
    #[inline]
    pub const fn default_file() -> Self {
        Self(0o666)
    }

    /// Default permissions for a new directory (0o777 = rwxrwxrwx, before umask).
    #[inline]
    pub const fn default_dir() -> Self {
        Self(0o777)
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::default_file()
    }
}

/// Policy applied when opening a scaffold file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FileMode {
    /// Create the file, or truncate it if it already exists.
    #[default]
    CreateOrUpdate,
    /// Create the file, failing if it already exists.
    CreateNew,
}

impl FileMode {
    /// The open flags this policy translates to.
    #[inline]
    pub const fn open_flags(self) -> OpenFlags {
        match self {
            FileMode::CreateOrUpdate => OpenFlags::CREATE_OR_UPDATE,
            FileMode::CreateNew => OpenFlags::CREATE_NEW,
        }
    }
}

/// Flags for opening a file through a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OpenFlags {
    /// Open for writing.
    pub write: bool,
    /// Create file if it doesn't exist.
    pub create: bool,
    /// Create file, failing if it already exists. Takes precedence over
    /// `create` and `truncate`.
    pub create_new: bool,
    /// Truncate file to zero length.
    pub truncate: bool,
}

impl OpenFlags {
    /// Write access with create and truncate.
    pub const CREATE_OR_UPDATE: Self = Self {
        write: true,
        create: true,
        create_new: false,
        truncate: true,
    };

    /// Write access with exclusive create.
    pub const CREATE_NEW: Self = Self {
        write: true,
        create: false,
        create_new: true,
        truncate: false,
    };
}

/// What to do when a file about to be written already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IfExists {
    /// Replace the existing content.
    #[default]
    Overwrite,
    /// Leave the existing file untouched.
    Skip,
    /// Fail with [`FsError::CreateFile`](crate::FsError::CreateFile).
    Error,
}

/// Result of a conditional write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was written.
    Written,
    /// The file already existed and was left untouched.
    Skipped,
}
