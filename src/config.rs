//! Configuration for [`FileSystem`](crate::FileSystem).

use crate::{FileMode, FileSystem, FsPlatform, NativePlatform, Permissions};

/// Permission bits and open policy used when creating scaffold files.
///
/// Defaults to `0o777` for directories, `0o666` for files (both before umask)
/// and [`FileMode::CreateOrUpdate`].
///
/// # Example
///
/// ```rust
/// use scaffold_fs::{Config, FileMode, Permissions};
///
/// let config = Config::default()
///     .with_file_permissions(Permissions::from_mode(0o644))
///     .with_file_mode(FileMode::CreateNew);
/// assert_eq!(config.dir_permissions, Permissions::default_dir());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Permissions for directories created along the way.
    pub dir_permissions: Permissions,
    /// Permissions for newly created files.
    pub file_permissions: Permissions,
    /// Whether existing files are truncated or rejected.
    pub file_mode: FileMode,
}

impl Config {
    /// Replace the directory permissions.
    #[must_use]
    pub const fn with_directory_permissions(mut self, perm: Permissions) -> Self {
        self.dir_permissions = perm;
        self
    }

    /// Replace the file permissions.
    #[must_use]
    pub const fn with_file_permissions(mut self, perm: Permissions) -> Self {
        self.file_permissions = perm;
        self
    }

    /// Replace the file mode.
    #[must_use]
    pub const fn with_file_mode(mut self, mode: FileMode) -> Self {
        self.file_mode = mode;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dir_permissions: Permissions::default_dir(),
            file_permissions: Permissions::default_file(),
            file_mode: FileMode::CreateOrUpdate,
        }
    }
}

/// Builder for [`FileSystem`].
///
/// Each option is independent: options not set keep their default.
///
/// ```rust
/// use scaffold_fs::{FileMode, FileSystem, Permissions};
///
/// let fs = FileSystem::builder()
///     .directory_permissions(Permissions::from_mode(0o755))
///     .file_mode(FileMode::CreateNew)
///     .build();
/// assert_eq!(fs.config().file_permissions, Permissions::default_file());
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[must_use]
pub struct FileSystemBuilder {
    config: Config,
}

impl FileSystemBuilder {
    /// Start from the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Permissions for created directories.
    pub fn directory_permissions(mut self, perm: Permissions) -> Self {
        self.config.dir_permissions = perm;
        self
    }

    /// Permissions for created files.
    pub fn file_permissions(mut self, perm: Permissions) -> Self {
        self.config.file_permissions = perm;
        self
    }

    /// Open policy for existing files.
    pub fn file_mode(mut self, mode: FileMode) -> Self {
        self.config.file_mode = mode;
        self
    }

    /// The configuration built so far.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Build a filesystem over the native platform.
    pub fn build(self) -> FileSystem<NativePlatform> {
        FileSystem::with_config(self.config)
    }

    /// Build a filesystem over the given platform.
    pub fn build_with<P: FsPlatform>(self, platform: P) -> FileSystem<P> {
        FileSystem::with_platform(platform, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIR_PERM: Permissions = Permissions::from_mode(0o750);
    const FILE_PERM: Permissions = Permissions::from_mode(0o640);

    #[test]
    fn no_options_uses_defaults() {
        let config = FileSystemBuilder::new().config();
        assert_eq!(config.dir_permissions, Permissions::default_dir());
        assert_eq!(config.file_permissions, Permissions::default_file());
        assert_eq!(config.file_mode, FileMode::CreateOrUpdate);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn directory_permissions_option() {
        let config = FileSystemBuilder::new().directory_permissions(DIR_PERM).config();
        assert_eq!(config.dir_permissions, DIR_PERM);
        assert_eq!(config.file_permissions, Permissions::default_file());
        assert_eq!(config.file_mode, FileMode::CreateOrUpdate);
    }

    #[test]
    fn file_permissions_option() {
        let config = FileSystemBuilder::new().file_permissions(FILE_PERM).config();
        assert_eq!(config.dir_permissions, Permissions::default_dir());
        assert_eq!(config.file_permissions, FILE_PERM);
        assert_eq!(config.file_mode, FileMode::CreateOrUpdate);
    }

    #[test]
    fn both_permission_options() {
        let config = FileSystemBuilder::new()
            .directory_permissions(DIR_PERM)
            .file_permissions(FILE_PERM)
            .config();
        assert_eq!(config.dir_permissions, DIR_PERM);
        assert_eq!(config.file_permissions, FILE_PERM);
        assert_eq!(config.file_mode, FileMode::CreateOrUpdate);
    }

    #[test]
    fn file_mode_option() {
        let config = FileSystemBuilder::new().file_mode(FileMode::CreateNew).config();
        assert_eq!(config.file_mode, FileMode::CreateNew);
        assert_eq!(config.dir_permissions, Permissions::default_dir());
    }

    #[test]
    fn value_style_matches_builder() {
        let built = FileSystemBuilder::new()
            .directory_permissions(DIR_PERM)
            .file_permissions(FILE_PERM)
            .file_mode(FileMode::CreateNew)
            .config();
        let value = Config::default()
            .with_directory_permissions(DIR_PERM)
            .with_file_permissions(FILE_PERM)
            .with_file_mode(FileMode::CreateNew);
        assert_eq!(built, value);
    }

    #[test]
    fn build_keeps_config() {
        let fs = FileSystemBuilder::new().file_permissions(FILE_PERM).build();
        assert_eq!(fs.config().file_permissions, FILE_PERM);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_deserializes_with_missing_fields() {
        let config: Config = serde_json::from_str(r#"{"file_mode": "create_new"}"#).unwrap();
        assert_eq!(config.file_mode, FileMode::CreateNew);
        assert_eq!(config.dir_permissions, Permissions::default_dir());

        let config: Config = serde_json::from_str(r#"{"dir_permissions": 493}"#).unwrap();
        assert_eq!(config.dir_permissions.mode(), 0o755);
    }
}
