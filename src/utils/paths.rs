//! Path utilities for go-setup

use std::io;
use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::SetupError;

/// Name of the per-user configuration directory inside `$HOME`
pub const CONFIG_DIR_NAME: &str = ".go-setup";

/// Name of the profiles directory inside the configuration root
pub const PROFILES_DIR_NAME: &str = "profiles";

/// Name of the optional user configuration file
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Report whether `path` exists
///
/// A missing path is `Ok(false)`; any other stat failure (for instance a
/// permission error on a parent) is returned as an error.
pub fn exists(path: &Path) -> Result<bool, SetupError> {
    match std::fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(SetupError::io("inspect", path, e)),
    }
}

/// Layout of the per-user configuration root
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    root: PathBuf,
}

impl ConfigPaths {
    /// Resolve `<home>/.go-setup` for the current user
    pub fn discover() -> Result<Self, SetupError> {
        let base = BaseDirs::new().ok_or_else(|| {
            SetupError::config_error_with_hint(
                "could not determine the home directory",
                "Set the HOME environment variable",
            )
        })?;
        Ok(Self::with_home(base.home_dir()))
    }

    /// Use an explicit home directory
    pub fn with_home(home: &Path) -> Self {
        Self {
            root: home.join(CONFIG_DIR_NAME),
        }
    }

    /// `<home>/.go-setup`
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<home>/.go-setup/profiles`
    pub fn profiles_dir(&self) -> PathBuf {
        self.root.join(PROFILES_DIR_NAME)
    }

    /// `<home>/.go-setup/profiles/<name>`
    pub fn profile_dir(&self, name: &str) -> PathBuf {
        self.profiles_dir().join(name)
    }

    /// `<home>/.go-setup/config.toml`
    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    /// Create the profiles directory (and its parents) if missing
    pub fn ensure_profiles_dir(&self) -> Result<PathBuf, SetupError> {
        let dir = self.profiles_dir();
        std::fs::create_dir_all(&dir)
            .map_err(|e| SetupError::io("create directory", &dir, e))?;
        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_exists() {
        let temp_dir = TempDir::new().unwrap();
        assert!(exists(temp_dir.path()).unwrap());
        assert!(!exists(&temp_dir.path().join("missing")).unwrap());
    }

    #[test]
    fn test_config_layout() {
        let paths = ConfigPaths::with_home(Path::new("/home/jane"));
        assert_eq!(paths.root(), Path::new("/home/jane/.go-setup"));
        assert_eq!(
            paths.profile_dir("web"),
            PathBuf::from("/home/jane/.go-setup/profiles/web")
        );
        assert_eq!(
            paths.config_file(),
            PathBuf::from("/home/jane/.go-setup/config.toml")
        );
    }

    #[test]
    fn test_ensure_profiles_dir_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ConfigPaths::with_home(temp_dir.path());
        let first = paths.ensure_profiles_dir().unwrap();
        let second = paths.ensure_profiles_dir().unwrap();
        assert_eq!(first, second);
        assert!(first.is_dir());
    }
}
