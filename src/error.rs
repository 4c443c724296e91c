//! Error types and helpers for user-friendly error messages
//!
//! Every failure the scaffolder can hit is a [`SetupError`]. Most of them are
//! non-fatal: the step that produced them is skipped, the error is reported
//! and the run keeps going. Only a missing target location, an unusable
//! profile source or a broken config file stop the process.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Custom error types with helpful context and suggestions
#[derive(Error, Debug)]
pub enum SetupError {
    /// The directory to initialize does not exist
    #[error("location to initialize project doesn't exist: {}", path.display())]
    LocationNotFound { path: PathBuf },

    /// A file or directory the scaffolder wanted to create is already there
    #[error("{}: file already exists", path.display())]
    AlreadyExists { path: PathBuf },

    /// License flag outside of the supported set
    #[error("Invalid license: {value}. Valid values are mit or apache")]
    InvalidLicense { value: String },

    /// The embedded bundle has no payload under this name
    #[error("template not found in bundle: {name}")]
    TemplateMissing { name: String },

    /// Filesystem failure, tagged with the action that was attempted
    #[error("failed to {action} '{}': {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration file errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        hint: Option<String>,
    },

    /// Profile storage errors
    #[error("Profile error for '{profile}': {message}")]
    Profile {
        profile: String,
        message: String,
        hint: Option<String>,
    },
}

impl SetupError {
    /// Wrap an [`io::Error`], turning `AlreadyExists` into its dedicated variant
    pub fn io(action: &'static str, path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::AlreadyExists {
            return Self::AlreadyExists {
                path: path.to_path_buf(),
            };
        }
        Self::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a configuration error with a hint
    pub fn config_error_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Create a profile error with a hint
    pub fn profile_error_with_hint(
        profile: impl Into<String>,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self::Profile {
            profile: profile.into(),
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Whether this error means a scaffold step found its target already in place
    pub fn is_already_exists(&self) -> bool {
        matches!(self, SetupError::AlreadyExists { .. })
    }

    fn hint(&self) -> Option<&str> {
        match self {
            SetupError::LocationNotFound { .. } => Some(hints::location_not_found()),
            SetupError::InvalidLicense { .. } => Some(hints::license()),
            SetupError::Config { hint, .. } | SetupError::Profile { hint, .. } => hint.as_deref(),
            SetupError::AlreadyExists { .. }
            | SetupError::TemplateMissing { .. }
            | SetupError::Io { .. } => None,
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;

        eprintln!("{} {}", style("Error:").red().bold(), self);

        if let Some(h) = self.hint() {
            eprintln!("\n{} {}", style("HINT:").yellow().bold(), h);
        }
    }
}

/// Common error hints
pub mod hints {
    /// Get hint for a missing target location
    pub fn location_not_found() -> &'static str {
        "Create the directory first or point --location at an existing one:\n\
         • mkdir -p my-project && go-setup init -l my-project"
    }

    /// Get hint for an unsupported license value
    pub fn license() -> &'static str {
        "Pass --license mit or --license apache, or set `license` under [defaults] in config.toml"
    }

    /// Get hint for a malformed config file
    pub fn invalid_config() -> &'static str {
        "config.toml is invalid. Common issues:\n\
         • Invalid TOML syntax (check quotes, brackets, commas)\n\
         • Unknown section (only [defaults] and [toolchain] are read)\n\
         • `profiles` must be an array of strings"
    }

    /// Get hint for adding a profile that is already stored
    pub fn profile_exists() -> &'static str {
        "Pick another name or remove the existing profile directory first.\n\
         Run: go-setup profile path  to see where profiles are stored"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_already_exists_maps_to_variant() {
        let err = SetupError::io(
            "create directory",
            Path::new("bin"),
            io::Error::from(io::ErrorKind::AlreadyExists),
        );
        assert!(err.is_already_exists());
        assert_eq!(err.to_string(), "bin: file already exists");
    }

    #[test]
    fn test_io_other_kind_keeps_action() {
        let err = SetupError::io(
            "read",
            Path::new("a/b"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(!err.is_already_exists());
        assert!(err.to_string().starts_with("failed to read 'a/b'"));
    }

    #[test]
    fn test_invalid_license_message() {
        let err = SetupError::InvalidLicense {
            value: "bsd".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid license: bsd. Valid values are mit or apache"
        );
        assert!(err.hint().is_some());
    }
}
