//! config.toml parsing
//!
//! ```toml
//! [defaults]
//! author = "Jane Doe jane.doe@example.com"
//! license = "apache"
//! module_path = "github.com/jane/app"
//! profiles = ["base", "web"]
//!
//! [toolchain]
//! go_version = "1.22"
//! ```

use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::error::{hints, SetupError};

/// Root of `config.toml`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
    /// Defaults for `init` flags
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Toolchain overrides
    #[serde(default)]
    pub toolchain: ToolchainConfig,
}

/// `[defaults]` section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Author name and email
    pub author: Option<String>,

    /// `mit` or `apache`
    pub license: Option<String>,

    /// Module path written to go.mod
    pub module_path: Option<String>,

    /// Profiles applied when `--profile` is not given
    pub profiles: Option<Vec<String>>,
}

/// `[toolchain]` section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolchainConfig {
    /// Pin the `go` directive instead of asking the installed toolchain
    pub go_version: Option<String>,
}

impl UserConfig {
    /// Load the config file, treating a missing file as an empty config
    pub fn load_or_default(path: &Path) -> Result<Self, SetupError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(SetupError::io("read configuration from", path, e)),
        }
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Result<Self, SetupError> {
        let config: Self = toml::from_str(content).map_err(|e| {
            SetupError::config_error_with_hint(
                format!("Failed to parse config.toml: {}", e.message()),
                hints::invalid_config(),
            )
        })?;

        if let Some(profiles) = &config.defaults.profiles {
            if profiles.is_empty() {
                return Err(SetupError::config_error_with_hint(
                    "`defaults.profiles` must not be empty",
                    "Remove the key to fall back to the `default` profile",
                ));
            }
        }

        Ok(config)
    }
}
