//! The immutable description of one `init` invocation

use std::path::PathBuf;

use crate::error::SetupError;
use crate::scaffold::templates::names;
use crate::utils::tools::FALLBACK_GO_VERSION;

/// Profile applied when none is requested; it is never copied on its own
pub const DEFAULT_PROFILE: &str = "default";

/// `--module-path` value meaning "no module path given"
pub const DEFAULT_MODULE_PATH: &str = ".";

/// Module path written to go.mod when none is given
pub const MODULE_PLACEHOLDER: &str = "example.com/project";

/// License requested for the LICENSE file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseChoice {
    Mit,
    Apache,
    /// Anything else; reported when the bare structure is planned
    Unsupported(String),
}

impl LicenseChoice {
    /// Parse a `--license` value, case-insensitively
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "mit" => LicenseChoice::Mit,
            "apache" => LicenseChoice::Apache,
            _ => LicenseChoice::Unsupported(value.to_string()),
        }
    }

    /// Template holding the license text
    pub fn template(&self) -> Result<&'static str, SetupError> {
        match self {
            LicenseChoice::Mit => Ok(names::LICENSE_MIT),
            LicenseChoice::Apache => Ok(names::LICENSE_APACHE),
            LicenseChoice::Unsupported(value) => Err(SetupError::InvalidLicense {
                value: value.clone(),
            }),
        }
    }
}

/// Groups of directories and files that make up a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureSet {
    /// Minimal layout every project gets
    Bare,
    /// Container and CI descriptors
    Ops,
    /// Remaining directories of the full layout
    Remainder,
}

/// Everything `init` needs, resolved once from flags and config
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    /// Existing directory to initialize
    pub location: PathBuf,
    /// Free text "Name email"
    pub author: String,
    /// `.` when not given
    pub module_path: String,
    pub license: LicenseChoice,
    /// Ordered, without duplicates
    pub profiles: Vec<String>,
    /// `major.minor` for the `go` directive
    pub go_version: String,
    pub full: bool,
    pub ops: bool,
    /// Only set up the profiles directory
    pub config_only: bool,
}

impl ScaffoldRequest {
    /// A bare-mode request with default options
    pub fn new(location: impl Into<PathBuf>) -> Self {
        Self {
            location: location.into(),
            author: String::new(),
            module_path: DEFAULT_MODULE_PATH.to_string(),
            license: LicenseChoice::Mit,
            profiles: vec![DEFAULT_PROFILE.to_string()],
            go_version: FALLBACK_GO_VERSION.to_string(),
            full: false,
            ops: false,
            config_only: false,
        }
    }

    /// Whether any profile other than the implicit default was asked for
    pub fn wants_profiles(&self) -> bool {
        self.profiles.len() > 1
            || self
                .profiles
                .first()
                .is_some_and(|p| p != DEFAULT_PROFILE)
    }

    /// Structure sets to apply, in order
    ///
    /// Bare always runs. `--full` and `--ops` both enable Ops, which still
    /// runs once when both are given.
    pub fn structure_sets(&self) -> Vec<StructureSet> {
        let mut sets = vec![StructureSet::Bare];
        if self.full || self.ops {
            sets.push(StructureSet::Ops);
        }
        if self.full {
            sets.push(StructureSet::Remainder);
        }
        sets
    }

    /// Module path for go.mod
    pub fn module_name(&self) -> &str {
        if self.module_path == DEFAULT_MODULE_PATH {
            MODULE_PLACEHOLDER
        } else {
            &self.module_path
        }
    }
}

/// Deduplicate profile names while keeping first-seen order
pub fn dedup_profiles<I, S>(profiles: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = Vec::new();
    for profile in profiles {
        let profile = profile.into();
        if !seen.contains(&profile) {
            seen.push(profile);
        }
    }
    seen
}
