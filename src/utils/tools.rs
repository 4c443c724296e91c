//! Go toolchain detection with graceful degradation
//!
//! The generated `go.mod` pins the `major.minor` version of the Go toolchain
//! installed on the machine. When no toolchain can be found the scaffold still
//! proceeds with [`FALLBACK_GO_VERSION`].

use std::path::PathBuf;
use std::process::Command;
use std::sync::OnceLock;

use regex::Regex;
use which::which;

/// Version written to `go.mod` when no toolchain is detected
pub const FALLBACK_GO_VERSION: &str = "1.21";

/// Where the `go` directive version came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    /// `[toolchain] go_version` in config.toml
    Config,
    /// Output of the installed `go` binary
    Detected,
    /// Built-in fallback
    Fallback,
}

/// Resolved Go toolchain version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoVersion {
    /// `major.minor`, e.g. `1.21`
    pub major_minor: String,
    pub source: VersionSource,
}

impl GoVersion {
    /// Resolve the version, preferring an explicit override over detection
    pub fn resolve(override_version: Option<&str>) -> Self {
        if let Some(version) = override_version.and_then(extract_major_minor) {
            return Self {
                major_minor: version,
                source: VersionSource::Config,
            };
        }

        match detect_go_version() {
            Some(major_minor) => Self {
                major_minor,
                source: VersionSource::Detected,
            },
            None => Self::fallback(),
        }
    }

    /// The built-in fallback version
    pub fn fallback() -> Self {
        Self {
            major_minor: FALLBACK_GO_VERSION.to_string(),
            source: VersionSource::Fallback,
        }
    }
}

fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+\.\d+").expect("version pattern is valid"))
}

/// Extract the first `major.minor` pair from a version string
///
/// `go1.21.3` becomes `1.21`; the patch component is dropped.
pub fn extract_major_minor(raw: &str) -> Option<String> {
    version_pattern()
        .find(raw)
        .map(|m| m.as_str().to_string())
}

/// Locate the `go` binary on `PATH`
pub fn find_go() -> Option<PathBuf> {
    which("go").ok()
}

/// Ask the installed toolchain for its version
fn detect_go_version() -> Option<String> {
    let go = find_go()?;

    // `go env GOVERSION` prints just `go1.21.3`
    if let Ok(output) = Command::new(&go).args(["env", "GOVERSION"]).output() {
        if output.status.success() {
            let raw = String::from_utf8_lossy(&output.stdout);
            if let Some(version) = extract_major_minor(raw.trim()) {
                return Some(version);
            }
        }
    }

    // Older toolchains: `go version go1.12.5 linux/amd64`
    let output = Command::new(&go).arg("version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    extract_major_minor(&String::from_utf8_lossy(&output.stdout))
}
