//! User profiles: named directory trees under `~/.go-setup/profiles`
//!
//! A profile is copied wholesale into the project before the layout is
//! scaffolded, so files it carries win over the embedded templates.

pub mod copy;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::validation::validate_profile_name;
use crate::error::{hints, SetupError};
use crate::scaffold::Report;
use crate::utils::paths::ConfigPaths;
use crate::utils::terminal::{print_info, print_step};

pub use copy::{copy_tree, CopyReport};

/// Read and write access to the profiles directory
#[derive(Debug, Clone)]
pub struct ProfileStore {
    paths: ConfigPaths,
}

impl ProfileStore {
    pub fn new(paths: ConfigPaths) -> Self {
        Self { paths }
    }

    /// Directory holding all profiles
    pub fn root(&self) -> PathBuf {
        self.paths.profiles_dir()
    }

    /// Directory of one profile
    pub fn profile_dir(&self, name: &str) -> PathBuf {
        self.paths.profile_dir(name)
    }

    /// Names of stored profiles, sorted
    ///
    /// A missing profiles directory simply means there are no profiles.
    pub fn list(&self) -> Result<Vec<String>, SetupError> {
        let root = self.root();
        let entries = match fs::read_dir(&root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(SetupError::io("read", &root, e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SetupError::io("read", &root, e))?;
            if entry.path().is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Store a copy of `from` as a new profile called `name`
    pub fn add(&self, name: &str, from: &Path) -> Result<CopyReport, SetupError> {
        validate_profile_name(name)?;

        let dest = self.profile_dir(name);
        if dest.exists() {
            return Err(SetupError::profile_error_with_hint(
                name,
                format!("already exists at {}", dest.display()),
                hints::profile_exists(),
            ));
        }

        self.paths.ensure_profiles_dir()?;
        copy_tree(from, &dest)
    }

    /// Copy each named profile into `location`, in order
    ///
    /// Failures are warnings: a missing profile or a failing entry inside one
    /// does not stop the remaining profiles.
    pub fn apply(&self, names: &[String], location: &Path, report: &mut Report) {
        print_info("Copying profiles...");

        for name in names {
            print_info(&format!("Copying profile: {}", name));

            if let Err(e) = validate_profile_name(name) {
                report.warn(e);
                continue;
            }

            match copy_tree(&self.profile_dir(name), location) {
                Ok(copied) => {
                    print_step(&format!("profile {}: {}", name, copied.summary()));
                    for skipped in &copied.skipped {
                        report.warn(SetupError::AlreadyExists {
                            path: skipped.clone(),
                        });
                    }
                    for err in copied.errors {
                        report.warn(err);
                    }
                }
                Err(e) => report.warn(e),
            }
        }
    }
}
