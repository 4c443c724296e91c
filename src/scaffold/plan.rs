//! Structure planning and execution
//!
//! Each structure set is a fixed, ordered list of [`Step`]s relative to the
//! target location. Planning is pure; [`Scaffolder`] applies the steps and
//! turns every failure into a warning on the [`Report`].

use std::path::{Path, PathBuf};

use crate::config::validation::validate_module_path;
use crate::error::SetupError;
use crate::scaffold::materialize::{self, FILE_MODE};
use crate::scaffold::report::{Report, StepOutcome};
use crate::scaffold::request::{ScaffoldRequest, StructureSet};
use crate::scaffold::templates::{names, TemplateSource};

/// Top-level directories of the bare layout
pub const BARE_DIRS: &[&str] = &["bin", "configs", "docs", "examples", "pkg", "scripts"];

/// Nested directory of the bare layout
pub const BARE_NESTED_DIR: &[&str] = &["test", "data"];

/// Directories that complete the full layout
pub const REMAINDER_DIRS: &[&str] = &[
    "api",
    "assets",
    "build",
    "cmd",
    "deployments",
    "githooks",
    "init",
    "internal",
    "third_party",
    "tools",
    "web",
    "website",
];

/// Where a file's bytes come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Named entry of the template bundle
    Template(&'static str),
    /// Generated bytes
    Inline(Vec<u8>),
}

/// One planned filesystem action
#[derive(Debug)]
pub enum Step {
    /// Create one directory; its parent must exist
    MakeDir(PathBuf),
    /// Create a directory with its parents
    MakeDirAll(PathBuf),
    /// Write a file that must not exist yet
    Materialize { dest: PathBuf, content: Content },
    /// A step that could not be planned
    Rejected(SetupError),
}

impl Step {
    fn template(dest: &str, name: &'static str) -> Self {
        Step::Materialize {
            dest: PathBuf::from(dest),
            content: Content::Template(name),
        }
    }
}

/// Steps for one structure set
pub fn plan(set: StructureSet, request: &ScaffoldRequest) -> Vec<Step> {
    match set {
        StructureSet::Bare => plan_bare(request),
        StructureSet::Ops => plan_ops(),
        StructureSet::Remainder => plan_remainder(),
    }
}

/// Minimal layout: six directories, `test/data`, then the boilerplate files
pub fn plan_bare(request: &ScaffoldRequest) -> Vec<Step> {
    let mut steps: Vec<Step> = BARE_DIRS
        .iter()
        .map(|dir| Step::MakeDir(PathBuf::from(dir)))
        .collect();
    steps.push(Step::MakeDirAll(BARE_NESTED_DIR.iter().collect()));

    steps.push(Step::template("main.go", names::MAIN_GO));
    steps.push(Step::template(".gitignore", names::GITIGNORE));
    steps.push(Step::template("Makefile", names::MAKEFILE));
    steps.push(Step::template("README.md", names::README));

    match request.license.template() {
        Ok(name) => steps.push(Step::template("LICENSE", name)),
        Err(e) => steps.push(Step::Rejected(e)),
    }

    match validate_module_path(request.module_name()) {
        Ok(()) => steps.push(Step::Materialize {
            dest: PathBuf::from("go.mod"),
            content: Content::Inline(
                module_manifest(request.module_name(), &request.go_version).into_bytes(),
            ),
        }),
        Err(e) => steps.push(Step::Rejected(e)),
    }
    steps.push(Step::template("CHANGELOG.md", names::CHANGELOG));
    steps
}

/// Container build and CI pipeline descriptors
pub fn plan_ops() -> Vec<Step> {
    vec![
        Step::template("Dockerfile", names::DOCKERFILE),
        Step::template("Jenkinsfile", names::JENKINSFILE),
    ]
}

/// Rest of the full layout: directories only
pub fn plan_remainder() -> Vec<Step> {
    REMAINDER_DIRS
        .iter()
        .map(|dir| Step::MakeDir(PathBuf::from(dir)))
        .collect()
}

/// go.mod content
pub fn module_manifest(module_path: &str, go_version: &str) -> String {
    format!("module {}\n\ngo {}\n", module_path, go_version)
}

/// Applies planned steps under a root directory
pub struct Scaffolder<'a, T: TemplateSource + ?Sized> {
    root: &'a Path,
    templates: &'a T,
}

impl<'a, T: TemplateSource + ?Sized> Scaffolder<'a, T> {
    pub fn new(root: &'a Path, templates: &'a T) -> Self {
        Self { root, templates }
    }

    /// Apply every step in order; failures are recorded and skipped
    pub fn apply(&self, steps: Vec<Step>, report: &mut Report) {
        for step in steps {
            report.record(self.apply_step(step));
        }
    }

    fn apply_step(&self, step: Step) -> StepOutcome {
        match step {
            Step::MakeDir(rel) => {
                let path = self.root.join(rel);
                let result = materialize::create_dir(&path);
                StepOutcome::from_result(&path, result)
            }
            Step::MakeDirAll(rel) => {
                let path = self.root.join(rel);
                let result = materialize::create_dir_all(&path);
                StepOutcome::from_result(&path, result)
            }
            Step::Materialize { dest, content } => {
                let path = self.root.join(dest);
                let result = match &content {
                    Content::Template(name) => match self.templates.get(name) {
                        Some(bytes) => materialize::create_file(&path, bytes, FILE_MODE),
                        None => Err(SetupError::TemplateMissing {
                            name: (*name).to_string(),
                        }),
                    },
                    Content::Inline(bytes) => materialize::create_file(&path, bytes, FILE_MODE),
                };
                StepOutcome::from_result(&path, result)
            }
            Step::Rejected(e) => StepOutcome::Skipped(e),
        }
    }
}
