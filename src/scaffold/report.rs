//! Step outcomes and the run report

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::SetupError;
use crate::utils::terminal::{print_error, print_step};

/// Result of one non-fatal step
///
/// Fatal failures never reach this type; they travel as `Err(SetupError)`.
#[derive(Debug)]
pub enum StepOutcome {
    /// The step created `path`
    Done(PathBuf),
    /// The step was skipped and left a warning behind
    Skipped(SetupError),
}

impl StepOutcome {
    /// Fold a fallible step into an outcome
    pub fn from_result(path: &Path, result: Result<(), SetupError>) -> Self {
        match result {
            Ok(()) => StepOutcome::Done(path.to_path_buf()),
            Err(e) => StepOutcome::Skipped(e),
        }
    }
}

/// Everything a run created or skipped
#[derive(Debug, Default)]
pub struct Report {
    created: Vec<PathBuf>,
    warnings: Vec<SetupError>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an outcome, echoing warnings to stderr as they happen
    pub fn record(&mut self, outcome: StepOutcome) {
        match outcome {
            StepOutcome::Done(path) => {
                print_step(&format!("created {}", path.display()));
                self.created.push(path);
            }
            StepOutcome::Skipped(err) => self.warn(err),
        }
    }

    /// Record a warning that did not come from a scaffold step
    pub fn warn(&mut self, err: SetupError) {
        print_error(&err.to_string());
        self.warnings.push(err);
    }

    /// Paths created during the run, in creation order
    pub fn created(&self) -> &[PathBuf] {
        &self.created
    }

    pub fn warnings(&self) -> &[SetupError] {
        &self.warnings
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Number of warnings that were "already exists" collisions
    pub fn existing_count(&self) -> usize {
        self.warnings.iter().filter(|w| w.is_already_exists()).count()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} created, {} warning(s) ({} already existed)",
            self.created().len(),
            self.warnings().len(),
            self.existing_count()
        )
    }
}
