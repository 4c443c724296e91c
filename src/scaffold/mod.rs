//! Project layout scaffolding
//!
//! ```text
//! ScaffoldRequest → plan (bare / ops / remainder) → Scaffolder → Report
//! ```

pub mod materialize;
pub mod plan;
pub mod report;
pub mod request;
pub mod templates;

use std::path::Path;

use crate::utils::terminal::print_info;

pub use plan::Scaffolder;
pub use report::Report;
pub use request::{LicenseChoice, ScaffoldRequest, StructureSet};
pub use templates::{EmbeddedTemplates, TemplateSource};

impl StructureSet {
    fn label(self) -> &'static str {
        match self {
            StructureSet::Bare => "bare-minimum",
            StructureSet::Ops => "operations",
            StructureSet::Remainder => "remaining full-scale",
        }
    }
}

/// Apply every structure set selected by the request under `root`
pub fn apply_structure<T: TemplateSource + ?Sized>(
    request: &ScaffoldRequest,
    root: &Path,
    templates: &T,
    report: &mut Report,
) {
    let scaffolder = Scaffolder::new(root, templates);
    for set in request.structure_sets() {
        print_info(&format!("Setting up {} project structure...", set.label()));
        scaffolder.apply(plan::plan(set, request), report);
        print_info(&format!("Finished {} project structure setup", set.label()));
    }
}
