//! Embedded project templates
//!
//! Template payloads are compiled into the binary and written out
//! byte-for-byte. The planner only sees them through [`TemplateSource`], so
//! tests can swap in an in-memory bundle.

use std::collections::HashMap;

// Embed source and build files
const MAIN_GO: &[u8] = include_bytes!("../../templates/main.go");
const GITIGNORE: &[u8] = include_bytes!("../../templates/gitignore");
const MAKEFILE: &[u8] = include_bytes!("../../templates/Makefile");
const README: &[u8] = include_bytes!("../../templates/README.md");
const CHANGELOG: &[u8] = include_bytes!("../../templates/CHANGELOG.md");

// Embed license texts
const LICENSE_MIT: &[u8] = include_bytes!("../../templates/licenses/mit");
const LICENSE_APACHE: &[u8] = include_bytes!("../../templates/licenses/apache");

// Embed deployment files
const DOCKERFILE: &[u8] = include_bytes!("../../templates/Dockerfile");
const JENKINSFILE: &[u8] = include_bytes!("../../templates/Jenkinsfile");

/// Template names as used by the planner
pub mod names {
    pub const MAIN_GO: &str = "main.go";
    pub const GITIGNORE: &str = "gitignore";
    pub const MAKEFILE: &str = "Makefile";
    pub const README: &str = "README.md";
    pub const CHANGELOG: &str = "CHANGELOG.md";
    pub const LICENSE_MIT: &str = "licenses/mit";
    pub const LICENSE_APACHE: &str = "licenses/apache";
    pub const DOCKERFILE: &str = "Dockerfile";
    pub const JENKINSFILE: &str = "Jenkinsfile";
}

/// Read-only mapping from template name to content
pub trait TemplateSource {
    /// Look up a template by name
    fn get(&self, name: &str) -> Option<&[u8]>;
}

/// The bundle compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl TemplateSource for EmbeddedTemplates {
    fn get(&self, name: &str) -> Option<&[u8]> {
        let content = match name {
            names::MAIN_GO => MAIN_GO,
            names::GITIGNORE => GITIGNORE,
            names::MAKEFILE => MAKEFILE,
            names::README => README,
            names::CHANGELOG => CHANGELOG,
            names::LICENSE_MIT => LICENSE_MIT,
            names::LICENSE_APACHE => LICENSE_APACHE,
            names::DOCKERFILE => DOCKERFILE,
            names::JENKINSFILE => JENKINSFILE,
            _ => return None,
        };
        Some(content)
    }
}

impl TemplateSource for HashMap<String, Vec<u8>> {
    fn get(&self, name: &str) -> Option<&[u8]> {
        HashMap::get(self, name).map(Vec::as_slice)
    }
}
