//! Validation of user-supplied names with helpful error messages

use std::path::{Component, Path};

use crate::error::SetupError;

/// Profile names must be a single normal path component
///
/// Rejects empty names, `.`/`..`, separators and absolute paths so a
/// profile always resolves to a direct child of the profiles directory.
pub fn validate_profile_name(name: &str) -> Result<(), SetupError> {
    let mut components = Path::new(name).components();
    let valid = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );

    if !valid || name.contains(['/', '\\']) {
        return Err(SetupError::profile_error_with_hint(
            name,
            "profile names must be a single directory name",
            "Use names like 'web' or 'cli-base'",
        ));
    }

    Ok(())
}

/// Module paths end up verbatim in `go.mod` and cannot contain whitespace
pub fn validate_module_path(module_path: &str) -> Result<(), SetupError> {
    if module_path.trim().is_empty() || module_path.chars().any(char::is_whitespace) {
        return Err(SetupError::config_error_with_hint(
            format!("Invalid module path: '{}'", module_path),
            "Use an import path like github.com/jane/app",
        ));
    }
    Ok(())
}
