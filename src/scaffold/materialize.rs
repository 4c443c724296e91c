//! Writing template payloads and directories into the target location

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::SetupError;

/// Permission bits for generated files
pub const FILE_MODE: u32 = 0o644;

/// Permission bits for generated directories
pub const DIR_MODE: u32 = 0o755;

/// Create `path` with `content`, refusing to touch an existing file
///
/// The existence check and the create are a single `create_new` open, so a
/// file that appears between runs is never clobbered. Content is written in
/// one call and no cleanup is attempted if that write fails.
pub fn create_file(path: &Path, content: &[u8], mode: u32) -> Result<(), SetupError> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    let mut file = options
        .open(path)
        .map_err(|e| SetupError::io("create file", path, e))?;
    file.write_all(content)
        .map_err(|e| SetupError::io("write", path, e))?;
    Ok(())
}

/// Create a single directory; the parent must exist
pub fn create_dir(path: &Path) -> Result<(), SetupError> {
    let mut builder = fs::DirBuilder::new();

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }

    builder
        .create(path)
        .map_err(|e| SetupError::io("create directory", path, e))
}

/// Create a directory and any missing parents
///
/// Reports `AlreadyExists` when the leaf directory was already present so
/// that repeated runs surface the same "already exists" outcome as
/// [`create_dir`].
pub fn create_dir_all(path: &Path) -> Result<(), SetupError> {
    if path.exists() {
        return Err(SetupError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }

    builder
        .create(path)
        .map_err(|e| SetupError::io("create directory", path, e))
}
