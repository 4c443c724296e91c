//! Recursive directory copy that preserves entry metadata
//!
//! Entries are mirrored by type: directories are created (or merged into),
//! symlinks are re-created with the same target string, regular files are
//! copied byte-for-byte. Special files (FIFOs, sockets, devices) are reported
//! as errors and left out. Owner, group and permission bits are replicated for
//! everything except symlinks.
//!
//! The walk is best-effort. A failing entry is recorded on the
//! [`CopyReport`] and skipped; its siblings are still copied. Existing
//! regular files and symlinks at the destination are left untouched.

use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::SetupError;

/// Counters and diagnostics for one [`copy_tree`] run
#[derive(Debug, Default)]
pub struct CopyReport {
    /// Regular files and symlinks written
    pub files_copied: u64,
    /// Directories created or merged into
    pub dirs_copied: u64,
    /// Destination entries that already existed and were left alone
    pub skipped: Vec<PathBuf>,
    /// Per-entry failures
    pub errors: Vec<SetupError>,
}

impl CopyReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Human-readable one-line summary
    pub fn summary(&self) -> String {
        format!(
            "{} file(s), {} dir(s) copied, {} skipped, {} error(s)",
            self.files_copied,
            self.dirs_copied,
            self.skipped.len(),
            self.errors.len()
        )
    }

    fn add_error(&mut self, action: &'static str, path: &Path, err: io::Error) {
        self.errors.push(SetupError::io(action, path, err));
    }
}

/// Copy the contents of `src` into `dst`
///
/// `dst` is created when missing. Only an unusable source (missing, not a
/// directory, or containing `dst`) is an error; everything below the root is
/// reported through the returned [`CopyReport`].
pub fn copy_tree(src: &Path, dst: &Path) -> Result<CopyReport, SetupError> {
    let meta_src = fs::metadata(src).map_err(|e| SetupError::io("read", src, e))?;
    if !meta_src.is_dir() {
        return Err(SetupError::io(
            "copy from",
            src,
            io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
        ));
    }

    if is_overlap(src, dst) {
        return Err(SetupError::io(
            "copy into",
            dst,
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "destination lies inside the source tree",
            ),
        ));
    }
    fs::create_dir_all(dst).map_err(|e| SetupError::io("create directory", dst, e))?;

    let mut report = CopyReport::default();

    // Children come before their directory so read-only source directories
    // get their permission bits only after everything inside is written.
    let walker = WalkDir::new(src)
        .min_depth(1)
        .follow_links(false)
        .contents_first(true)
        .sort_by_file_name();

    for item in walker {
        let entry = match item {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(src).to_path_buf();
                let err = e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("filesystem loop"));
                report.add_error("read", &path, err);
                continue;
            }
        };

        let rel = match entry.path().strip_prefix(src) {
            Ok(rel) => rel,
            Err(_) => continue,
        };
        copy_entry(&entry, &dst.join(rel), &mut report);
    }

    Ok(report)
}

fn copy_entry(entry: &DirEntry, dest: &Path, report: &mut CopyReport) {
    let source = entry.path();
    let metadata = match entry.metadata() {
        Ok(m) => m,
        Err(e) => {
            let err = e
                .into_io_error()
                .unwrap_or_else(|| io::Error::other("metadata unavailable"));
            report.add_error("read metadata of", source, err);
            return;
        }
    };

    let file_type = entry.file_type();
    if file_type.is_dir() {
        if let Err(e) = ensure_dir(dest) {
            report.add_error("create directory", dest, e);
            return;
        }
        report.dirs_copied += 1;
        apply_metadata(dest, &metadata, report);
        return;
    }

    // Opening a FIFO blocks until a writer appears; devices and sockets
    // cannot be copied as bytes either.
    if !file_type.is_file() && !file_type.is_symlink() {
        report.add_error(
            "copy",
            source,
            io::Error::new(io::ErrorKind::Unsupported, "unsupported file type"),
        );
        return;
    }

    if fs::symlink_metadata(dest).is_ok() {
        report.skipped.push(dest.to_path_buf());
        return;
    }

    if let Some(parent) = dest.parent() {
        if let Err(e) = ensure_dir(parent) {
            report.add_error("create directory", parent, e);
            return;
        }
    }

    if file_type.is_symlink() {
        match copy_symlink(source, dest) {
            Ok(()) => report.files_copied += 1,
            Err(e) => report.add_error("re-create symlink", dest, e),
        }
        return;
    }

    match fs::copy(source, dest) {
        Ok(_) => {
            report.files_copied += 1;
            apply_metadata(dest, &metadata, report);
        }
        Err(e) => report.add_error("copy", source, e),
    }
}

/// Idempotent directory create; fails if something other than a directory
/// is in the way
fn ensure_dir(path: &Path) -> io::Result<()> {
    match fs::symlink_metadata(path) {
        Ok(m) if m.is_dir() => Ok(()),
        Ok(_) => Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "a non-directory entry is in the way",
        )),
        Err(e) if e.kind() == io::ErrorKind::NotFound => fs::create_dir_all(path),
        Err(e) => Err(e),
    }
}

fn copy_symlink(source: &Path, dest: &Path) -> io::Result<()> {
    let target = fs::read_link(source)?;

    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(&target, dest)
    }
    #[cfg(windows)]
    {
        use std::os::windows::fs::{symlink_dir, symlink_file};
        if source.is_dir() {
            symlink_dir(&target, dest)
        } else {
            symlink_file(&target, dest)
        }
    }
}

/// Replicate owner, group and permission bits from `metadata` onto `dest`
fn apply_metadata(dest: &Path, metadata: &Metadata, report: &mut CopyReport) {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        if let Err(e) = std::os::unix::fs::lchown(dest, Some(metadata.uid()), Some(metadata.gid()))
        {
            report.add_error("change ownership of", dest, e);
        }
    }

    if let Err(e) = fs::set_permissions(dest, metadata.permissions()) {
        report.add_error("set permissions on", dest, e);
    }
}

fn is_overlap(src: &Path, dst: &Path) -> bool {
    match (src.canonicalize(), resolve(dst)) {
        (Ok(src), Some(dst)) => dst.starts_with(&src),
        _ => false,
    }
}

/// Canonical form of a path whose trailing components may not exist yet
fn resolve(path: &Path) -> Option<PathBuf> {
    if let Ok(resolved) = path.canonicalize() {
        return Some(resolved);
    }
    let name = path.file_name()?;
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    Some(resolve(parent)?.join(name))
}
