//! ASAR archive handling
//!
//! Archives are treated as opaque files. Extraction and packing are delegated
//! to the `asar` tool run through `npm exec`; this module only knows where the
//! archives live and how the output and backup paths are named.
//!
//! Layout:
//! - archives: `<app_dir>/resources/*.asar`
//! - extracted: `<output_dir>/<archive_stem>/...`
//! - backup: `<app_dir>/resources/<archive_stem>.asar.backup`

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::discovery::glob_files;
use crate::error::{AsarkitError, Result};
use crate::process::CommandSpec;

pub mod extract;
pub mod repack;
pub mod replace;

/// Directory beside the executable holding the archives
pub const RESOURCES_DIR: &str = "resources";

/// Archive file pattern inside the resources directory
pub const ARCHIVE_PATTERN: &str = "*.asar";

/// Suffix appended to an archive's file name for its backup
pub const BACKUP_SUFFIX: &str = ".backup";

/// Archives found beside an application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveLocation {
    pub resources_dir: PathBuf,
    /// Sorted by path
    pub archives: Vec<PathBuf>,
}

/// `<dir of app>/resources`
pub fn resources_dir(app_path: &Path) -> PathBuf {
    app_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(RESOURCES_DIR)
}

/// Find the `*.asar` files beside `app_path`
pub fn find_archives(app_path: &Path) -> Result<ArchiveLocation> {
    let resources_dir = resources_dir(app_path);
    if !resources_dir.is_dir() {
        return Err(AsarkitError::ResourcesNotFound {
            path: resources_dir.display().to_string(),
        });
    }

    let archives = glob_files(&resources_dir, ARCHIVE_PATTERN, Some(1));
    if archives.is_empty() {
        return Err(AsarkitError::NoArchivesFound {
            path: resources_dir.display().to_string(),
        });
    }

    Ok(ArchiveLocation {
        resources_dir,
        archives,
    })
}

/// File stem of an archive (`app` for `app.asar`)
pub fn archive_stem(archive: &Path) -> String {
    archive
        .file_stem()
        .map_or_else(|| "app".to_string(), |s| s.to_string_lossy().into_owned())
}

/// `<archive>.backup`, next to the archive
pub fn backup_path(archive: &Path) -> PathBuf {
    let mut name: OsString = archive.file_name().map(ToOwned::to_owned).unwrap_or_default();
    name.push(BACKUP_SUFFIX);
    archive.with_file_name(name)
}

/// `npm exec -- asar <verb> <from> <to>`
pub fn asar_command(npm: &Path, verb: &str, from: &Path, to: &Path) -> CommandSpec {
    CommandSpec::new(npm)
        .args(["exec", "--", "asar", verb])
        .arg(from)
        .arg(to)
}
