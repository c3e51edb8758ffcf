//! Repacking an edited extraction and swapping it in
//!
//! A repack walks a small state machine:
//!
//! ```text
//! idle -> backed_up -> packed -> replaced
//!                   \-> pack_failed
//!                              \-> replace_failed
//! ```
//!
//! Every step is a hard precondition for the next. Nothing is rolled back: a
//! failed replacement leaves the backup as the recovery path.

use std::fmt;
use std::path::{Path, PathBuf};

use super::replace::{ReplaceStrategy, replace_archive};
use super::{archive_stem, asar_command, backup_path, find_archives};
use crate::error::fs::{backup_failed, io_error};
use crate::error::{AsarkitError, Result};
use crate::platform::Host;
use crate::ui::{self, Console};

/// Where a repack stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepackState {
    Idle,
    BackedUp,
    Packed,
    Replaced,
    PackFailed,
    ReplaceFailed,
}

impl fmt::Display for RepackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RepackState::Idle => "idle",
            RepackState::BackedUp => "backed_up",
            RepackState::Packed => "packed",
            RepackState::Replaced => "replaced",
            RepackState::PackFailed => "pack_failed",
            RepackState::ReplaceFailed => "replace_failed",
        };
        f.write_str(name)
    }
}

/// Outcome of a completed repack
#[derive(Debug, Clone)]
pub struct RepackReport {
    pub original: PathBuf,
    pub backup: PathBuf,
    /// False when an existing backup was kept
    pub backup_created: bool,
    pub new_archive: PathBuf,
    pub strategy: ReplaceStrategy,
}

/// First `resources/*.asar` beside the application
pub fn locate_original(app_path: &Path) -> Result<PathBuf> {
    let not_found = || AsarkitError::OriginalArchiveNotFound {
        path: super::resources_dir(app_path).display().to_string(),
    };

    match find_archives(app_path) {
        Ok(location) => location.archives.into_iter().next().ok_or_else(not_found),
        Err(AsarkitError::ResourcesNotFound { .. } | AsarkitError::NoArchivesFound { .. }) => {
            Err(not_found())
        }
        Err(e) => Err(e),
    }
}

/// Copy `original` to its backup path unless a backup already exists
///
/// Returns the backup path and whether it was created now.
pub fn ensure_backup(original: &Path) -> Result<(PathBuf, bool)> {
    let backup = backup_path(original);
    if backup.exists() {
        return Ok((backup, false));
    }
    std::fs::copy(original, &backup).map_err(|e| backup_failed(&backup, e))?;
    Ok((backup, true))
}

/// Copy the backup back over `original`
pub fn restore_backup(original: &Path) -> Result<PathBuf> {
    let backup = backup_path(original);
    if !backup.is_file() {
        return Err(AsarkitError::BackupNotFound {
            path: backup.display().to_string(),
        });
    }
    std::fs::copy(&backup, original).map_err(|e| io_error("Failed to restore", original, e))?;
    Ok(backup)
}

/// One repack of `original` from `output_dir/<stem>`
pub struct Repacker<'a> {
    host: &'a Host,
    npm: &'a Path,
    original: PathBuf,
    output_dir: PathBuf,
    state: RepackState,
}

impl<'a> Repacker<'a> {
    pub fn new(host: &'a Host, npm: &'a Path, original: PathBuf, output_dir: &Path) -> Self {
        Self {
            host,
            npm,
            original,
            output_dir: output_dir.to_path_buf(),
            state: RepackState::Idle,
        }
    }

    pub fn state(&self) -> RepackState {
        self.state
    }

    /// Directory that gets packed
    pub fn source_dir(&self) -> PathBuf {
        self.output_dir.join(archive_stem(&self.original))
    }

    /// Freshly packed archive, inside the output directory
    pub fn new_archive_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}.asar", archive_stem(&self.original)))
    }

    /// Run every step; on failure the state tells where it stopped
    pub fn run(&mut self, console: &mut Console) -> Result<RepackReport> {
        let (backup, backup_created) = self.backup(console)?;
        let new_archive = self.pack(console)?;
        let strategy = self.replace(&new_archive, console)?;

        Ok(RepackReport {
            original: self.original.clone(),
            backup,
            backup_created,
            new_archive,
            strategy,
        })
    }

    fn backup(&mut self, console: &mut Console) -> Result<(PathBuf, bool)> {
        let (backup, created) = ensure_backup(&self.original)?;
        let name = backup
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if created {
            console.success(format!("Created backup: {name}"));
        } else {
            console.info(format!("Keeping existing backup: {name}"));
        }
        self.state = RepackState::BackedUp;
        Ok((backup, created))
    }

    fn pack(&mut self, console: &mut Console) -> Result<PathBuf> {
        let source = self.source_dir();
        let new_archive = self.new_archive_path();

        if !source.is_dir() {
            self.state = RepackState::PackFailed;
            return Err(AsarkitError::PackingFailed {
                diagnostic: format!("source directory not found: {}", source.display()),
            });
        }

        let name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        console.info(format!("Packing {name}..."));

        let spinner = ui::spinner(format!("asar pack {name}"));
        let result = self
            .host
            .runner
            .run(&asar_command(self.npm, "pack", &source, &new_archive));
        spinner.finish_and_clear();

        let diagnostic = match result {
            Ok(output) if !output.success => Some(output.diagnostic()),
            Ok(_) if !new_archive.is_file() => Some(format!(
                "no archive was produced at {}",
                new_archive.display()
            )),
            Ok(_) => None,
            Err(e) => Some(e.to_string()),
        };
        if let Some(diagnostic) = diagnostic {
            self.state = RepackState::PackFailed;
            return Err(AsarkitError::PackingFailed { diagnostic });
        }

        console.success(format!("Created new archive: {}", new_archive.display()));
        self.state = RepackState::Packed;
        Ok(new_archive)
    }

    fn replace(&mut self, new_archive: &Path, console: &mut Console) -> Result<ReplaceStrategy> {
        let strategies = self.host.replace.strategies();
        match replace_archive(self.host, &strategies, new_archive, &self.original, console) {
            Ok(strategy) => {
                self.state = RepackState::Replaced;
                Ok(strategy)
            }
            Err(e) => {
                self.state = RepackState::ReplaceFailed;
                Err(e)
            }
        }
    }
}
