//! Unpacking archives into the output directory

use std::path::{Path, PathBuf};

use super::{archive_stem, asar_command, find_archives};
use crate::discovery::list_tree;
use crate::error::fs::io_error;
use crate::error::{AsarkitError, Result};
use crate::platform::Host;
use crate::ui::{self, Console};

/// One successfully unpacked archive
#[derive(Debug, Clone)]
pub struct ExtractedArchive {
    pub archive: PathBuf,
    pub destination: PathBuf,
    /// Recursive listing of `destination` after extraction
    pub entries: Vec<PathBuf>,
}

/// Unpack every archive beside `app_path` into `output_dir/<archive_stem>`
///
/// Archive discovery runs before anything is written, so an application
/// without archives leaves the output directory untouched. A failing archive
/// is reported and the next one is still attempted; the call fails if any
/// archive failed.
pub fn extract_all(
    host: &Host,
    npm: Option<&Path>,
    app_path: &Path,
    output_dir: &Path,
    console: &mut Console,
) -> Result<Vec<ExtractedArchive>> {
    console.info("Searching for ASAR files...");
    let location = find_archives(app_path)?;
    let npm = npm.ok_or(AsarkitError::NpmNotFound)?;

    console.info(format!("Found {} ASAR file(s)", location.archives.len()));

    let mut extracted = Vec::new();
    let mut failed = 0;

    for archive in &location.archives {
        let name = archive
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let destination = output_dir.join(archive_stem(archive));

        std::fs::create_dir_all(&destination)
            .map_err(|e| io_error("Failed to create", &destination, e))?;

        console.info(format!("Extracting {name}..."));
        let spinner = ui::spinner(format!("asar extract {name}"));
        let result = host
            .runner
            .run(&asar_command(npm, "extract", archive, &destination));
        spinner.finish_and_clear();

        let diagnostic = match result {
            Ok(output) if output.success => None,
            Ok(output) => Some(output.diagnostic()),
            Err(e) => Some(e.to_string()),
        };

        if let Some(diagnostic) = diagnostic {
            failed += 1;
            console.error(
                AsarkitError::ExtractionFailed {
                    archive: name,
                    diagnostic,
                }
                .to_string(),
            );
            continue;
        }

        console.success(format!("Extracted to: {}", destination.display()));
        let entries = list_tree(&destination);

        if let Err(e) = host.open(&destination) {
            console.warning(format!("Could not open {}: {e}", destination.display()));
        }

        extracted.push(ExtractedArchive {
            archive: archive.clone(),
            destination,
            entries,
        });
    }

    if failed > 0 {
        return Err(AsarkitError::ExtractionIncomplete {
            failed,
            total: location.archives.len(),
        });
    }

    Ok(extracted)
}
