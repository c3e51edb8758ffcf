//! Recompile & apply changes

use super::App;
use crate::archive::repack::{Repacker, locate_original};
use crate::error::Result;

/// Pack the edited output and replace the original archive
///
/// The original archive is located before npm is required, so an application
/// without archives fails without touching anything.
pub fn run(app: &mut App) -> Result<()> {
    let app_path = app.session.require_app()?.to_path_buf();
    let output_dir = app.session.require_output_dir()?.to_path_buf();

    app.console.info("Starting recompilation...");
    let original = locate_original(&app_path)?;
    let npm = app.session.require_npm()?.to_path_buf();

    let report = Repacker::new(&app.host, &npm, original, &output_dir).run(&mut app.console)?;

    app.console.success(format!(
        "Successfully replaced original ASAR ({})",
        report.strategy
    ));
    app.console.info(format!(
        "Backup saved as: {}",
        report.backup.display()
    ));
    Ok(())
}
