//! Global npm package installation

use super::App;
use crate::error::Result;
use crate::packages::{PACKAGES, install_all};

/// Install every required package, reporting a summary
///
/// Individual package failures do not fail the action.
pub fn run(app: &mut App) -> Result<()> {
    let npm = app.session.require_npm()?.to_path_buf();

    app.console.info("Installing required npm packages...");
    let report = install_all(app.host.runner.as_ref(), &npm, &PACKAGES, &mut app.console);

    let summary = format!(
        "Installation summary: {}/{} packages installed",
        report.installed(),
        report.total()
    );
    if report.all_installed() {
        app.console.success(summary);
    } else {
        app.console.warning(summary);
    }
    Ok(())
}
