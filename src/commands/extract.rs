//! ASAR extraction

use super::App;
use crate::archive::extract::extract_all;
use crate::error::{AsarkitError, Result};

/// Extract every archive of the selected application
pub fn run(app: &mut App) -> Result<()> {
    let app_path = app.session.require_app()?.to_path_buf();
    let output_dir = app
        .session
        .output_dir()
        .ok_or(AsarkitError::NoApplicationSelected)?
        .to_path_buf();

    let extracted = extract_all(
        &app.host,
        app.session.npm_path(),
        &app_path,
        &output_dir,
        &mut app.console,
    )?;

    if let Some(last) = extracted.last() {
        app.session.extracted_files.clone_from(&last.entries);
        app.console.info(format!(
            "Recorded {} extracted file(s)",
            app.session.extracted_files.len()
        ));
    }
    Ok(())
}
