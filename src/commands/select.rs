//! Application selection

use std::path::PathBuf;

use super::App;
use crate::error::{AsarkitError, Result};
use crate::ui::prompt;

/// Select the application at `path`, or ask for one
///
/// Cancelling the prompt leaves the session unchanged.
pub fn run(app: &mut App, path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => match prompt::application_path(cfg!(windows))? {
            Some(path) => path,
            None => {
                app.console.info("No application selected");
                return Ok(());
            }
        },
    };

    if !path.is_file() {
        return Err(AsarkitError::ApplicationNotFound {
            path: path.display().to_string(),
        });
    }
    let path = dunce::canonicalize(&path).unwrap_or(path);

    app.session.select_app(&path);
    app.console
        .success(format!("Selected application: {}", path.display()));
    if let Some(output_dir) = app.session.output_dir() {
        app.console
            .info(format!("Output directory: {}", output_dir.display()));
    }
    Ok(())
}
