//! Opening the extracted output for editing

use super::App;
use crate::error::Result;

pub fn run(app: &mut App) -> Result<()> {
    let output_dir = app.session.require_output_dir()?.to_path_buf();

    match app.host.open(&output_dir) {
        Ok(()) => app
            .console
            .success(format!("Opened directory: {}", output_dir.display())),
        Err(e) => app.console.warning(format!(
            "Could not open {}: {e}",
            output_dir.display()
        )),
    }
    app.console
        .info("Edit your files and then run 'Recompile & apply changes' (asarkit repack)");
    Ok(())
}
