//! Restoring the original archive from its backup

use super::App;
use crate::archive::repack::{locate_original, restore_backup};
use crate::error::Result;

pub fn run(app: &mut App) -> Result<()> {
    let app_path = app.session.require_app()?.to_path_buf();
    let original = locate_original(&app_path)?;

    let backup = restore_backup(&original)?;
    app.console.success(format!(
        "Restored {} from {}",
        original.display(),
        backup.display()
    ));
    Ok(())
}
