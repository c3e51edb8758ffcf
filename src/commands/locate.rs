//! npm discovery for the session

use std::path::{Path, PathBuf};

use super::App;
use crate::locator;
use crate::ui::Console;

/// Use `override_path` when it exists, else search the usual locations
///
/// Never fails; a missing npm is only a warning.
pub fn resolve_npm(
    override_path: Option<&Path>,
    search: impl FnOnce() -> Option<PathBuf>,
    console: &mut Console,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        if path.is_file() {
            console.success(format!("Using npm at: {}", path.display()));
            return Some(path.to_path_buf());
        }
        console.warning(format!(
            "npm override not found: {}, searching instead",
            path.display()
        ));
    }

    console.info("Searching for npm installation...");
    match search() {
        Some(path) => {
            console.success(format!("Found npm at: {}", path.display()));
            Some(path)
        }
        None => {
            console.warning("npm not found. Please install Node.js from https://nodejs.org/");
            None
        }
    }
}

/// Locate npm and store the result in the session
pub fn run(app: &mut App) {
    let found = resolve_npm(
        app.npm_override.as_deref(),
        locator::locate_npm,
        &mut app.console,
    );
    app.session.set_npm_path(found);
}
