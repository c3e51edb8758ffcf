//! `asarkit version`: build and toolchain details

use crate::archive::{ARCHIVE_PATTERN, BACKUP_SUFFIX, RESOURCES_DIR};
use crate::error::Result;
use crate::packages::PACKAGES;

/// Lines printed by `asarkit version`
fn report() -> Vec<String> {
    let packages = PACKAGES
        .iter()
        .map(|p| p.name)
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        format!("asarkit {}", env!("CARGO_PKG_VERSION")),
        String::new(),
        "Build info:".to_string(),
        format!("  Minimum rustc: {}", env!("CARGO_PKG_RUST_VERSION")),
        format!(
            "  Profile: {}",
            if cfg!(debug_assertions) {
                "debug"
            } else {
                "release"
            }
        ),
        format!(
            "  Platform: {}-{}",
            std::env::consts::OS,
            std::env::consts::ARCH
        ),
        String::new(),
        "Archives:".to_string(),
        format!("  Looks for: {RESOURCES_DIR}/{ARCHIVE_PATTERN}"),
        format!("  Backups: <name>.asar{BACKUP_SUFFIX}"),
        format!("  npm packages: {packages}"),
    ]
}

pub fn run() -> Result<()> {
    for line in report() {
        println!("{line}");
    }
    Ok(())
}
