//! Environment check: node, npm and the globally installed packages

use std::path::Path;
use std::time::Duration;

use super::App;
use crate::error::{AsarkitError, Result};
use crate::packages::{PACKAGES, Package};
use crate::process::{CommandSpec, ProcessRunner};
use crate::ui::Console;

/// Time allowed for a `--version` probe
pub const VERSION_TIMEOUT: Duration = Duration::from_secs(5);

/// Time allowed for listing one global package
pub const LIST_TIMEOUT: Duration = Duration::from_secs(30);

/// Trimmed stdout of `<program> --version`, if it ran successfully
pub fn probe_version(runner: &dyn ProcessRunner, program: &Path) -> Option<String> {
    let spec = CommandSpec::new(program)
        .arg("--version")
        .timeout(VERSION_TIMEOUT);
    match runner.run(&spec) {
        Ok(output) if output.success => Some(output.stdout.trim().to_string()),
        _ => None,
    }
}

/// Whether `npm ls -g` knows `package`
pub fn package_installed(runner: &dyn ProcessRunner, npm: &Path, package: &Package) -> bool {
    let spec = CommandSpec::new(npm)
        .args(["ls", "-g", "--depth=0", package.name])
        .timeout(LIST_TIMEOUT);
    runner.run(&spec).is_ok_and(|output| output.success)
}

fn report_packages(runner: &dyn ProcessRunner, npm: &Path, console: &mut Console) -> usize {
    let mut missing = 0;
    for package in &PACKAGES {
        if package_installed(runner, npm, package) {
            console.success(format!("{} is installed", package.name));
        } else {
            missing += 1;
            console.warning(format!(
                "{} is not installed ({})",
                package.name, package.description
            ));
        }
    }
    missing
}

/// Report node, npm and package availability
///
/// Fails only when npm itself is unusable; missing packages are warnings.
pub fn run(app: &mut App) -> Result<()> {
    let runner = app.host.runner.as_ref();
    let console = &mut app.console;

    console.info("Checking Node.js environment...");
    match probe_version(runner, Path::new("node")) {
        Some(version) => console.success(format!("Node.js found: {version}")),
        None => console.warning("Node.js not found. Install it from https://nodejs.org/"),
    }

    let npm = app.session.require_npm()?;
    let Some(version) = probe_version(runner, npm) else {
        return Err(AsarkitError::CommandFailed {
            command: format!("{} --version", npm.display()),
            diagnostic: "npm did not respond".to_string(),
        });
    };
    console.success(format!("npm found: {version} ({})", npm.display()));

    let missing = report_packages(runner, npm, console);
    if missing > 0 {
        console.warning("Run 'Install required tools' (asarkit install) to install missing packages");
    }
    Ok(())
}
