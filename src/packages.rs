//! Global installation of the Node.js packages asarkit drives

use std::path::Path;
use std::time::Duration;

use crate::error::AsarkitError;
use crate::process::{CommandSpec, ProcessRunner};
use crate::ui::Console;

/// Time allowed for one `npm install -g`
pub const INSTALL_TIMEOUT: Duration = Duration::from_secs(120);

/// A package to install globally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Package {
    pub name: &'static str,
    pub description: &'static str,
}

/// The packages installed by `asarkit install`, in install order
pub const PACKAGES: [Package; 3] = [
    Package {
        name: "asar",
        description: "ASAR archive packing/unpacking",
    },
    Package {
        name: "electron-devtools-installer",
        description: "Development tools installer",
    },
    Package {
        name: "source-map-explorer",
        description: "Source map analysis",
    },
];

/// How one install attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed,
    Failed { diagnostic: String },
    TimedOut,
    Error { message: String },
}

impl InstallOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, InstallOutcome::Installed)
    }
}

/// Per-package results of one install run
#[derive(Debug, Clone, Default)]
pub struct InstallReport {
    pub outcomes: Vec<(Package, InstallOutcome)>,
}

impl InstallReport {
    pub fn installed(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_success()).count()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn all_installed(&self) -> bool {
        self.installed() == self.total()
    }
}

/// The `npm install -g <package>` command line
pub fn install_command(npm: &Path, package: &Package) -> CommandSpec {
    CommandSpec::new(npm)
        .args(["install", "-g", package.name])
        .timeout(INSTALL_TIMEOUT)
}

/// Install one package and classify the attempt
pub fn install_package(runner: &dyn ProcessRunner, npm: &Path, package: &Package) -> InstallOutcome {
    match runner.run(&install_command(npm, package)) {
        Ok(output) if output.success => InstallOutcome::Installed,
        Ok(output) => InstallOutcome::Failed {
            diagnostic: output.diagnostic(),
        },
        Err(AsarkitError::ProcessTimedOut { .. }) => InstallOutcome::TimedOut,
        Err(e) => InstallOutcome::Error {
            message: e.to_string(),
        },
    }
}

/// Install every package in `packages`, continuing past failures
///
/// Nothing is rolled back; partial success is reported in the returned
/// [`InstallReport`] and on the console.
pub fn install_all(
    runner: &dyn ProcessRunner,
    npm: &Path,
    packages: &[Package],
    console: &mut Console,
) -> InstallReport {
    let mut report = InstallReport::default();

    for package in packages {
        console.info(format!(
            "Installing {} ({})...",
            package.name, package.description
        ));

        let spinner = crate::ui::spinner(format!("npm install -g {}", package.name));
        let outcome = install_package(runner, npm, package);
        spinner.finish_and_clear();

        match &outcome {
            InstallOutcome::Installed => {
                console.success(format!("{} installed successfully", package.name));
            }
            InstallOutcome::Failed { diagnostic } => {
                console.error(format!("Failed to install {}: {diagnostic}", package.name));
            }
            InstallOutcome::TimedOut => {
                console.error(format!(
                    "Installation of {} timed out after {}s",
                    package.name,
                    INSTALL_TIMEOUT.as_secs()
                ));
            }
            InstallOutcome::Error { message } => {
                console.error(format!("Error installing {}: {message}", package.name));
            }
        }

        report.outcomes.push((*package, outcome));
    }

    report
}
