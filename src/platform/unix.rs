//! macOS and Linux capabilities
//!
//! No elevation mechanism is driven here: only the direct copy is attempted,
//! and the operator re-runs asarkit with sudo when the archive is not writable.

use std::path::Path;

use super::{OpenInFileManager, PrivilegedReplace};
use crate::archive::replace::ReplaceStrategy;
use crate::error::process::command_failed;
use crate::error::{AsarkitError, Result};
use crate::process::{CommandSpec, ProcessRunner};

/// Platforms without a privileged replacement path
#[derive(Debug, Default, Clone, Copy)]
pub struct Unprivileged;

impl PrivilegedReplace for Unprivileged {
    fn strategies(&self) -> Vec<ReplaceStrategy> {
        vec![ReplaceStrategy::DirectCopy]
    }

    fn reassign_ownership(&self, _runner: &dyn ProcessRunner, _path: &Path) -> Result<()> {
        Err(AsarkitError::StrategyUnsupported {
            strategy: ReplaceStrategy::OwnershipReassignThenCopy.to_string(),
        })
    }

    fn elevated_copy(&self, _runner: &dyn ProcessRunner, _from: &Path, _to: &Path) -> Result<()> {
        Err(AsarkitError::StrategyUnsupported {
            strategy: ReplaceStrategy::ElevatedShellCopy.to_string(),
        })
    }
}

fn open_with(runner: &dyn ProcessRunner, program: &str, path: &Path) -> Result<()> {
    // The file manager outlives the call; only a failed start is reported
    let spec = CommandSpec::new(program).arg(path).detached();
    let output = runner.run(&spec)?;
    if output.success {
        Ok(())
    } else {
        Err(command_failed(spec.display(), output.diagnostic()))
    }
}

/// macOS Finder via `open`
#[derive(Debug, Default, Clone, Copy)]
pub struct MacOpen;

impl OpenInFileManager for MacOpen {
    fn open(&self, runner: &dyn ProcessRunner, path: &Path) -> Result<()> {
        open_with(runner, "open", path)
    }
}

/// Desktop default via `xdg-open`
#[derive(Debug, Default, Clone, Copy)]
pub struct XdgOpen;

impl OpenInFileManager for XdgOpen {
    fn open(&self, runner: &dyn ProcessRunner, path: &Path) -> Result<()> {
        open_with(runner, "xdg-open", path)
    }
}
