//! Windows capabilities
//!
//! Elevated replacement takes ownership with `takeown`/`icacls`, or re-runs
//! the copy through an elevated `cmd` started by PowerShell.

use std::path::Path;

use super::{OpenInFileManager, PrivilegedReplace};
use crate::archive::replace::ReplaceStrategy;
use crate::error::Result;
use crate::error::process::command_failed;
use crate::process::{CommandSpec, ProcessRunner};

/// Privileged replacement on Windows
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsPrivileges;

impl WindowsPrivileges {
    fn run_checked(runner: &dyn ProcessRunner, spec: &CommandSpec) -> Result<()> {
        let output = runner.run(spec)?;
        if output.success {
            Ok(())
        } else {
            Err(command_failed(spec.display(), output.diagnostic()))
        }
    }
}

/// PowerShell script that copies `from` over `to` from an elevated `cmd`
pub fn elevated_copy_script(from: &Path, to: &Path) -> String {
    // Paths end up inside a single-quoted PowerShell string
    let quote = |p: &Path| p.display().to_string().replace('\'', "''");
    format!(
        "Start-Process cmd -Verb RunAs -Wait -ArgumentList '/c copy /Y \"{}\" \"{}\"'",
        quote(from),
        quote(to)
    )
}

impl PrivilegedReplace for WindowsPrivileges {
    fn strategies(&self) -> Vec<ReplaceStrategy> {
        ReplaceStrategy::ALL.to_vec()
    }

    fn reassign_ownership(&self, runner: &dyn ProcessRunner, path: &Path) -> Result<()> {
        Self::run_checked(runner, &CommandSpec::new("takeown").arg("/F").arg(path))?;
        Self::run_checked(
            runner,
            &CommandSpec::new("icacls")
                .arg(path)
                .args(["/grant", "administrators:F"]),
        )
    }

    fn elevated_copy(&self, runner: &dyn ProcessRunner, from: &Path, to: &Path) -> Result<()> {
        Self::run_checked(
            runner,
            &CommandSpec::new("powershell").args([
                "-NoProfile".to_string(),
                "-Command".to_string(),
                elevated_copy_script(from, to),
            ]),
        )
    }
}

/// Windows Explorer
#[derive(Debug, Default, Clone, Copy)]
pub struct Explorer;

impl OpenInFileManager for Explorer {
    fn open(&self, runner: &dyn ProcessRunner, path: &Path) -> Result<()> {
        // explorer.exe reports exit status 1 even when the window opens
        runner.run(&CommandSpec::new("explorer").arg(path).detached())?;
        Ok(())
    }
}
