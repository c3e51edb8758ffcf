//! Host platform capabilities
//!
//! Everything that differs between operating systems sits behind two small
//! traits, with one implementation per OS family:
//! - [`PrivilegedReplace`]: which replacement strategies exist and how the
//!   privileged ones are carried out
//! - [`OpenInFileManager`]: showing a directory to the operator
//!
//! [`Host::detect`] picks the implementations once at startup; the archive
//! orchestration only talks to the traits.

use std::path::Path;

use crate::archive::replace::ReplaceStrategy;
use crate::error::Result;
use crate::process::{ProcessRunner, SystemRunner};

pub mod unix;
pub mod windows;

/// Privileged replacement of a locked file
pub trait PrivilegedReplace {
    /// Replacement strategies in the order they are attempted
    fn strategies(&self) -> Vec<ReplaceStrategy>;

    /// Take ownership of `path` and grant full control to administrators
    fn reassign_ownership(&self, runner: &dyn ProcessRunner, path: &Path) -> Result<()>;

    /// Copy `from` over `to` through the platform's elevation mechanism
    fn elevated_copy(&self, runner: &dyn ProcessRunner, from: &Path, to: &Path) -> Result<()>;
}

/// Opening a directory in the platform file manager
pub trait OpenInFileManager {
    fn open(&self, runner: &dyn ProcessRunner, path: &Path) -> Result<()>;
}

/// File manager stand-in that never launches anything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpen;

impl OpenInFileManager for NoOpen {
    fn open(&self, _runner: &dyn ProcessRunner, _path: &Path) -> Result<()> {
        Ok(())
    }
}

/// OS capabilities and the process runner used by every action
pub struct Host {
    pub runner: Box<dyn ProcessRunner>,
    pub replace: Box<dyn PrivilegedReplace>,
    pub opener: Box<dyn OpenInFileManager>,
}

impl Host {
    /// Capabilities of the running system
    ///
    /// With `open_enabled` false the file manager is never launched.
    pub fn detect(open_enabled: bool) -> Self {
        let opener: Box<dyn OpenInFileManager> = if !open_enabled {
            Box::new(NoOpen)
        } else if cfg!(windows) {
            Box::new(windows::Explorer)
        } else if cfg!(target_os = "macos") {
            Box::new(unix::MacOpen)
        } else {
            Box::new(unix::XdgOpen)
        };

        let replace: Box<dyn PrivilegedReplace> = if cfg!(windows) {
            Box::new(windows::WindowsPrivileges)
        } else {
            Box::new(unix::Unprivileged)
        };

        Self {
            runner: Box::new(SystemRunner),
            replace,
            opener,
        }
    }

    /// Show `path` in the file manager; returns the error for the caller to log
    pub fn open(&self, path: &Path) -> Result<()> {
        self.opener.open(self.runner.as_ref(), path)
    }
}

#[cfg(test)]
pub mod testing {
    //! Configurable host for unit tests

    use std::cell::RefCell;
    use std::path::{Path, PathBuf};
    use std::rc::Rc;

    use super::{Host, OpenInFileManager, PrivilegedReplace};
    use crate::archive::replace::ReplaceStrategy;
    use crate::error::{AsarkitError, Result};
    use crate::process::ProcessRunner;
    use crate::process::testing::FakeRunner;

    /// Privileged replacement with scripted behaviour
    ///
    /// Clones share the attempt log, so a test can keep one after boxing another.
    #[derive(Clone)]
    pub struct FakePrivileges {
        pub strategies: Vec<ReplaceStrategy>,
        pub ownership_ok: bool,
        /// Whether `elevated_copy` actually copies
        pub elevated_copies: bool,
        pub attempts: Rc<RefCell<Vec<&'static str>>>,
    }

    impl FakePrivileges {
        pub fn direct_only() -> Self {
            Self {
                strategies: vec![ReplaceStrategy::DirectCopy],
                ownership_ok: false,
                elevated_copies: false,
                attempts: Rc::default(),
            }
        }

        pub fn all(ownership_ok: bool, elevated_copies: bool) -> Self {
            Self {
                strategies: ReplaceStrategy::ALL.to_vec(),
                ownership_ok,
                elevated_copies,
                attempts: Rc::default(),
            }
        }
    }

    impl PrivilegedReplace for FakePrivileges {
        fn strategies(&self) -> Vec<ReplaceStrategy> {
            self.strategies.clone()
        }

        /// A directory at `path` stands in for a locked archive; taking
        /// ownership clears it so the following copy lands
        fn reassign_ownership(&self, _runner: &dyn ProcessRunner, path: &Path) -> Result<()> {
            self.attempts.borrow_mut().push("ownership");
            if self.ownership_ok {
                if path.is_dir() {
                    std::fs::remove_dir(path)?;
                }
                Ok(())
            } else {
                Err(AsarkitError::CommandFailed {
                    command: "takeown".to_string(),
                    diagnostic: "Access is denied.".to_string(),
                })
            }
        }

        fn elevated_copy(&self, _runner: &dyn ProcessRunner, from: &Path, to: &Path) -> Result<()> {
            self.attempts.borrow_mut().push("elevated");
            if self.elevated_copies {
                std::fs::copy(from, to)?;
            }
            Ok(())
        }
    }

    /// Opener that records the directories it was asked to show
    #[derive(Default, Clone)]
    pub struct RecordingOpener {
        pub opened: Rc<RefCell<Vec<PathBuf>>>,
    }

    impl OpenInFileManager for RecordingOpener {
        fn open(&self, _runner: &dyn ProcessRunner, path: &Path) -> Result<()> {
            self.opened.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    /// Host with a scripted runner, direct-copy only and a recording opener
    pub fn host(runner: FakeRunner) -> Host {
        Host {
            runner: Box::new(runner),
            replace: Box::new(FakePrivileges::direct_only()),
            opener: Box::new(RecordingOpener::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::testing::FakeRunner;

    #[test]
    fn test_detect_without_open_uses_noop() {
        let host = Host::detect(false);
        assert!(host.open(Path::new("/nonexistent/dir")).is_ok());
    }

    #[test]
    fn test_detect_strategies_start_with_direct_copy() {
        let host = Host::detect(false);
        let strategies = host.replace.strategies();
        assert_eq!(strategies.first(), Some(&ReplaceStrategy::DirectCopy));
        if cfg!(windows) {
            assert_eq!(strategies.len(), 3);
        } else {
            assert_eq!(strategies, vec![ReplaceStrategy::DirectCopy]);
        }
    }

    #[test]
    fn test_noopen_never_runs_commands() {
        let runner = FakeRunner::succeeding();
        NoOpen.open(&runner, Path::new("/tmp")).unwrap();
        assert!(runner.calls().is_empty());
    }
}
