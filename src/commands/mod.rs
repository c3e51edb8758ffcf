//! Command implementations for asarkit
//!
//! Every operator-triggered action goes through [`App::run`], the single
//! boundary where failures are logged on the console before being handed back
//! to the caller (the menu loop or `main`).

use std::fmt;
use std::path::PathBuf;

use crate::error::Result;
use crate::platform::Host;
use crate::session::Session;
use crate::ui::Console;

pub mod completions;
pub mod devtools;
pub mod doctor;
pub mod edit;
pub mod extract;
pub mod info;
pub mod install;
pub mod locate;
pub mod menu;
pub mod repack;
pub mod restore;
pub mod select;
pub mod source_maps;
pub mod version;

/// One operator-triggered action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Select the application; prompts when no path is given
    SelectApp(Option<PathBuf>),
    LocateNpm,
    InstallTools,
    Extract,
    SourceMaps,
    Edit,
    DevTools,
    Repack,
    Restore,
    Doctor,
    ClearConsole,
    Instructions,
    About,
}

impl Action {
    /// Title used for the menu entry and error dialogs
    pub fn title(&self) -> &'static str {
        match self {
            Action::SelectApp(_) => "Select Electron application",
            Action::LocateNpm => "Locate npm",
            Action::InstallTools => "Install required tools",
            Action::Extract => "Extract ASAR archive",
            Action::SourceMaps => "Analyze source maps",
            Action::Edit => "Edit extracted files",
            Action::DevTools => "Setup development tools",
            Action::Repack => "Recompile & apply changes",
            Action::Restore => "Restore original archive",
            Action::Doctor => "Check environment",
            Action::ClearConsole => "Clear console",
            Action::Instructions => "Instructions",
            Action::About => "About",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Everything an action needs: session state, host capabilities, console
pub struct App {
    pub session: Session,
    pub host: Host,
    pub console: Console,
    /// npm given on the command line, tried before searching
    pub npm_override: Option<PathBuf>,
}

impl App {
    pub fn new(session: Session, host: Host, console: Console) -> Self {
        Self {
            session,
            host,
            console,
            npm_override: None,
        }
    }

    /// Run `action`, logging any failure at error level
    pub fn run(&mut self, action: Action) -> Result<()> {
        let result = match action {
            Action::SelectApp(path) => select::run(self, path),
            Action::LocateNpm => {
                locate::run(self);
                Ok(())
            }
            Action::InstallTools => install::run(self),
            Action::Extract => extract::run(self),
            Action::SourceMaps => source_maps::run(self),
            Action::Edit => edit::run(self),
            Action::DevTools => {
                devtools::run(&mut self.console);
                Ok(())
            }
            Action::Repack => repack::run(self),
            Action::Restore => restore::run(self),
            Action::Doctor => doctor::run(self),
            Action::ClearConsole => {
                self.console.clear();
                Ok(())
            }
            Action::Instructions => {
                info::instructions(&mut self.console);
                Ok(())
            }
            Action::About => {
                info::about(&mut self.console);
                Ok(())
            }
        };

        if let Err(e) = &result {
            self.console.error(e.to_string());
        }
        result
    }
}
