//! Interactive menu front end
//!
//! A flat list of independent actions. Each runs to completion before the menu
//! comes back; failures are shown in a blocking dialog and the loop goes on.

use std::fmt;

use super::{Action, App, info};
use crate::error::{AsarkitError, Result};
use crate::ui::prompt;

/// One menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    Run(Action),
    Quit,
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuItem::Run(action) => fmt::Display::fmt(action, f),
            MenuItem::Quit => f.write_str("Quit"),
        }
    }
}

/// Menu entries in display order
pub fn menu_items() -> Vec<MenuItem> {
    [
        Action::SelectApp(None),
        Action::InstallTools,
        Action::Extract,
        Action::SourceMaps,
        Action::DevTools,
        Action::Edit,
        Action::Repack,
        Action::Restore,
        Action::LocateNpm,
        Action::Doctor,
        Action::ClearConsole,
        Action::Instructions,
        Action::About,
    ]
    .into_iter()
    .map(MenuItem::Run)
    .chain(std::iter::once(MenuItem::Quit))
    .collect()
}

fn prompt_message(app: &App) -> String {
    match app.session.app_path() {
        Some(path) => format!("[{}] What would you like to do?", path.display()),
        None => "What would you like to do?".to_string(),
    }
}

/// Run the menu until the operator quits
pub fn run(app: &mut App) -> Result<()> {
    app.console.success("asarkit started");

    loop {
        let choice = match prompt::choose(&prompt_message(app), menu_items()) {
            Ok(choice) => choice,
            Err(AsarkitError::PromptCancelled) => return Ok(()),
            Err(e) => return Err(e),
        };

        let action = match choice {
            Some(MenuItem::Run(action)) => action,
            Some(MenuItem::Quit) | None => return Ok(()),
        };

        let title = action.title();
        let outcome = match action {
            Action::Instructions => prompt::info_dialog(title, info::INSTRUCTIONS),
            Action::About => prompt::info_dialog(title, info::ABOUT),
            action => app.run(action),
        };
        match outcome {
            Ok(()) | Err(AsarkitError::PromptCancelled) => {}
            Err(e) => match prompt::error_dialog(title, &e) {
                Ok(()) => {}
                Err(AsarkitError::PromptCancelled) => return Ok(()),
                Err(e) => return Err(e),
            },
        }
    }
}
