//! Interactive prompts for the menu front end

use std::fmt::Display;
use std::path::{Path, PathBuf};

use console::Style;
use inquire::error::CustomUserError;
use inquire::validator::Validation;
use inquire::{Select, Text};
use miette::Diagnostic;

use crate::error::{AsarkitError, Result};

/// Ask for one of `items`; `None` when the operator presses Esc
pub fn choose<T: Display>(message: &str, items: Vec<T>) -> Result<Option<T>> {
    let selection = Select::new(message, items)
        .with_starting_cursor(0)
        .with_page_size(15)
        .without_filtering()
        .with_help_message("↑↓ to move, ENTER to select, ESC to quit")
        .prompt_skippable()?;

    Ok(selection)
}

/// Ask for the path of an Electron executable
///
/// The entered path must name an existing file.
pub fn application_path(executables_only: bool) -> Result<Option<PathBuf>> {
    let help = if executables_only {
        "Path to the application's .exe file"
    } else {
        "Path to the application's executable"
    };

    let answer = Text::new("Select Electron application:")
        .with_help_message(help)
        .with_validator(|input: &str| -> std::result::Result<Validation, CustomUserError> {
            if Path::new(input.trim()).is_file() {
                Ok(Validation::Valid)
            } else {
                Ok(Validation::Invalid("File not found".into()))
            }
        })
        .prompt_skippable()?;

    Ok(answer.map(|a| PathBuf::from(a.trim())))
}

/// Blocking error dialog: show the error and its help, then wait for Enter
pub fn error_dialog(title: &str, err: &AsarkitError) -> Result<()> {
    let heading = Style::new().red().bold();
    eprintln!();
    eprintln!("{}", heading.apply_to(title));
    eprintln!("  {err}");
    if let Some(help) = err.help() {
        eprintln!("  {} {help}", Style::new().bold().apply_to("help:"));
    }
    eprintln!();

    match Text::new("Press Enter to continue").prompt_skippable() {
        Ok(_) | Err(inquire::InquireError::NotTTY) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Blocking information dialog
pub fn info_dialog(title: &str, body: &str) -> Result<()> {
    println!();
    println!("{}", Style::new().cyan().bold().apply_to(title));
    println!("{body}");
    println!();

    match Text::new("Press Enter to continue").prompt_skippable() {
        Ok(_) | Err(inquire::InquireError::NotTTY) => Ok(()),
        Err(e) => Err(e.into()),
    }
}
