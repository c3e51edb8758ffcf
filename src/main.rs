//! asarkit - Electron ASAR toolkit
//!
//! A command line tool that drives npm and the asar packer to extract, inspect
//! and repack the resource archives bundled inside Electron applications.

use clap::Parser;
use miette::Diagnostic;
use std::path::PathBuf;

mod archive;
mod cli;
mod commands;
mod discovery;
mod error;
mod hash;
mod locator;
mod packages;
mod platform;
mod process;
mod session;
mod sourcemap;
mod ui;

use cli::{Cli, Commands};
use commands::{Action, App};
use error::{AsarkitError, Result};
use platform::Host;
use session::Session;
use ui::Console;

/// Base directory for output: the flag, else the directory of the executable
fn resolve_install_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dunce::canonicalize(&dir).unwrap_or(dir));
    }

    let exe = std::env::current_exe()?;
    let exe = dunce::canonicalize(&exe).unwrap_or(exe);
    exe.parent()
        .map(std::path::Path::to_path_buf)
        .ok_or_else(|| AsarkitError::IoError {
            message: format!("Cannot determine the directory of {}", exe.display()),
        })
}

fn report(err: &AsarkitError) {
    eprintln!("Error: {err}");
    if let Some(help) = err.help() {
        eprintln!("  help: {help}");
    }
}

fn main() {
    let cli = Cli::parse();

    // Version and completions need no session
    match &cli.command {
        Some(Commands::Version) => {
            if let Err(e) = commands::version::run() {
                report(&e);
                std::process::exit(1);
            }
            return;
        }
        Some(Commands::Completions(args)) => {
            if let Err(e) = commands::completions::run(args) {
                report(&e);
                std::process::exit(1);
            }
            return;
        }
        _ => {}
    }

    let install_dir = match resolve_install_dir(cli.install_dir) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Initialization error: {e}");
            std::process::exit(1);
        }
    };

    let mut app = App::new(
        Session::new(install_dir),
        Host::detect(!cli.no_open),
        Console::stdout(),
    );
    app.npm_override = cli.npm;

    if !matches!(cli.command, Some(Commands::Locate)) {
        commands::locate::run(&mut app);
    }

    if let Some(path) = cli.app {
        if let Err(e) = app.run(Action::SelectApp(Some(path))) {
            report(&e);
            std::process::exit(1);
        }
    }

    let result = match cli.command {
        None | Some(Commands::Menu) => commands::menu::run(&mut app),
        Some(Commands::Select(args)) => app.run(Action::SelectApp(Some(args.path))),
        Some(Commands::Locate) => app.run(Action::LocateNpm),
        Some(Commands::Install) => app.run(Action::InstallTools),
        Some(Commands::Extract) => app.run(Action::Extract),
        Some(Commands::SourceMaps) => app.run(Action::SourceMaps),
        Some(Commands::Edit) => app.run(Action::Edit),
        Some(Commands::Devtools) => app.run(Action::DevTools),
        Some(Commands::Repack) => app.run(Action::Repack),
        Some(Commands::Restore) => app.run(Action::Restore),
        Some(Commands::Doctor) => app.run(Action::Doctor),
        Some(Commands::Instructions) => app.run(Action::Instructions),
        Some(Commands::About) => app.run(Action::About),
        Some(Commands::Version | Commands::Completions(_)) => Ok(()),
    };

    if let Err(e) = result {
        report(&e);
        std::process::exit(1);
    }
}
