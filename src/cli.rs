//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// asarkit - Electron ASAR toolkit
///
/// Extract, inspect and repack the ASAR archives of Electron applications.
#[derive(Parser, Debug)]
#[command(
    name = "asarkit",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Extract, inspect and repack the ASAR archives of Electron applications",
    long_about = "asarkit drives npm and the asar packer to unpack the resource archive of an \
                  Electron application, find its source maps, and pack an edited copy back in \
                  place of the original (keeping a .backup of it).",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  asarkit\n    \
                  asarkit --app /opt/Slack/slack extract\n    \
                  asarkit --app /opt/Slack/slack source-maps\n    \
                  asarkit --app /opt/Slack/slack repack\n    \
                  asarkit install\n    \
                  asarkit doctor"
)]
pub struct Cli {
    /// Base directory for extracted output (defaults to the directory of the executable)
    #[arg(long, short = 'd', global = true, env = "ASARKIT_INSTALL_DIR")]
    pub install_dir: Option<PathBuf>,

    /// Electron application executable to work on
    #[arg(long, short = 'a', global = true, env = "ASARKIT_APP")]
    pub app: Option<PathBuf>,

    /// npm executable to use instead of searching for one
    #[arg(long, global = true, env = "ASARKIT_NPM")]
    pub npm: Option<PathBuf>,

    /// Never open directories in the file manager
    #[arg(long, global = true, env = "ASARKIT_NO_OPEN")]
    pub no_open: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive menu (default)
    Menu,

    /// Select the Electron application
    Select(SelectArgs),

    /// Locate npm
    Locate,

    /// Install the required npm packages globally
    Install,

    /// Extract the application's ASAR archives
    Extract,

    /// List source map files in the extracted output
    SourceMaps,

    /// Open the extracted output for editing
    Edit,

    /// Show how to enable the DevTools
    Devtools,

    /// Pack the edited output and replace the original archive
    Repack,

    /// Copy the backup archive back over the original
    Restore,

    /// Check node, npm and the required packages
    Doctor,

    /// Show usage instructions
    Instructions,

    /// Show information about asarkit
    About,

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the select command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Select an application:\n    asarkit select \"C:\\Program Files\\Slack\\slack.exe\"\n\n\
                  Select and extract in one go:\n    asarkit --app /opt/Slack/slack extract")]
pub struct SelectArgs {
    /// Path to the application's executable
    pub path: PathBuf,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    asarkit completions --shell bash > ~/.bash_completion.d/asarkit\n\n\
                  Generate zsh completions:\n    asarkit completions --shell zsh > ~/.zfunc/_asarkit\n\n\
                  Generate fish completions:\n    asarkit completions --shell fish > ~/.config/fish/completions/asarkit.fish\n\n\
                  Generate PowerShell completions:\n    asarkit completions --shell powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
