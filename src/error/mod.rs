//! Error types and handling for asarkit
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostics.
//!
//! Sub-modules hold convenience constructors grouped by domain:
//! - [`fs`]: file system errors
//! - [`process`]: external command errors

pub mod fs;
pub mod process;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for asarkit operations
#[derive(Error, Diagnostic, Debug)]
pub enum AsarkitError {
    // Missing tool
    #[error("npm not found")]
    #[diagnostic(
        code(asarkit::tool::npm_not_found),
        help("Install Node.js from https://nodejs.org/ or pass --npm <PATH>")
    )]
    NpmNotFound,

    // Missing input
    #[error("No application selected")]
    #[diagnostic(
        code(asarkit::input::no_application),
        help("Select an Electron executable first (menu, `asarkit select <PATH>` or --app)")
    )]
    NoApplicationSelected,

    #[error("Application not found: {path}")]
    #[diagnostic(code(asarkit::input::application_not_found))]
    ApplicationNotFound { path: String },

    #[error("Output directory not found: {path}")]
    #[diagnostic(
        code(asarkit::input::output_dir_missing),
        help("Extract the ASAR archive first")
    )]
    OutputDirMissing { path: String },

    // Archive discovery
    #[error("Resources directory not found: {path}")]
    #[diagnostic(
        code(asarkit::archive::resources_not_found),
        help("Electron applications keep their archives in a 'resources' directory next to the executable")
    )]
    ResourcesNotFound { path: String },

    #[error("No ASAR archives found in {path}")]
    #[diagnostic(code(asarkit::archive::none_found))]
    NoArchivesFound { path: String },

    #[error("Original ASAR archive not found in {path}")]
    #[diagnostic(code(asarkit::archive::original_not_found))]
    OriginalArchiveNotFound { path: String },

    // External process failures
    #[error("Extraction failed for {archive}: {diagnostic}")]
    #[diagnostic(code(asarkit::process::extraction_failed))]
    ExtractionFailed { archive: String, diagnostic: String },

    #[error("Extraction failed for {failed} of {total} archive(s)")]
    #[diagnostic(code(asarkit::process::extraction_incomplete))]
    ExtractionIncomplete { failed: usize, total: usize },

    #[error("Packing failed: {diagnostic}")]
    #[diagnostic(
        code(asarkit::process::packing_failed),
        help("Check that the extracted directory still exists and that asar is installed")
    )]
    PackingFailed { diagnostic: String },

    #[error("Command '{command}' failed: {diagnostic}")]
    #[diagnostic(code(asarkit::process::command_failed))]
    CommandFailed { command: String, diagnostic: String },

    #[error("Failed to start '{program}': {reason}")]
    #[diagnostic(code(asarkit::process::spawn_failed))]
    ProcessSpawnFailed { program: String, reason: String },

    #[error("Command '{command}' timed out after {seconds}s")]
    #[diagnostic(code(asarkit::process::timed_out))]
    ProcessTimedOut { command: String, seconds: u64 },

    // Replacement
    #[error("Replacement failed: {strategy}: {reason}")]
    #[diagnostic(
        code(asarkit::replace::exhausted),
        help("Run with elevated privileges, or restore the original with `asarkit restore`")
    )]
    ReplacementFailed { strategy: String, reason: String },

    #[error("Replacement strategy '{strategy}' is not available on this platform")]
    #[diagnostic(code(asarkit::replace::unsupported))]
    StrategyUnsupported { strategy: String },

    #[error("Failed to create backup {path}: {reason}")]
    #[diagnostic(code(asarkit::backup::failed))]
    BackupFailed { path: String, reason: String },

    #[error("Backup not found: {path}")]
    #[diagnostic(
        code(asarkit::backup::not_found),
        help("A backup is created by the first repack")
    )]
    BackupNotFound { path: String },

    // File system
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(asarkit::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(asarkit::fs::io_error))]
    IoError { message: String },

    // Command line
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(asarkit::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // Interactive prompts
    #[error("Prompt cancelled")]
    #[diagnostic(code(asarkit::prompt::cancelled))]
    PromptCancelled,

    #[error("Prompt failed: {message}")]
    #[diagnostic(code(asarkit::prompt::failed))]
    PromptFailed { message: String },
}

impl From<std::io::Error> for AsarkitError {
    fn from(err: std::io::Error) -> Self {
        AsarkitError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for AsarkitError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::OperationCanceled
            | inquire::InquireError::OperationInterrupted => AsarkitError::PromptCancelled,
            other => AsarkitError::PromptFailed {
                message: other.to_string(),
            },
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AsarkitError>;

#[cfg(test)]
mod tests;
