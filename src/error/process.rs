//! External command errors

use super::AsarkitError;

/// Creates a command failure from the captured diagnostic text
pub fn command_failed(command: impl Into<String>, diagnostic: impl Into<String>) -> AsarkitError {
    AsarkitError::CommandFailed {
        command: command.into(),
        diagnostic: diagnostic.into(),
    }
}

/// Creates a spawn failure
pub fn spawn_failed(program: impl Into<String>, reason: impl ToString) -> AsarkitError {
    AsarkitError::ProcessSpawnFailed {
        program: program.into(),
        reason: reason.to_string(),
    }
}

/// Creates a timeout error
pub fn timed_out(command: impl Into<String>, seconds: u64) -> AsarkitError {
    AsarkitError::ProcessTimedOut {
        command: command.into(),
        seconds,
    }
}
