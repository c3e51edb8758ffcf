//! Error type tests

use std::path::Path;

use miette::Diagnostic;

use crate::error::AsarkitError;
use crate::error::fs::{backup_failed, io_error, read_failed};
use crate::error::process::{command_failed, spawn_failed, timed_out};

macro_rules! test_error_contains {
    ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
        #[test]
        fn $test_name() {
            let err = $err;
            let error_string = err.to_string();
            $(
                assert!(error_string.contains($contains),
                    "Error message should contain '{}', got: {}",
                    $contains,
                    error_string
                );
            )+
        }
    };
}

#[test]
fn test_error_display() {
    let err = AsarkitError::ResourcesNotFound {
        path: "/apps/Foo/resources".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Resources directory not found: /apps/Foo/resources"
    );
}

#[test]
fn test_error_code() {
    let err = AsarkitError::NpmNotFound;
    assert_eq!(
        err.code().map(|c| c.to_string()),
        Some("asarkit::tool::npm_not_found".to_string())
    );
}

#[test]
fn test_npm_not_found_has_help() {
    let help = AsarkitError::NpmNotFound.help().map(|h| h.to_string());
    assert!(help.unwrap().contains("nodejs.org"));
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: AsarkitError = io_err.into();
    assert!(matches!(err, AsarkitError::IoError { .. }));
}

#[test]
fn test_inquire_cancel_conversion() {
    let err: AsarkitError = inquire::InquireError::OperationCanceled.into();
    assert!(matches!(err, AsarkitError::PromptCancelled));

    let err: AsarkitError = inquire::InquireError::OperationInterrupted.into();
    assert!(matches!(err, AsarkitError::PromptCancelled));
}

#[test]
fn test_inquire_other_conversion() {
    let err: AsarkitError = inquire::InquireError::NotTTY.into();
    assert!(matches!(err, AsarkitError::PromptFailed { .. }));
}

test_error_contains!(
    test_no_archives_found,
    AsarkitError::NoArchivesFound {
        path: "res".to_string()
    },
    "No ASAR archives found"
);

test_error_contains!(
    test_original_archive_not_found,
    AsarkitError::OriginalArchiveNotFound {
        path: "res".to_string()
    },
    "Original ASAR archive not found"
);

test_error_contains!(
    test_packing_failed,
    AsarkitError::PackingFailed {
        diagnostic: "ENOENT".to_string()
    },
    "Packing failed",
    "ENOENT"
);

test_error_contains!(
    test_replacement_failed,
    AsarkitError::ReplacementFailed {
        strategy: "direct copy".to_string(),
        reason: "permission denied".to_string()
    },
    "Replacement failed",
    "direct copy",
    "permission denied"
);

#[test]
fn test_fs_constructors() {
    let err = read_failed(Path::new("/a/b"), "denied");
    assert!(matches!(err, AsarkitError::FileReadFailed { .. }));
    assert!(err.to_string().contains("/a/b"));

    let err = backup_failed(Path::new("/a/app.asar.backup"), "disk full");
    assert!(err.to_string().contains("app.asar.backup"));
    assert!(err.to_string().contains("disk full"));

    let err = io_error("Failed to create", Path::new("/out"), "denied");
    assert!(err.to_string().contains("Failed to create /out: denied"));
}

#[test]
fn test_process_constructors() {
    let err = command_failed("npm install -g asar", "E404");
    assert!(err.to_string().contains("E404"));

    let err = spawn_failed("npm", "No such file");
    assert!(matches!(err, AsarkitError::ProcessSpawnFailed { .. }));

    let err = timed_out("npm install -g asar", 120);
    assert!(err.to_string().contains("timed out after 120s"));
}
