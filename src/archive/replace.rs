//! Overwriting the original archive with a freshly packed one

use std::fmt;
use std::path::Path;

use crate::error::{AsarkitError, Result};
use crate::hash::{fingerprint, hash_file};
use crate::platform::Host;
use crate::ui::Console;

/// One way of overwriting the original archive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceStrategy {
    /// Plain file copy over the original path
    DirectCopy,
    /// Take ownership and grant full control, then copy
    OwnershipReassignThenCopy,
    /// Copy from a shell started through the elevation mechanism
    ElevatedShellCopy,
}

impl ReplaceStrategy {
    /// Every strategy, in attempt order
    pub const ALL: [ReplaceStrategy; 3] = [
        ReplaceStrategy::DirectCopy,
        ReplaceStrategy::OwnershipReassignThenCopy,
        ReplaceStrategy::ElevatedShellCopy,
    ];

    /// Carry out this strategy once
    pub fn attempt(self, host: &Host, new_archive: &Path, original: &Path) -> Result<()> {
        match self {
            ReplaceStrategy::DirectCopy => {
                std::fs::copy(new_archive, original)?;
            }
            ReplaceStrategy::OwnershipReassignThenCopy => {
                host.replace
                    .reassign_ownership(host.runner.as_ref(), original)?;
                std::fs::copy(new_archive, original)?;
            }
            ReplaceStrategy::ElevatedShellCopy => {
                host.replace
                    .elevated_copy(host.runner.as_ref(), new_archive, original)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ReplaceStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReplaceStrategy::DirectCopy => "direct copy",
            ReplaceStrategy::OwnershipReassignThenCopy => "ownership reassignment then copy",
            ReplaceStrategy::ElevatedShellCopy => "elevated shell copy",
        };
        f.write_str(name)
    }
}

/// Try `strategies` in order until `original` carries the new archive's bytes
///
/// Each failure is logged as a warning before the next strategy runs. When all
/// are exhausted the error names the last strategy and its failure; whatever
/// that strategy left behind at `original` stays as is.
pub fn replace_archive(
    host: &Host,
    strategies: &[ReplaceStrategy],
    new_archive: &Path,
    original: &Path,
    console: &mut Console,
) -> Result<ReplaceStrategy> {
    let expected = hash_file(new_archive).map_err(|e| AsarkitError::ReplacementFailed {
        strategy: "none".to_string(),
        reason: format!("new archive is unreadable: {e}"),
    })?;
    let mut last_failure: Option<(ReplaceStrategy, String)> = None;

    for (index, strategy) in strategies.iter().enumerate() {
        console.info(format!(
            "Attempting replacement method {} ({strategy})...",
            index + 1
        ));

        let reason = match strategy.attempt(host, new_archive, original) {
            Ok(()) if fingerprint(original).as_deref() == Some(expected.as_str()) => {
                return Ok(*strategy);
            }
            Ok(()) => "original archive was not updated".to_string(),
            Err(e) => e.to_string(),
        };

        console.warning(format!("Method {} failed: {reason}", index + 1));
        last_failure = Some((*strategy, reason));
    }

    let (strategy, reason) = last_failure.map_or_else(
        || ("none".to_string(), "no replacement strategy available".to_string()),
        |(s, r)| (s.to_string(), r),
    );
    Err(AsarkitError::ReplacementFailed { strategy, reason })
}
