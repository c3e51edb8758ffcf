//! Console output and interactive prompts
//!
//! This module handles:
//! - The status console every action reports through (level-tagged, colored lines)
//! - Spinners shown while an external command runs
//! - Interactive prompts for the menu front end (see [`prompt`])

use std::time::Duration;

use console::{Style, Term};
use indicatif::{ProgressBar, ProgressStyle};

pub mod prompt;

/// Severity tag of a console line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Error,
    Warning,
}

impl Level {
    /// Tag name as shown in plain output
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Success => "success",
            Level::Error => "error",
            Level::Warning => "warning",
        }
    }

    fn style(self) -> Style {
        match self {
            Level::Info => Style::new().cyan(),
            Level::Success => Style::new().green(),
            Level::Error => Style::new().red(),
            Level::Warning => Style::new().yellow(),
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Level::Info => "",
            Level::Success => "✓ ",
            Level::Error => "✗ ",
            Level::Warning => "⚠ ",
        }
    }
}

/// One line of console history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleLine {
    pub level: Level,
    pub message: String,
}

/// Append-only status console
///
/// Lines are written to the terminal as they are logged and kept in memory
/// until [`Console::clear`] is called. When stdout is not a terminal, lines
/// are written plain as `[level] message`.
#[derive(Debug)]
pub struct Console {
    lines: Vec<ConsoleLine>,
    term: Option<Term>,
}

impl Console {
    /// Console writing to standard output
    pub fn stdout() -> Self {
        Self {
            lines: Vec::new(),
            term: Some(Term::stdout()),
        }
    }

    /// Console that only records lines
    #[cfg(test)]
    pub fn buffered() -> Self {
        Self {
            lines: Vec::new(),
            term: None,
        }
    }

    pub fn log(&mut self, level: Level, message: impl Into<String>) {
        let message = message.into();
        if let Some(term) = &self.term {
            let rendered = if term.is_term() {
                let line = format!("{}{}", level.symbol(), message);
                level.style().apply_to(line).to_string()
            } else {
                format!("[{}] {}", level.as_str(), message)
            };
            // A closed stdout loses the echo; the history below still has it
            let _ = term.write_line(&rendered);
        }
        self.lines.push(ConsoleLine { level, message });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.log(Level::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.log(Level::Success, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.log(Level::Warning, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.log(Level::Error, message);
    }

    /// History since the last clear
    #[cfg(test)]
    pub fn lines(&self) -> &[ConsoleLine] {
        &self.lines
    }

    /// Number of recorded lines at `level`
    #[cfg(test)]
    pub fn count(&self, level: Level) -> usize {
        self.lines.iter().filter(|l| l.level == level).count()
    }

    /// Whether any recorded line contains `needle`
    #[cfg(test)]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.message.contains(needle))
    }

    /// Drop the history and wipe the terminal screen
    pub fn clear(&mut self) {
        self.lines.clear();
        if let Some(term) = &self.term {
            if term.is_term() {
                // Cosmetic only
                let _ = term.clear_screen();
            }
        }
        self.info("Console cleared");
    }
}

/// Spinner shown on stderr while a blocking command runs
///
/// Hidden automatically when stderr is not a terminal.
pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());

    let pb = ProgressBar::new_spinner();
    pb.set_style(style);
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
