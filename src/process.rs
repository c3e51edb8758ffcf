//! External command execution
//!
//! Every external tool (npm, the asar packer, file managers, elevation shims)
//! is spawned through a [`ProcessRunner`]. Output is captured, never streamed,
//! and the caller blocks until the command exits or its timeout expires.
//! Detached commands (file managers) are started and left running.

use std::ffi::{OsStr, OsString};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::process::{spawn_failed, timed_out};
use crate::error::Result;

/// Poll interval while waiting on a command with a timeout
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// How long output pipes may stay open after the command itself exited
///
/// Grandchildren (npm lifecycle scripts, a file manager) inherit the pipes and
/// can hold them open long after the command returned.
const PIPE_GRACE: Duration = Duration::from_secs(2);

const READ_CHUNK: usize = 8 * 1024;

/// A command line to run
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub timeout: Option<Duration>,
    /// Start without waiting or capturing output
    pub detached: bool,
}

impl CommandSpec {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: None,
            detached: false,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn detached(mut self) -> Self {
        self.detached = true;
        self
    }

    /// Human readable command line, used in messages
    pub fn display(&self) -> String {
        let program = self
            .program
            .file_name()
            .unwrap_or(self.program.as_os_str())
            .to_string_lossy()
            .into_owned();
        std::iter::once(program)
            .chain(self.args.iter().map(|a| a.to_string_lossy().into_owned()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Arguments as strings, lossy
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }
}

/// Captured result of a finished command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub code: Option<i32>,
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Zero exit status with the given stdout
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Non-zero exit status with the given stderr
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Diagnostic text for a failed command: stderr, else stdout, else the status
    pub fn diagnostic(&self) -> String {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr.to_string();
        }
        let stdout = self.stdout.trim();
        if !stdout.is_empty() {
            return stdout.to_string();
        }
        match self.code {
            Some(code) => format!("exit status {code}"),
            None => "terminated by signal".to_string(),
        }
    }

    fn from_parts(status: ExitStatus, stdout: Collected, stderr: Collected) -> Self {
        let mut stderr_text = String::from_utf8_lossy(&stderr.bytes).into_owned();
        for (name, error) in [("stdout", stdout.error), ("stderr", stderr.error)] {
            if let Some(error) = error {
                if !stderr_text.is_empty() && !stderr_text.ends_with('\n') {
                    stderr_text.push('\n');
                }
                stderr_text.push_str(&format!("(failed to read {name}: {error})"));
            }
        }

        Self {
            code: status.code(),
            success: status.success(),
            stdout: String::from_utf8_lossy(&stdout.bytes).into_owned(),
            stderr: stderr_text,
        }
    }
}

/// Runs external commands to completion
pub trait ProcessRunner {
    /// Run `spec`, blocking until it exits
    ///
    /// A non-zero exit is not an error here; it is reported through
    /// [`CommandOutput::success`]. Errors are reserved for commands that could
    /// not be started or that exceeded their timeout.
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput>;
}

/// Runs commands on the host system
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        if spec.detached {
            return spawn_detached(spec);
        }

        let deadline = spec.timeout.map(|limit| Instant::now() + limit);
        let mut child = Command::new(&spec.program)
            .args(&spec.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| spawn_failed(spec.program.display().to_string(), e))?;

        // Drain both pipes on helper threads so a chatty child cannot block on
        // a full pipe while we wait on it.
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let status = match (spec.timeout, deadline) {
            (Some(limit), Some(deadline)) => wait_with_deadline(&mut child, deadline)
                .ok_or_else(|| timed_out(spec.display(), limit.as_secs()))?,
            _ => child
                .wait()
                .map_err(|e| spawn_failed(spec.program.display().to_string(), e))?,
        };

        let grace = Instant::now() + PIPE_GRACE;
        let pipes_deadline = deadline.map_or(grace, |deadline| deadline.min(grace));
        let stdout = collect(&stdout, pipes_deadline);
        let stderr = collect(&stderr, pipes_deadline);

        Ok(CommandOutput::from_parts(status, stdout, stderr))
    }
}

/// Start `spec` with no pipes and return at once; a helper thread reaps it
fn spawn_detached(spec: &CommandSpec) -> Result<CommandOutput> {
    let mut child = Command::new(&spec.program)
        .args(&spec.args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| spawn_failed(spec.program.display().to_string(), e))?;

    thread::spawn(move || child.wait());
    Ok(CommandOutput::ok(""))
}

/// Bytes read from one output pipe, and the read error that ended it early
#[derive(Debug, Default)]
struct Collected {
    bytes: Vec<u8>,
    error: Option<io::Error>,
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Receiver<io::Result<Vec<u8>>> {
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        let Some(mut pipe) = pipe else {
            return;
        };
        let mut buf = [0u8; READ_CHUNK];
        loop {
            let chunk = match pipe.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => Ok(buf[..n].to_vec()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => Err(e),
            };
            let failed = chunk.is_err();
            // A closed receiver means the caller stopped listening
            if sender.send(chunk).is_err() || failed {
                break;
            }
        }
    });
    receiver
}

/// Everything a drain thread delivers before it finishes or `deadline` passes
fn collect(receiver: &Receiver<io::Result<Vec<u8>>>, deadline: Instant) -> Collected {
    let mut collected = Collected::default();
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match receiver.recv_timeout(remaining) {
            Ok(Ok(chunk)) => collected.bytes.extend_from_slice(&chunk),
            Ok(Err(error)) => {
                collected.error = Some(error);
                return collected;
            }
            Err(RecvTimeoutError::Disconnected | RecvTimeoutError::Timeout) => return collected,
        }
    }
}

/// Wait for `child` until `deadline`; kill it and return `None` on expiry
fn wait_with_deadline(child: &mut Child, deadline: Instant) -> Option<ExitStatus> {
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Some(status),
            Ok(None) => {}
            Err(_) => break,
        }
        if Instant::now() >= deadline {
            break;
        }
        thread::sleep(POLL_INTERVAL);
    }

    // Already gone or unkillable; either way the command is over for us
    let _ = child.kill();
    let _ = child.wait();
    None
}

/// Search `path_var` (a `PATH`-style list) for the first executable among `names`
pub fn find_in_path(path_var: Option<&OsStr>, names: &[&str]) -> Option<PathBuf> {
    let path_var = path_var?;
    std::env::split_paths(path_var).find_map(|dir| {
        names
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| is_executable(candidate))
    })
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.metadata().map(|m| m.is_file()).unwrap_or(false)
}
