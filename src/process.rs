#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    ffi::{OsStr, OsString},
    path::Path,
    process::{ExitStatus, Stdio},
    time::Duration,
};

use thiserror::Error;
use tokio::{
    io::{AsyncRead, AsyncReadExt},
    process::{Child, Command},
    task::JoinHandle,
    time::timeout,
};

/// Failures while running a child process.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The program could not be started.
    #[error("failed to spawn `{program}`")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// Underlying I/O error.
        #[source]
        source:  std::io::Error,
    },
    /// Reading output or waiting on the child failed.
    #[error("failed while {action}")]
    Io {
        /// What was being done.
        action: &'static str,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A reader task panicked or was cancelled.
    #[error("output reader task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    /// The child outlived its deadline and was killed.
    #[error("process timed out after {} seconds", .limit.as_secs())]
    TimedOut {
        /// Deadline that elapsed.
        limit: Duration,
    },
}

/// Kills the wrapped child when dropped, unless disarmed after a clean wait.
struct KillOnDrop {
    /// The guarded child.
    child: Child,
    /// Whether dropping the guard should kill the child.
    armed: bool,
}

impl KillOnDrop {
    /// Wraps `child`, armed.
    fn new(child: Child) -> Self {
        Self { child, armed: true }
    }

    /// Releases the child without killing it.
    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for KillOnDrop {
    fn drop(&mut self) {
        if self.armed {
            let _ = self.child.start_kill();
        }
    }
}

/// Output of a finished child process.
#[derive(Debug)]
pub struct Captured {
    /// Exit status returned by the process.
    pub status: ExitStatus,
    /// Bytes written to stdout.
    pub stdout: Vec<u8>,
    /// Bytes written to stderr.
    pub stderr: Vec<u8>,
}

impl Captured {
    /// Stdout decoded lossily as UTF-8.
    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    /// Stderr decoded lossily as UTF-8.
    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

/// Drains a pipe on its own task so a chatty child cannot block on a full
/// buffer.
fn drain<R>(pipe: Option<R>, action: &'static str) -> JoinHandle<Result<Vec<u8>, ProcessError>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            pipe.read_to_end(&mut buf)
                .await
                .map_err(|source| ProcessError::Io { action, source })?;
        }
        Ok(buf)
    })
}

/// Runs `program` with `args` in `cwd`, stdin closed, collecting stdout and
/// stderr. With a `deadline`, the child is killed once it elapses.
pub async fn run_captured(
    program: impl AsRef<OsStr>,
    args: &[OsString],
    cwd: Option<&Path>,
    deadline: Option<Duration>,
) -> Result<Captured, ProcessError> {
    let program = program.as_ref();
    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let mut child = cmd.spawn().map_err(|source| ProcessError::Spawn {
        program: program.to_string_lossy().into_owned(),
        source,
    })?;
    let out_task = drain(child.stdout.take(), "reading stdout");
    let err_task = drain(child.stderr.take(), "reading stderr");
    let mut guard = KillOnDrop::new(child);

    let finished = async move {
        let status = guard
            .child
            .wait()
            .await
            .map_err(|source| ProcessError::Io {
                action: "waiting on the process",
                source,
            })?;
        guard.disarm();
        let stdout = out_task.await??;
        let stderr = err_task.await??;
        Ok::<Captured, ProcessError>(Captured {
            status,
            stdout,
            stderr,
        })
    };

    match deadline {
        Some(limit) => timeout(limit, finished)
            .await
            .map_err(|_| ProcessError::TimedOut { limit })?,
        None => finished.await,
    }
}
