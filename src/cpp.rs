#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use thiserror::Error;

use crate::{
    config::GraderConfig,
    constants::EXECUTABLE_NAME,
    process::{self, ProcessError},
    util::{ScratchDir, compiler_path},
};

/// Failures while turning candidate source into program output.
#[derive(Debug, Error)]
pub enum CppError {
    /// The compiler rejected the source.
    #[error("Compilation failed:\n{stderr}")]
    DuringCompilation {
        /// Compiler diagnostics.
        stderr: String,
    },
    /// The compiler did not finish in time.
    #[error("Compilation timed out after {} seconds", .limit.as_secs())]
    CompileTimedOut {
        /// Deadline that elapsed.
        limit: Duration,
    },
    /// The program exited unsuccessfully.
    #[error("Runtime error:\n{stderr}")]
    AtRuntime {
        /// Exit code, when the program was not killed by a signal.
        code:   Option<i32>,
        /// What the program wrote to stderr.
        stderr: String,
    },
    /// The program did not finish in time.
    #[error("Program timed out after {} seconds", .limit.as_secs())]
    TimedOut {
        /// Deadline that elapsed.
        limit: Duration,
    },
    /// The compiler or the program could not be started.
    #[error(transparent)]
    Process(ProcessError),
    /// Setting up the build failed.
    #[error("Error: {0:#}")]
    Unknown(#[from] anyhow::Error),
}

/// Compiles `source` with the configured compiler into `dir`, returning the
/// executable's path.
pub async fn compile(source: &Path, dir: &Path, cfg: &GraderConfig) -> Result<PathBuf, CppError> {
    let compiler = compiler_path(cfg.compiler())?;
    let executable = dir.join(EXECUTABLE_NAME);

    let mut args: Vec<OsString> = cfg.compiler_args().iter().map(OsString::from).collect();
    args.push(source.as_os_str().to_owned());
    args.push("-o".into());
    args.push(executable.as_os_str().to_owned());

    tracing::debug!("Compiling {} with {}", source.display(), cfg.compiler());
    let captured = process::run_captured(&compiler, &args, Some(dir), Some(cfg.compile_timeout()))
        .await
        .map_err(|e| match e {
            ProcessError::TimedOut { limit } => CppError::CompileTimedOut { limit },
            other => CppError::Process(other),
        })?;

    if !captured.status.success() {
        return Err(CppError::DuringCompilation {
            stderr: captured.stderr_lossy(),
        });
    }

    Ok(executable)
}

/// Runs a compiled candidate under the configured deadline and returns its
/// stdout.
pub async fn run(executable: &Path, cfg: &GraderConfig) -> Result<String, CppError> {
    let captured = process::run_captured(executable, &[], None, Some(cfg.run_timeout()))
        .await
        .map_err(|e| match e {
            ProcessError::TimedOut { limit } => CppError::TimedOut { limit },
            other => CppError::Process(other),
        })?;

    if !captured.status.success() {
        return Err(CppError::AtRuntime {
            code:   captured.status.code(),
            stderr: captured.stderr_lossy(),
        });
    }

    Ok(captured.stdout_lossy())
}

/// Writes `code` to a scratch directory, compiles it, runs it, and returns
/// what it printed. The scratch directory is removed afterwards.
pub async fn compile_and_run(code: &str, cfg: &GraderConfig) -> Result<String, CppError> {
    let scratch = ScratchDir::new("drawgrade")?;
    let source = scratch.join("candidate.cpp");
    tokio::fs::write(&source, code)
        .await
        .with_context(|| format!("Could not write {}", source.display()))?;

    let executable = compile(&source, scratch.path(), cfg).await?;
    let output = run(&executable, cfg).await?;
    tracing::debug!("Candidate printed {} bytes", output.len());

    Ok(output)
}
