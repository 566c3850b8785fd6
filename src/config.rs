#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{sync::OnceLock, time::Duration};

use serde::Serialize;
use typed_builder::TypedBuilder;

use crate::constants::{
    DEFAULT_COMPILE_TIMEOUT_SECS, DEFAULT_COMPILER, DEFAULT_RUN_TIMEOUT_SECS,
};

/// Environment variable naming the C++ compiler.
pub const COMPILER_ENV: &str = "DRAWGRADE_CXX";
/// Environment variable holding the compile timeout in seconds.
pub const COMPILE_TIMEOUT_ENV: &str = "DRAWGRADE_COMPILE_TIMEOUT_SECS";
/// Environment variable holding the run timeout in seconds.
pub const RUN_TIMEOUT_ENV: &str = "DRAWGRADE_RUN_TIMEOUT_SECS";

/// Settings for compiling and running candidates.
#[derive(Debug, Clone, Serialize, TypedBuilder)]
#[builder(doc)]
pub struct GraderConfig {
    /// Compiler program, looked up on `PATH` unless it is a path.
    #[builder(default = DEFAULT_COMPILER.to_string(), setter(into))]
    compiler:        String,
    /// Extra arguments passed to the compiler before the source file.
    #[builder(default, setter(into))]
    compiler_args:   Vec<String>,
    /// Maximum time allowed for compiling.
    #[builder(default = Duration::from_secs(DEFAULT_COMPILE_TIMEOUT_SECS))]
    compile_timeout: Duration,
    /// Maximum time allowed for running the compiled candidate.
    #[builder(default = Duration::from_secs(DEFAULT_RUN_TIMEOUT_SECS))]
    run_timeout:     Duration,
}

impl GraderConfig {
    /// Reads settings from the environment, falling back to defaults for
    /// anything unset or unparsable.
    pub fn from_env() -> Self {
        let compiler = std::env::var(COMPILER_ENV)
            .ok()
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_COMPILER.to_string());

        Self::builder()
            .compiler(compiler)
            .compile_timeout(read_timeout_secs(COMPILE_TIMEOUT_ENV, DEFAULT_COMPILE_TIMEOUT_SECS))
            .run_timeout(read_timeout_secs(RUN_TIMEOUT_ENV, DEFAULT_RUN_TIMEOUT_SECS))
            .build()
    }

    /// Returns the compiler program.
    pub fn compiler(&self) -> &str {
        &self.compiler
    }

    /// Returns extra compiler arguments.
    pub fn compiler_args(&self) -> &[String] {
        &self.compiler_args
    }

    /// Returns the compile timeout.
    pub fn compile_timeout(&self) -> Duration {
        self.compile_timeout
    }

    /// Returns the run timeout.
    pub fn run_timeout(&self) -> Duration {
        self.run_timeout
    }
}

impl Default for GraderConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Process-wide settings, read from the environment on first use.
pub fn get() -> &'static GraderConfig {
    static CONFIG: OnceLock<GraderConfig> = OnceLock::new();
    CONFIG.get_or_init(GraderConfig::from_env)
}

/// Parses an environment variable into a `Duration`, falling back to
/// `default_secs` when parsing fails, the value is zero or the variable is
/// missing.
fn read_timeout_secs(env: &str, default_secs: u64) -> Duration {
    std::env::var(env)
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .unwrap_or_else(|| Duration::from_secs(default_secs))
}
