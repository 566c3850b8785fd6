#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    any::Any,
    panic::{AssertUnwindSafe, catch_unwind},
    path::{Path, PathBuf},
    sync::Arc,
};

use thiserror::Error;

use crate::{
    config::GraderConfig,
    cpp::{self, CppError},
    draw::{ReferenceData, Schedule},
    grade::{DrawMetrics, validate},
    parsers::parse_output,
    source::extract_cpp,
};

/// Reasons a submission could not be turned into a draw.
#[derive(Debug, Error)]
pub enum EvaluateError {
    /// The wrapper file does not exist.
    #[error("Python file not found")]
    WrapperNotFound,
    /// The C++ file does not exist.
    #[error("File not found")]
    SourceNotFound,
    /// The wrapper holds no recognisable C++ program.
    #[error("No valid C++ code found in Python file")]
    NoCode,
    /// A submission file could not be read.
    #[error("Error processing file {path}: {source}")]
    Unreadable {
        /// File that failed.
        path:   String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Compiling or running the candidate failed.
    #[error(transparent)]
    Cpp(#[from] CppError),
}

/// What a command-line argument refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// An existing `.py` file carrying C++ inside it.
    Wrapper(PathBuf),
    /// Any other existing file, read as C++.
    CppFile(PathBuf),
    /// Not a file: the argument itself is C++ source.
    Code(String),
}

impl Input {
    /// Classifies `arg` by looking at the file system.
    pub fn classify(arg: &str) -> Self {
        let path = Path::new(arg);
        if path.is_file() {
            if path.extension().is_some_and(|ext| ext == "py") {
                Input::Wrapper(path.to_path_buf())
            } else {
                Input::CppFile(path.to_path_buf())
            }
        } else {
            Input::Code(arg.to_string())
        }
    }
}

/// Best-effort text of a caught panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Runs `check`, turning a panic inside it into the error result
/// `Evaluation error: <panic message>`.
pub fn contain_panic(check: impl FnOnce() -> DrawMetrics) -> DrawMetrics {
    catch_unwind(AssertUnwindSafe(check)).unwrap_or_else(|payload| {
        let message = panic_message(payload.as_ref());
        tracing::warn!("Validation panicked: {message}");
        DrawMetrics::failed(format!("Evaluation error: {message}"))
    })
}

/// Reads a file, mapping a missing file to `missing`.
async fn read_submission(path: &Path, missing: EvaluateError) -> Result<String, EvaluateError> {
    if !path.exists() {
        return Err(missing);
    }
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| EvaluateError::Unreadable {
            path: path.display().to_string(),
            source,
        })
}

/// Grades submissions against one reference table.
///
/// Every entry point returns a [`DrawMetrics`]: anything that stops the
/// submission from being evaluated is folded into the error result rather
/// than returned as an `Err`.
#[derive(Debug, Clone)]
pub struct Evaluator {
    /// Team and country tables, shared across evaluations.
    reference: Arc<ReferenceData>,
    /// Compiler and timeout settings.
    config:    GraderConfig,
}

impl Evaluator {
    /// Creates an evaluator over `reference` with `config`.
    pub fn new(reference: Arc<ReferenceData>, config: GraderConfig) -> Self {
        Self { reference, config }
    }

    /// The reference table in use.
    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// The compiler settings in use.
    pub fn config(&self) -> &GraderConfig {
        &self.config
    }

    /// Grades an already structured schedule. A panic inside the checks is
    /// reported as the error result.
    pub fn evaluate_schedule(&self, schedule: &Schedule) -> DrawMetrics {
        contain_panic(|| validate(schedule, &self.reference))
    }

    /// Grades the text a candidate printed.
    pub fn evaluate_output(&self, output: &str) -> DrawMetrics {
        let schedule = parse_output(output);
        tracing::info!("Parsed {} team line(s) from candidate output", schedule.len());
        self.evaluate_schedule(&schedule)
    }

    /// Compiles and runs C++ source, then grades what it printed.
    pub async fn evaluate_code(&self, code: &str) -> DrawMetrics {
        match cpp::compile_and_run(code, &self.config).await {
            Ok(output) => self.evaluate_output(&output),
            Err(e) => failure(e.into()),
        }
    }

    /// Grades a C++ source file.
    pub async fn evaluate_cpp_file(&self, path: impl AsRef<Path>) -> DrawMetrics {
        match read_submission(path.as_ref(), EvaluateError::SourceNotFound).await {
            Ok(code) => self.evaluate_code(&code).await,
            Err(e) => failure(e),
        }
    }

    /// Grades the C++ program embedded in a Python wrapper file.
    pub async fn evaluate_wrapper_file(&self, path: impl AsRef<Path>) -> DrawMetrics {
        let code = read_submission(path.as_ref(), EvaluateError::WrapperNotFound)
            .await
            .and_then(|text| extract_cpp(&text).ok_or(EvaluateError::NoCode));

        match code {
            Ok(code) => self.evaluate_code(&code).await,
            Err(e) => failure(e),
        }
    }

    /// Grades whatever `input` refers to.
    pub async fn evaluate_input(&self, input: &Input) -> DrawMetrics {
        match input {
            Input::Wrapper(path) => self.evaluate_wrapper_file(path).await,
            Input::CppFile(path) => self.evaluate_cpp_file(path).await,
            Input::Code(code) => self.evaluate_code(code).await,
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(Arc::new(ReferenceData::champions_league()), GraderConfig::default())
    }
}

/// Logs `e` and turns it into the error result.
fn failure(e: EvaluateError) -> DrawMetrics {
    tracing::warn!("Submission could not be evaluated: {e}");
    DrawMetrics::failed(e.to_string())
}
