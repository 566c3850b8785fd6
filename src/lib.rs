//! # drawgrade
//!
//! A grader for tournament-draw programs. It compiles a candidate C++
//! program, reads the draw it prints, checks the draw against the drawing
//! rules and produces a graduated score.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Compiler and timeout settings
pub mod config;
/// A module defining a bunch of constant values to be used throughout
pub mod constants;
/// Compiling and running candidate programs
pub mod cpp;
/// Reference data and the schedule under evaluation
pub mod draw;
/// The end-to-end evaluation pipeline
pub mod evaluate;
/// For all things related to grading
pub mod grade;
/// For all parsers used
pub mod parsers;
/// Running child processes with deadlines
pub mod process;
/// Finding the C++ program inside a submission
pub mod source;
/// Utility functions for convenience
pub mod util;

pub use config::GraderConfig;
pub use draw::{ReferenceData, Schedule};
pub use evaluate::{Evaluator, Input};
pub use grade::{DrawMetrics, Rule, Violation, validate};
