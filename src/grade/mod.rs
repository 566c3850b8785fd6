#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Graded result records and their rendering.
pub mod results;
/// The drawing-rule checks.
pub mod rules;

pub use results::{DrawMetrics, MetricRow, Rule, Violation};
pub use rules::validate;
