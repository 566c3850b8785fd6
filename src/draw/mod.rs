#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Static team, country and pot tables.
pub mod reference;
/// The candidate schedule being judged.
pub mod schedule;

pub use reference::{ReferenceData, ReferenceError, TeamEntry};
pub use schedule::Schedule;
