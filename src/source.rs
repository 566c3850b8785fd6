#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Pulls the candidate's C++ program out of the file it was submitted in.

use crate::{constants::CPP_KEYWORDS, parsers::parser};

/// Finds the C++ program inside a submission.
///
/// In order of preference:
/// 1. the last `"""…"""` block,
/// 2. the last region between `# BEGIN CPP CODE` and `# END CPP CODE` (or the
///    same markers behind `//`),
/// 3. the whole text, if it contains an obvious C++ keyword.
///
/// Returns `None` when nothing usable is found, including when the chosen
/// block is empty.
pub fn extract_cpp(text: &str) -> Option<String> {
    if let Some(block) = last_match(parser::quoted_blocks(text)) {
        return non_empty(block);
    }
    if let Some(block) = last_match(parser::marked_regions(text)) {
        return non_empty(block);
    }
    if CPP_KEYWORDS.iter().any(|keyword| text.contains(keyword)) {
        return Some(text.to_string());
    }
    None
}

/// Last block a grammar rule found, if any.
fn last_match<'a, E>(found: Result<Vec<&'a str>, E>) -> Option<&'a str> {
    found.ok().and_then(|blocks| blocks.last().copied())
}

/// `Some` for blocks with any content.
fn non_empty(block: &str) -> Option<String> {
    if block.is_empty() {
        None
    } else {
        Some(block.to_string())
    }
}
