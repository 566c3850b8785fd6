#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::Serialize;

use crate::{constants::TEAM_LINE_PREFIX, draw::Schedule};

/// One `Team: X | Home vs: Y | Away vs: Z` line printed by a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamLine {
    /// Team the line describes.
    pub team: String,
    /// Opponent hosted by the team, possibly empty.
    pub home: String,
    /// Opponent visited by the team, possibly empty.
    pub away: String,
}

impl TeamLine {
    /// Builds a line record, trimming every field.
    fn new(team: &str, home: &str, away: &str) -> Self {
        Self {
            team: team.trim().to_string(),
            home: home.trim().to_string(),
            away: away.trim().to_string(),
        }
    }
}

peg::parser! {
    /// grammars for reading the draw printed by a candidate program.
    pub grammar parser() for str {
        /// matches any run of whitespace, including none
        rule ws() = quiet!{[c if c.is_whitespace()]*}

        /// separator in front of the home opponent
        rule home_tag() = ws() "|" ws() "Home vs:"

        /// separator in front of the away opponent
        rule away_tag() = ws() "|" ws() "Away vs:"

        /// the team name runs up to the home separator
        rule team_name() -> &'input str
            = $((!home_tag() [_])*)

        /// the home opponent runs up to the away separator
        rule home() -> &'input str
            = $((!away_tag() [_])*)

        /// the away opponent is the rest of the line
        rule away() -> &'input str
            = $([_]*)

        /// parses a full team line and returns a `TeamLine`
        pub rule team_line() -> TeamLine
            = ws() "Team:" t:team_name() home_tag() h:home() away_tag() a:away()
            { TeamLine::new(t, h, a) }

        /// delimiter of a Python triple-quoted string
        rule triple_quote() = "\"\"\""

        /// one closed `"""…"""` block, returning what is between the quotes
        rule quoted_block() -> &'input str
            = triple_quote() body:$((!triple_quote() [_])*) triple_quote() { body }

        /// contents of every closed triple-quoted block, pairing quotes left
        /// to right; an unclosed trailing quote is ignored
        pub rule quoted_blocks() -> Vec<&'input str>
            = (!triple_quote() [_])* blocks:(b:quoted_block() (!triple_quote() [_])* { b })* [_]*
            { blocks }

        /// `#` or `//` in front of a region marker
        rule comment_leader() = "#" / "//"

        /// opening marker of an embedded C++ region
        rule begin_marker() = comment_leader() ws() "BEGIN CPP CODE"

        /// closing marker of an embedded C++ region
        rule end_marker() = comment_leader() ws() "END CPP CODE"

        /// one marked region, up to the first closing marker
        rule marked_region() -> &'input str
            = begin_marker() body:$((!end_marker() [_])*) end_marker() { body }

        /// contents of every closed `BEGIN CPP CODE` … `END CPP CODE` region
        pub rule marked_regions() -> Vec<&'input str>
            = (!begin_marker() [_])* regions:(r:marked_region() (!begin_marker() [_])* { r })* [_]*
            { regions }
    }
}

/// Reads every team line of a candidate's output.
///
/// Lines that do not start with `Team:` are ignored, as are `Team:` lines
/// that do not follow the expected layout.
pub fn team_lines(output: &str) -> Vec<TeamLine> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with(TEAM_LINE_PREFIX))
        .filter_map(|line| match parser::team_line(line) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::debug!("Skipping malformed team line `{line}`: {e}");
                None
            }
        })
        .collect()
}

/// Builds the schedule printed in a candidate's output. A team printed more
/// than once keeps its last line.
pub fn parse_output(output: &str) -> Schedule {
    Schedule::from_opponents(
        team_lines(output)
            .into_iter()
            .map(|line| (line.team, [line.home, line.away])),
    )
}
