#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Number of opponents every team must be drawn against (one home, one away).
pub const OPPONENTS_PER_TEAM: usize = 2;

/// Seeding pots of the default draw, in pot order. Each entry is
/// `(team, country)`.
pub const DEFAULT_POTS: [[(&str, &str); 9]; 4] = [
    [
        ("Real Madrid", "Spain"),
        ("Barcelona", "Spain"),
        ("PSG", "France"),
        ("Chelsea", "England"),
        ("Liverpool", "England"),
        ("Inter Milan", "Italy"),
        ("Manchester City", "England"),
        ("Bayern Munchen", "Germany"),
        ("Borussia Dortmund", "Germany"),
    ],
    [
        ("Club Bruges", "Belgium"),
        ("Atletico Madrid", "Spain"),
        ("Sporting CP", "Portugal"),
        ("PSV", "Netherlands"),
        ("Ajax", "Netherlands"),
        ("Eintracht Frankfurt", "Germany"),
        ("Arsenal", "England"),
        ("Juventus", "Italy"),
        ("Villareal", "Spain"),
    ],
    [
        ("Atalanta", "Italy"),
        ("Tottenham", "England"),
        ("Napoli", "Italy"),
        ("Marseille", "France"),
        ("Galatasaray", "Turkey"),
        ("Basel", "Switzerland"),
        ("Slavia Praga", "Czech Republic"),
        ("Bayer Leverkusen", "Germany"),
        ("Olympiacos", "Greece"),
    ],
    [
        ("Qarabag", "Azerbaijan"),
        ("Copenhagen", "Denmark"),
        ("Athletic Bilbao", "Spain"),
        ("Dinamo Kyiv", "Ukraine"),
        ("Monaco", "France"),
        ("Union SG", "Belgium"),
        ("Salzburg", "Austria"),
        ("Newcastle", "England"),
        ("Lech Poznan", "Poland"),
    ],
];

/// Countries whose teams may only appear a limited number of times among one
/// team's opponents, with that limit.
pub const DEFAULT_COUNTRY_CAPS: [(&str, usize); 5] = [
    ("Spain", 2),
    ("England", 2),
    ("Italy", 2),
    ("Germany", 2),
    ("France", 2),
];

/// Weights of the composite score, in hundredths. They sum to 100.
pub mod weights {
    /// `valid` is reported but not scored.
    pub const VALID: u32 = 0;
    /// Every team has both opponents.
    pub const COMPLETE: u32 = 7;
    /// Per-country cap respected.
    pub const COUNTRY_RULES: u32 = 10;
    /// No same-country opponents at all.
    pub const COUNTRY_RULES2: u32 = 10;
    /// `no_duplicates` is reported but not scored.
    pub const NO_DUPLICATES: u32 = 0;
    /// No repeated opponent within a team.
    pub const SAME_ADV: u32 = 7;
    /// Fraction of teams with both opponents.
    pub const ALL_MATCHES: u32 = 66;
}

/// Line prefix the candidate program prints for every team.
pub const TEAM_LINE_PREFIX: &str = "Team:";

/// Keywords that mark a file as plain C++ when no explicit block is found.
pub const CPP_KEYWORDS: [&str; 5] = ["#include", "using namespace", "int main", "cout", "cin"];

/// Default C++ compiler looked up on `PATH`.
pub const DEFAULT_COMPILER: &str = "g++";

/// Default limit for compiling a candidate, in seconds.
pub const DEFAULT_COMPILE_TIMEOUT_SECS: u64 = 60;

/// Default limit for running a candidate, in seconds.
pub const DEFAULT_RUN_TIMEOUT_SECS: u64 = 30;

/// File name of the compiled candidate inside its scratch directory.
pub const EXECUTABLE_NAME: &str = "champions_draw";
