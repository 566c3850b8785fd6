#![allow(dead_code)]

use std::path::PathBuf;

use drawgrade::Schedule;

/// A cycle through all 36 teams in which neighbours never share a country.
pub const LEGAL_ORDER: [&str; 36] = [
    "Real Madrid",
    "PSG",
    "Barcelona",
    "Chelsea",
    "Inter Milan",
    "Liverpool",
    "Bayern Munchen",
    "Manchester City",
    "Borussia Dortmund",
    "Club Bruges",
    "Atletico Madrid",
    "Sporting CP",
    "PSV",
    "Eintracht Frankfurt",
    "Ajax",
    "Arsenal",
    "Juventus",
    "Villareal",
    "Atalanta",
    "Tottenham",
    "Napoli",
    "Marseille",
    "Galatasaray",
    "Basel",
    "Slavia Praga",
    "Bayer Leverkusen",
    "Olympiacos",
    "Qarabag",
    "Copenhagen",
    "Athletic Bilbao",
    "Dinamo Kyiv",
    "Monaco",
    "Union SG",
    "Salzburg",
    "Newcastle",
    "Lech Poznan",
];

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// Each team hosts the next team of the cycle and visits the previous one.
pub fn legal_entries() -> Vec<(String, Vec<String>)> {
    let n = LEGAL_ORDER.len();
    (0..n)
        .map(|i| {
            (
                LEGAL_ORDER[i].to_string(),
                vec![
                    LEGAL_ORDER[(i + 1) % n].to_string(),
                    LEGAL_ORDER[(i + n - 1) % n].to_string(),
                ],
            )
        })
        .collect()
}

pub fn legal_schedule() -> Schedule {
    Schedule::from_opponents(legal_entries())
}

/// The legal draw with `team`'s record replaced by `opponents`.
pub fn legal_with(team: &str, opponents: &[&str]) -> Schedule {
    Schedule::from_opponents(legal_entries().into_iter().map(|(name, list)| {
        if name == team {
            (name, opponents.iter().map(|o| o.to_string()).collect())
        } else {
            (name, list)
        }
    }))
}
