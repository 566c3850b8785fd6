#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    collections::{BTreeMap, HashMap},
    path::Path,
};

use serde::{Deserialize, Serialize};
use tabled::{
    Table, Tabled,
    settings::{Panel, Style},
};
use thiserror::Error;

use crate::constants::{DEFAULT_COUNTRY_CAPS, DEFAULT_POTS};

/// One team of the draw and the country it represents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamEntry {
    /// Team name as printed by candidate programs.
    pub name:    String,
    /// Country the team belongs to.
    pub country: String,
}

impl TeamEntry {
    /// Creates a new team entry.
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            name:    name.into(),
            country: country.into(),
        }
    }
}

/// Errors raised while building or loading reference data.
#[derive(Debug, Error)]
pub enum ReferenceError {
    /// The same team was listed in more than one slot.
    #[error("Team `{name}` is listed more than once (pots {first} and {second})")]
    DuplicateTeam {
        /// Offending team name.
        name:   String,
        /// Pot of the first listing, 1-based.
        first:  usize,
        /// Pot of the repeated listing, 1-based.
        second: usize,
    },
    /// A team or country name was blank.
    #[error("Pot {pot} contains a team with an empty name or country")]
    EmptyName {
        /// Pot containing the blank entry, 1-based.
        pot: usize,
    },
    /// The reference file could not be read.
    #[error("Could not read reference data from {path}")]
    Io {
        /// Path that failed.
        path:   String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The reference file was not valid JSON for this shape.
    #[error("Reference data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialized shape of a reference table.
#[derive(Deserialize)]
struct ReferenceFile {
    /// Teams grouped by pot, in pot order.
    pots: Vec<Vec<TeamEntry>>,
    /// Per-country opponent caps.
    #[serde(default)]
    caps: BTreeMap<String, usize>,
}

/// Where a team sits in the reference table.
#[derive(Debug, Clone)]
struct Seat {
    /// Country of the team.
    country: String,
    /// Pot of the team, 1-based.
    pot:     usize,
}

/// Immutable team/country/pot tables used by every rule check.
///
/// Build it once (usually [`ReferenceData::champions_league`]) and share it by
/// reference or through an `Arc`.
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceData {
    /// Teams grouped by pot, in pot order.
    pots:  Vec<Vec<TeamEntry>>,
    /// Per-country opponent caps. Countries not listed are uncapped.
    caps:  BTreeMap<String, usize>,
    /// Team name to country and pot, derived from `pots`.
    #[serde(skip)]
    seats: HashMap<String, Seat>,
}

impl ReferenceData {
    /// Builds reference data from pots and caps, deriving the team lookup.
    pub fn new(
        pots: Vec<Vec<TeamEntry>>,
        caps: BTreeMap<String, usize>,
    ) -> Result<Self, ReferenceError> {
        let mut seats: HashMap<String, Seat> = HashMap::new();

        for (index, pot) in pots.iter().enumerate() {
            let pot_number = index + 1;
            for entry in pot {
                if entry.name.trim().is_empty() || entry.country.trim().is_empty() {
                    return Err(ReferenceError::EmptyName { pot: pot_number });
                }
                if let Some(existing) = seats.get(entry.name.as_str()) {
                    return Err(ReferenceError::DuplicateTeam {
                        name:   entry.name.clone(),
                        first:  existing.pot,
                        second: pot_number,
                    });
                }
                seats.insert(
                    entry.name.clone(),
                    Seat {
                        country: entry.country.clone(),
                        pot:     pot_number,
                    },
                );
            }
        }

        Ok(Self { pots, caps, seats })
    }

    /// The 36-team, four-pot table with caps of two for Spain, England,
    /// Italy, Germany and France.
    pub fn champions_league() -> Self {
        let pots = DEFAULT_POTS
            .iter()
            .map(|pot| {
                pot.iter()
                    .map(|(name, country)| TeamEntry::new(*name, *country))
                    .collect()
            })
            .collect();
        let caps = DEFAULT_COUNTRY_CAPS
            .iter()
            .map(|(country, cap)| (country.to_string(), *cap))
            .collect();

        Self::new(pots, caps).expect("built-in reference data has unique, non-empty names")
    }

    /// Parses a JSON reference table of the form
    /// `{"pots": [[{"name": .., "country": ..}, ..], ..], "caps": {"Spain": 2}}`.
    pub fn from_json(text: &str) -> Result<Self, ReferenceError> {
        let file: ReferenceFile = serde_json::from_str(text)?;
        Self::new(file.pots, file.caps)
    }

    /// Reads and parses a JSON reference table from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ReferenceError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ReferenceError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Country of `team`, if the team is known.
    pub fn country_of(&self, team: &str) -> Option<&str> {
        self.seats.get(team).map(|seat| seat.country.as_str())
    }

    /// 1-based pot of `team`, if the team is known.
    pub fn pot_of(&self, team: &str) -> Option<usize> {
        self.seats.get(team).map(|seat| seat.pot)
    }

    /// Opponent cap for `country`, if one is defined.
    pub fn cap_for(&self, country: &str) -> Option<usize> {
        self.caps.get(country).copied()
    }

    /// Whether `team` is part of the draw.
    pub fn contains(&self, team: &str) -> bool {
        self.seats.contains_key(team)
    }

    /// Teams grouped by pot.
    pub fn pots(&self) -> &[Vec<TeamEntry>] {
        &self.pots
    }

    /// All teams in pot order.
    pub fn teams(&self) -> impl Iterator<Item = &TeamEntry> {
        self.pots.iter().flatten()
    }

    /// Number of teams across all pots.
    pub fn team_count(&self) -> usize {
        self.seats.len()
    }

    /// Renders every team with its pot, country and country cap as a
    /// terminal table.
    pub fn table(&self) -> String {
        let rows = self.teams().map(|entry| TeamRow {
            pot:     self.pot_of(&entry.name).unwrap_or_default(),
            team:    entry.name.clone(),
            country: entry.country.clone(),
            cap:     self
                .cap_for(&entry.country)
                .map_or_else(|| "-".to_string(), |cap| cap.to_string()),
        });

        Table::new(rows)
            .with(Panel::header(format!("Reference Teams ({})", self.team_count())))
            .with(Style::modern())
            .to_string()
    }
}

/// A display row of the reference table.
#[derive(Tabled)]
struct TeamRow {
    #[tabled(rename = "Pot")]
    /// Pot of the team, 1-based.
    pot:     usize,
    #[tabled(rename = "Team")]
    /// Team name.
    team:    String,
    #[tabled(rename = "Country")]
    /// Country of the team.
    country: String,
    #[tabled(rename = "Cap")]
    /// Opponent cap of the country, `-` when uncapped.
    cap:     String,
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::champions_league()
    }
}
