#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::collections::BTreeMap;

use serde::Serialize;

/// A candidate draw: every team mapped to the opponents it recorded, in the
/// order it recorded them (home first, then away).
///
/// A schedule is built once per evaluation and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schedule {
    /// Team name to recorded opponents.
    fixtures: BTreeMap<String, Vec<String>>,
}

impl Schedule {
    /// Builds a schedule from team names and their flat opponent lists.
    ///
    /// Names are trimmed; nothing else is normalised. Empty opponent entries
    /// are kept so coverage checks can see unassigned slots. A team listed
    /// again replaces its earlier record.
    pub fn from_opponents<I, T, O, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (T, O)>,
        T: AsRef<str>,
        O: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fixtures = entries
            .into_iter()
            .map(|(team, opponents)| {
                let opponents = opponents
                    .into_iter()
                    .map(|opponent| opponent.as_ref().trim().to_string())
                    .collect();
                (team.as_ref().trim().to_string(), opponents)
            })
            .collect();

        Self { fixtures }
    }

    /// Builds a schedule from opponents grouped per team under labels (for
    /// example one group per pot). Groups are flattened in label order.
    pub fn from_pot_groups<I, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (T, BTreeMap<String, Vec<String>>)>,
        T: AsRef<str>,
    {
        Self::from_opponents(
            entries
                .into_iter()
                .map(|(team, groups)| (team, groups.into_values().flatten().collect::<Vec<_>>())),
        )
    }

    /// Whether no team was recorded at all.
    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    /// Number of teams recorded.
    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    /// Whether `team` has a record of its own.
    pub fn contains(&self, team: &str) -> bool {
        self.fixtures.contains_key(team)
    }

    /// Opponents recorded by `team`, if it has a record.
    pub fn opponents(&self, team: &str) -> Option<&[String]> {
        self.fixtures.get(team).map(Vec::as_slice)
    }

    /// Iterates teams in name order with their recorded opponents.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fixtures
            .iter()
            .map(|(team, opponents)| (team.as_str(), opponents.as_slice()))
    }
}

impl<T, S> FromIterator<(T, Vec<S>)> for Schedule
where
    T: AsRef<str>,
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (T, Vec<S>)>>(iter: I) -> Self {
        Self::from_opponents(iter)
    }
}
