#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::collections::{BTreeMap, HashSet};

use super::results::{DrawMetrics, Rule, Violation};
use crate::{
    constants::OPPONENTS_PER_TEAM,
    draw::{ReferenceData, Schedule},
};

/// How many teams received exactly their two opponents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Coverage {
    /// Teams with exactly two non-empty opponents.
    complete_teams: usize,
    /// Teams present in the schedule.
    total_teams:    usize,
}

impl Coverage {
    /// Counts covered teams in `schedule`.
    fn of(schedule: &Schedule) -> Self {
        let complete_teams = schedule
            .iter()
            .filter(|(_, opponents)| has_full_slate(opponents))
            .count();

        Self {
            complete_teams,
            total_teams: schedule.len(),
        }
    }

    /// `complete_teams / total_teams`, or `0.0` for an empty schedule.
    fn ratio(&self) -> f64 {
        if self.total_teams == 0 {
            0.0
        } else {
            self.complete_teams as f64 / self.total_teams as f64
        }
    }

    /// Whether every team is covered.
    fn is_complete(&self) -> bool {
        self.total_teams > 0 && self.complete_teams == self.total_teams
    }
}

/// Whether a team's record holds exactly two non-empty opponents.
fn has_full_slate(opponents: &[String]) -> bool {
    opponents.len() == OPPONENTS_PER_TEAM && opponents.iter().all(|o| !o.trim().is_empty())
}

/// Order-independent key for a pair of teams.
fn canonical_pair<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Collects violations while scanning one schedule.
struct Scan<'a> {
    /// Schedule under evaluation.
    schedule:   &'a Schedule,
    /// Team and country tables.
    reference:  &'a ReferenceData,
    /// Pairs already recorded, keyed with the team that recorded them.
    seen_pairs: HashSet<((&'a str, &'a str), &'a str)>,
    /// Violations in discovery order.
    violations: Vec<Violation>,
}

impl<'a> Scan<'a> {
    /// Starts a scan with no violations recorded.
    fn new(schedule: &'a Schedule, reference: &'a ReferenceData) -> Self {
        Self {
            schedule,
            reference,
            seen_pairs: HashSet::new(),
            violations: Vec::new(),
        }
    }

    /// Records a violation.
    fn flag(&mut self, rule: Rule, team: &str, opponent: Option<&str>, detail: String) {
        self.violations.push(Violation {
            rule,
            team: team.to_string(),
            opponent: opponent.map(str::to_string),
            detail,
        });
    }

    /// Runs every check over one team's record.
    fn team(&mut self, team: &'a str, opponents: &'a [String]) {
        if !has_full_slate(opponents) {
            let assigned = opponents.iter().filter(|o| !o.trim().is_empty()).count();
            self.flag(
                Rule::Complete,
                team,
                None,
                format!(
                    "has {assigned} assigned opponent(s) in {} slot(s), expected \
                     {OPPONENTS_PER_TEAM}",
                    opponents.len()
                ),
            );
        }

        if opponents.iter().any(|o| o == team) {
            self.flag(Rule::Valid, team, Some(team), "lists itself as an opponent".into());
        }

        self.country_rules(team, opponents);

        for opponent in opponents {
            self.symmetry(team, opponent);

            let pair = canonical_pair(team, opponent.as_str());
            if !self.seen_pairs.insert((pair, team)) {
                self.flag(
                    Rule::NoDuplicates,
                    team,
                    Some(opponent.as_str()),
                    format!("meets `{opponent}` more than once"),
                );
            }
        }

        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for opponent in opponents {
            *counts.entry(opponent.as_str()).or_default() += 1;
        }
        for (opponent, count) in counts.into_iter().filter(|(_, count)| *count > 1) {
            self.flag(
                Rule::SameAdv,
                team,
                Some(opponent),
                format!("lists `{opponent}` {count} times"),
            );
        }
    }

    /// Both nationality rules: the per-country cap and the zero-tolerance
    /// rule. They are judged independently.
    ///
    /// Names missing from the reference data all share the same "no
    /// country", so two unknown teams (or an unknown team and a blank slot)
    /// count as compatriots. No cap ever applies to them.
    fn country_rules(&mut self, team: &str, opponents: &[String]) {
        let reference = self.reference;
        let country = reference.country_of(team);

        let compatriots: Vec<&str> = opponents
            .iter()
            .map(String::as_str)
            .filter(|o| reference.country_of(o) == country)
            .collect();

        if let Some(country) = country
            && let Some(cap) = reference.cap_for(country)
            && compatriots.len() > cap
        {
            self.flag(
                Rule::CountryRules,
                team,
                None,
                format!(
                    "faces {} opponents from {country}, more than the cap of {cap}",
                    compatriots.len()
                ),
            );
        }

        let country = country.unwrap_or("no listed country");
        for opponent in compatriots {
            self.flag(
                Rule::CountryRules2,
                team,
                Some(opponent),
                format!("faces `{opponent}` from its own country ({country})"),
            );
        }
    }

    /// Flags a relation the opponent does not record back.
    fn symmetry(&mut self, team: &str, opponent: &str) {
        let detail = if opponent.trim().is_empty() {
            "has an unassigned opponent slot".to_string()
        } else {
            match self.schedule.opponents(opponent) {
                None => format!("lists `{opponent}`, which has no record in the schedule"),
                Some(theirs) if !theirs.iter().any(|o| o == team) => {
                    format!("lists `{opponent}`, but `{opponent}` does not list it back")
                }
                Some(_) => return,
            }
        };
        self.flag(Rule::Valid, team, Some(opponent), detail);
    }
}

/// Grades `schedule` against the drawing rules.
///
/// Every rule except `all_matches` is all-or-nothing over the whole schedule:
/// one violation anywhere zeroes it. `all_matches` is the fraction of teams
/// with both opponents and `complete` is `1.0` only when that fraction is one.
/// An empty schedule cannot be graded and yields the error result.
pub fn validate(schedule: &Schedule, reference: &ReferenceData) -> DrawMetrics {
    if schedule.is_empty() {
        return DrawMetrics::failed("Schedule is empty: no team records to evaluate");
    }

    let coverage = Coverage::of(schedule);
    let mut scan = Scan::new(schedule, reference);
    for (team, opponents) in schedule.iter() {
        scan.team(team, opponents);
    }
    let violations = scan.violations;

    let passed = |rule: Rule| {
        if violations.iter().any(|v| v.rule == rule) {
            0.0
        } else {
            1.0
        }
    };

    let mut metrics = DrawMetrics {
        valid: passed(Rule::Valid),
        complete: if coverage.is_complete() { 1.0 } else { 0.0 },
        country_rules: passed(Rule::CountryRules),
        country_rules2: passed(Rule::CountryRules2),
        no_duplicates: passed(Rule::NoDuplicates),
        same_adv: passed(Rule::SameAdv),
        all_matches: coverage.ratio(),
        ..DrawMetrics::default()
    };
    metrics.combined_score = metrics.weighted_score();
    metrics.violations = violations;

    let unknown = schedule
        .iter()
        .filter(|(team, _)| !reference.contains(team))
        .count();
    if unknown > 0 {
        tracing::warn!("{unknown} team(s) in the schedule are missing from the reference data");
    }

    tracing::debug!(
        teams = coverage.total_teams,
        covered = coverage.complete_teams,
        violations = metrics.violations.len(),
        score = metrics.combined_score,
        "Validated schedule"
    );

    metrics
}
