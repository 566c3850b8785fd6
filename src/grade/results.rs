#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, Width, object::Rows},
};

use crate::constants::weights;

/// The rule dimensions a draw is graded on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Self-free and mutually recorded opponent relations.
    Valid,
    /// Every team has both opponents.
    Complete,
    /// Same-country opponents stay within the country's cap.
    CountryRules,
    /// No same-country opponents at all.
    CountryRules2,
    /// No pair of teams meets more than once.
    NoDuplicates,
    /// No opponent repeated within one team's list.
    SameAdv,
    /// Fraction of teams with both opponents.
    AllMatches,
}

impl Rule {
    /// Every rule, in report order.
    pub const ALL: [Rule; 7] = [
        Rule::Valid,
        Rule::Complete,
        Rule::CountryRules,
        Rule::CountryRules2,
        Rule::NoDuplicates,
        Rule::SameAdv,
        Rule::AllMatches,
    ];

    /// Field name used in serialized results.
    pub fn key(self) -> &'static str {
        match self {
            Rule::Valid => "valid",
            Rule::Complete => "complete",
            Rule::CountryRules => "country_rules",
            Rule::CountryRules2 => "country_rules2",
            Rule::NoDuplicates => "no_duplicates",
            Rule::SameAdv => "same_adv",
            Rule::AllMatches => "all_matches",
        }
    }

    /// Human-readable label for tables.
    pub fn label(self) -> &'static str {
        match self {
            Rule::Valid => "Valid",
            Rule::Complete => "Complete",
            Rule::CountryRules => "Country Rules (per-country cap)",
            Rule::CountryRules2 => "Country Rules 2 (no same country)",
            Rule::NoDuplicates => "No Duplicates",
            Rule::SameAdv => "Same Adversary",
            Rule::AllMatches => "All Matches",
        }
    }

    /// Weight in the composite score, in hundredths.
    pub fn weight(self) -> u32 {
        match self {
            Rule::Valid => weights::VALID,
            Rule::Complete => weights::COMPLETE,
            Rule::CountryRules => weights::COUNTRY_RULES,
            Rule::CountryRules2 => weights::COUNTRY_RULES2,
            Rule::NoDuplicates => weights::NO_DUPLICATES,
            Rule::SameAdv => weights::SAME_ADV,
            Rule::AllMatches => weights::ALL_MATCHES,
        }
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// One reason a rule failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Rule that was broken.
    pub rule:     Rule,
    /// Team whose record exposed the problem.
    pub team:     String,
    /// Opponent involved, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opponent: Option<String>,
    /// Explanation for humans.
    pub detail:   String,
}

impl Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.rule, self.team, self.detail)
    }
}

/// Graded outcome of one evaluation.
///
/// Every metric lies in `[0, 1]`. On the failure-to-evaluate path every
/// metric is zero, `error` is `1.0` and `error_message` says why.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawMetrics {
    /// Self-free and symmetric opponent relations.
    pub valid:          f64,
    /// `1.0` only if every team has both opponents.
    pub complete:       f64,
    /// Per-country caps respected.
    pub country_rules:  f64,
    /// No same-country opponents.
    pub country_rules2: f64,
    /// No pair of teams meets twice.
    pub no_duplicates:  f64,
    /// No repeated opponent within a team.
    pub same_adv:       f64,
    /// Fraction of teams with both opponents.
    pub all_matches:    f64,
    /// Weighted composite of the metrics above.
    pub combined_score: f64,
    /// `1.0` when the input could not be evaluated.
    pub error:          f64,
    /// Why the input could not be evaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message:  Option<String>,
    /// Individual rule violations found while scanning.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub violations:     Vec<Violation>,
}

impl DrawMetrics {
    /// The non-evaluable result: all metrics zero and the error flag set.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: 1.0,
            error_message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Whether this result reports a failure to evaluate.
    pub fn is_error(&self) -> bool {
        self.error > 0.0
    }

    /// Value of one rule's metric.
    pub fn value(&self, rule: Rule) -> f64 {
        match rule {
            Rule::Valid => self.valid,
            Rule::Complete => self.complete,
            Rule::CountryRules => self.country_rules,
            Rule::CountryRules2 => self.country_rules2,
            Rule::NoDuplicates => self.no_duplicates,
            Rule::SameAdv => self.same_adv,
            Rule::AllMatches => self.all_matches,
        }
    }

    /// Weighted composite of the rule metrics.
    ///
    /// Weights are summed as hundredths and divided once, so a schedule
    /// passing every rule scores exactly `1.0`.
    pub fn weighted_score(&self) -> f64 {
        let hundredths: f64 = Rule::ALL
            .iter()
            .map(|rule| f64::from(rule.weight()) * self.value(*rule))
            .sum();
        hundredths / 100.0
    }

    /// Violations of one rule.
    pub fn violations_of(&self, rule: Rule) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(move |v| v.rule == rule)
    }

    /// Table rows, one per rule.
    pub fn rows(&self) -> Vec<MetricRow> {
        Rule::ALL
            .iter()
            .map(|rule| MetricRow {
                metric: rule.label().to_string(),
                value:  format!("{:.4}", self.value(*rule)),
                weight: format!("{:.2}", f64::from(rule.weight()) / 100.0),
            })
            .collect()
    }

    /// Renders the metrics as a terminal table.
    pub fn table(&self) -> String {
        let footer = match &self.error_message {
            Some(message) => format!("Error: {message}"),
            None => format!("Total Score: {:.4}", self.combined_score),
        };

        Table::new(self.rows())
            .with(Panel::header("Evaluation Metrics"))
            .with(Panel::footer(footer))
            .with(Modify::new(Rows::new(1..)).with(Width::wrap(48).keep_words(true)))
            .with(
                Modify::new(Rows::first())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(Style::modern())
            .to_string()
    }
}

/// A display row of the metrics table.
#[derive(Tabled, Clone)]
pub struct MetricRow {
    #[tabled(rename = "Metric")]
    /// Rule label.
    pub metric: String,
    #[tabled(rename = "Value")]
    /// Metric value.
    pub value:  String,
    #[tabled(rename = "Weight")]
    /// Weight in the composite score.
    pub weight: String,
}
