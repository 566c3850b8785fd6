use std::collections::BTreeMap;

use drawgrade::Schedule;

#[test]
fn names_are_trimmed() {
    let schedule = Schedule::from_opponents([(" Ajax ", vec![" Monaco", "Basel  "])]);

    assert!(schedule.contains("Ajax"));
    assert_eq!(
        schedule.opponents("Ajax"),
        Some(&["Monaco".to_string(), "Basel".to_string()][..])
    );
}

#[test]
fn later_record_replaces_earlier() {
    let schedule = Schedule::from_opponents([("Ajax", vec!["Monaco"]), ("Ajax", vec!["Basel"])]);

    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule.opponents("Ajax"), Some(&["Basel".to_string()][..]));
}

#[test]
fn pot_groups_flatten_in_label_order() {
    let mut home = BTreeMap::new();
    home.insert("2".to_string(), vec!["Basel".to_string()]);
    home.insert("1".to_string(), vec!["Monaco".to_string()]);

    let schedule = Schedule::from_pot_groups([("Ajax", home)]);
    assert_eq!(
        schedule.opponents("Ajax"),
        Some(&["Monaco".to_string(), "Basel".to_string()][..])
    );
}

#[test]
fn collects_from_iterator() {
    let schedule: Schedule = [("Ajax", vec!["Monaco"]), ("Monaco", vec!["Ajax"])]
        .into_iter()
        .collect();

    let teams: Vec<&str> = schedule.iter().map(|(team, _)| team).collect();
    assert_eq!(teams, ["Ajax", "Monaco"]);
    assert!(!schedule.is_empty());
    assert_eq!(schedule.opponents("Basel"), None);
}
