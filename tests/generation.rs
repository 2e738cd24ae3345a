use chrono::NaiveDate;
use followergen::generate::generate_with_source;
use followergen::output::{read_record, OUTPUT_FILE};
use followergen::record::parse_date;
use followergen::{generate_follower_data, ValueSource};
use std::collections::{HashSet, VecDeque};
use std::ops::RangeInclusive;

struct Scripted {
    queue: VecDeque<u32>,
    draws: usize,
}

impl Scripted {
    fn new(values: &[u32]) -> Self {
        Self {
            queue: values.iter().copied().collect(),
            draws: 0,
        }
    }
}

impl ValueSource for Scripted {
    fn draw(&mut self, range: RangeInclusive<u32>) -> u32 {
        assert_eq!(range, 0..=1_000_000);
        self.draws += 1;
        self.queue.pop_front().expect("script exhausted")
    }
}

fn day(text: &str) -> NaiveDate {
    parse_date(text).unwrap()
}

#[test]
fn scripted_values_fill_range_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(OUTPUT_FILE);
    let mut source = Scripted::new(&[500000, 500001, 500002, 500003, 500004, 500005]);

    let summary = generate_with_source(&path, &mut source).unwrap();

    assert_eq!(source.draws, 6, "no rejections expected");
    assert_eq!(summary.total_entries, 9);

    let record = read_record(&path).unwrap();
    let series = &record.followers_by_day;
    for (offset, text) in [
        "2026-01-04",
        "2026-01-05",
        "2026-01-06",
        "2026-01-07",
        "2026-01-08",
        "2026-01-09",
    ]
    .iter()
    .enumerate()
    {
        assert_eq!(series.get(day(text)), Some(500000 + offset as u32));
    }
}

#[test]
fn scripted_collision_with_seed_value_is_redrawn() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(OUTPUT_FILE);
    let mut source = Scripted::new(&[1000, 1, 2, 2, 3, 4, 5, 6]);

    generate_with_source(&path, &mut source).unwrap();

    assert_eq!(source.draws, 8);
    let record = read_record(&path).unwrap();
    assert_eq!(record.followers_by_day.get(day("2026-01-04")), Some(1));
    assert_eq!(record.followers_by_day.get(day("2026-01-09")), Some(6));
}

#[test]
fn random_run_satisfies_record_invariants() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(OUTPUT_FILE);

    generate_follower_data(&path).unwrap();

    let record = read_record(&path).unwrap();
    assert_eq!(record.start_date, day("2026-01-01"));

    let series = &record.followers_by_day;
    let days: Vec<NaiveDate> = series.days().collect();
    let expected: Vec<NaiveDate> = (1..=9)
        .map(|d| NaiveDate::from_ymd_opt(2026, 1, d).unwrap())
        .collect();
    assert_eq!(days, expected);

    assert_eq!(series.get(day("2026-01-01")), Some(0));
    assert_eq!(series.get(day("2026-01-02")), Some(10));
    assert_eq!(series.get(day("2026-01-03")), Some(1000));

    let values: HashSet<u32> = series.iter().map(|(_, count)| count).collect();
    assert_eq!(values.len(), series.len());
    assert!(values.iter().all(|v| *v <= 1_000_000));
}

#[test]
fn output_parses_as_plain_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(OUTPUT_FILE);

    generate_follower_data(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(object["startDate"].as_str(), Some("2026-01-01"));

    let followers = object["followersByDay"].as_object().unwrap();
    assert_eq!(followers.len(), 9);
    assert!(followers.values().all(|v| v.is_u64()));
    assert!(content.starts_with("{\n  \"startDate\""));
}

#[test]
fn reruns_keep_seed_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(OUTPUT_FILE);

    generate_follower_data(&path).unwrap();
    let first = read_record(&path).unwrap();
    generate_follower_data(&path).unwrap();
    let second = read_record(&path).unwrap();

    let seeds: Vec<(NaiveDate, u32)> = first.followers_by_day.iter().take(3).collect();
    let again: Vec<(NaiveDate, u32)> = second.followers_by_day.iter().take(3).collect();
    assert_eq!(seeds, again);
    assert_eq!(second.followers_by_day.len(), 9);
}
