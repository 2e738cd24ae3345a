use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const SEED_START_DATE: &str = "2026-01-01";

pub const SEED_FOLLOWERS: [(&str, u32); 3] =
    [("2026-01-01", 0), ("2026-01-02", 10), ("2026-01-03", 1000)];

pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .with_context(|| format!("Invalid calendar date: {:?}", text))
}

/// Follower counts keyed by day, kept in insertion order.
///
/// Serializes as a JSON object whose keys are `YYYY-MM-DD` strings. Inserting
/// a day that is already present replaces its count in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FollowerSeries {
    entries: Vec<(NaiveDate, u32)>,
}

impl FollowerSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the previous count when `day` was already present.
    pub fn insert(&mut self, day: NaiveDate, followers: u32) -> Option<u32> {
        match self.entries.iter_mut().find(|(existing, _)| *existing == day) {
            Some((_, count)) => Some(std::mem::replace(count, followers)),
            None => {
                self.entries.push((day, followers));
                None
            }
        }
    }

    pub fn get(&self, day: NaiveDate) -> Option<u32> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == day)
            .map(|(_, count)| *count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, u32)> + '_ {
        self.entries.iter().copied()
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.entries.iter().map(|(day, _)| *day)
    }

    /// Every count currently in the series.
    pub fn used_values(&self) -> HashSet<u32> {
        self.entries.iter().map(|(_, count)| *count).collect()
    }
}

impl Serialize for FollowerSeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (day, count) in &self.entries {
            map.serialize_entry(&day.format(DATE_FORMAT).to_string(), count)?;
        }
        map.end()
    }
}

struct SeriesVisitor;

impl<'de> Visitor<'de> for SeriesVisitor {
    type Value = FollowerSeries;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping YYYY-MM-DD dates to follower counts")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut series = FollowerSeries::new();
        while let Some((key, count)) = access.next_entry::<String, u32>()? {
            let day = NaiveDate::parse_from_str(&key, DATE_FORMAT).map_err(|e| {
                serde::de::Error::custom(format!("invalid date key {:?}: {}", key, e))
            })?;
            series.insert(day, count);
        }
        Ok(series)
    }
}

impl<'de> Deserialize<'de> for FollowerSeries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SeriesVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowerRecord {
    pub start_date: NaiveDate,
    pub followers_by_day: FollowerSeries,
}

/// The record every run starts from.
pub fn seed_record() -> Result<FollowerRecord> {
    let mut followers_by_day = FollowerSeries::new();
    for (day, count) in SEED_FOLLOWERS {
        followers_by_day.insert(parse_date(day)?, count);
    }

    Ok(FollowerRecord {
        start_date: parse_date(SEED_START_DATE)?,
        followers_by_day,
    })
}
