use anyhow::Result;
use chrono::NaiveDate;
use std::ops::RangeInclusive;
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::dates::days_inclusive;
use crate::output::write_record;
use crate::record::{parse_date, seed_record, FollowerRecord, FollowerSeries};
use crate::values::{draw_unique, RngSource, ValueSource};

pub const RANGE_START: &str = "2026-01-04";
pub const RANGE_END: &str = "2026-01-09";
pub const MAX_FOLLOWERS: u32 = 1_000_000;

/// Which days to fill and which counts they may take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
    pub values: RangeInclusive<u32>,
}

impl GenerationPlan {
    pub fn standard() -> Result<Self> {
        Ok(Self {
            first_day: parse_date(RANGE_START)?,
            last_day: parse_date(RANGE_END)?,
            values: 0..=MAX_FOLLOWERS,
        })
    }
}

#[derive(Debug)]
pub struct GenerationSummary {
    pub generated: Vec<(NaiveDate, u32)>,
    pub total_entries: usize,
}

/// Sets each day to its positionally paired count, replacing existing days.
pub fn merge_generated(
    series: &mut FollowerSeries,
    days: &[NaiveDate],
    values: &[u32],
) -> Result<()> {
    if days.len() != values.len() {
        anyhow::bail!(
            "Cannot merge {} days with {} follower counts",
            days.len(),
            values.len()
        );
    }

    for (day, value) in days.iter().zip(values) {
        series.insert(*day, *value);
    }
    Ok(())
}

/// Fills every day of `plan` in `record` with a count unused anywhere else in
/// the record, returning the generated entries in date order.
pub fn populate<S: ValueSource + ?Sized>(
    record: &mut FollowerRecord,
    plan: &GenerationPlan,
    source: &mut S,
) -> Result<Vec<(NaiveDate, u32)>> {
    let days = days_inclusive(plan.first_day, plan.last_day);
    info!(
        action = "plan",
        component = "generator",
        first_day = %plan.first_day,
        last_day = %plan.last_day,
        day_count = days.len(),
        "Computed date range"
    );

    let mut used = record.followers_by_day.used_values();
    let values = draw_unique(source, days.len(), &mut used, plan.values.clone())?;

    merge_generated(&mut record.followers_by_day, &days, &values)?;

    Ok(days.into_iter().zip(values).collect())
}

pub fn generate_with_source<S: ValueSource + ?Sized>(
    output: &Path,
    source: &mut S,
) -> Result<GenerationSummary> {
    let total_start_time = Instant::now();
    info!(
        action = "start",
        component = "generator",
        "Starting follower data generation"
    );

    let mut record = seed_record()?;
    let plan = GenerationPlan::standard()?;
    let generated = populate(&mut record, &plan, source)?;

    write_record(output, &record)?;

    info!(
        action = "complete",
        component = "generator",
        duration_ms = total_start_time.elapsed().as_millis(),
        "Follower data generation completed"
    );

    Ok(GenerationSummary {
        generated,
        total_entries: record.followers_by_day.len(),
    })
}

/// Seeds a fresh record, fills the standard range with random counts and
/// writes it to `output`.
pub fn generate_follower_data(output: &Path) -> Result<GenerationSummary> {
    generate_with_source(output, &mut RngSource::thread())
}
