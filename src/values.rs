use anyhow::Result;
use rand::Rng;
use std::collections::HashSet;
use std::ops::RangeInclusive;
use std::time::Instant;
use tracing::{debug, info};

/// Anything that can draw a follower count from an inclusive range.
///
/// Implementations must only return values inside `range`.
pub trait ValueSource {
    fn draw(&mut self, range: RangeInclusive<u32>) -> u32;
}

/// A [`ValueSource`] backed by a `rand` generator, drawing uniformly.
#[derive(Debug)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<rand::rngs::ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> ValueSource for RngSource<R> {
    fn draw(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.rng.gen_range(range)
    }
}

/// Draws `count` values from `range` that are not in `used`, adding each
/// accepted value to `used`.
///
/// Collisions are redrawn without limit, so the expected number of draws
/// grows as `used` fills the range. A request that can never be satisfied is
/// refused up front.
pub fn draw_unique<S: ValueSource + ?Sized>(
    source: &mut S,
    count: usize,
    used: &mut HashSet<u32>,
    range: RangeInclusive<u32>,
) -> Result<Vec<u32>> {
    let start_time = Instant::now();

    if range.is_empty() {
        anyhow::bail!(
            "Value range {}..={} is empty",
            range.start(),
            range.end()
        );
    }

    let range_size = u64::from(*range.end() - *range.start()) + 1;
    let taken = used.iter().filter(|value| range.contains(*value)).count() as u64;
    let available = range_size - taken;
    if count as u64 > available {
        anyhow::bail!(
            "Cannot draw {} unique values from {}..={}: only {} unused values remain",
            count,
            range.start(),
            range.end(),
            available
        );
    }

    let mut values = Vec::with_capacity(count);
    let mut rejections: u64 = 0;
    for _ in 0..count {
        let value = loop {
            let candidate = source.draw(range.clone());
            if used.insert(candidate) {
                break candidate;
            }
            rejections += 1;
            debug!(
                action = "reject",
                component = "value_sampling",
                candidate = candidate,
                "Drew a value that is already used"
            );
        };
        values.push(value);
    }

    info!(
        action = "complete",
        component = "value_sampling",
        count = values.len(),
        rejections = rejections,
        duration_ms = start_time.elapsed().as_millis(),
        "Drew unique follower counts"
    );
    Ok(values)
}
