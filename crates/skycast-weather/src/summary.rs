//! Collapses the provider's 3-hour forecast series into at most seven
//! day/night summaries, one per local calendar date.

use std::collections::HashMap;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Timelike};

use crate::error::WeatherError;
use crate::types::{DailyForecast, ForecastSample};

/// Daytime window, local hours, both ends inclusive.
const DAY_START_HOUR: u32 = 6;
const DAY_END_HOUR: u32 = 18;

/// Maximum number of daily entries produced.
const MAX_DAYS: usize = 7;

struct DateBuckets<'a> {
    /// Earliest sample of the date in input order; the fallback source
    /// when a window bucket is empty, and the date's representative
    /// timestamp.
    first: &'a ForecastSample,
    day: Vec<&'a ForecastSample>,
    night: Vec<&'a ForecastSample>,
}

/// Summarize a chronologically ordered forecast series.
///
/// Samples are grouped by local calendar date in one pass and each date
/// is split into a day bucket (local hour 6-18 inclusive) and a night
/// bucket. Day temperature is the day bucket's maximum `temp_max`,
/// night temperature the night bucket's minimum `temp_min`; conditions
/// come from each bucket's middle element. An empty bucket falls back
/// to the date's first sample. Output keeps the order dates first
/// appear in and is truncated to the first seven.
pub fn summarize(samples: &[ForecastSample]) -> Result<Vec<DailyForecast>, WeatherError> {
    let mut dates: Vec<NaiveDate> = Vec::new();
    let mut buckets: HashMap<NaiveDate, DateBuckets<'_>> = HashMap::new();

    for sample in samples {
        let at = local_time(sample.dt)?;
        let date = at.date_naive();

        let entry = buckets.entry(date).or_insert_with(|| {
            dates.push(date);
            DateBuckets {
                first: sample,
                day: Vec::new(),
                night: Vec::new(),
            }
        });

        if is_day_hour(at.hour()) {
            entry.day.push(sample);
        } else {
            entry.night.push(sample);
        }
    }

    let daily = dates
        .into_iter()
        .take(MAX_DAYS)
        .filter_map(|date| buckets.get(&date))
        .map(summarize_date)
        .collect();

    Ok(daily)
}

fn summarize_date(bucket: &DateBuckets<'_>) -> DailyForecast {
    let day_temp = bucket
        .day
        .iter()
        .map(|s| s.temp_max)
        .fold(f64::NEG_INFINITY, f64::max);
    let day_temp = if bucket.day.is_empty() {
        bucket.first.temp_max
    } else {
        day_temp
    };

    let night_temp = bucket
        .night
        .iter()
        .map(|s| s.temp_min)
        .fold(f64::INFINITY, f64::min);
    let night_temp = if bucket.night.is_empty() {
        bucket.first.temp_min
    } else {
        night_temp
    };

    // Middle element by floor division: even-length buckets pick the
    // element just past the midpoint.
    let day_conditions = bucket
        .day
        .get(bucket.day.len() / 2)
        .map(|s| s.conditions.clone())
        .unwrap_or_else(|| bucket.first.conditions.clone());

    let night_conditions = bucket
        .night
        .get(bucket.night.len() / 2)
        .map(|s| s.conditions.clone())
        .unwrap_or_else(|| bucket.first.conditions.clone());

    DailyForecast {
        dt: bucket.first.dt,
        day_temp,
        night_temp,
        day_conditions,
        night_conditions,
    }
}

fn is_day_hour(hour: u32) -> bool {
    (DAY_START_HOUR..=DAY_END_HOUR).contains(&hour)
}

fn local_time(dt: i64) -> Result<DateTime<Local>, WeatherError> {
    Local
        .timestamp_opt(dt, 0)
        .single()
        .ok_or(WeatherError::InvalidTimestamp(dt))
}
