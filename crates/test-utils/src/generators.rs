//! Generators for synthetic 3-hourly forecast sequences.
//!
//! Every generated sequence is gap-free and chronologically ordered, so day
//! labels derived by stride counting line up with the real calendar dates.
//! Wave values follow a predictable ramp so chart tests can check them.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use forecast_common::{Alphabet, ForecastDocument, ForecastEntry, ForecastSample, SwellComponent};

/// Hours between consecutive forecast buckets.
pub const BUCKET_HOURS: i64 = 3;

/// Shorthand for a timestamp on the hour.
///
/// # Example
///
/// ```
/// use test_utils::at;
///
/// let t = at(2024, 1, 15, 18);
/// assert_eq!(t.to_string(), "2024-01-15 18:00:00");
/// ```
pub fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .expect("valid test timestamp")
}

/// Formats the time-of-day token for `t` in the given alphabet.
///
/// # Example
///
/// ```
/// use forecast_common::Alphabet;
/// use test_utils::{at, time_token};
///
/// assert_eq!(time_token(at(2024, 1, 15, 19), Alphabet::Meridiem), "07 PM");
/// assert_eq!(time_token(at(2024, 1, 15, 6), Alphabet::ModelCycle), "06z");
/// ```
pub fn time_token(t: NaiveDateTime, alphabet: Alphabet) -> String {
    match alphabet {
        Alphabet::Meridiem => t.format("%I %p").to_string(),
        Alphabet::ModelCycle => format!("{:02}z", t.hour()),
    }
}

/// The document date label for `t`, e.g. "Monday 01/15".
pub fn date_label(t: NaiveDateTime) -> String {
    t.format("%A %m/%d").to_string()
}

/// Creates `count` document entries spaced three hours apart from `start`.
///
/// Entry `i` has a maximum breaking height of `1.0 + i * 0.25` feet and a
/// minimum of half that.
pub fn three_hourly_entries(start: NaiveDateTime, count: usize, alphabet: Alphabet) -> Vec<ForecastEntry> {
    (0..count)
        .map(|i| {
            let t = start + Duration::hours(BUCKET_HOURS * i as i64);
            let max = 1.0 + i as f64 * 0.25;
            ForecastEntry {
                date: date_label(t),
                time: time_token(t, alphabet),
                minimum_breaking_height: max / 2.0,
                maximum_breaking_height: max,
                wind_speed: 10.0 + i as f64,
                wind_direction: (i * 45 % 360) as f64,
                primary_swell_component: SwellComponent {
                    wave_height: max,
                    period: 8.0,
                    direction: 135.0,
                },
            }
        })
        .collect()
}

/// Creates `count` segmentation samples spaced three hours apart from `start`.
///
/// # Example
///
/// ```
/// use forecast_common::Alphabet;
/// use test_utils::{at, three_hourly_samples};
///
/// let samples = three_hourly_samples(at(2024, 1, 15, 1), 9, Alphabet::Meridiem);
/// assert_eq!(samples[0].date, "Monday");
/// assert_eq!(samples[0].time_of_day, "01 AM");
/// assert_eq!(samples[8].date, "Tuesday");
/// ```
pub fn three_hourly_samples(start: NaiveDateTime, count: usize, alphabet: Alphabet) -> Vec<ForecastSample> {
    three_hourly_entries(start, count, alphabet)
        .iter()
        .map(ForecastSample::from_entry)
        .collect()
}

/// Wraps generated entries in a document.
pub fn forecast_document(start: NaiveDateTime, count: usize, alphabet: Alphabet) -> ForecastDocument {
    ForecastDocument {
        location: None,
        model_run: None,
        forecast_data: three_hourly_entries(start, count, alphabet),
    }
}

/// Like [`three_hourly_samples`] but with `missing` buckets dropped at
/// `gap_index`, so every later sample is `3 * missing` hours further along
/// than its index says.
pub fn samples_with_gap(
    start: NaiveDateTime,
    count: usize,
    alphabet: Alphabet,
    gap_index: usize,
    missing: usize,
) -> Vec<ForecastSample> {
    let mut samples = three_hourly_samples(start, count + missing, alphabet);
    samples.drain(gap_index..gap_index + missing);
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_are_three_hours_apart() {
        let entries = three_hourly_entries(at(2024, 1, 15, 22), 3, Alphabet::Meridiem);
        let times: Vec<_> = entries.iter().map(|e| e.time.as_str()).collect();
        assert_eq!(times, vec!["10 PM", "01 AM", "04 AM"]);
        assert_eq!(entries[0].date, "Monday 01/15");
        assert_eq!(entries[1].date, "Tuesday 01/16");
    }

    #[test]
    fn test_model_cycle_tokens() {
        let samples = three_hourly_samples(at(2024, 1, 15, 18), 4, Alphabet::ModelCycle);
        let times: Vec<_> = samples.iter().map(|s| s.time_of_day.as_str()).collect();
        assert_eq!(times, vec!["18z", "21z", "00z", "03z"]);
    }

    #[test]
    fn test_wave_ramp() {
        let entries = three_hourly_entries(at(2024, 1, 15, 1), 3, Alphabet::Meridiem);
        assert_eq!(entries[2].maximum_breaking_height, 1.5);
        assert_eq!(entries[2].minimum_breaking_height, 0.75);
    }

    #[test]
    fn test_gap_skips_one_bucket() {
        let samples = samples_with_gap(at(2024, 1, 15, 1), 5, Alphabet::Meridiem, 2, 1);
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[1].time_of_day, "04 AM");
        assert_eq!(samples[2].time_of_day, "10 AM");
    }
}
