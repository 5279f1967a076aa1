//! Day-boundary segmentation of a 3-hourly forecast.
//!
//! The index axis `[0, N)` is split into alternating labeled day bands and
//! background bands. The first boundary comes from the first sample's
//! time-of-day token (see [`BoundaryAlignment`]); after that every band is
//! `buckets_per_label` samples long and the last one is clamped to `N`.

use std::fmt;
use std::str::FromStr;

use forecast_common::{ForecastError, ForecastResult, ForecastSample};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::alignment::BoundaryAlignment;
use crate::drift::find_label_drift;
use crate::segment::{Emphasis, Segment};

/// Default band length: four 3-hour buckets, i.e. twelve hours.
pub const DEFAULT_BUCKETS_PER_LABEL: usize = 4;

/// Which bands carry a day label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelMode {
    /// Every band is labeled with the date at its start
    All,
    /// Only the day bands are labeled; background bands stay blank
    #[default]
    Alternate,
}

impl FromStr for LabelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(LabelMode::All),
            "alternate" | "alt" => Ok(LabelMode::Alternate),
            other => Err(format!("unknown label mode '{}', expected 'all' or 'alternate'", other)),
        }
    }
}

impl fmt::Display for LabelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LabelMode::All => "all",
            LabelMode::Alternate => "alternate",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    pub buckets_per_label: usize,
    pub label_mode: LabelMode,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            buckets_per_label: DEFAULT_BUCKETS_PER_LABEL,
            label_mode: LabelMode::default(),
        }
    }
}

impl SegmenterConfig {
    pub fn validate(&self) -> ForecastResult<()> {
        if self.buckets_per_label == 0 {
            return Err(ForecastError::invalid_input("buckets_per_label must be at least 1"));
        }
        Ok(())
    }
}

/// Splits a forecast's index axis into day bands.
///
/// The segmenter holds only its configuration, so one instance can be
/// shared freely and reused for every document.
///
/// # Example
///
/// ```
/// use forecast_common::ForecastSample;
/// use strip_lines::{DayBoundarySegmenter, Emphasis};
///
/// let samples: Vec<_> = ["01 AM", "04 AM", "07 AM", "10 AM", "01 PM", "04 PM"]
///     .iter()
///     .map(|t| ForecastSample::new("Monday", *t))
///     .collect();
///
/// let segments = DayBoundarySegmenter::default().segment(&samples).unwrap();
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].range(), 0..4);
/// assert_eq!(segments[0].label, "Monday");
/// assert_eq!(segments[1].range(), 4..6);
/// assert_eq!(segments[1].emphasis, Emphasis::Background);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DayBoundarySegmenter {
    config: SegmenterConfig,
}

impl DayBoundarySegmenter {
    pub fn new(config: SegmenterConfig) -> ForecastResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn with_label_mode(label_mode: LabelMode) -> Self {
        Self {
            config: SegmenterConfig {
                label_mode,
                ..SegmenterConfig::default()
            },
        }
    }

    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Segment `samples` into day bands.
    ///
    /// Fails with `InvalidInput` when `samples` is empty or the first
    /// sample's time token has no known alignment. Bands whose label does
    /// not match the dates they cover are logged, not rejected; use
    /// [`segment_strict`](Self::segment_strict) to reject them.
    pub fn segment(&self, samples: &[ForecastSample]) -> ForecastResult<Vec<Segment>> {
        let segments = self.partition(samples)?;

        for drift in find_label_drift(samples, &segments) {
            warn!(
                segment = drift.segment_index,
                sample = drift.sample_index,
                expected = %drift.expected,
                found = %drift.found,
                "Day band label does not match sample date"
            );
        }

        Ok(segments)
    }

    /// Like [`segment`](Self::segment) but fails with `InvalidInput` when
    /// any labeled band covers a sample from a different date.
    pub fn segment_strict(&self, samples: &[ForecastSample]) -> ForecastResult<Vec<Segment>> {
        let segments = self.partition(samples)?;
        let drift = find_label_drift(samples, &segments);

        if let Some(first) = drift.first() {
            return Err(ForecastError::InvalidInput(format!(
                "{} sample(s) disagree with their day band; first: {}",
                drift.len(),
                first
            )));
        }

        Ok(segments)
    }

    fn partition(&self, samples: &[ForecastSample]) -> ForecastResult<Vec<Segment>> {
        self.config.validate()?;
        let stride = self.config.buckets_per_label;

        let first = samples
            .first()
            .ok_or_else(|| ForecastError::invalid_input("empty sample sequence"))?;
        let token = first.token()?;
        let alignment = BoundaryAlignment::for_first_token(&token).ok_or_else(|| {
            ForecastError::InvalidInput(format!(
                "no day boundary rule for first time token {:?}",
                first.time_of_day
            ))
        })?;

        let n = samples.len();
        let mut segments = Vec::with_capacity(n / stride + 2);

        if alignment.offset > 0 {
            segments.push(self.band(samples, 0, alignment.offset, Emphasis::Background));
        }

        let mut cursor = alignment.offset;
        let mut len = alignment.first_len.unwrap_or(stride);
        let mut emphasis = Emphasis::Labeled;
        while cursor < n {
            let end = cursor.saturating_add(len).min(n);
            segments.push(self.band(samples, cursor, end, emphasis));
            cursor = end;
            len = stride;
            emphasis = emphasis.flip();
        }

        debug!(
            samples = n,
            segments = segments.len(),
            alphabet = ?token.alphabet(),
            offset = alignment.offset,
            "Segmented forecast into day bands"
        );

        Ok(segments)
    }

    /// Build one band; `start` must be in range, `end` is clamped.
    fn band(&self, samples: &[ForecastSample], start: usize, end: usize, emphasis: Emphasis) -> Segment {
        let labeled = emphasis == Emphasis::Labeled || self.config.label_mode == LabelMode::All;
        let label = if labeled {
            samples[start].date.clone()
        } else {
            String::new()
        };
        Segment::new(start, end.min(samples.len()), label, emphasis)
    }
}
