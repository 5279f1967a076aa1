//! Forecast document model.
//!
//! The forecast source serves a JSON document with PascalCase keys and a
//! `ForecastData` array holding one entry per 3-hour bucket. Only `Date`
//! and `Time` are needed for day segmentation; the wave and wind fields
//! feed the chart value series.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, ForecastResult};
use crate::time::{TimeToken, TimeTokenError};

/// A complete forecast document as served to the chart page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ForecastDocument {
    #[serde(default)]
    pub location: Option<ForecastLocation>,

    /// Model run identifier, e.g. "20240115 12z"
    #[serde(default)]
    pub model_run: Option<String>,

    pub forecast_data: Vec<ForecastEntry>,
}

impl ForecastDocument {
    /// Load a document from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> ForecastResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a document from a JSON string.
    pub fn from_json(json: &str) -> ForecastResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Segmentation inputs, in document order.
    pub fn samples(&self) -> Vec<ForecastSample> {
        self.forecast_data.iter().map(ForecastSample::from_entry).collect()
    }

    pub fn len(&self) -> usize {
        self.forecast_data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forecast_data.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ForecastLocation {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub location_name: String,
}

/// One 3-hour bucket of the forecast.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ForecastEntry {
    /// Calendar label, e.g. "Monday 01/15"
    pub date: String,
    /// Time-of-day bucket, e.g. "07 PM" or "18z"
    pub time: String,
    #[serde(default)]
    pub minimum_breaking_height: f64,
    #[serde(default)]
    pub maximum_breaking_height: f64,
    #[serde(default)]
    pub wind_speed: f64,
    #[serde(default)]
    pub wind_direction: f64,
    #[serde(default)]
    pub primary_swell_component: SwellComponent,
}

impl ForecastEntry {
    /// The day portion of the date label: the text before the first space.
    pub fn day(&self) -> &str {
        first_token(&self.date)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SwellComponent {
    #[serde(default)]
    pub wave_height: f64,
    #[serde(default)]
    pub period: f64,
    #[serde(default)]
    pub direction: f64,
}

/// The two fields of a forecast bucket that day segmentation reads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ForecastSample {
    pub date: String,
    pub time_of_day: String,
}

impl ForecastSample {
    pub fn new(date: impl Into<String>, time_of_day: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time_of_day: time_of_day.into(),
        }
    }

    /// Build a sample from a document entry, keeping only the day portion
    /// of the date label.
    pub fn from_entry(entry: &ForecastEntry) -> Self {
        Self::new(entry.day(), entry.time.as_str())
    }

    pub fn token(&self) -> Result<TimeToken, TimeTokenError> {
        TimeToken::parse(&self.time_of_day)
    }
}

impl TryFrom<&ForecastSample> for TimeToken {
    type Error = ForecastError;

    fn try_from(sample: &ForecastSample) -> Result<Self, Self::Error> {
        Ok(sample.token()?)
    }
}

fn first_token(s: &str) -> &str {
    s.split(' ').next().unwrap_or("")
}
