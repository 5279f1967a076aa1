//! Common test fixtures for forecast-strips tests.
//!
//! This module provides pre-defined documents and token lists that
//! represent the shapes the forecast source actually serves.

/// Time-of-day tokens for each first-sample alignment case.
pub mod tokens {
    /// First tokens with a known day-boundary alignment
    pub const ALIGNED: [&str; 6] = ["01 AM", "02 AM", "06z", "00z", "18z", "12z"];

    /// Well-formed tokens that have no alignment rule for a first sample
    pub const UNALIGNED: [&str; 5] = ["03 AM", "04 AM", "07 PM", "03z", "09z"];

    /// Tokens that belong to neither alphabet
    pub const MALFORMED: [&str; 4] = ["", "noon", "0100", "1:00 AM"];
}

/// Model-cycle forecast starting at 00z, ten buckets, with location and
/// model-run metadata.
pub const MODEL_CYCLE_DOCUMENT: &str = r#"{
  "Location": { "Latitude": 41.395, "Longitude": -71.453, "LocationName": "Narragansett" },
  "ModelRun": "20240229 00z",
  "ForecastData": [
    { "Date": "Thursday 02/29", "Time": "00z", "MinimumBreakingHeight": 1.2, "MaximumBreakingHeight": 2.04,
      "WindSpeed": 12.5, "WindDirection": 225.0,
      "PrimarySwellComponent": { "WaveHeight": 2.3, "Period": 8.1, "Direction": 145.0 } },
    { "Date": "Thursday 02/29", "Time": "03z", "MinimumBreakingHeight": 1.3, "MaximumBreakingHeight": 2.2,
      "WindSpeed": 11.0, "WindDirection": 230.0,
      "PrimarySwellComponent": { "WaveHeight": 2.4, "Period": 8.3, "Direction": 146.0 } },
    { "Date": "Thursday 02/29", "Time": "06z", "MinimumBreakingHeight": 1.5, "MaximumBreakingHeight": 2.5,
      "WindSpeed": 9.0, "WindDirection": 240.0,
      "PrimarySwellComponent": { "WaveHeight": 2.6, "Period": 8.5, "Direction": 147.0 } },
    { "Date": "Thursday 02/29", "Time": "09z", "MinimumBreakingHeight": 1.6, "MaximumBreakingHeight": 2.75,
      "WindSpeed": 8.0, "WindDirection": 250.0,
      "PrimarySwellComponent": { "WaveHeight": 2.7, "Period": 9.0, "Direction": 148.0 } },
    { "Date": "Thursday 02/29", "Time": "12z", "MinimumBreakingHeight": 1.8, "MaximumBreakingHeight": 3.0,
      "WindSpeed": 7.5, "WindDirection": 260.0,
      "PrimarySwellComponent": { "WaveHeight": 2.9, "Period": 9.2, "Direction": 150.0 } },
    { "Date": "Thursday 02/29", "Time": "15z", "MinimumBreakingHeight": 1.9, "MaximumBreakingHeight": 3.1,
      "WindSpeed": 7.0, "WindDirection": 270.0,
      "PrimarySwellComponent": { "WaveHeight": 3.0, "Period": 9.5, "Direction": 151.0 } },
    { "Date": "Thursday 02/29", "Time": "18z", "MinimumBreakingHeight": 2.0, "MaximumBreakingHeight": 3.333,
      "WindSpeed": 6.0, "WindDirection": 280.0,
      "PrimarySwellComponent": { "WaveHeight": 3.1, "Period": 10.0, "Direction": 152.0 } },
    { "Date": "Thursday 02/29", "Time": "21z", "MinimumBreakingHeight": 1.9, "MaximumBreakingHeight": 3.2,
      "WindSpeed": 6.5, "WindDirection": 290.0,
      "PrimarySwellComponent": { "WaveHeight": 3.0, "Period": 10.2, "Direction": 153.0 } },
    { "Date": "Friday 03/01", "Time": "00z", "MinimumBreakingHeight": 1.7, "MaximumBreakingHeight": 2.9,
      "WindSpeed": 8.0, "WindDirection": 300.0,
      "PrimarySwellComponent": { "WaveHeight": 2.8, "Period": 10.0, "Direction": 152.0 } },
    { "Date": "Friday 03/01", "Time": "03z", "MinimumBreakingHeight": 1.5, "MaximumBreakingHeight": 2.6,
      "WindSpeed": 9.5, "WindDirection": 310.0,
      "PrimarySwellComponent": { "WaveHeight": 2.6, "Period": 9.8, "Direction": 150.0 } }
  ]
}"#;

/// A document whose first bucket has no alignment rule.
pub const UNALIGNED_DOCUMENT: &str = r#"{
  "ForecastData": [
    { "Date": "Monday 01/15", "Time": "03 AM", "MaximumBreakingHeight": 1.0 },
    { "Date": "Monday 01/15", "Time": "06 AM", "MaximumBreakingHeight": 1.1 }
  ]
}"#;

/// A document with no buckets at all.
pub const EMPTY_DOCUMENT: &str = r#"{ "ForecastData": [] }"#;
