//! Time-of-day bucket tokens for 3-hourly forecast samples.
//!
//! Forecast sources label each sample with one of two alphabets:
//! surface/buoy forecasts use 12-hour tokens ("01 AM", "07 PM") while
//! model-cycle forecasts use "00z", "03z", ... tokens. The alphabet is
//! detected from the token shape.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Which token alphabet a time-of-day label belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alphabet {
    /// "HH AM" / "HH PM"
    Meridiem,
    /// "HHz"
    ModelCycle,
}

/// A parsed time-of-day bucket label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeToken {
    /// 12-hour clock token, `hour` in 1..=12
    Meridiem { hour: u32, pm: bool },
    /// UTC hour token, `hour` in 0..=23
    ModelCycle { hour: u32 },
}

impl TimeToken {
    /// Parse a raw time-of-day label.
    pub fn parse(s: &str) -> Result<Self, TimeTokenError> {
        let s = s.trim();

        if let Some(digits) = s.strip_suffix(['z', 'Z']) {
            if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(TimeTokenError::Unrecognized(s.to_string()));
            }
            let hour: u32 = digits
                .parse()
                .map_err(|_| TimeTokenError::Unrecognized(s.to_string()))?;
            if hour > 23 {
                return Err(TimeTokenError::OutOfRange(s.to_string()));
            }
            return Ok(TimeToken::ModelCycle { hour });
        }

        let mut parts = s.split_whitespace();
        let (Some(hh), Some(meridiem), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(TimeTokenError::Unrecognized(s.to_string()));
        };
        let meridiem = meridiem.to_ascii_uppercase();
        if meridiem != "AM" && meridiem != "PM" {
            return Err(TimeTokenError::Unrecognized(s.to_string()));
        }
        if hh.is_empty() || hh.len() > 2 || !hh.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TimeTokenError::Unrecognized(s.to_string()));
        }

        // %I only accepts 1..=12
        let time = NaiveTime::parse_from_str(&format!("{}:00 {}", hh, meridiem), "%I:%M %p")
            .map_err(|_| TimeTokenError::OutOfRange(s.to_string()))?;
        let pm = time.hour() >= 12;
        let hour = match time.hour() % 12 {
            0 => 12,
            h => h,
        };
        Ok(TimeToken::Meridiem { hour, pm })
    }

    pub fn alphabet(&self) -> Alphabet {
        match self {
            TimeToken::Meridiem { .. } => Alphabet::Meridiem,
            TimeToken::ModelCycle { .. } => Alphabet::ModelCycle,
        }
    }
}

impl FromStr for TimeToken {
    type Err = TimeTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeToken::parse(s)
    }
}

impl fmt::Display for TimeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeToken::Meridiem { hour, pm } => {
                write!(f, "{:02} {}", hour, if *pm { "PM" } else { "AM" })
            }
            TimeToken::ModelCycle { hour } => write!(f, "{:02}z", hour),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeTokenError {
    #[error("Unrecognized time-of-day token: {0:?}")]
    Unrecognized(String),

    #[error("Time-of-day token out of range: {0:?}")]
    OutOfRange(String),
}

impl From<TimeTokenError> for crate::ForecastError {
    fn from(err: TimeTokenError) -> Self {
        crate::ForecastError::InvalidInput(err.to_string())
    }
}

/// The four synoptic hours a model-cycle forecast can start on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelCycle {
    /// 00Z run
    Z00,
    /// 06Z run
    Z06,
    /// 12Z run
    Z12,
    /// 18Z run
    Z18,
}

impl ModelCycle {
    pub fn from_hour(hour: u32) -> Option<Self> {
        match hour {
            0 => Some(ModelCycle::Z00),
            6 => Some(ModelCycle::Z06),
            12 => Some(ModelCycle::Z12),
            18 => Some(ModelCycle::Z18),
            _ => None,
        }
    }

    /// The cycle named by a model-cycle token, if it is one of the four
    /// synoptic hours.
    pub fn from_token(token: &TimeToken) -> Option<Self> {
        match *token {
            TimeToken::ModelCycle { hour } => Self::from_hour(hour),
            TimeToken::Meridiem { .. } => None,
        }
    }
}
