//! Day-boundary alignment of the first forecast bucket.
//!
//! The first sample's time-of-day token says how far into the current
//! 12-hour period the forecast starts. Only a handful of starting tokens
//! occur in practice; anything else means the upstream format changed.

use forecast_common::{ModelCycle, TimeToken};

/// Where the first labeled band starts, in buckets from index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryAlignment {
    /// Buckets before the first day boundary
    pub offset: usize,
    /// Length of the first labeled band when it is shorter than a full stride
    pub first_len: Option<usize>,
}

impl BoundaryAlignment {
    const fn new(offset: usize, first_len: Option<usize>) -> Self {
        Self { offset, first_len }
    }

    /// Alignment for a forecast whose first bucket carries `token`.
    ///
    /// | first token          | offset | first band length |
    /// |----------------------|--------|-------------------|
    /// | 01 AM, 02 AM, 06z    | 0      | full              |
    /// | 00z                  | 2      | full              |
    /// | 18z                  | 4      | full              |
    /// | 12z                  | 0      | 2                 |
    pub fn for_first_token(token: &TimeToken) -> Option<Self> {
        match *token {
            // 02 AM is the 01 AM bucket shifted by daylight saving
            TimeToken::Meridiem { hour: 1 | 2, pm: false } => Some(Self::new(0, None)),
            TimeToken::Meridiem { .. } => None,
            TimeToken::ModelCycle { .. } => match ModelCycle::from_token(token)? {
                ModelCycle::Z06 => Some(Self::new(0, None)),
                ModelCycle::Z00 => Some(Self::new(2, None)),
                ModelCycle::Z18 => Some(Self::new(4, None)),
                ModelCycle::Z12 => Some(Self::new(0, Some(2))),
            },
        }
    }
}
