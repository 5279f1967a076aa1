//! Label drift detection.
//!
//! Day boundaries are inferred by counting fixed 3-hour strides from the
//! first sample. A gap or an irregular step in the source data makes the
//! inferred bands drift away from the real calendar dates. Drift is
//! reported here, never corrected.

use std::fmt;

use forecast_common::ForecastSample;
use serde::Serialize;

use crate::segment::{Emphasis, Segment};

/// A sample inside a labeled band whose date differs from the band label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelDrift {
    pub segment_index: usize,
    pub sample_index: usize,
    /// The band's label
    pub expected: String,
    /// The sample's date
    pub found: String,
}

impl fmt::Display for LabelDrift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "band {} is labeled {:?} but sample {} is dated {:?}",
            self.segment_index, self.expected, self.sample_index, self.found
        )
    }
}

/// Compare every labeled band against the dates of the samples it covers.
///
/// Background bands are skipped even when they carry a label, since they
/// span the night and routinely cross midnight.
pub fn find_label_drift(samples: &[ForecastSample], segments: &[Segment]) -> Vec<LabelDrift> {
    let mut drift = Vec::new();

    for (segment_index, segment) in segments.iter().enumerate() {
        if segment.emphasis != Emphasis::Labeled || !segment.has_label() {
            continue;
        }
        for (sample_index, sample) in samples
            .iter()
            .enumerate()
            .take(segment.end_index)
            .skip(segment.start_index)
        {
            if sample.date != segment.label {
                drift.push(LabelDrift {
                    segment_index,
                    sample_index,
                    expected: segment.label.clone(),
                    found: sample.date.clone(),
                });
            }
        }
    }

    drift
}
