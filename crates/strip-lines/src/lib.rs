//! Day-boundary strip lines for 3-hourly forecast charts.
//!
//! A forecast chart plots one point per 3-hour bucket on a plain index
//! axis. To show which buckets belong to which day, the axis is covered by
//! alternating vertical bands, each labeled with the day it spans. This
//! crate computes those bands and the rest of the chart payload.
//!
//! # Example
//!
//! ```rust
//! use forecast_common::ForecastSample;
//! use strip_lines::{DayBoundarySegmenter, Emphasis, LabelMode};
//!
//! let samples: Vec<_> = ["00z", "03z", "06z", "09z", "12z", "15z"]
//!     .iter()
//!     .map(|t| ForecastSample::new("Thursday", *t))
//!     .collect();
//!
//! let segmenter = DayBoundarySegmenter::with_label_mode(LabelMode::Alternate);
//! let segments = segmenter.segment(&samples).unwrap();
//!
//! assert_eq!(segments[0].range(), 0..2);
//! assert_eq!(segments[0].emphasis, Emphasis::Background);
//! assert_eq!(segments[1].range(), 2..6);
//! assert_eq!(segments[1].label, "Thursday");
//! ```

pub mod alignment;
pub mod chart;
pub mod drift;
pub mod label;
pub mod segment;
pub mod segmenter;
pub mod series;

pub use alignment::BoundaryAlignment;
pub use chart::{assemble_chart, build_chart, ChartDocument, ChartOptions, StripLine, StripLineBuilder};
pub use drift::{find_label_drift, LabelDrift};
pub use label::{DisplayWidth, FormattedLabel, LabelPolicy};
pub use segment::{Emphasis, Segment};
pub use segmenter::{DayBoundarySegmenter, LabelMode, SegmenterConfig, DEFAULT_BUCKETS_PER_LABEL};
pub use series::{build_series, ChartPoint};
