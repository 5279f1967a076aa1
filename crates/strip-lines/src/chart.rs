//! Renderer-facing chart payload.
//!
//! Segments become strip lines: vertical bands on the chart's index axis
//! with fill and label styling taken from a [`BandPalette`]. Together with
//! the value series they form a [`ChartDocument`] that a charting library
//! can consume directly.

use forecast_common::{BandPalette, Color, ForecastDocument, ForecastResult};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::label::{DisplayWidth, LabelPolicy};
use crate::segment::{Emphasis, Segment};
use crate::segmenter::DayBoundarySegmenter;
use crate::series::{build_series, ChartPoint};

/// A vertical band on the chart's index axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StripLine {
    pub start_value: usize,
    pub end_value: usize,
    pub color: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_font_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_font_size: Option<u32>,
}

/// Turns segments into styled strip lines.
#[derive(Debug, Clone)]
pub struct StripLineBuilder<'a> {
    policy: &'a LabelPolicy,
    palette: &'a BandPalette,
    width: DisplayWidth,
}

impl<'a> StripLineBuilder<'a> {
    pub fn new(policy: &'a LabelPolicy, palette: &'a BandPalette, width: DisplayWidth) -> Self {
        Self { policy, palette, width }
    }

    pub fn strip_line(&self, segment: &Segment) -> StripLine {
        let color = match segment.emphasis {
            Emphasis::Labeled => self.palette.labeled_fill,
            Emphasis::Background => self.palette.background_fill,
        };

        if !segment.has_label() {
            return StripLine {
                start_value: segment.start_index,
                end_value: segment.end_index,
                color,
                label: None,
                label_background_color: None,
                label_font_color: None,
                label_font_size: None,
            };
        }

        let formatted = self.policy.format(&segment.label, self.width);
        StripLine {
            start_value: segment.start_index,
            end_value: segment.end_index,
            color,
            label: Some(formatted.text),
            label_background_color: Some(self.palette.label_background),
            label_font_color: Some(self.palette.label_font),
            label_font_size: Some(formatted.font_size),
        }
    }

    pub fn build(&self, segments: &[Segment]) -> Vec<StripLine> {
        segments.iter().map(|s| self.strip_line(s)).collect()
    }
}

/// Presentation settings for [`build_chart`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    pub title: String,
    pub label_policy: LabelPolicy,
    pub palette: BandPalette,
    pub display_width: DisplayWidth,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: "Wave Height (ft)".to_string(),
            label_policy: LabelPolicy::default(),
            palette: BandPalette::default(),
            display_width: DisplayWidth::viewport(1024),
        }
    }
}

/// Everything a chart renderer needs for one forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDocument {
    pub title: String,
    /// Axis interval, one tick per band
    pub interval: usize,
    pub series_color: Color,
    pub strip_lines: Vec<StripLine>,
    pub data_points: Vec<ChartPoint>,
}

/// Segment a forecast document and assemble its chart payload.
///
/// Fails when segmentation fails or the label policy is invalid; no
/// partial chart is produced.
pub fn build_chart(
    doc: &ForecastDocument,
    segmenter: &DayBoundarySegmenter,
    options: &ChartOptions,
) -> ForecastResult<ChartDocument> {
    let segments = segmenter.segment(&doc.samples())?;
    assemble_chart(doc, &segments, segmenter.config().buckets_per_label, options)
}

/// Assemble a chart payload from segments computed elsewhere.
pub fn assemble_chart(
    doc: &ForecastDocument,
    segments: &[Segment],
    interval: usize,
    options: &ChartOptions,
) -> ForecastResult<ChartDocument> {
    options.label_policy.validate()?;

    let strip_lines =
        StripLineBuilder::new(&options.label_policy, &options.palette, options.display_width).build(segments);
    let data_points = build_series(&doc.forecast_data);

    info!(
        buckets = doc.len(),
        strip_lines = strip_lines.len(),
        interval,
        "Built forecast chart"
    );

    Ok(ChartDocument {
        title: options.title.clone(),
        interval,
        series_color: options.palette.series,
        strip_lines,
        data_points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlabeled_band_has_no_label_fields() {
        let policy = LabelPolicy::default();
        let palette = BandPalette::default();
        let builder = StripLineBuilder::new(&policy, &palette, DisplayWidth::viewport(800));

        let line = builder.strip_line(&Segment::new(4, 8, "", Emphasis::Background));
        assert_eq!(line.color, palette.background_fill);
        assert!(line.label.is_none());

        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["startValue"], 4);
        assert_eq!(json["color"], "#F2F2F2");
        assert!(json.get("label").is_none());
        assert!(json.get("labelFontSize").is_none());
    }

    #[test]
    fn test_labeled_band_is_formatted() {
        let policy = LabelPolicy::default();
        let palette = BandPalette::default();
        let builder = StripLineBuilder::new(&policy, &palette, DisplayWidth::viewport(500));

        let line = builder.strip_line(&Segment::new(0, 4, "Thursday", Emphasis::Labeled));
        assert_eq!(line.label.as_deref(), Some("Thu"));
        assert_eq!(line.label_font_size, Some(12));
        assert_eq!(line.color, palette.labeled_fill);

        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["labelFontColor"], "#838383");
        assert_eq!(json["labelBackgroundColor"], "#FFFFFF");
    }

    #[test]
    fn test_labeled_background_band_keeps_background_fill() {
        let policy = LabelPolicy::default();
        let palette = BandPalette::default();
        let builder = StripLineBuilder::new(&policy, &palette, DisplayWidth::viewport(800));

        let line = builder.strip_line(&Segment::new(0, 2, "Thursday", Emphasis::Background));
        assert_eq!(line.color, palette.background_fill);
        assert_eq!(line.label.as_deref(), Some("Thursday"));
    }
}
