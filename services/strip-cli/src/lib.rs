//! Forecast document to chart JSON.
//!
//! Reads a forecast document, segments its buckets into day bands and
//! writes the chart payload. Used by the `strip-cli` binary.

pub mod config;

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use forecast_common::ForecastDocument;
use strip_lines::{assemble_chart, ChartDocument, DayBoundarySegmenter};
use tracing::{info, warn};

pub use config::{Overrides, StripConfig};

/// Where the forecast document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// `None` and `-` mean stdin.
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            Some(path) if path.as_os_str() != "-" => Input::File(path),
            _ => Input::Stdin,
        }
    }
}

pub fn read_document(input: &Input) -> Result<ForecastDocument> {
    let doc = match input {
        Input::File(path) => ForecastDocument::from_file(path)
            .with_context(|| format!("Failed to load forecast document: {:?}", path))?,
        Input::Stdin => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read forecast document from stdin")?;
            ForecastDocument::from_json(&content).context("Failed to parse forecast document from stdin")?
        }
    };

    info!(
        buckets = doc.len(),
        location = doc.location.as_ref().map(|l| l.location_name.as_str()).unwrap_or(""),
        model_run = doc.model_run.as_deref().unwrap_or(""),
        "Loaded forecast document"
    );
    Ok(doc)
}

/// Segment `doc` and build its chart.
///
/// In strict mode any day band whose label disagrees with the dates it
/// covers fails the whole run.
pub fn render(doc: &ForecastDocument, config: &StripConfig, strict: bool) -> Result<ChartDocument> {
    config.validate()?;

    let segmenter = DayBoundarySegmenter::new(config.segmenter.clone())?;
    let samples = doc.samples();
    let segments = if strict {
        segmenter.segment_strict(&samples)
    } else {
        segmenter.segment(&samples)
    }
    .context("Could not derive day bands; no chart written")?;

    let chart = assemble_chart(doc, &segments, config.segmenter.buckets_per_label, &config.chart)?;
    Ok(chart)
}

/// Write `chart` as JSON to `output`, or stdout when `None`.
pub fn write_chart(chart: &ChartDocument, output: Option<&Path>, pretty: bool) -> Result<()> {
    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Failed to create output file: {:?}", path))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::new(writer);

    if pretty {
        serde_json::to_writer_pretty(&mut writer, chart)?;
    } else {
        serde_json::to_writer(&mut writer, chart)?;
    }
    writeln!(writer)?;
    writer.flush().context("Failed to flush chart output")?;

    if let Some(path) = output {
        info!(path = ?path, strip_lines = chart.strip_lines.len(), "Wrote chart");
    } else if chart.strip_lines.is_empty() {
        warn!("Chart has no strip lines");
    }
    Ok(())
}
