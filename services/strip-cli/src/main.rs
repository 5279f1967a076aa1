//! Forecast strip-line CLI.
//!
//! Reads a forecast JSON document and writes the chart payload:
//! - Day bands derived from the 3-hourly buckets
//! - Width-dependent day labels
//! - The wave-height value series with tooltips

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use strip_cli::{read_document, render, write_chart, Input, Overrides, StripConfig};
use strip_lines::LabelMode;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "strip-cli")]
#[command(about = "Build chart JSON with day strip lines from a forecast document")]
struct Args {
    /// Forecast JSON document ("-" or omitted reads stdin)
    input: Option<PathBuf>,

    /// Write chart JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// YAML configuration file
    #[arg(short, long, env = "STRIP_CONFIG")]
    config: Option<PathBuf>,

    /// Label every band ("all") or only day bands ("alternate")
    #[arg(long, env = "STRIP_LABEL_MODE")]
    label_mode: Option<LabelMode>,

    /// 3-hour buckets per band
    #[arg(long, env = "STRIP_BUCKETS_PER_LABEL")]
    buckets_per_label: Option<usize>,

    /// Viewport width in pixels, 0 if unknown
    #[arg(long, env = "STRIP_DISPLAY_WIDTH")]
    display_width: Option<u32>,

    /// Screen width in pixels, used when the viewport width is 0
    #[arg(long)]
    screen_width: Option<u32>,

    /// Chart title
    #[arg(long)]
    title: Option<String>,

    /// Fail when a day band label disagrees with the dates it covers
    #[arg(long)]
    strict: bool,

    /// Pretty-print the chart JSON
    #[arg(long)]
    pretty: bool,

    /// Log level
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            label_mode: self.label_mode,
            buckets_per_label: self.buckets_per_label,
            display_width: self.display_width,
            screen_width: self.screen_width,
            title: self.title.clone(),
        }
    }
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Logs go to stderr; stdout carries the chart
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    if args.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let mut config = StripConfig::load(args.config.as_deref())?;
    config.apply(&args.overrides());

    info!(
        label_mode = %config.segmenter.label_mode,
        buckets_per_label = config.segmenter.buckets_per_label,
        display_width = config.chart.display_width.effective(),
        strict = args.strict,
        "Building forecast chart"
    );

    let doc = read_document(&Input::from_arg(args.input))?;
    let chart = render(&doc, &config, args.strict)?;
    write_chart(&chart, args.output.as_deref(), args.pretty)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_vars_feed_overrides() {
        std::env::set_var("STRIP_LABEL_MODE", "all");
        std::env::set_var("STRIP_BUCKETS_PER_LABEL", "2");
        std::env::set_var("STRIP_DISPLAY_WIDTH", "450");

        let from_env = Args::try_parse_from(["strip-cli", "forecast.json"]).unwrap();
        let from_flags = Args::try_parse_from([
            "strip-cli",
            "--label-mode",
            "alternate",
            "--buckets-per-label",
            "6",
            "--display-width",
            "1280",
        ])
        .unwrap();

        std::env::remove_var("STRIP_LABEL_MODE");
        std::env::remove_var("STRIP_BUCKETS_PER_LABEL");
        std::env::remove_var("STRIP_DISPLAY_WIDTH");

        let overrides = from_env.overrides();
        assert_eq!(overrides.label_mode, Some(LabelMode::All));
        assert_eq!(overrides.buckets_per_label, Some(2));
        assert_eq!(overrides.display_width, Some(450));
        assert_eq!(from_env.input, Some(PathBuf::from("forecast.json")));

        // Flags win over the environment
        let overrides = from_flags.overrides();
        assert_eq!(overrides.label_mode, Some(LabelMode::Alternate));
        assert_eq!(overrides.buckets_per_label, Some(6));
        assert_eq!(overrides.display_width, Some(1280));

        let mut config = StripConfig::default();
        config.apply(&from_env.overrides());
        assert_eq!(config.segmenter.label_mode, LabelMode::All);
        assert_eq!(config.segmenter.buckets_per_label, 2);
        assert_eq!(config.chart.display_width.effective(), 450);
    }
}
