//! Tests for forecast document parsing and sample extraction.

use forecast_common::{Alphabet, ForecastDocument, ForecastError, TimeToken};
use test_utils::fixtures::{self, tokens};
use test_utils::{at, forecast_document, temp_file_with};

// ============================================================================
// Document parsing
// ============================================================================

#[test]
fn test_parse_model_cycle_document() {
    let doc = ForecastDocument::from_json(fixtures::MODEL_CYCLE_DOCUMENT).unwrap();
    assert_eq!(doc.len(), 10);
    assert_eq!(doc.model_run.as_deref(), Some("20240229 00z"));

    let location = doc.location.as_ref().unwrap();
    assert_eq!(location.location_name, "Narragansett");
    assert!((location.latitude - 41.395).abs() < 1e-9);

    let first = &doc.forecast_data[0];
    assert_eq!(first.time, "00z");
    assert_eq!(first.primary_swell_component.period, 8.1);
}

#[test]
fn test_samples_strip_date_suffix() {
    let doc = ForecastDocument::from_json(fixtures::MODEL_CYCLE_DOCUMENT).unwrap();
    let samples = doc.samples();
    assert_eq!(samples.len(), doc.len());
    assert!(samples[..8].iter().all(|s| s.date == "Thursday"));
    assert!(samples[8..].iter().all(|s| s.date == "Friday"));
}

#[test]
fn test_empty_document_parses() {
    let doc = ForecastDocument::from_json(fixtures::EMPTY_DOCUMENT).unwrap();
    assert!(doc.is_empty());
    assert!(doc.samples().is_empty());
}

#[test]
fn test_from_file() {
    let file = temp_file_with(".json", fixtures::UNALIGNED_DOCUMENT);
    let doc = ForecastDocument::from_file(file.path()).unwrap();
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.forecast_data[1].maximum_breaking_height, 1.1);
}

#[test]
fn test_from_missing_file_is_io_error() {
    let err = ForecastDocument::from_file("/nonexistent/forecast.json").unwrap_err();
    assert!(matches!(err, ForecastError::Io(_)));
}

#[test]
fn test_document_json_roundtrip_keeps_pascal_case() {
    let doc = forecast_document(at(2024, 1, 15, 1), 2, Alphabet::Meridiem);
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(json["ForecastData"][0]["Date"], "Monday 01/15");
    assert_eq!(json["ForecastData"][1]["Time"], "04 AM");
    assert!(json["ForecastData"][0]["PrimarySwellComponent"]["WaveHeight"].is_number());
}

// ============================================================================
// Token fixtures
// ============================================================================

#[test]
fn test_fixture_tokens_parse_as_expected() {
    for raw in tokens::ALIGNED.iter().chain(tokens::UNALIGNED.iter()) {
        assert!(TimeToken::parse(raw).is_ok(), "{raw:?} should parse");
    }
    for raw in tokens::MALFORMED {
        assert!(TimeToken::parse(raw).is_err(), "{raw:?} should not parse");
    }
}
