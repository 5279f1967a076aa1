//! Wave-height value series for the forecast chart.

use forecast_common::{round_hundredths, ForecastEntry};
use serde::Serialize;

/// One point of the spline series, keyed by bucket index.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub x: usize,
    /// Maximum breaking height in feet, rounded to hundredths
    pub y: f64,
    /// Axis label; left blank so the day bands carry the dates
    pub label: String,
    pub tool_tip_content: String,
}

/// Build the chart series for a forecast, one point per entry.
pub fn build_series(entries: &[ForecastEntry]) -> Vec<ChartPoint> {
    entries
        .iter()
        .enumerate()
        .map(|(x, entry)| ChartPoint {
            x,
            y: round_hundredths(entry.maximum_breaking_height),
            label: " ".to_string(),
            tool_tip_content: tooltip(entry),
        })
        .collect()
}

/// Tooltip markup: breaking height range, primary swell and wind.
pub fn tooltip(entry: &ForecastEntry) -> String {
    let swell = &entry.primary_swell_component;
    format!(
        "<b>{} {}: {} - {} ft</b><br>Swell: {} @ {} s {}\u{B0}<br>Wind: {}\u{B0} {} mph",
        entry.day(),
        entry.time,
        round_hundredths(entry.minimum_breaking_height),
        round_hundredths(entry.maximum_breaking_height),
        round_hundredths(swell.wave_height),
        round_hundredths(swell.period),
        round_hundredths(swell.direction),
        round_hundredths(entry.wind_direction),
        round_hundredths(entry.wind_speed),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use forecast_common::SwellComponent;

    fn entry() -> ForecastEntry {
        ForecastEntry {
            date: "Friday 03/01".to_string(),
            time: "07 PM".to_string(),
            minimum_breaking_height: 1.5,
            maximum_breaking_height: 2.456,
            wind_speed: 12.0,
            wind_direction: 247.5,
            primary_swell_component: SwellComponent {
                wave_height: 3.333,
                period: 9.0,
                direction: 145.0,
            },
        }
    }

    #[test]
    fn test_tooltip_text() {
        assert_eq!(
            tooltip(&entry()),
            "<b>Friday 07 PM: 1.5 - 2.46 ft</b><br>Swell: 3.33 @ 9 s 145°<br>Wind: 247.5° 12 mph"
        );
    }

    #[test]
    fn test_series_points() {
        let points = build_series(&[entry(), entry()]);
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].x, 1);
        assert_eq!(points[0].y, 2.46);
        assert_eq!(points[0].label, " ");
    }

    #[test]
    fn test_point_json_keys() {
        let json = serde_json::to_value(&build_series(&[entry()])[0]).unwrap();
        assert!(json.get("toolTipContent").is_some());
        assert_eq!(json["x"], 0);
    }
}
