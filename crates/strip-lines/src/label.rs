//! Width-dependent formatting of day labels.
//!
//! Narrow displays cannot fit full weekday names under each band, so labels
//! are cut to a short prefix and, on the narrowest displays, drawn smaller.
//! This runs after segmentation and never changes band boundaries.

use forecast_common::{ForecastError, ForecastResult};
use serde::{Deserialize, Serialize};

/// The display width reported by the caller's environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayWidth {
    /// Viewport width in pixels, 0 when unknown
    pub inner: u32,
    /// Screen width in pixels, used when the viewport width is unknown
    pub screen: u32,
}

impl DisplayWidth {
    pub fn new(inner: u32, screen: u32) -> Self {
        Self { inner, screen }
    }

    pub fn viewport(px: u32) -> Self {
        Self { inner: px, screen: px }
    }

    pub fn effective(&self) -> u32 {
        if self.inner > 0 {
            self.inner
        } else {
            self.screen
        }
    }
}

/// Breakpoints and font sizes for label formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelPolicy {
    /// Widths below this get shortened labels
    pub narrow_below: u32,
    /// Widths at or below this also get the compact font size
    pub compact_at_or_below: u32,
    /// Characters kept when shortening
    pub short_len: usize,
    pub font_size: u32,
    pub compact_font_size: u32,
}

impl Default for LabelPolicy {
    fn default() -> Self {
        Self {
            narrow_below: 600,
            compact_at_or_below: 400,
            short_len: 3,
            font_size: 12,
            compact_font_size: 10,
        }
    }
}

/// A label ready for the chart renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedLabel {
    pub text: String,
    pub font_size: u32,
}

impl LabelPolicy {
    pub fn validate(&self) -> ForecastResult<()> {
        if self.compact_at_or_below > self.narrow_below {
            return Err(ForecastError::InvalidConfig(format!(
                "compact breakpoint {} exceeds narrow breakpoint {}",
                self.compact_at_or_below, self.narrow_below
            )));
        }
        if self.short_len == 0 {
            return Err(ForecastError::InvalidConfig("short_len must be at least 1".into()));
        }
        if self.font_size == 0 || self.compact_font_size == 0 {
            return Err(ForecastError::InvalidConfig("font sizes must be positive".into()));
        }
        Ok(())
    }

    /// Format `label` for a display of the given width.
    ///
    /// # Example
    ///
    /// ```
    /// use strip_lines::{DisplayWidth, LabelPolicy};
    ///
    /// let policy = LabelPolicy::default();
    /// let label = policy.format("Wednesday", DisplayWidth::viewport(375));
    /// assert_eq!(label.text, "Wed");
    /// assert_eq!(label.font_size, 10);
    /// ```
    pub fn format(&self, label: &str, width: DisplayWidth) -> FormattedLabel {
        let px = width.effective();

        if px <= self.compact_at_or_below {
            FormattedLabel {
                text: self.shorten(label),
                font_size: self.compact_font_size,
            }
        } else if px < self.narrow_below {
            FormattedLabel {
                text: self.shorten(label),
                font_size: self.font_size,
            }
        } else {
            FormattedLabel {
                text: label.to_string(),
                font_size: self.font_size,
            }
        }
    }

    fn shorten(&self, label: &str) -> String {
        label.chars().take(self.short_len).collect()
    }
}
