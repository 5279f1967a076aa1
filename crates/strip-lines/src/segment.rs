//! Output types of day segmentation.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Whether a band marks a labeled day period or the alternation between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    Labeled,
    Background,
}

impl Emphasis {
    /// The other band kind.
    pub fn flip(self) -> Self {
        match self {
            Emphasis::Labeled => Emphasis::Background,
            Emphasis::Background => Emphasis::Labeled,
        }
    }
}

/// A contiguous run of sample indices `[start_index, end_index)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub start_index: usize,
    pub end_index: usize,
    /// Day text, empty for unlabeled bands
    pub label: String,
    pub emphasis: Emphasis,
}

impl Segment {
    pub fn new(start_index: usize, end_index: usize, label: impl Into<String>, emphasis: Emphasis) -> Self {
        Self {
            start_index,
            end_index,
            label: label.into(),
            emphasis,
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start_index..self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_label(&self) -> bool {
        !self.label.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_len_and_range() {
        let seg = Segment::new(4, 8, "", Emphasis::Background);
        assert_eq!(seg.len(), 4);
        assert_eq!(seg.range(), 4..8);
        assert!(!seg.has_label());
        assert!(!seg.is_empty());
    }

    #[test]
    fn test_emphasis_flip() {
        assert_eq!(Emphasis::Labeled.flip(), Emphasis::Background);
        assert_eq!(Emphasis::Background.flip().flip(), Emphasis::Background);
    }

    #[test]
    fn test_serde_shape() {
        let seg = Segment::new(0, 2, "Thursday", Emphasis::Labeled);
        let json = serde_json::to_value(&seg).unwrap();
        assert_eq!(json["start_index"], 0);
        assert_eq!(json["emphasis"], "labeled");
    }
}
