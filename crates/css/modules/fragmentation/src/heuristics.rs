//! Tunable knobs of the classifier.

use serde::Deserialize;

/// Corner radius at or above which border curves are inspected.
pub const BIG_RADIUS_THRESHOLD_PX: f32 = 15.0;

/// Classifier configuration, loadable from a host's JSON settings.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct BreakHeuristics {
    /// Radii below this (on every corner) never make a box monolithic.
    pub big_radius_threshold: f32,
    /// Reject break points between inline boxes that share a line box.
    pub detect_same_line: bool,
}

impl Default for BreakHeuristics {
    fn default() -> Self {
        Self {
            big_radius_threshold: BIG_RADIUS_THRESHOLD_PX,
            detect_same_line: cfg!(feature = "same_line_detection"),
        }
    }
}

impl BreakHeuristics {
    /// Same-line detection disabled: adjacency never blocks a break.
    #[inline]
    #[must_use]
    pub const fn without_same_line_detection(self) -> Self {
        Self {
            detect_same_line: false,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let heuristics = BreakHeuristics::default();
        assert_eq!(heuristics.big_radius_threshold, 15.0);
        assert_eq!(
            heuristics.detect_same_line,
            cfg!(feature = "same_line_detection")
        );
        assert!(!heuristics.without_same_line_detection().detect_same_line);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let heuristics: BreakHeuristics =
            serde_json::from_str(r#"{ "big_radius_threshold": 8.0 }"#).unwrap();
        assert_eq!(heuristics.big_radius_threshold, 8.0);
        assert_eq!(
            heuristics.detect_same_line,
            BreakHeuristics::default().detect_same_line
        );
    }
}
