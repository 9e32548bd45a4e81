//! Resolved media ranges.

use serde::Serialize;

use super::axis::Axis;

/// A resolved media range.
///
/// `min` is inclusive. `max` is already the exclusive ceiling: a named
/// upper breakpoint of 1100px is stored as 1099, so adjacent ranges such as
/// `(m, l)` and `(l, None)` never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MediaRange {
    pub axis: Axis,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl MediaRange {
    /// Builds a range from resolved breakpoint values.
    ///
    /// `None` or a negative value means no bound on that side. Zero is a
    /// bound, so `max = 0` becomes the ceiling `-1`.
    pub fn between(min: Option<i64>, max: Option<i64>, axis: Axis) -> Self {
        Self {
            axis,
            min: min.filter(|px| *px >= 0),
            max: max.filter(|px| *px >= 0).map(|px| px - 1),
        }
    }

    /// Returns true when neither side is bounded.
    ///
    /// An empty range renders as an empty block.
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// The bare media condition, e.g.
    /// `only screen and (min-width: 768px) and (max-width: 1099px)`.
    ///
    /// Returns `None` for an empty range.
    pub fn condition(&self) -> Option<String> {
        let axis = self.axis.as_str();
        match (self.min, self.max) {
            (Some(min), None) => Some(format!("only screen and (min-{}: {}px)", axis, min)),
            (None, Some(max)) => Some(format!("only screen and (max-{}: {}px)", axis, max)),
            (Some(min), Some(max)) => Some(format!(
                "only screen and (min-{}: {}px) and (max-{}: {}px)",
                axis, min, axis, max
            )),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_bound_only() {
        let range = MediaRange::between(Some(768), None, Axis::Width);
        assert_eq!(range.min, Some(768));
        assert_eq!(range.max, None);
        assert_eq!(
            range.condition().as_deref(),
            Some("only screen and (min-width: 768px)")
        );
    }

    #[test]
    fn test_upper_bound_is_exclusive() {
        let range = MediaRange::between(None, Some(1100), Axis::Width);
        assert_eq!(range.max, Some(1099));
        assert_eq!(
            range.condition().as_deref(),
            Some("only screen and (max-width: 1099px)")
        );
    }

    #[test]
    fn test_both_bounds() {
        let range = MediaRange::between(Some(768), Some(1100), Axis::Height);
        assert_eq!(
            range.condition().as_deref(),
            Some("only screen and (min-height: 768px) and (max-height: 1099px)")
        );
    }

    #[test]
    fn test_zero_is_a_real_bound() {
        let lower = MediaRange::between(Some(0), None, Axis::Width);
        assert!(!lower.is_empty());
        assert_eq!(
            lower.condition().as_deref(),
            Some("only screen and (min-width: 0px)")
        );

        let upper = MediaRange::between(None, Some(0), Axis::Width);
        assert_eq!(upper.max, Some(-1));
    }

    #[test]
    fn test_unbounded_range_is_empty() {
        let range = MediaRange::between(None, None, Axis::Width);
        assert!(range.is_empty());
        assert_eq!(range.condition(), None);
    }

    #[test]
    fn test_negative_values_leave_side_open() {
        let lower = MediaRange::between(Some(-5), None, Axis::Width);
        assert!(lower.is_empty());
        assert_eq!(lower.condition(), None);

        let upper = MediaRange::between(None, Some(-5), Axis::Width);
        assert!(upper.is_empty());

        let mixed = MediaRange::between(Some(-1), Some(768), Axis::Width);
        assert_eq!(mixed.min, None);
        assert_eq!(
            mixed.condition().as_deref(),
            Some("only screen and (max-width: 767px)")
        );
    }

    #[test]
    fn test_extreme_values() {
        let range = MediaRange::between(Some(i64::MAX), Some(i64::MIN), Axis::Width);
        assert_eq!(range.min, Some(i64::MAX));
        assert_eq!(range.max, None);
    }
}
