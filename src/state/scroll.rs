use crate::config::{BACK_TO_TOP_THRESHOLD, NAV_SCROLL_THRESHOLD};

/// Snapshot of the window's vertical scroll published to every subscriber.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    /// Pixels scrolled from the top.
    pub y: f64,
    /// 0.0 at the top of the document, 1.0 at the bottom.
    pub fraction: f64,
}

impl ScrollState {
    pub fn measure(y: f64, document_height: f64, viewport_height: f64) -> Self {
        let scrollable = document_height - viewport_height;
        let fraction = if scrollable > 0.0 {
            (y / scrollable).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self { y, fraction }
    }

    pub fn nav_scrolled(&self) -> bool {
        self.y > NAV_SCROLL_THRESHOLD
    }

    pub fn shows_back_to_top(&self) -> bool {
        self.fraction > BACK_TO_TOP_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_spans_document() {
        assert_eq!(ScrollState::measure(0.0, 5000.0, 1000.0).fraction, 0.0);
        assert_eq!(ScrollState::measure(2000.0, 5000.0, 1000.0).fraction, 0.5);
        assert_eq!(ScrollState::measure(4000.0, 5000.0, 1000.0).fraction, 1.0);
    }

    #[test]
    fn test_fraction_clamped() {
        // Overscroll bounce on touch devices.
        assert_eq!(ScrollState::measure(-30.0, 5000.0, 1000.0).fraction, 0.0);
        assert_eq!(ScrollState::measure(4100.0, 5000.0, 1000.0).fraction, 1.0);
    }

    #[test]
    fn test_short_document() {
        assert_eq!(ScrollState::measure(0.0, 600.0, 800.0).fraction, 0.0);
    }

    #[test]
    fn test_nav_threshold() {
        assert!(!ScrollState::measure(50.0, 5000.0, 1000.0).nav_scrolled());
        assert!(ScrollState::measure(51.0, 5000.0, 1000.0).nav_scrolled());
    }

    #[test]
    fn test_back_to_top_threshold() {
        assert!(!ScrollState::measure(400.0, 5000.0, 1000.0).shows_back_to_top());
        assert!(ScrollState::measure(401.0, 5000.0, 1000.0).shows_back_to_top());
    }
}
