use crate::config::TIMELINE_ACTIVE_WINDOW;

/// A labelled marker on the fixed story timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineAnchor {
    pub label: &'static str,
    /// Vertical placement on the timeline track, in percent.
    pub position_pct: f64,
    /// Global scroll fraction at which the anchor is reached.
    pub progress: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnchorState {
    pub passed: bool,
    pub active: bool,
}

pub const TIMELINE_ANCHORS: [TimelineAnchor; 6] = [
    TimelineAnchor {
        label: "Home",
        position_pct: 2.0,
        progress: 0.0,
    },
    TimelineAnchor {
        label: "Stats",
        position_pct: 22.0,
        progress: 0.2,
    },
    TimelineAnchor {
        label: "Services",
        position_pct: 38.0,
        progress: 0.35,
    },
    TimelineAnchor {
        label: "Portfolio",
        position_pct: 55.0,
        progress: 0.52,
    },
    TimelineAnchor {
        label: "Reviews",
        position_pct: 72.0,
        progress: 0.7,
    },
    TimelineAnchor {
        label: "Contact",
        position_pct: 92.0,
        progress: 0.9,
    },
];

impl TimelineAnchor {
    pub fn state(&self, fraction: f64) -> AnchorState {
        let passed = fraction >= self.progress;
        AnchorState {
            passed,
            active: passed && fraction < self.progress + TIMELINE_ACTIVE_WINDOW,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn services() -> TimelineAnchor {
        TIMELINE_ANCHORS[2]
    }

    #[test]
    fn test_services_passed_threshold() {
        let anchor = services();
        assert_eq!(anchor.label, "Services");
        assert!(!anchor.state(0.0).passed);
        assert!(!anchor.state(0.349).passed);
        assert!(anchor.state(0.35).passed);
        assert!(anchor.state(0.351).passed);
        assert!(anchor.state(1.0).passed);
    }

    #[test]
    fn test_passed_flips_once_across_the_range() {
        let anchor = services();
        let flips = (0..=1000)
            .map(|i| anchor.state(i as f64 / 1000.0).passed)
            .collect::<Vec<_>>()
            .windows(2)
            .filter(|w| w[0] != w[1])
            .count();
        assert_eq!(flips, 1);
    }

    #[test]
    fn test_active_window() {
        let anchor = services();
        assert!(!anchor.state(0.3).active);
        assert!(anchor.state(0.35).active);
        assert!(anchor.state(0.49).active);
        assert!(!anchor.state(0.5).active);
        assert!(anchor.state(0.5).passed);
    }

    #[test]
    fn test_home_passed_from_the_top() {
        let home = TIMELINE_ANCHORS[0];
        assert_eq!(home.state(0.0), AnchorState { passed: true, active: true });
    }

    #[test]
    fn test_anchors_are_ordered() {
        assert!(TIMELINE_ANCHORS
            .windows(2)
            .all(|w| w[0].progress < w[1].progress && w[0].position_pct < w[1].position_pct));
    }
}
