use crate::config::SMOOTH_SCROLL_DURATION_MS;
use crate::motion::smooth_ease;

/// Eased scroll from one offset to another over a fixed duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTween {
    from: f64,
    to: f64,
    duration_ms: f64,
}

impl ScrollTween {
    pub fn new(from: f64, to: f64) -> Self {
        Self::with_duration(from, to, SMOOTH_SCROLL_DURATION_MS)
    }

    pub fn with_duration(from: f64, to: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
        }
    }

    pub fn position_at(&self, elapsed_ms: f64) -> f64 {
        if self.is_done(elapsed_ms) {
            return self.to;
        }
        let t = (elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * smooth_ease(t)
    }

    pub fn is_done(&self, elapsed_ms: f64) -> bool {
        self.duration_ms <= 0.0 || elapsed_ms >= self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ends_on_target() {
        let tween = ScrollTween::new(0.0, 2400.0);
        assert_eq!(tween.position_at(1200.0), 2400.0);
        assert_eq!(tween.position_at(5000.0), 2400.0);
        assert!(tween.is_done(1200.0));
        assert!(!tween.is_done(1199.0));
    }

    #[test]
    fn test_moves_monotonically_upwards() {
        let tween = ScrollTween::new(3000.0, 0.0);
        let mut last = tween.position_at(0.0);
        assert!(last <= 3000.0);
        for ms in (16..=1200).step_by(16) {
            let pos = tween.position_at(ms as f64);
            assert!(pos <= last);
            assert!(pos >= 0.0);
            last = pos;
        }
    }

    #[test]
    fn test_zero_duration_jumps() {
        let tween = ScrollTween::with_duration(10.0, 90.0, 0.0);
        assert_eq!(tween.position_at(0.0), 90.0);
    }
}
