//! Pure mappings from scroll/animation progress to style values.

/// Piecewise-linear map of `input` from `domain` onto `range`, clamped at both ends.
///
/// `domain` must be ascending and the same length as `range`.
pub fn interpolate(input: f64, domain: &[f64], range: &[f64]) -> f64 {
    debug_assert_eq!(domain.len(), range.len());
    let (Some(&first), Some(&last)) = (domain.first(), domain.last()) else {
        return 0.0;
    };
    if input <= first {
        return range[0];
    }
    if input >= last {
        return range[range.len() - 1];
    }
    for i in 1..domain.len() {
        let (d0, d1) = (domain[i - 1], domain[i]);
        if input <= d1 {
            let span = d1 - d0;
            if span <= 0.0 {
                return range[i];
            }
            let t = (input - d0) / span;
            return range[i - 1] + (range[i] - range[i - 1]) * t;
        }
    }
    range[range.len() - 1]
}

/// Which edges of a section bound its local scroll progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollOffset {
    /// 0 when the section's top meets the viewport bottom, 1 when its bottom leaves the top.
    StartEndToEndStart,
    /// 0 when the section's top meets the viewport top, 1 when its bottom leaves the top.
    StartStartToEndStart,
}

/// Local scroll progress of a section in [0, 1] from its viewport-relative bounding rect.
pub fn section_progress(offset: ScrollOffset, top: f64, height: f64, viewport_height: f64) -> f64 {
    let (travelled, distance) = match offset {
        ScrollOffset::StartEndToEndStart => (viewport_height - top, viewport_height + height),
        ScrollOffset::StartStartToEndStart => (-top, height),
    };
    if distance <= 0.0 {
        return 0.0;
    }
    (travelled / distance).clamp(0.0, 1.0)
}

/// Exponential ease-out used by smooth scrolling.
pub fn smooth_ease(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroMotion {
    pub opacity: f64,
    pub content_y: f64,
    pub background_scale: f64,
}

pub fn hero_motion(progress: f64) -> HeroMotion {
    HeroMotion {
        opacity: interpolate(progress, &[0.0, 1.0], &[1.0, 0.0]),
        content_y: interpolate(progress, &[0.0, 1.0], &[0.0, 300.0]),
        background_scale: interpolate(progress, &[0.0, 1.0], &[1.0, 1.5]),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatsMotion {
    pub scale: f64,
    pub opacity: f64,
}

pub fn stats_motion(progress: f64) -> StatsMotion {
    StatsMotion {
        scale: interpolate(progress, &[0.0, 0.5, 1.0], &[0.8, 1.0, 0.9]),
        opacity: interpolate(progress, &[0.0, 0.3, 0.7, 1.0], &[0.0, 1.0, 1.0, 0.5]),
    }
}

/// Background drift shared by the services and work sections.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackdropMotion {
    pub y: f64,
    pub opacity: f64,
}

pub fn services_backdrop(progress: f64) -> BackdropMotion {
    BackdropMotion {
        y: interpolate(progress, &[0.0, 1.0], &[0.0, -100.0]),
        opacity: interpolate(progress, &[0.0, 0.5, 1.0], &[0.5, 1.0, 0.5]),
    }
}

pub fn work_backdrop(progress: f64) -> BackdropMotion {
    BackdropMotion {
        y: interpolate(progress, &[0.0, 1.0], &[0.0, -150.0]),
        opacity: interpolate(progress, &[0.0, 0.5, 1.0], &[0.3, 1.0, 0.3]),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TeamHeaderMotion {
    pub y: f64,
    pub rotate_deg: f64,
}

pub fn team_header_motion(progress: f64) -> TeamHeaderMotion {
    TeamHeaderMotion {
        y: interpolate(progress, &[0.0, 0.5, 1.0], &[50.0, 0.0, -50.0]),
        rotate_deg: interpolate(progress, &[0.0, 0.5, 1.0], &[-5.0, 0.0, 5.0]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_interpolate_clamps() {
        assert_eq!(interpolate(-1.0, &[0.0, 1.0], &[10.0, 20.0]), 10.0);
        assert_eq!(interpolate(2.0, &[0.0, 1.0], &[10.0, 20.0]), 20.0);
    }

    #[test]
    fn test_interpolate_multi_segment() {
        let domain = [0.0, 0.3, 0.7, 1.0];
        let range = [0.0, 1.0, 1.0, 0.5];
        assert!(close(interpolate(0.15, &domain, &range), 0.5));
        assert!(close(interpolate(0.5, &domain, &range), 1.0));
        assert!(close(interpolate(0.85, &domain, &range), 0.75));
    }

    #[test]
    fn test_section_progress_start_end() {
        // Section 400px tall in an 800px viewport.
        let p = |top| section_progress(ScrollOffset::StartEndToEndStart, top, 400.0, 800.0);
        assert_eq!(p(900.0), 0.0);
        assert_eq!(p(800.0), 0.0);
        assert!(close(p(200.0), 0.5));
        assert_eq!(p(-400.0), 1.0);
        assert_eq!(p(-1000.0), 1.0);
    }

    #[test]
    fn test_section_progress_start_start() {
        let p = |top| section_progress(ScrollOffset::StartStartToEndStart, top, 1000.0, 800.0);
        assert_eq!(p(0.0), 0.0);
        assert!(close(p(-250.0), 0.25));
        assert_eq!(p(-1000.0), 1.0);
    }

    #[test]
    fn test_section_progress_zero_height() {
        assert_eq!(section_progress(ScrollOffset::StartStartToEndStart, -5.0, 0.0, 800.0), 0.0);
    }

    #[test]
    fn test_smooth_ease_bounds() {
        assert!(smooth_ease(0.0) < 0.01);
        assert_eq!(smooth_ease(1.0), 1.0);
        assert_eq!(smooth_ease(3.0), 1.0);
        let mut last = smooth_ease(0.0);
        for i in 1..=100 {
            let v = smooth_ease(i as f64 / 100.0);
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn test_hero_fades_out() {
        let top = hero_motion(0.0);
        assert_eq!(top.opacity, 1.0);
        assert_eq!(top.content_y, 0.0);
        let gone = hero_motion(1.0);
        assert_eq!(gone.opacity, 0.0);
        assert_eq!(gone.content_y, 300.0);
        assert_eq!(gone.background_scale, 1.5);
    }

    #[test]
    fn test_stats_peak_in_middle() {
        let mid = stats_motion(0.5);
        assert_eq!(mid.scale, 1.0);
        assert_eq!(mid.opacity, 1.0);
        assert!(close(stats_motion(1.0).scale, 0.9));
    }

    #[test]
    fn test_team_header_symmetry() {
        let a = team_header_motion(0.25);
        let b = team_header_motion(0.75);
        assert!(close(a.y, -b.y));
        assert!(close(a.rotate_deg, -b.rotate_deg));
    }
}
