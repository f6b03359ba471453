use std::collections::VecDeque;
use std::rc::Rc;
use yew::Reducible;

use crate::config::CURSOR_TRAIL_CAPACITY;

/// Identifier of a trail point: the millisecond timestamp of the move plus a sequence number,
/// so two moves inside the same millisecond still get distinct keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TrailId {
    pub stamp_ms: i64,
    pub seq: u64,
}

impl std::fmt::Display for TrailId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.stamp_ms, self.seq)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub x: f64,
    pub y: f64,
    pub id: TrailId,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CursorTracker {
    position: (f64, f64),
    trail: VecDeque<TrailPoint>,
    hovering: bool,
    next_seq: u64,
}

pub enum CursorAction {
    Move { x: f64, y: f64, stamp_ms: i64 },
    Hover(bool),
}

impl Default for CursorTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorTracker {
    pub fn new() -> Self {
        Self {
            position: (0.0, 0.0),
            trail: VecDeque::with_capacity(CURSOR_TRAIL_CAPACITY),
            hovering: false,
            next_seq: 0,
        }
    }

    pub fn position(&self) -> (f64, f64) {
        self.position
    }

    pub fn hovering(&self) -> bool {
        self.hovering
    }

    /// Oldest point first.
    pub fn trail(&self) -> impl Iterator<Item = &TrailPoint> {
        self.trail.iter()
    }

    /// Records a pointer move. Points beyond the capacity are dropped from the old end.
    pub fn record_move(&mut self, x: f64, y: f64, stamp_ms: i64) {
        self.position = (x, y);
        let id = TrailId {
            stamp_ms,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        if self.trail.len() == CURSOR_TRAIL_CAPACITY {
            self.trail.pop_front();
        }
        self.trail.push_back(TrailPoint { x, y, id });
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }
}

impl Reducible for CursorTracker {
    type Action = CursorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CursorAction::Move { x, y, stamp_ms } => next.record_move(x, y, stamp_ms),
            CursorAction::Hover(hovering) => {
                if self.hovering == hovering {
                    return self;
                }
                next.set_hovering(hovering);
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl CursorTracker {
        fn trail_len(&self) -> usize {
            self.trail.len()
        }
    }

    #[test]
    fn test_trail_never_exceeds_capacity() {
        let mut cursor = CursorTracker::new();
        for i in 0..500 {
            cursor.record_move(i as f64, (i * 2) as f64, 1_000);
            assert!(cursor.trail_len() <= CURSOR_TRAIL_CAPACITY);
        }
        assert_eq!(cursor.trail_len(), CURSOR_TRAIL_CAPACITY);
    }

    #[test]
    fn test_trail_keeps_most_recent_points() {
        let mut cursor = CursorTracker::new();
        for i in 0..20 {
            cursor.record_move(i as f64, 0.0, i);
        }
        let xs: Vec<f64> = cursor.trail().map(|p| p.x).collect();
        assert_eq!(xs, vec![12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0, 19.0]);
        assert_eq!(cursor.position(), (19.0, 0.0));
    }

    #[test]
    fn test_ids_unique_within_same_millisecond() {
        let mut cursor = CursorTracker::new();
        cursor.record_move(1.0, 1.0, 42);
        cursor.record_move(2.0, 2.0, 42);
        let ids: Vec<String> = cursor.trail().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, vec!["42-0", "42-1"]);
    }

    #[test]
    fn test_hover_reducer() {
        let state = Rc::new(CursorTracker::new());
        let unchanged = state.clone().reduce(CursorAction::Hover(false));
        assert!(Rc::ptr_eq(&state, &unchanged));

        let hovering = state.reduce(CursorAction::Hover(true));
        assert!(hovering.hovering());
        assert_eq!(hovering.trail_len(), 0);
    }
}
