use std::rc::Rc;
use yew::Reducible;

/// Cycles an index over `0..len`. Used by the testimonial carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotator {
    index: usize,
    len: usize,
}

pub enum RotatorAction {
    Advance,
    Select(usize),
}

impl Rotator {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Jumps straight to `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        true
    }
}

impl Reducible for Rotator {
    type Action = RotatorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            RotatorAction::Advance => next.advance(),
            RotatorAction::Select(index) => {
                if !next.select(index) {
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycles_through_three() {
        let mut rotator = Rotator::new(3);
        let mut seen = vec![rotator.index()];
        for _ in 0..6 {
            rotator.advance();
            seen.push(rotator.index());
        }
        assert_eq!(seen, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_select_is_immediate() {
        let mut rotator = Rotator::new(3);
        rotator.advance();
        assert!(rotator.select(2));
        assert_eq!(rotator.index(), 2);
        // The next automatic tick carries on from the selection.
        rotator.advance();
        assert_eq!(rotator.index(), 0);
    }

    #[test]
    fn test_select_out_of_range() {
        let mut rotator = Rotator::new(3);
        assert!(!rotator.select(3));
        assert_eq!(rotator.index(), 0);
    }

    #[test]
    fn test_empty_never_moves() {
        let mut rotator = Rotator::new(0);
        rotator.advance();
        assert_eq!(rotator.index(), 0);
        assert_eq!(rotator.len(), 0);
    }

    #[test]
    fn test_reducer() {
        let state = Rc::new(Rotator::new(3));
        let selected = state.reduce(RotatorAction::Select(2));
        assert_eq!(selected.index(), 2);
        let advanced = selected.reduce(RotatorAction::Advance);
        assert_eq!(advanced.index(), 0);
    }
}
