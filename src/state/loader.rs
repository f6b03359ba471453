use std::rc::Rc;
use yew::Reducible;

/// Progress simulation behind the full-page loading screen.
///
/// Progress only ever grows, is capped at 100, and completes exactly once. After completion
/// the screen waits in `Finishing` until the hide delay elapses and the caller sends `Hide`.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadingSequencer {
    progress: f64,
    phase: LoaderPhase,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderPhase {
    Loading,
    Finishing,
    Hidden,
}

pub enum LoaderAction {
    Tick(f64),
    Hide,
}

impl Default for LoadingSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingSequencer {
    pub fn new() -> Self {
        Self {
            progress: 0.0,
            phase: LoaderPhase::Loading,
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Whole percent shown on screen.
    pub fn percent(&self) -> u32 {
        self.progress.floor() as u32
    }

    pub fn phase(&self) -> LoaderPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase != LoaderPhase::Hidden
    }

    /// Advances by `increment` (negative values count as zero). Returns true on the tick that
    /// first reaches 100.
    pub fn tick(&mut self, increment: f64) -> bool {
        if self.phase != LoaderPhase::Loading {
            return false;
        }
        self.progress = (self.progress + increment.max(0.0)).min(100.0);
        if self.progress >= 100.0 {
            self.phase = LoaderPhase::Finishing;
            return true;
        }
        false
    }

    /// Returns true only for the transition out of `Finishing`.
    pub fn hide(&mut self) -> bool {
        if self.phase == LoaderPhase::Finishing {
            self.phase = LoaderPhase::Hidden;
            return true;
        }
        false
    }
}

impl Reducible for LoadingSequencer {
    type Action = LoaderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            LoaderAction::Tick(increment) => {
                let before = next.progress;
                next.tick(increment) || next.progress != before
            }
            LoaderAction::Hide => next.hide(),
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_non_decreasing_and_capped() {
        let mut loader = LoadingSequencer::new();
        let increments = [3.2, 0.0, -4.0, 4.9, 1.1, 5.0, 2.5];
        let mut last = loader.progress();
        for _ in 0..40 {
            for inc in increments {
                loader.tick(inc);
                assert!(loader.progress() >= last);
                assert!(loader.progress() <= 100.0);
                last = loader.progress();
            }
        }
        assert_eq!(loader.progress(), 100.0);
        assert_eq!(loader.percent(), 100);
    }

    #[test]
    fn test_completes_exactly_once() {
        let mut loader = LoadingSequencer::new();
        let mut completions = 0;
        for _ in 0..100 {
            if loader.tick(4.0) {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
        assert_eq!(loader.phase(), LoaderPhase::Finishing);
        assert!(loader.is_visible());
    }

    #[test]
    fn test_hide_only_after_completion() {
        let mut loader = LoadingSequencer::new();
        assert!(!loader.hide());
        assert_eq!(loader.phase(), LoaderPhase::Loading);

        loader.tick(150.0);
        assert!(loader.hide());
        assert!(!loader.is_visible());
        assert!(!loader.hide());

        // Not restartable.
        assert!(!loader.tick(1.0));
        assert_eq!(loader.phase(), LoaderPhase::Hidden);
    }

    #[test]
    fn test_percent_rounds_down() {
        let mut loader = LoadingSequencer::new();
        loader.tick(42.9);
        assert_eq!(loader.percent(), 42);
    }

    #[test]
    fn test_reducer_keeps_identity_when_nothing_changes() {
        let state = Rc::new(LoadingSequencer::new());
        let same = state.clone().reduce(LoaderAction::Hide);
        assert!(Rc::ptr_eq(&state, &same));

        let moved = state.clone().reduce(LoaderAction::Tick(2.0));
        assert_eq!(moved.progress(), 2.0);
    }
}
