use std::rc::Rc;
use yew::Reducible;

use crate::config::{COUNT_UP_DURATION_MS, COUNT_UP_STEP_MS};

/// Count-up from 0 to a stat's target, advanced one fixed step at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct CountUp {
    target: u32,
    accumulated: f64,
    displayed: u32,
    stage: CountStage,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountStage {
    Idle,
    Running,
    Finished,
}

pub enum CountAction {
    Trigger,
    Step,
}

impl CountUp {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            accumulated: 0.0,
            displayed: 0,
            stage: CountStage::Idle,
        }
    }

    pub fn displayed(&self) -> u32 {
        self.displayed
    }

    pub fn stage(&self) -> CountStage {
        self.stage
    }

    pub fn is_running(&self) -> bool {
        self.stage == CountStage::Running
    }

    fn increment(&self) -> f64 {
        let steps = COUNT_UP_DURATION_MS as f64 / COUNT_UP_STEP_MS as f64;
        self.target as f64 / steps
    }

    /// Starts counting. Only the first call has any effect.
    pub fn trigger(&mut self) -> bool {
        if self.stage != CountStage::Idle {
            return false;
        }
        self.stage = CountStage::Running;
        true
    }

    /// One timer step. The final step pins the display exactly to the target.
    pub fn step(&mut self) {
        if self.stage != CountStage::Running {
            return;
        }
        self.accumulated += self.increment();
        if self.accumulated >= self.target as f64 {
            self.displayed = self.target;
            self.stage = CountStage::Finished;
        } else {
            self.displayed = (self.accumulated.floor() as u32).min(self.target);
        }
    }
}

impl Reducible for CountUp {
    type Action = CountAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CountAction::Trigger => {
                if !next.trigger() {
                    return self;
                }
            }
            CountAction::Step => next.step(),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(count: &mut CountUp) -> (usize, Vec<u32>) {
        let mut shown = Vec::new();
        let mut steps = 0;
        while count.is_running() {
            count.step();
            shown.push(count.displayed());
            steps += 1;
            assert!(steps < 10_000, "count-up never finished");
        }
        (steps, shown)
    }

    #[test]
    fn test_reaches_target_exactly_without_overshoot() {
        let mut count = CountUp::new(95);
        assert!(count.trigger());
        let (steps, shown) = run_to_end(&mut count);

        assert_eq!(count.displayed(), 95);
        assert_eq!(count.stage(), CountStage::Finished);
        assert!(shown.iter().all(|&v| v <= 95));
        assert!(shown.windows(2).all(|w| w[0] <= w[1]));
        // 2000ms in 16ms steps, allowing one extra step for float drift.
        assert!((125..=126).contains(&steps));
    }

    #[test]
    fn test_second_trigger_does_not_restart() {
        let mut count = CountUp::new(95);
        count.trigger();
        run_to_end(&mut count);

        assert!(!count.trigger());
        count.step();
        assert_eq!(count.displayed(), 95);
        assert_eq!(count.stage(), CountStage::Finished);
    }

    #[test]
    fn test_trigger_while_running_keeps_progress() {
        let mut count = CountUp::new(300);
        count.trigger();
        for _ in 0..10 {
            count.step();
        }
        let midway = count.displayed();
        assert!(!count.trigger());
        assert_eq!(count.displayed(), midway);
        assert!(count.is_running());
    }

    #[test]
    fn test_idle_steps_are_ignored() {
        let mut count = CountUp::new(99);
        count.step();
        assert_eq!(count.displayed(), 0);
        assert_eq!(count.stage(), CountStage::Idle);
    }

    #[test]
    fn test_zero_target_finishes_on_first_step() {
        let mut count = CountUp::new(0);
        count.trigger();
        count.step();
        assert_eq!(count.stage(), CountStage::Finished);
        assert_eq!(count.displayed(), 0);
    }

    #[test]
    fn test_reducer_ignores_repeat_trigger() {
        let state = Rc::new(CountUp::new(10)).reduce(CountAction::Trigger);
        let again = state.clone().reduce(CountAction::Trigger);
        assert!(Rc::ptr_eq(&state, &again));
    }
}
