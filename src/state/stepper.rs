//! StepperState - Linear Step Progression

use ahash::AHashSet;

/// Progress through an ordered set of steps (0-based internally)
#[derive(Debug, Clone)]
pub struct StepperState {
    active: usize,
    count: usize,
    completed: AHashSet<usize>,
}

impl StepperState {
    /// A stepper over `count` steps, starting at the first
    pub fn new(count: usize) -> Self {
        Self {
            active: 0,
            count,
            completed: AHashSet::new(),
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_completed(&self, step: usize) -> bool {
        self.completed.contains(&step)
    }

    /// Whether the active step is the last one
    pub fn is_last(&self) -> bool {
        self.count == 0 || self.active == self.count - 1
    }

    /// Mark the active step complete and move forward; a no-op on the last
    /// step apart from marking it complete
    pub fn advance(&mut self) {
        if self.count == 0 {
            return;
        }
        self.completed.insert(self.active);
        if self.active + 1 < self.count {
            self.active += 1;
        }
    }

    /// Step back without touching completion marks
    pub fn back(&mut self) {
        self.active = self.active.saturating_sub(1);
    }

    /// Jump to a step, clamped into range
    pub fn go_to(&mut self, step: usize) {
        if self.count == 0 {
            return;
        }
        self.active = step.min(self.count - 1);
    }

    /// Reset progression and completion
    pub fn reset(&mut self) {
        self.active = 0;
        self.completed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_marks_complete_and_moves() {
        let mut stepper = StepperState::new(3);
        stepper.advance();
        assert!(stepper.is_completed(0));
        assert_eq!(stepper.active(), 1);
    }

    #[test]
    fn test_advance_on_last_step_stays() {
        let mut stepper = StepperState::new(2);
        stepper.advance();
        stepper.advance();
        stepper.advance();
        assert_eq!(stepper.active(), 1);
        assert!(stepper.is_completed(1));
    }

    #[test]
    fn test_back_stops_at_first_step() {
        let mut stepper = StepperState::new(3);
        stepper.back();
        assert_eq!(stepper.active(), 0);
    }

    #[test]
    fn test_go_to_clamps_past_end() {
        let mut stepper = StepperState::new(3);
        stepper.go_to(10);
        assert_eq!(stepper.active(), 2);
    }

    #[test]
    fn test_empty_stepper_is_inert() {
        let mut stepper = StepperState::new(0);
        stepper.advance();
        stepper.go_to(5);
        assert_eq!(stepper.active(), 0);
    }
}
