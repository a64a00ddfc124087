//! Generation cycle state and timing.
//!
//! One cycle is the trigger-to-reset lifetime of the fake key generation:
//! the flag goes true on trigger and back to false [`CYCLE_SECS`] later.
//! The scramble readout and the pulse renderer both key off this flag.
//!
//! The struct carries no reentrancy guard on purpose: a second trigger
//! while a cycle runs is blocked at the interaction boundary (the shell
//! ignores clicks and dims the button), not here.

/// Seconds from trigger until the flag resets.
pub const CYCLE_SECS: f64 = 5.0;

/// Seconds between scramble character appends.
pub const STEP_SECS: f64 = 0.1;

/// Scramble appends per cycle. The k-th lands at k * [`STEP_SECS`]
/// (k = 0..STEP_COUNT), so the last one is in place 100 ms before reset.
pub const STEP_COUNT: usize = 50;

/// Two-state trigger flag: false -> true (trigger) -> false (reset).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationCycle {
    generating: bool,
}

impl GenerationCycle {
    pub fn new() -> Self {
        Self { generating: false }
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// Flag transition on user trigger.
    pub fn trigger(&mut self) {
        self.generating = true;
    }

    /// Flag transition when the reset timer fires.
    pub fn finish(&mut self) {
        self.generating = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let cycle = GenerationCycle::new();
        assert!(!cycle.is_generating());
    }

    #[test]
    fn test_trigger_then_finish() {
        let mut cycle = GenerationCycle::new();

        cycle.trigger();
        assert!(cycle.is_generating());

        cycle.finish();
        assert!(!cycle.is_generating());
    }

    #[test]
    fn test_step_schedule_fits_cycle() {
        // Appends run at 0, 100, ..., 4900 ms; the reset fires at 5000 ms.
        let last_step = (STEP_COUNT - 1) as f64 * STEP_SECS;
        assert!(last_step < CYCLE_SECS);
        assert_eq!(STEP_COUNT, crate::scramble::SCRAMBLE_LEN);
    }
}
