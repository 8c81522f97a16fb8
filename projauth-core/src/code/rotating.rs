//! Countdown state machine for the rotating display code
//!
//! `RotatingCode` holds the current code and the seconds left before it is
//! replaced. It knows nothing about clocks: the owner calls [`RotatingCode::tick`]
//! once per second. See [`crate::code::rotator`] for the timer-driven wrapper.

use crate::code::generator::generate_with;
use crate::types::{CodeLength, DisplayCode, DEFAULT_PERIOD_SECS};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Display code with its regeneration countdown
///
/// Invariants: `code().len() == length().get()` and
/// `1 <= remaining() <= period()` at all times.
#[derive(Debug)]
pub struct RotatingCode {
    length: CodeLength,
    period: u32,
    remaining: u32,
    code: DisplayCode,
    generation: u64,
    rng: StdRng,
}

impl RotatingCode {
    /// Create a rotating code with the default 30 second period
    pub fn new(length: CodeLength) -> Self {
        Self::with_period(length, DEFAULT_PERIOD_SECS)
    }

    /// Create a rotating code with a custom period (clamped to at least 1s)
    pub fn with_period(length: CodeLength, period_secs: u32) -> Self {
        Self::with_rng(length, period_secs, StdRng::from_entropy())
    }

    /// Create a rotating code drawing digits from `rng`
    pub fn with_rng(length: CodeLength, period_secs: u32, mut rng: StdRng) -> Self {
        let period = period_secs.max(1);
        let code = generate_with(length, &mut rng);

        Self {
            length,
            period,
            remaining: period,
            code,
            generation: 0,
            rng,
        }
    }

    /// Advance the countdown by one second
    ///
    /// When the countdown reaches zero the code is regenerated and the
    /// countdown starts again from the full period.
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.regenerate();
        }
    }

    /// Change the code length, regenerating immediately
    pub fn set_length(&mut self, length: CodeLength) {
        self.length = length;
        self.regenerate();
    }

    /// Regenerate the code now, independent of the countdown
    pub fn regenerate_now(&mut self) {
        self.regenerate();
    }

    fn regenerate(&mut self) {
        self.code = generate_with(self.length, &mut self.rng);
        self.remaining = self.period;
        self.generation += 1;
        debug!(
            generation = self.generation,
            length = self.length.get(),
            "Display code regenerated"
        );
    }

    /// Current display code
    pub fn code(&self) -> &DisplayCode {
        &self.code
    }

    /// Seconds left before the next automatic regeneration
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Configured code length
    pub fn length(&self) -> CodeLength {
        self.length
    }

    /// Regeneration period in seconds
    pub fn period(&self) -> u32 {
        self.period
    }

    /// Number of regenerations since creation
    ///
    /// The initial code is generation 0. Use this to detect a regeneration
    /// since two successive codes may be equal.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(length: usize) -> RotatingCode {
        RotatingCode::with_rng(
            CodeLength::new(length),
            DEFAULT_PERIOD_SECS,
            StdRng::seed_from_u64(1),
        )
    }

    #[test]
    fn test_starts_at_full_period() {
        let rotating = seeded(6);
        assert_eq!(rotating.remaining(), 30);
        assert_eq!(rotating.generation(), 0);
        assert_eq!(rotating.code().len(), 6);
    }

    #[test]
    fn test_zero_period_is_clamped() {
        let rotating = RotatingCode::with_period(CodeLength::new(4), 0);
        assert_eq!(rotating.period(), 1);
        assert_eq!(rotating.remaining(), 1);
    }

    #[test]
    fn test_one_second_period_regenerates_every_tick() {
        let mut rotating = RotatingCode::with_rng(CodeLength::new(4), 1, StdRng::seed_from_u64(3));
        for expected in 1..=5 {
            rotating.tick();
            assert_eq!(rotating.generation(), expected);
            assert_eq!(rotating.remaining(), 1);
        }
    }
}
