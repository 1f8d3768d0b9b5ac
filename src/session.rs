// WallSit - Session Timer / Scorer
//
// Counters and calibration data that the state machine mutates. Kept apart
// from the transition logic so the arithmetic can be tested on its own.

use crate::angle::wrap_deg;

/// Hit/attempt counters for the running session plus lifetime totals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionCounters {
    score: u32,
    max_score: u32,
    session_total: u32,
    percentage_sum: f64,
}

impl SessionCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new workout session: clear the per-session counters.
    pub fn begin_session(&mut self) {
        self.score = 0;
        self.max_score = 0;
        self.session_total += 1;
    }

    /// Count one workout tick; `on_target` adds a hit.
    pub fn record_tick(&mut self, on_target: bool) {
        self.max_score += 1;
        if on_target {
            self.score += 1;
        }
    }

    /// Fold the current session ratio into the lifetime sum.
    pub fn finish_session(&mut self) -> f64 {
        let ratio = self.ratio();
        self.percentage_sum += ratio;
        ratio
    }

    /// Hits over attempts; 0 when nothing has been scored yet.
    pub fn ratio(&self) -> f64 {
        if self.max_score == 0 {
            0.0
        } else {
            self.score as f64 / self.max_score as f64
        }
    }

    /// Session percentage truncated to a whole number, 0–100.
    pub fn percentage(&self) -> u32 {
        if self.max_score == 0 {
            0
        } else {
            // Multiply first so 7/10 comes out as exactly 70.
            (self.score as u64 * 100 / self.max_score as u64) as u32
        }
    }

    /// Mean session ratio over the device lifetime; 0 before any session.
    pub fn average_ratio(&self) -> f64 {
        if self.session_total == 0 {
            0.0
        } else {
            self.percentage_sum / self.session_total as f64
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    pub fn session_total(&self) -> u32 {
        self.session_total
    }

    pub fn percentage_sum(&self) -> f64 {
        self.percentage_sum
    }

    #[cfg(test)]
    pub(crate) fn set_scores(&mut self, score: u32, max_score: u32) {
        self.score = score;
        self.max_score = max_score;
    }
}

/// Pitch locked at the end of calibration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CalibrationTarget {
    target_pitch: f32,
    locked: bool,
}

impl CalibrationTarget {
    /// Lock the target if it is still open. Returns `true` on the call that locks.
    pub fn lock(&mut self, pitch: f32) -> bool {
        if self.locked {
            return false;
        }
        self.target_pitch = pitch;
        self.locked = true;
        true
    }

    /// Forget the target ahead of a new calibration phase.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn target_pitch(&self) -> f32 {
        self.target_pitch
    }

    /// Whether `pitch` is within `tolerance` degrees of the target, measured
    /// along the shorter way round.
    pub fn is_on_target(&self, pitch: f32, tolerance: f32) -> bool {
        wrap_deg(pitch - self.target_pitch).abs() <= tolerance
    }
}

/// Workout length, adjustable during calibration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionThreshold {
    current_ms: i64,
    default_ms: i64,
}

impl SessionThreshold {
    pub fn new(default_ms: i64) -> Self {
        Self {
            current_ms: default_ms,
            default_ms,
        }
    }

    /// Shift the threshold by `delta_ms`. Unbounded until `clamp_to_default`.
    pub fn adjust(&mut self, delta_ms: i64) {
        self.current_ms = self.current_ms.saturating_add(delta_ms);
    }

    /// Raise the threshold to at least the default and return it.
    pub fn clamp_to_default(&mut self) -> u64 {
        self.current_ms = self.current_ms.max(self.default_ms);
        self.current_ms as u64
    }

    pub fn current_ms(&self) -> i64 {
        self.current_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_is_zero_without_attempts() {
        let counters = SessionCounters::new();
        assert_eq!(counters.ratio(), 0.0);
        assert_eq!(counters.percentage(), 0);
        assert_eq!(counters.average_ratio(), 0.0);
    }

    #[test]
    fn test_record_and_finish_session() {
        let mut counters = SessionCounters::new();
        counters.begin_session();
        for i in 0..10 {
            counters.record_tick(i < 7);
        }
        assert_eq!(counters.score(), 7);
        assert_eq!(counters.max_score(), 10);
        assert_eq!(counters.percentage(), 70);

        let ratio = counters.finish_session();
        assert!((ratio - 0.7).abs() < 1e-12);
        assert!((counters.percentage_sum() - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_begin_session_keeps_lifetime_totals() {
        let mut counters = SessionCounters::new();
        counters.begin_session();
        counters.record_tick(true);
        counters.finish_session();

        counters.begin_session();
        assert_eq!(counters.score(), 0);
        assert_eq!(counters.max_score(), 0);
        assert_eq!(counters.session_total(), 2);
        assert!((counters.average_ratio() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_percentage_truncates() {
        let mut counters = SessionCounters::new();
        counters.set_scores(2, 3);
        assert_eq!(counters.percentage(), 66);
    }

    #[test]
    fn test_target_locks_once() {
        let mut target = CalibrationTarget::default();
        assert!(target.lock(12.5));
        assert!(!target.lock(40.0));
        assert_eq!(target.target_pitch(), 12.5);

        target.reset();
        assert!(!target.is_locked());
        assert!(target.lock(-3.0));
        assert_eq!(target.target_pitch(), -3.0);
    }

    #[test]
    fn test_on_target_tolerance_is_inclusive() {
        let mut target = CalibrationTarget::default();
        target.lock(10.0);
        assert!(target.is_on_target(15.0, 5.0));
        assert!(target.is_on_target(5.0, 5.0));
        assert!(!target.is_on_target(15.5, 5.0));

        // Across the ±180° fold.
        let mut target = CalibrationTarget::default();
        target.lock(179.0);
        assert!(target.is_on_target(-178.0, 5.0));
        assert!(target.is_on_target(-176.0, 5.0));
        assert!(!target.is_on_target(-175.0, 5.0));
        assert!(!target.is_on_target(0.0, 5.0));
    }

    #[test]
    fn test_threshold_clamps_only_on_demand() {
        let mut threshold = SessionThreshold::new(15_000);
        threshold.adjust(-5_000);
        threshold.adjust(-5_000);
        assert_eq!(threshold.current_ms(), 5_000);
        assert_eq!(threshold.clamp_to_default(), 15_000);

        threshold.adjust(10_000);
        assert_eq!(threshold.clamp_to_default(), 25_000);
    }
}
