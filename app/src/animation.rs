//! Pure timing logic behind the count-up numbers and skill bars.
//!
//! The browser side (`hooks`) feeds these types with frame timestamps and
//! element positions; everything here is deterministic and testable.

use core::time::Duration;

/// Counts from zero up to `target` over `duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterAnimation {
    target: u32,
    duration: Duration,
}

impl CounterAnimation {
    pub const fn new(target: u32, duration: Duration) -> Self {
        Self { target, duration }
    }

    pub const fn target(&self) -> u32 {
        self.target
    }

    /// Displayed value `elapsed` after the start: linear, rounded down, and
    /// exactly `target` once `duration` has passed.
    pub fn value_at(&self, elapsed: Duration) -> u32 {
        if self.is_complete(elapsed) {
            return self.target;
        }
        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let value = (f64::from(self.target) * progress).floor();
        // progress < 1 here, so the value fits below target
        (value as u32).min(self.target)
    }

    pub fn is_complete(&self, elapsed: Duration) -> bool {
        self.duration.is_zero() || elapsed >= self.duration
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerMode {
    /// Fire on the first entry into view only.
    Once,
    /// Fire on every entry into view.
    Every,
}

/// Turns a stream of visibility observations into animation starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger {
    mode: TriggerMode,
    fired: bool,
    was_visible: bool,
}

impl Trigger {
    pub const fn new(mode: TriggerMode) -> Self {
        Self {
            mode,
            fired: false,
            was_visible: false,
        }
    }

    /// Records whether the element is visible now. Returns `true` when an
    /// animation should start.
    pub fn observe(&mut self, visible: bool) -> bool {
        let entered = visible && !self.was_visible;
        self.was_visible = visible;
        if !entered || (self.mode == TriggerMode::Once && self.fired) {
            return false;
        }
        self.fired = true;
        true
    }
}

/// Fraction of an element inside the viewport, in `0.0..=1.0`.
///
/// `top` is the element's offset from the top of the viewport, as reported
/// by `getBoundingClientRect`.
pub fn visible_fraction(top: f64, height: f64, viewport_height: f64) -> f64 {
    if height <= 0.0 || viewport_height <= 0.0 {
        return 0.0;
    }
    let visible = (top + height).min(viewport_height) - top.max(0.0);
    (visible / height).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Duration = Duration::from_millis(2500);

    #[test]
    fn test_counter_starts_at_zero_and_ends_at_target() {
        let counter = CounterAnimation::new(150, DURATION);
        assert_eq!(counter.value_at(Duration::ZERO), 0);
        assert_eq!(counter.value_at(DURATION), 150);
        assert_eq!(counter.value_at(Duration::from_secs(10)), 150);
        assert!(counter.is_complete(DURATION));
        assert!(!counter.is_complete(Duration::from_millis(2499)));
    }

    #[test]
    fn test_counter_rounds_down() {
        let counter = CounterAnimation::new(10, DURATION);
        assert_eq!(counter.value_at(Duration::from_millis(1249)), 4);
        assert_eq!(counter.value_at(Duration::from_millis(1250)), 5);
    }

    #[test]
    fn test_counter_is_monotonic_and_bounded() {
        let counter = CounterAnimation::new(37, DURATION);
        let mut previous = 0;
        for ms in (0..=3000).step_by(7) {
            let value = counter.value_at(Duration::from_millis(ms));
            assert!(value >= previous);
            assert!(value <= 37);
            previous = value;
        }
        assert_eq!(previous, 37);
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        let counter = CounterAnimation::new(8, Duration::ZERO);
        assert_eq!(counter.value_at(Duration::ZERO), 8);
        assert_eq!(CounterAnimation::new(0, DURATION).value_at(Duration::from_secs(1)), 0);
    }

    #[test]
    fn test_once_trigger_fires_a_single_time() {
        let mut trigger = Trigger::new(TriggerMode::Once);
        assert!(!trigger.observe(false));
        assert!(trigger.observe(true));
        assert!(!trigger.observe(true));
        assert!(!trigger.observe(false));
        assert!(!trigger.observe(true));
    }

    #[test]
    fn test_every_trigger_fires_on_each_entry() {
        let mut trigger = Trigger::new(TriggerMode::Every);
        assert!(trigger.observe(true));
        assert!(!trigger.observe(true));
        assert!(!trigger.observe(false));
        assert!(trigger.observe(true));
    }

    #[test]
    fn test_visible_fraction() {
        assert!((visible_fraction(0.0, 100.0, 800.0) - 1.0).abs() < f64::EPSILON);
        assert!((visible_fraction(750.0, 100.0, 800.0) - 0.5).abs() < f64::EPSILON);
        assert!((visible_fraction(-50.0, 100.0, 800.0) - 0.5).abs() < f64::EPSILON);
        assert!(visible_fraction(900.0, 100.0, 800.0).abs() < f64::EPSILON);
        assert!(visible_fraction(-200.0, 100.0, 800.0).abs() < f64::EPSILON);
        assert!(visible_fraction(0.0, 0.0, 800.0).abs() < f64::EPSILON);
    }
}
