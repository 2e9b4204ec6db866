//! Press Feedback - Per-Card Scale Animation
//!
//! A small state machine driving a card's scale factor:
//!
//! ```text
//!          touch-down              touch-up / cancel
//!   Idle ─────────────► Pressed ─────────────────────► Releasing
//!    ▲                    ▲                                │
//!    │                    └────────── touch-down ──────────┤
//!    └─────────────────── animation complete ──────────────┘
//! ```
//!
//! Time is passed in by the caller, so the machine never reads a clock.
//! A new transition always starts from the value currently on screen.

use std::time::{Duration, Instant};

use crate::constants::{PRESSED_SCALE, PRESS_DURATION_MS, RELEASE_DURATION_MS, RESTING_SCALE};

/// Quadratic ease-out, `t` in `[0, 1]`
pub fn ease_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * (2.0 - t)
}

/// Animation phase of a card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PressPhase {
    /// At rest, scale 1.0
    #[default]
    Idle,
    /// Held down, animating toward (or sitting at) the pressed scale
    Pressed,
    /// Released, animating back to rest
    Releasing,
}

/// Durations of the two interpolations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressTiming {
    pub press: Duration,
    pub release: Duration,
}

impl Default for PressTiming {
    fn default() -> Self {
        Self {
            press: Duration::from_millis(PRESS_DURATION_MS),
            release: Duration::from_millis(RELEASE_DURATION_MS),
        }
    }
}

/// A single time-based interpolation
#[derive(Debug, Clone, Copy)]
struct Tween {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl Tween {
    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    fn value_at(&self, now: Instant) -> f32 {
        self.from + (self.to - self.from) * ease_out_quad(self.progress(now))
    }

    fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Press-feedback animation owned by one card
#[derive(Debug, Clone, Default)]
pub struct PressAnimation {
    timing: PressTiming,
    phase: PressPhase,
    tween: Option<Tween>,
}

impl PressAnimation {
    pub fn new(timing: PressTiming) -> Self {
        Self {
            timing,
            phase: PressPhase::Idle,
            tween: None,
        }
    }

    /// Touch-down: animate toward the pressed scale
    pub fn press(&mut self, now: Instant) {
        self.start(PRESSED_SCALE, self.timing.press, now);
        self.phase = PressPhase::Pressed;
    }

    /// Touch-up or cancel: animate back to rest
    ///
    /// Returns `false` (and does nothing) when the card was not pressed.
    pub fn release(&mut self, now: Instant) -> bool {
        if self.phase != PressPhase::Pressed {
            return false;
        }
        self.start(RESTING_SCALE, self.timing.release, now);
        self.phase = PressPhase::Releasing;
        true
    }

    fn start(&mut self, target: f32, duration: Duration, now: Instant) {
        let from = self.scale_at(now);
        self.tween = Some(Tween {
            from,
            to: target,
            started: now,
            duration,
        });
    }

    /// Current scale factor, always within `[PRESSED_SCALE, RESTING_SCALE]`
    pub fn scale_at(&self, now: Instant) -> f32 {
        self.tween
            .map_or(RESTING_SCALE, |tween| tween.value_at(now))
            .clamp(PRESSED_SCALE, RESTING_SCALE)
    }

    /// Phase as observed at `now`; a finished release reads as idle
    pub fn phase_at(&self, now: Instant) -> PressPhase {
        match (self.phase, self.tween) {
            (PressPhase::Releasing, Some(tween)) if tween.is_finished(now) => PressPhase::Idle,
            (phase, _) => phase,
        }
    }

    /// Whether an interpolation is still in flight
    pub fn is_animating(&self, now: Instant) -> bool {
        self.tween.is_some_and(|tween| !tween.is_finished(now))
    }

    /// Whether the pointer is currently held on the card
    pub fn is_pressed(&self) -> bool {
        self.phase == PressPhase::Pressed
    }

    /// Drop a finished release and return to idle
    pub fn tick(&mut self, now: Instant) {
        if self.phase_at(now) == PressPhase::Idle {
            self.phase = PressPhase::Idle;
            self.tween = None;
        }
    }

    /// Snap back to rest, discarding any running interpolation
    pub fn reset(&mut self) {
        self.phase = PressPhase::Idle;
        self.tween = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_ease_out_quad() {
        assert_close(ease_out_quad(0.0), 0.0);
        assert_close(ease_out_quad(0.5), 0.75);
        assert_close(ease_out_quad(1.0), 1.0);
        assert_close(ease_out_quad(2.0), 1.0);
    }

    #[test]
    fn test_idle_by_default() {
        let anim = PressAnimation::default();
        let now = Instant::now();
        assert_eq!(anim.phase_at(now), PressPhase::Idle);
        assert_close(anim.scale_at(now), RESTING_SCALE);
        assert!(!anim.is_animating(now));
    }

    #[test]
    fn test_press_animates_toward_pressed_scale() {
        let t0 = Instant::now();
        let mut anim = PressAnimation::default();
        anim.press(t0);

        assert_eq!(anim.phase_at(t0), PressPhase::Pressed);
        assert_close(anim.scale_at(t0), RESTING_SCALE);
        // Halfway through 120ms: eased progress 0.75
        assert_close(anim.scale_at(t0 + ms(60)), 1.0 - 0.03 * 0.75);
        assert!(anim.is_animating(t0 + ms(60)));
        assert_close(anim.scale_at(t0 + ms(120)), PRESSED_SCALE);
        assert!(!anim.is_animating(t0 + ms(500)));
        // Held: stays pressed after the tween finishes
        assert_eq!(anim.phase_at(t0 + ms(500)), PressPhase::Pressed);
    }

    #[test]
    fn test_release_returns_to_idle() {
        let t0 = Instant::now();
        let mut anim = PressAnimation::default();
        anim.press(t0);
        let t1 = t0 + ms(200);
        assert!(anim.release(t1));

        assert_eq!(anim.phase_at(t1), PressPhase::Releasing);
        assert_close(anim.scale_at(t1), PRESSED_SCALE);
        assert!(anim.scale_at(t1 + ms(80)) > PRESSED_SCALE);
        assert_eq!(anim.phase_at(t1 + ms(160)), PressPhase::Idle);
        assert_close(anim.scale_at(t1 + ms(160)), RESTING_SCALE);

        anim.tick(t1 + ms(160));
        assert!(!anim.is_pressed());
        assert_close(anim.scale_at(t1 + ms(1000)), RESTING_SCALE);
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let t0 = Instant::now();
        let mut anim = PressAnimation::default();
        assert!(!anim.release(t0));
        assert_eq!(anim.phase_at(t0), PressPhase::Idle);
    }

    #[test]
    fn test_interrupt_starts_from_current_value() {
        let t0 = Instant::now();
        let mut anim = PressAnimation::default();
        anim.press(t0);

        let t1 = t0 + ms(30);
        let mid = anim.scale_at(t1);
        assert!(mid < RESTING_SCALE && mid > PRESSED_SCALE);

        anim.release(t1);
        // No snapping: the release starts where the press left off
        assert_close(anim.scale_at(t1), mid);

        let t2 = t1 + ms(40);
        let mid2 = anim.scale_at(t2);
        anim.press(t2);
        assert_close(anim.scale_at(t2), mid2);
    }

    #[test]
    fn test_rapid_press_release_settles_at_rest() {
        let t0 = Instant::now();
        let mut anim = PressAnimation::default();
        anim.press(t0);
        anim.release(t0 + ms(1));

        assert_close(anim.scale_at(t0 + ms(1000)), RESTING_SCALE);
        assert_eq!(anim.phase_at(t0 + ms(1000)), PressPhase::Idle);
    }

    #[test]
    fn test_scale_stays_in_range() {
        let t0 = Instant::now();
        let mut anim = PressAnimation::default();
        let mut now = t0;
        for step in 0..200u64 {
            now += ms(7);
            match step % 5 {
                0 => anim.press(now),
                3 => {
                    anim.release(now);
                }
                _ => anim.tick(now),
            }
            let scale = anim.scale_at(now);
            assert!(
                (PRESSED_SCALE..=RESTING_SCALE).contains(&scale),
                "scale {scale} out of range at step {step}"
            );
        }
    }

    #[test]
    fn test_zero_duration_jumps() {
        let t0 = Instant::now();
        let mut anim = PressAnimation::new(PressTiming {
            press: Duration::ZERO,
            release: Duration::ZERO,
        });
        anim.press(t0);
        assert_close(anim.scale_at(t0), PRESSED_SCALE);
        anim.release(t0);
        assert_eq!(anim.phase_at(t0), PressPhase::Idle);
    }

    #[test]
    fn test_reset() {
        let t0 = Instant::now();
        let mut anim = PressAnimation::default();
        anim.press(t0);
        anim.reset();
        assert_eq!(anim.phase_at(t0 + ms(10)), PressPhase::Idle);
        assert_close(anim.scale_at(t0 + ms(10)), RESTING_SCALE);
    }
}
