//! Ratio sweep animation.
//!
//! A single cooperatively-scheduled timeline per widget: the host calls in
//! once per frame and the animator linearly interpolates the displayed ratio
//! from `from` to `to` over a fixed duration. Starting a new sweep always
//! supersedes the old one; there is no queueing and no concurrent session.
//!
//! Every sweep carries a generation number. A host that scheduled frame
//! callbacks for an earlier sweep can pass the generation it captured to
//! [`RatioAnimator::tick`]; ticks from a superseded generation are dropped
//! instead of applied, so a stale callback can never drag the ratio
//! backwards.
//!
//! All entry points have `*_at` twins taking an explicit [`Instant`], which
//! keeps the timeline deterministic under test.

use crate::ratio::clamp01;
use std::time::{Duration, Instant};

/// Sweep duration used by the widget's refresh entry point.
pub const DEFAULT_SWEEP: Duration = Duration::from_millis(1200);

/// One in-flight interpolation session.
#[derive(Clone, Copy, Debug)]
struct Sweep {
    from: f32,
    to: f32,
    duration: Duration,
    started_at: Instant,
}

impl Sweep {
    /// Elapsed fraction in `[0, 1]` at `at`. Zero-duration sweeps complete
    /// immediately.
    fn progress(&self, at: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = at.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

/// Drives the displayed ratio between sweep targets.
///
/// Holds the current ratio (always clamped to `[0, 1]`), at most one active
/// [`Sweep`], and the generation counter that invalidates stale ticks.
#[derive(Debug)]
pub struct RatioAnimator {
    current: f32,
    sweep: Option<Sweep>,
    generation: u64,
}

impl RatioAnimator {
    pub fn new(initial: f32) -> Self {
        Self {
            current: clamp01(initial),
            sweep: None,
            generation: 0,
        }
    }

    /// The ratio as of the last sample. Never outside `[0, 1]`.
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Where the ratio is headed: the active sweep's target, or the current
    /// value when idle.
    pub fn target(&self) -> f32 {
        self.sweep.map_or(self.current, |s| s.to)
    }

    pub fn is_running(&self) -> bool {
        self.sweep.is_some()
    }

    /// Generation of the most recent sweep. Hosts capture this when they
    /// schedule frame callbacks and hand it back through [`tick`](Self::tick).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Set the ratio directly, cancelling any running sweep.
    pub fn set(&mut self, ratio: f32) {
        self.cancel();
        self.current = clamp01(ratio);
    }

    /// Start a sweep from `from` to `to` over `duration`, superseding any
    /// sweep already running. Returns the new generation.
    pub fn start(&mut self, from: f32, to: f32, duration: Duration) -> u64 {
        self.start_at(from, to, duration, Instant::now())
    }

    /// [`start`](Self::start) anchored at an explicit instant.
    pub fn start_at(&mut self, from: f32, to: f32, duration: Duration, at: Instant) -> u64 {
        let from = clamp01(from);
        self.generation = self.generation.wrapping_add(1);
        self.current = from;
        self.sweep = Some(Sweep {
            from,
            to: clamp01(to),
            duration,
            started_at: at,
        });
        self.generation
    }

    /// Stop the active sweep, leaving the ratio wherever the last sample put
    /// it. No snap to target, no snap back to start.
    pub fn cancel(&mut self) {
        if self.sweep.take().is_some() {
            self.generation = self.generation.wrapping_add(1);
        }
    }

    /// Complete the active sweep immediately, jumping to its target.
    pub fn finish(&mut self) {
        if let Some(sweep) = self.sweep.take() {
            self.current = sweep.to;
            self.generation = self.generation.wrapping_add(1);
        }
    }

    /// Advance the timeline to now and return the current ratio.
    pub fn sample(&mut self) -> f32 {
        self.sample_at(Instant::now())
    }

    /// Advance the timeline to `at` and return the current ratio. The sweep
    /// ends (and the animator goes idle) once the elapsed fraction reaches 1.
    pub fn sample_at(&mut self, at: Instant) -> f32 {
        if let Some(sweep) = self.sweep {
            let t = sweep.progress(at);
            if t >= 1.0 {
                // Land exactly on the target, not on from + delta rounding.
                self.current = sweep.to;
                self.sweep = None;
            } else {
                self.current = sweep.from + (sweep.to - sweep.from) * t;
            }
        }
        self.current
    }

    /// A host frame tick for the sweep identified by `generation`.
    ///
    /// Returns the updated ratio, or `None` when the tick belongs to a
    /// superseded generation (or no sweep is running). Stale ticks are
    /// dropped, never applied.
    pub fn tick(&mut self, generation: u64, at: Instant) -> Option<f32> {
        if generation != self.generation || self.sweep.is_none() {
            return None;
        }
        Some(self.sample_at(at))
    }
}

impl Default for RatioAnimator {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(t0: Instant, ms: u64) -> Instant {
        t0 + Duration::from_millis(ms)
    }

    #[test]
    fn linear_interpolation_law() {
        let t0 = Instant::now();
        let mut anim = RatioAnimator::new(0.0);
        anim.start_at(0.2, 0.8, Duration::from_millis(1200), t0);

        // Elapsed 0 yields the start value
        assert_eq!(anim.sample_at(t0), 0.2);

        // Halfway yields the midpoint
        let mid = anim.sample_at(at(t0, 600));
        assert!((mid - 0.5).abs() < 1e-6, "got {mid}");

        // At or past the duration yields exactly the target
        assert_eq!(anim.sample_at(at(t0, 1200)), 0.8);
        assert!(!anim.is_running());
        assert_eq!(anim.sample_at(at(t0, 5000)), 0.8);
    }

    #[test]
    fn endpoints_are_clamped_before_starting() {
        let t0 = Instant::now();
        let mut anim = RatioAnimator::new(0.0);
        anim.start_at(-0.5, 1.5, Duration::from_millis(100), t0);

        assert_eq!(anim.sample_at(t0), 0.0);
        assert_eq!(anim.sample_at(at(t0, 100)), 1.0);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let t0 = Instant::now();
        let mut anim = RatioAnimator::new(0.3);
        anim.start_at(0.3, 0.9, Duration::ZERO, t0);
        assert_eq!(anim.sample_at(t0), 0.9);
        assert!(!anim.is_running());
    }

    #[test]
    fn new_sweep_supersedes_running_sweep() {
        let t0 = Instant::now();
        let mut anim = RatioAnimator::new(0.0);
        anim.start_at(0.0, 1.0, Duration::from_millis(1000), t0);
        anim.sample_at(at(t0, 500));

        // Halfway through, redirect toward 0 over a fresh second
        anim.start_at(anim.current(), 0.0, Duration::from_millis(1000), at(t0, 500));
        assert_eq!(anim.target(), 0.0);

        let v = anim.sample_at(at(t0, 1000));
        assert!((v - 0.25).abs() < 1e-6, "redirected sweep half done, got {v}");
        assert_eq!(anim.sample_at(at(t0, 1500)), 0.0);
    }

    #[test]
    fn stale_generation_ticks_are_dropped() {
        let t0 = Instant::now();
        let mut anim = RatioAnimator::new(0.0);
        let first = anim.start_at(0.0, 1.0, Duration::from_millis(1000), t0);
        let second = anim.start_at(0.0, 0.4, Duration::from_millis(1000), t0);
        assert_ne!(first, second);

        // A callback scheduled for the first sweep fires late: ignored.
        assert_eq!(anim.tick(first, at(t0, 1000)), None);
        assert_eq!(anim.current(), 0.0, "stale tick must not move the ratio");

        // The live generation still advances normally.
        assert_eq!(anim.tick(second, at(t0, 1000)), Some(0.4));
        // Once the sweep completes, even live-generation ticks are no-ops.
        assert_eq!(anim.tick(second, at(t0, 2000)), None);
    }

    #[test]
    fn cancel_leaves_ratio_where_it_was() {
        let t0 = Instant::now();
        let mut anim = RatioAnimator::new(0.0);
        anim.start_at(0.0, 1.0, Duration::from_millis(1000), t0);
        anim.sample_at(at(t0, 250));
        anim.cancel();

        assert!(!anim.is_running());
        let v = anim.current();
        assert!((v - 0.25).abs() < 1e-6, "cancelled mid-flight at {v}");
        // Further sampling does not resurrect the sweep
        assert_eq!(anim.sample_at(at(t0, 2000)), v);
    }

    #[test]
    fn finish_snaps_to_target() {
        let t0 = Instant::now();
        let mut anim = RatioAnimator::new(0.0);
        anim.start_at(0.0, 0.7, Duration::from_millis(1000), t0);
        anim.finish();
        assert_eq!(anim.current(), 0.7);
        assert!(!anim.is_running());
    }

    #[test]
    fn set_cancels_and_clamps() {
        let t0 = Instant::now();
        let mut anim = RatioAnimator::new(0.0);
        anim.start_at(0.0, 1.0, Duration::from_millis(1000), t0);
        anim.set(2.0);
        assert!(!anim.is_running());
        assert_eq!(anim.current(), 1.0);
    }

    #[test]
    fn sampling_before_the_anchor_stays_at_start() {
        let t0 = Instant::now() + Duration::from_millis(500);
        let mut anim = RatioAnimator::new(0.0);
        anim.start_at(0.1, 0.9, Duration::from_millis(1000), t0);
        // A sample taken before the anchor instant clamps elapsed to zero
        assert_eq!(anim.sample_at(t0 - Duration::from_millis(200)), 0.1);
    }
}
