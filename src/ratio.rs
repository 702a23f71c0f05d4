//! Daylight ratio calculation.
//!
//! Maps a `(sunrise, sunset, now)` triple onto a single scalar in `[0, 1]`:
//! 0 at (or before) sunrise, 1 at (or after) sunset, and the linear fraction
//! of elapsed daylight in between. This is the only place the widget
//! interprets wall-clock values; everything downstream works on the ratio.

use crate::TimeOfDay;

/// Clamp a ratio into `[0, 1]`. NaN collapses to 0.
pub(crate) fn clamp01(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Compute the elapsed-daylight fraction for `now` within the
/// sunrise..sunset window.
///
/// All three times are reduced to minutes since midnight. The guards keep
/// the result total for every input:
/// - `sunset <= sunrise` (inverted or empty window): `0.0`
/// - `now <= sunrise` (before the window): `0.0`
/// - `now >= sunset` (past the window): `1.0`
/// - otherwise `(now - sunrise) / (sunset - sunrise)`
///
/// Pure and side-effect free. Hour/minute values outside their nominal
/// ranges are not validated; they shift the window like any other minute
/// offset.
pub fn elapsed_ratio(sunrise: TimeOfDay, sunset: TimeOfDay, now: TimeOfDay) -> f32 {
    let start = sunrise.minutes_of_day();
    let end = sunset.minutes_of_day();
    let cur = now.minutes_of_day();

    if end <= start {
        return 0.0;
    }
    if cur <= start {
        return 0.0;
    }
    if cur >= end {
        return 1.0;
    }

    (cur - start) as f32 / (end - start) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUNRISE: TimeOfDay = TimeOfDay::new(6, 0);
    const SUNSET: TimeOfDay = TimeOfDay::new(18, 0);

    #[test]
    fn exact_at_window_endpoints() {
        assert_eq!(elapsed_ratio(SUNRISE, SUNSET, SUNRISE), 0.0);
        assert_eq!(elapsed_ratio(SUNRISE, SUNSET, SUNSET), 1.0);
    }

    #[test]
    fn linear_fraction_inside_window() {
        // Midday is exactly half the 06:00-18:00 window
        let noon = TimeOfDay::new(12, 0);
        assert_eq!(elapsed_ratio(SUNRISE, SUNSET, noon), 0.5);

        // Quarter point
        let nine = TimeOfDay::new(9, 0);
        assert_eq!(elapsed_ratio(SUNRISE, SUNSET, nine), 0.25);
    }

    #[test]
    fn portland_midsummer_scenario() {
        // sunrise 06:17 (377 min), sunset 18:32 (1112 min), now 12:00 (720 min)
        // → (720 - 377) / (1112 - 377) = 343 / 735
        let ratio = elapsed_ratio(
            TimeOfDay::new(6, 17),
            TimeOfDay::new(18, 32),
            TimeOfDay::new(12, 0),
        );
        let expected = 343.0_f32 / 735.0;
        assert!((ratio - expected).abs() < 1e-6, "got {ratio}, want {expected}");
        assert!((ratio - 0.4667).abs() < 1e-3);
    }

    #[test]
    fn before_window_is_zero() {
        assert_eq!(elapsed_ratio(SUNRISE, SUNSET, TimeOfDay::new(5, 0)), 0.0);
        assert_eq!(elapsed_ratio(SUNRISE, SUNSET, TimeOfDay::new(0, 0)), 0.0);
    }

    #[test]
    fn after_window_is_one() {
        assert_eq!(elapsed_ratio(SUNRISE, SUNSET, TimeOfDay::new(19, 0)), 1.0);
        assert_eq!(elapsed_ratio(SUNRISE, SUNSET, TimeOfDay::new(23, 59)), 1.0);
    }

    #[test]
    fn degenerate_window_is_zero_for_any_now() {
        let six = TimeOfDay::new(6, 0);
        for hour in 0..24 {
            let now = TimeOfDay::new(hour, 30);
            assert_eq!(elapsed_ratio(six, six, now), 0.0, "now = {now}");
        }
    }

    #[test]
    fn inverted_window_is_zero_for_any_now() {
        // Sunset before sunrise: same guard as the empty window
        for hour in 0..24 {
            let now = TimeOfDay::new(hour, 0);
            assert_eq!(elapsed_ratio(SUNSET, SUNRISE, now), 0.0, "now = {now}");
        }
    }

    #[test]
    fn output_always_in_unit_interval() {
        // Sweep every valid hour/minute combination against a fixed window
        for hour in 0..24u8 {
            for minute in 0..60u8 {
                let now = TimeOfDay::new(hour, minute);
                let ratio = elapsed_ratio(TimeOfDay::new(6, 17), TimeOfDay::new(18, 32), now);
                assert!((0.0..=1.0).contains(&ratio), "ratio {ratio} at {now}");
            }
        }
    }

    #[test]
    fn clamp01_bounds_and_nan() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(0.25), 0.25);
        assert_eq!(clamp01(1.5), 1.0);
        assert_eq!(clamp01(f32::NAN), 0.0);
    }
}
