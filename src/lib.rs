//! # Sun Tracker Core Library
//!
//! This library provides a daylight-arc widget: a semicircular track with an
//! animated sun marker that shows how much of the day between sunrise and
//! sunset has elapsed. It renders into any [`embedded_graphics`] draw target,
//! from memory-mapped LCD framebuffers to e-ink display buffers, and ships an
//! ASCII preview for hardware-free development.
//!
//! ## Design Philosophy
//!
//! ### Pure geometry, cooperative animation
//! - **No hidden clock**: the widget never reads the wall clock on its own.
//!   Callers supply sunrise, sunset, and "now" as plain hour/minute pairs;
//!   the widget turns them into a normalized ratio in `[0, 1]`.
//! - **Host-driven frames**: animation advances only when the host calls
//!   [`widget::SunArc::tick`], so the widget fits any per-frame scheduling
//!   mechanism (display refresh callback, timer loop, test harness).
//! - **Degrade, don't fail**: degenerate inputs clamp to an inert visual
//!   state. Nothing in the drawing path returns a domain error.
//!
//! ### Data Flow
//! 1. **Caller**: supplies `(sunrise, sunset, now)` via [`widget::SunArc::refresh`]
//! 2. **Ratio**: [`ratio::elapsed_ratio`] maps the triple to `[0, 1]`
//! 3. **Animation**: [`animation::RatioAnimator`] sweeps toward the new ratio
//! 4. **Layout**: [`layout::ArcLayout`] derives the marker position on the arc
//! 5. **Renderer**: [`renderer`] emits track, elapsed fill, marker, and labels
//!
//! ## Core Types
//!
//! The library exports two root-level types shared by every module:
//! - [`TimeOfDay`]: an immutable wall-clock hour/minute pair
//! - [`LabelFormatter`]: the caller-supplied hook that turns a [`TimeOfDay`]
//!   into the label text drawn at the arc endpoints

use serde::{Deserialize, Serialize};
use std::fmt;

// Module declarations
pub mod animation;
pub mod config;
pub mod layout;
pub mod ratio;
pub mod renderer;
pub mod style;
pub mod widget;

/// A wall-clock instant with no date or timezone attached.
///
/// Fields are plain hours/minutes so the type stays `Copy` and trivially
/// serializable. The nominal ranges are `hour` 0..=23 and `minute` 0..=59;
/// values outside those ranges are a caller contract violation and are not
/// validated here; arithmetic simply treats them as oversized minute
/// offsets.
///
/// # Example
/// ```
/// use sun_arc_lib::TimeOfDay;
///
/// let sunrise = TimeOfDay::new(6, 17);
/// assert_eq!(sunrise.minutes_of_day(), 377);
/// assert_eq!(sunrise.to_string(), "06:17");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    /// Hour of day (0..=23)
    pub hour: u8,
    /// Minute of hour (0..=59)
    pub minute: u8,
}

impl TimeOfDay {
    /// Create a time-of-day pair. No range validation is performed.
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    /// Minutes since midnight. All comparisons between times go through
    /// this value.
    pub const fn minutes_of_day(self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl From<chrono::NaiveTime> for TimeOfDay {
    fn from(t: chrono::NaiveTime) -> Self {
        use chrono::Timelike;
        Self::new(t.hour() as u8, t.minute() as u8)
    }
}

/// Caller-supplied hook that formats the sunrise/sunset endpoint labels.
///
/// Implementors only need [`format`](LabelFormatter::format); the
/// per-endpoint methods default to it and exist for callers that want
/// different text at each end of the arc (say, `"^ 06:17"` / `"v 18:32"`).
///
/// Plain closures work too:
/// ```
/// use sun_arc_lib::{LabelFormatter, TimeOfDay};
///
/// let formatter = |t: TimeOfDay| format!("{:02}h {:02}m", t.hour, t.minute);
/// assert_eq!(formatter.format(TimeOfDay::new(6, 17)), "06h 17m");
/// ```
pub trait LabelFormatter {
    /// Format a time for display.
    fn format(&self, t: TimeOfDay) -> String;

    /// Format the sunrise endpoint label. Defaults to [`format`](Self::format).
    fn format_sunrise(&self, t: TimeOfDay) -> String {
        self.format(t)
    }

    /// Format the sunset endpoint label. Defaults to [`format`](Self::format).
    fn format_sunset(&self, t: TimeOfDay) -> String {
        self.format(t)
    }
}

impl<F> LabelFormatter for F
where
    F: Fn(TimeOfDay) -> String,
{
    fn format(&self, t: TimeOfDay) -> String {
        self(t)
    }
}

/// Built-in zero-padded `HH:MM` formatter, used whenever the caller has not
/// installed one of their own.
#[derive(Clone, Copy, Debug, Default)]
pub struct HourMinute;

impl LabelFormatter for HourMinute {
    fn format(&self, t: TimeOfDay) -> String {
        t.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_of_day_matches_hand_arithmetic() {
        assert_eq!(TimeOfDay::new(0, 0).minutes_of_day(), 0);
        assert_eq!(TimeOfDay::new(6, 17).minutes_of_day(), 377);
        assert_eq!(TimeOfDay::new(18, 32).minutes_of_day(), 1112);
        assert_eq!(TimeOfDay::new(23, 59).minutes_of_day(), 1439);
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(TimeOfDay::new(5, 3).to_string(), "05:03");
        assert_eq!(TimeOfDay::new(18, 32).to_string(), "18:32");
    }

    #[test]
    fn default_formatter_is_hh_mm() {
        assert_eq!(HourMinute.format(TimeOfDay::new(7, 5)), "07:05");
        // Per-endpoint methods fall through to format()
        assert_eq!(HourMinute.format_sunrise(TimeOfDay::new(7, 5)), "07:05");
        assert_eq!(HourMinute.format_sunset(TimeOfDay::new(7, 5)), "07:05");
    }

    #[test]
    fn chrono_conversion_keeps_hour_and_minute() {
        let t = chrono::NaiveTime::from_hms_opt(18, 32, 44).unwrap();
        assert_eq!(TimeOfDay::from(t), TimeOfDay::new(18, 32));
    }

    #[test]
    fn closure_formatter_through_trait_object() {
        let f: Box<dyn LabelFormatter> =
            Box::new(|t: TimeOfDay| format!("{}h{}", t.hour, t.minute));
        assert_eq!(f.format(TimeOfDay::new(6, 17)), "6h17");
    }
}
