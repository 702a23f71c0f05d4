//! # Integration Tests for the Daylight Preview
//!
//! Exercises the whole path the binary takes: configuration defaults into a
//! widget, a refresh against a known wall-clock time, and the rendered
//! ASCII preview. Timing-sensitive steps use the explicit-instant entry
//! points so these tests never sleep.

use crate::parse_hhmm;
use std::time::{Duration, Instant};
use sun_arc_lib::{
    config::Config,
    renderer::ascii_lines,
    style::{ArcStyle, MarkerGlyph},
    widget::SunArc,
    TimeOfDay,
};

/// Build the same widget the binary builds from a config.
fn widget_from(config: &Config) -> SunArc<'static, embedded_graphics::pixelcolor::BinaryColor> {
    let mut widget = SunArc::new(config.display.width, config.display.padding, ArcStyle::mono());
    widget.set_marker_glyph(MarkerGlyph::Disc);
    widget.set_sunrise_time(Some(config.schedule.sunrise()));
    widget.set_sunset_time(Some(config.schedule.sunset()));
    widget
}

#[test]
fn default_schedule_at_noon_lands_near_half() {
    let config = Config::default();
    let mut widget = widget_from(&config);

    let t0 = Instant::now();
    widget.refresh_at(
        config.schedule.sunrise(),
        config.schedule.sunset(),
        TimeOfDay::new(12, 0),
        t0,
    );
    widget.tick_at(t0 + Duration::from_millis(1200));

    // 06:17 → 377 min, 18:32 → 1112 min, 12:00 → 720 min
    let expected = 343.0_f32 / 735.0;
    assert!((widget.ratio() - expected).abs() < 1e-6);
    assert!(!widget.is_animating());
}

#[test]
fn preview_shows_schedule_labels_and_marker() {
    let config = Config::default();
    let mut widget = widget_from(&config);
    widget.refresh(
        config.schedule.sunrise(),
        config.schedule.sunset(),
        TimeOfDay::new(12, 0),
    );
    widget.finish();

    let text = ascii_lines(&widget).join("\n");
    assert!(text.contains("06:17"), "sunrise label in preview");
    assert!(text.contains("18:32"), "sunset label in preview");
    assert!(text.contains('O'), "sun marker in preview");
    assert!(text.contains('░'), "elapsed daylight in preview");
}

#[test]
fn before_sunrise_pins_the_marker_left() {
    let config = Config::default();
    let mut widget = widget_from(&config);
    widget.refresh(
        config.schedule.sunrise(),
        config.schedule.sunset(),
        TimeOfDay::new(5, 0),
    );
    widget.finish();

    assert_eq!(widget.ratio(), 0.0);
    let text = ascii_lines(&widget).join("\n");
    assert!(!text.contains('░'), "no elapsed fill before sunrise");
}

#[test]
fn after_sunset_pins_the_marker_right() {
    let config = Config::default();
    let mut widget = widget_from(&config);
    widget.refresh(
        config.schedule.sunrise(),
        config.schedule.sunset(),
        TimeOfDay::new(23, 0),
    );
    widget.finish();
    assert_eq!(widget.ratio(), 1.0);
}

#[test]
fn host_style_formatter_round_trip() {
    // The "06h 17m" formatter a host screen installs
    let config = Config::default();
    let mut widget = widget_from(&config);
    widget.set_label_formatter(Some(Box::new(|t: TimeOfDay| {
        format!("{:02}h {:02}m", t.hour, t.minute)
    })));

    let text = ascii_lines(&widget).join("\n");
    assert!(text.contains("06h 17m"));
    assert!(text.contains("18h 32m"));
    assert!(!text.contains("06:17"));
}

#[test]
fn parse_hhmm_accepts_wall_clock_times() {
    assert_eq!(parse_hhmm("06:17"), Some(TimeOfDay::new(6, 17)));
    assert_eq!(parse_hhmm("23:59"), Some(TimeOfDay::new(23, 59)));
    assert_eq!(parse_hhmm("0:5"), Some(TimeOfDay::new(0, 5)));
}

#[test]
fn parse_hhmm_rejects_out_of_range_and_garbage() {
    assert_eq!(parse_hhmm("24:00"), None);
    assert_eq!(parse_hhmm("12:60"), None);
    assert_eq!(parse_hhmm("noon"), None);
    assert_eq!(parse_hhmm("12"), None);
    assert_eq!(parse_hhmm(""), None);
}
