//! # Sun Tracker Application Entry Point
//!
//! Small demo host for the daylight-arc widget: loads the schedule from
//! `sun-config.toml`, computes where the sun sits between sunrise and
//! sunset, and prints the widget's ASCII preview. Pass `--now HH:MM` to
//! render a specific wall-clock time (useful for reproducible output) and
//! `--sweep` to watch the arrival animation frame by frame.

// Test modules
#[cfg(test)]
mod tests;

use anyhow::bail;
use embedded_graphics::pixelcolor::BinaryColor;
use std::env;
use std::thread;
use std::time::Duration;
use sun_arc_lib::{
    config::Config,
    ratio::elapsed_ratio,
    renderer::draw_ascii,
    style::{ArcStyle, MarkerGlyph},
    widget::SunArc,
    TimeOfDay,
};

/// Parse a `HH:MM` command-line argument.
fn parse_hhmm(s: &str) -> Option<TimeOfDay> {
    let (h, m) = s.split_once(':')?;
    let hour: u8 = h.parse().ok()?;
    let minute: u8 = m.parse().ok()?;
    (hour < 24 && minute < 60).then(|| TimeOfDay::new(hour, minute))
}

/// Main application entry point.
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let sweep_mode = args.iter().any(|a| a == "--sweep");

    // Wall clock, overridable for reproducible previews
    let now: TimeOfDay = match args.iter().position(|a| a == "--now") {
        Some(i) => {
            let value = args.get(i + 1).map(String::as_str).unwrap_or("");
            match parse_hhmm(value) {
                Some(t) => t,
                None => bail!("invalid --now value {value:?}, expected HH:MM"),
            }
        }
        None => chrono::Local::now().time().into(),
    };

    let config = Config::load();
    let sunrise = config.schedule.sunrise();
    let sunset = config.schedule.sunset();

    let mut widget = SunArc::new(
        config.display.width,
        config.display.padding,
        ArcStyle::<BinaryColor>::mono(),
    );
    widget.set_marker_glyph(MarkerGlyph::Disc);
    widget.set_sunrise_time(Some(sunrise));
    widget.set_sunset_time(Some(sunset));

    if sweep_mode {
        // Showcase transition: sweep in from the left edge over the
        // configured duration, printing a frame per tick
        let target = elapsed_ratio(sunrise, sunset, now);
        widget.animate(0.0, target, Duration::from_millis(config.display.sweep_ms));
        while widget.tick() {
            draw_ascii(&widget);
            println!();
            thread::sleep(Duration::from_millis(80));
        }
    } else {
        widget.refresh(sunrise, sunset, now);
        widget.finish();
    }

    eprintln!(
        "sunrise {sunrise}  sunset {sunset}  now {now}  ratio {:.4}",
        widget.ratio()
    );
    draw_ascii(&widget);

    Ok(())
}
