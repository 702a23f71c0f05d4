//! # Daylight Arc Rendering
//!
//! Turns widget state into drawing operations, in a fixed order: the
//! semicircular track, the elapsed-daylight fill under it, the marker
//! artwork, and the two endpoint labels. The pixel path renders into any
//! `embedded_graphics` draw target; [`draw_ascii`] renders the same state as
//! a terminal character grid for development without display hardware.
//!
//! The track is plotted as short line segments walked along the arc, which
//! lets one loop serve both solid and dashed strokes. The elapsed fill is a
//! column scan: for every x between the arc's left end and the marker, a
//! vertical line from the arc down to the baseline.

use crate::{
    layout::ArcLayout,
    style::{MarkerGlyph, MarkerPaint},
    widget::SunArc,
};
use embedded_graphics::{
    image::Image,
    iterator::raw::RawDataSlice,
    mono_font::MonoTextStyle,
    pixelcolor::raw::BigEndian,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use std::f32::consts::PI;

fn to_point(p: (f32, f32)) -> Point {
    Point::new(p.0.round() as i32, p.1.round() as i32)
}

/// Render the widget into `target`.
///
/// Draw order: track, elapsed fill, marker, labels. Missing pieces are
/// skipped silently (a hidden marker draws nothing, labels need both
/// endpoint times), so malformed state degrades to a quieter picture
/// rather than an error.
pub fn draw<C, D>(widget: &SunArc<'_, C>, target: &mut D) -> Result<(), D::Error>
where
    C: PixelColor + From<<C as PixelColor>::Raw>,
    for<'b> RawDataSlice<'b, <C as PixelColor>::Raw, BigEndian>:
        IntoIterator<Item = <C as PixelColor>::Raw>,
    D: DrawTarget<Color = C>,
{
    let layout = widget.layout;
    let style = &widget.style;
    let ratio = widget.ratio();

    if layout.arc_radius > 0.0 {
        draw_track(&layout, widget, target)?;
        draw_elapsed_fill(&layout, widget, ratio, target)?;
    }

    // Marker artwork, centered on the animated position
    let (marker_x, marker_y) = layout.marker_position(ratio);
    match &widget.glyph {
        MarkerGlyph::Hidden => {}
        MarkerGlyph::Disc => {
            let diameter = (style.marker_radius * 2.0).round() as u32;
            if diameter > 0 {
                let paint = match style.marker_paint {
                    MarkerPaint::Filled => PrimitiveStyle::with_fill(style.marker_color),
                    MarkerPaint::Outlined { stroke_width } => {
                        PrimitiveStyle::with_stroke(style.marker_color, stroke_width)
                    }
                };
                Circle::with_center(to_point((marker_x, marker_y)), diameter)
                    .into_styled(paint)
                    .draw(target)?;
            }
        }
        MarkerGlyph::Bitmap(raw) => {
            let size = raw.size();
            let top_left = Point::new(
                marker_x.round() as i32 - size.width as i32 / 2,
                marker_y.round() as i32 - size.height as i32 / 2,
            );
            Image::new(raw, top_left).draw(target)?;
        }
    }

    // Labels: both-or-neither
    if let Some((sunrise_text, sunset_text)) = widget.labels() {
        let char_style = MonoTextStyle::new(style.label_font, style.label_color);
        let text_y = layout.baseline_y().round() as i32 - style.label_v_offset;

        let left = TextStyleBuilder::new()
            .alignment(Alignment::Left)
            .baseline(Baseline::Bottom)
            .build();
        let sunrise_x =
            (layout.left_x() + style.marker_radius + style.label_h_offset as f32).round() as i32;
        Text::with_text_style(&sunrise_text, Point::new(sunrise_x, text_y), char_style, left)
            .draw(target)?;

        let right = TextStyleBuilder::new()
            .alignment(Alignment::Right)
            .baseline(Baseline::Bottom)
            .build();
        let sunset_x =
            (layout.right_x() - style.marker_radius - style.label_h_offset as f32).round() as i32;
        Text::with_text_style(&sunset_text, Point::new(sunset_x, text_y), char_style, right)
            .draw(target)?;
    }

    Ok(())
}

/// Stroke the semicircle from 180° to 0° as short chords, honoring the
/// dash pattern when one is set.
fn draw_track<C, D>(
    layout: &ArcLayout,
    widget: &SunArc<'_, C>,
    target: &mut D,
) -> Result<(), D::Error>
where
    C: PixelColor + From<<C as PixelColor>::Raw>,
    D: DrawTarget<Color = C>,
{
    let style = &widget.style;
    // Degenerate dash lengths fall back to a solid stroke
    let dash = style.track_dash.filter(|d| d.on > 0.0 && d.off > 0.0);
    let stroke = PrimitiveStyle::with_stroke(style.track_color, style.track_width);

    // Chord length of roughly two pixels keeps the polyline smooth
    let steps = ((PI * layout.arc_radius) / 2.0).ceil().max(16.0) as usize;
    let step_len = PI * layout.arc_radius / steps as f32;

    let mut pen_down = true;
    let mut run = 0.0f32;
    let mut prev = layout.arc_point(PI);

    for i in 1..=steps {
        let angle = PI * (1.0 - i as f32 / steps as f32);
        let point = layout.arc_point(angle);

        if pen_down {
            Line::new(to_point(prev), to_point(point))
                .into_styled(stroke)
                .draw(target)?;
        }

        if let Some(d) = dash {
            run += step_len;
            let limit = if pen_down { d.on } else { d.off };
            if run >= limit {
                pen_down = !pen_down;
                run = 0.0;
            }
        }

        prev = point;
    }

    Ok(())
}

/// Fill the region bounded by the swept arc above, the marker's vertical on
/// the right, and the baseline below, one pixel column at a time.
fn draw_elapsed_fill<C, D>(
    layout: &ArcLayout,
    widget: &SunArc<'_, C>,
    ratio: f32,
    target: &mut D,
) -> Result<(), D::Error>
where
    C: PixelColor + From<<C as PixelColor>::Raw>,
    D: DrawTarget<Color = C>,
{
    if ratio <= 0.0 {
        return Ok(());
    }

    let fill = PrimitiveStyle::with_stroke(widget.style.shadow_color, 1);
    let (sun_x, _) = layout.marker_position(ratio);
    let base_y = layout.baseline_y().round() as i32;
    let radius = layout.arc_radius;

    let x0 = layout.left_x().round() as i32;
    let x1 = sun_x.floor() as i32;
    for x in x0..=x1 {
        let dx = x as f32 - layout.center_x;
        let arc_y = layout.center_y - (radius * radius - dx * dx).max(0.0).sqrt();
        Line::new(Point::new(x, arc_y.round() as i32), Point::new(x, base_y))
            .into_styled(fill)
            .draw(target)?;
    }

    Ok(())
}

/// Character cells are roughly twice as tall as they are wide; halving the
/// vertical axis keeps the semicircle round in a terminal.
const ASCII_Y_SCALE: f32 = 0.5;

/// Render the widget as terminal text lines. Same content and skip rules as
/// the pixel path: track, elapsed fill, marker (unless hidden), labels
/// (both-or-neither).
pub fn ascii_lines<C>(widget: &SunArc<'_, C>) -> Vec<String>
where
    C: PixelColor + From<<C as PixelColor>::Raw>,
{
    let layout = widget.layout;
    let cols = widget.width() as usize;
    let row_of = |y: f32| (y * ASCII_Y_SCALE).round() as usize;
    let base_row = row_of(layout.baseline_y());

    let mut grid = vec![vec![' '; cols]; base_row + 1];
    let put = |grid: &mut Vec<Vec<char>>, col: i32, row: usize, ch: char| {
        if col >= 0 && (col as usize) < cols && row < grid.len() {
            grid[row][col as usize] = ch;
        }
    };

    let radius = layout.arc_radius;
    if radius > 0.0 {
        // Track: oversample so every column gets a cell
        let steps = ((2.0 * PI * radius).ceil() as usize).max(32);
        for i in 0..=steps {
            let angle = PI * (1.0 - i as f32 / steps as f32);
            let (x, y) = layout.arc_point(angle);
            put(&mut grid, x.round() as i32, row_of(y), '•');
        }

        // Elapsed fill, one row below the track so the arc stays legible
        let ratio = widget.ratio();
        if ratio > 0.0 {
            let (sun_x, _) = layout.marker_position(ratio);
            let x0 = layout.left_x().round() as i32;
            let x1 = sun_x.floor() as i32;
            for x in x0..=x1 {
                let dx = x as f32 - layout.center_x;
                let arc_y = layout.center_y - (radius * radius - dx * dx).max(0.0).sqrt();
                for row in (row_of(arc_y) + 1)..=base_row {
                    put(&mut grid, x, row, '░');
                }
            }
        }
    }

    if !matches!(widget.glyph, MarkerGlyph::Hidden) {
        let (x, y) = layout.marker_position(widget.ratio());
        put(&mut grid, x.round() as i32, row_of(y), 'O');
    }

    if let Some((sunrise_text, sunset_text)) = widget.labels() {
        let sunrise_col = layout.left_x().round() as i32 + 1;
        for (i, ch) in sunrise_text.chars().enumerate() {
            put(&mut grid, sunrise_col + i as i32, base_row, ch);
        }
        let sunset_end = layout.right_x().round() as i32 - 1;
        let sunset_col = sunset_end - sunset_text.chars().count() as i32 + 1;
        for (i, ch) in sunset_text.chars().enumerate() {
            put(&mut grid, sunset_col + i as i32, base_row, ch);
        }
    }

    grid.into_iter().map(|row| row.into_iter().collect()).collect()
}

/// Print the ASCII preview to stdout.
pub fn draw_ascii<C>(widget: &SunArc<'_, C>)
where
    C: PixelColor + From<<C as PixelColor>::Raw>,
{
    for line in ascii_lines(widget) {
        println!("{line}");
    }
}
