//! Widget styling.
//!
//! [`ArcStyle`] is an immutable snapshot of every visual property the widget
//! honors. The widget never mutates a style in place: each styling setter
//! builds a fresh snapshot and swaps it whole, so a draw pass can never
//! observe a half-updated style. The `with_*` methods make those swaps
//! one-liners.

use embedded_graphics::{
    image::ImageRaw,
    mono_font::{ascii::FONT_6X10, MonoFont},
    pixelcolor::{BinaryColor, PixelColor},
};

/// Dash lengths for the track stroke, in pixels measured along the arc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DashPattern {
    /// Pen-down length.
    pub on: f32,
    /// Pen-up length.
    pub off: f32,
}

impl DashPattern {
    pub const fn new(on: f32, off: f32) -> Self {
        Self { on, off }
    }
}

impl Default for DashPattern {
    fn default() -> Self {
        Self::new(15.0, 15.0)
    }
}

/// How the procedural marker disc is painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerPaint {
    /// Solid disc in the marker color.
    Filled,
    /// Ring outline in the marker color.
    Outlined { stroke_width: u32 },
}

/// Marker artwork drawn at the animated position on the arc.
///
/// `Hidden` is the default: without caller-supplied artwork the marker is
/// simply not drawn. `Disc` renders a procedural disc from the style's
/// marker color, radius, and paint. `Bitmap` draws a caller-supplied raw
/// image centered on the marker position at its intrinsic pixel size.
/// Bitmap footprint and marker radius are deliberately independent
/// properties; the radius governs layout margin and disc size only.
#[derive(Clone, Copy, Debug)]
pub enum MarkerGlyph<'a, C>
where
    C: PixelColor + From<<C as PixelColor>::Raw>,
{
    Hidden,
    Disc,
    Bitmap(ImageRaw<'a, C>),
}

impl<C> Default for MarkerGlyph<'_, C>
where
    C: PixelColor + From<<C as PixelColor>::Raw>,
{
    fn default() -> Self {
        Self::Hidden
    }
}

/// Immutable visual configuration snapshot.
///
/// Metric defaults mirror a hand-tuned reference rendering: a 2 px dashed
/// track, a 10 px marker margin, and labels tucked 12 px in from the arc
/// ends and 4 px above the baseline.
#[derive(Clone, Copy)]
pub struct ArcStyle<C: PixelColor> {
    /// Track stroke color.
    pub track_color: C,
    /// Track stroke width in pixels.
    pub track_width: u32,
    /// Dash pattern along the track; `None` draws a solid arc.
    pub track_dash: Option<DashPattern>,
    /// Fill color of the elapsed-daylight region under the arc.
    pub shadow_color: C,
    /// Color of the procedural marker disc.
    pub marker_color: C,
    /// Marker margin radius in pixels. Reserved on both sides of the track
    /// so the marker never clips, and used as the disc radius.
    pub marker_radius: f32,
    /// Paint mode of the procedural marker disc.
    pub marker_paint: MarkerPaint,
    /// Label text color.
    pub label_color: C,
    /// Label font.
    pub label_font: &'static MonoFont<'static>,
    /// Horizontal inset of each label from its arc end, in pixels.
    pub label_h_offset: i32,
    /// Vertical lift of the labels above the baseline, in pixels.
    pub label_v_offset: i32,
}

impl<C: PixelColor> ArcStyle<C> {
    /// Style with the given colors and the default metrics.
    pub fn new(track_color: C, shadow_color: C, marker_color: C, label_color: C) -> Self {
        Self {
            track_color,
            track_width: 2,
            track_dash: Some(DashPattern::default()),
            shadow_color,
            marker_color,
            marker_radius: 10.0,
            marker_paint: MarkerPaint::Filled,
            label_color,
            label_font: &FONT_6X10,
            label_h_offset: 12,
            label_v_offset: 4,
        }
    }

    pub fn with_track_color(mut self, color: C) -> Self {
        self.track_color = color;
        self
    }

    /// Track stroke width, floored at 1 px.
    pub fn with_track_width(mut self, width: u32) -> Self {
        self.track_width = width.max(1);
        self
    }

    pub fn with_track_dash(mut self, dash: Option<DashPattern>) -> Self {
        self.track_dash = dash;
        self
    }

    pub fn with_shadow_color(mut self, color: C) -> Self {
        self.shadow_color = color;
        self
    }

    pub fn with_marker_color(mut self, color: C) -> Self {
        self.marker_color = color;
        self
    }

    /// Marker margin radius, floored at 0.
    pub fn with_marker_radius(mut self, radius: f32) -> Self {
        self.marker_radius = radius.max(0.0);
        self
    }

    pub fn with_marker_paint(mut self, paint: MarkerPaint) -> Self {
        self.marker_paint = paint;
        self
    }

    pub fn with_label_color(mut self, color: C) -> Self {
        self.label_color = color;
        self
    }

    pub fn with_label_font(mut self, font: &'static MonoFont<'static>) -> Self {
        self.label_font = font;
        self
    }

    pub fn with_label_offsets(mut self, horizontal: i32, vertical: i32) -> Self {
        self.label_h_offset = horizontal;
        self.label_v_offset = vertical;
        self
    }
}

impl ArcStyle<BinaryColor> {
    /// Monochrome preset: everything drawn in the "on" color. The natural
    /// choice for e-ink buffers and `MockDisplay` tests.
    pub fn mono() -> Self {
        Self::new(
            BinaryColor::On,
            BinaryColor::On,
            BinaryColor::On,
            BinaryColor::On,
        )
    }
}
