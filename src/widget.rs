//! The daylight-arc widget.
//!
//! [`SunArc`] owns all presentation state: the style snapshot, marker
//! artwork, endpoint times, the label formatter, and the animated ratio. It
//! performs no I/O and never reads the wall clock on its own; hosts feed it
//! times, tick it once per frame, and draw it into any
//! `embedded_graphics::draw_target::DrawTarget`.
//!
//! Mutators are fire-and-forget: they replace the relevant state (style
//! setters swap a whole immutable [`ArcStyle`] snapshot) and the change
//! shows up on the next draw. Properties that affect geometry re-run layout
//! immediately.

use crate::{
    animation::{RatioAnimator, DEFAULT_SWEEP},
    layout::ArcLayout,
    ratio, renderer,
    style::{ArcStyle, DashPattern, MarkerGlyph, MarkerPaint},
    HourMinute, LabelFormatter, TimeOfDay,
};
use embedded_graphics::{
    draw_target::DrawTarget, geometry::Size, iterator::raw::RawDataSlice, mono_font::MonoFont,
    pixelcolor::raw::BigEndian, pixelcolor::PixelColor, Drawable,
};
use std::time::{Duration, Instant};

/// Semicircular daylight tracker widget.
///
/// `'a` is the lifetime of caller-supplied marker bitmap data; `C` is the
/// target color type, so every style color is a first-class value of the
/// display it draws to.
pub struct SunArc<'a, C>
where
    C: PixelColor + From<<C as PixelColor>::Raw>,
{
    pub(crate) width: u32,
    pub(crate) padding: u32,
    pub(crate) style: ArcStyle<C>,
    pub(crate) glyph: MarkerGlyph<'a, C>,
    pub(crate) layout: ArcLayout,
    pub(crate) sunrise: Option<TimeOfDay>,
    pub(crate) sunset: Option<TimeOfDay>,
    formatter: Option<Box<dyn LabelFormatter>>,
    animator: RatioAnimator,
}

impl<'a, C> SunArc<'a, C>
where
    C: PixelColor + From<<C as PixelColor>::Raw>,
{
    /// Create a widget spanning `width` pixels with `padding` pixels of
    /// inset on every edge.
    pub fn new(width: u32, padding: u32, style: ArcStyle<C>) -> Self {
        Self {
            width,
            padding,
            layout: ArcLayout::compute(width, padding, style.marker_radius),
            style,
            glyph: MarkerGlyph::Hidden,
            sunrise: None,
            sunset: None,
            formatter: None,
            animator: RatioAnimator::new(0.0),
        }
    }

    // ====== Geometry ======

    /// Total widget footprint: the configured width by the fixed-aspect
    /// policy height.
    pub fn size(&self) -> Size {
        Size::new(self.width, ArcLayout::measured_height(self.width))
    }

    pub fn layout(&self) -> &ArcLayout {
        &self.layout
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Change the drawable width/padding and re-run layout.
    pub fn resize(&mut self, width: u32, padding: u32) {
        self.width = width;
        self.padding = padding;
        self.relayout();
    }

    fn relayout(&mut self) {
        self.layout = ArcLayout::compute(self.width, self.padding, self.style.marker_radius);
    }

    // ====== Ratio & animation ======

    /// The currently displayed ratio in `[0, 1]`.
    pub fn ratio(&self) -> f32 {
        self.animator.current()
    }

    /// Where the displayed ratio is headed (equals [`ratio`](Self::ratio)
    /// when idle).
    pub fn target_ratio(&self) -> f32 {
        self.animator.target()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Generation of the latest sweep, for hosts that drop stale frame
    /// callbacks through [`tick_generation`](Self::tick_generation).
    pub fn generation(&self) -> u64 {
        self.animator.generation()
    }

    /// Set the displayed ratio directly (clamped), cancelling any sweep.
    pub fn set_ratio(&mut self, ratio: f32) {
        self.animator.set(ratio);
    }

    /// Compute the elapsed-daylight ratio for the supplied times and sweep
    /// toward it from the currently displayed ratio over the default
    /// duration. Returns the sweep generation.
    ///
    /// To reproduce a from-zero transition instead, call
    /// `animate(0.0, target, duration)` explicitly.
    pub fn refresh(&mut self, sunrise: TimeOfDay, sunset: TimeOfDay, now: TimeOfDay) -> u64 {
        self.refresh_at(sunrise, sunset, now, Instant::now())
    }

    /// [`refresh`](Self::refresh) anchored at an explicit instant.
    pub fn refresh_at(
        &mut self,
        sunrise: TimeOfDay,
        sunset: TimeOfDay,
        now: TimeOfDay,
        at: Instant,
    ) -> u64 {
        let target = ratio::elapsed_ratio(sunrise, sunset, now);
        self.animator
            .start_at(self.animator.current(), target, DEFAULT_SWEEP, at)
    }

    /// Sweep the displayed ratio from `from` to `to` over `duration`,
    /// superseding any sweep in flight. Returns the sweep generation.
    pub fn animate(&mut self, from: f32, to: f32, duration: Duration) -> u64 {
        self.animator.start(from, to, duration)
    }

    /// [`animate`](Self::animate) anchored at an explicit instant.
    pub fn animate_at(&mut self, from: f32, to: f32, duration: Duration, at: Instant) -> u64 {
        self.animator.start_at(from, to, duration, at)
    }

    /// Advance the animation timeline to now. Returns `true` when the
    /// display changed and a redraw is worthwhile.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    /// [`tick`](Self::tick) at an explicit instant.
    pub fn tick_at(&mut self, at: Instant) -> bool {
        if !self.animator.is_running() {
            return false;
        }
        self.animator.sample_at(at);
        true
    }

    /// A frame tick bound to a specific sweep generation; ticks from a
    /// superseded generation are dropped. Returns `true` when applied.
    pub fn tick_generation(&mut self, generation: u64, at: Instant) -> bool {
        self.animator.tick(generation, at).is_some()
    }

    /// Cancel any sweep, leaving the ratio where it last was.
    pub fn cancel_animation(&mut self) {
        self.animator.cancel();
    }

    /// Complete any sweep immediately, jumping to its target. Handy for
    /// one-shot render contexts with no frame loop.
    pub fn finish(&mut self) {
        self.animator.finish();
    }

    // ====== Endpoint times & labels ======

    pub fn set_sunrise_time(&mut self, time: Option<TimeOfDay>) {
        self.sunrise = time;
    }

    pub fn set_sunset_time(&mut self, time: Option<TimeOfDay>) {
        self.sunset = time;
    }

    pub fn sunrise_time(&self) -> Option<TimeOfDay> {
        self.sunrise
    }

    pub fn sunset_time(&self) -> Option<TimeOfDay> {
        self.sunset
    }

    /// Install (or clear) the label formatting hook. `None` falls back to
    /// the built-in zero-padded `HH:MM` formatter.
    pub fn set_label_formatter(&mut self, formatter: Option<Box<dyn LabelFormatter>>) {
        self.formatter = formatter;
    }

    /// Resolved label texts, or `None` unless BOTH endpoint times are set;
    /// labels are drawn both-or-neither.
    pub(crate) fn labels(&self) -> Option<(String, String)> {
        let sunrise = self.sunrise?;
        let sunset = self.sunset?;
        Some(match &self.formatter {
            Some(f) => (f.format_sunrise(sunrise), f.format_sunset(sunset)),
            None => (HourMinute.format(sunrise), HourMinute.format(sunset)),
        })
    }

    // ====== Styling ======

    pub fn style(&self) -> &ArcStyle<C> {
        &self.style
    }

    /// Swap in a whole new style snapshot. Re-runs layout since the marker
    /// radius may have changed.
    pub fn set_style(&mut self, style: ArcStyle<C>) {
        self.style = style;
        self.relayout();
    }

    pub fn set_track_color(&mut self, color: C) {
        self.style = self.style.with_track_color(color);
    }

    pub fn set_track_width(&mut self, width: u32) {
        self.style = self.style.with_track_width(width);
    }

    pub fn set_track_dash(&mut self, dash: Option<DashPattern>) {
        self.style = self.style.with_track_dash(dash);
    }

    pub fn set_shadow_color(&mut self, color: C) {
        self.style = self.style.with_shadow_color(color);
    }

    pub fn set_marker_color(&mut self, color: C) {
        self.style = self.style.with_marker_color(color);
    }

    /// Marker margin/disc radius; affects geometry, so layout re-runs.
    pub fn set_marker_radius(&mut self, radius: f32) {
        self.style = self.style.with_marker_radius(radius);
        self.relayout();
    }

    pub fn set_marker_paint(&mut self, paint: MarkerPaint) {
        self.style = self.style.with_marker_paint(paint);
    }

    /// Marker artwork. [`MarkerGlyph::Hidden`] suppresses the marker
    /// entirely; bitmaps draw at their intrinsic size.
    pub fn set_marker_glyph(&mut self, glyph: MarkerGlyph<'a, C>) {
        self.glyph = glyph;
    }

    pub fn set_label_color(&mut self, color: C) {
        self.style = self.style.with_label_color(color);
    }

    pub fn set_label_font(&mut self, font: &'static MonoFont<'static>) {
        self.style = self.style.with_label_font(font);
    }

    pub fn set_label_offsets(&mut self, horizontal: i32, vertical: i32) {
        self.style = self.style.with_label_offsets(horizontal, vertical);
    }
}

impl<C> Drawable for SunArc<'_, C>
where
    C: PixelColor + From<<C as PixelColor>::Raw>,
    for<'b> RawDataSlice<'b, <C as PixelColor>::Raw, BigEndian>:
        IntoIterator<Item = <C as PixelColor>::Raw>,
{
    type Color = C;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        renderer::draw(self, target)
    }
}
