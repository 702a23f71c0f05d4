//! Semicircular track layout.
//!
//! Turns an available pixel width, outer padding, and marker radius into the
//! arc geometry everything else draws against: the track radius, the circle
//! center, the flat baseline, and the marker's Cartesian position for a given
//! elapsed ratio. All values are `f32` pixels; rounding to device coordinates
//! happens at draw time.

use crate::ratio::clamp01;
use std::f32::consts::PI;

/// Resolved geometry for one widget instance.
///
/// The semicircle's bounding box is a square of side `2 * arc_radius` whose
/// top-left corner sits `marker_radius` inside the padded edges, so the
/// marker disc stays fully visible at both ends of the track. The flat edge
/// of the semicircle is the bottom of that box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcLayout {
    /// Track radius in pixels, excluding the marker margin.
    pub arc_radius: f32,
    /// Horizontal center of the bounding circle.
    pub center_x: f32,
    /// Vertical center of the bounding circle.
    pub center_y: f32,
}

impl ArcLayout {
    /// Compute the layout for a drawable region `width` pixels across with
    /// `padding` pixels on each edge, keeping `marker_radius` pixels of
    /// margin so the marker never clips.
    ///
    /// A region too narrow for the margins collapses to a zero-radius arc
    /// rather than going negative.
    pub fn compute(width: u32, padding: u32, marker_radius: f32) -> Self {
        let available = (width as f32 - 2.0 * padding as f32).max(0.0);
        let arc_radius = ((available - 2.0 * marker_radius) / 2.0).max(0.0);

        let left = padding as f32 + marker_radius;
        let top = padding as f32 + marker_radius;

        Self {
            arc_radius,
            center_x: left + arc_radius,
            center_y: top + arc_radius,
        }
    }

    /// Fixed widget height policy: `(width / 4) * 2.3`, independent of the
    /// arc radius. This trades exact-fit geometry for a stable aspect ratio
    /// across widths.
    pub fn measured_height(width: u32) -> u32 {
        ((width / 4) as f32 * 2.3) as u32
    }

    /// Leftmost point of the track (ratio 0), on the baseline level of the
    /// circle center.
    pub fn left_x(&self) -> f32 {
        self.center_x - self.arc_radius
    }

    /// Rightmost point of the track (ratio 1).
    pub fn right_x(&self) -> f32 {
        self.center_x + self.arc_radius
    }

    /// The flat bottom edge of the bounding box, where the elapsed fill and
    /// the labels rest.
    pub fn baseline_y(&self) -> f32 {
        self.center_y + self.arc_radius
    }

    /// Point on the track at `angle` radians, measured counterclockwise from
    /// the rightmost point in screen coordinates (y grows downward, so the
    /// arc bows upward).
    pub fn arc_point(&self, angle: f32) -> (f32, f32) {
        (
            self.center_x + self.arc_radius * angle.cos(),
            self.center_y - self.arc_radius * angle.sin(),
        )
    }

    /// Marker position for an elapsed ratio in `[0, 1]`.
    ///
    /// Ratio 0 maps to the leftmost point (180°), ratio 1 to the rightmost
    /// (0°); increasing ratio moves the marker clockwise across the top of
    /// the arc.
    pub fn marker_position(&self, ratio: f32) -> (f32, f32) {
        let angle = PI * (1.0 - clamp01(ratio));
        self.arc_point(angle)
    }
}
