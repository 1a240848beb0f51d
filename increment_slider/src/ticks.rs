// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Placement and coloring of the tick marks drawn at each increment.
//!
//! Everything here is a pure function of a [`TickLayout`] snapshot, taken once per
//! paint pass from the host's current geometry.

use smallvec::SmallVec;

use crate::host::Canvas;
use crate::kurbo::{Circle, Point, Size};
use crate::peniko::Color;
use crate::theme;
use crate::util::Sanitize;

/// Geometry needed to place tick marks, in device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickLayout {
    /// Size of the area the slider draws in.
    pub size: Size,
    /// Space between the left edge and the start of the track.
    pub padding_left: f64,
    /// Space between the end of the track and the right edge.
    pub padding_right: f64,
    /// Number of sections; `sections + 1` ticks are placed.
    pub sections: usize,
    /// Horizontal center of the thumb.
    pub thumb_center_x: f64,
    /// Right edge of the thumb.
    pub thumb_right: f64,
    /// Radius of each tick.
    pub radius: f64,
}

/// Colors of ticks on either side of the thumb.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickColors {
    /// Ticks left of the thumb's center.
    pub before: Color,
    /// Ticks at or right of the thumb's center.
    pub after: Color,
}

impl Default for TickColors {
    fn default() -> Self {
        Self {
            before: theme::TICK_BEFORE_COLOR,
            after: theme::TICK_AFTER_COLOR,
        }
    }
}

/// One tick to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickMark {
    /// Which increment this tick belongs to.
    pub index: usize,
    /// Where to draw it.
    pub circle: Circle,
    /// What color to fill it with.
    pub color: Color,
}

/// Returns the tick radius in device pixels for the given scale factor.
///
/// Ticks are never smaller than one device pixel.
pub fn tick_radius(scale: f64) -> f64 {
    (theme::TICK_RADIUS * scale).max(theme::TICK_MIN_RADIUS)
}

/// Computes the ticks to draw for `layout`.
///
/// Ticks are spread evenly over the padded width and drawn halfway down.
/// A tick within [`TICK_THUMB_CLEARANCE`](theme::TICK_THUMB_CLEARANCE) of the thumb's
/// right edge is left out, since the thumb covers it.
pub fn tick_marks(layout: &TickLayout, colors: &TickColors) -> SmallVec<[TickMark; 16]> {
    let mut marks = SmallVec::new();
    if layout.sections == 0 {
        return marks;
    }

    let width = layout.size.width.sanitize("width");
    let height = layout.size.height.sanitize("height");
    let padding_left = layout.padding_left.sanitize("padding_left");
    let padding_right = layout.padding_right.sanitize("padding_right");

    let usable_width = width - padding_left - padding_right;
    let step = usable_width / layout.sections as f64;
    let y = height / 2.;

    for index in 0..=layout.sections {
        let x = step * index as f64 + padding_left;
        if (layout.thumb_right - x).abs() <= theme::TICK_THUMB_CLEARANCE {
            continue;
        }
        let color = if x < layout.thumb_center_x {
            colors.before
        } else {
            colors.after
        };
        marks.push(TickMark {
            index,
            circle: Circle::new(Point::new(x, y), layout.radius),
            color,
        });
    }
    marks
}

/// Draws the ticks for `layout` onto `canvas`.
pub fn paint_ticks(canvas: &mut impl Canvas, layout: &TickLayout, colors: &TickColors) {
    for mark in tick_marks(layout, colors) {
        canvas.fill_circle(mark.circle, mark.color);
    }
}
