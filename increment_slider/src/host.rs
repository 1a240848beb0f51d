// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! The capabilities an [`IncrementSlider`](crate::IncrementSlider) needs from the
//! continuous slider it wraps.

use crate::animation::AnimationId;
use crate::kurbo::{Circle, Insets, Point, Rect, Size};
use crate::peniko::Color;

/// A pointer event delivered to the slider, in the slider's local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// A pointer was pressed.
    Down(Point),
    /// A pointer moved.
    Move(Point),
    /// A pointer was released.
    Up(Point),
    /// The host took the pointer away, e.g. because a parent started scrolling.
    Cancel,
}

impl PointerEvent {
    /// Returns the position of the pointer, if the event has one.
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::Down(pos) | Self::Move(pos) | Self::Up(pos) => Some(*pos),
            Self::Cancel => None,
        }
    }
}

/// A continuous slider control provided by the host toolkit.
///
/// The increment slider owns its host and drives it through this trait.
/// Progress values are integers in `[min, max]`.
pub trait HostSlider {
    /// The current progress.
    fn progress(&self) -> i32;

    /// Moves the thumb to `value` and schedules a repaint.
    ///
    /// Implementations should clamp to `[min, max]`.
    fn set_progress(&mut self, value: i32);

    /// The lower bound of the progress.
    fn min(&self) -> i32;

    /// The upper bound of the progress.
    fn max(&self) -> i32;

    /// Sets the lower bound of the progress.
    fn set_min(&mut self, min: i32);

    /// Sets the upper bound of the progress.
    fn set_max(&mut self, max: i32);

    /// The bounds of the thumb, in device pixels.
    fn thumb_bounds(&self) -> Rect;

    /// The size of the area the slider draws in, in device pixels.
    fn size(&self) -> Size;

    /// The padding around the track, in device pixels.
    fn padding(&self) -> Insets;

    /// The ratio of device pixels to logical pixels.
    fn scale_factor(&self) -> f64 {
        1.
    }

    /// Runs the host's own pointer handling.
    ///
    /// Returns the progress the host wrote, if the event moved the thumb.
    /// The return value stands in for the host's change notification for that write.
    fn on_pointer_event(&mut self, event: &PointerEvent) -> Option<i32>;

    /// Asks for [`IncrementSlider::on_anim_frame`](crate::IncrementSlider::on_anim_frame)
    /// to be called with `id` on the next frame.
    fn request_anim_frame(&mut self, id: AnimationId);

    /// Asks for the slider to be painted again.
    fn request_paint(&mut self);

    /// Tints the thumb.
    fn set_thumb_tint(&mut self, color: Color) {
        let _ = color;
    }
}

/// A surface the tick marks are drawn on.
pub trait Canvas {
    /// Fills `circle` with `color`.
    fn fill_circle(&mut self, circle: Circle, color: Color);
}
