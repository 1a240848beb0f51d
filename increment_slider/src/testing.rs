// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Helpers for testing code built on [`IncrementSlider`], without a real toolkit.
//!
//! [`TestHost`] is a minimal continuous slider which moves its thumb to wherever the
//! pointer is pressed or dragged, and records the frames and repaints it's asked for.
//! [`Harness`] wraps an [`IncrementSlider<TestHost>`] and plays the role of the event
//! loop: it delivers pointer events and animation frames, and records every increment
//! the listener was told about.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::animation::AnimationId;
use crate::host::{Canvas, HostSlider, PointerEvent};
use crate::kurbo::{Circle, Insets, Point, Rect, Size};
use crate::peniko::Color;
use crate::tracing_backend::try_init_test_tracing;
use crate::{IncrementSlider, SliderConfig};

/// A continuous slider for tests.
///
/// Its track spans the width minus the horizontal padding, and the thumb is centered
/// on the point of the track matching the progress. With the defaults (a width of 232,
/// padding of 16 on each side, range `[0, 100]`) each unit of progress is 2 pixels,
/// and progress `p` sits at `x = 16 + 2p`.
#[derive(Clone, Debug)]
pub struct TestHost {
    progress: i32,
    min: i32,
    max: i32,
    size: Size,
    padding: Insets,
    thumb_width: f64,
    scale_factor: f64,
    pressed: bool,
    thumb_tint: Option<Color>,
    pending_frames: Vec<AnimationId>,
    paint_requests: usize,
    writes: Vec<i32>,
}

impl Default for TestHost {
    fn default() -> Self {
        Self {
            progress: 0,
            min: 0,
            max: 100,
            size: Self::DEFAULT_SIZE,
            padding: Insets::new(16., 0., 16., 0.),
            thumb_width: 24.,
            scale_factor: 1.,
            pressed: false,
            thumb_tint: None,
            pending_frames: Vec::new(),
            paint_requests: 0,
            writes: Vec::new(),
        }
    }
}

impl TestHost {
    /// The size used unless another is set.
    pub const DEFAULT_SIZE: Size = Size::new(232., 48.);

    /// Creates a host with the default geometry and range `[0, 100]`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the drawing area size.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Sets the padding around the track.
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the width of the thumb.
    pub fn with_thumb_width(mut self, width: f64) -> Self {
        self.thumb_width = width;
        self
    }

    /// Sets the scale factor.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Sets the starting progress.
    pub fn with_progress(mut self, progress: i32) -> Self {
        self.progress = progress;
        self
    }

    /// The horizontal position of the thumb's center for `value`.
    pub fn x_for_progress(&self, value: i32) -> f64 {
        let span = f64::from(self.max) - f64::from(self.min);
        let ratio = if span > 0. {
            (f64::from(value) - f64::from(self.min)) / span
        } else {
            0.
        };
        self.padding.x0 + self.track_width() * ratio
    }

    /// The progress matching horizontal position `x`, clamped to the range.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "the result is clamped to the i32 range"
    )]
    pub fn progress_for_x(&self, x: f64) -> i32 {
        let track_width = self.track_width();
        let ratio = if track_width > 0. {
            ((x - self.padding.x0) / track_width).clamp(0., 1.)
        } else {
            0.
        };
        let span = f64::from(self.max) - f64::from(self.min);
        (f64::from(self.min) + (span * ratio).round()) as i32
    }

    /// Takes the animation frames requested since the last call.
    pub fn take_anim_frames(&mut self) -> Vec<AnimationId> {
        std::mem::take(&mut self.pending_frames)
    }

    /// The number of repaints requested so far.
    pub fn paint_requests(&self) -> usize {
        self.paint_requests
    }

    /// Every value passed to [`HostSlider::set_progress`], in order.
    pub fn writes(&self) -> &[i32] {
        &self.writes
    }

    /// The thumb tint, if one was set.
    pub fn thumb_tint(&self) -> Option<Color> {
        self.thumb_tint
    }

    fn track_width(&self) -> f64 {
        (self.size.width - self.padding.x0 - self.padding.x1).max(0.)
    }

    fn track_to(&mut self, x: f64) -> Option<i32> {
        let value = self.progress_for_x(x);
        if value == self.progress {
            return None;
        }
        self.progress = value;
        self.paint_requests += 1;
        Some(value)
    }
}

impl HostSlider for TestHost {
    fn progress(&self) -> i32 {
        self.progress
    }

    fn set_progress(&mut self, value: i32) {
        self.writes.push(value);
        self.progress = value.clamp(self.min, self.max.max(self.min));
        self.paint_requests += 1;
    }

    fn min(&self) -> i32 {
        self.min
    }

    fn max(&self) -> i32 {
        self.max
    }

    fn set_min(&mut self, min: i32) {
        self.min = min;
        self.progress = self.progress.max(min);
    }

    fn set_max(&mut self, max: i32) {
        self.max = max;
        self.progress = self.progress.min(max);
    }

    fn thumb_bounds(&self) -> Rect {
        let center = self.x_for_progress(self.progress);
        let half = self.thumb_width / 2.;
        Rect::new(center - half, 0., center + half, self.size.height)
    }

    fn size(&self) -> Size {
        self.size
    }

    fn padding(&self) -> Insets {
        self.padding
    }

    fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    fn on_pointer_event(&mut self, event: &PointerEvent) -> Option<i32> {
        match *event {
            PointerEvent::Down(pos) => {
                self.pressed = true;
                self.track_to(pos.x)
            }
            PointerEvent::Move(pos) if self.pressed => self.track_to(pos.x),
            PointerEvent::Up(pos) if self.pressed => {
                self.pressed = false;
                self.track_to(pos.x)
            }
            PointerEvent::Cancel => {
                self.pressed = false;
                None
            }
            PointerEvent::Move(_) | PointerEvent::Up(_) => None,
        }
    }

    fn request_anim_frame(&mut self, id: AnimationId) {
        self.pending_frames.push(id);
    }

    fn request_paint(&mut self) {
        self.paint_requests += 1;
    }

    fn set_thumb_tint(&mut self, color: Color) {
        self.thumb_tint = Some(color);
    }
}

/// A [`Canvas`] which records every circle drawn on it.
#[derive(Clone, Debug, Default)]
pub struct TestCanvas {
    /// The circles drawn, in order.
    pub circles: Vec<(Circle, Color)>,
}

impl TestCanvas {
    /// The horizontal centers of the circles drawn, in order.
    pub fn xs(&self) -> Vec<f64> {
        self.circles
            .iter()
            .map(|(circle, _)| circle.center.x)
            .collect()
    }
}

impl Canvas for TestCanvas {
    fn fill_circle(&mut self, circle: Circle, color: Color) {
        self.circles.push((circle, color));
    }
}

/// Drives an [`IncrementSlider<TestHost>`] like an event loop would.
pub struct Harness {
    slider: IncrementSlider<TestHost>,
    settled: Rc<RefCell<Vec<usize>>>,
    frame_interval: Duration,
}

impl std::fmt::Debug for Harness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Harness")
            .field("slider", &self.slider)
            .field("settled", &self.settled.borrow())
            .field("frame_interval", &self.frame_interval)
            .finish()
    }
}

impl Harness {
    /// Time between two animation frames.
    pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

    /// Creates a slider over a default [`TestHost`].
    ///
    /// # Panics
    ///
    /// If `config` is invalid.
    #[track_caller]
    pub fn new(config: SliderConfig) -> Self {
        Self::with_host(TestHost::new(), config)
    }

    /// Creates a slider over `host`.
    ///
    /// # Panics
    ///
    /// If `config` is invalid.
    #[track_caller]
    pub fn with_host(host: TestHost, config: SliderConfig) -> Self {
        let _ = try_init_test_tracing();

        let settled = Rc::new(RefCell::new(Vec::new()));
        let record = Rc::clone(&settled);
        let slider = IncrementSlider::new(host, config)
            .unwrap_or_else(|err| panic!("invalid slider config: {err}"))
            .with_listener(move |index| record.borrow_mut().push(index));
        Self {
            slider,
            settled,
            frame_interval: Self::FRAME_INTERVAL,
        }
    }

    /// The slider under test.
    pub fn slider(&self) -> &IncrementSlider<TestHost> {
        &self.slider
    }

    /// The slider under test, mutably.
    pub fn slider_mut(&mut self) -> &mut IncrementSlider<TestHost> {
        &mut self.slider
    }

    /// The host's current progress.
    pub fn progress(&self) -> i32 {
        self.slider.host().progress()
    }

    /// Every increment index reported to the listener so far.
    pub fn settled(&self) -> Vec<usize> {
        self.settled.borrow().clone()
    }

    /// Sends `event` to the slider.
    pub fn pointer_event(&mut self, event: PointerEvent) {
        self.slider.on_pointer_event(&event);
    }

    /// Presses the pointer over the point of the track matching `value`.
    pub fn pointer_down_at(&mut self, value: i32) {
        let pos = self.point_for(value);
        self.pointer_event(PointerEvent::Down(pos));
    }

    /// Moves the pointer over the point of the track matching `value`.
    pub fn pointer_move_to(&mut self, value: i32) {
        let pos = self.point_for(value);
        self.pointer_event(PointerEvent::Move(pos));
    }

    /// Releases the pointer over the point of the track matching `value`.
    pub fn pointer_up_at(&mut self, value: i32) {
        let pos = self.point_for(value);
        self.pointer_event(PointerEvent::Up(pos));
    }

    /// Presses at `from`, drags to `to` and releases there.
    pub fn drag(&mut self, from: i32, to: i32) {
        self.pointer_down_at(from);
        self.pointer_move_to(to);
        self.pointer_up_at(to);
    }

    /// Runs animation frames for `ms` milliseconds.
    ///
    /// Every frame requested since the previous one is delivered, including frames for
    /// animations that have since been superseded.
    pub fn animate_ms(&mut self, ms: u64) {
        let mut remaining = Duration::from_millis(ms);
        while !remaining.is_zero() {
            let step = remaining.min(self.frame_interval);
            remaining -= step;
            if !self.run_frame(step) {
                break;
            }
        }
    }

    /// Runs animation frames until none are requested, and returns how many ran.
    ///
    /// # Panics
    ///
    /// If frames are still being requested after a thousand of them.
    #[track_caller]
    pub fn animate_until_idle(&mut self) -> usize {
        for frames in 0..1000 {
            if !self.run_frame(self.frame_interval) {
                return frames;
            }
        }
        panic!("animation did not finish after 1000 frames");
    }

    /// Paints the slider's tick marks onto a fresh canvas.
    pub fn paint(&self) -> TestCanvas {
        let mut canvas = TestCanvas::default();
        self.slider.paint(&mut canvas);
        canvas
    }

    fn point_for(&self, value: i32) -> Point {
        let host = self.slider.host();
        Point::new(host.x_for_progress(value), host.size().height / 2.)
    }

    fn run_frame(&mut self, step: Duration) -> bool {
        let ids = self.slider.host_mut().take_anim_frames();
        if ids.is_empty() {
            return false;
        }
        let interval = u64::try_from(step.as_nanos()).unwrap_or(u64::MAX);
        for id in ids {
            self.slider.on_anim_frame(id, interval);
        }
        true
    }
}
