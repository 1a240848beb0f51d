// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use tracing::{debug, trace_span};

use crate::animation::AnimationId;
use crate::controller::{Controller, Effect, Effects, Event, State};
use crate::host::{Canvas, HostSlider, PointerEvent};
use crate::increments::Increments;
use crate::ticks::{TickColors, TickLayout, paint_ticks, tick_radius};
use crate::{ConfigError, IncrementOutOfRange, SliderConfig};

/// A slider that snaps to discrete increments.
///
/// It owns a continuous [`HostSlider`] and forwards to it, intercepting pointer
/// events, painting and range changes:
///
/// - The thumb follows the pointer freely while dragging, then animates to the nearest
///   increment once the pointer is released.
/// - [`paint`](Self::paint) draws a tick at each increment and should be called after
///   the host has painted itself.
/// - The listener is called with the index of the increment the thumb settled on,
///   once per settle.
///
/// The embedding code must forward pointer events, progress change notifications and
/// animation frames to the matching `on_*` methods.
pub struct IncrementSlider<H> {
    host: H,
    controller: Controller,
    sections: u32,
    tick_colors: TickColors,
    listener: Option<Box<dyn FnMut(usize)>>,
}

impl<H: fmt::Debug> fmt::Debug for IncrementSlider<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IncrementSlider")
            .field("host", &self.host)
            .field("controller", &self.controller)
            .field("sections", &self.sections)
            .field("tick_colors", &self.tick_colors)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

// --- MARK: BUILDERS
impl<H: HostSlider> IncrementSlider<H> {
    /// Wraps `host`, applying the range and thumb tint from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the range and section count of `config` can't produce
    /// a strictly increasing list of increments.
    pub fn new(mut host: H, config: SliderConfig) -> Result<Self, ConfigError> {
        let increments = Increments::try_compute(config.min, config.max, config.sections)?;
        apply_range(&mut host, config.min, config.max);
        if let Some(tint) = config.thumb_tint {
            host.set_thumb_tint(tint);
        }
        let controller = Controller::new(increments)
            .with_settle_duration(config.settle_duration)
            .with_jump_duration(config.jump_duration)
            .with_easing(config.easing);
        Ok(Self {
            host,
            controller,
            sections: config.sections,
            tick_colors: config.tick_colors,
            listener: None,
        })
    }

    /// Sets the function called with the increment index each time the thumb settles.
    pub fn with_listener(mut self, listener: impl FnMut(usize) + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }
}

// --- MARK: METHODS
impl<H: HostSlider> IncrementSlider<H> {
    /// Sets the function called with the increment index each time the thumb settles.
    pub fn set_listener(&mut self, listener: impl FnMut(usize) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Removes the listener.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Animates the thumb to the increment at `index`, whatever the current gesture.
    ///
    /// Does nothing if no increments are configured.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not below the number of increments.
    pub fn set_increment(&mut self, index: usize) -> Result<(), IncrementOutOfRange> {
        let effects = self.controller.set_increment(index, self.host.progress())?;
        self.apply(effects);
        Ok(())
    }

    /// Changes the range, recomputing the increments.
    ///
    /// Any animation in progress is cancelled. A pointer held on the slider keeps
    /// dragging, and settles on the new increments when released.
    ///
    /// # Errors
    ///
    /// Returns an error, and leaves the slider unchanged, if the new range can't
    /// be divided into the current number of sections.
    pub fn set_range(&mut self, min: i32, max: i32) -> Result<(), ConfigError> {
        let increments = Increments::try_compute(min, max, self.sections)?;
        apply_range(&mut self.host, min, max);
        self.controller.reconfigure(increments, self.host.progress());
        self.host.request_paint();
        Ok(())
    }

    /// Changes the number of sections, recomputing the increments.
    ///
    /// Any animation in progress is cancelled. A pointer held on the slider keeps
    /// dragging, and settles on the new increments when released.
    ///
    /// # Errors
    ///
    /// Returns an error, and leaves the slider unchanged, if the current range can't
    /// be divided into `sections` sections.
    pub fn set_sections(&mut self, sections: u32) -> Result<(), ConfigError> {
        let increments = Increments::try_compute(self.host.min(), self.host.max(), sections)?;
        self.sections = sections;
        self.controller.reconfigure(increments, self.host.progress());
        self.host.request_paint();
        Ok(())
    }

    /// Changes the colors of the tick marks.
    pub fn set_tick_colors(&mut self, colors: TickColors) {
        self.tick_colors = colors;
        self.host.request_paint();
    }

    /// The wrapped host slider.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The wrapped host slider, mutably.
    ///
    /// Progress written through this bypasses suppression and snapping.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Unwraps the host slider.
    pub fn into_host(self) -> H {
        self.host
    }

    /// The values the slider snaps to.
    pub fn increments(&self) -> &Increments {
        self.controller.increments()
    }

    /// The number of sections.
    pub fn sections(&self) -> u32 {
        self.sections
    }

    /// The current gesture state.
    pub fn state(&self) -> &State {
        self.controller.state()
    }

    /// The colors of the tick marks.
    pub fn tick_colors(&self) -> TickColors {
        self.tick_colors
    }

    /// The index of the increment nearest to the current progress.
    pub fn current_increment(&self) -> Option<usize> {
        let increments = self.controller.increments();
        if increments.is_empty() {
            None
        } else {
            Some(increments.nearest_index(self.host.progress()))
        }
    }
}

// --- MARK: HOST HOOKS
impl<H: HostSlider> IncrementSlider<H> {
    /// Handles a pointer event, then passes it on to the host.
    ///
    /// A press is recorded before the host sees it, so that the host's reaction to the
    /// press can be reverted. A release is handled after the host, so that the thumb
    /// settles from wherever the host left it.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) {
        let _span = trace_span!("IncrementSlider::on_pointer_event").entered();
        match event {
            PointerEvent::Down(_) => {
                self.dispatch(Event::PointerDown);
                self.run_host_pointer_event(event);
            }
            PointerEvent::Move(_) => {
                self.dispatch(Event::PointerMove);
                self.run_host_pointer_event(event);
            }
            PointerEvent::Up(_) => {
                self.run_host_pointer_event(event);
                self.dispatch(Event::PointerUp);
            }
            PointerEvent::Cancel => {
                self.run_host_pointer_event(event);
                self.dispatch(Event::PointerCancel);
            }
        }
    }

    /// Handles the host's notification that its progress changed to `value`.
    ///
    /// Changes made by the slider itself don't need to be reported.
    pub fn on_progress_changed(&mut self, value: i32, from_user: bool) {
        self.dispatch(Event::ProgressChanged { value, from_user });
    }

    /// Advances the animation `id` by `interval` nanoseconds.
    ///
    /// Frames for animations which have been superseded are ignored.
    pub fn on_anim_frame(&mut self, id: AnimationId, interval: u64) {
        self.dispatch(Event::AnimFrame { id, interval });
    }

    /// Draws the tick marks.
    pub fn paint(&self, canvas: &mut impl Canvas) {
        paint_ticks(canvas, &self.tick_layout(), &self.tick_colors);
    }

    /// Takes a snapshot of the host geometry the tick marks depend on.
    pub fn tick_layout(&self) -> TickLayout {
        let thumb = self.host.thumb_bounds();
        let padding = self.host.padding();
        TickLayout {
            size: self.host.size(),
            padding_left: padding.x0,
            padding_right: padding.x1,
            sections: self.controller.increments().sections(),
            thumb_center_x: thumb.center().x,
            thumb_right: thumb.x1,
            radius: tick_radius(self.host.scale_factor()),
        }
    }

    fn run_host_pointer_event(&mut self, event: &PointerEvent) {
        if let Some(value) = self.host.on_pointer_event(event) {
            self.on_progress_changed(value, true);
        }
    }

    fn dispatch(&mut self, event: Event) {
        let effects = self.controller.handle(event, self.host.progress());
        self.apply(effects);
    }

    fn apply(&mut self, effects: Effects) {
        for effect in effects {
            match effect {
                Effect::SetProgress(value) => self.host.set_progress(value),
                Effect::RequestAnimFrame(id) => self.host.request_anim_frame(id),
                Effect::RequestPaint => self.host.request_paint(),
                Effect::Settled { index, value } => {
                    debug!("Settled on increment {index} ({value})");
                    if let Some(listener) = &mut self.listener {
                        listener(index);
                    }
                }
            }
        }
    }
}

/// Sets the host's bounds without ever passing through an inverted range.
fn apply_range(host: &mut impl HostSlider, min: i32, max: i32) {
    if min > host.max() {
        host.set_max(max);
        host.set_min(min);
    } else {
        host.set_min(min);
        host.set_max(max);
    }
}
