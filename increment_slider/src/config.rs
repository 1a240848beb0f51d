// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use crate::animation::Easing;
use crate::peniko::Color;
use crate::theme;
use crate::ticks::TickColors;

/// Construction-time settings of an [`IncrementSlider`](crate::IncrementSlider).
#[derive(Clone, Debug, PartialEq)]
pub struct SliderConfig {
    /// Lower bound of the progress.
    pub min: i32,
    /// Upper bound of the progress.
    pub max: i32,
    /// Number of sections the range is divided into.
    pub sections: u32,
    /// Colors of the tick marks.
    pub tick_colors: TickColors,
    /// Tint applied to the host's thumb, if any.
    pub thumb_tint: Option<Color>,
    /// Duration of the animation after the pointer is released.
    pub settle_duration: Duration,
    /// Duration of the animation started by `set_increment`.
    pub jump_duration: Duration,
    /// Easing of both animations.
    pub easing: Easing,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self::new(theme::DEFAULT_MIN, theme::DEFAULT_MAX)
    }
}

impl SliderConfig {
    /// Creates a config for the range `[min, max]` with default settings.
    pub fn new(min: i32, max: i32) -> Self {
        Self {
            min,
            max,
            sections: theme::DEFAULT_SECTIONS,
            tick_colors: TickColors::default(),
            thumb_tint: None,
            settle_duration: theme::SETTLE_DURATION,
            jump_duration: theme::JUMP_DURATION,
            easing: Easing::default(),
        }
    }

    /// Sets the number of sections.
    pub fn with_sections(mut self, sections: u32) -> Self {
        self.sections = sections;
        self
    }

    /// Sets the color of ticks left of the thumb.
    pub fn with_tick_before_color(mut self, color: impl Into<Color>) -> Self {
        self.tick_colors.before = color.into();
        self
    }

    /// Sets the color of ticks at or right of the thumb.
    pub fn with_tick_after_color(mut self, color: impl Into<Color>) -> Self {
        self.tick_colors.after = color.into();
        self
    }

    /// Sets the thumb tint.
    pub fn with_thumb_tint(mut self, color: impl Into<Color>) -> Self {
        self.thumb_tint = Some(color.into());
        self
    }

    /// Sets the duration of the animation after the pointer is released.
    pub fn with_settle_duration(mut self, duration: Duration) -> Self {
        self.settle_duration = duration;
        self
    }

    /// Sets the duration of the animation started by `set_increment`.
    pub fn with_jump_duration(mut self, duration: Duration) -> Self {
        self.jump_duration = duration;
        self
    }

    /// Sets the easing of both animations.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}
