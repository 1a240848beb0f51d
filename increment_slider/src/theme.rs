// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Default values used by the slider when painting and animating.

#![allow(missing_docs, reason = "Names are self-explanatory.")]

use std::time::Duration;

use crate::peniko::Color;

pub const DEFAULT_MIN: i32 = 0;
pub const DEFAULT_MAX: i32 = 100;
pub const DEFAULT_SECTIONS: u32 = 4;

/// Time taken to settle on the nearest increment after the pointer is released.
pub const SETTLE_DURATION: Duration = Duration::from_millis(100);
/// Time taken to move to an increment chosen with `set_increment`.
pub const JUMP_DURATION: Duration = Duration::from_millis(200);

/// Tick radius in logical pixels, before scaling to device pixels.
pub const TICK_RADIUS: f64 = 1.;
/// Smallest tick radius in device pixels.
pub const TICK_MIN_RADIUS: f64 = 1.;
/// Ticks this close to the right edge of the thumb are hidden, in device pixels.
pub const TICK_THUMB_CLEARANCE: f64 = 10.;

pub const TICK_BEFORE_COLOR: Color = Color::from_rgb8(0x3b, 0x7e, 0xe4);
pub const TICK_AFTER_COLOR: Color = Color::from_rgb8(0x71, 0x71, 0x7a);
