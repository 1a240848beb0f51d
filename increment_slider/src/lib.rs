// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Increment Slider is a slider core that snaps to a fixed set of discrete values.
//!
//! It wraps a continuous slider provided by a host toolkit (anything implementing
//! [`HostSlider`][host::HostSlider]) and intercepts three things:
//!
//! - Pointer events, so that the thumb can be dragged freely and then settle on the
//!   nearest increment with a short animation once released.
//! - Painting, so that a tick mark is drawn at every increment.
//! - Range setters, so that the increments are recomputed whenever the range or the
//!   number of sections changes.
//!
//! The listener registered with [`IncrementSlider::set_listener`] is only told about
//! increments that were actually reached, never about intermediate drag values.
//!
//! ```
//! use increment_slider::SliderConfig;
//! use increment_slider::testing::Harness;
//!
//! let config = SliderConfig::new(0, 100).with_sections(4);
//! let mut harness = Harness::new(config);
//!
//! // Drag from 20 to 60 and let go: the thumb settles on 50, the third increment.
//! harness.drag(20, 60);
//! harness.animate_until_idle();
//!
//! assert_eq!(harness.progress(), 50);
//! assert_eq!(harness.settled(), [2]);
//! ```
//!
//! The building blocks are usable on their own:
//!
//! - [`increments`] computes the increment values and finds the nearest one.
//! - [`ticks`] computes where tick marks go, as a pure function of a layout snapshot.
//! - [`controller`] is the gesture state machine, written as a pure transition function.
//! - [`animation`] interpolates progress over time.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use {kurbo, peniko};

#[macro_use]
pub mod util;

pub mod animation;
pub mod controller;
pub mod host;
pub mod increments;
pub mod testing;
pub mod theme;
pub mod ticks;
pub mod tracing_backend;

mod config;
mod error;
mod slider;

pub use config::SliderConfig;
pub use error::{ConfigError, IncrementOutOfRange};
pub use slider::IncrementSlider;
