// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt;

/// A range and section count which can't produce a valid set of increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The range is empty or inverted (`min >= max`).
    EmptyRange {
        /// Lower bound that was requested.
        min: i32,
        /// Upper bound that was requested.
        max: i32,
    },
    /// Zero sections were requested.
    NoSections,
    /// More sections were requested than there are integer steps in the range,
    /// so some increments would be equal.
    TooManySections {
        /// Section count that was requested.
        sections: u32,
        /// Width of the range, `max - min`.
        span: i64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRange { min, max } => {
                write!(f, "slider range is empty: min {min} is not below max {max}")
            }
            Self::NoSections => f.pad("slider needs at least one section"),
            Self::TooManySections { sections, span } => write!(
                f,
                "{sections} sections don't fit in a range of width {span}"
            ),
        }
    }
}

impl Error for ConfigError {}

/// An increment index passed to [`IncrementSlider::set_increment`](crate::IncrementSlider::set_increment)
/// which doesn't exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncrementOutOfRange {
    /// The index that was requested.
    pub index: usize,
    /// The number of increments available.
    pub len: usize,
}

impl fmt::Display for IncrementOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "increment index {} is out of range for {} increments",
            self.index, self.len
        )
    }
}

impl Error for IncrementOutOfRange {}
