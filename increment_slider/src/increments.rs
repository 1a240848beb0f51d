// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! The discrete values a slider can settle on.

use smallvec::SmallVec;
use tracing::warn;

use crate::ConfigError;

/// The ordered list of values a slider snaps to.
///
/// A range `[min, max]` divided into `N` sections gives `N + 1` increments.
/// Element `i` is `min + floor((max - min) * i / N)`, so the first element is always
/// `min`, the last is always exactly `max`, and when `N` divides the range evenly
/// the increments are spaced by `(max - min) / N`.
///
/// The list is either empty or strictly increasing with at least two elements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Increments {
    values: SmallVec<[i32; 16]>,
}

impl Increments {
    /// Computes the increments for `sections` equal sections of `[min, max]`.
    ///
    /// Invalid input (an empty range, zero sections, or more sections than integers in
    /// the range) is logged and gives an empty list.
    pub fn compute(min: i32, max: i32, sections: u32) -> Self {
        Self::try_compute(min, max, sections).unwrap_or_else(|err| {
            warn!("Can't compute slider increments: {err}");
            Self::default()
        })
    }

    /// Computes the increments for `sections` equal sections of `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns an error if `min >= max`, if `sections` is zero, or if `sections`
    /// is larger than `max - min`.
    pub fn try_compute(min: i32, max: i32, sections: u32) -> Result<Self, ConfigError> {
        if min >= max {
            return Err(ConfigError::EmptyRange { min, max });
        }
        if sections == 0 {
            return Err(ConfigError::NoSections);
        }
        let span = i64::from(max) - i64::from(min);
        if i64::from(sections) > span {
            return Err(ConfigError::TooManySections { sections, span });
        }

        let sections = i64::from(sections);
        let values = (0..=sections)
            .map(|i| {
                let value = i64::from(min) + span * i / sections;
                // Every value lies in [min, max].
                i32::try_from(value).unwrap_or(max)
            })
            .collect();
        Ok(Self { values })
    }

    /// Returns the index of the increment closest to `value`.
    ///
    /// See [`nearest_index`].
    pub fn nearest_index(&self, value: i32) -> usize {
        nearest_index(value, &self.values)
    }

    /// Returns the increment closest to `value`, or `None` if the list is empty.
    pub fn nearest(&self, value: i32) -> Option<i32> {
        self.get(self.nearest_index(value))
    }

    /// Returns the increment at `index`.
    pub fn get(&self, index: usize) -> Option<i32> {
        self.values.get(index).copied()
    }

    /// Returns the number of increments, which is the number of sections plus one.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no valid range has been configured.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of sections between the increments.
    pub fn sections(&self) -> usize {
        self.values.len().saturating_sub(1)
    }

    /// Returns the smallest increment.
    pub fn first(&self) -> Option<i32> {
        self.values.first().copied()
    }

    /// Returns the largest increment.
    pub fn last(&self) -> Option<i32> {
        self.values.last().copied()
    }

    /// Iterates over the increments in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.values.iter().copied()
    }

    /// Returns the increments as a slice.
    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }
}

/// Returns the index of the element of `increments` closest to `value`.
///
/// On an exact tie between two elements the earlier one wins.
/// Returns 0 for an empty list, so callers must still check the index before using it.
pub fn nearest_index(value: i32, increments: &[i32]) -> usize {
    let mut best = 0;
    let mut best_distance = i64::MAX;
    for (index, increment) in increments.iter().enumerate() {
        let distance = (i64::from(*increment) - i64::from(value)).abs();
        if distance < best_distance {
            best = index;
            best_distance = distance;
        }
    }
    best
}
