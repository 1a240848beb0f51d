// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Timed interpolation of slider progress.

use std::f64::consts::PI;
use std::fmt;
use std::time::Duration;

/// Identifies one animation run.
///
/// Ids grow monotonically, so a frame carrying an older id belongs to an animation
/// which has since been superseded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnimationId(u64);

impl AnimationId {
    /// The id before any animation has been started.
    pub const NONE: Self = Self(0);

    /// Returns the id following this one.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Returns the raw generation number.
    pub const fn to_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AnimationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The rate of change of an animation over its duration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Starts and ends slowly, fastest in the middle.
    #[default]
    AccelerateDecelerate,
}

impl Easing {
    /// Maps elapsed fraction `t` in `[0, 1]` to progress fraction in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0., 1.);
        match self {
            Self::Linear => t,
            Self::AccelerateDecelerate => ((t + 1.) * PI).cos() / 2. + 0.5,
        }
    }
}

/// An integer interpolation from one progress value to another over a fixed duration.
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    id: AnimationId,
    from: i32,
    target: i32,
    duration: u64,
    elapsed: u64,
    easing: Easing,
}

impl Animation {
    /// Creates an animation from `from` to `target` lasting `duration`.
    pub fn new(id: AnimationId, from: i32, target: i32, duration: Duration, easing: Easing) -> Self {
        Self {
            id,
            from,
            target,
            duration: u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX),
            elapsed: 0,
            easing,
        }
    }

    /// The generation id of this animation.
    pub fn id(&self) -> AnimationId {
        self.id
    }

    /// The value this animation started from.
    pub fn from(&self) -> i32 {
        self.from
    }

    /// The value this animation ends on.
    pub fn target(&self) -> i32 {
        self.target
    }

    /// The total duration of the animation.
    pub fn duration(&self) -> Duration {
        Duration::from_nanos(self.duration)
    }

    /// The time the animation has run so far.
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.elapsed)
    }

    /// The fraction of the duration that has elapsed, in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        if self.duration == 0 {
            1.
        } else {
            (self.elapsed as f64 / self.duration as f64).min(1.)
        }
    }

    /// Returns `true` once the full duration has elapsed.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Moves the animation forward by `interval` nanoseconds and returns the new value.
    pub fn advance(&mut self, interval: u64) -> i32 {
        self.elapsed = self.elapsed.saturating_add(interval);
        self.value()
    }

    /// The interpolated value at the current elapsed time.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "the interpolated value lies between two i32 values"
    )]
    pub fn value(&self) -> i32 {
        if self.is_finished() {
            return self.target;
        }
        let delta = f64::from(self.target) - f64::from(self.from);
        (f64::from(self.from) + (delta * self.easing.apply(self.fraction())).round()) as i32
    }
}

// --- MARK: TESTS
#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    const MS: u64 = 1_000_000;

    #[test]
    fn easing_endpoints() {
        for easing in [Easing::Linear, Easing::AccelerateDecelerate] {
            assert_approx_eq!(f64, easing.apply(0.), 0., epsilon = 1e-12);
            assert_approx_eq!(f64, easing.apply(1.), 1., epsilon = 1e-12);
            assert_approx_eq!(f64, easing.apply(0.5), 0.5, epsilon = 1e-12);
        }
        assert!(Easing::AccelerateDecelerate.apply(0.25) < 0.25);
        assert!(Easing::AccelerateDecelerate.apply(0.75) > 0.75);
    }

    #[test]
    fn linear_run() {
        let mut anim = Animation::new(
            AnimationId::NONE.next(),
            60,
            50,
            Duration::from_millis(100),
            Easing::Linear,
        );
        assert_eq!(anim.value(), 60);
        assert_eq!(anim.advance(50 * MS), 55);
        assert!(!anim.is_finished());
        assert_eq!(anim.advance(30 * MS), 52);
        assert_eq!(anim.advance(30 * MS), 50);
        assert!(anim.is_finished());
        assert_eq!(anim.elapsed(), Duration::from_millis(110));
    }

    #[test]
    fn values_stay_between_endpoints() {
        let mut anim = Animation::new(
            AnimationId::NONE.next(),
            0,
            75,
            Duration::from_millis(200),
            Easing::AccelerateDecelerate,
        );
        let mut previous = anim.value();
        while !anim.is_finished() {
            let value = anim.advance(7 * MS);
            assert!((0..=75).contains(&value));
            assert!(value >= previous, "animation went backwards");
            previous = value;
        }
        assert_eq!(previous, 75);
    }

    #[test]
    fn zero_duration_jumps() {
        let anim = Animation::new(
            AnimationId::NONE.next(),
            10,
            90,
            Duration::ZERO,
            Easing::default(),
        );
        assert!(anim.is_finished());
        assert_eq!(anim.value(), 90);
        assert_approx_eq!(f64, anim.fraction(), 1.);
    }

    #[test]
    fn ids_increase() {
        let first = AnimationId::NONE.next();
        let second = first.next();
        assert!(second > first);
        assert_eq!(second.to_raw(), 2);
        assert_eq!(second.to_string(), "#2");
    }
}
