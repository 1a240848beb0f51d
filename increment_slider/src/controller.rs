// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! The gesture state machine behind the increment slider.
//!
//! The machine is written as a pure [`transition`] function from a [`State`] and an
//! [`Event`] to the next state plus a list of [`Effect`]s for the caller to apply.
//! [`Controller`] wraps it with the bits of context that persist between events:
//! the increments, the animation durations and the last animation id handed out.
//!
//! The interesting behavior is:
//!
//! - Between a pointer press and the first pointer move, progress is *suppressed*:
//!   every change reported by the host is answered with a reset to the progress
//!   captured at the press. This stops a tap from making the thumb jump.
//! - Releasing the pointer starts an animation towards the nearest increment.
//!   A jump started while the pointer is held remembers the press, so the later
//!   release still settles.
//! - [`Effect::Settled`] is emitted exactly once per animation, on the frame where
//!   the animated value reaches its target.
//! - Starting an animation supersedes any earlier one; frames carrying an
//!   older [`AnimationId`] are ignored.

use std::time::Duration;

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::IncrementOutOfRange;
use crate::animation::{Animation, AnimationId, Easing};
use crate::increments::Increments;
use crate::theme;

/// Where the slider is in a gesture.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum State {
    /// Nothing is happening.
    #[default]
    Idle,
    /// A pointer is pressed on the slider.
    Dragging {
        /// Progress when the pointer was pressed.
        captured: i32,
        /// Whether host progress changes are currently reverted to `captured`.
        suppressed: bool,
    },
    /// The thumb is animating towards an increment.
    Settling {
        /// The running animation.
        animation: Animation,
        /// Whether a pointer is still held on the slider.
        pressed: bool,
    },
}

impl State {
    /// A short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Dragging { .. } => "Dragging",
            Self::Settling { .. } => "Settling",
        }
    }

    /// Returns `true` if a pointer is held on the slider.
    pub fn is_pressed(&self) -> bool {
        match self {
            Self::Idle => false,
            Self::Dragging { .. } => true,
            Self::Settling { pressed, .. } => *pressed,
        }
    }
}

/// An input to the state machine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// A pointer was pressed.
    PointerDown,
    /// A pointer moved.
    PointerMove,
    /// A pointer was released.
    PointerUp,
    /// The pointer was taken away by the host. Handled like a release.
    PointerCancel,
    /// The host reported a change of progress.
    ProgressChanged {
        /// The new progress.
        value: i32,
        /// Whether the host attributes the change to the user.
        from_user: bool,
    },
    /// An animation frame was delivered.
    AnimFrame {
        /// The animation that requested the frame.
        id: AnimationId,
        /// Time since the previous frame, in nanoseconds.
        interval: u64,
    },
    /// Animate to the increment with this index.
    SetIncrement(usize),
}

/// An output of the state machine, to be applied to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Write this progress to the host.
    SetProgress(i32),
    /// Deliver a frame for this animation.
    RequestAnimFrame(AnimationId),
    /// Paint again.
    RequestPaint,
    /// An animation reached its target.
    Settled {
        /// Index of the increment nearest to the settled progress.
        index: usize,
        /// The settled progress.
        value: i32,
    },
}

/// The effects produced by one transition.
pub type Effects = SmallVec<[Effect; 4]>;

/// Everything besides the state that a transition reads.
#[derive(Clone, Copy, Debug)]
pub struct TransitionCx<'a> {
    /// The host's current progress.
    pub progress: i32,
    /// The values the slider settles on.
    pub increments: &'a Increments,
    /// The id to give an animation started by this transition.
    pub next_id: AnimationId,
    /// Duration of the animation after a release.
    pub settle_duration: Duration,
    /// Duration of the animation after [`Event::SetIncrement`].
    pub jump_duration: Duration,
    /// Easing of both animations.
    pub easing: Easing,
}

impl TransitionCx<'_> {
    fn animate_to(&self, target: i32, duration: Duration, pressed: bool) -> (State, Effects) {
        let animation = Animation::new(self.next_id, self.progress, target, duration, self.easing);
        debug!(
            "Animating {} from {} to {target} over {duration:?}",
            self.next_id, self.progress
        );
        let mut effects = Effects::new();
        effects.push(Effect::RequestAnimFrame(self.next_id));
        (State::Settling { animation, pressed }, effects)
    }
}

/// Computes the state following `state` after `event`.
pub fn transition(state: State, event: Event, cx: &TransitionCx<'_>) -> (State, Effects) {
    let none = Effects::new;
    match (state, event) {
        (state, Event::PointerDown) => {
            if let State::Settling { animation, .. } = &state {
                debug!("Pointer press supersedes animation {}", animation.id());
            }
            let dragging = State::Dragging {
                captured: cx.progress,
                suppressed: true,
            };
            (dragging, none())
        }
        (
            State::Settling {
                animation,
                pressed: true,
            },
            Event::PointerMove,
        ) => {
            debug!("Pointer move supersedes animation {}", animation.id());
            let dragging = State::Dragging {
                captured: cx.progress,
                suppressed: false,
            };
            (dragging, none())
        }
        (State::Dragging { captured, .. }, Event::PointerMove) => {
            let dragging = State::Dragging {
                captured,
                suppressed: false,
            };
            (dragging, none())
        }
        (
            State::Dragging {
                captured,
                suppressed: true,
            },
            Event::ProgressChanged { value, from_user },
        ) => {
            let mut effects = none();
            if value != captured {
                trace!("Reverting suppressed change to {value} (from_user: {from_user})");
                effects.push(Effect::SetProgress(captured));
            }
            let dragging = State::Dragging {
                captured,
                suppressed: true,
            };
            (dragging, effects)
        }
        (State::Dragging { .. }, Event::PointerUp | Event::PointerCancel) => {
            match cx.increments.nearest(cx.progress) {
                Some(target) => cx.animate_to(target, cx.settle_duration, false),
                None => (State::Idle, none()),
            }
        }
        // The jump already ends on an increment.
        (
            State::Settling {
                animation,
                pressed: true,
            },
            Event::PointerUp | Event::PointerCancel,
        ) => {
            let settling = State::Settling {
                animation,
                pressed: false,
            };
            (settling, none())
        }
        (state, Event::SetIncrement(index)) => match cx.increments.get(index) {
            Some(target) => cx.animate_to(target, cx.jump_duration, state.is_pressed()),
            None => (state, none()),
        },
        (
            State::Settling {
                mut animation,
                pressed,
            },
            Event::AnimFrame { id, interval },
        ) if animation.id() == id => {
            let value = animation.advance(interval);
            let mut effects = none();
            if value != cx.progress {
                effects.push(Effect::SetProgress(value));
            }
            effects.push(Effect::RequestPaint);
            if value == animation.target() {
                let index = cx.increments.nearest_index(value);
                debug!("Animation {id} settled on increment {index} ({value})");
                effects.push(Effect::Settled { index, value });
                let next = if pressed {
                    State::Dragging {
                        captured: value,
                        suppressed: false,
                    }
                } else {
                    State::Idle
                };
                (next, effects)
            } else {
                trace!("Animation {id} at {value}");
                effects.push(Effect::RequestAnimFrame(id));
                (State::Settling { animation, pressed }, effects)
            }
        }
        (state, Event::AnimFrame { id, .. }) => {
            trace!("Ignoring stale frame for animation {id}");
            (state, none())
        }
        (state, _) => (state, none()),
    }
}

/// The interaction state of one slider.
#[derive(Clone, Debug)]
pub struct Controller {
    state: State,
    increments: Increments,
    last_id: AnimationId,
    settle_duration: Duration,
    jump_duration: Duration,
    easing: Easing,
}

// --- MARK: BUILDERS
impl Controller {
    /// Creates an idle controller snapping to `increments`.
    pub fn new(increments: Increments) -> Self {
        Self {
            state: State::Idle,
            increments,
            last_id: AnimationId::NONE,
            settle_duration: theme::SETTLE_DURATION,
            jump_duration: theme::JUMP_DURATION,
            easing: Easing::default(),
        }
    }

    /// Sets the duration of the animation after the pointer is released.
    pub fn with_settle_duration(mut self, duration: Duration) -> Self {
        self.settle_duration = duration;
        self
    }

    /// Sets the duration of the animation started by [`set_increment`](Self::set_increment).
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

// --- MARK: METHODS
impl Controller {
    /// Feeds `event` to the state machine, given the host's current `progress`.
    pub fn handle(&mut self, event: Event, progress: i32) -> Effects {
        let cx = TransitionCx {
            progress,
            increments: &self.increments,
            next_id: self.last_id.next(),
            settle_duration: self.settle_duration,
            jump_duration: self.jump_duration,
            easing: self.easing,
        };
        let previous = std::mem::take(&mut self.state);
        let previous_name = previous.name();
        let (state, effects) = transition(previous, event, &cx);

        if let State::Settling { animation, .. } = &state
            && animation.id() == cx.next_id
        {
            self.last_id = cx.next_id;
        }
        if previous_name != state.name() {
            debug!("{previous_name} -> {} on {event:?}", state.name());
        }
        self.state = state;
        effects
    }

    /// Starts animating to the increment at `index`.
    ///
    /// Does nothing if no increments are configured.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not a valid increment index.
    pub fn set_increment(
        &mut self,
        index: usize,
        progress: i32,
    ) -> Result<Effects, IncrementOutOfRange> {
        if self.increments.is_empty() {
            debug!("Ignoring set_increment({index}): no increments configured");
            return Ok(Effects::new());
        }
        if index >= self.increments.len() {
            return Err(IncrementOutOfRange {
                index,
                len: self.increments.len(),
            });
        }
        Ok(self.handle(Event::SetIncrement(index), progress))
    }

    /// Replaces the increments, cancelling any animation.
    ///
    /// A held pointer stays a drag, unsuppressed, so its release settles on the new
    /// increments. Otherwise the controller returns to [`State::Idle`].
    pub fn reconfigure(&mut self, increments: Increments, progress: i32) {
        let state = if self.state.is_pressed() {
            State::Dragging {
                captured: progress,
                suppressed: false,
            }
        } else {
            State::Idle
        };
        if self.state != state {
            debug!("Reconfigured while {}, now {}", self.state.name(), state.name());
        }
        self.increments = increments;
        self.state = state;
    }

    /// The current state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// The values the slider snaps to.
    pub fn increments(&self) -> &Increments {
        &self.increments
    }

    /// Returns `true` if host progress changes are currently being reverted.
    pub fn is_suppressed(&self) -> bool {
        matches!(
            self.state,
            State::Dragging {
                suppressed: true,
                ..
            }
        )
    }

    /// The animation currently running, if any.
    pub fn animation(&self) -> Option<&Animation> {
        match &self.state {
            State::Settling { animation, .. } => Some(animation),
            _ => None,
        }
    }

    /// The duration of the animation after the pointer is released.
    pub fn settle_duration(&self) -> Duration {
        self.settle_duration
    }

    /// The duration of the animation started by [`set_increment`](Self::set_increment).
    pub fn jump_duration(&self) -> Duration {
        self.jump_duration
    }
}
