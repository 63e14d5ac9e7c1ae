// Copyright 2026 the Sideswipe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animator: single-slot, tick-driven playback of one [`SwipeAnimation`].
//!
//! ## Usage
//!
//! 1) Call [`Animator::start`] with an [`ActiveAnimation`] and an optional
//!    completion callback.
//! 2) While [`Animator::is_active`] returns `true`, call [`Animator::tick`]
//!    once per render frame with the frame's timestamp.
//! 3) Apply [`Tick::Running`] values directly. On [`Tick::Finished`], apply
//!    the final value, then invoke the handed-out completion with `true`.
//! 4) [`Animator::cancel`] (or a new `start`) releases the slot and fires the
//!    outgoing completion with `false` exactly once.

use core::fmt;

use alloc::boxed::Box;

use crate::SwipeAnimation;

/// Completion callback invoked once per animated transition.
///
/// The argument is `true` when the animation ran to its target and `false`
/// when it was cancelled (superseded by a new transition or gesture).
pub type Completion = Box<dyn FnOnce(bool)>;

/// Transient record of one in-flight animated transition.
///
/// The start time is unset until the first tick: animations are created in
/// response to gesture events, but time begins at the first render frame
/// that observes them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveAnimation {
    from: f64,
    to: f64,
    start: Option<f64>,
    animation: SwipeAnimation,
}

impl ActiveAnimation {
    /// Creates a transition from `from` to `to` driven by `animation`.
    #[must_use]
    pub fn new(from: f64, to: f64, animation: SwipeAnimation) -> Self {
        Self {
            from,
            to,
            start: None,
            animation,
        }
    }

    /// The offset this transition started from.
    #[must_use]
    pub fn from(&self) -> f64 {
        self.from
    }

    /// The offset this transition is heading toward.
    #[must_use]
    pub fn to(&self) -> f64 {
        self.to
    }

    /// Advances the transition to timestamp `now` (seconds).
    ///
    /// The first call latches `now` as the start time and evaluates at
    /// elapsed zero. Returns the exact target once the duration has elapsed
    /// (or immediately for an instantaneous spec).
    pub fn tick(&mut self, now: f64) -> Frame {
        let start = *self.start.get_or_insert(now);
        let elapsed = now - start;
        if self.animation.is_instantaneous() || elapsed >= self.animation.duration {
            Frame::Done(self.to)
        } else {
            Frame::Running(self.animation.value_at(elapsed, self.from, self.to))
        }
    }
}

/// Value produced by one [`ActiveAnimation::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Frame {
    /// Mid-flight interpolated value.
    Running(f64),
    /// The transition reached its target; the value is exactly `to`.
    Done(f64),
}

/// Outcome of one [`Animator::tick`].
pub enum Tick {
    /// No animation in flight; the caller should not be ticking.
    Idle,
    /// The interpolated value for this frame.
    Running(f64),
    /// The animation reached its target this frame and the clock slot has
    /// been released. The caller applies `value`, then invokes `completion`
    /// (if any) with `true` — after the value is applied, so observers see
    /// the settled state.
    Finished {
        /// The exact target offset.
        value: f64,
        /// The completion callback handed back to the caller.
        completion: Option<Completion>,
    },
}

impl fmt::Debug for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("Idle"),
            Self::Running(v) => f.debug_tuple("Running").field(v).finish(),
            Self::Finished { value, completion } => f
                .debug_struct("Finished")
                .field("value", value)
                .field("has_completion", &completion.is_some())
                .finish(),
        }
    }
}

impl PartialEq for Tick {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Idle, Self::Idle) => true,
            (Self::Running(a), Self::Running(b)) => a == b,
            (Self::Finished { value: a, .. }, Self::Finished { value: b, .. }) => a == b,
            _ => false,
        }
    }
}

/// Single-slot animation engine.
///
/// At most one animation is in flight per animator (one animator per row).
/// The active slot doubles as the clock subscription: [`Animator::is_active`]
/// tells the host whether render ticks are wanted, and every exit path —
/// completion, cancellation, supersession — clears it synchronously.
#[derive(Default)]
pub struct Animator {
    active: Option<ActiveAnimation>,
    completion: Option<Completion>,
}

impl fmt::Debug for Animator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animator")
            .field("active", &self.active)
            .field("has_completion", &self.completion.is_some())
            .finish()
    }
}

impl Animator {
    /// Creates an idle animator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while an animation is in flight (ticks wanted).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The target of the in-flight animation, if any.
    #[must_use]
    pub fn target(&self) -> Option<f64> {
        self.active.as_ref().map(ActiveAnimation::to)
    }

    /// Starts an animated transition, superseding any in-flight one.
    ///
    /// The outgoing animation's completion is invoked with `false` before
    /// the new animation is installed, so cancellation is observable before
    /// the replacement can produce a value.
    pub fn start(&mut self, animation: ActiveAnimation, completion: Option<Completion>) {
        self.cancel();
        self.active = Some(animation);
        self.completion = completion;
    }

    /// Cancels the in-flight animation, if any.
    ///
    /// Its completion fires with `false` exactly once; the clock slot is
    /// released synchronously. Idempotent on an idle animator.
    pub fn cancel(&mut self) {
        self.active = None;
        if let Some(completion) = self.completion.take() {
            completion(false);
        }
    }

    /// Advances the in-flight animation to timestamp `now`.
    ///
    /// On the finishing frame the slot is released before returning, so
    /// `is_active()` is already `false` when the caller sees
    /// [`Tick::Finished`]; the completion callback is handed back for the
    /// caller to invoke after applying the final value.
    pub fn tick(&mut self, now: f64) -> Tick {
        let Some(active) = self.active.as_mut() else {
            return Tick::Idle;
        };
        match active.tick(now) {
            Frame::Running(value) => Tick::Running(value),
            Frame::Done(value) => {
                self.active = None;
                Tick::Finished {
                    value,
                    completion: self.completion.take(),
                }
            }
        }
    }
}
