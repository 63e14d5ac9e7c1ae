// Copyright 2026 the Sideswipe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sideswipe Animation: tick-driven offset interpolation for swipe rows.
//!
//! This crate turns a `(from, to, duration, easing)` specification and a
//! stream of clock timestamps into interpolated swipe offsets. It has two
//! layers:
//!
//! - [`SwipeAnimation`]: the specification a row's settings carry around —
//!   a duration in seconds and an [`Easing`] selector. Pure value type.
//! - [`Animator`]: the engine. It owns at most one in-flight
//!   [`ActiveAnimation`] together with an optional completion callback, and
//!   guarantees a deterministic cancellation signal: starting a new
//!   animation (or cancelling) while one is in flight invokes the outgoing
//!   completion with `success = false` exactly once, before the new
//!   animation can receive a tick.
//!
//! The animator is host-agnostic: it does not schedule anything. Hosts drive
//! it with [`Animator::tick`] once per render frame while
//! [`Animator::is_active`] is `true`, and stop ticking the moment it turns
//! `false`. The active slot *is* the clock subscription — completion and
//! cancellation both clear it synchronously, so an idle animator never wants
//! ticks.
//!
//! ## Minimal example
//!
//! ```rust
//! use sideswipe_animation::{ActiveAnimation, Animator, SwipeAnimation, Tick};
//! use sideswipe_easing::Easing;
//!
//! let mut animator = Animator::new();
//! let spec = SwipeAnimation::new(0.1, Easing::Linear);
//! animator.start(ActiveAnimation::new(0.0, 80.0, spec), None);
//!
//! // The first tick latches the start time and reports the initial value.
//! assert_eq!(animator.tick(0.0), Tick::Running(0.0));
//! assert_eq!(animator.tick(0.05), Tick::Running(40.0));
//!
//! // Reaching the duration yields exactly the target and releases the slot.
//! match animator.tick(0.1) {
//!     Tick::Finished { value, .. } => assert_eq!(value, 80.0),
//!     other => panic!("expected Finished, got {other:?}"),
//! }
//! assert!(!animator.is_active());
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod animator;

pub use animator::{ActiveAnimation, Animator, Completion, Tick};
pub use sideswipe_easing::Easing;

/// Specification of one animated swipe transition.
///
/// Settings carry three of these (show, hide, stretch); the row picks one at
/// gesture end and hands it to the [`Animator`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeAnimation {
    /// Animation duration in seconds.
    pub duration: f64,
    /// Easing function shaping the interpolation.
    pub easing: Easing,
}

impl Default for SwipeAnimation {
    fn default() -> Self {
        Self {
            duration: 0.3,
            easing: Easing::BounceOut,
        }
    }
}

impl SwipeAnimation {
    /// Creates an animation spec with the given duration (seconds) and easing.
    #[must_use]
    pub fn new(duration: f64, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Returns `true` if this spec describes an instantaneous change.
    ///
    /// Zero and negative durations are both treated as "apply immediately";
    /// they never produce a clock subscription.
    #[must_use]
    pub fn is_instantaneous(&self) -> bool {
        self.duration <= 0.0
    }

    /// Evaluates the eased value at `elapsed` seconds into a transition from
    /// `from` to `to`.
    ///
    /// Clamps time at the end of the animation: any `elapsed >= duration`
    /// returns exactly `to`, regardless of easing, so settled offsets are
    /// bit-exact.
    #[must_use]
    pub fn value_at(&self, elapsed: f64, from: f64, to: f64) -> f64 {
        if self.is_instantaneous() {
            return to;
        }
        let t = (elapsed / self.duration).min(1.0);
        if t == 1.0 {
            return to;
        }
        self.easing.interpolate(t, from, to - from)
    }
}
