// Copyright 2026 the Sideswipe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host collaboration: the [`RowHost`] trait and row geometry inputs.
//!
//! The row state machine never stores a reference to its host. Every
//! operation that can consult or notify the host takes `&mut dyn RowHost`
//! for the duration of the call, so the row cannot extend the host's
//! lifetime and there is exactly one resolved implementor per call site.

use alloc::vec::Vec;

use kurbo::{Insets, Point};

use sideswipe_buttons::SwipeButton;
use sideswipe_settings::{SwipeDirection, SwipeSettings};

use crate::SwipeState;

/// Host-side collaborator for one swipeable row.
///
/// All methods except the button provider have defaults, so a host
/// implements only what it cares about. Returning no data is never an
/// error: a missing button group makes the corresponding direction a no-op,
/// and an absent permission decision falls back to "has buttons".
pub trait RowHost {
    /// Supplies the button placeholders for one side of the row.
    ///
    /// Invoked lazily, the first time the row needs its button groups, and
    /// again only after an explicit invalidation
    /// ([`SwipeRow::refresh_buttons`](crate::SwipeRow::refresh_buttons) with
    /// `use_provider = true`, or row reuse). `None` (or an empty list) means
    /// the side has no buttons and cannot be revealed.
    fn buttons_for(
        &mut self,
        direction: SwipeDirection,
        settings: &SwipeSettings,
    ) -> Option<Vec<SwipeButton>>;

    /// Decides whether a swipe toward `direction` may start at `location`.
    ///
    /// `None` delegates the decision to "does that side have buttons".
    fn can_swipe(&mut self, direction: SwipeDirection, location: Point) -> Option<bool> {
        let _ = (direction, location);
        None
    }

    /// The row is about to reveal its button overlay.
    fn will_begin_swiping(&mut self) {}

    /// The row's button overlay is about to disappear (offset settled at 0).
    fn will_end_swiping(&mut self) {}

    /// The swipe state changed. `gesture_active` reports whether a drag is
    /// still in progress when the transition happens.
    fn state_changed(&mut self, state: SwipeState, gesture_active: bool) {
        let _ = (state, gesture_active);
    }

    /// A revealed button was tapped. `index` is in the host's original
    /// button order. Returns `true` to auto-hide the row afterwards.
    fn tapped_button(&mut self, index: usize, direction: SwipeDirection) -> bool {
        let _ = (index, direction);
        true
    }

    /// A tap landed outside the revealed buttons. Returns `true` to hide
    /// the row (the mail-app behavior).
    fn should_hide_on_tap(&mut self, location: Point) -> bool {
        let _ = location;
        true
    }

    /// A gesture began on this row and multi-row swiping is disabled: the
    /// host should close every other currently open row (cooperative, via
    /// their [`cancel_gesture`](crate::SwipeRow::cancel_gesture) or
    /// [`hide`](crate::SwipeRow::hide)).
    fn close_sibling_rows(&mut self) {}
}

/// Resolved geometry of the hosting row.
///
/// The engine consumes already-resolved values: it never inspects the
/// platform for safe areas or layout direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowGeometry {
    /// Row content width.
    pub width: f64,
    /// Row content height.
    pub height: f64,
    /// Platform safe-area insets (left/right are the ones that matter).
    pub safe_insets: Insets,
    /// Whether the layout direction is right-to-left.
    pub rtl: bool,
}

impl RowGeometry {
    /// Geometry with no safe insets and left-to-right layout.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            safe_insets: Insets::ZERO,
            rtl: false,
        }
    }

    /// The safe inset on the given side of the row.
    #[must_use]
    pub fn safe_inset(&self, direction: SwipeDirection) -> f64 {
        match direction {
            SwipeDirection::LeftToRight => self.safe_insets.x0,
            SwipeDirection::RightToLeft => self.safe_insets.x1,
        }
    }
}
