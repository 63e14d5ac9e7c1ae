// Copyright 2026 the Sideswipe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sideswipe Buttons: layout of one row's action-button group.
//!
//! A [`ButtonsLayout`] arranges the button placeholders for one side of a
//! swipeable row. It owns no widgets and renders nothing — buttons are
//! described by their intrinsic sizes ([`SwipeButton`]), and the layout
//! answers geometric questions the host realizes however it likes:
//!
//! - each slot's width (intrinsic, or uniform at the group max), the group's
//!   total width including inter-button spacing and the safe-inset edge
//!   extension;
//! - each slot's x position as a pure function of swipe progress
//!   `t ∈ [0, 1]` and a [`SwipeTransition`] mode ([`ButtonsLayout::slot_positions`]);
//! - the group's resting frame within a row ([`ButtonsLayout::frame`]);
//! - which slot a local point lands in ([`ButtonsLayout::slot_at`]).
//!
//! Slots are stored left-to-right in screen order. A `RightToLeft` group
//! stores the caller's buttons reversed, so stored index 0 is always nearest
//! the row's center; [`ButtonsLayout::logical_index`] maps a stored slot back
//! to the caller's ordering for tap reporting.
//!
//! ## Minimal example
//!
//! ```rust
//! use sideswipe_buttons::{ButtonsLayout, SwipeButton};
//! use sideswipe_settings::{SwipeDirection, SwipeSettings, SwipeTransition};
//!
//! let settings = SwipeSettings::default();
//! let layout = ButtonsLayout::new(
//!     vec![SwipeButton::new(60.0, 44.0), SwipeButton::new(80.0, 44.0)],
//!     SwipeDirection::RightToLeft,
//!     &settings,
//!     0.0,
//! );
//!
//! // Uniform-width mode sizes both slots to the widest button.
//! assert_eq!(layout.total_width(), 160.0);
//!
//! // Fully revealed, slots sit at their resting positions.
//! let at_rest = layout.slot_positions(1.0, SwipeTransition::Border);
//! assert_eq!(at_rest.as_slice(), &[0.0, 80.0]);
//! ```
//!
//! This crate is `no_std` compatible.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use smallvec::SmallVec;

use sideswipe_settings::{SwipeDirection, SwipeSettings, SwipeTransition};

/// Intrinsic description of one action button.
///
/// The engine decides where a button sits and when it is tappable, never what
/// it does or how it looks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeButton {
    /// Intrinsic width.
    pub width: f64,
    /// Intrinsic height.
    pub height: f64,
}

impl SwipeButton {
    /// Creates a button placeholder with the given intrinsic size.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// One laid-out button within a group.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Slot {
    width: f64,
    height: f64,
    /// Resting x within the group, left edge relative to the group origin.
    resting_x: f64,
    /// Extra content padding on the screen-edge side, grown when the slot
    /// absorbs a safe-area inset so its visible content stays clear of it.
    content_inset: f64,
}

/// Inline capacity for slot storage; swipe rows rarely carry more buttons.
type Slots = SmallVec<[Slot; 4]>;

/// Positions produced by [`ButtonsLayout::slot_positions`].
pub type SlotPositions = SmallVec<[f64; 4]>;

/// Layout of the action-button group on one side of a row.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonsLayout {
    slots: Slots,
    direction: SwipeDirection,
    distance: f64,
    safe_inset: f64,
    width: f64,
    height: f64,
}

impl ButtonsLayout {
    /// Lays out `buttons` for one side of a row.
    ///
    /// Unless `settings.allow_different_widths` is set, every slot is sized
    /// to the widest button. The group width is the sum of slot widths plus
    /// `settings.buttons_distance` between neighbors, widened by
    /// `safe_inset`; when `settings.expand_edge_button_by_safe_inset` holds,
    /// the slot at the true screen edge absorbs that inset into its width and
    /// content padding.
    #[must_use]
    pub fn new(
        buttons: Vec<SwipeButton>,
        direction: SwipeDirection,
        settings: &SwipeSettings,
        safe_inset: f64,
    ) -> Self {
        let mut max_width: f64 = 0.0;
        let mut max_height: f64 = 0.0;
        for button in &buttons {
            max_width = max_width.max(button.width);
            max_height = max_height.max(button.height);
        }

        let mut slots: Slots = buttons
            .iter()
            .map(|button| Slot {
                width: if settings.allow_different_widths {
                    button.width
                } else {
                    max_width
                },
                height: button.height,
                resting_x: 0.0,
                content_inset: 0.0,
            })
            .collect();

        // Stored order is screen order: right groups reverse the caller's
        // buttons so stored index 0 is nearest the row's center.
        if direction == SwipeDirection::RightToLeft {
            slots.reverse();
        }

        let mut layout = Self {
            slots,
            direction,
            distance: settings.buttons_distance,
            safe_inset,
            width: 0.0,
            height: max_height,
        };

        if safe_inset > 0.0 && settings.expand_edge_button_by_safe_inset {
            if let Some(edge) = layout.edge_slot_index() {
                layout.slots[edge].width += safe_inset;
                layout.slots[edge].content_inset += safe_inset;
            }
        }

        layout.reflow();
        layout
    }

    /// Recomputes resting positions and the total group width from the
    /// current slot widths.
    fn reflow(&mut self) {
        let mut x = 0.0;
        let last = self.slots.len().saturating_sub(1);
        for (i, slot) in self.slots.iter_mut().enumerate() {
            slot.resting_x = x;
            x += slot.width;
            if i != last {
                x += self.distance;
            }
        }
        // The frame is safe_inset wider than the intrinsic slots. When the
        // edge slot absorbed the inset its width already accounts for it.
        let absorbed: f64 = self.slots.iter().map(|s| s.content_inset).sum();
        self.width = x + (self.safe_inset - absorbed);
    }

    /// Stored index of the slot at the true screen edge: the first slot for
    /// a left group, the last for a right group.
    fn edge_slot_index(&self) -> Option<usize> {
        if self.slots.is_empty() {
            return None;
        }
        Some(match self.direction {
            SwipeDirection::LeftToRight => 0,
            SwipeDirection::RightToLeft => self.slots.len() - 1,
        })
    }

    /// The side this group belongs to.
    #[must_use]
    pub fn direction(&self) -> SwipeDirection {
        self.direction
    }

    /// Number of buttons in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the group has no buttons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Total group width, spacing and safe-inset extension included.
    #[must_use]
    pub fn total_width(&self) -> f64 {
        self.width
    }

    /// Group height: the tallest button's intrinsic height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Width of the stored slot at `index`.
    #[must_use]
    pub fn slot_width(&self, index: usize) -> Option<f64> {
        self.slots.get(index).map(|s| s.width)
    }

    /// Content padding of the stored slot at `index` (nonzero only on an
    /// edge slot that absorbed a safe inset).
    #[must_use]
    pub fn content_inset(&self, index: usize) -> Option<f64> {
        self.slots.get(index).map(|s| s.content_inset)
    }

    /// The safe inset this layout currently accounts for.
    #[must_use]
    pub fn safe_inset(&self) -> f64 {
        self.safe_inset
    }

    /// Maps a stored slot index back to the caller's button ordering.
    ///
    /// Right groups are stored reversed, so their slots map to
    /// `len − 1 − index`. Out-of-range indices (including any index on an
    /// empty group) saturate to 0.
    #[must_use]
    pub fn logical_index(&self, slot: usize) -> usize {
        match self.direction {
            SwipeDirection::LeftToRight => slot,
            SwipeDirection::RightToLeft => self.slots.len().saturating_sub(slot + 1),
        }
    }

    /// Computes each stored slot's x position at swipe progress `t` under
    /// the given transition mode.
    ///
    /// Pure: the same `(t, mode)` always yields the same positions. At
    /// `t = 1` every mode agrees with the resting layout.
    #[must_use]
    pub fn slot_positions(&self, t: f64, mode: SwipeTransition) -> SlotPositions {
        let from_left = self.direction == SwipeDirection::LeftToRight;
        match mode {
            SwipeTransition::Drag => self.slots.iter().map(|s| s.resting_x).collect(),
            SwipeTransition::Static => {
                // The whole group appears pinned to the revealed edge: slide
                // it uniformly by the not-yet-revealed remainder.
                let dx = self.width * (1.0 - t);
                self.slots
                    .iter()
                    .map(|s| s.resting_x + if from_left { dx } else { -dx })
                    .collect()
            }
            SwipeTransition::Border => self
                .slots
                .iter()
                .map(|s| {
                    if from_left {
                        (self.width - s.width - s.resting_x) * (1.0 - t) + s.resting_x
                    } else {
                        s.resting_x * t
                    }
                })
                .collect(),
        }
    }

    /// Applies a changed safe-area inset, returning the group width delta.
    ///
    /// Only the edge slot resizes; its content padding shifts by the same
    /// delta so the visible content is not covered by the inset. The caller
    /// uses the returned delta to recompute frames and to compensate an open
    /// swipe offset.
    pub fn set_safe_inset(&mut self, safe_inset: f64, extend_edge_button: bool) -> f64 {
        let diff = safe_inset - self.safe_inset;
        if diff == 0.0 {
            return 0.0;
        }
        self.safe_inset = safe_inset;
        if extend_edge_button {
            if let Some(edge) = self.edge_slot_index() {
                self.slots[edge].width += diff;
                self.slots[edge].content_inset += diff;
            }
        }
        self.reflow();
        diff
    }

    /// The group's resting frame within a row of `row_width` × `row_height`.
    ///
    /// A left group hangs off the row's left edge, a right group off the
    /// right edge; the safe inset shifts the origin outward, mirrored when
    /// the layout direction is right-to-left. Top and bottom margins come
    /// from the side's settings.
    #[must_use]
    pub fn frame(
        &self,
        row_width: f64,
        row_height: f64,
        settings: &SwipeSettings,
        rtl: bool,
    ) -> Rect {
        let safe_shift = self.safe_inset * if rtl { 1.0 } else { -1.0 };
        let x0 = match self.direction {
            SwipeDirection::LeftToRight => -self.width + safe_shift,
            SwipeDirection::RightToLeft => row_width + safe_shift,
        };
        let y0 = settings.top_margin;
        let y1 = row_height - settings.bottom_margin;
        Rect::new(x0, y0, x0 + self.width, y1)
    }

    /// The stored slot containing local x coordinate `x` at swipe progress
    /// `t` under the given transition mode, if any.
    ///
    /// Hit windows follow the transitioned positions, so mid-transition taps
    /// land on the buttons where they are drawn. Points in the spacing
    /// between slots hit nothing; where `Border` slots overlap mid-flight,
    /// the slot nearest the row's center wins.
    #[must_use]
    pub fn slot_at(&self, x: f64, t: f64, mode: SwipeTransition) -> Option<usize> {
        let positions = self.slot_positions(t, mode);
        self.slots
            .iter()
            .zip(positions.iter())
            .position(|(s, &pos)| x >= pos && x < pos + s.width)
    }
}
