// Copyright 2026 the Sideswipe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sideswipe Settings: per-side configuration for swipeable rows.
//!
//! Each side of a row (left buttons, right buttons) carries one
//! [`SwipeSettings`] instance describing how that side behaves: the settle
//! threshold, bounce policy, button spacing and margins, and the animation
//! specs used when the side is shown, hidden, or stretched back from an
//! over-drag. Settings are plain data — immutable during a gesture, freely
//! mutable between gestures.
//!
//! [`SwipeDirection`] and [`SwipeTransition`] live here too, since both the
//! buttons layout and the row state machine key off them.
//!
//! This crate is `no_std` compatible.

#![no_std]

use sideswipe_animation::SwipeAnimation;

/// Which side of the row a swipe reveals.
///
/// `LeftToRight` reveals the left button group (content shifts right);
/// `RightToLeft` reveals the right group (content shifts left).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Content moves right, revealing the left buttons.
    LeftToRight,
    /// Content moves left, revealing the right buttons.
    RightToLeft,
}

impl SwipeDirection {
    /// Sign of swipe offsets that reveal this side: `+1.0` or `−1.0`.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::LeftToRight => 1.0,
            Self::RightToLeft => -1.0,
        }
    }

    /// The other side.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::LeftToRight => Self::RightToLeft,
            Self::RightToLeft => Self::LeftToRight,
        }
    }

    /// The side revealed by an offset of the given sign, if any.
    #[must_use]
    pub fn from_offset(offset: f64) -> Option<Self> {
        if offset > 0.0 {
            Some(Self::LeftToRight)
        } else if offset < 0.0 {
            Some(Self::RightToLeft)
        } else {
            None
        }
    }
}

/// Visual behavior of a button group while the row is mid-swipe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwipeTransition {
    /// Buttons track the drag 1:1 (no transform beyond the group's own
    /// translation).
    #[default]
    Drag,
    /// Buttons appear fixed relative to the revealed edge rather than to the
    /// row: they slide uniformly as the row uncovers them.
    Static,
    /// Buttons start stacked at the row edge and spread to their resting
    /// positions as the swipe progresses.
    Border,
}

/// Configuration for one side of a swipeable row.
///
/// Defaults give the customary feel: a centered 0.5 threshold, bouncy
/// over-drag at full rate, buttons kept open past the threshold, and
/// bounce-out settle animations of 0.3 s.
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeSettings {
    /// Transition used while swiping buttons.
    pub transition: SwipeTransition,

    /// Size-proportional threshold to keep/hide the buttons when the gesture
    /// ends, in `[0, 1]` of the group width.
    pub threshold: f64,

    /// Extra pixel bias applied to the button group position, relative to
    /// the row border.
    pub offset: f64,

    /// Top margin of the buttons relative to the row content.
    pub top_margin: f64,

    /// Bottom margin of the buttons relative to the row content.
    pub bottom_margin: f64,

    /// Distance between buttons within the group.
    pub buttons_distance: f64,

    /// Expands the edge button by the platform safe-area inset, so its
    /// content is not covered on notched displays.
    pub expand_edge_button_by_safe_inset: bool,

    /// Animation used when the buttons are shown.
    pub show_animation: SwipeAnimation,

    /// Animation used when the buttons are hidden.
    pub hide_animation: SwipeAnimation,

    /// Animation used when the row is pulled back from an over-drag beyond
    /// the settle target.
    pub stretch_animation: SwipeAnimation,

    /// If `true`, the buttons stay open when the gesture ends past the
    /// threshold; if `false`, they always close on release.
    pub keep_buttons_swiped: bool,

    /// If `true`, the row content stays put and only the buttons move.
    pub only_swipe_buttons: bool,

    /// If `false`, the swipe stops hard at the group width instead of
    /// bouncing past it.
    pub enable_bounce: bool,

    /// Coefficient applied to movement past the group width when bounce is
    /// enabled: `0.0` stops at the edge, `1.0` drags 1:1 past it.
    pub bounce_rate: f64,

    /// If `true`, buttons keep their intrinsic widths; if `false`, every
    /// button in the group is sized to the widest one.
    pub allow_different_widths: bool,
}

impl Default for SwipeSettings {
    fn default() -> Self {
        Self {
            transition: SwipeTransition::Drag,
            threshold: 0.5,
            offset: 0.0,
            top_margin: 0.0,
            bottom_margin: 0.0,
            buttons_distance: 0.0,
            expand_edge_button_by_safe_inset: true,
            show_animation: SwipeAnimation::default(),
            hide_animation: SwipeAnimation::default(),
            stretch_animation: SwipeAnimation::default(),
            keep_buttons_swiped: true,
            only_swipe_buttons: false,
            enable_bounce: true,
            bounce_rate: 1.0,
            allow_different_widths: false,
        }
    }
}

impl SwipeSettings {
    /// Settle target magnitude for a released gesture at `offset_abs` against
    /// a group of `group_width`: the full width if the threshold rule keeps
    /// the buttons open, zero otherwise.
    #[must_use]
    pub fn settle_width(&self, offset_abs: f64, group_width: f64) -> f64 {
        if self.keep_buttons_swiped && offset_abs > group_width * self.threshold {
            group_width
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sideswipe_animation::Easing;

    #[test]
    fn direction_signs_and_opposites() {
        assert_eq!(SwipeDirection::LeftToRight.sign(), 1.0);
        assert_eq!(SwipeDirection::RightToLeft.sign(), -1.0);
        assert_eq!(
            SwipeDirection::LeftToRight.opposite(),
            SwipeDirection::RightToLeft
        );
        assert_eq!(
            SwipeDirection::RightToLeft.opposite(),
            SwipeDirection::LeftToRight
        );
    }

    #[test]
    fn direction_from_offset_sign() {
        assert_eq!(
            SwipeDirection::from_offset(12.0),
            Some(SwipeDirection::LeftToRight)
        );
        assert_eq!(
            SwipeDirection::from_offset(-0.5),
            Some(SwipeDirection::RightToLeft)
        );
        assert_eq!(SwipeDirection::from_offset(0.0), None);
    }

    #[test]
    fn defaults_are_the_documented_values() {
        let settings = SwipeSettings::default();
        assert_eq!(settings.transition, SwipeTransition::Drag);
        assert_eq!(settings.threshold, 0.5);
        assert_eq!(settings.bounce_rate, 1.0);
        assert!(settings.enable_bounce);
        assert!(settings.keep_buttons_swiped);
        assert!(settings.expand_edge_button_by_safe_inset);
        assert!(!settings.allow_different_widths);
        assert!(!settings.only_swipe_buttons);
        assert_eq!(settings.show_animation.duration, 0.3);
        assert_eq!(settings.show_animation.easing, Easing::BounceOut);
    }

    #[test]
    fn settle_width_applies_threshold_rule() {
        let settings = SwipeSettings::default();
        // threshold 0.5, width 100: 60 keeps, 40 closes, exactly 50 closes.
        assert_eq!(settings.settle_width(60.0, 100.0), 100.0);
        assert_eq!(settings.settle_width(40.0, 100.0), 0.0);
        assert_eq!(settings.settle_width(50.0, 100.0), 0.0);
    }

    #[test]
    fn settle_width_is_zero_when_not_keeping_buttons() {
        let settings = SwipeSettings {
            keep_buttons_swiped: false,
            ..SwipeSettings::default()
        };
        assert_eq!(settings.settle_width(95.0, 100.0), 0.0);
    }
}
