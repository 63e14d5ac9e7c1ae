// Copyright 2026 the Sideswipe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The swipe-offset state machine.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Vec2};

use sideswipe_animation::{ActiveAnimation, Animator, Completion, SwipeAnimation, Tick};
use sideswipe_buttons::{ButtonsLayout, SlotPositions, SwipeButton};
use sideswipe_settings::{SwipeDirection, SwipeSettings};

use crate::host::{RowGeometry, RowHost};

/// Current swipe state of a row.
///
/// `None` means the offset is 0, or the row is animating back to 0 with no
/// state transition observed yet. While an animation plays, interim offsets
/// do not move the state; it settles together with the final frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwipeState {
    /// Closed, or closing with no visible commitment.
    #[default]
    None,
    /// Swiping toward the right: left buttons revealed.
    SwipingLeftToRight,
    /// Swiping toward the left: right buttons revealed.
    SwipingRightToLeft,
}

impl SwipeState {
    /// The state an offset of the given sign commits to.
    #[must_use]
    pub fn from_offset(offset: f64) -> Self {
        match SwipeDirection::from_offset(offset) {
            Some(direction) => direction.into(),
            None => Self::None,
        }
    }

    /// The direction this state swipes toward, if any.
    #[must_use]
    pub fn direction(self) -> Option<SwipeDirection> {
        match self {
            Self::None => None,
            Self::SwipingLeftToRight => Some(SwipeDirection::LeftToRight),
            Self::SwipingRightToLeft => Some(SwipeDirection::RightToLeft),
        }
    }
}

impl From<SwipeDirection> for SwipeState {
    fn from(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::LeftToRight => Self::SwipingLeftToRight,
            SwipeDirection::RightToLeft => Self::SwipingRightToLeft,
        }
    }
}

/// Swipe-offset state machine for one list row.
///
/// Owns the current offset, swipe state, per-side settings, lazily cached
/// button layouts, and the in-flight settle animation. Gesture events and
/// render ticks drive it; the host observes it through [`RowHost`] and the
/// geometry queries ([`content_translation`](Self::content_translation),
/// [`group_translation`](Self::group_translation),
/// [`button_positions`](Self::button_positions)).
///
/// Everything is synchronous: each call completes its state transition
/// before returning, and gesture events and clock ticks are expected to be
/// strictly serialized by the host's event loop.
#[derive(Debug)]
pub struct SwipeRow {
    /// Settings for the left button group.
    pub left_settings: SwipeSettings,
    /// Settings for the right button group.
    pub right_settings: SwipeSettings,
    /// Whether several rows may be swiped open at once. When `false` (the
    /// default), beginning a gesture asks the host to close the others.
    pub allows_multiple_swipe: bool,
    /// Whether a gesture may cross to the opposite side after committing to
    /// a direction.
    pub allows_opposite_swipe: bool,

    geometry: RowGeometry,
    offset: f64,
    target_offset: f64,
    pan_start_offset: f64,
    state: SwipeState,
    first_swipe_state: SwipeState,
    allow_left_to_right: bool,
    allow_right_to_left: bool,
    trigger_state_changes: bool,
    overlay_visible: bool,
    gesture_active: bool,
    left_buttons: Option<Vec<SwipeButton>>,
    right_buttons: Option<Vec<SwipeButton>>,
    left_layout: Option<ButtonsLayout>,
    right_layout: Option<ButtonsLayout>,
    animator: Animator,
}

impl SwipeRow {
    /// Release velocity (units/sec) beyond which a flick overrides the
    /// threshold rule.
    pub const INERTIA_THRESHOLD: f64 = 100.0;

    /// Creates a closed row with default settings.
    #[must_use]
    pub fn new(geometry: RowGeometry) -> Self {
        Self {
            left_settings: SwipeSettings::default(),
            right_settings: SwipeSettings::default(),
            allows_multiple_swipe: false,
            allows_opposite_swipe: true,
            geometry,
            offset: 0.0,
            target_offset: 0.0,
            pan_start_offset: 0.0,
            state: SwipeState::None,
            first_swipe_state: SwipeState::None,
            allow_left_to_right: false,
            allow_right_to_left: false,
            trigger_state_changes: true,
            overlay_visible: false,
            gesture_active: false,
            left_buttons: None,
            right_buttons: None,
            left_layout: None,
            right_layout: None,
            animator: Animator::new(),
        }
    }

    // Accessors

    /// Current swipe offset.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Current swipe state.
    #[must_use]
    pub fn state(&self) -> SwipeState {
        self.state
    }

    /// The offset the row would settle toward if released now (recomputed
    /// while dragging; the commit line).
    #[must_use]
    pub fn target_offset(&self) -> f64 {
        self.target_offset
    }

    /// Returns `true` while a drag gesture is in progress.
    #[must_use]
    pub fn is_gesture_active(&self) -> bool {
        self.gesture_active
    }

    /// Returns `true` while a settle animation is in flight — exactly when
    /// the host should be delivering render ticks to [`tick`](Self::tick).
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    /// Returns `true` while the button overlay is revealed.
    #[must_use]
    pub fn is_overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    /// The row geometry currently in effect.
    #[must_use]
    pub fn geometry(&self) -> RowGeometry {
        self.geometry
    }

    /// The laid-out button group for one side, if that side has buttons and
    /// the groups have been built.
    #[must_use]
    pub fn layout(&self, direction: SwipeDirection) -> Option<&ButtonsLayout> {
        match direction {
            SwipeDirection::LeftToRight => self.left_layout.as_ref(),
            SwipeDirection::RightToLeft => self.right_layout.as_ref(),
        }
    }

    fn settings(&self, direction: SwipeDirection) -> &SwipeSettings {
        match direction {
            SwipeDirection::LeftToRight => &self.left_settings,
            SwipeDirection::RightToLeft => &self.right_settings,
        }
    }

    fn layout_width(&self, direction: SwipeDirection) -> Option<f64> {
        self.layout(direction).map(ButtonsLayout::total_width)
    }

    // Gesture lifecycle

    /// Decides whether a drag starting with `translation` at `location`
    /// should become a swipe gesture.
    ///
    /// Vertical scrolls (`|dy| > |dx|`) are rejected. A row that is already
    /// swiped accepts immediately. Otherwise the per-direction permission is
    /// resolved — `host.can_swipe` when it answers, "has buttons on that
    /// side" when it does not — and the drag is admitted only if it points
    /// toward a permitted side.
    pub fn should_begin_gesture(
        &mut self,
        translation: Vec2,
        location: Point,
        host: &mut dyn RowHost,
    ) -> bool {
        if translation.y.abs() > translation.x.abs() {
            return false;
        }
        if self.offset != 0.0 {
            return true;
        }
        self.ensure_views(host);
        self.evaluate_permissions(location, host);
        (self.allow_left_to_right && translation.x > 0.0)
            || (self.allow_right_to_left && translation.x < 0.0)
    }

    /// Starts a drag gesture.
    ///
    /// Cancels any in-flight animation (its completion fires with `false`),
    /// snapshots the pan start offset, locks the initial direction from the
    /// current offset's sign, re-evaluates direction permissions, and —
    /// unless [`allows_multiple_swipe`](Self::allows_multiple_swipe) — asks
    /// the host to close all other open rows.
    pub fn begin_gesture(&mut self, location: Point, host: &mut dyn RowHost) {
        self.cancel_animation();
        self.ensure_views(host);
        self.pan_start_offset = self.offset;
        self.first_swipe_state = SwipeState::from_offset(self.offset);
        self.evaluate_permissions(location, host);
        if !self.allows_multiple_swipe {
            host.close_sibling_rows();
        }
        self.gesture_active = true;
    }

    /// Applies a drag movement: `delta_x` is the total horizontal
    /// translation since the gesture began.
    ///
    /// Never animates; the offset is a direct, synchronous function of the
    /// input, filtered by direction permissions and the opposite-swipe lock,
    /// then bounded by the bounce policy.
    pub fn update_gesture(&mut self, delta_x: f64, host: &mut dyn RowHost) {
        if !self.gesture_active {
            return;
        }
        let candidate = self.pan_start_offset + delta_x;
        if self.first_swipe_state == SwipeState::None {
            self.first_swipe_state = SwipeState::from_offset(candidate);
        }
        let filtered = self.filter_swipe(candidate);
        self.apply_offset(filtered, host);
    }

    /// Ends the drag gesture with the release velocity (units/sec).
    ///
    /// Picks the settle target — threshold rule first, overridden by a
    /// strong flick, then filtered by direction permissions — selects the
    /// matching animation (hide for 0, stretch when pulling back from an
    /// over-drag, show otherwise), and starts the animated settle.
    pub fn end_gesture(&mut self, velocity_x: f64, host: &mut dyn RowHost) {
        self.gesture_active = false;
        let offset = self.offset;

        let mut target = match SwipeDirection::from_offset(offset) {
            Some(direction) => {
                let width = self.layout_width(direction).unwrap_or(0.0);
                direction.sign() * self.settings(direction).settle_width(offset.abs(), width)
            }
            None => 0.0,
        };

        if velocity_x > Self::INERTIA_THRESHOLD {
            if offset < 0.0 {
                target = 0.0;
            } else if let Some(width) = self.layout_width(SwipeDirection::LeftToRight) {
                if self.left_settings.keep_buttons_swiped {
                    target = width;
                }
            }
        } else if velocity_x < -Self::INERTIA_THRESHOLD {
            if offset > 0.0 {
                target = 0.0;
            } else if let Some(width) = self.layout_width(SwipeDirection::RightToLeft) {
                if self.right_settings.keep_buttons_swiped {
                    target = -width;
                }
            }
        }

        let target = self.filter_swipe(target);
        let settings = if offset > 0.0 {
            &self.left_settings
        } else {
            &self.right_settings
        };
        let animation = if target == 0.0 {
            settings.hide_animation
        } else if offset.abs() > target.abs() {
            settings.stretch_animation
        } else {
            settings.show_animation
        };
        self.set_offset(target, Some(animation), None, host);
        self.first_swipe_state = SwipeState::None;
    }

    /// Aborts an in-progress gesture, closing the row if it is open.
    ///
    /// Also the entry point for cooperative multi-row exclusivity: hosts
    /// call this on sibling rows when another row begins a gesture.
    pub fn cancel_gesture(&mut self, host: &mut dyn RowHost) {
        self.gesture_active = false;
        self.first_swipe_state = SwipeState::None;
        if self.offset != 0.0 || self.is_animating() {
            self.hide(true, None, host);
        }
    }

    // Programmatic offset control

    /// Sets the swipe offset, optionally animated.
    ///
    /// Any in-flight animation is cancelled first (completion fires with
    /// `false`). With no animation — or an instantaneous one — the offset
    /// applies immediately and `completion` fires synchronously with `true`.
    /// Otherwise a settle animation starts from the current offset; state
    /// change notifications are suppressed until its final frame.
    pub fn set_offset(
        &mut self,
        offset: f64,
        animation: Option<SwipeAnimation>,
        completion: Option<Completion>,
        host: &mut dyn RowHost,
    ) {
        self.cancel_animation();
        if offset != 0.0 {
            self.ensure_views(host);
        }
        match animation {
            Some(spec) if !spec.is_instantaneous() => {
                self.trigger_state_changes = false;
                self.animator
                    .start(ActiveAnimation::new(self.offset, offset, spec), completion);
            }
            _ => {
                self.apply_offset(offset, host);
                if let Some(completion) = completion {
                    completion(true);
                }
            }
        }
    }

    /// Reveals the button group on `direction`'s side.
    ///
    /// If that side has no buttons the row stays closed and `completion`
    /// fires with `false`.
    pub fn show(
        &mut self,
        direction: SwipeDirection,
        animated: bool,
        completion: Option<Completion>,
        host: &mut dyn RowHost,
    ) {
        self.ensure_views(host);
        self.allow_left_to_right = self.left_layout.is_some();
        self.allow_right_to_left = self.right_layout.is_some();
        let Some(width) = self.layout_width(direction) else {
            if let Some(completion) = completion {
                completion(false);
            }
            return;
        };
        let animation = animated.then(|| self.settings(direction).show_animation);
        self.set_offset(width * direction.sign(), animation, completion, host);
    }

    /// Closes the row.
    pub fn hide(&mut self, animated: bool, completion: Option<Completion>, host: &mut dyn RowHost) {
        let animation = animated.then(|| {
            if self.offset > 0.0 {
                self.left_settings.hide_animation
            } else {
                self.right_settings.hide_animation
            }
        });
        self.set_offset(0.0, animation, completion, host);
    }

    /// Re-applies the current offset so hosts can refresh row content
    /// mid-swipe.
    ///
    /// Never changes the observable offset or state and never emits a state
    /// change notification, no matter how often it is called.
    pub fn refresh_content(&mut self, host: &mut dyn RowHost) {
        let prev = self.trigger_state_changes;
        self.trigger_state_changes = false;
        self.apply_offset(self.offset, host);
        self.trigger_state_changes = prev;
    }

    /// Rebuilds the button layouts, e.g. after buttons were added or
    /// removed.
    ///
    /// With `use_provider` the cached button descriptions are discarded and
    /// fetched again through [`RowHost::buttons_for`]; otherwise the layouts
    /// are rebuilt from the descriptions already on hand (for pure size or
    /// settings changes).
    pub fn refresh_buttons(&mut self, use_provider: bool, host: &mut dyn RowHost) {
        if use_provider {
            self.left_buttons = None;
            self.right_buttons = None;
        }
        self.left_layout = None;
        self.right_layout = None;
        self.ensure_views(host);
        self.refresh_content(host);
    }

    /// Forgets the cached button groups without rebuilding them; the next
    /// operation that needs them consults the provider again.
    pub fn invalidate_buttons(&mut self) {
        self.left_buttons = None;
        self.right_buttons = None;
        self.left_layout = None;
        self.right_layout = None;
    }

    /// Updates the row geometry (bounds, safe insets, layout direction).
    ///
    /// Safe-inset changes resize the edge buttons; when the open side's
    /// group width changes, the offset is compensated by the same delta so
    /// an open row stays fully open.
    pub fn set_geometry(&mut self, geometry: RowGeometry, host: &mut dyn RowHost) {
        self.geometry = geometry;
        if let Some(layout) = self.left_layout.as_mut() {
            let delta = layout.set_safe_inset(
                geometry.safe_insets.x0,
                self.left_settings.expand_edge_button_by_safe_inset,
            );
            if self.offset > 0.0 {
                self.offset += delta;
            }
        }
        if let Some(layout) = self.right_layout.as_mut() {
            let delta = layout.set_safe_inset(
                geometry.safe_insets.x1,
                self.right_settings.expand_edge_button_by_safe_inset,
            );
            if self.offset < 0.0 {
                self.offset -= delta;
            }
        }
        self.refresh_content(host);
    }

    /// Resets the row for reuse in a recycling list: closes it, tears down
    /// cached button groups, and restores default settings and permissions.
    pub fn prepare_for_reuse(&mut self, host: &mut dyn RowHost) {
        self.hide(false, None, host);
        self.cancel_animation();
        self.gesture_active = false;
        self.first_swipe_state = SwipeState::None;
        self.invalidate_buttons();
        self.left_settings = SwipeSettings::default();
        self.right_settings = SwipeSettings::default();
        self.allow_left_to_right = false;
        self.allow_right_to_left = false;
    }

    // Animation playback

    /// Advances the in-flight settle animation to timestamp `now` (seconds).
    ///
    /// Hosts call this once per render frame while
    /// [`is_animating`](Self::is_animating) is `true`; the return value says
    /// whether more ticks are wanted. The final frame applies exactly the
    /// target offset, re-enables state change notifications (so settling
    /// emits at most one), and then fires the completion with `true`.
    pub fn tick(&mut self, now: f64, host: &mut dyn RowHost) -> bool {
        match self.animator.tick(now) {
            Tick::Idle => false,
            Tick::Running(value) => {
                self.apply_offset(value, host);
                true
            }
            Tick::Finished { value, completion } => {
                self.trigger_state_changes = true;
                self.apply_offset(value, host);
                if let Some(completion) = completion {
                    completion(true);
                }
                false
            }
        }
    }

    // Tap handling

    /// Routes a tap at `location` (row coordinates) while the row is open.
    ///
    /// A tap on a revealed button reports its host-order index through
    /// [`RowHost::tapped_button`]; one outside the buttons consults
    /// [`RowHost::should_hide_on_tap`]. An affirmative answer from either
    /// hides the row animated.
    pub fn handle_tap(&mut self, location: Point, host: &mut dyn RowHost) {
        if !self.overlay_visible {
            return;
        }
        let hit = SwipeDirection::from_offset(self.offset).and_then(|direction| {
            let layout = self.layout(direction)?;
            let frame = layout.frame(
                self.geometry.width,
                self.geometry.height,
                self.settings(direction),
                self.geometry.rtl,
            );
            let translation = self.group_translation(direction)?;
            if location.y < frame.y0 || location.y >= frame.y1 {
                return None;
            }
            let local_x = location.x - (frame.x0 + translation);
            let slot = layout.slot_at(
                local_x,
                self.swipe_progress(direction),
                self.settings(direction).transition,
            )?;
            Some((layout.logical_index(slot), direction))
        });

        let hide = match hit {
            Some((index, direction)) => host.tapped_button(index, direction),
            None => host.should_hide_on_tap(location),
        };
        if hide {
            self.hide(true, None, host);
        }
    }

    // Geometry queries

    /// X-translation the host applies to the row content.
    ///
    /// Includes the safe-area shift; the swipe offset term is omitted when
    /// the active side is configured to move only the buttons.
    #[must_use]
    pub fn content_translation(&self) -> f64 {
        let safe_shift = if self.geometry.rtl {
            self.geometry.safe_insets.x1
        } else {
            -self.geometry.safe_insets.x0
        };
        let only_buttons = SwipeDirection::from_offset(self.offset)
            .is_some_and(|direction| self.settings(direction).only_swipe_buttons);
        safe_shift + if only_buttons { 0.0 } else { self.offset }
    }

    /// X-translation of one button group from its resting frame.
    ///
    /// Both groups follow the current offset — the inactive one clamped to
    /// its own width, so reversing direction mid-gesture stays consistent.
    /// `None` if that side has no layout or the row is closed.
    #[must_use]
    pub fn group_translation(&self, direction: SwipeDirection) -> Option<f64> {
        let layout = self.layout(direction)?;
        let sign = SwipeDirection::from_offset(self.offset)?.sign();
        let bias = self.settings(direction).offset;
        Some(self.offset.abs().min(layout.total_width()) * sign + bias * sign)
    }

    /// Resting frame of one button group within the row.
    #[must_use]
    pub fn group_frame(&self, direction: SwipeDirection) -> Option<Rect> {
        let layout = self.layout(direction)?;
        Some(layout.frame(
            self.geometry.width,
            self.geometry.height,
            self.settings(direction),
            self.geometry.rtl,
        ))
    }

    /// Swipe progress `t ∈ [0, 1]` of one side: revealed fraction of its
    /// group width.
    #[must_use]
    pub fn swipe_progress(&self, direction: SwipeDirection) -> f64 {
        match self.layout_width(direction) {
            Some(width) if width > 0.0 => (self.offset.abs() / width).min(1.0),
            _ => 0.0,
        }
    }

    /// Per-button x positions of one group, rendered for the current swipe
    /// progress under that side's transition mode.
    #[must_use]
    pub fn button_positions(&self, direction: SwipeDirection) -> Option<SlotPositions> {
        let layout = self.layout(direction)?;
        let t = self.swipe_progress(direction);
        Some(layout.slot_positions(t, self.settings(direction).transition))
    }

    // Internals

    fn cancel_animation(&mut self) {
        self.animator.cancel();
        self.trigger_state_changes = true;
    }

    fn evaluate_permissions(&mut self, location: Point, host: &mut dyn RowHost) {
        self.allow_left_to_right = host
            .can_swipe(SwipeDirection::LeftToRight, location)
            .unwrap_or(self.left_layout.is_some());
        self.allow_right_to_left = host
            .can_swipe(SwipeDirection::RightToLeft, location)
            .unwrap_or(self.right_layout.is_some());
    }

    /// Fetches button descriptions through the provider (once per
    /// invalidation) and builds the layouts for sides that have buttons.
    fn ensure_views(&mut self, host: &mut dyn RowHost) {
        if self.left_buttons.is_none() {
            let fetched = host
                .buttons_for(SwipeDirection::LeftToRight, &self.left_settings)
                .unwrap_or_default();
            self.left_buttons = Some(fetched);
        }
        if self.right_buttons.is_none() {
            let fetched = host
                .buttons_for(SwipeDirection::RightToLeft, &self.right_settings)
                .unwrap_or_default();
            self.right_buttons = Some(fetched);
        }
        if self.left_layout.is_none() {
            if let Some(buttons) = self.left_buttons.as_ref().filter(|b| !b.is_empty()) {
                self.left_layout = Some(ButtonsLayout::new(
                    buttons.clone(),
                    SwipeDirection::LeftToRight,
                    &self.left_settings,
                    self.geometry.safe_insets.x0,
                ));
            }
        }
        if self.right_layout.is_none() {
            if let Some(buttons) = self.right_buttons.as_ref().filter(|b| !b.is_empty()) {
                self.right_layout = Some(ButtonsLayout::new(
                    buttons.clone(),
                    SwipeDirection::RightToLeft,
                    &self.right_settings,
                    self.geometry.safe_insets.x1,
                ));
            }
        }
    }

    /// Enforces the two direction invariants: a row never swipes toward a
    /// side with no buttons or no permission, and a gesture that committed
    /// to one direction cannot cross to the other unless opposite swiping
    /// is allowed.
    fn filter_swipe(&self, offset: f64) -> f64 {
        let (allowed, has_buttons) = if offset > 0.0 {
            (self.allow_left_to_right, self.left_layout.is_some())
        } else {
            (self.allow_right_to_left, self.right_layout.is_some())
        };
        if offset != 0.0 && (!allowed || !has_buttons) {
            return 0.0;
        }
        if !self.allows_opposite_swipe {
            match self.first_swipe_state {
                SwipeState::SwipingLeftToRight if offset < 0.0 => return 0.0,
                SwipeState::SwipingRightToLeft if offset > 0.0 => return 0.0,
                _ => {}
            }
        }
        offset
    }

    /// Applies a raw offset: bounce/clamp policy, overlay visibility, the
    /// commit-line target, and the state transition.
    fn apply_offset(&mut self, raw_offset: f64, host: &mut dyn RowHost) {
        let side = SwipeDirection::from_offset(raw_offset);
        let width = side.and_then(|direction| self.layout_width(direction));
        let (Some(direction), Some(group_width)) = (side, width) else {
            self.offset = 0.0;
            self.target_offset = 0.0;
            self.hide_overlay(host);
            self.update_state(SwipeState::None, host);
            return;
        };

        let sign = direction.sign();
        let settings = self.settings(direction);
        let max_offset = sign * group_width;
        // Past the group width the bounce policy takes over: damped
        // over-drag when enabled, hard stop otherwise.
        self.offset = if settings.enable_bounce {
            if (raw_offset - max_offset) * sign > 0.0 {
                max_offset + (raw_offset - max_offset) * settings.bounce_rate
            } else {
                raw_offset
            }
        } else if sign > 0.0 {
            raw_offset.min(max_offset)
        } else {
            raw_offset.max(max_offset)
        };

        let settle = self
            .settings(direction)
            .settle_width(self.offset.abs(), group_width);
        self.target_offset = sign * settle;
        self.show_overlay(host);
        self.update_state(direction.into(), host);
    }

    fn show_overlay(&mut self, host: &mut dyn RowHost) {
        if !self.overlay_visible {
            self.overlay_visible = true;
            host.will_begin_swiping();
        }
    }

    fn hide_overlay(&mut self, host: &mut dyn RowHost) {
        if self.overlay_visible {
            self.overlay_visible = false;
            host.will_end_swiping();
        }
    }

    fn update_state(&mut self, new_state: SwipeState, host: &mut dyn RowHost) {
        if !self.trigger_state_changes || self.state == new_state {
            return;
        }
        self.state = new_state;
        host.state_changed(new_state, self.gesture_active);
    }
}
