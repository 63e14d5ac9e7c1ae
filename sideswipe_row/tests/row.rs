// Copyright 2026 the Sideswipe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `sideswipe_row` crate.
//!
//! These drive full gesture and animation scenarios against a recording
//! host: drag/release around the threshold, inertia flicks, programmatic
//! show/hide with completions, tap routing, and the reuse lifecycle.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Vec2};
use sideswipe_row::{
    Completion, Easing, RowGeometry, RowHost, SwipeAnimation, SwipeButton, SwipeDirection,
    SwipeRow, SwipeSettings, SwipeState, SwipeTransition,
};

/// Host that records every notification the row emits.
#[derive(Default)]
struct TestHost {
    left: Vec<SwipeButton>,
    right: Vec<SwipeButton>,
    provider_calls: usize,
    overlay_begins: usize,
    overlay_ends: usize,
    states: Vec<(SwipeState, bool)>,
    taps: Vec<(usize, SwipeDirection)>,
    background_taps: usize,
    siblings_closed: usize,
    hide_after_tap: bool,
}

impl TestHost {
    fn with_buttons(left: &[f64], right: &[f64]) -> Self {
        let button = |w: &f64| SwipeButton::new(*w, 44.0);
        Self {
            left: left.iter().map(button).collect(),
            right: right.iter().map(button).collect(),
            hide_after_tap: true,
            ..Self::default()
        }
    }
}

impl RowHost for TestHost {
    fn buttons_for(
        &mut self,
        direction: SwipeDirection,
        _settings: &SwipeSettings,
    ) -> Option<Vec<SwipeButton>> {
        self.provider_calls += 1;
        match direction {
            SwipeDirection::LeftToRight => Some(self.left.clone()),
            SwipeDirection::RightToLeft => Some(self.right.clone()),
        }
    }

    fn will_begin_swiping(&mut self) {
        self.overlay_begins += 1;
    }

    fn will_end_swiping(&mut self) {
        self.overlay_ends += 1;
    }

    fn state_changed(&mut self, state: SwipeState, gesture_active: bool) {
        self.states.push((state, gesture_active));
    }

    fn tapped_button(&mut self, index: usize, direction: SwipeDirection) -> bool {
        self.taps.push((index, direction));
        self.hide_after_tap
    }

    fn should_hide_on_tap(&mut self, _location: Point) -> bool {
        self.background_taps += 1;
        true
    }

    fn close_sibling_rows(&mut self) {
        self.siblings_closed += 1;
    }
}

fn geometry() -> RowGeometry {
    RowGeometry::new(375.0, 44.0)
}

/// Pumps the render clock until the row stops asking for frames.
fn settle(row: &mut SwipeRow, host: &mut TestHost) {
    let mut now = 0.0;
    while row.tick(now, host) {
        now += 1.0 / 60.0;
        assert!(now < 10.0, "animation never finished");
    }
}

fn drag(row: &mut SwipeRow, host: &mut TestHost, delta: f64) {
    row.begin_gesture(Point::ZERO, host);
    row.update_gesture(delta, host);
}

fn recorder() -> (Rc<RefCell<Vec<bool>>>, Completion) {
    let record = Rc::new(RefCell::new(Vec::new()));
    let sink = record.clone();
    (record, Box::new(move |finished| sink.borrow_mut().push(finished)))
}

#[test]
fn release_below_threshold_animates_closed() {
    let mut host = TestHost::with_buttons(&[50.0, 50.0], &[]);
    let mut row = SwipeRow::new(geometry());

    drag(&mut row, &mut host, 30.0);
    assert_eq!(row.offset(), 30.0);
    assert_eq!(row.target_offset(), 0.0);

    row.end_gesture(0.0, &mut host);
    assert!(row.is_animating());
    settle(&mut row, &mut host);

    assert_eq!(row.offset(), 0.0);
    assert_eq!(row.state(), SwipeState::None);
    // One transition out, one back, and nothing from interim frames.
    assert_eq!(
        host.states,
        vec![
            (SwipeState::SwipingLeftToRight, true),
            (SwipeState::None, false),
        ]
    );
}

#[test]
fn release_past_threshold_settles_open() {
    let mut host = TestHost::with_buttons(&[50.0, 50.0], &[]);
    let mut row = SwipeRow::new(geometry());

    drag(&mut row, &mut host, 60.0);
    assert_eq!(row.target_offset(), 100.0);

    row.end_gesture(0.0, &mut host);
    settle(&mut row, &mut host);

    assert_eq!(row.offset(), 100.0);
    assert_eq!(row.state(), SwipeState::SwipingLeftToRight);
    assert_eq!(row.content_translation(), 100.0);
}

#[test]
fn flick_opens_from_below_threshold() {
    let mut host = TestHost::with_buttons(&[50.0, 50.0], &[]);
    let mut row = SwipeRow::new(geometry());

    drag(&mut row, &mut host, 30.0);
    row.end_gesture(250.0, &mut host);
    settle(&mut row, &mut host);
    assert_eq!(row.offset(), 100.0);
}

#[test]
fn flick_toward_center_closes_past_threshold() {
    let mut host = TestHost::with_buttons(&[50.0, 50.0], &[]);
    let mut row = SwipeRow::new(geometry());

    drag(&mut row, &mut host, 80.0);
    row.end_gesture(-250.0, &mut host);
    settle(&mut row, &mut host);
    assert_eq!(row.offset(), 0.0);
}

#[test]
fn slow_release_is_not_a_flick() {
    let mut host = TestHost::with_buttons(&[50.0, 50.0], &[]);
    let mut row = SwipeRow::new(geometry());

    drag(&mut row, &mut host, 30.0);
    row.end_gesture(SwipeRow::INERTIA_THRESHOLD, &mut host);
    settle(&mut row, &mut host);
    assert_eq!(row.offset(), 0.0);
}

#[test]
fn without_keep_buttons_the_row_always_closes() {
    let mut host = TestHost::with_buttons(&[50.0, 50.0], &[]);
    let mut row = SwipeRow::new(geometry());
    row.left_settings.keep_buttons_swiped = false;

    drag(&mut row, &mut host, 95.0);
    row.end_gesture(300.0, &mut host);
    settle(&mut row, &mut host);
    assert_eq!(row.offset(), 0.0);
}

#[test]
fn end_gesture_picks_the_matching_settle_animation() {
    // Distinct durations make the selection observable through the number
    // of render frames each settle needs at a fixed 0.05 s step.
    fn frames_for(delta: f64) -> (usize, f64) {
        let mut host = TestHost::with_buttons(&[50.0, 50.0], &[]);
        let mut row = SwipeRow::new(geometry());
        row.left_settings.hide_animation = SwipeAnimation::new(0.1, Easing::Linear);
        row.left_settings.show_animation = SwipeAnimation::new(0.2, Easing::Linear);
        row.left_settings.stretch_animation = SwipeAnimation::new(0.4, Easing::Linear);

        drag(&mut row, &mut host, delta);
        row.end_gesture(0.0, &mut host);
        let mut frames = 1;
        let mut now = 0.0;
        while row.tick(now, &mut host) {
            frames += 1;
            // Derive each timestamp by multiplication: accumulating `+= 0.05`
            // drifts (8 additions give 0.39999999999999997, one frame short of
            // the 0.4 s spec), while `8.0 * 0.05` is exactly the f64 of 0.4.
            now = (frames - 1) as f64 * 0.05;
            assert!(now < 10.0, "animation never finished");
        }
        (frames, row.offset())
    }

    // Below threshold: the hide animation (0.1 s) drives the settle.
    assert_eq!(frames_for(30.0), (3, 0.0));
    // Between threshold and group width: the show animation (0.2 s).
    assert_eq!(frames_for(60.0), (5, 100.0));
    // Released past the group width: the stretch animation (0.4 s).
    assert_eq!(frames_for(140.0), (9, 100.0));
}

#[test]
fn overdrag_pulls_back_to_the_group_width() {
    let mut host = TestHost::with_buttons(&[], &[72.0, 72.0]);
    let mut row = SwipeRow::new(geometry());

    drag(&mut row, &mut host, -200.0);
    // Full bounce rate: tracks the finger past the 144 group width.
    assert_eq!(row.offset(), -200.0);
    assert_eq!(row.target_offset(), -144.0);

    row.end_gesture(0.0, &mut host);
    settle(&mut row, &mut host);
    assert_eq!(row.offset(), -144.0);
}

#[test]
fn gesture_admission_rejects_vertical_and_buttonless_sides() {
    let mut host = TestHost::with_buttons(&[], &[72.0]);
    let mut row = SwipeRow::new(geometry());

    assert!(!row.should_begin_gesture(Vec2::new(3.0, -9.0), Point::ZERO, &mut host));
    assert!(!row.should_begin_gesture(Vec2::new(9.0, 3.0), Point::ZERO, &mut host));
    assert!(row.should_begin_gesture(Vec2::new(-9.0, 3.0), Point::ZERO, &mut host));
}

#[test]
fn open_row_admits_any_horizontal_drag() {
    let mut host = TestHost::with_buttons(&[], &[72.0]);
    let mut row = SwipeRow::new(geometry());
    row.show(SwipeDirection::RightToLeft, false, None, &mut host);

    // A rightward drag is how an open right side closes.
    assert!(row.should_begin_gesture(Vec2::new(9.0, 0.0), Point::ZERO, &mut host));
}

#[test]
fn show_and_hide_without_animation_complete_synchronously() {
    let mut host = TestHost::with_buttons(&[60.0], &[]);
    let mut row = SwipeRow::new(geometry());

    let (record, completion) = recorder();
    row.show(SwipeDirection::LeftToRight, false, Some(completion), &mut host);
    assert_eq!(row.offset(), 60.0);
    assert_eq!(*record.borrow(), vec![true]);

    let (record, completion) = recorder();
    row.hide(false, Some(completion), &mut host);
    assert_eq!(row.offset(), 0.0);
    assert_eq!(*record.borrow(), vec![true]);
}

#[test]
fn show_on_a_buttonless_side_reports_failure() {
    let mut host = TestHost::with_buttons(&[60.0], &[]);
    let mut row = SwipeRow::new(geometry());

    let (record, completion) = recorder();
    row.show(SwipeDirection::RightToLeft, true, Some(completion), &mut host);
    assert_eq!(row.offset(), 0.0);
    assert!(!row.is_animating());
    assert_eq!(*record.borrow(), vec![false]);
}

#[test]
fn superseding_an_animation_cancels_its_completion() {
    let mut host = TestHost::with_buttons(&[60.0], &[]);
    let mut row = SwipeRow::new(geometry());

    let (first, completion) = recorder();
    row.show(SwipeDirection::LeftToRight, true, Some(completion), &mut host);
    assert!(row.is_animating());

    let (second, completion) = recorder();
    row.hide(true, Some(completion), &mut host);
    // The superseded show reported failure immediately.
    assert_eq!(*first.borrow(), vec![false]);

    settle(&mut row, &mut host);
    assert_eq!(row.offset(), 0.0);
    assert_eq!(*second.borrow(), vec![true]);
}

#[test]
fn beginning_a_gesture_interrupts_the_settle_animation() {
    let mut host = TestHost::with_buttons(&[60.0], &[]);
    let mut row = SwipeRow::new(geometry());

    let (record, completion) = recorder();
    row.show(SwipeDirection::LeftToRight, true, Some(completion), &mut host);
    row.tick(0.0, &mut host);
    row.tick(0.1, &mut host);
    let mid_flight = row.offset();
    assert!(mid_flight > 0.0);

    row.begin_gesture(Point::ZERO, &mut host);
    assert!(!row.is_animating());
    assert_eq!(*record.borrow(), vec![false]);
    // The gesture continues from wherever the animation stopped.
    row.update_gesture(5.0, &mut host);
    assert_eq!(row.offset(), mid_flight + 5.0);
}

#[test]
fn completion_fires_after_the_final_offset_is_applied() {
    let mut host = TestHost::with_buttons(&[60.0], &[]);
    let mut row = SwipeRow::new(geometry());

    let observed = Rc::new(RefCell::new(Vec::new()));
    row.show(SwipeDirection::LeftToRight, false, None, &mut host);
    // Observe the settle through state notifications: by the time the
    // completion runs, the row must already report the final state.
    let sink = observed.clone();
    row.hide(true, Some(Box::new(move |finished| sink.borrow_mut().push(finished))), &mut host);
    settle(&mut row, &mut host);
    assert_eq!(row.offset(), 0.0);
    assert_eq!(row.state(), SwipeState::None);
    assert_eq!(*observed.borrow(), vec![true]);
}

#[test]
fn overlay_notifications_fire_on_edges_only() {
    let mut host = TestHost::with_buttons(&[50.0], &[]);
    let mut row = SwipeRow::new(geometry());

    drag(&mut row, &mut host, 10.0);
    row.update_gesture(22.0, &mut host);
    assert_eq!(host.overlay_begins, 1);
    assert!(row.is_overlay_visible());

    row.end_gesture(0.0, &mut host);
    settle(&mut row, &mut host);
    assert_eq!(host.overlay_ends, 1);
    assert!(!row.is_overlay_visible());
}

#[test]
fn buttons_are_fetched_once_until_invalidated() {
    let mut host = TestHost::with_buttons(&[50.0], &[40.0]);
    let mut row = SwipeRow::new(geometry());

    drag(&mut row, &mut host, 20.0);
    row.end_gesture(0.0, &mut host);
    settle(&mut row, &mut host);
    drag(&mut row, &mut host, 20.0);
    row.end_gesture(0.0, &mut host);
    settle(&mut row, &mut host);
    // One call per side, despite two full gestures.
    assert_eq!(host.provider_calls, 2);

    row.invalidate_buttons();
    drag(&mut row, &mut host, 20.0);
    assert_eq!(host.provider_calls, 4);
}

#[test]
fn refresh_buttons_picks_up_provider_changes() {
    let mut host = TestHost::with_buttons(&[50.0], &[]);
    let mut row = SwipeRow::new(geometry());
    row.show(SwipeDirection::LeftToRight, false, None, &mut host);
    assert_eq!(row.offset(), 50.0);

    host.left = vec![SwipeButton::new(50.0, 44.0), SwipeButton::new(30.0, 44.0)];
    row.refresh_buttons(true, &mut host);
    // Uniform-width mode sizes both slots to the widest button.
    let layout = row.layout(SwipeDirection::LeftToRight).unwrap();
    assert_eq!(layout.total_width(), 100.0);
}

#[test]
fn refresh_content_is_idempotent_and_silent() {
    let mut host = TestHost::with_buttons(&[50.0], &[]);
    let mut row = SwipeRow::new(geometry());
    drag(&mut row, &mut host, 40.0);
    let states_before = host.states.len();

    row.refresh_content(&mut host);
    row.refresh_content(&mut host);
    assert_eq!(row.offset(), 40.0);
    assert_eq!(row.state(), SwipeState::SwipingLeftToRight);
    assert_eq!(host.states.len(), states_before);
    assert_eq!(host.overlay_begins, 1);
    assert_eq!(host.overlay_ends, 0);
}

#[test]
fn beginning_a_gesture_closes_siblings_unless_multiple_allowed() {
    let mut host = TestHost::with_buttons(&[50.0], &[]);
    let mut row = SwipeRow::new(geometry());

    row.begin_gesture(Point::ZERO, &mut host);
    assert_eq!(host.siblings_closed, 1);
    row.end_gesture(0.0, &mut host);

    row.allows_multiple_swipe = true;
    row.begin_gesture(Point::ZERO, &mut host);
    assert_eq!(host.siblings_closed, 1);
}

#[test]
fn cancel_gesture_closes_an_open_row() {
    let mut host = TestHost::with_buttons(&[50.0], &[]);
    let mut row = SwipeRow::new(geometry());
    drag(&mut row, &mut host, 40.0);

    row.cancel_gesture(&mut host);
    assert!(!row.is_gesture_active());
    assert!(row.is_animating());
    settle(&mut row, &mut host);
    assert_eq!(row.offset(), 0.0);
}

#[test]
fn tap_on_a_button_reports_its_host_order_index() {
    let mut host = TestHost::with_buttons(&[], &[72.0, 72.0]);
    let mut row = SwipeRow::new(geometry());
    row.show(SwipeDirection::RightToLeft, false, None, &mut host);
    assert_eq!(row.offset(), -144.0);

    // Revealed group occupies x in [231, 375): host-order button 1 is the
    // inner slot, button 0 sits at the row edge.
    row.handle_tap(Point::new(240.0, 22.0), &mut host);
    assert_eq!(host.taps, vec![(1, SwipeDirection::RightToLeft)]);
    assert!(row.is_animating());
    settle(&mut row, &mut host);

    row.show(SwipeDirection::RightToLeft, false, None, &mut host);
    row.handle_tap(Point::new(320.0, 22.0), &mut host);
    assert_eq!(host.taps.last(), Some(&(0, SwipeDirection::RightToLeft)));
}

#[test]
fn mid_transition_tap_hits_the_button_where_it_is_drawn() {
    let mut host = TestHost::with_buttons(&[40.0, 40.0], &[]);
    let mut row = SwipeRow::new(geometry());
    row.left_settings.transition = SwipeTransition::Static;
    drag(&mut row, &mut host, 40.0);

    // Half revealed, the group slides as one block, so only the first
    // button is on screen, covering x in [0, 40). Its resting window would
    // put the second button there instead.
    row.handle_tap(Point::new(10.0, 22.0), &mut host);
    assert_eq!(host.taps, vec![(0, SwipeDirection::LeftToRight)]);
}

#[test]
fn tap_outside_the_buttons_asks_the_host_and_hides() {
    let mut host = TestHost::with_buttons(&[], &[72.0]);
    let mut row = SwipeRow::new(geometry());
    row.show(SwipeDirection::RightToLeft, false, None, &mut host);

    row.handle_tap(Point::new(100.0, 22.0), &mut host);
    assert_eq!(host.background_taps, 1);
    assert!(host.taps.is_empty());
    assert!(row.is_animating());
}

#[test]
fn tap_keeps_the_row_open_when_the_host_says_so() {
    let mut host = TestHost::with_buttons(&[], &[72.0]);
    host.hide_after_tap = false;
    let mut row = SwipeRow::new(geometry());
    row.show(SwipeDirection::RightToLeft, false, None, &mut host);

    row.handle_tap(Point::new(340.0, 22.0), &mut host);
    assert_eq!(host.taps.len(), 1);
    assert!(!row.is_animating());
    assert_eq!(row.offset(), -72.0);
}

#[test]
fn taps_are_ignored_while_closed() {
    let mut host = TestHost::with_buttons(&[], &[72.0]);
    let mut row = SwipeRow::new(geometry());
    row.handle_tap(Point::new(340.0, 22.0), &mut host);
    assert!(host.taps.is_empty());
    assert_eq!(host.background_taps, 0);
}

#[test]
fn safe_inset_growth_keeps_an_open_row_fully_open() {
    let mut host = TestHost::with_buttons(&[], &[72.0, 72.0]);
    let mut row = SwipeRow::new(geometry());
    row.show(SwipeDirection::RightToLeft, false, None, &mut host);
    assert_eq!(row.offset(), -144.0);

    let mut geometry = row.geometry();
    geometry.safe_insets.x1 = 20.0;
    row.set_geometry(geometry, &mut host);

    let layout = row.layout(SwipeDirection::RightToLeft).unwrap();
    assert_eq!(layout.total_width(), 164.0);
    assert_eq!(row.offset(), -164.0);
}

#[test]
fn content_translation_accounts_for_safe_insets_and_pinned_content() {
    let mut host = TestHost::with_buttons(&[], &[72.0]);
    let mut geometry = geometry();
    geometry.safe_insets.x0 = 16.0;
    let mut row = SwipeRow::new(geometry);
    assert_eq!(row.content_translation(), -16.0);

    row.show(SwipeDirection::RightToLeft, false, None, &mut host);
    assert_eq!(row.content_translation(), -16.0 - 72.0);

    row.right_settings.only_swipe_buttons = true;
    assert_eq!(row.content_translation(), -16.0);
}

#[test]
fn group_translation_clamps_the_inactive_side() {
    let mut host = TestHost::with_buttons(&[40.0], &[72.0, 72.0]);
    let mut row = SwipeRow::new(geometry());
    drag(&mut row, &mut host, -100.0);

    assert_eq!(row.group_translation(SwipeDirection::RightToLeft), Some(-100.0));
    // The left group follows too, clamped to its own 40 width.
    assert_eq!(row.group_translation(SwipeDirection::LeftToRight), Some(-40.0));
}

#[test]
fn prepare_for_reuse_resets_everything() {
    let mut host = TestHost::with_buttons(&[50.0], &[]);
    let mut row = SwipeRow::new(geometry());
    row.left_settings.threshold = 0.9;
    row.show(SwipeDirection::LeftToRight, false, None, &mut host);
    let calls_before = host.provider_calls;

    row.prepare_for_reuse(&mut host);
    assert_eq!(row.offset(), 0.0);
    assert_eq!(row.state(), SwipeState::None);
    assert!(!row.is_overlay_visible());
    assert_eq!(row.left_settings.threshold, 0.5);
    assert_eq!(row.layout(SwipeDirection::LeftToRight), None);

    // The next gesture consults the provider again.
    drag(&mut row, &mut host, 20.0);
    assert_eq!(host.provider_calls, calls_before + 2);
}
