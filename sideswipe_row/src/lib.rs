// Copyright 2026 the Sideswipe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sideswipe Row: a swipe-offset state machine for list rows.
//!
//! This crate is the heart of Sideswipe. [`SwipeRow`] tracks one row's swipe
//! offset, swipe state, per-side button groups, and the in-flight settle
//! animation. It knows nothing about views, render trees, or input devices:
//! the host feeds it gesture events (`should_begin` / `begin` / `update` /
//! `end`) and render-clock ticks, and reads back plain numbers — content and
//! button-group translations — to draw with.
//!
//! The host side of the contract is the [`RowHost`] trait: it supplies the
//! button descriptions for each side, answers permission and tap questions,
//! and observes lifecycle notifications (overlay shown/hidden, state
//! changed). All methods but the button provider have permissive defaults,
//! so a minimal host is one method long.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use sideswipe_row::{
//!     RowGeometry, RowHost, SwipeButton, SwipeDirection, SwipeRow, SwipeSettings, SwipeState,
//! };
//!
//! // A mail-style row: two 72-wide buttons on the right, nothing on the left.
//! struct MailRow;
//!
//! impl RowHost for MailRow {
//!     fn buttons_for(
//!         &mut self,
//!         direction: SwipeDirection,
//!         _settings: &SwipeSettings,
//!     ) -> Option<Vec<SwipeButton>> {
//!         match direction {
//!             SwipeDirection::RightToLeft => {
//!                 Some(vec![SwipeButton::new(72.0, 44.0), SwipeButton::new(72.0, 44.0)])
//!             }
//!             SwipeDirection::LeftToRight => None,
//!         }
//!     }
//! }
//!
//! let mut host = MailRow;
//! let mut row = SwipeRow::new(RowGeometry::new(375.0, 44.0));
//!
//! // A mostly-horizontal leftward drag is admitted (the right side has
//! // buttons); a rightward one would not be.
//! assert!(row.should_begin_gesture(Vec2::new(-8.0, 1.0), Point::ZERO, &mut host));
//! assert!(!row.should_begin_gesture(Vec2::new(8.0, 1.0), Point::ZERO, &mut host));
//!
//! // Drag 90 units left: past the 50% threshold of the 144-wide group, so
//! // the commit line is the fully open position.
//! row.begin_gesture(Point::ZERO, &mut host);
//! row.update_gesture(-90.0, &mut host);
//! assert_eq!(row.offset(), -90.0);
//! assert_eq!(row.state(), SwipeState::SwipingRightToLeft);
//! assert_eq!(row.target_offset(), -144.0);
//!
//! // Release, then pump the render clock until the settle animation is done.
//! row.end_gesture(0.0, &mut host);
//! let mut now = 0.0;
//! while row.tick(now, &mut host) {
//!     now += 1.0 / 60.0;
//! }
//! assert_eq!(row.offset(), -144.0);
//! assert_eq!(row.content_translation(), -144.0);
//! ```
//!
//! ## Driving the animation
//!
//! [`SwipeRow`] has no clock of its own. Whenever
//! [`is_animating`](SwipeRow::is_animating) is `true`, the host delivers one
//! [`tick`](SwipeRow::tick) per render frame with its monotonic timestamp in
//! seconds; `tick` returns whether more frames are wanted. Animation start
//! time latches on the first tick, so frame pacing — 60 Hz, 120 Hz, or a test
//! loop stepping virtual time — is entirely the host's business.
//!
//! ## Coordinates
//!
//! Offsets and translations are horizontal distances in the row's own
//! coordinate space, x growing rightward. A positive offset reveals the left
//! button group, negative the right one. Right-to-left layouts only affect
//! safe-inset resolution and group frames ([`RowGeometry::rtl`]); the offset
//! convention itself does not flip.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod host;
mod row;

pub use host::{RowGeometry, RowHost};
pub use row::{SwipeRow, SwipeState};

pub use sideswipe_animation::{Completion, SwipeAnimation};
pub use sideswipe_buttons::{ButtonsLayout, SlotPositions, SwipeButton};
pub use sideswipe_easing::Easing;
pub use sideswipe_settings::{SwipeDirection, SwipeSettings, SwipeTransition};
