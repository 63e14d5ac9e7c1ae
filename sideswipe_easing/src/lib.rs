// Copyright 2026 the Sideswipe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sideswipe Easing: Penner easing functions for swipe animations.
//!
//! Every function maps a normalized time `t ∈ [0, 1]` to an interpolated
//! value, given a start value `b` and a total change `c` (so the animated
//! value runs from `b` at `t = 0` toward `b + c` at `t = 1`). These are the
//! classic Penner equations; the bounce family uses the standard four-segment
//! piecewise parabola.
//!
//! The functions are pure and deterministic, which keeps them unit-testable
//! independent of any animation clock. The [`Easing`] enum selects one of
//! them at runtime, which is how animation settings reference an easing
//! without carrying a function pointer.
//!
//! ## Minimal example
//!
//! ```rust
//! use sideswipe_easing::Easing;
//!
//! // Interpolate from 40.0 to 100.0, halfway through.
//! let v = Easing::Linear.interpolate(0.5, 40.0, 60.0);
//! assert_eq!(v, 70.0);
//! ```
//!
//! This crate is `no_std` compatible.

#![no_std]

/// Easing function selector.
///
/// The default is [`Easing::BounceOut`], which gives swipe buttons the
/// characteristic elastic settle when they open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant-rate interpolation.
    Linear,
    /// Quadratic, accelerating from rest.
    QuadIn,
    /// Quadratic, decelerating to rest.
    QuadOut,
    /// Quadratic, accelerating then decelerating.
    QuadInOut,
    /// Cubic, accelerating from rest.
    CubicIn,
    /// Cubic, decelerating to rest.
    CubicOut,
    /// Cubic, accelerating then decelerating.
    CubicInOut,
    /// Bounce at the start of the interpolation.
    BounceIn,
    /// Bounce at the end of the interpolation.
    #[default]
    BounceOut,
    /// Bounce at both ends, spliced at the midpoint.
    BounceInOut,
}

impl Easing {
    /// Evaluates the selected easing at normalized time `t`, starting from
    /// `b` with total change `c`.
    #[must_use]
    pub fn interpolate(self, t: f64, b: f64, c: f64) -> f64 {
        match self {
            Self::Linear => linear(t, b, c),
            Self::QuadIn => quad_in(t, b, c),
            Self::QuadOut => quad_out(t, b, c),
            Self::QuadInOut => quad_in_out(t, b, c),
            Self::CubicIn => cubic_in(t, b, c),
            Self::CubicOut => cubic_out(t, b, c),
            Self::CubicInOut => cubic_in_out(t, b, c),
            Self::BounceIn => bounce_in(t, b, c),
            Self::BounceOut => bounce_out(t, b, c),
            Self::BounceInOut => bounce_in_out(t, b, c),
        }
    }
}

/// Constant-rate interpolation: `c·t + b`.
#[must_use]
pub fn linear(t: f64, b: f64, c: f64) -> f64 {
    c * t + b
}

/// Quadratic ease-in: `c·t² + b`.
#[must_use]
pub fn quad_in(t: f64, b: f64, c: f64) -> f64 {
    c * t * t + b
}

/// Quadratic ease-out: `−c·t·(t−2) + b`.
#[must_use]
pub fn quad_out(t: f64, b: f64, c: f64) -> f64 {
    -c * t * (t - 2.0) + b
}

/// Quadratic ease-in-out, spliced at `t = 0.5` with doubled time.
#[must_use]
pub fn quad_in_out(t: f64, b: f64, c: f64) -> f64 {
    let t = t * 2.0;
    if t < 1.0 {
        c / 2.0 * t * t + b
    } else {
        let t = t - 1.0;
        -c / 2.0 * (t * (t - 2.0) - 1.0) + b
    }
}

/// Cubic ease-in: `c·t³ + b`.
#[must_use]
pub fn cubic_in(t: f64, b: f64, c: f64) -> f64 {
    c * t * t * t + b
}

/// Cubic ease-out: `c·((t−1)³ + 1) + b`.
#[must_use]
pub fn cubic_out(t: f64, b: f64, c: f64) -> f64 {
    let t = t - 1.0;
    c * (t * t * t + 1.0) + b
}

/// Cubic ease-in-out, spliced at `t = 0.5` with doubled time.
#[must_use]
pub fn cubic_in_out(t: f64, b: f64, c: f64) -> f64 {
    let t = t * 2.0;
    if t < 1.0 {
        c / 2.0 * t * t * t + b
    } else {
        let t = t - 2.0;
        c / 2.0 * (t * t * t + 2.0) + b
    }
}

/// Bounce ease-out: a four-segment piecewise parabola.
///
/// Segment breakpoints sit at `1/2.75`, `2/2.75`, and `2.5/2.75`; the
/// parabola coefficient `7.5625` makes the segments join continuously with
/// decaying rebound heights. These constants must not be changed: the other
/// bounce variants and downstream animation tests rely on the exact curve.
#[must_use]
pub fn bounce_out(t: f64, b: f64, c: f64) -> f64 {
    if t < 1.0 / 2.75 {
        c * (7.5625 * t * t) + b
    } else if t < 2.0 / 2.75 {
        let t = t - 1.5 / 2.75;
        c * (7.5625 * t * t + 0.75) + b
    } else if t < 2.5 / 2.75 {
        let t = t - 2.25 / 2.75;
        c * (7.5625 * t * t + 0.9375) + b
    } else {
        let t = t - 2.625 / 2.75;
        c * (7.5625 * t * t + 0.984375) + b
    }
}

/// Bounce ease-in: the time-reversed complement of [`bounce_out`].
#[must_use]
pub fn bounce_in(t: f64, b: f64, c: f64) -> f64 {
    c - bounce_out(1.0 - t, 0.0, c) + b
}

/// Bounce ease-in-out: half-scaled [`bounce_in`] below the midpoint,
/// half-scaled [`bounce_out`] above it.
#[must_use]
pub fn bounce_in_out(t: f64, b: f64, c: f64) -> f64 {
    if t < 0.5 {
        bounce_in(t * 2.0, 0.0, c) * 0.5 + b
    } else {
        bounce_out(t * 2.0 - 1.0, 0.0, c) * 0.5 + c * 0.5 + b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 10] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::BounceIn,
        Easing::BounceOut,
        Easing::BounceInOut,
    ];

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn every_easing_starts_at_b() {
        for easing in ALL {
            let v = easing.interpolate(0.0, 12.5, 80.0);
            assert!(close(v, 12.5), "{easing:?} start: {v}");
        }
    }

    #[test]
    fn every_easing_ends_at_b_plus_c() {
        for easing in ALL {
            let v = easing.interpolate(1.0, 12.5, 80.0);
            assert!(close(v, 92.5), "{easing:?} end: {v}");
        }
    }

    #[test]
    fn linear_midpoint() {
        assert!(close(linear(0.5, 10.0, 100.0), 60.0));
    }

    #[test]
    fn quad_formulas_at_quarter_points() {
        // quad_in: c·t²
        assert!(close(quad_in(0.25, 0.0, 16.0), 1.0));
        // quad_out: −c·t·(t−2)
        assert!(close(quad_out(0.25, 0.0, 16.0), 7.0));
        // quad_in_out below the splice equals half-amplitude quad_in at 2t.
        assert!(close(quad_in_out(0.25, 0.0, 16.0), quad_in(0.5, 0.0, 8.0)));
    }

    #[test]
    fn quad_in_out_is_continuous_at_splice() {
        let below = quad_in_out(0.5 - 1e-12, 0.0, 100.0);
        let above = quad_in_out(0.5, 0.0, 100.0);
        assert!((below - above).abs() < 1e-6);
        assert!(close(above, 50.0));
    }

    #[test]
    fn cubic_formulas_at_sample_points() {
        assert!(close(cubic_in(0.5, 0.0, 8.0), 1.0));
        // cubic_out with t=0.5: c·((−0.5)³ + 1)
        assert!(close(cubic_out(0.5, 0.0, 8.0), 7.0));
        assert!(close(cubic_in_out(0.5, 0.0, 8.0), 4.0));
    }

    #[test]
    fn bounce_out_segment_boundaries() {
        // First breakpoint: 7.5625·(1/2.75)² = 1 exactly.
        assert!(close(bounce_out(1.0 / 2.75, 0.0, 1.0), 1.0));
        // Later segments rebound below the final value.
        let mid = bounce_out(1.75 / 2.75, 0.0, 1.0);
        assert!(mid < 1.0 && mid > 0.7, "rebound out of range: {mid}");
        assert!(close(bounce_out(1.0, 0.0, 1.0), 1.0));
    }

    #[test]
    fn bounce_in_mirrors_bounce_out() {
        for i in 0..=20 {
            let t = f64::from(i) / 20.0;
            let one_way = bounce_in(t, 0.0, 1.0);
            let other = 1.0 - bounce_out(1.0 - t, 0.0, 1.0);
            assert!(close(one_way, other), "mismatch at t={t}");
        }
    }

    #[test]
    fn bounce_in_out_halves_meet_at_midpoint() {
        let below = bounce_in_out(0.5 - 1e-12, 0.0, 1.0);
        let above = bounce_in_out(0.5, 0.0, 1.0);
        assert!((below - above).abs() < 1e-6);
        assert!(close(above, 0.5));
    }

    #[test]
    fn nonzero_base_offsets_every_value() {
        for easing in ALL {
            let zero_based = easing.interpolate(0.37, 0.0, 50.0);
            let shifted = easing.interpolate(0.37, 100.0, 50.0);
            assert!(close(shifted - zero_based, 100.0), "{easing:?}");
        }
    }

    #[test]
    fn negative_change_runs_toward_smaller_values() {
        for easing in ALL {
            let v = easing.interpolate(1.0, 80.0, -80.0);
            assert!(close(v, 0.0), "{easing:?}: {v}");
        }
    }

    #[test]
    fn default_is_bounce_out() {
        assert_eq!(Easing::default(), Easing::BounceOut);
    }
}
