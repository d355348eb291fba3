// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic fling deceleration.
//!
//! The curve follows `x(p) = s + (e - s) * (1 - (1 - p)^d)` for progress
//! `p ∈ [0, 1]`, where `d` is the deceleration exponent. Its velocity is
//! `v(p) = d * (e - s) * (1 - p)^(d - 1) / T`, so the initial velocity `v0`
//! fixes the travel `e - s = v0 * T / d`, and the motion ends with zero
//! velocity. The duration grows with speed as
//! `T = coefficient * |v0|^(1 / (d - 1))` milliseconds.

use kurbo::{Point, Rect, Vec2};

use crate::animator::Animator;
use crate::config::FlingParams;
use crate::transform::ZoomTransform;

/// Lifecycle of a [`FlingSimulator`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum FlingPhase {
    /// No fling has been started.
    #[default]
    Idle,
    /// A curve is available and has not been ticked to completion.
    Running,
    /// The curve was ticked to its end.
    Finished,
}

/// Per-axis decelerating motion from a start position toward a clamped rest
/// position.
///
/// Both axes share one duration and one easing, derived from the overall
/// speed. If the unclamped rest position falls outside `bounds` the travel on
/// that axis is shortened so the curve arrives at the bound with zero
/// velocity instead of overshooting it.
#[derive(Clone, Debug, PartialEq)]
pub struct FlingSimulator {
    params: FlingParams,
    phase: FlingPhase,
    start: Point,
    rest: Point,
    duration_ms: f64,
}

impl FlingSimulator {
    /// Creates an idle simulator using `params`.
    #[must_use]
    pub fn new(params: FlingParams) -> Self {
        Self {
            params,
            phase: FlingPhase::Idle,
            start: Point::ORIGIN,
            rest: Point::ORIGIN,
            duration_ms: 0.0,
        }
    }

    /// Starts a fling from `start` with `velocity` (pixels per second),
    /// clamped to `bounds` (`x0..=x1` horizontally, `y0..=y1` vertically).
    pub fn fling(&mut self, start: Point, velocity: Vec2, bounds: Rect) {
        let bounds = bounds.abs();
        let speed = libm::hypot(velocity.x, velocity.y);
        let d = self.params.deceleration_exponent;

        let (duration_ms, travel) = if speed > 0.0 && speed.is_finite() {
            let duration = self.params.duration_coefficient * libm::pow(speed, 1.0 / (d - 1.0));
            let distance = speed * duration / d / 1000.0;
            (duration, velocity * (distance / speed))
        } else {
            (0.0, Vec2::ZERO)
        };

        let target = start + travel;
        self.start = start;
        self.rest = Point::new(
            target.x.clamp(bounds.x0, bounds.x1),
            target.y.clamp(bounds.y0, bounds.y1),
        );
        self.duration_ms = duration_ms;
        self.phase = FlingPhase::Running;
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> FlingPhase {
        self.phase
    }

    /// Duration of the current curve in milliseconds; zero when idle or when
    /// the fling had no speed.
    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Start position of the current curve.
    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Position the curve comes to rest at.
    #[must_use]
    pub fn rest_position(&self) -> Point {
        self.rest
    }

    /// Position at `fraction` of the duration.
    ///
    /// `fraction` is clamped into `[0, 1]`; at `1` and beyond this returns
    /// [`FlingSimulator::rest_position`] exactly.
    #[must_use]
    pub fn position_at(&self, fraction: f64) -> Point {
        let p = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        if p >= 1.0 {
            return self.rest;
        }
        let eased = 1.0 - libm::pow(1.0 - p, self.params.deceleration_exponent);
        self.start.lerp(self.rest, eased)
    }
}

impl Default for FlingSimulator {
    fn default() -> Self {
        Self::new(FlingParams::default())
    }
}

impl Animator for FlingSimulator {
    fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    fn tick(&mut self, transform: &mut ZoomTransform, fraction: f64) -> bool {
        let pos = self.position_at(fraction);
        transform.translate(pos.to_vec2() - transform.translation());
        if fraction >= 1.0 {
            self.phase = FlingPhase::Finished;
            false
        } else {
            true
        }
    }
}
