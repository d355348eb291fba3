// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-driven animation of a [`ZoomTransform`].
//!
//! Animators hold no timers. The host owns the frame clock, converts its
//! timestamps into an elapsed fraction (for example with [`AnimationClock`])
//! and calls [`Animator::tick`] once per frame until it returns `false`.

use crate::fling::FlingSimulator;
use crate::transform::ZoomTransform;
use crate::transition::Transition;

/// A time-parameterized mutation of a [`ZoomTransform`].
pub trait Animator {
    /// Total duration in milliseconds.
    fn duration_ms(&self) -> f64;

    /// Applies the animation at `fraction` of its duration to `transform`.
    ///
    /// Returns `true` while the animation continues; `fraction >= 1` applies
    /// the final state and returns `false`.
    fn tick(&mut self, transform: &mut ZoomTransform, fraction: f64) -> bool;
}

/// Which kind of animation is running.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AnimationKind {
    /// Decelerating translation after a fling.
    Fling,
    /// Interpolation toward a target state (snap-back or double-tap zoom).
    Transition,
}

/// The single in-flight animation of a controller.
#[derive(Clone, Debug, PartialEq)]
pub enum AnimationJob {
    /// A fling.
    Fling(FlingSimulator),
    /// A transition.
    Transition(Transition),
}

impl AnimationJob {
    /// Kind of this job.
    #[must_use]
    pub fn kind(&self) -> AnimationKind {
        match self {
            Self::Fling(_) => AnimationKind::Fling,
            Self::Transition(_) => AnimationKind::Transition,
        }
    }
}

impl Animator for AnimationJob {
    fn duration_ms(&self) -> f64 {
        match self {
            Self::Fling(f) => f.duration_ms(),
            Self::Transition(t) => t.duration_ms(),
        }
    }

    fn tick(&mut self, transform: &mut ZoomTransform, fraction: f64) -> bool {
        match self {
            Self::Fling(f) => f.tick(transform, fraction),
            Self::Transition(t) => t.tick(transform, fraction),
        }
    }
}

/// Converts host timestamps into elapsed fractions for one animation.
///
/// Timestamps are in milliseconds on any monotonic host clock.
///
/// ```rust
/// use understory_pan_zoom::AnimationClock;
///
/// let clock = AnimationClock::new(1_000.0, 200.0);
/// assert_eq!(clock.fraction_at(1_050.0), 0.25);
/// assert_eq!(clock.fraction_at(5_000.0), 1.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AnimationClock {
    start_ms: f64,
    duration_ms: f64,
}

impl AnimationClock {
    /// Starts a clock at `start_ms` for an animation lasting `duration_ms`.
    #[must_use]
    pub fn new(start_ms: f64, duration_ms: f64) -> Self {
        Self {
            start_ms,
            duration_ms,
        }
    }

    /// Elapsed fraction at `now_ms`, clamped to `[0, 1]`.
    ///
    /// Zero-length animations are complete immediately.
    #[must_use]
    pub fn fraction_at(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Returns `true` once `now_ms` is at or past the end.
    #[must_use]
    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.fraction_at(now_ms) >= 1.0
    }
}
