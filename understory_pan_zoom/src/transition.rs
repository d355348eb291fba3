// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::animator::Animator;
use crate::transform::{TransformState, ZoomTransform};

/// Linear interpolation between two transform states.
///
/// Scale and translation are interpolated independently. Each tick composes a
/// corrective scale and translation onto the live transform rather than
/// assigning it, and the final tick assigns the exact target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    from: TransformState,
    to: TransformState,
    duration_ms: f64,
}

impl Transition {
    /// Creates a transition from `from` to `to` lasting `duration_ms`.
    #[must_use]
    pub fn new(from: TransformState, to: TransformState, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
        }
    }

    /// Initial state.
    #[must_use]
    pub fn initial(&self) -> TransformState {
        self.from
    }

    /// Target state.
    #[must_use]
    pub fn target(&self) -> TransformState {
        self.to
    }

    /// Duration in milliseconds.
    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Interpolated state at `t`; `t >= 1` yields the target exactly.
    #[must_use]
    pub fn state_at(&self, t: f64) -> TransformState {
        if t >= 1.0 {
            return self.to;
        }
        TransformState {
            scale: self.from.scale + t * (self.to.scale - self.from.scale),
            translation: self.from.translation
                + (self.to.translation - self.from.translation) * t,
        }
    }
}

impl Animator for Transition {
    fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    fn tick(&mut self, transform: &mut ZoomTransform, fraction: f64) -> bool {
        if fraction >= 1.0 {
            transform.reset(self.to);
            return false;
        }
        let wanted = self.state_at(fraction);
        transform.scale_about(wanted.scale / transform.scale(), Point::ORIGIN);
        transform.translate(wanted.translation - transform.translation());
        true
    }
}
