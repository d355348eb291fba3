// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported when validating host-supplied layout and configuration.

use core::fmt;

/// Which host-supplied size failed validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LayoutKind {
    /// The viewport the content is displayed in.
    Viewport,
    /// The intrinsic size of the displayed content.
    Content,
}

/// Error returned when a viewport or content size is not strictly positive and finite.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutError {
    /// Which size was rejected.
    pub kind: LayoutKind,
    /// The rejected width.
    pub width: f64,
    /// The rejected height.
    pub height: f64,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            LayoutKind::Viewport => "viewport",
            LayoutKind::Content => "content",
        };
        write!(
            f,
            "{what} size {}x{} must be finite and positive",
            self.width, self.height
        )
    }
}

impl core::error::Error for LayoutError {}

/// Error returned by [`crate::GestureConfig::validate`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The transition duration is not finite and positive.
    AnimationDuration(f64),
    /// The max scale multiplier is below `1.0` or not finite.
    MaxScaleMultiplier(f64),
    /// The snap-back tolerance is negative or not finite.
    SnapTolerance(f64),
    /// The fling duration coefficient is not finite and positive.
    FlingDurationCoefficient(f64),
    /// The fling deceleration exponent is not finite or not above `1.0`.
    FlingDecelerationExponent(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AnimationDuration(v) => {
                write!(f, "animation duration {v} ms must be finite and positive")
            }
            Self::MaxScaleMultiplier(v) => {
                write!(f, "max scale multiplier {v} must be finite and at least 1")
            }
            Self::SnapTolerance(v) => {
                write!(f, "snap tolerance {v} must be finite and non-negative")
            }
            Self::FlingDurationCoefficient(v) => {
                write!(f, "fling duration coefficient {v} must be finite and positive")
            }
            Self::FlingDecelerationExponent(v) => {
                write!(f, "fling deceleration exponent {v} must be finite and above 1")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
