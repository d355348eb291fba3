// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::error::ConfigError;

/// Shape of the fling deceleration curve.
///
/// See [`crate::FlingSimulator`] for how these enter the curve.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlingParams {
    /// Duration in milliseconds of a fling at 1 px/s; scales with
    /// `speed^(1 / (exponent - 1))`.
    pub duration_coefficient: f64,
    /// Exponent `d` of the easing `1 - (1 - p)^d`. Must be above `1`.
    pub deceleration_exponent: f64,
}

impl Default for FlingParams {
    fn default() -> Self {
        Self {
            duration_coefficient: 50.0,
            deceleration_exponent: 4.0,
        }
    }
}

/// Tunables for a [`crate::GestureController`].
///
/// ```rust
/// use understory_pan_zoom::GestureConfig;
///
/// let config = GestureConfig::default()
///     .with_animation_duration_ms(300.0)
///     .with_max_scale_multiplier(8.0)
///     .validate()
///     .unwrap();
/// assert_eq!(config.animation_duration_ms, 300.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureConfig {
    /// Duration of snap-back and double-tap transitions, in milliseconds.
    pub animation_duration_ms: f64,
    /// The maximum scale is the crop scale times this multiplier.
    pub max_scale_multiplier: f64,
    /// Translation error, in pixels, under which no snap-back is started
    /// after a pinch.
    pub snap_tolerance: f64,
    /// Fling curve parameters.
    pub fling: FlingParams,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            animation_duration_ms: 200.0,
            max_scale_multiplier: 4.0,
            snap_tolerance: 1.0,
            fling: FlingParams::default(),
        }
    }
}

impl GestureConfig {
    /// Sets the transition duration.
    #[must_use]
    pub fn with_animation_duration_ms(mut self, ms: f64) -> Self {
        self.animation_duration_ms = ms;
        self
    }

    /// Sets the max scale multiplier.
    #[must_use]
    pub fn with_max_scale_multiplier(mut self, multiplier: f64) -> Self {
        self.max_scale_multiplier = multiplier;
        self
    }

    /// Sets the snap-back tolerance.
    #[must_use]
    pub fn with_snap_tolerance(mut self, pixels: f64) -> Self {
        self.snap_tolerance = pixels;
        self
    }

    /// Sets the fling parameters.
    #[must_use]
    pub fn with_fling(mut self, fling: FlingParams) -> Self {
        self.fling = fling;
        self
    }

    /// Checks every field, returning the config unchanged when valid.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !(self.animation_duration_ms.is_finite() && self.animation_duration_ms > 0.0) {
            return Err(ConfigError::AnimationDuration(self.animation_duration_ms));
        }
        if !(self.max_scale_multiplier.is_finite() && self.max_scale_multiplier >= 1.0) {
            return Err(ConfigError::MaxScaleMultiplier(self.max_scale_multiplier));
        }
        if !(self.snap_tolerance.is_finite() && self.snap_tolerance >= 0.0) {
            return Err(ConfigError::SnapTolerance(self.snap_tolerance));
        }
        let fling = self.fling;
        if !(fling.duration_coefficient.is_finite() && fling.duration_coefficient > 0.0) {
            return Err(ConfigError::FlingDurationCoefficient(
                fling.duration_coefficient,
            ));
        }
        if !(fling.deceleration_exponent.is_finite() && fling.deceleration_exponent > 1.0) {
            return Err(ConfigError::FlingDecelerationExponent(
                fling.deceleration_exponent,
            ));
        }
        Ok(self)
    }
}
