// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size, Vec2};

/// Scale and translation of the displayed content.
///
/// Content coordinates map to view coordinates as
/// `view = content * scale + translation`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    /// Uniform scale factor, always positive.
    pub scale: f64,
    /// Translation in view pixels, applied after scaling.
    pub translation: Vec2,
}

impl TransformState {
    /// The identity state: unit scale, no translation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translation: Vec2::ZERO,
    };

    /// Creates a state from a scale and a translation.
    #[must_use]
    pub const fn new(scale: f64, translation: Vec2) -> Self {
        Self { scale, translation }
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Owned 2D affine map restricted to uniform scale plus translation.
///
/// Operations compose in view space (post-multiplied) and perform no range
/// checks; keeping the state legal is up to the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ZoomTransform {
    state: TransformState,
}

impl ZoomTransform {
    /// Creates a transform holding `state`.
    #[must_use]
    pub const fn new(state: TransformState) -> Self {
        Self { state }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> TransformState {
        self.state
    }

    /// Returns the current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.scale
    }

    /// Returns the current translation.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.state.translation
    }

    /// Multiplies the scale by `factor`, keeping `focus` (in view space) fixed.
    pub fn scale_about(&mut self, factor: f64, focus: Point) {
        let focus = focus.to_vec2();
        self.state.scale *= factor;
        self.state.translation = focus + (self.state.translation - focus) * factor;
    }

    /// Adds `delta` to the translation.
    pub fn translate(&mut self, delta: Vec2) {
        self.state.translation += delta;
    }

    /// Replaces the state outright.
    pub fn reset(&mut self, state: TransformState) {
        self.state = state;
    }

    /// Size of content with the given intrinsic size under the current scale.
    #[must_use]
    pub fn content_size(&self, intrinsic: Size) -> Size {
        intrinsic * self.state.scale
    }

    /// Maps a content-space point into view space.
    #[must_use]
    pub fn map_point(&self, pt: Point) -> Point {
        self.to_affine() * pt
    }

    /// Returns the content → view transform as a [`kurbo::Affine`].
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.state.translation) * Affine::scale(self.state.scale)
    }
}
