// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

use crate::error::{LayoutError, LayoutKind};
use crate::transform::TransformState;

fn validate(kind: LayoutKind, size: Size) -> Result<Size, LayoutError> {
    let ok = |v: f64| v.is_finite() && v > 0.0;
    if ok(size.width) && ok(size.height) {
        Ok(size)
    } else {
        Err(LayoutError {
            kind,
            width: size.width,
            height: size.height,
        })
    }
}

/// Size of the area the content is displayed in, in view pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport(Size);

impl Viewport {
    /// Creates a viewport, rejecting non-finite or non-positive sizes.
    pub fn new(size: Size) -> Result<Self, LayoutError> {
        validate(LayoutKind::Viewport, size).map(Self)
    }

    /// Returns the viewport size.
    #[must_use]
    pub fn size(self) -> Size {
        self.0
    }
}

/// Intrinsic size of the displayed content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentExtent(Size);

impl ContentExtent {
    /// Creates a content extent, rejecting non-finite or non-positive sizes.
    pub fn new(size: Size) -> Result<Self, LayoutError> {
        validate(LayoutKind::Content, size).map(Self)
    }

    /// Returns the intrinsic content size.
    #[must_use]
    pub fn size(self) -> Size {
        self.0
    }
}

/// Legal scale range derived from a viewport/content pair.
///
/// `min` fits the whole content inside the viewport, `crop` fills the
/// viewport along both axes (the content overflows one of them) and `max` is
/// `crop` times the configured multiplier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLimits {
    /// Smallest legal scale; the content fits entirely.
    pub min: f64,
    /// Scale at which the content covers the whole viewport.
    pub crop: f64,
    /// Largest legal scale.
    pub max: f64,
}

impl ScaleLimits {
    /// Computes the limits for `viewport` showing `content`.
    ///
    /// `max` never drops below `min`; a multiplier that would put it there
    /// (or a NaN one) collapses the range to `[min, min]`.
    #[must_use]
    pub fn compute(viewport: Viewport, content: ContentExtent, max_multiplier: f64) -> Self {
        let sx = viewport.0.width / content.0.width;
        let sy = viewport.0.height / content.0.height;
        let min = sx.min(sy);
        let crop = sx.max(sy);
        Self {
            min,
            crop,
            // `f64::max` ignores a NaN operand.
            max: (crop * max_multiplier).max(min),
        }
    }

    /// Clamps `scale` into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }

    /// Returns `true` if `scale` is within `[min, max]`.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        scale >= self.min && scale <= self.max
    }
}

/// A viewport/content pair together with its derived scale limits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// Current viewport.
    pub viewport: Viewport,
    /// Current content extent.
    pub content: ContentExtent,
    /// Limits derived from `viewport` and `content`.
    pub limits: ScaleLimits,
}

impl Layout {
    /// Builds a layout and derives its scale limits.
    #[must_use]
    pub fn new(viewport: Viewport, content: ContentExtent, max_multiplier: f64) -> Self {
        Self {
            viewport,
            content,
            limits: ScaleLimits::compute(viewport, content, max_multiplier),
        }
    }

    /// Viewport size in view pixels.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.viewport.size()
    }

    /// Content size at `scale`.
    #[must_use]
    pub fn content_size_at(&self, scale: f64) -> Size {
        self.content.size() * scale
    }

    /// The fitted state: minimum scale with the content centered.
    #[must_use]
    pub fn initial_state(&self) -> TransformState {
        let scale = self.limits.min;
        let free = self.view_size() - self.content_size_at(scale);
        TransformState::new(scale, Vec2::new(free.width / 2.0, free.height / 2.0))
    }
}
