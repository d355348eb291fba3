// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure bounds policy for translation and scale.
//!
//! The per-axis functions take the viewport extent `view`, the scaled content
//! extent `content`, and the current translation of the content's leading edge
//! along that axis. They return deltas rather than absolute values so callers
//! can compose them into a [`crate::ZoomTransform`] with
//! [`crate::ZoomTransform::translate`].
//!
//! When the content is smaller than the viewport along an axis, the only
//! legal translation centers it. Otherwise the legal range is
//! `[view - content, 0]`, i.e. no blank space may appear at either edge.

use kurbo::{Point, Size, Vec2};

/// Half of the space left over when `content` is narrower than `view`.
///
/// Negative when the content overflows the viewport.
#[must_use]
pub fn side_free_space(view: f64, content: f64) -> f64 {
    (view - content) / 2.0
}

/// Returns the legal translation range `(min, max)` along one axis.
///
/// With free space the range collapses onto the centering translation.
#[must_use]
pub fn translation_range(view: f64, content: f64) -> (f64, f64) {
    let free = side_free_space(view, content);
    if free > 0.0 {
        (free, free)
    } else {
        (view - content, 0.0)
    }
}

/// Limits a drag delta so the translation stays legal.
///
/// With free space the requested delta is ignored and the delta that
/// centers the content is returned instead.
#[must_use]
pub fn clamp_translation_delta(view: f64, content: f64, current: f64, delta: f64) -> f64 {
    let free = side_free_space(view, content);
    if free > 0.0 {
        free - current
    } else if current + delta > 0.0 {
        -current
    } else if current + delta < view - content {
        view - content - current
    } else {
        delta
    }
}

/// Limits a relative scale `factor` so that `current * factor` stays in
/// `[min, max]`.
///
/// The bound check is made on `current * factor` and the returned value is
/// again a factor relative to `current`.
#[must_use]
pub fn clamp_scale_factor(min: f64, max: f64, current: f64, factor: f64) -> f64 {
    if current * factor < min {
        min / current
    } else if current * factor > max {
        max / current
    } else {
        factor
    }
}

/// Projects a focus coordinate onto the visible part of the content.
///
/// A pinch whose focus lies in blank space beside the content would anchor
/// the zoom off-image; such a focus is moved to the nearest content edge.
#[must_use]
pub fn project_focus(view: f64, content: f64, current: f64, focus: f64) -> f64 {
    if current > 0.0 && focus < current {
        current
    } else if current < view - content && focus > current + content {
        current + content
    } else {
        focus
    }
}

/// Softer variant of [`clamp_translation_delta`] used while a pinch is live.
///
/// Inside the legal range the delta is fully clamped. Outside it, only
/// motion back toward the range is allowed (and capped at the far end of
/// the range), so the content may stay out of bounds until the snap-back
/// that follows the pinch.
#[must_use]
pub fn clamp_during_active_scale(view: f64, content: f64, current: f64, delta: f64) -> f64 {
    let (min, max) = if view > content {
        (0.0, view - content)
    } else {
        (view - content, 0.0)
    };

    if current < min {
        if delta > 0.0 {
            delta.min(max - current)
        } else {
            0.0
        }
    } else if current > max {
        if delta < 0.0 {
            delta.max(min - current)
        } else {
            0.0
        }
    } else {
        (current + delta).clamp(min, max) - current
    }
}

/// [`clamp_translation_delta`] applied to both axes.
#[must_use]
pub fn clamp_translation(view: Size, content: Size, current: Vec2, delta: Vec2) -> Vec2 {
    Vec2::new(
        clamp_translation_delta(view.width, content.width, current.x, delta.x),
        clamp_translation_delta(view.height, content.height, current.y, delta.y),
    )
}

/// [`clamp_during_active_scale`] applied to both axes.
#[must_use]
pub fn clamp_translation_during_scale(
    view: Size,
    content: Size,
    current: Vec2,
    delta: Vec2,
) -> Vec2 {
    Vec2::new(
        clamp_during_active_scale(view.width, content.width, current.x, delta.x),
        clamp_during_active_scale(view.height, content.height, current.y, delta.y),
    )
}

/// [`project_focus`] applied to both axes.
#[must_use]
pub fn project_focus_point(view: Size, content: Size, current: Vec2, focus: Point) -> Point {
    Point::new(
        project_focus(view.width, content.width, current.x, focus.x),
        project_focus(view.height, content.height, current.y, focus.y),
    )
}

/// Delta that brings `current` back into the legal translation range.
///
/// Zero on both axes when the translation is already legal.
#[must_use]
pub fn snap_correction(view: Size, content: Size, current: Vec2) -> Vec2 {
    clamp_translation(view, content, current, Vec2::ZERO)
}
