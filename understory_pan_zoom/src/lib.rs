// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pan_zoom --heading-base-level=0

//! Understory Pan Zoom: a headless pan/zoom engine for image views.
//!
//! This crate turns already-classified gestures (drag, fling, pinch,
//! double-tap) into a bounded uniform-scale + translation transform for one
//! piece of content shown inside a viewport, and animates that transform with
//! fling deceleration, snap-back and a three-stage double-tap zoom.
//!
//! It does **not** recognize gestures from raw pointer samples, render
//! anything, or run timers. Callers are expected to:
//! - Classify pointer input into [`GestureEvent`]s (for example with a
//!   platform gesture detector).
//! - Tick animations from their own frame clock via
//!   [`GestureController::tick`], optionally using [`AnimationClock`] to turn
//!   timestamps into fractions.
//! - Render the content with [`GestureController::affine`] whenever the
//!   [`RedrawSink`] fires.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_pan_zoom::{
//!     ContentExtent, GestureConfig, GestureController, GestureEvent, Viewport,
//! };
//!
//! let mut view = GestureController::new(GestureConfig::default());
//! view.set_viewport(Viewport::new(Size::new(1000.0, 2000.0)).unwrap());
//! view.set_content(Some(ContentExtent::new(Size::new(500.0, 500.0)).unwrap()));
//!
//! // Fitted and centered.
//! assert_eq!(view.state().scale, 2.0);
//!
//! // Double-tap zooms to the crop scale over a short transition.
//! view.handle(GestureEvent::DoubleTap { focus: Point::new(500.0, 1000.0) });
//! while view.tick(1.0) {}
//! assert_eq!(view.state().scale, 4.0);
//! assert!(view.redraw_sink_mut().take());
//! ```
//!
//! ## Bounds
//!
//! Scale is limited to `[min, max]` where `min` fits the content inside the
//! viewport, `crop` fills the viewport, and `max = crop * 4` by default.
//! Translation is limited so no blank space appears beside content that
//! overflows the viewport, and content smaller than the viewport is centered.
//! A pinch may leave the content out of bounds temporarily; releasing it
//! starts a snap-back. See [`bounds`] for the individual rules.
//!
//! ## Logging
//!
//! Phase changes and animation lifecycle are reported through the [`log`]
//! facade at `trace` level, resets and snap-back decisions at `debug` level.
//!
//! This crate is `no_std`.

#![no_std]

mod animator;
pub mod bounds;
mod config;
mod controller;
mod error;
mod fling;
mod layout;
mod transform;
mod transition;

pub use animator::{AnimationClock, AnimationJob, AnimationKind, Animator};
pub use config::{FlingParams, GestureConfig};
pub use controller::{
    EventResponse, GestureController, GesturePhase, GestureEvent, HiddenEdges, RedrawFlag,
    RedrawSink,
};
pub use error::{ConfigError, LayoutError, LayoutKind};
pub use fling::{FlingPhase, FlingSimulator};
pub use layout::{ContentExtent, Layout, ScaleLimits, Viewport};
pub use transform::{TransformState, ZoomTransform};
pub use transition::Transition;
