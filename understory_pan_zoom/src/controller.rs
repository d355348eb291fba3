// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture state machine driving a [`ZoomTransform`].
//!
//! ## Usage
//!
//! 1) Create a [`GestureController`] with a [`GestureConfig`].
//! 2) Feed it the viewport with [`GestureController::set_viewport`] and the
//!    displayed image size with [`GestureController::set_content`].
//! 3) Forward classified gestures with [`GestureController::handle`].
//! 4) While [`GestureController::animation_duration_ms`] is `Some`, call
//!    [`GestureController::tick`] once per frame with the elapsed fraction.
//! 5) Whenever the redraw sink fires, render with
//!    [`GestureController::affine`].

use kurbo::{Affine, Point, Rect, Vec2};

use crate::animator::{AnimationJob, AnimationKind, Animator};
use crate::bounds;
use crate::config::GestureConfig;
use crate::fling::FlingSimulator;
use crate::layout::{ContentExtent, Layout, ScaleLimits, Viewport};
use crate::transform::{TransformState, ZoomTransform};
use crate::transition::Transition;

/// Relative tolerance used to decide that the scale sits at the maximum.
const AT_MAX_TOLERANCE: f64 = 1e-6;

/// A gesture already classified by the platform's gesture detector.
///
/// Coordinates are in view pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GestureEvent {
    /// A drag step. `distance` is the previous pointer position minus the
    /// current one, as platform scroll detectors report it; the content moves
    /// by `-distance`.
    Scroll {
        /// Distance scrolled since the previous event.
        distance: Vec2,
    },
    /// The drag was released without a fling.
    ScrollEnd,
    /// The drag was released with `velocity` in pixels per second.
    Fling {
        /// Release velocity of the content.
        velocity: Vec2,
    },
    /// A pinch started.
    ScaleBegin,
    /// A pinch step.
    Scale {
        /// Midpoint between the pointers.
        focus: Point,
        /// Span ratio since the previous step.
        factor: f64,
    },
    /// The pinch ended.
    ScaleEnd,
    /// A double tap at `focus`.
    DoubleTap {
        /// Tap position.
        focus: Point,
    },
    /// A confirmed single tap; left to the host.
    SingleTap {
        /// Tap position.
        position: Point,
    },
    /// A long press; left to the host.
    LongPress {
        /// Press position.
        position: Point,
    },
}

/// How the controller treated an event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EventResponse {
    /// The event changed (or deliberately kept) the transform state.
    Consumed,
    /// The event was dropped, either because no content is set or because a
    /// snap-back is in progress.
    Ignored,
    /// The event is not handled by the engine; the host should act on it.
    Forwarded,
}

/// Current interaction state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// At rest.
    #[default]
    Idle,
    /// A one-pointer drag is in progress.
    Dragging,
    /// A pinch is in progress.
    Scaling,
    /// An animation is being ticked.
    Animating(AnimationKind),
}

/// Receiver of redraw requests.
///
/// Requests are fire-and-forget; several requests before the next frame may
/// be collapsed into one.
pub trait RedrawSink {
    /// Asks the host to render the transform again.
    fn request_redraw(&mut self);
}

/// A [`RedrawSink`] that coalesces requests into a pending flag.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RedrawFlag {
    pending: bool,
}

impl RedrawFlag {
    /// Returns `true` if a redraw was requested since the last [`RedrawFlag::take`].
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Returns the pending flag and clears it.
    pub fn take(&mut self) -> bool {
        core::mem::take(&mut self.pending)
    }
}

impl RedrawSink for RedrawFlag {
    fn request_redraw(&mut self) {
        self.pending = true;
    }
}

/// Which edges of the content are currently clipped by the viewport.
///
/// Hosts nesting the view in a pager use this to decide whether a horizontal
/// swipe should pan the content or change page.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HiddenEdges {
    /// Content extends past the left edge.
    pub left: bool,
    /// Content extends past the top edge.
    pub top: bool,
    /// Content extends past the right edge.
    pub right: bool,
    /// Content extends past the bottom edge.
    pub bottom: bool,
}

/// Turns classified gestures into a bounded pan/zoom transform.
///
/// The controller exclusively owns the [`ZoomTransform`] and at most one
/// [`AnimationJob`]. Starting a drag, a pinch, a double-tap zoom or a new
/// animation discards the current job. All calls are expected on a single
/// UI thread.
#[derive(Clone, Debug)]
pub struct GestureController<R = RedrawFlag> {
    config: GestureConfig,
    transform: ZoomTransform,
    viewport: Option<Viewport>,
    content: Option<ContentExtent>,
    layout: Option<Layout>,
    phase: GesturePhase,
    job: Option<AnimationJob>,
    animating_back: bool,
    last_focus: Option<Point>,
    redraw: R,
}

impl GestureController<RedrawFlag> {
    /// Creates a controller whose redraw requests accumulate in a [`RedrawFlag`].
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self::with_redraw_sink(config, RedrawFlag::default())
    }
}

impl<R: RedrawSink> GestureController<R> {
    /// Creates a controller reporting redraws to `redraw`.
    #[must_use]
    pub fn with_redraw_sink(config: GestureConfig, redraw: R) -> Self {
        Self {
            config,
            transform: ZoomTransform::default(),
            viewport: None,
            content: None,
            layout: None,
            phase: GesturePhase::Idle,
            job: None,
            animating_back: false,
            last_focus: None,
            redraw,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Returns the current transform.
    #[must_use]
    pub fn transform(&self) -> &ZoomTransform {
        &self.transform
    }

    /// Returns the current transform state.
    #[must_use]
    pub fn state(&self) -> TransformState {
        self.transform.state()
    }

    /// Returns the content → view transform to render with.
    #[must_use]
    pub fn affine(&self) -> Affine {
        self.transform.to_affine()
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Returns the viewport/content layout, if both are set.
    #[must_use]
    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// Returns the current scale limits, if both viewport and content are set.
    #[must_use]
    pub fn limits(&self) -> Option<ScaleLimits> {
        self.layout.map(|l| l.limits)
    }

    /// Returns the active animation, if any.
    #[must_use]
    pub fn animation(&self) -> Option<&AnimationJob> {
        self.job.as_ref()
    }

    /// Duration of the active animation in milliseconds, if any.
    #[must_use]
    pub fn animation_duration_ms(&self) -> Option<f64> {
        self.job.as_ref().map(Animator::duration_ms)
    }

    /// Returns `true` while a post-pinch snap-back is running.
    ///
    /// Scroll and fling events are ignored in that window.
    #[must_use]
    pub fn is_animating_back(&self) -> bool {
        self.animating_back
    }

    /// Returns the redraw sink.
    #[must_use]
    pub fn redraw_sink(&self) -> &R {
        &self.redraw
    }

    /// Returns the redraw sink mutably, e.g. to take a [`RedrawFlag`].
    pub fn redraw_sink_mut(&mut self) -> &mut R {
        &mut self.redraw
    }

    /// Sets the viewport.
    ///
    /// A changed size recomputes the scale limits and, when content is set,
    /// resets the transform to the initial fit, discarding any animation.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.viewport == Some(viewport) {
            return;
        }
        self.viewport = Some(viewport);
        self.relayout();
    }

    /// Sets or clears the displayed content.
    ///
    /// Call this whenever the displayed content changes, even when the new
    /// content has the same size as the old one. New content resets the
    /// transform to the initial fit. Clearing it stops all gesture handling
    /// until content is set again.
    pub fn set_content(&mut self, content: Option<ContentExtent>) {
        if content.is_none() && self.content.is_none() {
            return;
        }
        self.content = content;
        self.relayout();
    }

    /// Resets the transform to the initial fit: minimum scale, content centered.
    ///
    /// Does nothing until both viewport and content are set.
    pub fn reset_to_initial_state(&mut self) {
        let Some(layout) = self.layout else {
            return;
        };
        self.cancel_animation();
        self.last_focus = None;
        self.set_phase(GesturePhase::Idle);
        let initial = layout.initial_state();
        log::debug!(
            "pan-zoom reset: scale {} in [{}, {}], translation {:?}",
            initial.scale,
            layout.limits.min,
            layout.limits.max,
            initial.translation
        );
        self.transform.reset(initial);
        self.redraw.request_redraw();
    }

    /// Replaces the transform state, discarding any animation.
    ///
    /// A redraw is only requested when the state actually changes.
    pub fn set_transform(&mut self, state: TransformState) {
        self.cancel_animation();
        if self.transform.state() != state {
            self.transform.reset(state);
            self.redraw.request_redraw();
        }
    }

    /// Which content edges are clipped, compared in whole pixels.
    #[must_use]
    pub fn hidden_edges(&self) -> HiddenEdges {
        let Some(layout) = self.layout else {
            return HiddenEdges::default();
        };
        let view = layout.view_size();
        let content = layout.content_size_at(self.transform.scale());
        let t = self.transform.translation();
        let (tx, ty) = (libm::round(t.x), libm::round(t.y));
        HiddenEdges {
            left: tx < 0.0,
            top: ty < 0.0,
            right: tx > libm::round(view.width) - libm::round(content.width),
            bottom: ty > libm::round(view.height) - libm::round(content.height),
        }
    }

    /// Dispatches one classified gesture.
    pub fn handle(&mut self, event: GestureEvent) -> EventResponse {
        let Some(layout) = self.layout else {
            return match event {
                GestureEvent::SingleTap { .. } | GestureEvent::LongPress { .. } => {
                    EventResponse::Forwarded
                }
                _ => EventResponse::Ignored,
            };
        };
        match event {
            GestureEvent::Scroll { distance } => self.on_scroll(&layout, distance),
            GestureEvent::ScrollEnd => self.on_scroll_end(),
            GestureEvent::Fling { velocity } => self.on_fling(&layout, velocity),
            GestureEvent::ScaleBegin => self.on_scale_begin(),
            GestureEvent::Scale { focus, factor } => self.on_scale(&layout, focus, factor),
            GestureEvent::ScaleEnd => self.on_scale_end(&layout),
            GestureEvent::DoubleTap { focus } => self.on_double_tap(&layout, focus),
            GestureEvent::SingleTap { .. } | GestureEvent::LongPress { .. } => {
                EventResponse::Forwarded
            }
        }
    }

    /// Advances the active animation to `fraction` of its duration.
    ///
    /// Returns `true` while the animation continues. Once it returns `false`
    /// the controller is idle and the host should stop ticking.
    pub fn tick(&mut self, fraction: f64) -> bool {
        let Some(job) = self.job.as_mut() else {
            return false;
        };
        let running = job.tick(&mut self.transform, fraction);
        self.redraw.request_redraw();
        if !running {
            log::trace!("pan-zoom {:?} animation finished", job.kind());
            self.job = None;
            self.animating_back = false;
            self.set_phase(GesturePhase::Idle);
        }
        running
    }

    fn relayout(&mut self) {
        self.layout = match (self.viewport, self.content) {
            (Some(viewport), Some(content)) => Some(Layout::new(
                viewport,
                content,
                self.config.max_scale_multiplier,
            )),
            _ => None,
        };
        if self.layout.is_some() {
            self.reset_to_initial_state();
        } else {
            self.cancel_animation();
            self.last_focus = None;
            self.set_phase(GesturePhase::Idle);
        }
    }

    fn set_phase(&mut self, phase: GesturePhase) {
        if self.phase != phase {
            log::trace!("pan-zoom phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    fn cancel_animation(&mut self) {
        if let Some(job) = self.job.take() {
            log::trace!("pan-zoom {:?} animation cancelled", job.kind());
            self.set_phase(GesturePhase::Idle);
        }
        self.animating_back = false;
    }

    fn start_animation(&mut self, job: AnimationJob) {
        self.cancel_animation();
        log::trace!(
            "pan-zoom {:?} animation started, {} ms",
            job.kind(),
            job.duration_ms()
        );
        self.set_phase(GesturePhase::Animating(job.kind()));
        self.job = Some(job);
    }

    fn on_scroll(&mut self, layout: &Layout, distance: Vec2) -> EventResponse {
        // Platform detectors may deliver a trailing scroll right after a
        // pinch ends; it must not interrupt the snap-back.
        if self.animating_back {
            return EventResponse::Ignored;
        }
        self.cancel_animation();
        if self.phase != GesturePhase::Scaling {
            self.set_phase(GesturePhase::Dragging);
        }
        let content = layout.content_size_at(self.transform.scale());
        let delta = bounds::clamp_translation(
            layout.view_size(),
            content,
            self.transform.translation(),
            -distance,
        );
        self.transform.translate(delta);
        self.redraw.request_redraw();
        EventResponse::Consumed
    }

    fn on_scroll_end(&mut self) -> EventResponse {
        if self.phase == GesturePhase::Dragging {
            self.set_phase(GesturePhase::Idle);
            EventResponse::Consumed
        } else {
            EventResponse::Ignored
        }
    }

    fn on_fling(&mut self, layout: &Layout, velocity: Vec2) -> EventResponse {
        if self.animating_back {
            return EventResponse::Ignored;
        }
        let view = layout.view_size();
        let content = layout.content_size_at(self.transform.scale());
        let (min_x, max_x) = bounds::translation_range(view.width, content.width);
        let (min_y, max_y) = bounds::translation_range(view.height, content.height);

        let mut fling = FlingSimulator::new(self.config.fling);
        fling.fling(
            self.transform.translation().to_point(),
            velocity,
            Rect::new(min_x, min_y, max_x, max_y),
        );

        if fling.duration_ms() > 0.0 {
            self.start_animation(AnimationJob::Fling(fling));
        } else {
            self.cancel_animation();
            self.set_phase(GesturePhase::Idle);
            let rest = fling.rest_position().to_vec2();
            if rest != self.transform.translation() {
                self.transform.translate(rest - self.transform.translation());
                self.redraw.request_redraw();
            }
        }
        EventResponse::Consumed
    }

    fn on_scale_begin(&mut self) -> EventResponse {
        self.cancel_animation();
        self.last_focus = None;
        self.set_phase(GesturePhase::Scaling);
        EventResponse::Consumed
    }

    fn on_scale(&mut self, layout: &Layout, focus: Point, factor: f64) -> EventResponse {
        self.cancel_animation();
        self.set_phase(GesturePhase::Scaling);

        let view = layout.view_size();
        let scale = self.transform.scale();
        let content = layout.content_size_at(scale);
        let translation = self.transform.translation();
        let focus = bounds::project_focus_point(view, content, translation, focus);

        // Focus motion pans the content while pinching.
        if let Some(last) = self.last_focus {
            let delta =
                bounds::clamp_translation_during_scale(view, content, translation, focus - last);
            if delta != Vec2::ZERO {
                self.transform.translate(delta);
            }
        }

        let factor = bounds::clamp_scale_factor(layout.limits.min, layout.limits.max, scale, factor);
        self.transform.scale_about(factor, focus);
        self.last_focus = Some(focus);
        self.redraw.request_redraw();
        EventResponse::Consumed
    }

    fn on_scale_end(&mut self, layout: &Layout) -> EventResponse {
        self.last_focus = None;
        let current = self.transform.state();
        let target_scale = layout.limits.clamp(current.scale);
        let correction = bounds::snap_correction(
            layout.view_size(),
            layout.content_size_at(target_scale),
            current.translation,
        );

        let tolerance = self.config.snap_tolerance;
        if correction.x.abs() < tolerance
            && correction.y.abs() < tolerance
            && layout.limits.contains(current.scale)
        {
            self.set_phase(GesturePhase::Idle);
            return EventResponse::Consumed;
        }

        let target = TransformState::new(target_scale, current.translation + correction);
        log::debug!(
            "pan-zoom snap-back from {:?} to {:?}",
            current.translation,
            target.translation
        );
        self.start_animation(AnimationJob::Transition(Transition::new(
            current,
            target,
            self.config.animation_duration_ms,
        )));
        self.animating_back = true;
        EventResponse::Consumed
    }

    fn on_double_tap(&mut self, layout: &Layout, focus: Point) -> EventResponse {
        self.last_focus = None;
        let current = self.transform.state();
        let limits = layout.limits;

        let at_max = (current.scale - limits.max).abs() <= limits.max * AT_MAX_TOLERANCE;
        let target_scale = if at_max {
            limits.min
        } else if current.scale >= limits.crop {
            limits.max
        } else {
            limits.crop
        };

        // Keep the tapped point in place, then remove any blank space the
        // new scale would leave at the edges.
        let focus = focus.to_vec2();
        let desired = focus - (focus - current.translation) * (target_scale / current.scale);
        let correction = bounds::snap_correction(
            layout.view_size(),
            layout.content_size_at(target_scale),
            desired,
        );
        let target = TransformState::new(target_scale, desired + correction);

        self.start_animation(AnimationJob::Transition(Transition::new(
            current,
            target,
            self.config.animation_duration_ms,
        )));
        EventResponse::Consumed
    }
}
