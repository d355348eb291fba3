// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_pan_zoom` crate.
//!
//! These drive `GestureController` through whole gesture sequences the way a
//! host would: classified events in, per-frame ticks, then inspect the
//! resulting transform.

use kurbo::{Point, Size, Vec2};
use understory_pan_zoom::{
    AnimationClock, AnimationKind, ContentExtent, EventResponse, GestureConfig, GestureController,
    GestureEvent, GesturePhase, TransformState, Viewport, bounds,
};

fn controller(view: (f64, f64), content: (f64, f64)) -> GestureController {
    let mut c = GestureController::new(GestureConfig::default());
    c.set_viewport(Viewport::new(Size::new(view.0, view.1)).unwrap());
    c.set_content(Some(
        ContentExtent::new(Size::new(content.0, content.1)).unwrap(),
    ));
    c
}

/// Ticks the active animation to completion in ten even frames.
fn finish_animation(c: &mut GestureController) {
    for i in 1..=10 {
        let running = c.tick(f64::from(i) / 10.0);
        assert_eq!(running, i < 10, "unexpected animation state at frame {i}");
    }
}

fn assert_legal(c: &GestureController) {
    let layout = *c.layout().unwrap();
    let s = c.state();
    assert!(layout.limits.contains(s.scale), "scale {} out of range", s.scale);
    let correction = bounds::snap_correction(
        layout.view_size(),
        layout.content_size_at(s.scale),
        s.translation,
    );
    assert!(correction.hypot() < 1e-6, "translation {:?} out of range", s.translation);
}

#[test]
fn tall_viewport_scenario() {
    let c = controller((1000.0, 2000.0), (500.0, 500.0));
    let limits = c.limits().unwrap();
    assert_eq!((limits.min, limits.crop, limits.max), (2.0, 4.0, 16.0));
    assert_eq!(c.state(), TransformState::new(2.0, Vec2::new(0.0, 500.0)));
    assert_legal(&c);
}

#[test]
fn double_tap_cycles_through_three_stages() {
    let mut c = controller((1000.0, 2000.0), (500.0, 500.0));
    let focus = Point::new(300.0, 900.0);

    for expected in [4.0, 16.0, 2.0, 4.0] {
        assert_eq!(c.handle(GestureEvent::DoubleTap { focus }), EventResponse::Consumed);
        assert_eq!(c.phase(), GesturePhase::Animating(AnimationKind::Transition));
        assert_eq!(c.animation_duration_ms(), Some(200.0));
        finish_animation(&mut c);
        assert_eq!(c.phase(), GesturePhase::Idle);
        assert_eq!(c.state().scale, expected);
        assert_legal(&c);
    }
}

#[test]
fn double_tap_keeps_tapped_point_when_room_allows() {
    let mut c = controller((1000.0, 1000.0), (1000.0, 500.0));
    // min 1 (fits width), crop 2 (fills height).
    c.set_transform(TransformState::new(2.0, Vec2::new(-500.0, 0.0)));
    let focus = Point::new(500.0, 500.0);
    let content_pt = c.affine().inverse() * focus;

    c.handle(GestureEvent::DoubleTap { focus });
    finish_animation(&mut c);

    assert_eq!(c.state().scale, 8.0);
    let mapped = c.affine() * content_pt;
    assert!((mapped - focus).hypot() < 1e-9);
}

#[test]
fn double_tap_near_edge_removes_blank_space() {
    let mut c = controller((1000.0, 2000.0), (500.0, 500.0));
    // Tapping the top-left corner would keep (0, 500) fixed and leave blank
    // space above the image; the target is corrected into range.
    c.handle(GestureEvent::DoubleTap {
        focus: Point::new(0.0, 500.0),
    });
    finish_animation(&mut c);
    let s = c.state();
    assert_eq!(s.scale, 4.0);
    assert_eq!(s.translation, Vec2::new(0.0, 0.0));
    assert_legal(&c);
}

#[test]
fn pinch_out_of_bounds_snaps_back_and_blocks_trailing_scroll() {
    let mut c = controller((1000.0, 1000.0), (500.0, 500.0));
    c.handle(GestureEvent::ScaleBegin);
    c.handle(GestureEvent::Scale {
        focus: Point::new(500.0, 500.0),
        factor: 2.0,
    });
    // Moving the fingers pans the content along with the pinch.
    c.handle(GestureEvent::Scale {
        focus: Point::new(900.0, 900.0),
        factor: 1.0,
    });
    let before = c.state();
    assert_eq!(before.scale, 4.0);
    assert_eq!(before.translation, Vec2::new(-100.0, -100.0));

    // Zooming out about the bottom-right area pulls the content away from
    // the top-left corner, leaving blank space there.
    c.handle(GestureEvent::Scale {
        focus: Point::new(900.0, 900.0),
        factor: 0.75,
    });
    let out = c.state();
    assert_eq!(out.scale, 3.0);
    assert_eq!(out.translation, Vec2::new(150.0, 150.0));

    assert_eq!(c.handle(GestureEvent::ScaleEnd), EventResponse::Consumed);
    assert!(c.is_animating_back());
    assert_eq!(c.phase(), GesturePhase::Animating(AnimationKind::Transition));

    // Trailing gesture-detector events are suppressed while snapping back.
    let scroll = GestureEvent::Scroll {
        distance: Vec2::new(40.0, 40.0),
    };
    assert_eq!(c.handle(scroll), EventResponse::Ignored);
    assert_eq!(
        c.handle(GestureEvent::Fling {
            velocity: Vec2::new(3000.0, 0.0)
        }),
        EventResponse::Ignored
    );

    finish_animation(&mut c);
    assert!(!c.is_animating_back());
    assert_eq!(c.state().scale, 3.0);
    assert_legal(&c);

    // Once settled, scrolling works again.
    assert_eq!(c.handle(scroll), EventResponse::Consumed);
}

#[test]
fn pinch_in_range_needs_no_snap_back() {
    let mut c = controller((1000.0, 1000.0), (500.0, 500.0));
    c.handle(GestureEvent::ScaleBegin);
    c.handle(GestureEvent::Scale {
        focus: Point::new(250.0, 750.0),
        factor: 1.5,
    });
    c.handle(GestureEvent::ScaleEnd);
    assert_eq!(c.phase(), GesturePhase::Idle);
    assert!(c.animation().is_none());
    assert_legal(&c);
}

#[test]
fn pinch_focus_in_blank_space_is_projected() {
    let mut c = controller((1000.0, 2000.0), (500.0, 500.0));
    // Content occupies y in [500, 1500]; pinch above it.
    c.handle(GestureEvent::ScaleBegin);
    c.handle(GestureEvent::Scale {
        focus: Point::new(500.0, 100.0),
        factor: 1.5,
    });
    let s = c.state();
    // The top content edge (y = 500) was used as the pivot and stays put.
    assert_eq!(s.scale, 3.0);
    assert_eq!(s.translation.y, 500.0);
}

#[test]
fn scroll_cancels_running_animation() {
    let mut c = controller((1000.0, 2000.0), (500.0, 500.0));
    c.handle(GestureEvent::DoubleTap {
        focus: Point::new(500.0, 1000.0),
    });
    assert!(c.tick(0.5));
    c.handle(GestureEvent::Scroll {
        distance: Vec2::new(10.0, 0.0),
    });
    assert_eq!(c.phase(), GesturePhase::Dragging);
    assert!(c.animation().is_none());
    assert!(!c.tick(0.6));
}

#[test]
fn fling_after_drag_decelerates_into_bounds() {
    let mut c = controller((1000.0, 2000.0), (500.0, 500.0));
    c.set_transform(TransformState::new(8.0, Vec2::new(-1500.0, -1000.0)));
    c.handle(GestureEvent::Scroll {
        distance: Vec2::new(20.0, 0.0),
    });
    c.handle(GestureEvent::Fling {
        velocity: Vec2::new(-20000.0, 2000.0),
    });
    assert_eq!(c.phase(), GesturePhase::Animating(AnimationKind::Fling));

    let duration = c.animation_duration_ms().unwrap();
    let clock = AnimationClock::new(10_000.0, duration);
    let mut now = 10_000.0;
    let mut last_x = c.state().translation.x;
    loop {
        now += 16.0;
        let running = c.tick(clock.fraction_at(now));
        let x = c.state().translation.x;
        assert!(x <= last_x, "fling reversed direction");
        last_x = x;
        if !running {
            break;
        }
    }
    assert_eq!(c.phase(), GesturePhase::Idle);
    assert_legal(&c);
    assert_eq!(c.state().translation.x, -3000.0);
}

#[test]
fn double_tap_replaces_running_fling() {
    let mut c = controller((1000.0, 2000.0), (500.0, 500.0));
    c.set_transform(TransformState::new(8.0, Vec2::new(-1500.0, -1000.0)));
    c.handle(GestureEvent::Fling {
        velocity: Vec2::new(-6000.0, 2000.0),
    });
    assert_eq!(c.phase(), GesturePhase::Animating(AnimationKind::Fling));
    assert!(c.tick(0.3));

    let focus = Point::new(500.0, 1000.0);
    assert_eq!(c.handle(GestureEvent::DoubleTap { focus }), EventResponse::Consumed);
    assert_eq!(c.phase(), GesturePhase::Animating(AnimationKind::Transition));
    assert_eq!(c.animation().map(|job| job.kind()), Some(AnimationKind::Transition));

    finish_animation(&mut c);
    assert_eq!(c.phase(), GesturePhase::Idle);
    assert_eq!(c.state().scale, 16.0);
    assert_legal(&c);
}

#[test]
fn zero_velocity_fling_settles_immediately() {
    let mut c = controller((1000.0, 1000.0), (500.0, 500.0));
    c.set_transform(TransformState::new(4.0, Vec2::new(-300.0, -300.0)));
    c.handle(GestureEvent::Fling {
        velocity: Vec2::ZERO,
    });
    assert_eq!(c.phase(), GesturePhase::Idle);
    assert!(c.animation().is_none());
    assert_eq!(c.state().translation, Vec2::new(-300.0, -300.0));
}

#[test]
fn viewport_resize_resets_and_discards_animation() {
    let mut c = controller((1000.0, 2000.0), (500.0, 500.0));
    c.handle(GestureEvent::DoubleTap {
        focus: Point::new(500.0, 1000.0),
    });
    assert!(c.tick(0.3));

    // Same size: nothing happens.
    c.set_viewport(Viewport::new(Size::new(1000.0, 2000.0)).unwrap());
    assert!(c.animation().is_some());

    c.set_viewport(Viewport::new(Size::new(2000.0, 1000.0)).unwrap());
    assert!(c.animation().is_none());
    assert_eq!(c.phase(), GesturePhase::Idle);
    assert_eq!(c.state(), TransformState::new(2.0, Vec2::new(500.0, 0.0)));
    assert_eq!(c.limits().unwrap().max, 16.0);
}

#[test]
fn clearing_content_disables_gestures() {
    let mut c = controller((1000.0, 2000.0), (500.0, 500.0));
    c.set_content(None);
    assert!(c.layout().is_none());
    assert_eq!(
        c.handle(GestureEvent::DoubleTap {
            focus: Point::ORIGIN
        }),
        EventResponse::Ignored
    );
    assert_eq!(
        c.handle(GestureEvent::LongPress {
            position: Point::ORIGIN
        }),
        EventResponse::Forwarded
    );
    assert!(!c.tick(1.0));

    c.set_content(Some(ContentExtent::new(Size::new(250.0, 250.0)).unwrap()));
    assert_eq!(c.state().scale, 4.0);
}

#[test]
fn redraws_coalesce_until_taken() {
    let mut c = controller((1000.0, 1000.0), (500.0, 500.0));
    assert!(c.redraw_sink_mut().take());
    for _ in 0..5 {
        c.handle(GestureEvent::Scroll {
            distance: Vec2::new(1.0, 1.0),
        });
    }
    assert!(c.redraw_sink_mut().take());
    assert!(!c.redraw_sink_mut().take());
}
