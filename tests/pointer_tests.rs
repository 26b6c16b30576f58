// Host-side tests for pointer-driven effect math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod pointer {
    include!("../src/core/pointer.rs");
}

use glam::Vec2;
use pointer::*;

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-4
}

#[test]
fn magnetic_links_pull_towards_the_pointer() {
    let rect = Rect::new(100.0, 100.0, 200.0, 100.0);
    assert!(approx(magnetic_offset(Vec2::new(250.0, 150.0), &rect), Vec2::new(15.0, 0.0)));
    assert!(approx(magnetic_offset(rect.center(), &rect), Vec2::ZERO));
    assert!(approx(
        magnetic_offset(Vec2::new(100.0, 100.0), &rect),
        Vec2::new(-30.0, -15.0)
    ));
}

#[test]
fn logo_tilts_up_to_ten_degrees() {
    let viewport = Vec2::new(1000.0, 800.0);
    let (rx, ry) = logo_tilt(Vec2::new(500.0, 400.0), viewport);
    assert!(rx.abs() < 1e-6 && ry.abs() < 1e-6);
    let (rx, ry) = logo_tilt(Vec2::ZERO, viewport);
    assert!((rx - LOGO_MAX_TILT_DEG).abs() < 1e-4);
    assert!((ry + LOGO_MAX_TILT_DEG).abs() < 1e-4);
    let (rx, ry) = logo_tilt(viewport, viewport);
    assert!((rx + LOGO_MAX_TILT_DEG).abs() < 1e-4);
    assert!((ry - LOGO_MAX_TILT_DEG).abs() < 1e-4);
}

#[test]
fn cards_tilt_towards_the_pointer() {
    let rect = Rect::new(40.0, 60.0, 200.0, 100.0);
    let (rx, ry) = card_tilt(rect.center(), &rect);
    assert!(rx.abs() < 1e-6 && ry.abs() < 1e-6);
    let (rx, ry) = card_tilt(rect.origin(), &rect);
    assert!((rx + 5.0).abs() < 1e-4);
    assert!((ry - 10.0).abs() < 1e-4);
}

#[test]
fn deeper_shapes_move_further_and_slower() {
    for i in 0..3 {
        assert!(shape_range(i + 1) > shape_range(i));
        assert!(shape_follow_duration(i + 1) > shape_follow_duration(i));
        assert!(shape_scroll_distance(i + 1) < shape_scroll_distance(i));
        assert!(shape_scrub_lag(i + 1) > shape_scrub_lag(i));
    }
    assert_eq!(shape_range(0), 30.0);
    assert_eq!(shape_scroll_distance(0), -100.0);
    assert_eq!(shape_scroll_distance(2), -200.0);

    let viewport = Vec2::new(1000.0, 800.0);
    let offset = shape_offset(Vec2::new(1000.0, 400.0), viewport, 0);
    assert!(approx(offset, Vec2::new(15.0, 0.0)));
}

#[test]
fn degenerate_viewport_counts_as_centered() {
    assert_eq!(normalized_pointer(Vec2::new(30.0, 40.0), Vec2::ZERO), Vec2::splat(0.5));
}

#[test]
fn ripple_is_centered_on_the_click() {
    let rect = Rect::new(10.0, 20.0, 100.0, 40.0);
    let ripple = Ripple::at(Vec2::new(60.0, 40.0), &rect);
    assert_eq!(ripple.size, 100.0);
    assert_eq!((ripple.left, ripple.top), (0.0, -30.0));
    let css = ripple.css();
    assert!(css.contains("width: 100px"));
    assert!(css.contains("top: -30px"));
    assert!(css.contains("transform: scale(0)"));
}

#[test]
fn cursor_eases_towards_the_pointer() {
    let mut cursor = CursorFollower::default();
    cursor.set_target(Vec2::new(100.0, 0.0));
    let first = cursor.step();
    assert!((first.x - 100.0 * CURSOR_SMOOTHING).abs() < 1e-4);
    let mut last = first;
    for _ in 0..200 {
        last = cursor.step();
    }
    assert!(approx(last, Vec2::new(100.0, 0.0)));
    assert!(approx(
        cursor.draw_position(),
        Vec2::new(100.0 - CURSOR_RADIUS_PX, -CURSOR_RADIUS_PX)
    ));
}

#[test]
fn cursor_only_on_wide_viewports() {
    assert!(!cursor_enabled(1024.0, 1024.0));
    assert!(cursor_enabled(1025.0, 1024.0));
    assert!(!cursor_enabled(375.0, 1024.0));
}
