// Host-side tests for the tween engine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod easing {
    include!("../src/core/easing.rs");
}
mod tween {
    include!("../src/core/tween.rs");
}

use easing::Ease;
use tween::*;

fn x_of(set: &TweenSet, h: Handle) -> f32 {
    set.transform(h).unwrap().x
}

#[test]
fn tween_reaches_its_target_exactly() {
    let mut set = TweenSet::new();
    let h = set.register(Transform::default());
    let id = set.to(h, &[(Channel::X, 100.0)], 1.0, Ease::Power2Out, 0.0).unwrap();

    let report = set.step(0.5);
    assert_eq!(report.dirty.as_slice(), &[h]);
    let mid = x_of(&set, h);
    assert!(mid > 50.0 && mid < 100.0, "power2.out is past halfway: {mid}");

    let report = set.step(0.6);
    assert_eq!(x_of(&set, h), 100.0);
    assert_eq!(report.completed.as_slice(), &[id]);
    assert!(set.is_idle());
}

#[test]
fn new_tween_on_busy_channel_continues_from_current_value() {
    let mut set = TweenSet::new();
    let h = set.register(Transform::default());
    let first = set.to(h, &[(Channel::X, 100.0)], 1.0, Ease::None, 0.0).unwrap();
    set.step(0.5);
    let mid = x_of(&set, h);
    assert!((mid - 50.0).abs() < 1e-3);

    set.to(h, &[(Channel::X, -50.0)], 1.0, Ease::None, 0.0).unwrap();
    let report = set.step(0.0);
    assert_eq!(report.killed.as_slice(), &[first]);
    assert!((x_of(&set, h) - mid).abs() < 1e-3, "no jump on overwrite");

    set.step(0.5);
    assert!((x_of(&set, h) - (mid - 50.0)).abs() < 1e-3);
    let report = set.step(0.5);
    assert_eq!(x_of(&set, h), -50.0);
    assert!(!report.completed.contains(&first));
}

#[test]
fn partially_overwritten_group_still_completes() {
    let mut set = TweenSet::new();
    let h = set.register(Transform::default());
    let group = set
        .to(h, &[(Channel::X, 10.0), (Channel::Scale, 2.0)], 1.0, Ease::None, 0.0)
        .unwrap();
    set.to(h, &[(Channel::X, 0.0)], 0.5, Ease::None, 0.0).unwrap();
    let report = set.step(0.1);
    assert!(report.killed.is_empty());

    let report = set.step(1.0);
    assert!(report.completed.contains(&group));
    assert_eq!(set.transform(h).unwrap().scale, 2.0);
    assert_eq!(x_of(&set, h), 0.0);
}

#[test]
fn set_cancels_the_running_channel() {
    let mut set = TweenSet::new();
    let h = set.register(Transform::default());
    set.to(h, &[(Channel::X, 100.0)], 1.0, Ease::None, 0.0);
    assert!(set.set(h, Channel::X, 5.0));
    assert!(set.is_idle());
    set.step(1.0);
    assert_eq!(x_of(&set, h), 5.0);
}

#[test]
fn from_to_renders_the_start_state_before_the_delay() {
    let mut set = TweenSet::new();
    let h = set.register(Transform::default());
    set.from_to(
        h,
        &[(Channel::Opacity, 0.0), (Channel::Y, -20.0)],
        &[(Channel::Opacity, 1.0), (Channel::Y, 0.0)],
        0.5,
        Ease::None,
        0.5,
    );
    let t = set.transform(h).unwrap();
    assert_eq!((t.opacity, t.y), (0.0, -20.0));

    let report = set.step(0.25);
    assert!(report.dirty.is_empty(), "still waiting out the delay");
    assert_eq!(set.transform(h).unwrap().opacity, 0.0);

    set.step(0.5);
    let t = set.transform(h).unwrap();
    assert!((t.opacity - 0.5).abs() < 1e-3);
    assert!((t.y + 10.0).abs() < 1e-3);

    set.step(1.0);
    let t = set.transform(h).unwrap();
    assert_eq!((t.opacity, t.y), (1.0, 0.0));
}

#[test]
fn zero_duration_jumps_to_the_end() {
    let mut set = TweenSet::new();
    let h = set.register(Transform::default());
    let id = set.to(h, &[(Channel::Scale, 3.0)], 0.0, Ease::Power2Out, 0.0).unwrap();
    let report = set.step(0.0);
    assert_eq!(set.transform(h).unwrap().scale, 3.0);
    assert_eq!(report.completed.as_slice(), &[id]);
}

#[test]
fn unregister_drops_tweens_and_frees_the_slot() {
    let mut set = TweenSet::new();
    let a = set.register(Transform::default());
    let b = set.register(Transform::default());
    set.to(a, &[(Channel::X, 1.0)], 1.0, Ease::None, 0.0);
    set.unregister(a);
    assert!(set.is_idle());
    assert!(set.transform(a).is_none());
    assert!(set.to(a, &[(Channel::X, 1.0)], 1.0, Ease::None, 0.0).is_none());

    let c = set.register(Transform::default());
    assert_eq!(c, a);
    assert_ne!(c, b);
}

#[test]
fn transform_css_orders_functions_and_sums_parallax() {
    let mut t = Transform::default();
    assert_eq!(
        t.to_css(),
        "translate3d(0.00px, 0.00px, 0px) rotateX(0.00deg) rotateY(0.00deg) scale(1.0000)"
    );
    t.y = 10.0;
    t.parallax_y = -25.0;
    t.rotation_x = 3.5;
    t.perspective = Some(1000.0);
    assert_eq!(
        t.to_css(),
        "perspective(1000px) translate3d(0.00px, -15.00px, 0px) rotateX(3.50deg) rotateY(0.00deg) scale(1.0000)"
    );
}

#[test]
fn opacity_css_is_clamped() {
    let mut t = Transform::default();
    t.opacity = 1.4;
    assert_eq!(t.opacity_css(), "1.000");
    t.opacity = -0.2;
    assert_eq!(t.opacity_css(), "0.000");
}

#[test]
fn channels_round_trip_through_transform() {
    let channels = [
        Channel::X,
        Channel::Y,
        Channel::Scale,
        Channel::RotationX,
        Channel::RotationY,
        Channel::Opacity,
        Channel::ParallaxY,
    ];
    let mut t = Transform::default();
    for (i, &c) in channels.iter().enumerate() {
        t.set(c, i as f32 + 0.5);
    }
    for (i, &c) in channels.iter().enumerate() {
        assert_eq!(t.get(c), i as f32 + 0.5);
    }
}
