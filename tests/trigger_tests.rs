// Host-side tests for scroll triggers, reveal timelines and scrubbing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod easing {
    include!("../src/core/easing.rs");
}
mod trigger {
    include!("../src/core/trigger.rs");
}

use easing::Ease;
use trigger::*;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn start_positions_parse() {
    assert_eq!(TriggerStart::parse("top 85%"), Some(TriggerStart::new(0.0, 0.85)));
    assert_eq!(
        TriggerStart::parse("center center"),
        Some(TriggerStart::new(0.5, 0.5))
    );
    assert_eq!(TriggerStart::parse("bottom top"), Some(TriggerStart::new(1.0, 0.0)));
    assert_eq!(TriggerStart::parse("top"), None);
    assert_eq!(TriggerStart::parse("middle 50%"), None);
    assert_eq!(TriggerStart::parse("top 85% extra"), None);
}

#[test]
fn play_reverse_fires_on_each_crossing() {
    let mut t = ScrollTrigger::new(TriggerStart::new(0.0, 0.85), TogglePolicy::PlayReverse);
    t.refresh(1000.0, 200.0);
    assert_eq!(t.line(), 1000.0);
    let vh = 800.0;
    assert!((t.start_scroll(vh) - 320.0).abs() < 1e-9);

    assert_eq!(t.update(319.0, vh), None);
    assert_eq!(t.update(321.0, vh), Some(TriggerEvent::Enter));
    assert_eq!(t.update(600.0, vh), None);
    assert!(t.is_active());
    assert_eq!(t.update(100.0, vh), Some(TriggerEvent::LeaveBack));
    assert_eq!(t.update(50.0, vh), None);
    assert_eq!(t.update(400.0, vh), Some(TriggerEvent::Enter));
}

#[test]
fn once_policy_fires_a_single_enter() {
    let mut t = ScrollTrigger::new(TriggerStart::new(0.0, 0.8), TogglePolicy::Once);
    t.refresh(500.0, 40.0);
    assert_eq!(t.update(0.0, 400.0), None);
    assert_eq!(t.update(200.0, 400.0), Some(TriggerEvent::Enter));
    assert!(t.is_spent());
    assert_eq!(t.update(0.0, 400.0), None);
    assert_eq!(t.update(200.0, 400.0), None);
}

#[test]
fn unmeasured_trigger_never_fires() {
    let mut t = ScrollTrigger::new(TriggerStart::new(0.0, 1.0), TogglePolicy::PlayReverse);
    assert_eq!(t.update(1.0e9, 800.0), None);
}

#[test]
fn element_edge_moves_the_line() {
    let mut t = ScrollTrigger::new(TriggerStart::new(0.5, 0.5), TogglePolicy::PlayReverse);
    t.refresh(1000.0, 200.0);
    assert_eq!(t.line(), 1100.0);
    t.refresh(2000.0, 200.0);
    assert_eq!(t.line(), 2100.0, "refresh follows layout changes");
}

#[test]
fn delay_applies_before_first_forward_run() {
    let mut tl = Timeline::new(1.0, Ease::None).with_delay(0.5);
    tl.play();
    assert!(!tl.step(0.25));
    assert_eq!(tl.member_progress(0), 0.0);
    assert!(tl.step(0.5));
    assert!(close(tl.member_progress(0), 0.25));
    tl.step(1.0);
    assert_eq!(tl.member_progress(0), 1.0);
    assert!(!tl.is_running());
}

#[test]
fn reverse_runs_back_from_the_playhead() {
    let mut tl = Timeline::new(1.0, Ease::None).with_delay(1.0);
    tl.play();
    tl.step(1.5);
    assert!(close(tl.member_progress(0), 0.5));
    tl.reverse();
    assert_eq!(tl.direction(), Direction::Backward);
    tl.step(0.25);
    assert!(close(tl.member_progress(0), 0.25));

    // Playing again mid-way resumes immediately
    tl.play();
    tl.step(0.1);
    assert!(close(tl.member_progress(0), 0.35));

    tl.reverse();
    tl.step(5.0);
    assert_eq!(tl.member_progress(0), 0.0);
    assert_eq!(tl.direction(), Direction::Idle);
}

#[test]
fn stagger_offsets_each_member() {
    let mut tl = Timeline::new(0.5, Ease::None).with_stagger(3, 0.15);
    assert!(close(tl.total(), 0.8));
    tl.play();
    tl.step(0.3);
    assert!(close(tl.member_progress(0), 0.6));
    assert!(close(tl.member_progress(1), 0.3));
    assert_eq!(tl.member_progress(2), 0.0);
    tl.step(1.0);
    assert!((0..3).all(|i| close(tl.member_progress(i), 1.0)));
}

#[test]
fn scroll_progress_is_clamped() {
    assert_eq!(scroll_progress(50.0, 0.0, 100.0), 0.5);
    assert_eq!(scroll_progress(-10.0, 0.0, 100.0), 0.0);
    assert_eq!(scroll_progress(500.0, 0.0, 100.0), 1.0);
    assert_eq!(scroll_progress(0.0, 0.0, 0.0), 1.0);
}

#[test]
fn scrub_lags_then_settles() {
    let mut s = Scrub::new(1.5);
    let first = s.step(1.0, 1.0 / 60.0);
    assert!(first > 0.0 && first < 0.1);
    let mut elapsed = 1.0 / 60.0;
    while elapsed < 1.5 {
        s.step(1.0, 1.0 / 60.0);
        elapsed += 1.0 / 60.0;
    }
    assert!(s.value() > 0.9, "{}", s.value());
    for _ in 0..600 {
        s.step(1.0, 1.0 / 60.0);
    }
    assert!(s.is_settled(1.0));
    assert_eq!(s.value(), 1.0);
}

#[test]
fn scrub_without_lag_tracks_exactly() {
    let mut s = Scrub::new(0.0);
    assert_eq!(s.step(0.4, 0.016), 0.4);
}
