// Host-side tests for the statistic count-up.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod easing {
    include!("../src/core/easing.rs");
}
mod counter {
    include!("../src/core/counter.rs");
}

use counter::*;
use easing::Ease;

fn run(mut anim: CounterAnimation, dts: impl IntoIterator<Item = f32>) -> Vec<i64> {
    dts.into_iter().map(|dt| anim.step(dt)).collect()
}

#[test]
fn ends_exactly_on_target() {
    let mut anim = CounterAnimation::new(150);
    let mut last = 0;
    while !anim.is_finished() {
        last = anim.step(1.0 / 60.0);
    }
    assert_eq!(last, 150);
    assert_eq!(anim.step(0.5), 150, "stays on target once finished");
}

#[test]
fn displayed_value_never_decreases() {
    let shown = run(CounterAnimation::new(98), std::iter::repeat(0.016).take(200));
    assert!(shown.windows(2).all(|w| w[0] <= w[1]), "{shown:?}");
    assert!(shown.iter().all(|&v| (0..=98).contains(&v)));
    assert_eq!(*shown.last().unwrap(), 98);
}

#[test]
fn uneven_frames_still_land_on_target() {
    let dts = [0.3, 0.001, 0.9, 0.05, 0.0, 2.5];
    let shown = run(CounterAnimation::new(5000), dts);
    assert!(shown.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(*shown.last().unwrap(), 5000);
}

#[test]
fn starts_from_zero() {
    let anim = CounterAnimation::new(250);
    assert_eq!(anim.value_at(0.0), 0);
    assert_eq!(anim.value_at(COUNTER_DURATION_SEC), 250);
    assert_eq!(anim.value_at(COUNTER_DURATION_SEC * 3.0), 250);
}

#[test]
fn intermediate_values_round_up() {
    let anim = CounterAnimation::with_timing(10, 1.0, Ease::None);
    assert_eq!(anim.value_at(0.01), 1);
    assert_eq!(anim.value_at(0.5), 5);
    assert_eq!(anim.value_at(0.51), 6);
}

#[test]
fn zero_target_and_zero_duration() {
    assert_eq!(CounterAnimation::new(0).value_at(1.0), 0);
    let instant = CounterAnimation::with_timing(42, 0.0, Ease::Power2Out);
    assert_eq!(instant.value_at(0.0), 42);
    assert!(instant.is_finished());
}
