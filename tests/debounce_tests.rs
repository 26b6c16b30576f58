// Host-side tests for the resize debouncer.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod debounce {
    include!("../src/core/debounce.rs");
}

use debounce::*;

/// Replays events at the given millisecond offsets against a fake clock and
/// returns how many times the debounced action ran. Every event leaves its
/// timer armed, as if the host never cancelled anything.
fn replay(events_ms: &[i32]) -> u64 {
    let mut d = Debouncer::new();
    let mut timers: Vec<(i32, Ticket)> = Vec::new();
    for &at in events_ms {
        // Fire whatever fell due before this event
        timers.sort_by_key(|&(due, _)| due);
        let (due, later): (Vec<_>, Vec<_>) = timers.into_iter().partition(|&(d, _)| d <= at);
        timers = later;
        for (_, ticket) in due {
            d.fire(ticket);
        }
        timers.push((at + RESIZE_QUIET_MS, d.schedule()));
    }
    timers.sort_by_key(|&(due, _)| due);
    for (_, ticket) in timers {
        d.fire(ticket);
    }
    d.fired()
}

#[test]
fn burst_inside_quiet_period_runs_once() {
    let burst: Vec<i32> = (0..10).map(|i| i * 20).collect();
    assert_eq!(replay(&burst), 1);
}

#[test]
fn separated_bursts_run_once_each() {
    let mut events: Vec<i32> = (0..5).map(|i| i * 30).collect();
    events.extend((0..5).map(|i| 1_000 + i * 30));
    assert_eq!(replay(&events), 2);
}

#[test]
fn stale_tickets_never_fire() {
    let mut d = Debouncer::new();
    let first = d.schedule();
    let second = d.schedule();
    assert!(!d.fire(first));
    assert!(d.is_pending());
    assert!(d.fire(second));
    assert!(!d.is_pending());
    assert!(!d.fire(second), "a ticket fires at most once");
    assert_eq!(d.fired(), 1);
}

#[test]
fn single_event_fires_after_quiet_period() {
    assert_eq!(replay(&[0]), 1);
    assert_eq!(RESIZE_QUIET_MS, 250);
}
