// Host-side tests for navigation bar state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod nav {
    include!("../src/core/nav.rs");
}

use nav::*;

#[test]
fn scrolled_only_strictly_past_threshold() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(SCROLLED_THRESHOLD_PX));
    assert!(is_scrolled(SCROLLED_THRESHOLD_PX + 0.5));
    assert!(is_scrolled(2400.0));
}

#[test]
fn on_scroll_reports_only_flips() {
    let mut menu = NavMenu::new();
    assert_eq!(menu.on_scroll(50.0), None);
    assert_eq!(menu.on_scroll(150.0), Some(true));
    assert_eq!(menu.on_scroll(900.0), None);
    assert!(menu.is_scrolled());
    assert_eq!(menu.on_scroll(100.0), Some(false));
    assert_eq!(menu.last_scroll_top(), 100.0);
    assert!(!menu.is_scrolled());
}

#[test]
fn toggle_parity_decides_open_state() {
    for n in 0..10 {
        let mut menu = NavMenu::new();
        for _ in 0..n {
            menu.toggle();
        }
        assert_eq!(menu.is_open(), n % 2 == 1, "after {n} toggles");
    }
}

#[test]
fn toggle_returns_the_new_state() {
    let mut menu = NavMenu::new();
    assert_eq!(menu.state(), MenuState::Closed);
    assert_eq!(menu.toggle(), MenuState::Open);
    assert_eq!(menu.toggle(), MenuState::Closed);
}

#[test]
fn outside_click_closes_an_open_menu() {
    let mut menu = NavMenu::new();
    menu.toggle();
    assert!(!menu.on_document_click(true), "clicks inside the bar are ignored");
    assert!(menu.is_open());
    assert!(menu.on_document_click(false));
    assert!(!menu.is_open());
    assert!(!menu.on_document_click(false), "already closed");
}

#[test]
fn close_reports_whether_anything_changed() {
    let mut menu = NavMenu::new();
    assert!(!menu.close());
    menu.toggle();
    assert!(menu.close());
    assert_eq!(menu.state(), MenuState::Closed);
}

#[test]
fn menu_links_enter_in_sequence() {
    assert_eq!(link_stagger_delay(0), 0.0);
    assert!((link_stagger_delay(3) - 0.3).abs() < 1e-6);
    assert!(link_stagger_delay(4) > link_stagger_delay(3));
}
