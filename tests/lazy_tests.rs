// Host-side tests for deferred image sources.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod lazy {
    include!("../src/core/lazy.rs");
}

use lazy::*;

#[test]
fn blank_or_missing_sources_are_not_tracked() {
    assert!(LazyImage::new(None).is_none());
    assert!(LazyImage::new(Some(String::new())).is_none());
    assert!(LazyImage::new(Some("   ".into())).is_none());
}

#[test]
fn source_is_promoted_exactly_once() {
    let mut img = LazyImage::new(Some("team.jpg".into())).unwrap();
    assert_eq!(
        img.state(),
        &ImageState::Deferred {
            src: "team.jpg".into()
        }
    );
    assert_eq!(img.on_visible(false), None);
    assert!(!img.is_loaded());

    assert_eq!(img.on_visible(true).as_deref(), Some("team.jpg"));
    assert!(img.is_loaded());
    assert_eq!(img.on_visible(true), None);
    assert_eq!(img.on_visible(false), None);
}
