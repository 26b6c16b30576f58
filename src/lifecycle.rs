use crate::dom::Listener;
use web_sys as web;

/// Runs `on_unload` when the page is really going away.
///
/// A `pagehide` with `persisted` set means the page is entering the
/// back/forward cache and may be shown again as-is, so everything stays
/// attached.
pub struct PageLifecycle {
    _pagehide: Listener,
}

impl PageLifecycle {
    pub fn attach(target: &web::EventTarget, mut on_unload: impl FnMut() + 'static) -> Self {
        let pagehide = Listener::typed(target, "pagehide", move |ev: web::PageTransitionEvent| {
            if ev.persisted() {
                log::info!("[site] pagehide into back/forward cache; staying attached");
                return;
            }
            on_unload();
        });
        Self {
            _pagehide: pagehide,
        }
    }
}
