use crate::constants::ANCHOR_SELECTOR;
use crate::core::scroll::{anchor_target, ScrollTo};
use crate::dom::{self, Listener};
use crate::frame::{self, LoopHandle};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Smooth scrolling for in-page `#fragment` links.
pub struct AnchorScroll {
    active: Rc<RefCell<Option<LoopHandle>>>,
    _listeners: Vec<Listener>,
}

impl AnchorScroll {
    pub fn attach(document: &web::Document) -> Self {
        let active: Rc<RefCell<Option<LoopHandle>>> = Rc::new(RefCell::new(None));
        let listeners: Vec<Listener> = dom::query_all(document, ANCHOR_SELECTOR)
            .into_iter()
            .map(|link| {
                let doc = document.clone();
                let active = active.clone();
                let anchor = link.clone();
                Listener::new(&link, "click", move |ev| {
                    let href = anchor.get_attribute("href").unwrap_or_default();
                    let Some(selector) = anchor_target(&href) else {
                        return;
                    };
                    ev.prevent_default();
                    let Some(target) = dom::query_one(&doc, selector) else {
                        log::debug!("[anchors] no element for {selector}");
                        return;
                    };
                    let mut scroll = ScrollTo::to_anchor(dom::scroll_y(), dom::document_top(&target));
                    log::info!("[anchors] {selector} -> {:.0}", scroll.destination());
                    // Replacing the handle cancels a scroll still in flight
                    *active.borrow_mut() = Some(frame::start_loop(move |dt| {
                        let y = scroll.step(dt);
                        if let Some(w) = web::window() {
                            w.scroll_to_with_x_and_y(0.0, y);
                        }
                        !scroll.is_finished()
                    }));
                })
            })
            .collect();
        Self {
            active,
            _listeners: listeners,
        }
    }
}

impl Drop for AnchorScroll {
    fn drop(&mut self) {
        self.active.borrow_mut().take();
    }
}
