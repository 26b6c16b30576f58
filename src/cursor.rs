use crate::anim::Animator;
use crate::constants::{CURSOR_CLASS, CURSOR_MIN_VIEWPORT_WIDTH};
use crate::core::pointer::{cursor_enabled, CursorFollower};
use crate::dom::{self, Listener};
use crate::events::pointer::wire_cursor_hover;
use crate::frame::{self, LoopHandle};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const CURSOR_STYLE: &str = "position: fixed; width: 20px; height: 20px; border-radius: 50%; \
    background: rgba(102, 126, 234, 0.3); pointer-events: none; z-index: 9999; \
    mix-blend-mode: difference; transition: transform 0.2s ease; display: block;";

/// Smoothed custom cursor dot, desktop only.
pub struct Cursor {
    el: web::HtmlElement,
    follower: Rc<RefCell<CursorFollower>>,
    frame: LoopHandle,
    _hover: Vec<Listener>,
}

impl Cursor {
    /// Creates the cursor element when the viewport is wide enough.
    pub fn attach(document: &web::Document, animator: &Animator) -> Option<Self> {
        let width = dom::viewport().x as f64;
        if !cursor_enabled(width, CURSOR_MIN_VIEWPORT_WIDTH) {
            log::info!("[cursor] disabled at width {width}");
            return None;
        }
        let body = document.body()?;
        let el = document
            .create_element("div")
            .ok()?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        el.set_class_name(CURSOR_CLASS);
        _ = el.set_attribute("style", CURSOR_STYLE);
        body.append_child(&el).ok()?;

        let follower = Rc::new(RefCell::new(CursorFollower::default()));
        let f = follower.clone();
        let dot = el.clone();
        let frame = frame::start_loop(move |_dt| {
            let pos = {
                let mut f = f.borrow_mut();
                f.step();
                f.draw_position()
            };
            dom::set_style(&dot, "left", &format!("{:.2}px", pos.x));
            dom::set_style(&dot, "top", &format!("{:.2}px", pos.y));
            true
        });

        let handle = animator.register(&el);
        let hover = wire_cursor_hover(document, animator, handle);
        Some(Self {
            el,
            follower,
            frame,
            _hover: hover,
        })
    }

    /// Shared follower the page-wide pointer listener writes targets into.
    pub fn follower(&self) -> Rc<RefCell<CursorFollower>> {
        self.follower.clone()
    }
}

impl Drop for Cursor {
    fn drop(&mut self) {
        self.frame.cancel();
        self.el.remove();
    }
}
