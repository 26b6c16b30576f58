#![cfg(target_arch = "wasm32")]
use crate::anim::Animator;
use crate::core::{Channel, Ease};
use crate::lifecycle::PageLifecycle;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub mod anim;
mod constants;
pub mod core;
mod cursor;
pub mod dom;
pub mod events;
mod form;
pub mod frame;
mod lazy;
pub mod lifecycle;
mod nav;
mod render;
mod resize;
mod reveal;

const BANNER: [(&str, &str); 3] = [
    (
        "%c\u{1F680} Phantom Cloud - Premium Website",
        "font-size: 20px; font-weight: bold; color: #667eea;",
    ),
    (
        "%cBuilt with precision and creativity",
        "font-size: 14px; color: #764ba2;",
    ),
    (
        "%cContact: phantomcloud26@gmail.com | +91 81284 58345",
        "font-size: 12px; color: #4facfe;",
    ),
];

/// Every behavior wired into the page. Dropping it detaches all of them.
struct Site {
    animator: Animator,
    _nav: Option<nav::NavController>,
    _cursor: Option<cursor::Cursor>,
    _pointer: events::pointer::PointerEffects,
    _waves: Option<render::WaveRenderer>,
    _reveal: Rc<reveal::RevealSystem>,
    _resize: resize::ResizeDebouncer,
    _form: Option<form::ContactFormController>,
    _lazy: lazy::LazyImages,
    _anchors: events::anchors::AnchorScroll,
}

impl Drop for Site {
    fn drop(&mut self) {
        self.animator.stop();
    }
}

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
    static LIFECYCLE: RefCell<Option<PageLifecycle>> = const { RefCell::new(None) };
}

fn print_banner() {
    for (text, css) in BANNER {
        web::console::log_2(&JsValue::from_str(text), &JsValue::from_str(css));
    }
}

fn fade_in_body(document: &web::Document, animator: &Animator) {
    let Some(body) = document.body() else {
        return;
    };
    let handle = animator.register(&body);
    animator.from_to(
        handle,
        &[(Channel::Opacity, 0.0)],
        &[(Channel::Opacity, 1.0)],
        constants::PAGE_FADE_SEC,
        Ease::Power2Out,
        0.0,
    );
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("phantom-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let animator = Animator::new();
    fade_in_body(&document, &animator);

    let nav = nav::NavController::attach(&document, &animator);
    // The cursor's follower is fed by the page-wide pointer listener
    let cursor = cursor::Cursor::attach(&document, &animator);
    let pointer = events::pointer::PointerEffects::attach(
        &document,
        &animator,
        cursor.as_ref().map(cursor::Cursor::follower),
    );
    let waves = match render::WaveRenderer::attach(&document) {
        Ok(waves) => waves,
        Err(e) => {
            log::warn!("[waves] disabled: {:?}", e);
            None
        }
    };
    let reveal = Rc::new(reveal::RevealSystem::attach(
        &document,
        &animator,
        pointer.shape_handles(),
    ));
    let weak_reveal = Rc::downgrade(&reveal);
    let resize = resize::ResizeDebouncer::attach(move || {
        if let Some(reveal) = weak_reveal.upgrade() {
            reveal.refresh();
        }
    });
    let form = form::ContactFormController::attach(&document, &animator);
    let lazy = lazy::LazyImages::attach(&document);
    let anchors = events::anchors::AnchorScroll::attach(&document);

    SITE.with(|site| {
        *site.borrow_mut() = Some(Site {
            animator,
            _nav: nav,
            _cursor: cursor,
            _pointer: pointer,
            _waves: waves,
            _reveal: reveal,
            _resize: resize,
            _form: form,
            _lazy: lazy,
            _anchors: anchors,
        });
    });

    let lifecycle = PageLifecycle::attach(&window, || {
        if let Some(site) = SITE.with(|site| site.borrow_mut().take()) {
            log::info!("[site] pagehide; detaching");
            drop(site);
        }
    });
    LIFECYCLE.with(|slot| *slot.borrow_mut() = Some(lifecycle));

    print_banner();
    Ok(())
}
