use crate::constants::{LAZY_IMAGE_SELECTOR, LAZY_SRC_ATTR};
use crate::core::lazy::LazyImage;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Deferred {
    img: web::HtmlImageElement,
    state: LazyImage,
}

impl Deferred {
    /// Swap in the real source; true when a load was started.
    fn promote(&mut self, visible: bool) -> bool {
        let Some(src) = self.state.on_visible(visible) else {
            return false;
        };
        self.img.set_src(&src);
        _ = self.img.remove_attribute(LAZY_SRC_ATTR);
        true
    }
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// Loads `img[data-src]` images the first time they scroll into view.
pub struct LazyImages {
    observer: Option<web::IntersectionObserver>,
    _callback: Option<ObserverCallback>,
}

impl LazyImages {
    pub fn attach(document: &web::Document) -> Self {
        let images: Vec<Deferred> = dom::query_all(document, LAZY_IMAGE_SELECTOR)
            .into_iter()
            .filter_map(|el| {
                let state = LazyImage::new(el.get_attribute(LAZY_SRC_ATTR))?;
                let img = el.dyn_into::<web::HtmlImageElement>().ok()?;
                Some(Deferred { img, state })
            })
            .collect();
        if images.is_empty() {
            return Self {
                observer: None,
                _callback: None,
            };
        }
        let count = images.len();
        let images = Rc::new(RefCell::new(images));

        let list = images.clone();
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                let mut list = list.borrow_mut();
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(image) = list.iter_mut().find(|d| {
                        let el: &web::Element = d.img.as_ref();
                        *el == target
                    }) else {
                        continue;
                    };
                    if image.promote(entry.is_intersecting()) {
                        observer.unobserve(&target);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let observer = match web::IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("[lazy] IntersectionObserver unavailable ({:?}); loading eagerly", e);
                for image in images.borrow_mut().iter_mut() {
                    image.promote(true);
                }
                return Self {
                    observer: None,
                    _callback: None,
                };
            }
        };
        for image in images.borrow().iter() {
            observer.observe(&image.img);
        }
        log::info!("[lazy] observing {count} images");
        Self {
            observer: Some(observer),
            _callback: Some(callback),
        }
    }
}

impl Drop for LazyImages {
    fn drop(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}
