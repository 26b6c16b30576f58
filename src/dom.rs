use crate::core::pointer::Rect;
use crate::core::MarkupError;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// All elements matching `selector`, in document order. Invalid selectors
/// yield an empty list.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {selector:?}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn query_within(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn query_one(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Typed lookup by id for elements a behavior cannot work without.
pub fn element_by_id<T: JsCast>(
    document: &web::Document,
    id: &'static str,
    expected: &'static str,
) -> Result<T, MarkupError> {
    document
        .get_element_by_id(id)
        .ok_or(MarkupError::MissingElement(id))?
        .dyn_into::<T>()
        .map_err(|_| MarkupError::WrongElementType {
            selector: id,
            expected,
        })
}

pub fn viewport() -> Vec2 {
    let Some(w) = web::window() else {
        return Vec2::ZERO;
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Vec2::new(width as f32, height as f32)
}

pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

#[inline]
pub fn client_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

/// Top edge of `el` in document coordinates.
#[inline]
pub fn document_top(el: &web::Element) -> f64 {
    el.get_bounding_client_rect().top() + scroll_y()
}

/// Layout position of `el`'s top edge in document coordinates, ignoring CSS
/// transforms applied by animations.
pub fn layout_top(el: &web::HtmlElement) -> f64 {
    let mut top = 0.0;
    let mut current = Some(el.clone());
    while let Some(node) = current {
        top += node.offset_top() as f64;
        current = node
            .offset_parent()
            .and_then(|p| p.dyn_into::<web::HtmlElement>().ok());
    }
    top
}

#[inline]
pub fn pointer_position(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Size the canvas backing store to the window's inner size.
pub fn fit_canvas_to_window(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let size = viewport();
    let w_px = (size.x as u32).max(1);
    let h_px = (size.y as u32).max(1);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (w_px, h_px)
}

/// Event listener that is removed again when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        _ = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            callback,
        }
    }

    /// Listener whose handler receives the concrete event type; events of
    /// any other type are ignored.
    pub fn typed<E: JsCast + 'static>(
        target: &web::EventTarget,
        event: &'static str,
        mut handler: impl FnMut(E) + 'static,
    ) -> Self {
        Self::new(target, event, move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Pending `setTimeout` callback; cleared when cancelled or dropped.
pub struct Timeout {
    id: i32,
}

impl Timeout {
    pub fn schedule(ms: i32, callback: impl FnOnce() + 'static) -> Option<Self> {
        let window = web::window()?;
        let callback = Closure::once_into_js(callback);
        match window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms)
        {
            Ok(id) => Some(Self { id }),
            Err(e) => {
                log::error!("[dom] setTimeout failed: {:?}", e);
                None
            }
        }
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_timeout_with_handle(self.id);
        }
    }
}

/// Resolve after `ms` milliseconds.
pub async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(w) = web::window() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}
