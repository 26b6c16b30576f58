use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Default)]
struct LoopInner {
    raf_id: Cell<Option<i32>>,
    stopped: Cell<bool>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl LoopInner {
    fn request(&self) {
        let Some(w) = web::window() else {
            self.stopped.set(true);
            return;
        };
        let callback = self.callback.borrow();
        let Some(cb) = callback.as_ref() else {
            return;
        };
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => self.raf_id.set(Some(id)),
            Err(e) => {
                log::error!("[frame] requestAnimationFrame failed: {:?}", e);
                self.stopped.set(true);
            }
        }
    }

    fn cancel(&self) {
        self.stopped.set(true);
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

/// Owner of a self-rescheduling `requestAnimationFrame` loop.
///
/// Dropping the handle (or calling [`LoopHandle::cancel`]) cancels the
/// pending frame and releases the frame closure.
pub struct LoopHandle {
    inner: Rc<LoopInner>,
}

impl LoopHandle {
    pub fn is_running(&self) -> bool {
        !self.inner.stopped.get()
    }

    pub fn cancel(&self) {
        self.inner.cancel();
        self.inner.callback.borrow_mut().take();
    }
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Run `tick` once per display frame with the elapsed seconds since the
/// previous frame. The loop ends when `tick` returns false.
pub fn start_loop(mut tick: impl FnMut(f32) -> bool + 'static) -> LoopHandle {
    let inner = Rc::new(LoopInner::default());
    let weak: Weak<LoopInner> = Rc::downgrade(&inner);
    let mut last = Instant::now();
    let closure = Closure::wrap(Box::new(move |_timestamp: f64| {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        inner.raf_id.set(None);
        if inner.stopped.get() {
            return;
        }
        let now = Instant::now();
        let dt = (now - last).as_secs_f32();
        last = now;
        if tick(dt) {
            inner.request();
        } else {
            inner.stopped.set(true);
        }
    }) as Box<dyn FnMut(f64)>);
    *inner.callback.borrow_mut() = Some(closure);
    inner.request();
    LoopHandle { inner }
}
