use crate::core::debounce::{Debouncer, RESIZE_QUIET_MS};
use crate::dom::{Listener, Timeout};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

struct Pending {
    debouncer: Debouncer,
    timer: Option<Timeout>,
}

/// Runs `on_settle` once the window has stopped resizing for a quiet period.
pub struct ResizeDebouncer {
    pending: Rc<RefCell<Pending>>,
    _listener: Option<Listener>,
}

impl ResizeDebouncer {
    pub fn attach(on_settle: impl Fn() + 'static) -> Self {
        let pending = Rc::new(RefCell::new(Pending {
            debouncer: Debouncer::new(),
            timer: None,
        }));
        let on_settle: Rc<dyn Fn()> = Rc::new(on_settle);
        let listener = web::window().map(|window| {
            let weak: Weak<RefCell<Pending>> = Rc::downgrade(&pending);
            Listener::new(&window, "resize", move |_| {
                let Some(pending) = weak.upgrade() else {
                    return;
                };
                let ticket = pending.borrow_mut().debouncer.schedule();
                let weak = Rc::downgrade(&pending);
                let settle = on_settle.clone();
                let timer = Timeout::schedule(RESIZE_QUIET_MS, move || {
                    let Some(pending) = weak.upgrade() else {
                        return;
                    };
                    let fire = pending.borrow_mut().debouncer.fire(ticket);
                    if fire {
                        log::info!("[resize] settled; refreshing triggers");
                        settle();
                    }
                });
                pending.borrow_mut().timer = timer;
            })
        });
        Self {
            pending,
            _listener: listener,
        }
    }
}

impl Drop for ResizeDebouncer {
    fn drop(&mut self) {
        self.pending.borrow_mut().timer.take();
    }
}
