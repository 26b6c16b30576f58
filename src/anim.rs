use crate::core::tween::Props;
use crate::core::{Channel, Ease, Handle, Transform, TweenId, TweenSet};
use crate::dom;
use crate::frame::{self, LoopHandle};
use fnv::FnvHashMap;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use web_sys as web;

struct Entry {
    el: web::HtmlElement,
    // Only write the properties a tween has touched, so untouched elements
    // keep their stylesheet transform/opacity.
    writes_transform: Cell<bool>,
    writes_opacity: Cell<bool>,
}

#[derive(Default)]
struct AnimatorInner {
    tweens: RefCell<TweenSet>,
    entries: RefCell<Vec<Option<Entry>>>,
    on_complete: RefCell<FnvHashMap<TweenId, Box<dyn FnOnce()>>>,
    frame: RefCell<Option<LoopHandle>>,
}

/// Shared tween driver for every animated element on the page.
///
/// The frame loop only runs while at least one tween is active.
#[derive(Clone, Default)]
pub struct Animator {
    inner: Rc<AnimatorInner>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for `el`, reusing the existing one when several behaviors
    /// animate the same element.
    pub fn register(&self, el: &web::HtmlElement) -> Handle {
        let existing = self
            .inner
            .entries
            .borrow()
            .iter()
            .position(|e| e.as_ref().is_some_and(|e| e.el == *el));
        if let Some(handle) = existing {
            return handle;
        }
        let handle = self.inner.tweens.borrow_mut().register(Transform::default());
        let mut entries = self.inner.entries.borrow_mut();
        if entries.len() <= handle {
            entries.resize_with(handle + 1, || None);
        }
        entries[handle] = Some(Entry {
            el: el.clone(),
            writes_transform: Cell::new(false),
            writes_opacity: Cell::new(false),
        });
        handle
    }

    pub fn unregister(&self, handle: Handle) {
        self.inner.tweens.borrow_mut().unregister(handle);
        if let Some(slot) = self.inner.entries.borrow_mut().get_mut(handle) {
            *slot = None;
        }
    }

    pub fn transform(&self, handle: Handle) -> Option<Transform> {
        self.inner.tweens.borrow().transform(handle).copied()
    }

    pub fn is_idle(&self) -> bool {
        self.inner.tweens.borrow().is_idle()
    }

    pub fn to(
        &self,
        handle: Handle,
        props: &[(Channel, f32)],
        duration: f32,
        ease: Ease,
    ) -> Option<TweenId> {
        self.to_delayed(handle, props, duration, ease, 0.0)
    }

    pub fn to_delayed(
        &self,
        handle: Handle,
        props: &[(Channel, f32)],
        duration: f32,
        ease: Ease,
        delay: f32,
    ) -> Option<TweenId> {
        self.mark_channels(handle, props);
        let id = self
            .inner
            .tweens
            .borrow_mut()
            .to(handle, props, duration, ease, delay)?;
        self.ensure_running();
        Some(id)
    }

    pub fn from_to(
        &self,
        handle: Handle,
        from: &[(Channel, f32)],
        to: &[(Channel, f32)],
        duration: f32,
        ease: Ease,
        delay: f32,
    ) -> Option<TweenId> {
        self.mark_channels(handle, from);
        self.mark_channels(handle, to);
        let id = self
            .inner
            .tweens
            .borrow_mut()
            .from_to(handle, from, to, duration, ease, delay)?;
        self.render(handle);
        self.ensure_running();
        Some(id)
    }

    /// Write values immediately, cancelling tweens on those channels.
    pub fn set(&self, handle: Handle, props: &[(Channel, f32)]) {
        self.mark_channels(handle, props);
        {
            let mut tweens = self.inner.tweens.borrow_mut();
            for &(channel, value) in props {
                tweens.set(handle, channel, value);
            }
        }
        self.render(handle);
    }

    pub fn set_perspective(&self, handle: Handle, perspective: Option<f32>) {
        self.inner
            .tweens
            .borrow_mut()
            .set_perspective(handle, perspective);
    }

    /// Run `callback` once every channel of tween `id` has finished. Never
    /// runs if the tween is overwritten first.
    pub fn on_complete(&self, id: TweenId, callback: impl FnOnce() + 'static) {
        self.inner
            .on_complete
            .borrow_mut()
            .insert(id, Box::new(callback));
    }

    pub fn stop(&self) {
        if let Some(frame) = self.inner.frame.borrow_mut().take() {
            frame.cancel();
        }
        self.inner.on_complete.borrow_mut().clear();
    }

    fn mark_channels(&self, handle: Handle, props: &[(Channel, f32)]) {
        let entries = self.inner.entries.borrow();
        let Some(entry) = entries.get(handle).and_then(Option::as_ref) else {
            return;
        };
        for (channel, _) in props {
            match channel {
                Channel::Opacity => entry.writes_opacity.set(true),
                _ => entry.writes_transform.set(true),
            }
        }
    }

    fn ensure_running(&self) {
        let running = self
            .inner
            .frame
            .borrow()
            .as_ref()
            .is_some_and(LoopHandle::is_running);
        if running {
            return;
        }
        let weak: Weak<AnimatorInner> = Rc::downgrade(&self.inner);
        let handle = frame::start_loop(move |dt| match weak.upgrade() {
            Some(inner) => Animator { inner }.tick(dt),
            None => false,
        });
        *self.inner.frame.borrow_mut() = Some(handle);
    }

    fn tick(&self, dt: f32) -> bool {
        let report = self.inner.tweens.borrow_mut().step(dt);
        for &handle in &report.dirty {
            self.render(handle);
        }
        let callbacks: Vec<Box<dyn FnOnce()>> = {
            let mut pending = self.inner.on_complete.borrow_mut();
            for id in &report.killed {
                pending.remove(id);
            }
            report
                .completed
                .iter()
                .filter_map(|id| pending.remove(id))
                .collect()
        };
        for callback in callbacks {
            callback();
        }
        !self.is_idle()
    }

    fn render(&self, handle: Handle) {
        let Some(t) = self.transform(handle) else {
            return;
        };
        let entries = self.inner.entries.borrow();
        let Some(entry) = entries.get(handle).and_then(Option::as_ref) else {
            return;
        };
        if entry.writes_transform.get() {
            dom::set_style(&entry.el, "transform", &t.to_css());
        }
        if entry.writes_opacity.get() {
            dom::set_style(&entry.el, "opacity", &t.opacity_css());
        }
    }
}

/// Build a property list for one call site.
#[inline]
pub fn props(list: &[(Channel, f32)]) -> Props {
    list.iter().copied().collect()
}
