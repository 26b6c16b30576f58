use crate::anim::Animator;
use crate::constants::*;
use crate::core::pointer::{
    card_tilt, logo_tilt, magnetic_offset, shape_follow_duration, shape_offset, CursorFollower,
    Ripple, CARD_PERSPECTIVE_PX,
};
use crate::core::{Channel, Ease, Handle};
use crate::dom::{self, Listener};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const POWER2: Ease = Ease::Power2Out;
const SPRING: Ease = Ease::elastic_out(SPRING_AMPLITUDE, SPRING_PERIOD);
const BUTTON_SPRING: Ease = Ease::elastic_out(SPRING_AMPLITUDE, BUTTON_SPRING_PERIOD);

/// Elements that react to the pointer anywhere on the page. One document
/// listener updates all of them.
struct GlobalTargets {
    animator: Animator,
    logo: Option<Handle>,
    shapes: Vec<Handle>,
    cursor: Option<Rc<RefCell<CursorFollower>>>,
}

impl GlobalTargets {
    fn on_move(&self, ev: &web::MouseEvent) {
        let pointer = dom::pointer_position(ev);
        let viewport = dom::viewport();
        if let Some(logo) = self.logo {
            let (rx, ry) = logo_tilt(pointer, viewport);
            self.animator.to(
                logo,
                &[(Channel::RotationX, rx), (Channel::RotationY, ry)],
                SETTLE_SEC,
                POWER2,
            );
        }
        for (i, &shape) in self.shapes.iter().enumerate() {
            let offset = shape_offset(pointer, viewport, i);
            self.animator.to(
                shape,
                &[(Channel::X, offset.x), (Channel::Y, offset.y)],
                shape_follow_duration(i),
                POWER2,
            );
        }
        if let Some(cursor) = &self.cursor {
            cursor.borrow_mut().set_target(pointer);
        }
    }
}

/// Hover, tilt, magnetic and ripple micro-interactions.
pub struct PointerEffects {
    shapes: Vec<Handle>,
    _listeners: Vec<Listener>,
}

impl PointerEffects {
    pub fn attach(
        document: &web::Document,
        animator: &Animator,
        cursor: Option<Rc<RefCell<CursorFollower>>>,
    ) -> Self {
        let mut listeners = Vec::new();

        let logo = document
            .get_element_by_id(LOGO_ID)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            .map(|el| animator.register(&el));
        let shapes: Vec<Handle> = dom::query_all(document, SHAPE_SELECTOR)
            .iter()
            .map(|el| animator.register(el))
            .collect();
        let global = Rc::new(GlobalTargets {
            animator: animator.clone(),
            logo,
            shapes: shapes.clone(),
            cursor,
        });
        listeners.push(Listener::typed(document, "mousemove", move |ev: web::MouseEvent| {
            global.on_move(&ev)
        }));

        for link in dom::query_all(document, MAGNETIC_SELECTOR) {
            wire_magnetic(&mut listeners, animator, link);
        }
        for card in dom::query_all(document, GLASS_CARD_SELECTOR) {
            wire_glass_card(&mut listeners, animator, card);
        }
        for button in dom::query_all(document, BUTTON_SELECTOR) {
            wire_button(&mut listeners, animator, button);
        }
        for input in dom::query_all(document, FORM_INPUT_SELECTOR) {
            wire_focus_scale(&mut listeners, animator, input);
        }

        log::info!(
            "[pointer] logo={} shapes={} listeners={}",
            logo.is_some(),
            shapes.len(),
            listeners.len()
        );
        Self {
            shapes,
            _listeners: listeners,
        }
    }

    /// Animator handles of the floating shapes, in document order.
    pub fn shape_handles(&self) -> &[Handle] {
        &self.shapes
    }
}

fn hover_scale(
    listeners: &mut Vec<Listener>,
    animator: &Animator,
    el: &web::HtmlElement,
    handle: Handle,
    scale: f32,
    leave_ease: Ease,
) {
    let a = animator.clone();
    listeners.push(Listener::new(el, "mouseenter", move |_| {
        a.to(handle, &[(Channel::Scale, scale)], QUICK_SEC, POWER2);
    }));
    let a = animator.clone();
    listeners.push(Listener::new(el, "mouseleave", move |_| {
        a.to(handle, &[(Channel::Scale, 1.0)], QUICK_SEC, leave_ease);
    }));
}

fn wire_magnetic(listeners: &mut Vec<Listener>, animator: &Animator, link: web::HtmlElement) {
    let handle = animator.register(&link);
    let a = animator.clone();
    let el = link.clone();
    listeners.push(Listener::typed(&link, "mousemove", move |ev: web::MouseEvent| {
        let offset = magnetic_offset(dom::pointer_position(&ev), &dom::client_rect(&el));
        a.to(
            handle,
            &[(Channel::X, offset.x), (Channel::Y, offset.y)],
            QUICK_SEC,
            POWER2,
        );
    }));
    let a = animator.clone();
    listeners.push(Listener::new(&link, "mouseleave", move |_| {
        a.to(handle, &[(Channel::X, 0.0), (Channel::Y, 0.0)], SETTLE_SEC, SPRING);
    }));
}

fn wire_glass_card(listeners: &mut Vec<Listener>, animator: &Animator, card: web::HtmlElement) {
    let handle = animator.register(&card);
    hover_scale(listeners, animator, &card, handle, CARD_HOVER_SCALE, POWER2);

    let a = animator.clone();
    let el = card.clone();
    listeners.push(Listener::typed(&card, "mousemove", move |ev: web::MouseEvent| {
        let (rx, ry) = card_tilt(dom::pointer_position(&ev), &dom::client_rect(&el));
        a.set_perspective(handle, Some(CARD_PERSPECTIVE_PX));
        a.to(
            handle,
            &[(Channel::RotationX, rx), (Channel::RotationY, ry)],
            QUICK_SEC,
            POWER2,
        );
    }));
    let a = animator.clone();
    listeners.push(Listener::new(&card, "mouseleave", move |_| {
        a.to(
            handle,
            &[(Channel::RotationX, 0.0), (Channel::RotationY, 0.0)],
            SETTLE_SEC,
            SPRING,
        );
    }));
}

fn wire_button(listeners: &mut Vec<Listener>, animator: &Animator, button: web::HtmlElement) {
    let handle = animator.register(&button);
    hover_scale(listeners, animator, &button, handle, BUTTON_HOVER_SCALE, BUTTON_SPRING);

    let a = animator.clone();
    let el = button.clone();
    listeners.push(Listener::typed(&button, "click", move |ev: web::MouseEvent| {
        spawn_ripple(&a, &el, &ev);
    }));
}

fn spawn_ripple(animator: &Animator, button: &web::HtmlElement, ev: &web::MouseEvent) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let Some(span) = document
        .create_element("span")
        .ok()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    let ripple = Ripple::at(dom::pointer_position(ev), &dom::client_rect(button));
    _ = span.set_attribute("style", &ripple.css());
    if button.append_child(&span).is_err() {
        return;
    }
    let handle = animator.register(&span);
    let id = animator.from_to(
        handle,
        &[(Channel::Scale, 0.0), (Channel::Opacity, 1.0)],
        &[(Channel::Scale, RIPPLE_END_SCALE), (Channel::Opacity, 0.0)],
        RIPPLE_SEC,
        POWER2,
        0.0,
    );
    let a = animator.clone();
    let cleanup = move || {
        a.unregister(handle);
        span.remove();
    };
    match id {
        Some(id) => animator.on_complete(id, cleanup),
        None => cleanup(),
    }
}

fn wire_focus_scale(listeners: &mut Vec<Listener>, animator: &Animator, input: web::HtmlElement) {
    let handle = animator.register(&input);
    let a = animator.clone();
    listeners.push(Listener::new(&input, "focus", move |_| {
        a.to(handle, &[(Channel::Scale, INPUT_FOCUS_SCALE)], QUICK_SEC, POWER2);
    }));
    let a = animator.clone();
    listeners.push(Listener::new(&input, "blur", move |_| {
        a.to(handle, &[(Channel::Scale, 1.0)], QUICK_SEC, POWER2);
    }));
}

/// Grow the custom cursor while it hovers interactive elements.
pub fn wire_cursor_hover(
    document: &web::Document,
    animator: &Animator,
    cursor_handle: Handle,
) -> Vec<Listener> {
    let mut listeners = Vec::new();
    for el in dom::query_all(document, CURSOR_HOVER_SELECTOR) {
        let a = animator.clone();
        listeners.push(Listener::new(&el, "mouseenter", move |_| {
            a.to(cursor_handle, &[(Channel::Scale, CURSOR_HOVER_SCALE)], QUICK_SEC, POWER2);
        }));
        let a = animator.clone();
        listeners.push(Listener::new(&el, "mouseleave", move |_| {
            a.to(cursor_handle, &[(Channel::Scale, 1.0)], QUICK_SEC, POWER2);
        }));
    }
    listeners
}
