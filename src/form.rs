use crate::anim::Animator;
use crate::constants::*;
use crate::core::form::{
    collect_fields, ContactForm, FormFields, MESSAGE_HIDE_MS, PENDING_LABEL, SUBMIT_DELAY_MS,
};
use crate::core::{Channel, Ease, Handle};
use crate::dom::{self, Listener, Timeout};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

struct FormShared {
    form: web::HtmlFormElement,
    message: Option<web::HtmlElement>,
    message_handle: Option<Handle>,
    state: RefCell<ContactForm>,
    hide_timer: RefCell<Option<Timeout>>,
    animator: Animator,
}

impl FormShared {
    fn submit_button(&self) -> Option<web::HtmlButtonElement> {
        self.form
            .query_selector(SUBMIT_BUTTON_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
    }

    fn submit_label(&self) -> Option<web::Element> {
        self.submit_button()?
            .query_selector(SUBMIT_LABEL_SELECTOR)
            .ok()
            .flatten()
    }

    fn read_fields(&self) -> FormFields {
        let Ok(data) = web::FormData::new_with_form(&self.form) else {
            return FormFields::default();
        };
        let Ok(Some(iter)) = js_sys::try_iter(&data) else {
            return FormFields::default();
        };
        let entries = iter.filter_map(|entry| {
            let pair: js_sys::Array = entry.ok()?.dyn_into().ok()?;
            Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
        });
        collect_fields(entries)
    }

    fn on_submit(self: &Rc<Self>, ev: web::Event) {
        ev.prevent_default();
        let fields = self.read_fields();
        let label = self.submit_label();
        let current = label
            .as_ref()
            .and_then(|l| l.text_content())
            .unwrap_or_default();
        let Some(submission) = self.state.borrow_mut().begin(fields, &current) else {
            log::info!("[form] submission already pending; ignored");
            return;
        };
        log::info!(
            "[form] submit #{} fields={:?}",
            submission.id,
            submission.fields.keys().collect::<Vec<_>>()
        );
        if let Some(label) = &label {
            label.set_text_content(Some(PENDING_LABEL));
        }
        if let Some(button) = self.submit_button() {
            button.set_disabled(true);
        }

        let weak: Weak<Self> = Rc::downgrade(self);
        let id = submission.id;
        spawn_local(async move {
            dom::sleep_ms(SUBMIT_DELAY_MS).await;
            if let Some(shared) = weak.upgrade() {
                shared.finish(id);
            }
        });
    }

    fn finish(self: &Rc<Self>, id: u64) {
        let Some(done) = self.state.borrow_mut().complete(id) else {
            return;
        };
        if let Some(message) = &self.message {
            message.set_class_name(done.message_class);
            message.set_text_content(Some(done.message_text));
            dom::set_style(message, "display", "block");
        }
        self.form.reset();
        if let Some(label) = self.submit_label() {
            label.set_text_content(Some(&done.restore_label));
        }
        if let Some(button) = self.submit_button() {
            button.set_disabled(false);
        }
        log::info!("[form] submission #{id} sent");

        let weak: Weak<Self> = Rc::downgrade(self);
        let ticket = done.hide_ticket;
        let timer = Timeout::schedule(MESSAGE_HIDE_MS, move || {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            if shared.state.borrow_mut().should_hide(ticket) {
                if let Some(message) = &shared.message {
                    dom::set_style(message, "display", "none");
                }
            }
        });
        // Replacing the previous timer clears it
        *self.hide_timer.borrow_mut() = timer;

        if let Some(handle) = self.message_handle {
            self.animator.from_to(
                handle,
                &[(Channel::Opacity, 0.0), (Channel::Y, FORM_MESSAGE_DROP_PX)],
                &[(Channel::Opacity, 1.0), (Channel::Y, 0.0)],
                SETTLE_SEC,
                Ease::Power2Out,
                0.0,
            );
        }
    }
}

/// `#contactForm` with a simulated send: no request leaves the page.
pub struct ContactFormController {
    shared: Rc<FormShared>,
    _submit: Listener,
}

impl ContactFormController {
    pub fn attach(document: &web::Document, animator: &Animator) -> Option<Self> {
        let form = match dom::element_by_id::<web::HtmlFormElement>(
            document,
            CONTACT_FORM_ID,
            "HtmlFormElement",
        ) {
            Ok(form) => form,
            Err(e) => {
                log::debug!("[form] {e}");
                return None;
            }
        };
        let message = document
            .get_element_by_id(FORM_MESSAGE_ID)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
        if message.is_none() {
            log::warn!("[form] no #{FORM_MESSAGE_ID}; success notice will not show");
        }
        let message_handle = message.as_ref().map(|m| animator.register(m));
        let shared = Rc::new(FormShared {
            form,
            message,
            message_handle,
            state: RefCell::new(ContactForm::new()),
            hide_timer: RefCell::new(None),
            animator: animator.clone(),
        });
        let s = shared.clone();
        let submit = Listener::new(&shared.form, "submit", move |ev| s.on_submit(ev));
        Some(Self {
            shared,
            _submit: submit,
        })
    }
}

impl Drop for ContactFormController {
    fn drop(&mut self) {
        self.shared.hide_timer.borrow_mut().take();
    }
}
