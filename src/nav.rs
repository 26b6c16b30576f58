use crate::anim::Animator;
use crate::constants::*;
use crate::core::nav::{link_stagger_delay, MenuState, NavMenu};
use crate::core::{Channel, Ease, Handle};
use crate::dom::{self, Listener};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct MenuParts {
    hamburger: web::HtmlElement,
    link_list: web::HtmlElement,
    // Links inside the mobile menu, animated in when it opens
    menu_links: Vec<Handle>,
}

struct NavShared {
    navbar: web::HtmlElement,
    menu: RefCell<NavMenu>,
    parts: Option<MenuParts>,
    animator: Animator,
}

impl NavShared {
    fn apply_menu_state(&self, state: MenuState) {
        let Some(parts) = &self.parts else {
            return;
        };
        let open = state == MenuState::Open;
        _ = parts.hamburger.class_list().toggle_with_force(ACTIVE_CLASS, open);
        _ = parts.link_list.class_list().toggle_with_force(ACTIVE_CLASS, open);
        if open {
            for (i, &handle) in parts.menu_links.iter().enumerate() {
                self.animator.from_to(
                    handle,
                    &[(Channel::Opacity, 0.0), (Channel::X, NAV_LINK_ENTER_X)],
                    &[(Channel::Opacity, 1.0), (Channel::X, 0.0)],
                    NAV_LINK_ENTER_SEC,
                    Ease::Power2Out,
                    link_stagger_delay(i),
                );
            }
        }
    }

    fn toggle(&self) {
        let state = self.menu.borrow_mut().toggle();
        log::info!("[nav] menu {:?}", state);
        self.apply_menu_state(state);
    }

    fn close(&self) {
        if self.menu.borrow_mut().close() {
            self.apply_menu_state(MenuState::Closed);
        }
    }

    fn on_scroll(&self) {
        let flip = self.menu.borrow_mut().on_scroll(dom::scroll_y());
        if let Some(scrolled) = flip {
            _ = self
                .navbar
                .class_list()
                .toggle_with_force(SCROLLED_CLASS, scrolled);
        }
    }
}

/// Navigation bar: compact style on scroll plus the mobile menu.
pub struct NavController {
    _shared: Rc<NavShared>,
    _listeners: Vec<Listener>,
}

impl NavController {
    /// `None` when the page has no `#navbar`.
    pub fn attach(document: &web::Document, animator: &Animator) -> Option<Self> {
        let navbar = match dom::element_by_id(document, NAVBAR_ID, "HtmlElement") {
            Ok(el) => el,
            Err(e) => {
                log::warn!("[nav] {e}");
                return None;
            }
        };
        let parts = Self::menu_parts(document, animator);
        let shared = Rc::new(NavShared {
            navbar,
            menu: RefCell::new(NavMenu::new()),
            parts,
            animator: animator.clone(),
        });

        let mut listeners = Vec::new();
        if let Some(window) = web::window() {
            let s = shared.clone();
            listeners.push(Listener::new(&window, "scroll", move |_| s.on_scroll()));
        }

        if let Some(parts) = &shared.parts {
            let s = shared.clone();
            listeners.push(Listener::new(&parts.hamburger, "click", move |_| s.toggle()));
        }

        let s = shared.clone();
        listeners.push(Listener::new(document, "click", move |ev| {
            let inside = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Node>().ok())
                .is_some_and(|node| s.navbar.contains(Some(&node)));
            if s.menu.borrow_mut().on_document_click(inside) {
                s.apply_menu_state(MenuState::Closed);
            }
        }));

        for link in dom::query_all(document, NAV_LINK_SELECTOR) {
            let s = shared.clone();
            listeners.push(Listener::new(&link, "click", move |_| s.close()));
        }

        shared.on_scroll();
        Some(Self {
            _shared: shared,
            _listeners: listeners,
        })
    }

    fn menu_parts(document: &web::Document, animator: &Animator) -> Option<MenuParts> {
        let hamburger = document
            .get_element_by_id(HAMBURGER_ID)?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        let Some(link_list) = document
            .get_element_by_id(NAV_LINKS_ID)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        else {
            log::warn!("[nav] #{HAMBURGER_ID} without #{NAV_LINKS_ID}; menu disabled");
            return None;
        };
        let menu_links = dom::query_within(&link_list, NAV_LINK_SELECTOR)
            .iter()
            .map(|link| animator.register(link))
            .collect();
        Some(MenuParts {
            hamburger,
            link_list,
            menu_links,
        })
    }
}
