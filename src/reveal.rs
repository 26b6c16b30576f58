use crate::anim::{props, Animator};
use crate::constants::*;
use crate::core::counter::CounterAnimation;
use crate::core::easing::lerp;
use crate::core::markup::parse_counter_target;
use crate::core::pointer::{shape_scroll_distance, shape_scrub_lag};
use crate::core::trigger::{
    scroll_progress, Scrub, ScrollTrigger, Timeline, TogglePolicy, TriggerEvent, TriggerStart,
};
use crate::core::tween::Props;
use crate::core::{Channel, Ease, Handle};
use crate::dom::{self, Listener};
use crate::frame::{self, LoopHandle};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

/// Elements sharing one trigger and one (possibly staggered) timeline.
struct RevealBinding {
    trigger_el: web::HtmlElement,
    trigger: ScrollTrigger,
    timeline: Timeline,
    members: Vec<Handle>,
    from: Props,
    to: Props,
}

impl RevealBinding {
    fn render(&self, animator: &Animator) {
        for (i, &handle) in self.members.iter().enumerate() {
            let k = self.timeline.member_progress(i);
            let values: Props = self
                .from
                .iter()
                .zip(self.to.iter())
                .map(|(&(channel, a), &(_, b))| (channel, lerp(a, b, k)))
                .collect();
            animator.set(handle, &values);
        }
    }
}

struct CounterBinding {
    el: web::HtmlElement,
    trigger: ScrollTrigger,
    target: i64,
    running: Option<CounterAnimation>,
}

struct ShapeScroll {
    handle: Handle,
    distance: f32,
    scrub: Scrub,
}

#[derive(Default)]
struct RevealState {
    bindings: Vec<RevealBinding>,
    counters: Vec<CounterBinding>,
    shapes: Vec<ShapeScroll>,
    // Scroll offset at which the page has scrolled by its own height
    page_end: f64,
}

struct RevealShared {
    animator: Animator,
    state: RefCell<RevealState>,
    frame: RefCell<Option<LoopHandle>>,
}

impl RevealShared {
    fn refresh(&self) {
        let Some(document) = dom::window_document() else {
            return;
        };
        {
            let mut state = self.state.borrow_mut();
            for b in &mut state.bindings {
                let height = b.trigger_el.offset_height() as f64;
                b.trigger.refresh(dom::layout_top(&b.trigger_el), height);
            }
            for c in &mut state.counters {
                let height = c.el.offset_height() as f64;
                c.trigger.refresh(dom::layout_top(&c.el), height);
            }
            state.page_end = document
                .body()
                .map(|body| body.scroll_height() as f64)
                .unwrap_or(0.0);
        }
        self.on_scroll();
    }

    fn on_scroll(&self) {
        let scroll = dom::scroll_y();
        let viewport_h = dom::viewport().y as f64;
        let mut state = self.state.borrow_mut();
        for b in &mut state.bindings {
            match b.trigger.update(scroll, viewport_h) {
                Some(TriggerEvent::Enter) => b.timeline.play(),
                Some(TriggerEvent::LeaveBack) => b.timeline.reverse(),
                None => {}
            }
        }
        for c in &mut state.counters {
            if c.trigger.update(scroll, viewport_h) == Some(TriggerEvent::Enter) {
                log::info!("[reveal] counter -> {}", c.target);
                c.running = Some(CounterAnimation::new(c.target));
            }
        }
    }

    /// One animation frame. Returns true while anything is still moving.
    fn tick(&self, dt: f32) -> bool {
        let scroll = dom::scroll_y();
        let mut state = self.state.borrow_mut();
        let mut busy = false;

        for b in &mut state.bindings {
            if b.timeline.step(dt) {
                b.render(&self.animator);
            }
            busy |= b.timeline.is_running();
        }

        for c in &mut state.counters {
            let Some(anim) = c.running.as_mut() else {
                continue;
            };
            let shown = anim.step(dt);
            c.el.set_text_content(Some(&shown.to_string()));
            if anim.is_finished() {
                c.running = None;
            } else {
                busy = true;
            }
        }

        let progress = scroll_progress(scroll, 0.0, state.page_end) as f32;
        for s in &mut state.shapes {
            let k = s.scrub.step(progress, dt);
            self.animator.set(s.handle, &[(Channel::ParallaxY, s.distance * k)]);
            busy |= !s.scrub.is_settled(progress);
        }
        busy
    }
}

/// Scroll-driven entrances, counters and shape parallax.
pub struct RevealSystem {
    shared: Rc<RevealShared>,
    _listeners: Vec<Listener>,
}

impl RevealSystem {
    pub fn attach(document: &web::Document, animator: &Animator, shapes: &[Handle]) -> Self {
        let mut state = RevealState::default();

        for (i, card) in dom::query_all(document, SERVICE_CARD_SELECTOR)
            .into_iter()
            .enumerate()
        {
            let members = vec![animator.register(&card)];
            state.bindings.push(RevealBinding {
                trigger_el: card,
                trigger: ScrollTrigger::new(start(SERVICE_CARD_START), TogglePolicy::PlayReverse),
                timeline: Timeline::new(SERVICE_CARD_SEC, Ease::Power3Out)
                    .with_delay(i as f32 * SERVICE_CARD_STAGGER_SEC),
                members,
                from: props(&[
                    (Channel::Opacity, 0.0),
                    (Channel::Y, 60.0),
                    (Channel::Scale, 0.9),
                ]),
                to: props(&[(Channel::Opacity, 1.0), (Channel::Y, 0.0), (Channel::Scale, 1.0)]),
            });
        }

        for (selector, from_x) in [
            (ABOUT_TEXT_SELECTOR, -ABOUT_SLIDE_PX),
            (ABOUT_VISUAL_SELECTOR, ABOUT_SLIDE_PX),
        ] {
            let Some(el) = dom::query_one(document, selector) else {
                continue;
            };
            let members = vec![animator.register(&el)];
            state.bindings.push(RevealBinding {
                trigger_el: el,
                trigger: ScrollTrigger::new(start(ABOUT_START), TogglePolicy::PlayReverse),
                timeline: Timeline::new(ABOUT_SEC, Ease::Power3Out),
                members,
                from: props(&[(Channel::Opacity, 0.0), (Channel::X, from_x)]),
                to: props(&[(Channel::Opacity, 1.0), (Channel::X, 0.0)]),
            });
        }

        let info_cards = dom::query_all(document, INFO_CARD_SELECTOR);
        if let Some(first) = info_cards.first() {
            let members: Vec<Handle> = info_cards.iter().map(|c| animator.register(c)).collect();
            state.bindings.push(RevealBinding {
                trigger_el: first.clone(),
                trigger: ScrollTrigger::new(start(INFO_CARD_START), TogglePolicy::PlayReverse),
                timeline: Timeline::new(INFO_CARD_SEC, Ease::Power3Out)
                    .with_stagger(members.len(), INFO_CARD_STAGGER_SEC),
                members,
                from: props(&[
                    (Channel::Opacity, 0.0),
                    (Channel::Y, 30.0),
                    (Channel::Scale, 0.95),
                ]),
                to: props(&[(Channel::Opacity, 1.0), (Channel::Y, 0.0), (Channel::Scale, 1.0)]),
            });
        }

        for el in dom::query_all(document, STAT_SELECTOR) {
            let raw = el.get_attribute(STAT_TARGET_ATTR).unwrap_or_default();
            match parse_counter_target(&raw) {
                Ok(target) => state.counters.push(CounterBinding {
                    el,
                    trigger: ScrollTrigger::new(start(STAT_START), TogglePolicy::Once),
                    target,
                    running: None,
                }),
                Err(e) => log::warn!("[reveal] skipping counter: {e}"),
            }
        }

        state.shapes = shapes
            .iter()
            .enumerate()
            .map(|(i, &handle)| ShapeScroll {
                handle,
                distance: shape_scroll_distance(i),
                scrub: Scrub::new(shape_scrub_lag(i)),
            })
            .collect();

        for b in &state.bindings {
            b.render(animator);
        }
        log::info!(
            "[reveal] bindings={} counters={} shapes={}",
            state.bindings.len(),
            state.counters.len(),
            state.shapes.len()
        );

        let shared = Rc::new(RevealShared {
            animator: animator.clone(),
            state: RefCell::new(state),
            frame: RefCell::new(None),
        });

        let mut listeners = Vec::new();
        if let Some(window) = web::window() {
            let s = shared.clone();
            listeners.push(Listener::new(&window, "scroll", move |_| {
                s.on_scroll();
                ensure_running(&s);
            }));
        }

        let system = Self {
            shared,
            _listeners: listeners,
        };
        system.refresh();
        system
    }

    /// Re-measure every trigger line against the current layout.
    pub fn refresh(&self) {
        self.shared.refresh();
        ensure_running(&self.shared);
    }
}

impl Drop for RevealSystem {
    fn drop(&mut self) {
        if let Some(frame) = self.shared.frame.borrow_mut().take() {
            frame.cancel();
        }
    }
}

fn ensure_running(shared: &Rc<RevealShared>) {
    let running = shared
        .frame
        .borrow()
        .as_ref()
        .is_some_and(LoopHandle::is_running);
    if running {
        return;
    }
    let weak: Weak<RevealShared> = Rc::downgrade(shared);
    let handle = frame::start_loop(move |dt| weak.upgrade().is_some_and(|s| s.tick(dt)));
    *shared.frame.borrow_mut() = Some(handle);
}

fn start(spec: &str) -> TriggerStart {
    TriggerStart::parse(spec).unwrap_or_else(|| {
        log::warn!("[reveal] bad trigger start {spec:?}; using \"top bottom\"");
        TriggerStart::new(0.0, 1.0)
    })
}
