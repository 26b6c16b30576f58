// Page selectors and interaction tuning.
//
// Constants that belong to a single behavior (wave shapes, counter timing,
// form texts) live next to that behavior in `core`; this file holds the page
// wiring: which elements to look for and how strongly to react.

// Navigation
pub const NAVBAR_ID: &str = "navbar";
pub const HAMBURGER_ID: &str = "hamburger";
pub const NAV_LINKS_ID: &str = "navLinks";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const ACTIVE_CLASS: &str = "active";
pub const SCROLLED_CLASS: &str = "scrolled";

// Pointer effects
pub const MAGNETIC_SELECTOR: &str = ".magnetic-link";
pub const LOGO_ID: &str = "logo3d";
pub const GLASS_CARD_SELECTOR: &str = ".glass-card";
pub const BUTTON_SELECTOR: &str = ".glass-btn, .btn-primary, .btn-secondary";
pub const FORM_INPUT_SELECTOR: &str = ".form-input";
pub const SHAPE_SELECTOR: &str = ".shape";
pub const CURSOR_CLASS: &str = "custom-cursor";
pub const CURSOR_HOVER_SELECTOR: &str = "a, button, .glass-btn, .glass-card";
pub const CURSOR_MIN_VIEWPORT_WIDTH: f64 = 1024.0;

pub const CARD_HOVER_SCALE: f32 = 1.02;
pub const BUTTON_HOVER_SCALE: f32 = 1.05;
pub const INPUT_FOCUS_SCALE: f32 = 1.02;
pub const CURSOR_HOVER_SCALE: f32 = 2.0;
pub const RIPPLE_END_SCALE: f32 = 2.0;

// Durations (seconds)
pub const QUICK_SEC: f32 = 0.3;
pub const SETTLE_SEC: f32 = 0.5;
pub const RIPPLE_SEC: f32 = 0.6;
pub const PAGE_FADE_SEC: f32 = 0.5;
pub const NAV_LINK_ENTER_SEC: f32 = 0.3;
pub const NAV_LINK_ENTER_X: f32 = -20.0;

// Elastic settle used when an element springs back to rest
pub const SPRING_AMPLITUDE: f32 = 1.0;
pub const SPRING_PERIOD: f32 = 0.3;
pub const BUTTON_SPRING_PERIOD: f32 = 0.5;

// Canvas
pub const WAVE_CANVAS_ID: &str = "liquidCanvas";

// Scroll reveals
pub const SERVICE_CARD_SELECTOR: &str = ".service-card";
pub const SERVICE_CARD_START: &str = "top 85%";
pub const SERVICE_CARD_SEC: f32 = 0.6;
pub const SERVICE_CARD_STAGGER_SEC: f32 = 0.1;
pub const ABOUT_TEXT_SELECTOR: &str = ".about-text";
pub const ABOUT_VISUAL_SELECTOR: &str = ".about-visual";
pub const ABOUT_START: &str = "top 80%";
pub const ABOUT_SEC: f32 = 0.8;
pub const ABOUT_SLIDE_PX: f32 = 50.0;
pub const INFO_CARD_SELECTOR: &str = ".info-card, .info-card-large";
pub const INFO_CARD_START: &str = "top 85%";
pub const INFO_CARD_SEC: f32 = 0.5;
pub const INFO_CARD_STAGGER_SEC: f32 = 0.15;
pub const STAT_SELECTOR: &str = ".stat-number";
pub const STAT_TARGET_ATTR: &str = "data-target";
pub const STAT_START: &str = "top 80%";

// Contact form
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const FORM_MESSAGE_ID: &str = "formMessage";
pub const SUBMIT_BUTTON_SELECTOR: &str = ".form-submit-btn";
pub const SUBMIT_LABEL_SELECTOR: &str = "span";
pub const FORM_MESSAGE_DROP_PX: f32 = -20.0;

// Lazy images
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
pub const LAZY_SRC_ATTR: &str = "data-src";

// Anchors
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
