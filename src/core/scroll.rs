use super::easing::Ease;

pub const ANCHOR_OFFSET_PX: f64 = 80.0;
pub const ANCHOR_SCROLL_SEC: f32 = 1.0;

/// Target selector for an in-page link, or `None` for bare `#` and empty
/// hrefs that should keep their default behavior.
pub fn anchor_target(href: &str) -> Option<&str> {
    let href = href.trim();
    if href.is_empty() || href == "#" || !href.starts_with('#') {
        return None;
    }
    Some(href)
}

/// Animated window scroll from one offset to another.
#[derive(Clone, Debug)]
pub struct ScrollTo {
    from: f64,
    to: f64,
    elapsed: f32,
    duration: f32,
    ease: Ease,
}

impl ScrollTo {
    /// Scroll so the element whose top sits at `target_doc_top` ends up
    /// `ANCHOR_OFFSET_PX` below the viewport top, clamped at the page start.
    pub fn to_anchor(current: f64, target_doc_top: f64) -> Self {
        Self::new(
            current,
            (target_doc_top - ANCHOR_OFFSET_PX).max(0.0),
            ANCHOR_SCROLL_SEC,
            Ease::Power3InOut,
        )
    }

    pub fn new(from: f64, to: f64, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration,
            ease,
        }
    }

    pub fn destination(&self) -> f64 {
        self.to
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn step(&mut self, dt: f32) -> f64 {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration.max(0.0));
        if self.duration <= 0.0 || self.is_finished() {
            return self.to;
        }
        let k = self.ease.apply(self.elapsed / self.duration) as f64;
        self.from + (self.to - self.from) * k
    }
}
