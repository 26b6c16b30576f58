use super::easing::Ease;

/// Where a scroll trigger fires, written as `"<element edge> <viewport edge>"`,
/// e.g. `"top 85%"`: when the element's top edge reaches 85% of the viewport
/// height measured from the top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerStart {
    pub element_fraction: f64,
    pub viewport_fraction: f64,
}

impl TriggerStart {
    pub const fn new(element_fraction: f64, viewport_fraction: f64) -> Self {
        Self {
            element_fraction,
            viewport_fraction,
        }
    }

    pub fn parse(spec: &str) -> Option<Self> {
        let mut parts = spec.split_whitespace();
        let element = parse_edge(parts.next()?)?;
        let viewport = parse_edge(parts.next()?)?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self::new(element, viewport))
    }
}

fn parse_edge(word: &str) -> Option<f64> {
    match word {
        "top" => Some(0.0),
        "center" => Some(0.5),
        "bottom" => Some(1.0),
        _ => {
            let pct = word.strip_suffix('%')?.parse::<f64>().ok()?;
            Some(pct / 100.0)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TogglePolicy {
    /// Play on enter, reverse when scrolling back above the start.
    PlayReverse,
    /// Fire on the first enter only.
    Once,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerEvent {
    Enter,
    LeaveBack,
}

/// Start-line crossing detector.
///
/// The trigger line is cached in document coordinates by [`refresh`]; each
/// scroll update only compares it with the current scroll offset.
///
/// [`refresh`]: ScrollTrigger::refresh
#[derive(Clone, Debug)]
pub struct ScrollTrigger {
    start: TriggerStart,
    policy: TogglePolicy,
    line: f64,
    active: bool,
    spent: bool,
}

impl ScrollTrigger {
    pub fn new(start: TriggerStart, policy: TogglePolicy) -> Self {
        Self {
            start,
            policy,
            line: f64::INFINITY,
            active: false,
            spent: false,
        }
    }

    /// Recompute the document offset of the trigger point from the element's
    /// top edge (in document coordinates) and its height.
    pub fn refresh(&mut self, element_doc_top: f64, element_height: f64) {
        self.line = element_doc_top + self.start.element_fraction * element_height;
    }

    pub fn line(&self) -> f64 {
        self.line
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_spent(&self) -> bool {
        self.spent
    }

    /// Scroll offset at which the trigger point meets the viewport marker.
    pub fn start_scroll(&self, viewport_height: f64) -> f64 {
        self.line - self.start.viewport_fraction * viewport_height
    }

    pub fn update(&mut self, scroll_y: f64, viewport_height: f64) -> Option<TriggerEvent> {
        if self.spent {
            return None;
        }
        let past = scroll_y >= self.start_scroll(viewport_height);
        match (past, self.active) {
            (true, false) => {
                self.active = true;
                if self.policy == TogglePolicy::Once {
                    self.spent = true;
                }
                Some(TriggerEvent::Enter)
            }
            (false, true) => {
                self.active = false;
                Some(TriggerEvent::LeaveBack)
            }
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Idle,
    Forward,
    Backward,
}

/// Playhead for one reveal: `members` elements share a timeline, each
/// starting `stagger` seconds after the previous one.
///
/// The start delay only applies when playing forward from the beginning;
/// reversing runs back from wherever the playhead currently is.
#[derive(Clone, Debug)]
pub struct Timeline {
    time: f32,
    duration: f32,
    stagger: f32,
    members: usize,
    delay: f32,
    delay_left: f32,
    ease: Ease,
    direction: Direction,
}

impl Timeline {
    pub fn new(duration: f32, ease: Ease) -> Self {
        Self {
            time: 0.0,
            duration: duration.max(0.0),
            stagger: 0.0,
            members: 1,
            delay: 0.0,
            delay_left: 0.0,
            ease,
            direction: Direction::Idle,
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn with_stagger(mut self, members: usize, stagger: f32) -> Self {
        self.members = members.max(1);
        self.stagger = stagger.max(0.0);
        self
    }

    pub fn total(&self) -> f32 {
        self.duration + self.stagger * (self.members - 1) as f32
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_running(&self) -> bool {
        self.direction != Direction::Idle
    }

    pub fn play(&mut self) {
        if self.time <= 0.0 {
            self.delay_left = self.delay;
        }
        self.direction = Direction::Forward;
    }

    pub fn reverse(&mut self) {
        self.delay_left = 0.0;
        self.direction = Direction::Backward;
    }

    /// Advance the playhead. Returns true while it moved this step.
    pub fn step(&mut self, dt: f32) -> bool {
        let mut dt = dt.max(0.0);
        match self.direction {
            Direction::Idle => false,
            Direction::Forward => {
                if self.delay_left > 0.0 {
                    if dt < self.delay_left {
                        self.delay_left -= dt;
                        return false;
                    }
                    dt -= self.delay_left;
                    self.delay_left = 0.0;
                }
                self.time = (self.time + dt).min(self.total());
                if self.time >= self.total() {
                    self.direction = Direction::Idle;
                }
                true
            }
            Direction::Backward => {
                self.time = (self.time - dt).max(0.0);
                if self.time <= 0.0 {
                    self.direction = Direction::Idle;
                }
                true
            }
        }
    }

    /// Eased progress of member `index`, in [0, 1] for monotonic eases.
    pub fn member_progress(&self, index: usize) -> f32 {
        let local = self.time - self.stagger * index as f32;
        if self.duration <= 0.0 {
            return if local >= 0.0 && self.time > 0.0 { 1.0 } else { 0.0 };
        }
        self.ease.apply((local / self.duration).clamp(0.0, 1.0))
    }
}

/// Fraction of the way from `start` to `end` for a scroll offset.
#[inline]
pub fn scroll_progress(scroll_y: f64, start: f64, end: f64) -> f64 {
    if end <= start {
        return if scroll_y >= end { 1.0 } else { 0.0 };
    }
    ((scroll_y - start) / (end - start)).clamp(0.0, 1.0)
}

/// Smoothly follows a scroll-linked progress value, settling in roughly
/// `lag` seconds.
#[derive(Clone, Copy, Debug)]
pub struct Scrub {
    lag: f32,
    value: f32,
}

impl Scrub {
    pub fn new(lag: f32) -> Self {
        Self { lag, value: 0.0 }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn step(&mut self, target: f32, dt: f32) -> f32 {
        if self.lag <= 0.0 {
            self.value = target;
            return self.value;
        }
        let tau = self.lag / 3.0;
        let alpha = 1.0 - (-dt.max(0.0) / tau).exp();
        self.value += (target - self.value) * alpha;
        if (target - self.value).abs() < 1e-4 {
            self.value = target;
        }
        self.value
    }

    pub fn is_settled(&self, target: f32) -> bool {
        (target - self.value).abs() < 1e-4
    }
}
