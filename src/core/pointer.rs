use glam::Vec2;

pub const MAGNETIC_PULL: f32 = 0.3;
pub const LOGO_MAX_TILT_DEG: f32 = 10.0;
pub const CARD_TILT_DIVISOR: f32 = 10.0;
pub const CARD_PERSPECTIVE_PX: f32 = 1000.0;
pub const CURSOR_SMOOTHING: f32 = 0.15;
pub const CURSOR_RADIUS_PX: f32 = 10.0;

/// Client-space bounding box of an element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.left + self.width * 0.5,
            self.top + self.height * 0.5,
        )
    }
}

/// Pointer position as a fraction of the viewport, 0.5 on degenerate axes.
#[inline]
pub fn normalized_pointer(pointer: Vec2, viewport: Vec2) -> Vec2 {
    let axis = |p: f32, size: f32| if size > 0.0 { p / size } else { 0.5 };
    Vec2::new(axis(pointer.x, viewport.x), axis(pointer.y, viewport.y))
}

/// Translation pulling a link towards the pointer.
#[inline]
pub fn magnetic_offset(pointer: Vec2, rect: &Rect) -> Vec2 {
    (pointer - rect.center()) * MAGNETIC_PULL
}

/// `(rotation_x, rotation_y)` in degrees for the logo, from a page-wide
/// pointer position.
#[inline]
pub fn logo_tilt(pointer: Vec2, viewport: Vec2) -> (f32, f32) {
    let m = (normalized_pointer(pointer, viewport) - Vec2::splat(0.5)) * 2.0;
    (-m.y * LOGO_MAX_TILT_DEG, m.x * LOGO_MAX_TILT_DEG)
}

/// `(rotation_x, rotation_y)` in degrees tilting a card towards the pointer.
#[inline]
pub fn card_tilt(pointer: Vec2, rect: &Rect) -> (f32, f32) {
    let local = pointer - rect.origin();
    let half = Vec2::new(rect.width, rect.height) * 0.5;
    (
        (local.y - half.y) / CARD_TILT_DIVISOR,
        (half.x - local.x) / CARD_TILT_DIVISOR,
    )
}

/// Parallax travel range of floating shape `index`; deeper shapes move more.
#[inline]
pub fn shape_range(index: usize) -> f32 {
    30.0 + index as f32 * 10.0
}

#[inline]
pub fn shape_offset(pointer: Vec2, viewport: Vec2, index: usize) -> Vec2 {
    (normalized_pointer(pointer, viewport) - Vec2::splat(0.5)) * shape_range(index)
}

#[inline]
pub fn shape_follow_duration(index: usize) -> f32 {
    1.0 + index as f32 * 0.2
}

/// Vertical distance shape `index` travels over the whole page scroll.
#[inline]
pub fn shape_scroll_distance(index: usize) -> f32 {
    -100.0 - index as f32 * 50.0
}

#[inline]
pub fn shape_scrub_lag(index: usize) -> f32 {
    1.0 + index as f32 * 0.5
}

/// Placement of a click ripple inside a button, relative to the button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub size: f32,
    pub left: f32,
    pub top: f32,
}

impl Ripple {
    pub fn at(pointer: Vec2, rect: &Rect) -> Self {
        let size = rect.width.max(rect.height);
        let local = pointer - rect.origin() - Vec2::splat(size * 0.5);
        Self {
            size,
            left: local.x,
            top: local.y,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "position: absolute; width: {s}px; height: {s}px; border-radius: 50%; \
             background: rgba(255, 255, 255, 0.5); top: {t}px; left: {l}px; \
             pointer-events: none; transform: scale(0);",
            s = self.size,
            t = self.top,
            l = self.left
        )
    }
}

/// Custom cursor dot easing towards the pointer every frame.
#[derive(Clone, Copy, Debug)]
pub struct CursorFollower {
    target: Vec2,
    display: Vec2,
    smoothing: f32,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new(CURSOR_SMOOTHING)
    }
}

impl CursorFollower {
    pub fn new(smoothing: f32) -> Self {
        Self {
            target: Vec2::ZERO,
            display: Vec2::ZERO,
            smoothing: smoothing.clamp(0.0, 1.0),
        }
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// One frame of exponential smoothing; returns the new display point.
    pub fn step(&mut self) -> Vec2 {
        self.display += (self.target - self.display) * self.smoothing;
        self.display
    }

    /// Top-left corner for the cursor element so it is centered on the
    /// display point.
    pub fn draw_position(&self) -> Vec2 {
        self.display - Vec2::splat(CURSOR_RADIUS_PX)
    }
}

#[inline]
pub fn cursor_enabled(viewport_width: f64, min_width: f64) -> bool {
    viewport_width > min_width
}
