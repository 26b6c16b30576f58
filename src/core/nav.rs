/// Scroll offset past which the navigation bar switches to its compact style.
pub const SCROLLED_THRESHOLD_PX: f64 = 100.0;
/// Entrance delay added per menu link when the menu opens.
pub const LINK_STAGGER_SEC: f32 = 0.1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Mobile menu state plus the last observed scroll offset.
#[derive(Clone, Debug, Default)]
pub struct NavMenu {
    state: MenuState,
    last_scroll_top: f64,
    scrolled: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Flip the menu and return the new state.
    pub fn toggle(&mut self) -> MenuState {
        self.state = match self.state {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
        self.state
    }

    /// Close the menu. Returns true when this changed anything.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.state = MenuState::Closed;
        was_open
    }

    /// Close on a click that landed outside the navigation bar.
    pub fn on_document_click(&mut self, inside_navbar: bool) -> bool {
        if inside_navbar {
            return false;
        }
        self.close()
    }

    /// Record a scroll offset. Returns `Some(scrolled)` when the compact
    /// style needs to flip.
    pub fn on_scroll(&mut self, scroll_top: f64) -> Option<bool> {
        self.last_scroll_top = scroll_top;
        let next = is_scrolled(scroll_top);
        if next == self.scrolled {
            return None;
        }
        self.scrolled = next;
        Some(next)
    }

    pub fn last_scroll_top(&self) -> f64 {
        self.last_scroll_top
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}

#[inline]
pub fn is_scrolled(scroll_top: f64) -> bool {
    scroll_top > SCROLLED_THRESHOLD_PX
}

/// Entrance delay for the link at `index` when the menu opens.
#[inline]
pub fn link_stagger_delay(index: usize) -> f32 {
    index as f32 * LINK_STAGGER_SEC
}
