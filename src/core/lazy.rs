#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageState {
    Deferred { src: String },
    Loaded,
}

/// Deferred image source, promoted the first time the image is visible.
#[derive(Clone, Debug)]
pub struct LazyImage {
    state: ImageState,
}

impl LazyImage {
    /// `None` when the deferred attribute is missing or blank.
    pub fn new(deferred_src: Option<String>) -> Option<Self> {
        let src = deferred_src.filter(|s| !s.trim().is_empty())?;
        Some(Self {
            state: ImageState::Deferred { src },
        })
    }

    pub fn state(&self) -> &ImageState {
        &self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.state == ImageState::Loaded
    }

    /// Returns the source to load on the first visible notification, then
    /// `None` forever after.
    pub fn on_visible(&mut self, is_intersecting: bool) -> Option<String> {
        if !is_intersecting {
            return None;
        }
        match std::mem::replace(&mut self.state, ImageState::Loaded) {
            ImageState::Deferred { src } => Some(src),
            ImageState::Loaded => None,
        }
    }
}
