// Platform-free logic behind the page behaviors. Nothing in here touches
// web-sys, so the host test suite can include these files directly.
pub mod counter;
pub mod debounce;
pub mod easing;
pub mod form;
pub mod lazy;
pub mod markup;
pub mod nav;
pub mod pointer;
pub mod scroll;
pub mod trigger;
pub mod tween;
pub mod wave;

pub use counter::CounterAnimation;
pub use debounce::{Debouncer, Ticket};
pub use easing::Ease;
pub use markup::MarkupError;
pub use tween::{Channel, Handle, Transform, TweenId, TweenSet};
