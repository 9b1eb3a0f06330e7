//! Animation system for the demo
//!
//! - [`Animator`] drives the demo image, either on a timed animate-in pass
//!   or from the scroll position through an [`Interpolation`].
//! - [`HighlightAnimations`] fades selection highlights with `iced_anim`.

pub mod animator;
mod highlight;
pub mod interpolation;

pub use animator::{Animator, AnimatorConfig, AnimatorEvent, Trigger};
pub use highlight::HighlightAnimations;
pub use interpolation::{Interpolation, OutputValue};
