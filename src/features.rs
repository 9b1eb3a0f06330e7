//! Feature modules - demo logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod avatar;
pub mod catalog;
pub mod scroll;
pub mod settings;
pub mod trigger;

pub use catalog::{AnimationDescriptor, AnimationKind, DriverClass, Tab};
pub use scroll::ScrollSampler;
pub use settings::Settings;
pub use trigger::AnimateIn;
