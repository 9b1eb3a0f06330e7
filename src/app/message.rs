//! Application messages

use crate::features::avatar::AvatarImage;
use crate::features::{AnimationKind, Tab};

/// Application messages
#[derive(Clone)]
pub enum Message {
    // ============ Demo ============
    /// Animation button pressed
    SelectAnimation(AnimationKind),
    /// Tab pressed
    SelectTab(Tab),
    /// Selection list scrolled (absolute y offset in pixels)
    DemoScrolled(f32),

    // ============ Runtime ============
    /// Frame tick while animations are running
    AnimationTick,
    /// Configured demo image decoded
    AvatarLoaded(AvatarImage),
    /// Main window closed
    WindowClosed(iced::window::Id),
}

// Manual Debug implementation to keep pixel data out of logs
impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        macro_rules! simple {
            ($name:literal) => { write!(f, $name) };
            ($name:literal, $($arg:tt)*) => { write!(f, concat!($name, "({})"), format_args!($($arg)*)) };
        }

        match self {
            Self::AnimationTick => simple!("AnimationTick"),
            Self::SelectAnimation(kind) => simple!("SelectAnimation", "{}", kind),
            Self::SelectTab(tab) => simple!("SelectTab", "{}", tab),
            Self::DemoScrolled(y) => simple!("DemoScrolled", "{:.1}", y),
            Self::AvatarLoaded(image) => simple!("AvatarLoaded", "{}x{}", image.width, image.height),
            Self::WindowClosed(id) => simple!("WindowClosed", "{:?}", id),
        }
    }
}
