// src/app/state.rs
//! Application state definitions

use crate::features::{AnimateIn, AnimationDescriptor, AnimationKind, ScrollSampler, Settings, Tab};
use crate::ui::animation::{Animator, HighlightAnimations};

/// Main application state
pub struct App {
    /// Configuration and window bookkeeping
    pub core: CoreState,
    /// Demo state (selection, trigger, tab, scroll progress)
    pub demo: DemoState,
    /// Runtime UI machinery (animator, samplers, transitions, image)
    pub ui: UiState,
}

/// Core infrastructure
pub struct CoreState {
    pub settings: Settings,
    pub main_window: Option<iced::window::Id>,
}

impl CoreState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            main_window: None,
        }
    }
}

/// Demo state. Only `App`'s message handlers mutate it; the view is a pure
/// projection of it.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoState {
    pub selected: AnimationDescriptor,
    pub animate_in: AnimateIn,
    pub active_tab: Tab,
    /// Scroll position of the selection list in progress units
    pub scroll_progress: f32,
}

impl Default for DemoState {
    fn default() -> Self {
        Self {
            selected: AnimationDescriptor::default(),
            animate_in: AnimateIn::Idle,
            active_tab: Tab::default(),
            scroll_progress: 0.0,
        }
    }
}

/// UI runtime state
pub struct UiState {
    pub animator: Animator,
    pub scroll_sampler: ScrollSampler,
    pub button_highlight: HighlightAnimations<AnimationKind>,
    pub tab_highlight: HighlightAnimations<Tab>,
    /// Configured demo image, `None` while loading or when not configured
    pub avatar: Option<iced::widget::image::Handle>,
}

impl UiState {
    pub fn new(demo: &DemoState, settings: &Settings) -> Self {
        Self {
            animator: Animator::new(demo.selected, settings.animation.duration()),
            scroll_sampler: ScrollSampler::for_tab(demo.active_tab, &settings.scroll),
            button_highlight: HighlightAnimations::settled(demo.selected.kind()),
            tab_highlight: HighlightAnimations::settled(demo.active_tab),
            avatar: None,
        }
    }

    /// Check if anything needs frame ticks
    pub fn has_active_animations(&self) -> bool {
        self.animator.is_animating()
            || self.scroll_sampler.has_pending()
            || self.button_highlight.is_animating()
            || self.tab_highlight.is_animating()
    }
}
