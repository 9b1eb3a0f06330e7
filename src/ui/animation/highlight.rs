//! Selection highlight transitions using iced_anim
//!
//! Exactly one item (selected button, active tab) is highlighted at a time.
//! Only the highlighted item and the one fading out are tracked.

use std::hash::Hash;
use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Highlight fade duration
const HIGHLIGHT_DURATION: Duration = Duration::from_millis(180);

fn highlight_easing() -> Easing {
    Easing::EASE_OUT.with_duration(HIGHLIGHT_DURATION)
}

/// Exclusive highlight animation keyed by item
#[derive(Debug)]
pub struct HighlightAnimations<K: Eq + Hash + Clone> {
    active_key: Option<K>,
    active_anim: Animated<f32>,
    fading_key: Option<K>,
    fading_anim: Animated<f32>,
}

impl<K: Eq + Hash + Clone> HighlightAnimations<K> {
    /// Start with `key` fully highlighted, without a transition
    pub fn settled(key: K) -> Self {
        Self {
            active_key: Some(key),
            active_anim: Animated::transition(1.0, highlight_easing()),
            fading_key: None,
            fading_anim: Animated::transition(0.0, highlight_easing()),
        }
    }

    /// Move the highlight to `key`; the previous item fades out
    pub fn set_active(&mut self, key: K) {
        if self.active_key.as_ref() == Some(&key) {
            return;
        }

        if let Some(old) = self.active_key.take() {
            let current = *self.active_anim.value();
            self.fading_key = Some(old);
            self.fading_anim = Animated::transition(current, highlight_easing());
            self.fading_anim.update(0.0.into());
        }

        self.active_key = Some(key);
        self.active_anim = Animated::transition(0.0, highlight_easing());
        self.active_anim.update(1.0.into());
    }

    /// Highlight amount for `key` (0.0 to 1.0)
    pub fn progress(&self, key: &K) -> f32 {
        if self.active_key.as_ref() == Some(key) {
            *self.active_anim.value()
        } else if self.fading_key.as_ref() == Some(key) {
            *self.fading_anim.value()
        } else {
            0.0
        }
    }

    #[cfg(test)]
    pub fn is_active(&self, key: &K) -> bool {
        self.active_key.as_ref() == Some(key)
    }

    pub fn is_animating(&self) -> bool {
        self.active_anim.is_animating() || self.fading_anim.is_animating()
    }

    /// Forget the faded item once it reached zero
    pub fn cleanup_completed(&mut self) {
        if self.fading_key.is_some() && !self.fading_anim.is_animating() {
            self.fading_key = None;
        }
    }

    /// Must be called on each animation frame
    pub fn tick(&mut self, now: Instant) {
        self.active_anim.tick(now);
        self.fading_anim.tick(now);
    }
}
