// src/app/update/demo.rs
//! Demo state transitions: selection, trigger, tabs and scroll

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::{AnimationKind, ScrollSampler, Tab};

impl App {
    /// Select a catalog animation and request an animate-in pass for it
    pub(super) fn select_animation(&mut self, kind: AnimationKind, now: Instant) {
        let descriptor = kind.descriptor();
        tracing::info!(
            "Selected animation: {} ({} -> {}, driver {})",
            kind,
            descriptor.start_value(),
            descriptor.end_value(),
            descriptor.remount_key()
        );

        self.demo.selected = descriptor;
        self.ui.animator.reconfigure(descriptor);
        self.ui.button_highlight.set_active(kind);
        self.request_animate_in(now);
    }

    /// Arm the trigger; the manual pass only runs on the Static tab
    fn request_animate_in(&mut self, now: Instant) {
        if !self.demo.animate_in.request() {
            tracing::debug!("Animate-in already pending, restarting pass");
        }

        if self.demo.active_tab == Tab::Static {
            self.ui.animator.animate_in(now);
        }
    }

    /// Acknowledge the animator's completion report
    pub(super) fn complete_animate_in(&mut self) {
        if self.demo.animate_in.complete() {
            tracing::debug!("Animate-in complete: {}", self.demo.selected.kind());
        } else {
            tracing::debug!("Ignoring animate-in completion with no pending request");
        }
    }

    /// Switch trigger mode. A pass in flight is cancelled and reset.
    fn select_tab(&mut self, tab: Tab) {
        if self.demo.active_tab == tab {
            return;
        }

        tracing::info!("Switched to {} tab", tab);
        self.demo.active_tab = tab;
        self.demo.animate_in.cancel();
        self.ui.animator.cancel();
        self.ui.scroll_sampler = ScrollSampler::for_tab(tab, &self.core.settings.scroll);
        self.ui.tab_highlight.set_active(tab);
    }

    /// Apply a scroll sample if the sampler admits it
    fn apply_scroll(&mut self, offset_y: f32, now: Instant) {
        if let Some(offset_y) = self.ui.scroll_sampler.offer(offset_y, now) {
            self.set_scroll_offset(offset_y);
        }
    }

    /// Apply a scroll sample held back by the sampler
    pub(super) fn flush_scroll(&mut self, now: Instant) {
        if let Some(offset_y) = self.ui.scroll_sampler.flush(now) {
            self.set_scroll_offset(offset_y);
        }
    }

    fn set_scroll_offset(&mut self, offset_y: f32) {
        self.demo.scroll_progress = offset_y * self.core.settings.scroll.progress_scale;
    }

    /// Handle demo-related messages
    pub fn handle_demo(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::SelectAnimation(kind) => {
                self.select_animation(*kind, Instant::now());
                Some(Task::none())
            }
            Message::SelectTab(tab) => {
                self.select_tab(*tab);
                Some(Task::none())
            }
            Message::DemoScrolled(offset_y) => {
                self.apply_scroll(*offset_y, Instant::now());
                Some(Task::none())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{AnimateIn, Settings};
    use iced::time::Duration;

    fn app() -> App {
        App::with_settings(Settings::default())
    }

    mod property_selection {
        use super::*;

        #[test]
        fn every_selection_sets_descriptor_and_arms_trigger() {
            for kind in AnimationKind::ALL {
                let mut app = app();
                let before = app.demo.animate_in.is_requested();

                let _ = app.update(Message::SelectAnimation(kind));

                assert_eq!(app.demo.selected, kind.descriptor());
                assert_ne!(app.demo.animate_in.is_requested(), before);
                assert_eq!(app.ui.animator.descriptor(), kind.descriptor());
            }
        }

        #[test]
        fn select_then_completion_round_trips_trigger() {
            let mut app = app();
            let original = app.demo.animate_in;

            let _ = app.update(Message::SelectAnimation(AnimationKind::Scale));
            app.complete_animate_in();

            assert_eq!(app.demo.animate_in, original);
        }

        #[test]
        fn stray_completion_does_not_arm_trigger() {
            let mut app = app();
            app.complete_animate_in();
            assert_eq!(app.demo.animate_in, AnimateIn::Idle);
        }

        #[test]
        fn selection_moves_button_highlight() {
            let mut app = app();
            let _ = app.update(Message::SelectAnimation(AnimationKind::Opacity));
            assert!(app.ui.button_highlight.is_active(&AnimationKind::Opacity));
            assert!(!app.ui.button_highlight.is_active(&AnimationKind::TranslateX));
        }
    }

    mod property_tabs {
        use super::*;

        #[test]
        fn every_tab_selection_sets_active_tab() {
            for tab in Tab::ALL {
                let mut app = app();
                let _ = app.update(Message::SelectTab(tab));
                assert_eq!(app.demo.active_tab, tab);
                assert!(app.ui.tab_highlight.is_active(&tab));
            }
        }

        #[test]
        fn reselecting_active_tab_is_noop() {
            let mut app = app();
            let _ = app.update(Message::SelectAnimation(AnimationKind::Rotate));
            let before = app.demo.clone();

            let _ = app.update(Message::SelectTab(Tab::Static));

            assert_eq!(app.demo, before);
            assert!(!app.ui.tab_highlight.is_animating());
        }

        #[test]
        fn tab_switch_cancels_pending_pass() {
            let mut app = app();
            let _ = app.update(Message::SelectAnimation(AnimationKind::Rotate));
            assert!(app.ui.animator.is_animating());

            let _ = app.update(Message::SelectTab(Tab::Event));

            assert_eq!(app.demo.animate_in, AnimateIn::Idle);
            assert!(!app.ui.animator.is_animating());
        }

        #[test]
        fn event_tab_selection_does_not_start_timed_pass() {
            let mut app = app();
            let _ = app.update(Message::SelectTab(Tab::Event));
            let _ = app.update(Message::SelectAnimation(AnimationKind::Height));

            assert!(app.demo.animate_in.is_requested());
            assert!(!app.ui.animator.is_animating());
        }
    }

    mod property_scroll {
        use super::*;

        #[test]
        fn event_tab_applies_scroll_samples() {
            let mut app = app();
            app.select_tab(Tab::Event);
            let start = Instant::now();

            app.apply_scroll(10.0, start);
            assert_eq!(app.demo.scroll_progress, 10.0);

            app.apply_scroll(20.0, start + Duration::from_millis(16));
            assert_eq!(app.demo.scroll_progress, 20.0);
        }

        #[test]
        fn last_sample_inside_interval_is_applied_on_next_frame() {
            let mut app = app();
            app.select_tab(Tab::Event);
            let start = Instant::now();

            app.apply_scroll(10.0, start);
            app.apply_scroll(60.0, start + Duration::from_millis(8));
            assert_eq!(app.demo.scroll_progress, 10.0);
            assert!(app.ui.scroll_sampler.has_pending());
            assert!(app.ui.has_active_animations());

            let _ = app.update(Message::AnimationTick);
            assert_eq!(app.demo.scroll_progress, 60.0);
            assert!(!app.ui.scroll_sampler.has_pending());
        }

        #[test]
        fn progress_scale_applies_to_flushed_sample() {
            let mut settings = Settings::default();
            settings.scroll.progress_scale = 0.5;
            let mut app = App::with_settings(settings);
            app.select_tab(Tab::Event);
            let start = Instant::now();

            app.apply_scroll(10.0, start);
            app.apply_scroll(80.0, start + Duration::from_millis(4));
            app.flush_scroll(start + Duration::from_millis(16));

            assert_eq!(app.demo.scroll_progress, 40.0);
        }

        #[test]
        fn static_tab_throttles_scroll_samples() {
            let mut app = app();
            let start = Instant::now();

            app.apply_scroll(10.0, start);
            app.apply_scroll(80.0, start + Duration::from_millis(500));

            assert_eq!(app.demo.scroll_progress, 10.0);
            assert!(!app.ui.scroll_sampler.has_pending());
        }
    }
}
