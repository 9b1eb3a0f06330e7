// src/app/update/runtime.rs
//! Frame ticks, asset loading and window lifecycle

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;
use crate::ui::animation::AnimatorEvent;

impl App {
    /// Advance every running animation to `now`
    fn advance_frame(&mut self, now: Instant) {
        self.ui.button_highlight.tick(now);
        self.ui.tab_highlight.tick(now);
        self.ui.button_highlight.cleanup_completed();
        self.ui.tab_highlight.cleanup_completed();

        self.flush_scroll(now);

        // Settle the trigger in the same update so a selection cannot slip
        // between the animator finishing and the trigger going idle
        if let Some(AnimatorEvent::AnimateInComplete) = self.ui.animator.tick(now) {
            self.complete_animate_in();
        }
    }

    /// Handle runtime messages
    pub fn handle_runtime(&mut self, message: Message) -> Option<Task<Message>> {
        match message {
            Message::AnimationTick => {
                self.advance_frame(Instant::now());
                Some(Task::none())
            }

            Message::AvatarLoaded(avatar) => {
                tracing::info!("Demo image ready ({}x{})", avatar.width, avatar.height);
                self.ui.avatar = Some(iced::widget::image::Handle::from_rgba(
                    avatar.width,
                    avatar.height,
                    avatar.pixels,
                ));
                Some(Task::none())
            }

            Message::WindowClosed(id) => {
                if self.core.main_window == Some(id) {
                    tracing::info!("Main window closed, exiting");
                    Some(iced::exit())
                } else {
                    Some(Task::none())
                }
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{AnimateIn, AnimationKind, Settings};
    use iced::time::Duration;

    fn app() -> App {
        App::with_settings(Settings::default())
    }

    #[test]
    fn test_finished_pass_returns_trigger_to_idle() {
        let mut app = app();
        let start = Instant::now();
        app.select_animation(AnimationKind::TranslateY, start);
        assert!(app.demo.animate_in.is_requested());

        let done = start + app.core.settings.animation.duration() + Duration::from_millis(1);
        app.advance_frame(done);

        assert_eq!(app.demo.animate_in, AnimateIn::Idle);
        assert!(!app.ui.animator.is_animating());
    }

    #[test]
    fn test_reselection_mid_pass_waits_for_restarted_pass() {
        let mut app = app();
        let duration = app.core.settings.animation.duration();
        let start = Instant::now();

        app.select_animation(AnimationKind::Rotate, start);
        let restart = start + duration / 2;
        app.select_animation(AnimationKind::Scale, restart);

        // The first pass would have ended here; the restarted one has not
        app.advance_frame(start + duration + Duration::from_millis(1));
        assert!(app.demo.animate_in.is_requested());
        assert!(app.ui.animator.is_animating());

        app.advance_frame(restart + duration + Duration::from_millis(1));
        assert_eq!(app.demo.animate_in, AnimateIn::Idle);
        assert!(!app.ui.animator.is_animating());
    }

    #[test]
    fn test_tick_without_pass_keeps_trigger() {
        let mut app = app();
        let _ = app.update(Message::SelectTab(crate::features::Tab::Event));
        let _ = app.update(Message::SelectAnimation(AnimationKind::Height));

        let _ = app.update(Message::AnimationTick);

        // Event tab runs no timed pass, so nothing completes the request
        assert!(app.demo.animate_in.is_requested());
    }
}
