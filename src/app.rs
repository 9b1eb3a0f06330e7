//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::features::{Settings, avatar};
use crate::ui::components::demo_stage::AVATAR_PIXELS;
pub use message::Message;
pub use state::App;
use state::{CoreState, DemoState, UiState};

impl App {
    /// Build application state without opening windows or starting tasks
    pub fn with_settings(settings: Settings) -> Self {
        let demo = DemoState::default();
        let ui = UiState::new(&demo, &settings);
        let core = CoreState::new(settings);

        Self { core, demo, ui }
    }

    /// Create new application instance
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        // Write defaults on first run so the config file is discoverable
        if Settings::file_path().is_some_and(|path| !path.exists()) {
            if let Err(e) = settings.save() {
                tracing::warn!("Failed to write default settings: {}", e);
            }
        }

        let mut app = Self::with_settings(settings);

        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: iced::Size::new(
                app.core.settings.display.window_width,
                app.core.settings.display.window_height,
            ),
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);
        app.core.main_window = Some(window_id);

        let load_avatar = match app.core.settings.asset.image_path.clone() {
            Some(path) => {
                tracing::info!("Loading demo image from {}", path);
                Task::perform(avatar::load(Some(path), AVATAR_PIXELS), Message::AvatarLoaded)
            }
            None => Task::none(),
        };

        (app, Task::batch([open_window.discard(), load_avatar]))
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title names the selected animation and trigger mode
    pub fn title(&self, _window_id: iced::window::Id) -> String {
        format!(
            "Animators Demo - {} ({})",
            self.demo.selected.kind(),
            self.demo.active_tab
        )
    }

    /// Subscriptions for animation frames and window close
    pub fn subscription(&self) -> iced::Subscription<Message> {
        // Frames run until the animator has reported its completion
        let animation_sub = if self.ui.has_active_animations() {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        let close_event_sub = iced::window::close_events().map(Message::WindowClosed);

        iced::Subscription::batch([animation_sub, close_event_sub])
    }
}
