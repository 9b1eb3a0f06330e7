//! Animators Demo - animated transitions on an image, triggered manually
//! or by scrolling. Built with iced.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let settings = features::Settings::load();

    // Run as a daemon; the app exits when its main window closes
    iced::daemon(
        move || app::App::new(settings.clone()),
        app::App::update,
        app::App::view,
    )
    .title(app::App::title)
    .theme(app::App::theme)
    .subscription(app::App::subscription)
    .antialiasing(true)
    .run()
}
