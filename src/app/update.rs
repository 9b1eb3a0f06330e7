//! Message update handlers - thin dispatcher delegating to submodules

mod demo;
mod runtime;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        if let Some(task) = self.handle_demo(&message) {
            return task;
        }
        if let Some(task) = self.handle_runtime(message) {
            return task;
        }

        Task::none()
    }
}
