// src/app/view.rs
//! Application view rendering

use iced::widget::{column, container};
use iced::{Element, Fill};

use super::App;
use super::message::Message;
use super::state::DemoState;
use crate::features::{AnimationKind, Tab};
use crate::ui::animation::{AnimatorConfig, Interpolation, OutputValue, Trigger};
use crate::ui::{components, theme, widgets};

/// Scroll progress range driving the Event tab
pub const SCROLL_INPUT_RANGE: [f32; 2] = [0.0, 100.0];

/// Project demo state onto the animator configuration for this render
pub fn animator_config(demo: &DemoState) -> AnimatorConfig {
    let selected = demo.selected;
    let kind = selected.kind();

    let trigger = match demo.active_tab {
        Tab::Static => Trigger::Manual {
            animate_in: demo.animate_in.is_requested(),
        },
        Tab::Event => {
            let output = |value: f32| {
                if kind == AnimationKind::Rotate {
                    OutputValue::Degrees(value)
                } else {
                    OutputValue::Number(value)
                }
            };
            Trigger::Driven {
                interpolation: Interpolation::new(
                    SCROLL_INPUT_RANGE,
                    [output(selected.start_value()), output(selected.end_value())],
                ),
                progress: demo.scroll_progress,
            }
        }
    };

    AnimatorConfig {
        kind,
        start_value: selected.start_value(),
        end_value: selected.end_value(),
        trigger,
        key: selected.remount_key(),
    }
}

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let config = animator_config(&self.demo);

        let stage = components::demo_stage::view(
            &self.ui.animator,
            &config,
            self.ui.avatar.as_ref(),
            iced::time::Instant::now(),
        );

        let list = components::animation_list::view(&self.ui.button_highlight);

        let tabs = container(widgets::tab_bar::view(
            &Tab::ALL,
            self.demo.active_tab,
            &self.ui.tab_highlight,
            Message::SelectTab,
        ))
        .width(Fill)
        .style(theme::tab_bar);

        container(column![stage, list, tabs].width(Fill).height(Fill))
            .width(Fill)
            .height(Fill)
            .style(theme::main_content)
            .into()
    }
}
