//! Animation selection list
//! Scrollable list of catalog buttons; its scroll offset feeds the
//! event-driven animation.

use iced::widget::{Space, column, container, scrollable, text};
use iced::{Color, Element, Fill, Padding};

use crate::app::Message;
use crate::features::AnimationKind;
use crate::ui::animation::HighlightAnimations;
use crate::ui::theme::{self, BOLD_WEIGHT};
use crate::ui::widgets::{self, ButtonStyle};

/// Scrollable id of the selection list
pub const LIST_SCROLL_ID: &str = "animation_list_scroll";

/// Extra space after the last button so the list can always scroll
const TRAILING_SPACE: f32 = 160.0;

/// Style overrides for a button with the given highlight amount
fn highlight_style(progress: f32) -> ButtonStyle {
    if progress <= 0.0 {
        return ButtonStyle::default();
    }

    let style = ButtonStyle::default().background(Color {
        a: progress.min(1.0),
        ..theme::SELECTED_BG
    });

    if progress >= 0.5 {
        style.text_color(theme::SELECTED_TEXT)
    } else {
        style
    }
}

/// One selection button
struct ListEntry {
    label: &'static str,
    on_press: Message,
    style: ButtonStyle,
}

/// Buttons in catalog order
fn entries(highlight: &HighlightAnimations<AnimationKind>) -> Vec<ListEntry> {
    AnimationKind::ALL
        .iter()
        .map(|kind| ListEntry {
            label: kind.name(),
            on_press: Message::SelectAnimation(*kind),
            style: highlight_style(highlight.progress(kind)),
        })
        .collect()
}

/// Build the selection list
pub fn view<'a>(highlight: &HighlightAnimations<AnimationKind>) -> Element<'a, Message> {
    let title = text("Select an animation")
        .size(18)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let buttons = entries(highlight)
        .into_iter()
        .map(|entry| widgets::button::view(entry.label, entry.on_press, entry.style));

    let content = column![title, Space::new().height(8)]
        .extend(buttons)
        .push(Space::new().height(TRAILING_SPACE))
        .spacing(10)
        .width(Fill);

    scrollable(
        container(content)
            .width(Fill)
            .padding(Padding::new(20.0).top(16.0)),
    )
    .width(Fill)
    .height(Fill)
    .id(iced::widget::Id::new(LIST_SCROLL_ID))
    .on_scroll(|viewport| Message::DemoScrolled(viewport.absolute_offset().y))
    .into()
}
