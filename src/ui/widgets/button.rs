//! Labelled push button
//!
//! Stateless: renders `label` and emits `on_press` once per press. Callers
//! may override the container background and the label color.

use iced::widget::{button, container, text};
use iced::{Background, Color, Element, Fill, Theme};

use crate::ui::theme;

/// Optional style overrides on top of the outlined base style
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ButtonStyle {
    /// Container background
    pub background: Option<Color>,
    /// Label color
    pub text_color: Option<Color>,
}

impl ButtonStyle {
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    /// Outlined base style for `status` with the overrides on top
    pub fn resolve(&self, theme: &Theme, status: button::Status) -> button::Style {
        self.apply(theme::outline_button(theme, status))
    }

    fn apply(&self, mut style: button::Style) -> button::Style {
        if let Some(color) = self.background {
            style.background = Some(Background::Color(color));
        }
        if let Some(color) = self.text_color {
            style.text_color = color;
        }
        style
    }
}

/// Build a full-width button
pub fn view<'a, Message: Clone + 'a>(
    label: &'a str,
    on_press: Message,
    overrides: ButtonStyle,
) -> Element<'a, Message> {
    button(container(text(label).size(16)).center_x(Fill))
        .width(Fill)
        .padding([12, 16])
        .style(move |theme, status| overrides.resolve(theme, status))
        .on_press(on_press)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_overrides_keeps_base_style() {
        let base = button::Style {
            background: None,
            text_color: Color::BLACK,
            ..Default::default()
        };
        let styled = ButtonStyle::default().apply(base);
        assert_eq!(styled.background, None);
        assert_eq!(styled.text_color, Color::BLACK);
    }

    #[test]
    fn test_overrides_replace_background_and_label() {
        let base = button::Style::default();
        let styled = ButtonStyle::default()
            .background(Color::BLACK)
            .text_color(Color::WHITE)
            .apply(base);
        assert_eq!(styled.background, Some(Background::Color(Color::BLACK)));
        assert_eq!(styled.text_color, Color::WHITE);
    }

    #[test]
    fn test_overrides_hold_in_every_status() {
        let overrides = ButtonStyle::default()
            .background(Color::BLACK)
            .text_color(Color::WHITE);

        for status in [
            button::Status::Active,
            button::Status::Hovered,
            button::Status::Pressed,
        ] {
            let style = overrides.resolve(&Theme::Light, status);
            assert_eq!(style.background, Some(Background::Color(Color::BLACK)));
            assert_eq!(style.text_color, Color::WHITE);
        }
    }

    #[test]
    fn test_plain_button_keeps_hover_feedback() {
        let plain = ButtonStyle::default();
        let idle = plain.resolve(&Theme::Dark, button::Status::Active);
        let hovered = plain.resolve(&Theme::Dark, button::Status::Hovered);

        assert_eq!(idle.background, Some(Background::Color(Color::TRANSPARENT)));
        assert_eq!(
            hovered.background,
            Some(Background::Color(theme::surface(&Theme::Dark)))
        );
        assert_eq!(idle.text_color, theme::text_primary(&Theme::Dark));
    }
}
