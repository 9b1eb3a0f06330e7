//! Tab bar widget
//!
//! One pressable tab per entry with a continuous bottom line; the active tab
//! gets a bold accent label and an accent underline. Stateless apart from
//! the highlight transition passed in by the caller.

use std::hash::Hash;

use iced::font::Weight;
use iced::widget::{Space, button, column, container, row, text};
use iced::{Background, Color, Element, Fill, Theme};

use crate::ui::animation::HighlightAnimations;
use crate::ui::theme::{self, BOLD_WEIGHT};

/// What one tab renders as
#[derive(Debug, Clone, PartialEq)]
pub struct TabItem<T, Message> {
    pub tab: T,
    pub is_active: bool,
    /// Highlight amount (0.0 to 1.0)
    pub progress: f32,
    pub on_press: Message,
}

impl<T, Message> TabItem<T, Message> {
    pub fn weight(&self) -> Weight {
        if self.is_active {
            BOLD_WEIGHT
        } else {
            Weight::Normal
        }
    }
}

fn label_color(theme: &Theme, progress: f32) -> Color {
    theme::blend(theme::text_secondary(theme), theme::ACCENT_PINK, progress)
}

fn underline_color(theme: &Theme, progress: f32) -> Color {
    theme::blend(theme::border_color(theme), theme::ACCENT_PINK, progress)
}

/// Resolve every tab in display order
pub fn items<T, Message>(
    tabs: &[T],
    active: T,
    highlight: &HighlightAnimations<T>,
    on_select: impl Fn(T) -> Message,
) -> Vec<TabItem<T, Message>>
where
    T: Copy + Eq + Hash,
{
    tabs.iter()
        .map(|tab| TabItem {
            tab: *tab,
            is_active: *tab == active,
            progress: highlight.progress(tab),
            on_press: on_select(*tab),
        })
        .collect()
}

/// Build the tab bar
///
/// # Arguments
/// * `tabs` - Tabs in display order
/// * `active` - Currently active tab
/// * `highlight` - Highlight transition keyed by tab
/// * `on_select` - Message for a pressed tab
pub fn view<'a, T, Message>(
    tabs: &[T],
    active: T,
    highlight: &HighlightAnimations<T>,
    on_select: impl Fn(T) -> Message,
) -> Element<'a, Message>
where
    T: Copy + Eq + Hash + std::fmt::Display + 'a,
    Message: Clone + 'a,
{
    let tabs: Vec<Element<'a, Message>> = items(tabs, active, highlight, on_select)
        .into_iter()
        .map(|item| {
            let progress = item.progress;

            let label = text(item.tab.to_string())
                .size(15)
                .font(iced::Font {
                    weight: item.weight(),
                    ..Default::default()
                })
                .style(move |theme| text::Style {
                    color: Some(label_color(theme, progress)),
                });

            let tab_button = button(container(label).center_x(Fill))
                .width(Fill)
                .padding([14, 0])
                .style(theme::tab_button)
                .on_press(item.on_press);

            let underline = container(Space::new().height(2))
                .width(Fill)
                .style(move |theme| container::Style {
                    background: Some(Background::Color(underline_color(theme, progress))),
                    ..Default::default()
                });

            column![tab_button, underline].width(Fill).into()
        })
        .collect();

    row(tabs).width(Fill).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Tab;

    #[derive(Debug, Clone, PartialEq)]
    enum Press {
        Tab(Tab),
    }

    #[test]
    fn test_one_item_per_tab_with_its_message() {
        let highlight = HighlightAnimations::settled(Tab::Static);
        let items = items(&Tab::ALL, Tab::Static, &highlight, Press::Tab);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].tab, Tab::Static);
        assert_eq!(items[0].on_press, Press::Tab(Tab::Static));
        assert_eq!(items[1].tab, Tab::Event);
        assert_eq!(items[1].on_press, Press::Tab(Tab::Event));
    }

    #[test]
    fn test_exactly_the_active_tab_is_marked() {
        for active in Tab::ALL {
            let highlight = HighlightAnimations::settled(active);
            let items = items(&Tab::ALL, active, &highlight, Press::Tab);

            for item in &items {
                let expected = item.tab == active;
                assert_eq!(item.is_active, expected);
                assert_eq!(item.weight() == BOLD_WEIGHT, expected);
            }
        }
    }

    #[test]
    fn test_settled_colors() {
        let theme = Theme::Light;
        let highlight = HighlightAnimations::settled(Tab::Event);
        let items = items(&Tab::ALL, Tab::Event, &highlight, Press::Tab);
        let (inactive, active) = (&items[0], &items[1]);

        assert_eq!(label_color(&theme, active.progress), theme::ACCENT_PINK);
        assert_eq!(underline_color(&theme, active.progress), theme::ACCENT_PINK);
        assert_eq!(
            label_color(&theme, inactive.progress),
            theme::text_secondary(&theme)
        );
        assert_eq!(
            underline_color(&theme, inactive.progress),
            theme::border_color(&theme)
        );
    }

    #[test]
    fn test_new_tab_is_bold_before_highlight_settles() {
        let mut highlight = HighlightAnimations::settled(Tab::Static);
        highlight.set_active(Tab::Event);
        let items = items(&Tab::ALL, Tab::Event, &highlight, Press::Tab);

        assert!(items[1].is_active);
        assert_eq!(items[1].weight(), BOLD_WEIGHT);
        assert!(items[1].progress < 1.0);
    }
}
