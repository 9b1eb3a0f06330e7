//! Dark and light styling with a shared accent color

use iced::color;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Surface colors for one theme variant
struct Palette {
    background: Color,
    stage: Color,
    surface: Color,
    border: Color,
    text_secondary: Color,
    text_primary: Color,
}

const DARK: Palette = Palette {
    background: color!(0x121212),
    stage: color!(0x1a1a1a),
    surface: color!(0x282828),
    border: color!(0x333333),
    text_secondary: color!(0xb3b3b3),
    text_primary: color!(0xffffff),
};

const LIGHT: Palette = Palette {
    background: color!(0xffffff),
    stage: color!(0xf5f5f5),
    surface: color!(0xeeeeee),
    border: color!(0xdddddd),
    text_secondary: color!(0x555555),
    text_primary: color!(0x1a1a1a),
};

/// The app only switches between `Theme::Dark` and `Theme::Light`
fn palette(theme: &Theme) -> &'static Palette {
    if *theme == Theme::Dark { &DARK } else { &LIGHT }
}

pub fn background(theme: &Theme) -> Color {
    palette(theme).background
}

pub fn stage_bg(theme: &Theme) -> Color {
    palette(theme).stage
}

pub fn surface(theme: &Theme) -> Color {
    palette(theme).surface
}

pub fn border_color(theme: &Theme) -> Color {
    palette(theme).border
}

pub fn text_secondary(theme: &Theme) -> Color {
    palette(theme).text_secondary
}

pub fn text_primary(theme: &Theme) -> Color {
    palette(theme).text_primary
}

/// Neon pink accent color (same for both modes)
pub const ACCENT_PINK: Color = color!(0xff1493);

/// Selected animation button background
pub const SELECTED_BG: Color = Color::BLACK;

/// Selected animation button label
pub const SELECTED_TEXT: Color = Color::WHITE;

// ============================================================================
// Container Styles
// ============================================================================

/// Main content area background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Demo stage hosting the animated image
pub fn demo_stage(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(stage_bg(theme))),
        border: Border {
            width: 1.0,
            color: border_color(theme),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Tab bar strip at the bottom of the screen
pub fn tab_bar(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        border: Border {
            width: 1.0,
            color: border_color(theme),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Outlined pill button used for the animation list
pub fn outline_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_primary(theme),
        border: Border {
            radius: 6.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(surface(theme))),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(border_color(theme))),
            ..base
        },
        _ => base,
    }
}

/// Borderless button used for tabs
pub fn tab_button(theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(Background::Color(surface(theme))),
        _ => None,
    };
    button::Style {
        background,
        text_color: text_primary(theme),
        border: Border::default(),
        ..Default::default()
    }
}

/// Font weight for emphasized labels
pub const BOLD_WEIGHT: iced::font::Weight = iced::font::Weight::Bold;

/// Linear blend from `from` (t = 0) to `to` (t = 1)
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: f32, b: f32| a * (1.0 - t) + b * t;
    Color {
        r: mix(from.r, to.r),
        g: mix(from.g, to.g),
        b: mix(from.b, to.b),
        a: mix(from.a, to.a),
    }
}
