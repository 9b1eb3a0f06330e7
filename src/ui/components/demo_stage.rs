//! Demo stage component
//!
//! Draws the demo image on a canvas with the animator's current value
//! applied. Transform properties (offset, rotation, scale, opacity) only move
//! the image; layout properties (frame height, top margin) move the frame
//! the image sits in.

use iced::widget::{canvas, column, container, image, text};
use iced::{Element, Fill, Point, Radians, Rectangle, Renderer, Size, Theme, mouse};
use once_cell::sync::Lazy;

use crate::features::avatar;
use crate::features::catalog::{FRAME_HEIGHT, FRAME_PADDING, IMAGE_SIZE};
use crate::features::AnimationKind;
use crate::ui::animation::{Animator, AnimatorConfig};
use crate::ui::theme;

/// Height of the stage area
pub const STAGE_HEIGHT: f32 = 460.0;

/// Resting distance from the stage top to the frame, leaves room for
/// negative vertical offsets
const FRAME_TOP: f32 = 160.0;

/// Horizontal inset of the frame inside the stage
const FRAME_INSET: f32 = 16.0;

/// Pixel size of the generated avatar
pub const AVATAR_PIXELS: u32 = 300;

static DEFAULT_AVATAR: Lazy<image::Handle> = Lazy::new(|| {
    let avatar = avatar::generate_default(AVATAR_PIXELS);
    image::Handle::from_rgba(avatar.width, avatar.height, avatar.pixels)
});

/// Visual state of the demo image for one animated value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub offset_x: f32,
    pub offset_y: f32,
    pub rotation_deg: f32,
    pub scale: f32,
    pub opacity: f32,
    pub frame_height: f32,
    pub margin_top: f32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        offset_x: 0.0,
        offset_y: 0.0,
        rotation_deg: 0.0,
        scale: 1.0,
        opacity: 1.0,
        frame_height: FRAME_HEIGHT,
        margin_top: 0.0,
    };

    /// Identity with the animated property of `kind` set to `value`
    pub fn for_value(kind: AnimationKind, value: f32) -> Self {
        let mut transform = Self::IDENTITY;
        match kind {
            AnimationKind::TranslateX => transform.offset_x = value,
            AnimationKind::TranslateY => transform.offset_y = value,
            AnimationKind::Rotate => transform.rotation_deg = value,
            AnimationKind::Scale => transform.scale = value,
            AnimationKind::Opacity => transform.opacity = value.clamp(0.0, 1.0),
            AnimationKind::Height => transform.frame_height = value.max(0.0),
            AnimationKind::MarginTop => transform.margin_top = value,
        }
        transform
    }

    /// Frame rectangle within a stage of `stage_width`
    pub fn frame_bounds(&self, stage_width: f32) -> Rectangle {
        Rectangle::new(
            Point::new(FRAME_INSET, FRAME_TOP + self.margin_top),
            Size::new((stage_width - 2.0 * FRAME_INSET).max(0.0), self.frame_height),
        )
    }

    /// Image rectangle within a stage of `stage_width`
    pub fn image_bounds(&self, stage_width: f32) -> Rectangle {
        let frame = self.frame_bounds(stage_width);
        let size = IMAGE_SIZE * self.scale;
        let center_x = frame.x + frame.width / 2.0 + self.offset_x;
        let center_y = frame.y + FRAME_PADDING + IMAGE_SIZE / 2.0 + self.offset_y;

        Rectangle::new(
            Point::new(center_x - size / 2.0, center_y - size / 2.0),
            Size::new(size, size),
        )
    }
}

struct StageDrawer<'a> {
    image: &'a image::Handle,
    transform: Transform,
}

impl<'a, Message> canvas::Program<Message> for StageDrawer<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let frame_rect = self.transform.frame_bounds(bounds.width);
        let outline = canvas::Path::rectangle(frame_rect.position(), frame_rect.size());
        frame.fill(&outline, theme::surface(theme));
        frame.stroke(
            &outline,
            canvas::Stroke::default()
                .with_color(theme::border_color(theme))
                .with_width(1.0),
        );

        let image = canvas::Image::new(self.image.clone())
            .rotation(Radians(self.transform.rotation_deg.to_radians()))
            .opacity(self.transform.opacity);
        frame.draw_image(self.transform.image_bounds(bounds.width), image);

        vec![frame.into_geometry()]
    }
}

/// One-line description of what the stage is showing
pub fn caption(config: &AnimatorConfig) -> String {
    match config.output_range() {
        Some([from, to]) if !config.is_manual() => format!(
            "{}: scroll 0-100 maps {} -> {} ({})",
            config.kind, from, to, config.key
        ),
        _ => format!(
            "{}: {} -> {} on press ({})",
            config.kind, config.start_value, config.end_value, config.key
        ),
    }
}

/// Build the demo stage for the current animator configuration
pub fn view<'a, Message: 'a>(
    animator: &Animator,
    config: &AnimatorConfig,
    image: Option<&'a image::Handle>,
    now: iced::time::Instant,
) -> Element<'a, Message> {
    let value = animator.value(&config.trigger, now);
    let transform = Transform::for_value(config.kind, value);

    let drawer = StageDrawer {
        image: image.unwrap_or(&DEFAULT_AVATAR),
        transform,
    };

    let label = text(caption(config))
        .size(13)
        .style(|t: &Theme| text::Style {
            color: Some(theme::text_secondary(t)),
        });

    container(
        column![
            container(label).padding([8, 16]),
            canvas(drawer).width(Fill).height(STAGE_HEIGHT),
        ]
        .width(Fill),
    )
    .width(Fill)
    .style(theme::demo_stage)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_animated_property_changes() {
        let t = Transform::for_value(AnimationKind::TranslateY, -150.0);
        assert_eq!(t.offset_y, -150.0);
        assert_eq!(
            Transform {
                offset_y: 0.0,
                ..t
            },
            Transform::IDENTITY
        );
    }

    #[test]
    fn test_opacity_clamped() {
        assert_eq!(Transform::for_value(AnimationKind::Opacity, 1.5).opacity, 1.0);
        assert_eq!(Transform::for_value(AnimationKind::Opacity, 0.33).opacity, 0.33);
    }

    #[test]
    fn test_layout_properties_move_frame() {
        let resting = Transform::IDENTITY.frame_bounds(400.0);
        let shorter = Transform::for_value(AnimationKind::Height, 100.0).frame_bounds(400.0);
        let lowered = Transform::for_value(AnimationKind::MarginTop, 100.0).frame_bounds(400.0);

        assert_eq!(resting.height, FRAME_HEIGHT);
        assert_eq!(shorter.height, 100.0);
        assert_eq!(lowered.y, resting.y + 100.0);
    }

    #[test]
    fn test_scale_keeps_image_centered() {
        let resting = Transform::IDENTITY.image_bounds(400.0);
        let doubled = Transform::for_value(AnimationKind::Scale, 2.0).image_bounds(400.0);

        assert_eq!(doubled.width, resting.width * 2.0);
        assert_eq!(doubled.center(), resting.center());
    }

    #[test]
    fn test_translate_x_offsets_image() {
        let resting = Transform::IDENTITY.image_bounds(400.0);
        let moved = Transform::for_value(AnimationKind::TranslateX, 150.0).image_bounds(400.0);
        assert_eq!(moved.x, resting.x + 150.0);
        assert_eq!(moved.y, resting.y);
    }
}
