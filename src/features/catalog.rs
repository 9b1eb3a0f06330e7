//! Animation and tab catalogs
//!
//! The demo offers a fixed, ordered set of animations and two trigger tabs.
//! Descriptors can only be obtained from this catalog, so an out-of-catalog
//! descriptor cannot be constructed.

/// Side length of the demo image in logical pixels
pub const IMAGE_SIZE: f32 = 150.0;

/// Padding around the demo image inside its frame
pub const FRAME_PADDING: f32 = 20.0;

/// Resting height of the image frame (image + padding on both sides)
pub const FRAME_HEIGHT: f32 = IMAGE_SIZE + FRAME_PADDING + FRAME_PADDING;

/// Animated property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    TranslateX,
    TranslateY,
    Rotate,
    Scale,
    Opacity,
    Height,
    MarginTop,
}

impl AnimationKind {
    /// All kinds in catalog order
    pub const ALL: [AnimationKind; 7] = [
        AnimationKind::TranslateX,
        AnimationKind::TranslateY,
        AnimationKind::Rotate,
        AnimationKind::Scale,
        AnimationKind::Opacity,
        AnimationKind::Height,
        AnimationKind::MarginTop,
    ];

    /// Property name shown on the selection buttons
    pub fn name(&self) -> &'static str {
        match self {
            Self::TranslateX => "translateX",
            Self::TranslateY => "translateY",
            Self::Rotate => "rotate",
            Self::Scale => "scale",
            Self::Opacity => "opacity",
            Self::Height => "height",
            Self::MarginTop => "marginTop",
        }
    }

    /// Whether the property can be animated by the compositing driver.
    /// Layout properties (height, margin) need the layout driver.
    pub fn is_native(&self) -> bool {
        !matches!(self, Self::Height | Self::MarginTop)
    }

    /// Catalog descriptor for this kind
    pub fn descriptor(self) -> AnimationDescriptor {
        let (start_value, end_value) = match self {
            Self::TranslateX => (0.0, 150.0),
            Self::TranslateY => (0.0, -150.0),
            Self::Rotate => (0.0, 360.0),
            Self::Scale => (1.0, 2.0),
            Self::Opacity => (1.0, 0.33),
            Self::Height => (FRAME_HEIGHT, 100.0),
            Self::MarginTop => (0.0, 100.0),
        };

        AnimationDescriptor {
            kind: self,
            start_value,
            end_value,
        }
    }
}

impl std::fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Which driver an animation runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriverClass {
    /// Transform/opacity, composited without relayout
    Native,
    /// Layout properties, requires relayout every frame
    Layout,
}

impl DriverClass {
    /// Identity key of the animator for this class
    pub fn remount_key(&self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Layout => "non-native",
        }
    }
}

/// Immutable description of one catalog animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationDescriptor {
    kind: AnimationKind,
    start_value: f32,
    end_value: f32,
}

impl AnimationDescriptor {
    pub fn kind(&self) -> AnimationKind {
        self.kind
    }

    pub fn start_value(&self) -> f32 {
        self.start_value
    }

    pub fn end_value(&self) -> f32 {
        self.end_value
    }

    /// Derived from the kind, never set independently
    pub fn uses_native_driver(&self) -> bool {
        self.kind.is_native()
    }

    pub fn driver_class(&self) -> DriverClass {
        if self.uses_native_driver() {
            DriverClass::Native
        } else {
            DriverClass::Layout
        }
    }

    pub fn remount_key(&self) -> &'static str {
        self.driver_class().remount_key()
    }
}

impl Default for AnimationDescriptor {
    fn default() -> Self {
        catalog()[0]
    }
}

/// The ordered animation catalog
pub fn catalog() -> [AnimationDescriptor; 7] {
    AnimationKind::ALL.map(AnimationKind::descriptor)
}

/// Trigger mode tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    /// Manually triggered animate-in
    #[default]
    Static,
    /// Driven by the scroll position of the selection list
    Event,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Static, Tab::Event];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Static => "Static",
            Self::Event => "Event",
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
