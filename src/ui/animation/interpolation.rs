//! Range interpolation for driven animations

/// Animated output value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputValue {
    /// Plain number (pixels, scale factor, opacity)
    Number(f32),
    /// Angle in degrees, rendered with a `deg` suffix
    Degrees(f32),
}

impl OutputValue {
    pub fn as_f32(&self) -> f32 {
        match self {
            Self::Number(v) | Self::Degrees(v) => *v,
        }
    }

    /// Same unit as `self`, different magnitude
    fn with_value(&self, value: f32) -> Self {
        match self {
            Self::Number(_) => Self::Number(value),
            Self::Degrees(_) => Self::Degrees(value),
        }
    }
}

impl std::fmt::Display for OutputValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{}", v),
            Self::Degrees(v) => write!(f, "{}deg", v),
        }
    }
}

/// Linear mapping from an input range onto an output range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolation {
    pub input_range: [f32; 2],
    pub output_range: [OutputValue; 2],
    /// Inputs outside the input range hold the nearest output endpoint
    pub clamp: bool,
}

impl Interpolation {
    pub fn new(input_range: [f32; 2], output_range: [OutputValue; 2]) -> Self {
        Self {
            input_range,
            output_range,
            clamp: true,
        }
    }

    /// Map `input` onto the output range
    pub fn apply(&self, input: f32) -> OutputValue {
        let [in_start, in_end] = self.input_range;
        let [out_start, out_end] = self.output_range;

        let span = in_end - in_start;
        if span.abs() <= f32::EPSILON {
            return out_start;
        }

        let mut t = (input - in_start) / span;
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }

        let (from, to) = (out_start.as_f32(), out_end.as_f32());
        out_start.with_value(from + (to - from) * t)
    }
}
