use collapse_core::Color;

/// Two sizes closer than this are treated as equal by the snap rule.
pub const SNAP_THRESHOLD: f32 = 0.001;

pub fn is_close(value: f32, target: f32) -> bool {
    (value - target).abs() < SNAP_THRESHOLD
}

/// Which endpoint's metrics the current text size is measured against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Snap {
    Collapsed,
    #[default]
    Expanded,
    /// Between the endpoints: measured at the expanded size, drawn scaled.
    Intermediate,
}

impl Snap {
    /// Collapsed wins when both endpoints are within the threshold.
    pub fn classify(text_size: f32, collapsed_size: f32, expanded_size: f32) -> Snap {
        if is_close(text_size, collapsed_size) {
            Snap::Collapsed
        } else if is_close(text_size, expanded_size) {
            Snap::Expanded
        } else {
            Snap::Intermediate
        }
    }
}

/// Everything derived from the fraction, bounds and styles for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedFrame {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    /// Interpolated text size.
    pub text_size: f32,
    /// Endpoint size text is measured and painted at; 0 until first laid out.
    pub snapped_text_size: f32,
    pub snap: Snap,
    pub color: Color,
    pub scale: f32,
}

impl Default for DerivedFrame {
    fn default() -> Self {
        Self {
            left: 0.0,
            right: 0.0,
            top: 0.0,
            text_size: 0.0,
            snapped_text_size: 0.0,
            snap: Snap::Expanded,
            color: Color::TRANSPARENT,
            scale: 1.0,
        }
    }
}
