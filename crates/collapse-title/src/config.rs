use collapse_core::{Color, Easing, TextStyle};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ArrowSpec;

/// Text style at one end of the transition.
pub type EndpointStyle = TextStyle;

/// Everything needed to set up a `CollapsingTitle` in one go.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TitleConfig {
    pub text: Option<String>,
    pub expanded: EndpointStyle,
    pub collapsed: EndpointStyle,
    pub arrow: ArrowSpec,
    pub position_easing: Option<Easing>,
    pub text_size_easing: Option<Easing>,
    /// Whether the host can afford a scaled bitmap during the transition.
    pub use_scaling_texture: bool,
    pub debug_draw: bool,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            text: None,
            expanded: TextStyle::new(34.0, Color::WHITE),
            collapsed: TextStyle::new(20.0, Color::WHITE),
            arrow: ArrowSpec::default(),
            position_easing: None,
            text_size_easing: Some(Easing::Decelerate),
            use_scaling_texture: false,
            debug_draw: false,
        }
    }
}
