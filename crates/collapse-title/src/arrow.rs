//! Downward triangle drawn after the title, shrinking with the text.

use collapse_core::{FillType, Path, Vec2};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Arrow dimensions at the expanded text size, in whole pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArrowSpec {
    pub width: i32,
    pub height: i32,
    /// Gap between the end of the text and the arrow.
    pub padding: i32,
}

/// Arrow dimensions for the current snap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArrowSize {
    pub width: i32,
    pub height: i32,
    pub padding_end: i32,
}

impl ArrowSpec {
    pub fn scaled(&self, ratio: f32) -> ArrowSize {
        let s = |v: i32| (v as f32 * ratio).round() as i32;
        ArrowSize {
            width: s(self.width),
            height: s(self.height),
            padding_end: s(self.padding),
        }
    }
}

/// Size ratio the arrow is scaled by: collapsed/expanded while snapped to the
/// collapsed style, otherwise 1.
pub fn size_ratio(collapsed_style: bool, collapsed_size: f32, expanded_size: f32) -> f32 {
    if collapsed_style && expanded_size > 0.0 {
        collapsed_size / expanded_size
    } else {
        1.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Arrow {
    pub spec: ArrowSpec,
    size: ArrowSize,
}

impl Arrow {
    pub fn new(spec: ArrowSpec) -> Self {
        Self {
            spec,
            size: spec.scaled(1.0),
        }
    }

    pub fn size(&self) -> ArrowSize {
        self.size
    }

    pub fn update(&mut self, collapsed_style: bool, collapsed_size: f32, expanded_size: f32) {
        self.size = self
            .spec
            .scaled(size_ratio(collapsed_style, collapsed_size, expanded_size));
    }

    /// Where the arrow's top-left goes, given the end of the text and the
    /// baseline/descent it is drawn with.
    pub fn anchor(&self, text_end_x: f32, baseline: f32, descent: f32) -> Vec2 {
        Vec2::new(
            text_end_x + self.size.padding_end as f32,
            baseline - descent - self.size.height as f32 * 1.5,
        )
    }

    /// Rewinds `path` and traces the triangle with its top-left at `origin`.
    pub fn trace(&self, path: &mut Path, origin: Vec2) {
        let w = self.size.width as f32;
        let h = self.size.height as f32;
        path.rewind();
        path.set_fill_type(FillType::EvenOdd);
        path.move_to(origin.x, origin.y);
        path.line_to(origin.x + w / 2.0, origin.y + h);
        path.line_to(origin.x + w, origin.y);
        path.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapsed_style_scales_and_rounds() {
        let mut a = Arrow::new(ArrowSpec {
            width: 16,
            height: 8,
            padding: 10,
        });
        assert_eq!(
            a.size(),
            ArrowSize {
                width: 16,
                height: 8,
                padding_end: 10
            }
        );

        // ratio 14/32 = 0.4375: 7.0, 3.5 -> 4, 4.375 -> 4
        a.update(true, 14.0, 32.0);
        assert_eq!(
            a.size(),
            ArrowSize {
                width: 7,
                height: 4,
                padding_end: 4
            }
        );

        a.update(false, 14.0, 32.0);
        assert_eq!(a.size().width, 16);
    }

    #[test]
    fn test_trace_is_a_downward_triangle() {
        let a = Arrow::new(ArrowSpec {
            width: 10,
            height: 6,
            padding: 0,
        });
        let mut p = Path::new();
        a.trace(&mut p, Vec2::new(100.0, 40.0));
        let pts: Vec<_> = p.points().collect();
        assert_eq!(
            pts,
            vec![
                Vec2::new(100.0, 40.0),
                Vec2::new(105.0, 46.0),
                Vec2::new(110.0, 40.0)
            ]
        );
        assert_eq!(p.fill_type(), FillType::EvenOdd);
    }

    #[test]
    fn test_anchor_sits_above_descent() {
        let a = Arrow::new(ArrowSpec {
            width: 10,
            height: 6,
            padding: 4,
        });
        assert_eq!(a.anchor(50.0, 100.0, 5.0), Vec2::new(54.0, 86.0));
    }
}
