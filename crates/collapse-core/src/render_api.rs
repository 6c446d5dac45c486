use std::sync::atomic::{AtomicU64, Ordering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Bounds, Color, LayoutDirection, Path, RenderError, Size, Vec2};

/// Opaque font selection. `None` means the backend's default sans-serif.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Typeface(pub Option<String>);

impl Typeface {
    pub const DEFAULT: Typeface = Typeface(None);

    pub fn family(name: impl Into<String>) -> Self {
        Typeface(Some(name.into()))
    }

    pub fn family_name(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

/// Size, color and typeface of a piece of text. Also used as the per-endpoint
/// style of a collapsing title.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TextStyle {
    pub size_px: f32,
    pub color: Color,
    pub typeface: Typeface,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size_px: 16.0,
            color: Color::BLACK,
            typeface: Typeface::DEFAULT,
        }
    }
}

impl TextStyle {
    pub fn new(size_px: f32, color: Color) -> Self {
        Self {
            size_px,
            color,
            typeface: Typeface::DEFAULT,
        }
    }

    pub fn with_size(&self, size_px: f32) -> Self {
        Self {
            size_px,
            ..self.clone()
        }
    }

    pub fn with_color(&self, color: Color) -> Self {
        Self {
            color,
            ..self.clone()
        }
    }
}

/// Font-level vertical metrics relative to the baseline. `ascent` is negative
/// (above the baseline), `descent` positive.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FontMetrics {
    pub ascent: f32,
    pub descent: f32,
}

impl FontMetrics {
    pub fn line_height(&self) -> f32 {
        self.descent - self.ascent
    }

    pub fn scaled(&self, scale: f32) -> FontMetrics {
        FontMetrics {
            ascent: self.ascent * scale,
            descent: self.descent * scale,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RasterId(pub u64);

static NEXT_RASTER_ID: AtomicU64 = AtomicU64::new(1);

/// Offscreen RGBA8 bitmap. Owned by exactly one holder; dropping it frees the
/// pixels, `TextBackend::release` gives the backend a chance to free anything
/// it keeps on the side (GPU textures, pools).
#[derive(Debug, PartialEq)]
pub struct Raster {
    id: RasterId,
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Raster {
    /// Allocates a transparent raster with a fresh id.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            id: RasterId(NEXT_RASTER_ID.fetch_add(1, Ordering::Relaxed)),
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn id(&self) -> RasterId {
        self.id
    }

    pub fn byte_len(&self) -> usize {
        self.pixels.len()
    }

    /// Source-over blend of `color` with coverage `alpha` into pixel (x, y).
    /// Out-of-range coordinates are ignored.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color, alpha: u8) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let a = (color.3 as u32 * alpha as u32) / 255;
        let inv = 255 - a;
        let px = &mut self.pixels[i..i + 4];
        px[0] = ((color.0 as u32 * a + px[0] as u32 * inv) / 255) as u8;
        px[1] = ((color.1 as u32 * a + px[1] as u32 * inv) / 255) as u8;
        px[2] = ((color.2 as u32 * a + px[2] as u32 * inv) / 255) as u8;
        px[3] = (a + px[3] as u32 * inv / 255) as u8;
    }
}

/// The view that owns a title: reports its size and direction and schedules
/// repaints.
pub trait Host {
    fn size(&self) -> Size;
    fn layout_direction(&self) -> LayoutDirection {
        LayoutDirection::Ltr
    }
    /// Fire-and-forget; multiple requests before the next frame coalesce.
    fn request_redraw(&self);
}

/// Text shaping, measuring and offscreen rasterization.
pub trait TextBackend {
    /// Advance width of `text` laid out on a single line.
    fn measure(&self, text: &str, style: &TextStyle) -> f32;

    fn metrics(&self, style: &TextStyle) -> FontMetrics;

    /// Renders `text` into a new `width` x `height` raster with its baseline at
    /// `baseline` pixels from the top.
    fn rasterize(
        &mut self,
        text: &str,
        style: &TextStyle,
        width: u32,
        height: u32,
        baseline: f32,
    ) -> Result<Raster, RenderError>;

    fn release(&mut self, raster: Raster) {
        drop(raster);
    }
}

/// Immediate drawing surface with a save/restore transform stack.
pub trait Canvas {
    /// Pushes the current transform, returning the depth before the push.
    fn save(&mut self) -> usize;
    fn restore_to_count(&mut self, count: usize);
    fn scale(&mut self, sx: f32, sy: f32, pivot: Vec2);
    /// `origin` is the left end of the baseline.
    fn draw_text(&mut self, text: &str, origin: Vec2, style: &TextStyle);
    /// `origin` is the top-left corner of the raster.
    fn draw_raster(&mut self, raster: &Raster, origin: Vec2);
    fn draw_path(&mut self, path: &Path, color: Color);
    fn draw_rect(&mut self, bounds: Bounds, color: Color);
}
