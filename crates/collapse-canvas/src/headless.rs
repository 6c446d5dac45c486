//! Headless stand-ins for the font stack and the host view.

use std::cell::Cell;
use std::rc::Rc;

use collapse_core::*;
use unicode_segmentation::UnicodeSegmentation;

/// Counters shared between a `FixedMetricsBackend` and whoever inspects it.
#[derive(Debug, Default)]
pub struct RasterStats {
    built: Cell<u32>,
    released: Cell<u32>,
    last_released: Cell<Option<RasterId>>,
}

impl RasterStats {
    pub fn built(&self) -> u32 {
        self.built.get()
    }
    pub fn released(&self) -> u32 {
        self.released.get()
    }
    pub fn live(&self) -> u32 {
        self.built.get().saturating_sub(self.released.get())
    }
    pub fn last_released(&self) -> Option<RasterId> {
        self.last_released.get()
    }
}

/// Deterministic metrics: every grapheme advances `advance * size`, ascent is
/// `-ascent * size` and descent `descent * size`. Rasters get one filled box
/// per visible grapheme.
pub struct FixedMetricsBackend {
    pub advance: f32,
    pub ascent: f32,
    pub descent: f32,
    pub max_pixels: u64,
    stats: Rc<RasterStats>,
}

impl Default for FixedMetricsBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl FixedMetricsBackend {
    pub fn new() -> Self {
        Self {
            advance: 0.5,
            ascent: 0.75,
            descent: 0.25,
            max_pixels: 16 * 1024 * 1024,
            stats: Rc::new(RasterStats::default()),
        }
    }

    /// Same as `new`, also handing back the raster counters.
    pub fn with_stats() -> (Self, Rc<RasterStats>) {
        let backend = Self::new();
        let stats = backend.stats.clone();
        (backend, stats)
    }

    pub fn stats(&self) -> Rc<RasterStats> {
        self.stats.clone()
    }
}

impl TextBackend for FixedMetricsBackend {
    fn measure(&self, text: &str, style: &TextStyle) -> f32 {
        text.graphemes(true).count() as f32 * self.advance * style.size_px
    }

    fn metrics(&self, style: &TextStyle) -> FontMetrics {
        FontMetrics {
            ascent: -self.ascent * style.size_px,
            descent: self.descent * style.size_px,
        }
    }

    fn rasterize(
        &mut self,
        text: &str,
        style: &TextStyle,
        width: u32,
        height: u32,
        baseline: f32,
    ) -> Result<Raster, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::ZeroArea { width, height });
        }
        if width as u64 * height as u64 > self.max_pixels {
            return Err(RenderError::RasterTooLarge {
                width,
                height,
                max: self.max_pixels,
            });
        }

        let mut raster = Raster::new(width, height);
        let cell = self.advance * style.size_px;
        let top = (baseline - self.ascent * style.size_px * 0.7).max(0.0) as i32;
        let bottom = baseline as i32;
        for (i, g) in text.graphemes(true).enumerate() {
            if g.trim().is_empty() {
                continue;
            }
            let x0 = (i as f32 * cell) as i32 + 1;
            let x1 = ((i + 1) as f32 * cell) as i32 - 1;
            for y in top..bottom {
                for x in x0..x1 {
                    raster.blend_pixel(x, y, style.color, 255);
                }
            }
        }

        self.stats.built.set(self.stats.built.get() + 1);
        log::trace!("headless raster {:?} {}x{}", raster.id(), width, height);
        Ok(raster)
    }

    fn release(&mut self, raster: Raster) {
        self.stats.released.set(self.stats.released.get() + 1);
        self.stats.last_released.set(Some(raster.id()));
    }
}

/// A host view whose size and direction tests can change, counting redraw
/// requests.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    size: Cell<Size>,
    direction: Cell<LayoutDirection>,
    redraws: Cell<u32>,
}

impl HeadlessHost {
    pub fn new(width: f32, height: f32) -> Rc<Self> {
        let host = HeadlessHost::default();
        host.size.set(Size::new(width, height));
        Rc::new(host)
    }

    pub fn set_size(&self, width: f32, height: f32) {
        self.size.set(Size::new(width, height));
    }

    pub fn set_layout_direction(&self, direction: LayoutDirection) {
        self.direction.set(direction);
    }

    pub fn redraws(&self) -> u32 {
        self.redraws.get()
    }
}

impl Host for HeadlessHost {
    fn size(&self) -> Size {
        self.size.get()
    }

    fn layout_direction(&self) -> LayoutDirection {
        self.direction.get()
    }

    fn request_redraw(&self) {
        self.redraws.set(self.redraws.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_metrics_count_graphemes() {
        let b = FixedMetricsBackend::new();
        let style = TextStyle::new(20.0, Color::BLACK);
        // "e" + combining acute is one grapheme
        assert_eq!(b.measure("ae\u{301}b", &style), 30.0);
        assert_eq!(b.metrics(&style).ascent, -15.0);
        assert_eq!(b.metrics(&style).descent, 5.0);
    }

    #[test]
    fn test_rasterize_rejects_zero_area_and_counts() {
        let (mut b, stats) = FixedMetricsBackend::with_stats();
        let style = TextStyle::new(20.0, Color::WHITE);
        assert!(matches!(
            b.rasterize("x", &style, 0, 20, 15.0),
            Err(RenderError::ZeroArea { .. })
        ));

        let r = b.rasterize("x", &style, 10, 20, 15.0).expect("raster");
        assert_eq!(stats.built(), 1);
        assert!(r.pixels.iter().any(|&p| p != 0));
        let id = r.id();
        b.release(r);
        assert_eq!(stats.live(), 0);
        assert_eq!(stats.last_released(), Some(id));
    }

    #[test]
    fn test_releasing_a_foreign_raster_keeps_live_at_zero() {
        let (mut b, stats) = FixedMetricsBackend::with_stats();
        b.release(Raster::new(2, 2));
        assert_eq!(stats.released(), 1);
        assert_eq!(stats.live(), 0);
    }

    #[test]
    fn test_host_counts_redraws() {
        let host = HeadlessHost::new(0.0, 0.0);
        assert!(!host.size().is_laid_out());
        host.set_size(100.0, 50.0);
        host.request_redraw();
        host.request_redraw();
        assert_eq!(host.redraws(), 2);
        assert!(host.size().is_laid_out());
    }
}
