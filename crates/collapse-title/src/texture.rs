//! Pre-rendered expanded-size bitmap, drawn scaled during the transition
//! when the host asks for it.

use collapse_core::{Bounds, Raster, TextBackend, TextStyle};

pub struct TextureEntry {
    raster: Raster,
    /// Metrics the raster was laid out with, at the expanded size.
    pub ascent: f32,
    pub descent: f32,
}

impl TextureEntry {
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    pub fn width(&self) -> u32 {
        self.raster.width
    }

    pub fn height(&self) -> u32 {
        self.raster.height
    }
}

impl std::fmt::Debug for TextureEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextureEntry")
            .field("id", &self.raster.id())
            .field("width", &self.raster.width)
            .field("height", &self.raster.height)
            .field("ascent", &self.ascent)
            .field("descent", &self.descent)
            .finish()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureState {
    Absent,
    Ready,
}

/// At most one raster, built lazily and reused until invalidated.
#[derive(Debug, Default)]
pub struct TextureCache {
    entry: Option<TextureEntry>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TextureState {
        if self.entry.is_some() {
            TextureState::Ready
        } else {
            TextureState::Absent
        }
    }

    pub fn entry(&self) -> Option<&TextureEntry> {
        self.entry.as_ref()
    }

    /// Builds the raster for `text` at `style` unless one is already cached.
    ///
    /// Nothing is built while the expanded bounds are empty, and a build whose
    /// width or height rounds up to zero is abandoned. Backend failures are
    /// logged and leave the cache empty so callers fall back to direct text.
    pub fn ensure(
        &mut self,
        text: &str,
        style: &TextStyle,
        expanded_bounds: Bounds,
        backend: &mut dyn TextBackend,
    ) -> Option<&TextureEntry> {
        if self.entry.is_none() {
            self.entry = build(text, style, expanded_bounds, backend);
        }
        self.entry.as_ref()
    }

    /// Releases the cached raster through `backend`. Returns whether one existed.
    pub fn invalidate(&mut self, backend: &mut dyn TextBackend) -> bool {
        match self.entry.take() {
            Some(entry) => {
                log::debug!("releasing title texture {:?}", entry.raster.id());
                backend.release(entry.raster);
                true
            }
            None => false,
        }
    }
}

fn build(
    text: &str,
    style: &TextStyle,
    expanded_bounds: Bounds,
    backend: &mut dyn TextBackend,
) -> Option<TextureEntry> {
    if expanded_bounds.is_empty() || text.is_empty() {
        return None;
    }

    let metrics = backend.metrics(style);
    let width = backend.measure(text, style).ceil();
    let height = metrics.line_height().ceil();
    if width <= 0.0 || height <= 0.0 {
        log::debug!("title texture would be {width}x{height}; skipping");
        return None;
    }

    let baseline = height - metrics.descent;
    match backend.rasterize(text, style, width as u32, height as u32, baseline) {
        Ok(raster) => {
            log::debug!("built title texture {:?} {width}x{height}", raster.id());
            Some(TextureEntry {
                raster,
                ascent: metrics.ascent,
                descent: metrics.descent,
            })
        }
        Err(e) => {
            log::warn!("title texture unavailable: {e}");
            None
        }
    }
}
