//! cosmic-text implementation of `collapse_core::TextBackend`.
//!
//! One `FontSystem` + `SwashCache` pair is shared by the whole process behind
//! a mutex; `CosmicTextBackend` values are cheap handles onto it. Widths and
//! font metrics are memoized per (text, size, family) because titles remeasure
//! the same strings on every snap.

use ahash::{AHashMap, AHashSet};
use collapse_core::{FontMetrics, Raster, RenderError, TextBackend, TextStyle, Typeface};
use cosmic_text::{
    Attrs, Buffer, CacheKey, Family, FontSystem, Metrics, Shaping, SwashCache, SwashContent,
};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;

const LINE_HEIGHT: f32 = 1.3;
// Used when no font in the system yields metrics (headless CI boxes).
const FALLBACK_ASCENT: f32 = 0.8;
const FALLBACK_DESCENT: f32 = 0.2;
const METRICS_PROBE: &str = "Hg";
const MEMO_LIMIT: usize = 512;

#[derive(Clone, PartialEq, Eq, Hash)]
struct WidthKey {
    text: String,
    size_bits: u32,
    family: Option<String>,
}

#[derive(Clone, PartialEq, Eq, Hash)]
struct MetricsKey {
    size_bits: u32,
    family: Option<String>,
}

struct Engine {
    fs: FontSystem,
    cache: SwashCache,
    widths: AHashMap<WidthKey, f32>,
    metrics: AHashMap<MetricsKey, FontMetrics>,
    missing_families: AHashSet<String>,
}

impl Engine {
    fn get_image(&mut self, key: CacheKey) -> Option<cosmic_text::SwashImage> {
        self.cache.get_image(&mut self.fs, key).clone()
    }

    fn family_available(&mut self, name: &str) -> bool {
        let families = [fontdb::Family::Name(name)];
        let query = fontdb::Query {
            families: &families,
            weight: fontdb::Weight::NORMAL,
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        };
        self.fs.db().query(&query).is_some()
    }

    /// Returns the family to shape with, warning once per missing name.
    fn resolve<'a>(&mut self, typeface: &'a Typeface) -> Option<&'a str> {
        let name = typeface.family_name()?;
        if self.missing_families.contains(name) {
            return None;
        }
        if self.family_available(name) {
            Some(name)
        } else {
            log::warn!("typeface `{name}` not found; using default sans-serif");
            self.missing_families.insert(name.to_string());
            None
        }
    }

    fn shape(&mut self, text: &str, style: &TextStyle) -> Buffer {
        let px = style.size_px.max(1.0);
        let family = match self.resolve(&style.typeface) {
            Some(name) => Family::Name(name),
            None => Family::SansSerif,
        };
        let attrs = Attrs::new().family(family);

        let mut buf = Buffer::new(&mut self.fs, Metrics::new(px, px * LINE_HEIGHT));
        {
            let mut b = buf.borrow_with(&mut self.fs);
            b.set_size(None, None);
            b.set_text(text, &attrs, Shaping::Advanced, None);
            b.shape_until_scroll(true);
        }
        buf
    }
}

static ENGINE: OnceCell<Mutex<Engine>> = OnceCell::new();

fn engine() -> &'static Mutex<Engine> {
    ENGINE.get_or_init(|| {
        let fs = FontSystem::new();
        let cache = SwashCache::new();
        Mutex::new(Engine {
            fs,
            cache,
            widths: AHashMap::new(),
            metrics: AHashMap::new(),
            missing_families: AHashSet::new(),
        })
    })
}

#[derive(Clone, Copy, Debug)]
pub struct CosmicTextBackend {
    /// Upper bound on raster area in pixels.
    pub max_pixels: u64,
}

impl Default for CosmicTextBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CosmicTextBackend {
    pub fn new() -> Self {
        Self {
            max_pixels: 4096 * 4096,
        }
    }

    /// Checks that a named typeface resolves in the system font database.
    pub fn check_typeface(&self, typeface: &Typeface) -> Result<(), RenderError> {
        match typeface.family_name() {
            None => Ok(()),
            Some(name) => {
                if engine().lock().family_available(name) {
                    Ok(())
                } else {
                    Err(RenderError::TypefaceNotFound(name.to_string()))
                }
            }
        }
    }
}

impl TextBackend for CosmicTextBackend {
    fn measure(&self, text: &str, style: &TextStyle) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        let key = WidthKey {
            text: text.to_string(),
            size_bits: style.size_px.to_bits(),
            family: style.typeface.0.clone(),
        };
        let mut eng = engine().lock();
        if let Some(w) = eng.widths.get(&key) {
            return *w;
        }

        let buf = eng.shape(text, style);
        let width = buf.layout_runs().fold(0.0f32, |w, run| w.max(run.line_w));

        if eng.widths.len() >= MEMO_LIMIT {
            eng.widths.clear();
        }
        eng.widths.insert(key, width);
        width
    }

    fn metrics(&self, style: &TextStyle) -> FontMetrics {
        let key = MetricsKey {
            size_bits: style.size_px.to_bits(),
            family: style.typeface.0.clone(),
        };
        let mut eng = engine().lock();
        if let Some(m) = eng.metrics.get(&key) {
            return *m;
        }

        let mut buf = eng.shape(METRICS_PROBE, style);
        let measured = buf
            .line_layout(&mut eng.fs, 0)
            .and_then(|lines| lines.first())
            .map(|line| (line.max_ascent, line.max_descent));

        let metrics = match measured {
            Some((ascent, descent)) if ascent > 0.0 => FontMetrics {
                ascent: -ascent,
                descent: descent.max(0.0),
            },
            _ => {
                log::warn!(
                    "no font metrics at {}px; using fallback ratios",
                    style.size_px
                );
                FontMetrics {
                    ascent: -FALLBACK_ASCENT * style.size_px,
                    descent: FALLBACK_DESCENT * style.size_px,
                }
            }
        };

        if eng.metrics.len() >= MEMO_LIMIT {
            eng.metrics.clear();
        }
        eng.metrics.insert(key, metrics);
        metrics
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
        let mut eng = engine().lock();
        let buf = eng.shape(text, style);

        let mut keys = Vec::new();
        for run in buf.layout_runs() {
            for g in run.glyphs {
                // Place the baseline where the caller asked, not where the
                // buffer's line box would put it.
                let phys = g.physical((0.0, baseline), 1.0);
                keys.push((phys.cache_key, phys.x, phys.y));
            }
        }

        for (key, gx, gy) in keys {
            let Some(img) = eng.get_image(key) else {
                continue;
            };
            let w = img.placement.width as i32;
            let h = img.placement.height as i32;
            let ox = gx + img.placement.left;
            let oy = gy - img.placement.top;
            for j in 0..h {
                for i in 0..w {
                    let idx = (j * w + i) as usize;
                    match img.content {
                        SwashContent::Mask => {
                            let a = img.data.get(idx).copied().unwrap_or(0);
                            raster.blend_pixel(ox + i, oy + j, style.color, a);
                        }
                        SwashContent::SubpixelMask => {
                            let px = img.data.get(idx * 4..idx * 4 + 3).unwrap_or(&[0, 0, 0]);
                            let a = px.iter().copied().max().unwrap_or(0);
                            raster.blend_pixel(ox + i, oy + j, style.color, a);
                        }
                        SwashContent::Color => {
                            if let Some(px) = img.data.get(idx * 4..idx * 4 + 4) {
                                let c = collapse_core::Color(px[0], px[1], px[2], 255);
                                raster.blend_pixel(ox + i, oy + j, c, px[3]);
                            }
                        }
                    }
                }
            }
        }

        log::debug!(
            "rasterized {:?} into {}x{} ({} bytes)",
            text,
            width,
            height,
            raster.byte_len()
        );
        Ok(raster)
    }
}
