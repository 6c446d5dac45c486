use std::rc::Rc;

use collapse_core::*;

use crate::arrow::{Arrow, ArrowSize, ArrowSpec};
use crate::baseline::{self, Baselines};
use crate::config::{EndpointStyle, TitleConfig};
use crate::fit::{self, DisplayText};
use crate::frame::{DerivedFrame, Snap};
use crate::texture::{TextureCache, TextureEntry};

/// A title that moves, shrinks and recolors between an expanded and a
/// collapsed layout as `expansion_fraction` goes from 0 to 1.
///
/// All geometry is derived state: setters store their input and recompute the
/// whole frame, requesting one redraw from the host per recompute. Nothing is
/// computed while the host has no size.
pub struct CollapsingTitle {
    host: Rc<dyn Host>,
    backend: Box<dyn TextBackend>,
    use_scaling_texture: bool,
    debug_draw: bool,

    expansion_fraction: f32,
    expanded_bounds: Bounds,
    collapsed_bounds: Bounds,
    expanded: EndpointStyle,
    collapsed: EndpointStyle,
    position_easing: Option<Easing>,
    text_size_easing: Option<Easing>,

    text: Option<String>,
    display: Option<DisplayText>,
    baselines: Baselines,
    frame: DerivedFrame,
    use_texture: bool,
    texture: TextureCache,
    arrow: Arrow,
}

impl CollapsingTitle {
    /// `use_scaling_texture` says whether the host can afford drawing a scaled
    /// bitmap during the transition instead of scaled text.
    pub fn new(
        host: Rc<dyn Host>,
        backend: Box<dyn TextBackend>,
        use_scaling_texture: bool,
    ) -> Self {
        let config = TitleConfig::default();
        Self {
            host,
            backend,
            use_scaling_texture,
            debug_draw: false,
            expansion_fraction: 0.0,
            expanded_bounds: Bounds::ZERO,
            collapsed_bounds: Bounds::ZERO,
            expanded: config.expanded,
            collapsed: config.collapsed,
            position_easing: config.position_easing,
            text_size_easing: config.text_size_easing,
            text: None,
            display: None,
            baselines: Baselines::default(),
            frame: DerivedFrame::default(),
            use_texture: false,
            texture: TextureCache::new(),
            arrow: Arrow::new(config.arrow),
        }
    }

    pub fn from_config(
        config: TitleConfig,
        host: Rc<dyn Host>,
        backend: Box<dyn TextBackend>,
    ) -> Self {
        let mut title = Self::new(host, backend, config.use_scaling_texture);
        title.debug_draw = config.debug_draw;
        title.expanded = config.expanded;
        title.collapsed = config.collapsed;
        title.position_easing = config.position_easing;
        title.text_size_easing = config.text_size_easing;
        title.arrow = Arrow::new(config.arrow);
        title.text = config.text.filter(|t| !t.is_empty());
        title.recalculate();
        title
    }

    // ---- inputs ----

    pub fn set_expansion_fraction(&mut self, fraction: f32) {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        if fraction != self.expansion_fraction {
            self.expansion_fraction = fraction;
            if self.is_laid_out() {
                self.calculate_offsets();
            }
        }
    }

    pub fn set_expanded_bounds(&mut self, bounds: Bounds) {
        self.expanded_bounds = bounds;
        self.clear_texture();
        self.recalculate();
    }

    pub fn set_collapsed_bounds(&mut self, bounds: Bounds) {
        self.collapsed_bounds = bounds;
        self.clear_texture();
        self.recalculate();
    }

    pub fn set_expanded_text_color(&mut self, color: Color) {
        if self.expanded.color != color {
            self.expanded.color = color;
            self.clear_texture();
            self.recalculate();
        }
    }

    pub fn set_collapsed_text_color(&mut self, color: Color) {
        if self.collapsed.color != color {
            self.collapsed.color = color;
            self.recalculate();
        }
    }

    /// Replaces the whole expanded text appearance.
    pub fn set_expanded_style(&mut self, style: EndpointStyle) {
        if self.expanded.typeface != style.typeface {
            self.display = None;
        }
        self.expanded = style;
        self.clear_texture();
        self.recalculate();
    }

    pub fn set_collapsed_style(&mut self, style: EndpointStyle) {
        if self.collapsed.typeface != style.typeface {
            self.display = None;
        }
        self.collapsed = style;
        self.clear_texture();
        self.recalculate();
    }

    pub fn set_typeface(&mut self, typeface: Typeface) {
        self.expanded.typeface = typeface.clone();
        self.collapsed.typeface = typeface;
        self.display = None;
        self.clear_texture();
        self.recalculate();
    }

    /// Sets the source text; an empty string clears it. Re-setting the same
    /// text is a no-op.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = Some(text.into()).filter(|t| !t.is_empty());
        if text.is_some() && text == self.text {
            return;
        }
        self.text = text;
        self.display = None;
        self.clear_texture();
        self.recalculate();
    }

    pub fn clear_text(&mut self) {
        self.set_text(String::new());
    }

    pub fn set_arrow_width(&mut self, width: i32) {
        self.arrow.spec.width = width;
        self.recalculate();
    }

    pub fn set_arrow_height(&mut self, height: i32) {
        self.arrow.spec.height = height;
        self.recalculate();
    }

    pub fn set_arrow_padding(&mut self, padding: i32) {
        self.arrow.spec.padding = padding;
        self.recalculate();
    }

    pub fn set_arrow_spec(&mut self, spec: ArrowSpec) {
        self.arrow.spec = spec;
        self.recalculate();
    }

    pub fn set_position_easing(&mut self, easing: Option<Easing>) {
        self.position_easing = easing;
        self.recalculate();
    }

    pub fn set_text_size_easing(&mut self, easing: Option<Easing>) {
        self.text_size_easing = easing;
        self.recalculate();
    }

    pub fn set_debug_draw(&mut self, enabled: bool) {
        if self.debug_draw != enabled {
            self.debug_draw = enabled;
            self.host.request_redraw();
        }
    }

    /// Recomputes baselines and the frame, if the host has been laid out.
    pub fn recalculate(&mut self) {
        if !self.is_laid_out() {
            log::trace!("title host not laid out; skipping recalculate");
            return;
        }
        self.calculate_baselines();
        self.calculate_offsets();
    }

    /// Hook for the host's layout pass.
    pub fn on_layout(&mut self) {
        self.recalculate();
    }

    /// Drops the cached texture, releasing it through the backend.
    pub fn teardown(&mut self) {
        self.clear_texture();
    }

    // ---- state ----

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn expansion_fraction(&self) -> f32 {
        self.expansion_fraction
    }

    pub fn frame(&self) -> &DerivedFrame {
        &self.frame
    }

    pub fn display_text(&self) -> Option<&DisplayText> {
        self.display.as_ref()
    }

    pub fn baselines(&self) -> &Baselines {
        &self.baselines
    }

    pub fn arrow_size(&self) -> ArrowSize {
        self.arrow.size()
    }

    pub fn uses_texture(&self) -> bool {
        self.use_texture
    }

    pub fn texture(&self) -> Option<&TextureEntry> {
        self.texture.entry()
    }

    pub fn collapsed_bounds(&self) -> Bounds {
        self.collapsed_bounds
    }

    pub fn expanded_bounds(&self) -> Bounds {
        self.expanded_bounds
    }

    pub fn expanded_style(&self) -> &EndpointStyle {
        &self.expanded
    }

    pub fn collapsed_style(&self) -> &EndpointStyle {
        &self.collapsed
    }

    // ---- derivation ----

    fn is_laid_out(&self) -> bool {
        self.host.size().is_laid_out()
    }

    fn endpoint(&self, snap: Snap) -> &EndpointStyle {
        match snap {
            Snap::Collapsed => &self.collapsed,
            Snap::Expanded | Snap::Intermediate => &self.expanded,
        }
    }

    fn calculate_baselines(&mut self) {
        self.baselines = baseline::calculate(
            self.collapsed_bounds,
            self.expanded_bounds,
            &self.collapsed,
            &self.expanded,
            self.backend.as_ref(),
        );
        self.clear_texture();
    }

    fn calculate_offsets(&mut self) {
        let f = self.expansion_fraction;
        let (e, c) = (self.expanded_bounds, self.collapsed_bounds);

        self.frame.left = interpolate(e.left, c.left, f, self.position_easing);
        self.frame.top = interpolate(
            self.baselines.expanded_top,
            self.baselines.collapsed_top,
            f,
            self.position_easing,
        );
        self.frame.right = interpolate(e.right, c.right, f, self.position_easing);
        let size = interpolate(
            self.expanded.size_px,
            self.collapsed.size_px,
            f,
            self.text_size_easing,
        );
        self.set_interpolated_text_size(size);

        // Color follows the raw fraction, not the eased one.
        self.frame.color = if self.collapsed.color != self.expanded.color {
            self.expanded.color.blend(self.collapsed.color, f)
        } else {
            self.collapsed.color
        };

        log::trace!(
            "title frame f={f} left={} top={} size={} scale={}",
            self.frame.left,
            self.frame.top,
            self.frame.text_size,
            self.frame.scale
        );
        self.host.request_redraw();
    }

    fn set_interpolated_text_size(&mut self, text_size: f32) {
        self.frame.text_size = text_size;
        if self.text.is_none() {
            return;
        }

        let snap = Snap::classify(text_size, self.collapsed.size_px, self.expanded.size_px);
        let (available_width, selected_size) = match snap {
            Snap::Collapsed => (self.collapsed_bounds.width(), self.collapsed.size_px),
            Snap::Expanded | Snap::Intermediate => {
                (self.expanded_bounds.width(), self.expanded.size_px)
            }
        };
        self.frame.snap = snap;
        self.arrow.update(
            snap == Snap::Collapsed,
            self.collapsed.size_px,
            self.expanded.size_px,
        );
        self.frame.scale = match snap {
            Snap::Intermediate if self.expanded.size_px > 0.0 => {
                text_size / self.expanded.size_px
            }
            Snap::Intermediate | Snap::Collapsed | Snap::Expanded => 1.0,
        };

        let mut size_changed = false;
        let mut width_changed = false;
        if available_width > 0.0 {
            size_changed = self.frame.snapped_text_size != selected_size;
            self.frame.snapped_text_size = selected_size;
            width_changed = self
                .display
                .as_ref()
                .is_some_and(|d| d.available_width != available_width);
        }
        if self.display.is_none() || size_changed || width_changed {
            self.refit(snap, available_width);
        }

        self.use_texture = self.use_scaling_texture && self.frame.scale != 1.0;
        if self.use_texture {
            self.ensure_texture();
        }
    }

    fn refit(&mut self, snap: Snap, available_width: f32) {
        let style = self.endpoint(snap).clone();
        let display = fit::fit(
            self.text.as_deref(),
            &style,
            available_width,
            self.backend.as_ref(),
        );
        let text_changed = match (&self.display, &display) {
            (Some(old), Some(new)) => old.text != new.text,
            _ => true,
        };
        if text_changed {
            self.clear_texture();
        }
        if let Some(d) = &display {
            log::debug!("title fitted {:?} at {}px in {}px", d.text, d.size_px, available_width);
        }
        self.display = display;
    }

    fn ensure_texture(&mut self) {
        let Some(display) = self.display.as_ref() else {
            return;
        };
        self.texture.ensure(
            &display.text,
            &self.expanded,
            self.expanded_bounds,
            self.backend.as_mut(),
        );
    }

    fn clear_texture(&mut self) {
        self.texture.invalidate(self.backend.as_mut());
    }

    // ---- output ----

    /// The texture to draw this frame, if the texture path is active and built.
    fn texture_to_draw(&self) -> Option<&TextureEntry> {
        if self.use_texture {
            self.texture.entry()
        } else {
            None
        }
    }

    fn paint_style(&self) -> TextStyle {
        TextStyle {
            size_px: self.frame.snapped_text_size,
            color: self.frame.color,
            typeface: self.endpoint(self.frame.snap).typeface.clone(),
        }
    }

    fn current_metrics(&self, texture: Option<&TextureEntry>, paint: &TextStyle) -> FontMetrics {
        let m = match texture {
            Some(t) => FontMetrics {
                ascent: t.ascent,
                descent: t.descent,
            },
            None => self.backend.metrics(paint),
        };
        m.scaled(self.frame.scale)
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let Some(display) = self.display.as_ref() else {
            return;
        };
        let save = canvas.save();

        let rtl = self.host.layout_direction().is_rtl();
        let texture = self.texture_to_draw();
        let paint = self.paint_style();
        let metrics = self.current_metrics(texture, &paint);

        let mut x = if rtl { self.frame.right } else { self.frame.left };
        let mut y = self.frame.top;

        if self.debug_draw {
            canvas.draw_rect(self.text_rect(metrics), Color::MAGENTA);
            canvas.draw_rect(self.collapsed_bounds, Color::BLUE);
        }

        if texture.is_some() {
            y += metrics.ascent;
        }
        if self.frame.scale != 1.0 {
            canvas.scale(self.frame.scale, self.frame.scale, Vec2::new(x, y));
        }

        let text_width = texture.map_or(display.width, |t| t.width() as f32);
        if rtl {
            x -= text_width;
        }

        // baseline and descent in the canvas' local (unscaled) space
        let (baseline, descent) = match texture {
            Some(t) => {
                canvas.draw_raster(t.raster(), Vec2::new(x, y));
                (y + t.height() as f32 - t.descent, t.descent)
            }
            None => {
                canvas.draw_text(&display.text, Vec2::new(x, y), &paint);
                (y, self.backend.metrics(&paint).descent)
            }
        };

        let arrow = self.arrow.size();
        if arrow.width > 0 && arrow.height > 0 {
            let mut path = Path::new();
            self.arrow
                .trace(&mut path, self.arrow.anchor(x + text_width, baseline, descent));
            canvas.draw_path(&path, self.frame.color);
        }

        canvas.restore_to_count(save);
    }

    fn text_rect(&self, metrics: FontMetrics) -> Bounds {
        Bounds::new(
            self.frame.left,
            self.frame.top + metrics.ascent,
            self.frame.right,
            self.frame.top + metrics.descent,
        )
    }

    /// Whether `(x, y)` falls on the title's current text line. Always false
    /// while there is nothing to draw.
    pub fn is_in_rect(&self, x: f32, y: f32) -> bool {
        if self.display.is_none() {
            return false;
        }
        let texture = self.texture_to_draw();
        let metrics = self.current_metrics(texture, &self.paint_style());
        self.text_rect(metrics).contains(Vec2::new(x, y))
    }
}

impl Drop for CollapsingTitle {
    fn drop(&mut self) {
        self.clear_texture();
    }
}

impl std::fmt::Debug for CollapsingTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollapsingTitle")
            .field("text", &self.text)
            .field("expansion_fraction", &self.expansion_fraction)
            .field("frame", &self.frame)
            .field("display", &self.display)
            .field("use_texture", &self.use_texture)
            .finish_non_exhaustive()
    }
}
