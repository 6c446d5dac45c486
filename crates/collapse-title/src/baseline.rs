use collapse_core::{Bounds, FontMetrics, TextBackend, TextStyle};

/// Vertical text anchors for both endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Baselines {
    /// Baseline that vertically centers collapsed-size text in the collapsed bounds.
    pub collapsed_top: f32,
    /// Expanded text sits on the bottom edge of the expanded bounds.
    pub expanded_top: f32,
    /// Metrics at the expanded size, kept for texture sizing.
    pub expanded_metrics: FontMetrics,
}

pub fn calculate(
    collapsed_bounds: Bounds,
    expanded_bounds: Bounds,
    collapsed: &TextStyle,
    expanded: &TextStyle,
    measurer: &dyn TextBackend,
) -> Baselines {
    let m = measurer.metrics(collapsed);
    let text_height = m.descent - m.ascent;
    let text_offset = text_height / 2.0 - m.descent;

    Baselines {
        collapsed_top: collapsed_bounds.center_y() + text_offset,
        expanded_top: expanded_bounds.bottom,
        expanded_metrics: measurer.metrics(expanded),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collapse_canvas::FixedMetricsBackend;
    use collapse_core::Color;

    #[test]
    fn test_collapsed_baseline_centers_text() {
        let b = FixedMetricsBackend::new();
        let collapsed = Bounds::new(72.0, 144.0, 300.0, 200.0);
        let expanded = Bounds::new(16.0, 0.0, 344.0, 150.0);
        let base = calculate(
            collapsed,
            expanded,
            &TextStyle::new(14.0, Color::WHITE),
            &TextStyle::new(32.0, Color::WHITE),
            &b,
        );
        // ascent -10.5, descent 3.5: the glyph box [baseline-10.5, baseline+3.5]
        // is centered on 172
        assert_eq!(base.collapsed_top, 175.5);
        assert_eq!(base.expanded_top, 150.0);
        assert_eq!(base.expanded_metrics.line_height(), 32.0);
    }
}
