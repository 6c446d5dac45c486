//! End-ellipsis truncation by grapheme cluster.

use collapse_core::{TextBackend, TextStyle};
use unicode_segmentation::UnicodeSegmentation;

pub const ELLIPSIS: &str = "\u{2026}";

/// The text actually drawn, with the inputs it was fitted against.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayText {
    pub text: String,
    pub width: f32,
    pub size_px: f32,
    pub available_width: f32,
}

/// Fits `source` into `available_width` at `style`, returning `None` for
/// absent or empty source text.
pub fn fit(
    source: Option<&str>,
    style: &TextStyle,
    available_width: f32,
    measurer: &dyn TextBackend,
) -> Option<DisplayText> {
    let source = source.filter(|s| !s.is_empty())?;
    let text = ellipsize_end(source, style, available_width, measurer);
    let width = measurer.measure(&text, style);
    Some(DisplayText {
        text,
        width,
        size_px: style.size_px,
        available_width,
    })
}

/// Longest grapheme prefix of `source` that, with an ellipsis appended, fits.
/// Returns `source` unchanged when it already fits and an empty string when
/// not even the ellipsis does.
pub fn ellipsize_end(
    source: &str,
    style: &TextStyle,
    available_width: f32,
    measurer: &dyn TextBackend,
) -> String {
    if measurer.measure(source, style) <= available_width {
        return source.to_string();
    }

    // byte offset where the k-th grapheme starts == end of a k-grapheme prefix
    let starts: Vec<usize> = source.grapheme_indices(true).map(|(i, _)| i).collect();
    let with_ellipsis = |k: usize| {
        let mut s = String::with_capacity(starts[k] + ELLIPSIS.len());
        s.push_str(&source[..starts[k]]);
        s.push_str(ELLIPSIS);
        s
    };
    let fits = |k: usize| measurer.measure(&with_ellipsis(k), style) <= available_width;

    if !fits(0) {
        log::debug!("no room for an ellipsis in {available_width}px");
        return String::new();
    }

    // largest k in [0, n) that fits; widths grow with k
    let (mut lo, mut hi) = (0, starts.len() - 1);
    while lo < hi {
        let mid = (lo + hi).div_ceil(2);
        if fits(mid) {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    with_ellipsis(lo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use collapse_canvas::FixedMetricsBackend;
    use collapse_core::Color;

    fn style() -> TextStyle {
        // 10px per grapheme with the fixed backend
        TextStyle::new(20.0, Color::BLACK)
    }

    #[test]
    fn test_fitting_text_is_unchanged() {
        let b = FixedMetricsBackend::new();
        let d = fit(Some("Inbox"), &style(), 50.0, &b).unwrap();
        assert_eq!(d.text, "Inbox");
        assert_eq!(d.width, 50.0);
        assert_eq!(d.available_width, 50.0);
    }

    #[test]
    fn test_absent_or_empty_source_gives_none() {
        let b = FixedMetricsBackend::new();
        assert!(fit(None, &style(), 100.0, &b).is_none());
        assert!(fit(Some(""), &style(), 100.0, &b).is_none());
    }

    #[test]
    fn test_truncates_with_longest_fitting_prefix() {
        let b = FixedMetricsBackend::new();
        let d = fit(Some("Notifications"), &style(), 65.0, &b).unwrap();
        // 5 graphemes + ellipsis = 60 <= 65, 6 + ellipsis = 70
        assert_eq!(d.text, "Notif\u{2026}");
        assert!(d.width <= 65.0);
    }

    #[test]
    fn test_never_splits_a_grapheme() {
        let b = FixedMetricsBackend::new();
        let s = "e\u{301}e\u{301}e\u{301}e\u{301}";
        let out = ellipsize_end(s, &style(), 30.0, &b);
        assert_eq!(out, "e\u{301}e\u{301}\u{2026}");
    }

    #[test]
    fn test_no_room_for_ellipsis_gives_empty_text() {
        let b = FixedMetricsBackend::new();
        assert_eq!(ellipsize_end("Title", &style(), 5.0, &b), "");
        assert_eq!(ellipsize_end("Title", &style(), 0.0, &b), "");
        assert_eq!(ellipsize_end("Title", &style(), 10.0, &b), ELLIPSIS);
    }
}
