//! # Collapsing title
//!
//! The text engine behind a collapsing app-bar title. A `CollapsingTitle` is
//! given an expanded and a collapsed layout (bounds plus text style) and an
//! expansion fraction in `[0, 1]`; it derives where the title sits, how big it
//! is, what color it is and which (possibly ellipsized) text to draw.
//!
//! ```rust
//! use collapse_canvas::{FixedMetricsBackend, HeadlessHost, RecordingCanvas};
//! use collapse_core::*;
//! use collapse_title::*;
//!
//! let host = HeadlessHost::new(360.0, 200.0);
//! let mut title = CollapsingTitle::new(host.clone(), Box::new(FixedMetricsBackend::new()), false);
//! title.set_text_size_easing(None);
//! title.set_expanded_style(TextStyle::new(32.0, Color::WHITE));
//! title.set_collapsed_style(TextStyle::new(14.0, Color::WHITE));
//! title.set_expanded_bounds(Bounds::new(16.0, 0.0, 344.0, 150.0));
//! title.set_collapsed_bounds(Bounds::new(72.0, 144.0, 300.0, 200.0));
//! title.set_text("Events");
//!
//! title.set_expansion_fraction(0.5);
//! assert_eq!(title.frame().text_size, 23.0);
//! assert_eq!(title.frame().scale, 23.0 / 32.0);
//!
//! let mut canvas = RecordingCanvas::new(host.size());
//! title.draw(&mut canvas);
//! assert_eq!(canvas.texts().next().unwrap().0, "Events");
//! ```
//!
//! Text is measured only at the two endpoint sizes. Between them it is drawn
//! at the expanded size under a canvas scale, or, when the host enables
//! `use_scaling_texture`, as a cached bitmap of the expanded text.
//!
//! Measuring and rasterizing go through `collapse_core::TextBackend`; the
//! `collapse-text` crate provides one on top of cosmic-text and
//! `collapse-canvas` a deterministic one for tests.

pub mod arrow;
pub mod baseline;
pub mod config;
pub mod fit;
pub mod frame;
pub mod gesture;
pub mod helper;
pub mod offset;
pub mod texture;


pub use arrow::{Arrow, ArrowSize, ArrowSpec};
pub use baseline::Baselines;
pub use config::{EndpointStyle, TitleConfig};
pub use fit::{DisplayText, ELLIPSIS};
pub use frame::{DerivedFrame, SNAP_THRESHOLD, Snap};
pub use gesture::{PointerAction, TapOutcome, TitleTap};
pub use helper::CollapsingTitle;
pub use texture::{TextureCache, TextureEntry, TextureState};
