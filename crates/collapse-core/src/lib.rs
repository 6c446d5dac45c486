//! # Core types for collapsing titles
//!
//! Everything the title engine needs that is not specific to the engine
//! itself lives here:
//!
//! - `Bounds`, `Vec2`, `Size`, `Transform`: plain geometry values.
//! - `Color`: 8-bit ARGB color with the naive per-channel blend.
//! - `Easing` / `Interpolate` / `interpolate`: fraction remapping and lerp.
//! - `LayoutDirection`: LTR or RTL.
//! - `Path`: small polygon builder used for glyph-like shapes.
//! - `Host`, `TextBackend`, `Canvas`: the narrow interfaces to the view
//!   container and the rasterization backend.
//!
//! ## Interpolating a value
//!
//! ```rust
//! use collapse_core::*;
//!
//! let left = interpolate(16.0, 72.0, 0.5, None);
//! assert_eq!(left, 44.0);
//!
//! let size = interpolate(32.0, 14.0, 0.5, Some(Easing::Decelerate));
//! assert!(size < 23.0);
//! ```
//!
//! Colors blend per channel without gamma correction:
//!
//! ```rust
//! use collapse_core::Color;
//!
//! let c = Color::from_argb(0xFF00_0000).blend(Color::from_argb(0xFFFF_FFFF), 1.0);
//! assert_eq!(c.to_argb(), 0xFFFF_FFFF);
//! ```
//!
//! Implementors of `TextBackend` only need to measure, report font metrics,
//! and turn a string into a `Raster`. Everything else (snapping, truncation,
//! caching) is handled by `collapse-title`.

pub mod animation;
pub mod color;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod path;
pub mod render_api;
pub mod tests;

pub use animation::*;
pub use color::*;
pub use direction::*;
pub use error::*;
pub use geometry::*;
pub use path::*;
pub use render_api::*;
