use thiserror::Error;

/// Failures reported by a `TextBackend`. None of these reach the title's
/// callers; the engine logs them and falls back to drawing text directly.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RenderError {
    #[error("refusing to allocate a {width}x{height} raster")]
    ZeroArea { width: u32, height: u32 },
    #[error("raster of {width}x{height} exceeds the {max} pixel limit")]
    RasterTooLarge { width: u32, height: u32, max: u64 },
    #[error("typeface `{0}` is not available")]
    TypefaceNotFound(String),
}
