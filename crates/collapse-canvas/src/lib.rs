//! # Recording canvas
//!
//! `RecordingCanvas` implements `collapse_core::Canvas` by recording every
//! draw call, together with the transform that was active when it was made,
//! into a `Vec<DrawCommand>`. Renderers replay the list; tests assert on it.
//!
//! ```rust
//! use collapse_core::*;
//! use collapse_canvas::*;
//!
//! let mut canvas = RecordingCanvas::new(Size::new(360.0, 200.0));
//! let save = canvas.save();
//! canvas.scale(0.5, 0.5, Vec2::new(16.0, 100.0));
//! canvas.draw_text("Title", Vec2::new(16.0, 100.0), &TextStyle::new(32.0, Color::BLACK));
//! canvas.restore_to_count(save);
//!
//! let text = canvas.texts().next().unwrap();
//! assert_eq!(text.1.scale_x, 0.5);
//! ```
//!
//! The `headless` module has a deterministic `TextBackend` and a `Host` that
//! need no fonts or window, for tests and demos.

use collapse_core::*;

pub mod headless;

pub use headless::*;

pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
    pub size: Size,
    transform: Transform,
    stack: Vec<Transform>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Rect {
        bounds: Bounds,
        color: Color,
        transform: Transform,
    },
    Text {
        text: String,
        origin: Vec2,
        style: TextStyle,
        transform: Transform,
    },
    Raster {
        id: RasterId,
        width: u32,
        height: u32,
        origin: Vec2,
        transform: Transform,
    },
    Path {
        points: Vec<Vec2>,
        fill_type: FillType,
        color: Color,
        transform: Transform,
    },
}

impl DrawCommand {
    pub fn transform(&self) -> Transform {
        match self {
            DrawCommand::Rect { transform, .. }
            | DrawCommand::Text { transform, .. }
            | DrawCommand::Raster { transform, .. }
            | DrawCommand::Path { transform, .. } => *transform,
        }
    }
}

impl RecordingCanvas {
    pub fn new(size: Size) -> Self {
        Self {
            commands: Vec::new(),
            size,
            transform: Transform::identity(),
            stack: Vec::new(),
        }
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn save_count(&self) -> usize {
        self.stack.len()
    }

    /// Drops recorded commands; the transform stack is left alone.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Transform, Vec2)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text {
                text,
                origin,
                transform,
                ..
            } => Some((text.as_str(), *transform, *origin)),
            _ => None,
        })
    }

    pub fn rasters(&self) -> impl Iterator<Item = (RasterId, Transform, Vec2)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Raster {
                id,
                origin,
                transform,
                ..
            } => Some((*id, *transform, *origin)),
            _ => None,
        })
    }

    pub fn paths(&self) -> impl Iterator<Item = (&[Vec2], Color, Transform)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Path {
                points,
                color,
                transform,
                ..
            } => Some((points.as_slice(), *color, *transform)),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = (Bounds, Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Rect { bounds, color, .. } => Some((*bounds, *color)),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn save(&mut self) -> usize {
        let depth = self.stack.len();
        self.stack.push(self.transform);
        depth
    }

    fn restore_to_count(&mut self, count: usize) {
        while self.stack.len() > count {
            if let Some(t) = self.stack.pop() {
                self.transform = t;
            }
        }
    }

    fn scale(&mut self, sx: f32, sy: f32, pivot: Vec2) {
        self.transform = self.transform.then_scale_about(sx, sy, pivot);
    }

    fn draw_text(&mut self, text: &str, origin: Vec2, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            origin,
            style: style.clone(),
            transform: self.transform,
        });
    }

    fn draw_raster(&mut self, raster: &Raster, origin: Vec2) {
        self.commands.push(DrawCommand::Raster {
            id: raster.id(),
            width: raster.width,
            height: raster.height,
            origin,
            transform: self.transform,
        });
    }

    fn draw_path(&mut self, path: &Path, color: Color) {
        self.commands.push(DrawCommand::Path {
            points: path.points().collect(),
            fill_type: path.fill_type(),
            color,
            transform: self.transform,
        });
    }

    fn draw_rect(&mut self, bounds: Bounds, color: Color) {
        self.commands.push(DrawCommand::Rect {
            bounds,
            color,
            transform: self.transform,
        });
    }
}
