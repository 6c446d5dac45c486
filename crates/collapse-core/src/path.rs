use smallvec::SmallVec;

use crate::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    MoveTo(Vec2),
    LineTo(Vec2),
    Close,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillType {
    #[default]
    Winding,
    EvenOdd,
}

/// Small polygon path. Shapes drawn by the title (the arrow) have a handful of
/// segments, so they stay inline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    segments: SmallVec<[PathSegment; 4]>,
    fill_type: FillType,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears segments but keeps the allocation, like `Path::rewind`.
    pub fn rewind(&mut self) {
        self.segments.clear();
    }

    pub fn set_fill_type(&mut self, fill_type: FillType) {
        self.fill_type = fill_type;
    }

    pub fn fill_type(&self) -> FillType {
        self.fill_type
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.segments.push(PathSegment::MoveTo(Vec2::new(x, y)));
    }

    pub fn line_to(&mut self, x: f32, y: f32) {
        self.segments.push(PathSegment::LineTo(Vec2::new(x, y)));
    }

    pub fn close(&mut self) {
        self.segments.push(PathSegment::Close);
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Vertices in order, skipping `Close`.
    pub fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.segments.iter().filter_map(|s| match s {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => Some(*p),
            PathSegment::Close => None,
        })
    }
}
