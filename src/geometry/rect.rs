use glam::Vec2;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Vec2::ZERO,
        size: Vec2::ZERO,
    };

    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    /// Same size, origin moved by `offset`.
    pub fn translate(&self, offset: Vec2) -> Self {
        Self::new(self.origin + offset, self.size)
    }

    /// A frame is measurable once it has a finite, non-negative size.
    pub fn is_measurable(&self) -> bool {
        self.origin.is_finite() && self.size.is_finite() && self.size.cmpge(Vec2::ZERO).all()
    }
}
