use glam::{Vec2, Vec3};

/// Device-space drawing area the canvas is rendered into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Map a device point (y down) to normalized device coordinates (y up).
    ///
    /// The viewport center maps to the origin and the edges to ±1. Points
    /// outside the viewport are not clamped.
    pub fn normalize(&self, point: Vec2) -> Vec3 {
        let half = Vec2::new(self.width, self.height) * 0.5;
        Vec3::new(
            (point.x - half.x) / half.x,
            -(point.y - half.y) / half.y,
            0.0,
        )
    }
}
