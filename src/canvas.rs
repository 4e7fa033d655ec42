use glam::Vec2;

use crate::math::device_to_cell;

pub const DEFAULT_WIDTH: u32 = 32;
pub const DEFAULT_HEIGHT: u32 = 32;
pub const MIN_DIMENSION: u32 = 8;
pub const MAX_DIMENSION: u32 = 128;
/// Slider granularity for width/height
pub const DIMENSION_STEP: u32 = 8;

pub const DEFAULT_CELL_SIZE: f32 = 4.0;
pub const DEFAULT_SCALE: f32 = 2.0;
pub const MIN_SCALE: f32 = 1.0;
pub const MAX_SCALE: f32 = 5.0;
/// Scale change per unit of wheel delta
pub const ZOOM_STEP: f32 = 0.1;

pub const DEFAULT_ORIGIN: Vec2 = Vec2::new(50.0, 50.0);

/// Round to the nearest multiple of `DIMENSION_STEP`, then clamp to the
/// slider range
pub fn snap_dimension(value: u32) -> u32 {
    let snapped = value.saturating_add(DIMENSION_STEP / 2) / DIMENSION_STEP * DIMENSION_STEP;
    snapped.clamp(MIN_DIMENSION, MAX_DIMENSION)
}

/// Number of cells in a `width` x `height` canvas, computed without `u32` overflow
fn cell_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

/// Single-frame monochrome bitmap plus the pan/zoom state used to place it
/// on screen.
///
/// `pixels` is row-major (`row * width + col`) and always holds exactly
/// `width * height` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<bool>,
    cell_size: f32,
    scale: f32,
    origin: Vec2,
}

impl Canvas {
    /// Create a blank canvas. Dimensions are taken as given; only `resize`
    /// clamps them to the slider range.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; cell_count(width, height)],
            cell_size: DEFAULT_CELL_SIZE,
            scale: DEFAULT_SCALE,
            origin: DEFAULT_ORIGIN,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Device-space top-left corner of the canvas
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// On-screen size of one cell (cell size times zoom)
    pub fn cell_extent(&self) -> f32 {
        self.cell_size * self.scale
    }

    /// On-screen size of the whole canvas
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32) * self.cell_extent()
    }

    pub fn filled_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }

    fn index(&self, row: u32, col: u32) -> Option<usize> {
        if row < self.height && col < self.width {
            Some(row as usize * self.width as usize + col as usize)
        } else {
            None
        }
    }

    /// Cell value, or `None` when out of range
    pub fn get(&self, row: u32, col: u32) -> Option<bool> {
        self.index(row, col).map(|idx| self.pixels[idx])
    }

    /// Set a cell. Returns true if the stored value changed; out-of-range
    /// coordinates are ignored.
    pub fn paint(&mut self, row: u32, col: u32) -> bool {
        self.set(row, col, true)
    }

    /// Clear a cell. Same bounds handling as `paint`.
    pub fn erase(&mut self, row: u32, col: u32) -> bool {
        self.set(row, col, false)
    }

    fn set(&mut self, row: u32, col: u32, value: bool) -> bool {
        match self.index(row, col) {
            Some(idx) if self.pixels[idx] != value => {
                self.pixels[idx] = value;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.pixels.fill(false);
    }

    /// Change one dimension. When both are given width wins, matching the
    /// slider callbacks which only ever send one. The value is snapped to
    /// the slider grid, so rows always hold whole bytes.
    ///
    /// The pixel vector is truncated or extended in place without
    /// remapping, so existing bits are reinterpreted under the new row
    /// width.
    pub fn resize(&mut self, width: Option<u32>, height: Option<u32>) {
        if let Some(width) = width {
            self.width = snap_dimension(width);
        } else if let Some(height) = height {
            self.height = snap_dimension(height);
        }
        self.pixels.resize(cell_count(self.width, self.height), false);
    }

    /// Move the canvas origin. Unbounded; the canvas may leave the screen.
    pub fn pan(&mut self, delta: Vec2) {
        self.origin += delta;
    }

    /// Adjust zoom by `delta * ZOOM_STEP`, clamped to `[MIN_SCALE, MAX_SCALE]`
    pub fn zoom(&mut self, delta: f32) {
        self.set_scale(self.scale + delta * ZOOM_STEP);
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Cell under a device point, if the point lies strictly inside the
    /// canvas rectangle.
    pub fn cell_at(&self, point: Vec2) -> Option<(u32, u32)> {
        let max = self.origin + self.extent();
        let inside = point.x > self.origin.x
            && point.x < max.x
            && point.y > self.origin.y
            && point.y < max.y;
        if !inside {
            return None;
        }

        let (row, col) = device_to_cell(point, self.origin, self.cell_extent());
        let (row, col) = (u32::try_from(row).ok()?, u32::try_from(col).ok()?);
        self.index(row, col).map(|_| (row, col))
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_defaults() {
        let canvas = Canvas::default();
        assert_eq!(canvas.dimensions(), (32, 32));
        assert_eq!(canvas.pixels().len(), 32 * 32);
        assert_eq!(canvas.cell_size(), 4.0);
        assert_eq!(canvas.scale(), 2.0);
        assert_eq!(canvas.origin(), Vec2::new(50.0, 50.0));
        assert_eq!(canvas.filled_count(), 0);
    }

    #[test]
    fn paint_reports_change() {
        let mut canvas = Canvas::new(8, 8);
        assert!(canvas.paint(1, 2));
        assert!(!canvas.paint(1, 2));
        assert!(canvas.pixels()[8 + 2]);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut canvas = Canvas::new(8, 8);
        assert!(!canvas.paint(8, 0));
        assert!(!canvas.paint(0, 8));
        assert!(!canvas.erase(100, 100));
        assert_eq!(canvas.get(8, 0), None);
        assert_eq!(canvas.filled_count(), 0);
    }

    #[test]
    fn resize_width_wins() {
        let mut canvas = Canvas::new(16, 16);
        canvas.resize(Some(24), Some(40));
        assert_eq!(canvas.dimensions(), (24, 16));
        assert_eq!(canvas.pixels().len(), 24 * 16);
    }

    #[test]
    fn resize_clamps() {
        let mut canvas = Canvas::new(16, 16);
        canvas.resize(Some(4), None);
        assert_eq!(canvas.width(), MIN_DIMENSION);
        canvas.resize(None, Some(1000));
        assert_eq!(canvas.height(), MAX_DIMENSION);
    }

    #[test]
    fn resize_snaps_to_step() {
        let mut canvas = Canvas::default();
        canvas.resize(Some(20), None);
        assert_eq!(canvas.width(), 24);
        canvas.resize(Some(19), None);
        assert_eq!(canvas.width(), 16);
        canvas.resize(None, Some(125));
        assert_eq!(canvas.height(), 128);
        assert_eq!(canvas.pixels().len(), 16 * 128);
    }

    #[test]
    fn snap_dimension_stays_in_range() {
        assert_eq!(snap_dimension(0), MIN_DIMENSION);
        assert_eq!(snap_dimension(3), MIN_DIMENSION);
        assert_eq!(snap_dimension(12), 16);
        assert_eq!(snap_dimension(u32::MAX), MAX_DIMENSION);
        for value in MIN_DIMENSION..=MAX_DIMENSION {
            assert_eq!(snap_dimension(value) % DIMENSION_STEP, 0);
        }
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn cell_count_does_not_wrap() {
        assert_eq!(cell_count(1 << 16, 1 << 16), 1usize << 32);
        assert_eq!(cell_count(u32::MAX, 2), u32::MAX as usize * 2);
    }

    #[test]
    fn cell_at_uses_strict_bounds() {
        let canvas = Canvas::new(8, 8);
        // origin (50, 50), cell extent 8, canvas spans 50..114
        assert_eq!(canvas.cell_at(Vec2::new(50.0, 60.0)), None);
        assert_eq!(canvas.cell_at(Vec2::new(114.0, 60.0)), None);
        assert_eq!(canvas.cell_at(Vec2::new(51.0, 51.0)), Some((0, 0)));
        assert_eq!(canvas.cell_at(Vec2::new(113.0, 113.0)), Some((7, 7)));
        assert_eq!(canvas.cell_at(Vec2::new(70.0, 90.0)), Some((5, 2)));
    }
}
