use glam::Vec2;

/// Map a device-space point to the (row, col) of the cell under it.
///
/// Uses floor semantics, so points left of or above `origin` produce negative
/// indices. Callers bounds-check before indexing.
pub fn device_to_cell(point: Vec2, origin: Vec2, cell_extent: f32) -> (i32, i32) {
    let rel = point - origin;
    (
        (rel.y / cell_extent).floor() as i32,
        (rel.x / cell_extent).floor() as i32,
    )
}
