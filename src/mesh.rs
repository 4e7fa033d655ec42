use glam::Vec2;

use crate::canvas::Canvas;
use crate::math::Viewport;

/// Vertex data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

/// Geometry derived from a canvas: grid lines and one quad per filled cell.
///
/// Always rebuilt from scratch; nothing is patched incrementally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridMesh {
    /// Endpoint pairs, drawn as a line list
    lines: Vec<Vertex>,
    /// Four corners per filled cell: top-right, bottom-right, bottom-left, top-left
    cells: Vec<Vertex>,
    /// Two triangles per filled cell
    cell_indices: Vec<u32>,
}

impl GridMesh {
    pub fn build(canvas: &Canvas, viewport: &Viewport) -> Self {
        let mut mesh = Self::default();
        mesh.rebuild(canvas, viewport);
        mesh
    }

    /// Replace both buffers with geometry for the current canvas state
    pub fn rebuild(&mut self, canvas: &Canvas, viewport: &Viewport) {
        self.lines.clear();
        self.cells.clear();
        self.cell_indices.clear();

        let (width, height) = canvas.dimensions();
        if width == 0 || height == 0 {
            return;
        }

        let origin = canvas.origin();
        let step = canvas.cell_extent();
        let extent = canvas.extent();
        let vertex = |p: Vec2| Vertex {
            position: viewport.normalize(p).to_array(),
        };

        self.lines.reserve(2 * (width as usize + height as usize + 2));

        // Verticals, left to right
        for col in 0..=width {
            let x = origin.x + col as f32 * step;
            self.lines.push(vertex(Vec2::new(x, origin.y)));
            self.lines.push(vertex(Vec2::new(x, origin.y + extent.y)));
        }

        // Horizontals, top to bottom
        for row in 0..=height {
            let y = origin.y + row as f32 * step;
            self.lines.push(vertex(Vec2::new(origin.x, y)));
            self.lines.push(vertex(Vec2::new(origin.x + extent.x, y)));
        }

        let mut offset = 0u32;
        for row in 0..height {
            for col in 0..width {
                if !canvas.pixels()[row as usize * width as usize + col as usize] {
                    continue;
                }

                let left = origin.x + col as f32 * step;
                let top = origin.y + row as f32 * step;
                let (right, bottom) = (left + step, top + step);

                self.cells.extend([
                    vertex(Vec2::new(right, top)),
                    vertex(Vec2::new(right, bottom)),
                    vertex(Vec2::new(left, bottom)),
                    vertex(Vec2::new(left, top)),
                ]);
                self.cell_indices.extend([
                    offset,
                    offset + 1,
                    offset + 3,
                    offset + 1,
                    offset + 2,
                    offset + 3,
                ]);

                offset += 4;
            }
        }
    }

    pub fn line_vertices(&self) -> &[Vertex] {
        &self.lines
    }

    pub fn cell_vertices(&self) -> &[Vertex] {
        &self.cells
    }

    pub fn cell_indices(&self) -> &[u32] {
        &self.cell_indices
    }

    /// Line buffer as flat xyz triples
    pub fn line_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.lines)
    }

    /// Cell vertex buffer as flat xyz triples
    pub fn cell_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.cells)
    }

    pub fn quad_count(&self) -> usize {
        self.cells.len() / 4
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.cells.is_empty()
    }
}
