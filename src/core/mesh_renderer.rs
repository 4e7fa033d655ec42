use wgpu::util::DeviceExt;
use wgpu::{Buffer, Device, RenderPipeline};

use crate::mesh::{GridMesh, Vertex};

const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRIBUTES,
    }
}

/// GPU copy of a `GridMesh`. Empty parts of the mesh have no buffer.
#[derive(Default)]
struct MeshBuffers {
    lines: Option<Buffer>,
    line_count: u32,
    cells: Option<Buffer>,
    cell_indices: Option<Buffer>,
    index_count: u32,
}

/// Draws grid lines as a line list, then filled cells as indexed triangles
pub struct MeshRenderer {
    line_pipeline: RenderPipeline,
    cell_pipeline: RenderPipeline,
    buffers: MeshBuffers,
}

impl MeshRenderer {
    pub fn new(device: &Device, surface_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Grid Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../grid.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Grid Pipeline Layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        let line_pipeline = Self::create_pipeline(
            device,
            &pipeline_layout,
            &shader,
            surface_format,
            wgpu::PrimitiveTopology::LineList,
            "Grid Line Pipeline",
        );
        let cell_pipeline = Self::create_pipeline(
            device,
            &pipeline_layout,
            &shader,
            surface_format,
            wgpu::PrimitiveTopology::TriangleList,
            "Cell Pipeline",
        );

        Self {
            line_pipeline,
            cell_pipeline,
            buffers: MeshBuffers::default(),
        }
    }

    /// Replace the GPU buffers with the contents of `mesh`
    pub fn upload(&mut self, device: &Device, mesh: &GridMesh) {
        let create = |label: &str, contents: &[u8], usage: wgpu::BufferUsages| {
            (!contents.is_empty()).then(|| {
                device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(label),
                    contents,
                    usage,
                })
            })
        };

        self.buffers = MeshBuffers {
            lines: create(
                "Grid Line Buffer",
                bytemuck::cast_slice(mesh.line_vertices()),
                wgpu::BufferUsages::VERTEX,
            ),
            line_count: mesh.line_vertices().len() as u32,
            cells: create(
                "Cell Vertex Buffer",
                bytemuck::cast_slice(mesh.cell_vertices()),
                wgpu::BufferUsages::VERTEX,
            ),
            cell_indices: create(
                "Cell Index Buffer",
                bytemuck::cast_slice(mesh.cell_indices()),
                wgpu::BufferUsages::INDEX,
            ),
            index_count: mesh.cell_indices().len() as u32,
        };
    }

    /// Record draw calls; the caller sets the viewport and owns the pass
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        if let Some(lines) = &self.buffers.lines {
            render_pass.set_pipeline(&self.line_pipeline);
            render_pass.set_vertex_buffer(0, lines.slice(..));
            render_pass.draw(0..self.buffers.line_count, 0..1);
        }

        if let (Some(cells), Some(indices)) = (&self.buffers.cells, &self.buffers.cell_indices) {
            render_pass.set_pipeline(&self.cell_pipeline);
            render_pass.set_vertex_buffer(0, cells.slice(..));
            render_pass.set_index_buffer(indices.slice(..), wgpu::IndexFormat::Uint32);
            render_pass.draw_indexed(0..self.buffers.index_count, 0, 0..1);
        }
    }

    fn create_pipeline(
        device: &Device,
        layout: &wgpu::PipelineLayout,
        shader: &wgpu::ShaderModule,
        surface_format: wgpu::TextureFormat,
        topology: wgpu::PrimitiveTopology,
        label: &str,
    ) -> RenderPipeline {
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[vertex_layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_stride_matches_attribute() {
        let layout = vertex_layout();
        assert_eq!(layout.array_stride, 12);
        assert_eq!(layout.attributes[0].format.size(), layout.array_stride);
    }
}
