use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use log::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use oled_bitmap::cli::Cli;
use oled_bitmap::core::{GpuContext, InputEvent, MeshRenderer, SystemClipboard, WinitController};
use oled_bitmap::math::Viewport;
use oled_bitmap::ui::{ControlPanel, PANEL_WIDTH};
use oled_bitmap::Editor;

// === Constants ===

const WINDOW_WIDTH: f32 = 1280.0;
const WINDOW_HEIGHT: f32 = 720.0;
/// Canvas drawing area: the window minus the control panel
const CANVAS_VIEWPORT: Viewport = Viewport::new(WINDOW_WIDTH - PANEL_WIDTH, WINDOW_HEIGHT);

// === Rendering System ===

/// Draws the canvas mesh into the left viewport and the egui panel on top
struct Renderer {
    gpu: GpuContext,
    meshes: MeshRenderer,
    mesh_dirty: bool,
    panel: ControlPanel,
    egui_renderer: egui_wgpu::Renderer,
    egui_state: egui_winit::State,
    egui_ctx: egui::Context,
}

impl Renderer {
    async fn new(window: Arc<Window>, editor: &Editor) -> Result<Self> {
        let gpu = GpuContext::new(window.clone()).await?;
        let meshes = MeshRenderer::new(gpu.device(), gpu.format());

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            gpu.device(),
            gpu.format(),
            egui_wgpu::RendererOptions::default(),
        );

        Ok(Self {
            gpu,
            meshes,
            mesh_dirty: true,
            panel: ControlPanel::new(editor.canvas()),
            egui_renderer,
            egui_state,
            egui_ctx,
        })
    }

    fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> egui_winit::EventResponse {
        self.egui_state.on_window_event(window, event)
    }

    fn invalidate_mesh(&mut self) {
        self.mesh_dirty = true;
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    /// Render one frame. Returns true if another frame should follow.
    fn render(
        &mut self,
        window: &Window,
        editor: &mut Editor,
    ) -> std::result::Result<bool, wgpu::SurfaceError> {
        let output = self.gpu.surface().get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Panel first, so its commands are reflected in this frame's mesh
        let raw_input = self.egui_state.take_egui_input(window);
        let panel = &mut self.panel;
        let export_text = editor.export_text();
        let mut commands = Vec::new();
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            commands = panel.show(ctx, export_text);
        });

        let applied = !commands.is_empty();
        for command in commands {
            editor.apply(command);
        }
        if applied || self.mesh_dirty {
            self.meshes.upload(self.gpu.device(), editor.mesh());
            self.mesh_dirty = false;
        }

        self.egui_state
            .handle_platform_output(window, full_output.platform_output);

        let tris = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(self.gpu.device(), self.gpu.queue(), *id, image_delta);
        }

        let (width, height) = self.gpu.size();
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let mut encoder = self
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Encoder"),
            });

        let callback_buffers = self.egui_renderer.update_buffers(
            self.gpu.device(),
            self.gpu.queue(),
            &mut encoder,
            &tris,
            &screen_descriptor,
        );

        // Canvas pass - grid and filled cells
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Canvas Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::WHITE),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            let pixels_per_point = full_output.pixels_per_point;
            let viewport_width = (CANVAS_VIEWPORT.width * pixels_per_point).min(width as f32);
            let viewport_height = (CANVAS_VIEWPORT.height * pixels_per_point).min(height as f32);
            render_pass.set_viewport(0.0, 0.0, viewport_width, viewport_height, 0.0, 1.0);
            self.meshes.draw(&mut render_pass);
        }

        // egui pass - control panel overlay
        {
            let mut render_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    occlusion_query_set: None,
                    timestamp_writes: None,
                })
                .forget_lifetime();

            self.egui_renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        self.gpu.queue().submit(
            callback_buffers
                .into_iter()
                .chain(std::iter::once(encoder.finish())),
        );
        output.present();

        let egui_repaint = full_output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .is_some_and(|v| v.repaint_delay.is_zero());

        Ok(applied || egui_repaint)
    }
}

// === Application ===

struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    editor: Editor,
    controller: WinitController,
}

impl App {
    fn new(editor: Editor) -> Self {
        Self {
            window: None,
            renderer: None,
            editor,
            controller: WinitController::default(),
        }
    }

    /// Forward pointer input to the editor. Events egui consumed still
    /// update the button mask, but only releases reach the editor so a
    /// drag ending over the panel does not leave a button held.
    fn route_input(&mut self, event: &WindowEvent, consumed: bool) {
        let Some(input) = self.controller.process_event(event) else {
            return;
        };

        let is_release = matches!(
            event,
            WindowEvent::MouseInput {
                state: ElementState::Released,
                ..
            }
        );
        if consumed && !(is_release && matches!(input, InputEvent::Buttons(_))) {
            return;
        }

        if self.editor.handle_input(input) {
            if let Some(renderer) = &mut self.renderer {
                renderer.invalidate_mesh();
            }
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn redraw(&mut self) {
        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };

        match renderer.render(window, &mut self.editor) {
            Ok(true) => window.request_redraw(),
            Ok(false) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                renderer.gpu.reconfigure();
                window.request_redraw();
            }
            Err(e) => error!("Render error: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("OLED Bitmap Generator")
                .with_resizable(false)
                .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT)),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(Renderer::new(window.clone(), &self.editor)) {
            Ok(r) => r,
            Err(e) => {
                error!("Failed to initialize renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        self.controller.set_scale_factor(window.scale_factor());
        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui see the event first
        let mut consumed = false;
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            let response = renderer.handle_event(window, &event);
            if response.repaint {
                window.request_redraw();
            }
            consumed = response.consumed;
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => self.route_input(&event, consumed),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let canvas = cli.canvas();
    info!(
        "Starting with {}x{} canvas at scale {:.1}",
        canvas.width(),
        canvas.height(),
        canvas.scale()
    );

    let mut editor = Editor::new(canvas, CANVAS_VIEWPORT);
    if !cli.no_clipboard {
        match SystemClipboard::new() {
            Ok(clipboard) => editor = editor.with_clipboard(Box::new(clipboard)),
            Err(e) => warn!("{:#}; exports will only appear in the panel", e),
        }
    }

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    let mut app = App::new(editor);

    info!("Left drag paints, right drag erases, middle drag pans, wheel zooms");
    event_loop.run_app(&mut app)?;

    Ok(())
}
