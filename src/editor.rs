use log::{debug, info, warn};

use crate::canvas::Canvas;
use crate::core::{ClipboardSink, InputEvent, InputRouter};
use crate::export::{self, PackedBitmap};
use crate::math::Viewport;
use crate::mesh::GridMesh;

/// Canvas axis controlled by a slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Width,
    Height,
}

/// Requests from the control panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Clear,
    Export,
    Resize(Dimension, u32),
}

/// Owns the canvas and everything derived from it.
///
/// Every geometry-affecting mutation goes through here and is followed by
/// a mesh rebuild, so `mesh()` is always current when a frame is drawn.
pub struct Editor {
    canvas: Canvas,
    viewport: Viewport,
    mesh: GridMesh,
    router: InputRouter,
    export_text: String,
    clipboard: Option<Box<dyn ClipboardSink>>,
}

impl Editor {
    pub fn new(canvas: Canvas, viewport: Viewport) -> Self {
        let mesh = GridMesh::build(&canvas, &viewport);
        Self {
            canvas,
            viewport,
            mesh,
            router: InputRouter::new(),
            export_text: String::new(),
            clipboard: None,
        }
    }

    /// Also copy exports to this sink
    pub fn with_clipboard(mut self, clipboard: Box<dyn ClipboardSink>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn mesh(&self) -> &GridMesh {
        &self.mesh
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn router(&self) -> &InputRouter {
        &self.router
    }

    /// Text of the most recent export
    pub fn export_text(&self) -> &str {
        &self.export_text
    }

    /// Route a pointer/wheel event. Returns true if a redraw is needed.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        let changed = self.router.handle(&mut self.canvas, event);
        if changed {
            self.rebuild_mesh();
        }
        changed
    }

    /// Apply a panel command. Returns true if a redraw is needed.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Clear => self.clear(),
            Command::Resize(dimension, value) => self.resize(dimension, value),
            Command::Export => {
                self.export();
            }
        }
        true
    }

    pub fn clear(&mut self) {
        self.canvas.clear();
        self.rebuild_mesh();
    }

    pub fn resize(&mut self, dimension: Dimension, value: u32) {
        match dimension {
            Dimension::Width => self.canvas.resize(Some(value), None),
            Dimension::Height => self.canvas.resize(None, Some(value)),
        }
        let (width, height) = self.canvas.dimensions();
        info!("Canvas resized to {}x{}", width, height);
        self.rebuild_mesh();
    }

    /// Pack the bitmap, store the text for display and copy it to the
    /// clipboard. Clipboard failures are logged, never returned.
    pub fn export(&mut self) -> PackedBitmap {
        let packed = export::pack(&self.canvas);
        self.export_text = packed.to_string();
        info!("Exported {} bytes", packed.byte_count());

        if let Some(clipboard) = self.clipboard.as_mut() {
            if let Err(e) = clipboard.set_text(&self.export_text) {
                warn!("{:#}", e);
            }
        }

        packed
    }

    fn rebuild_mesh(&mut self) {
        self.mesh.rebuild(&self.canvas, &self.viewport);
        debug!(
            "Mesh rebuilt: {} line vertices, {} quads",
            self.mesh.line_vertices().len(),
            self.mesh.quad_count()
        );
    }
}
