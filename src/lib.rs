pub mod canvas;
pub mod cli;
pub mod core;
pub mod editor;
pub mod export;
pub mod math;
pub mod mesh;
pub mod ui;

pub use canvas::Canvas;
pub use editor::{Command, Dimension, Editor};
pub use export::{pack, PackedBitmap};
pub use mesh::{GridMesh, Vertex};
