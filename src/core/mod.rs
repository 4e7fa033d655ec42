pub mod clipboard;
pub mod controller;
pub mod gpu_context;
pub mod input_adapter;
pub mod input_router;
pub mod mesh_renderer;

pub use clipboard::*;
pub use controller::*;
pub use gpu_context::*;
pub use input_adapter::*;
pub use input_router::*;
pub use mesh_renderer::*;
