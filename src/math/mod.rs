mod grid;
mod viewport;

pub use grid::device_to_cell;
pub use viewport::Viewport;
