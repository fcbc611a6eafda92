pub mod diagram;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;
pub mod topology;

pub use diagram::Diagram;
pub use error::{KnodiaError, Result};
