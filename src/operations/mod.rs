pub mod decompose;

pub use decompose::{ComputeBoundary, ComputeRegions};
