pub mod closed_curve;
pub mod ring;

pub use closed_curve::ClosedCurve;
pub use ring::Ring;
