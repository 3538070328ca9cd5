//! Basic value types shared across the crate

mod color;
mod handle;
mod line_weight;
mod transparency;
mod vector;
mod version;

pub use color::Color;
pub use handle::Handle;
pub use line_weight::LineWeight;
pub use transparency::Transparency;
pub use vector::{Vector2, Vector3};
pub use version::DxfVersion;
