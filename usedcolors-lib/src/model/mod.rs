//! Color model

mod appearance;
mod color;
mod record;
mod variant;

pub use appearance::*;
pub use color::*;
pub use record::*;
pub use variant::*;
